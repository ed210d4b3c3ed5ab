//! `glyphgrid-lsp`: diagnostics, hover and completion for layout files,
//! spoken over stdio.

use glyphgrid_engine::logging::{init_logging, LoggingConfig};
use log::info;
use tower_lsp::{LspService, Server};

mod analysis;
mod backend;
mod knowledge;

use backend::Backend;

#[tokio::main]
async fn main() {
    init_logging(LoggingConfig::for_language_server());
    info!("glyphgrid-lsp {} listening on stdio", env!("CARGO_PKG_VERSION"));

    let (service, socket) = LspService::new(Backend::new);
    Server::new(tokio::io::stdin(), tokio::io::stdout(), socket)
        .serve(service)
        .await;

    info!("glyphgrid-lsp shut down");
}
