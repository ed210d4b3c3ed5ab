use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::{info, warn};

use glyphgrid_engine::config::LayoutConfig;
use glyphgrid_engine::logging::{init_logging, LoggingConfig};
use glyphgrid_layout::{Entity, EntityKind};
use glyphgrid_ui::field::TEXT_KEY;
use glyphgrid_ui::{Layout, LayoutHooks};

#[derive(Parser, Debug)]
#[command(name = "glyphgrid-studio")]
#[command(about = "Load a glyphgrid layout and list its entities", long_about = None)]
struct Args {
    /// Layout file: the grid followed by property lines
    layout: PathBuf,

    /// Layout config with the surface and cell size; inferred from the layout when absent
    config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig::from_verbosity(args.verbose));

    let layout_path = args.layout;
    let config = args.config.as_deref().map(LayoutConfig::load).transpose()?;
    if config.is_none() {
        warn!("no config file given; inferring the grid size from the layout");
    }

    let mut hooks = StudioHooks::default();
    let layout = Layout::load(&layout_path, config.as_ref(), &mut hooks)?;

    let dims = layout.dims();
    info!(
        "{}: {}x{} grid, {} fields",
        layout_path.display(),
        dims.width,
        dims.height,
        hooks.fields
    );
    for entity in layout.entities() {
        println!("{}", describe(entity));
    }
    Ok(())
}

// ── Hooks ─────────────────────────────────────────────────────────────────

/// Gives every field a `text` attribute and counts them.
#[derive(Default)]
struct StudioHooks {
    fields: usize,
}

impl LayoutHooks for StudioHooks {
    fn on_component_init(&mut self, entity: &mut Entity) -> Result<()> {
        if entity.kind == EntityKind::Field {
            self.fields += 1;
            if !entity.has_attr(TEXT_KEY) {
                entity.set_attr(TEXT_KEY, "");
            }
        }
        Ok(())
    }
}

// ── Output ────────────────────────────────────────────────────────────────

/// One line per entity: `id kind x,y wxh key=value, ...`.
fn describe(entity: &Entity) -> String {
    let id = if entity.id.is_empty() { "<anonymous>" } else { entity.id.as_str() };
    let attrs: Vec<String> = entity.attrs().map(|(k, v)| format!("{k}={v}")).collect();
    let line = format!(
        "{id} {} {},{} {}x{}",
        entity.kind, entity.x, entity.y, entity.width, entity.height
    );
    if attrs.is_empty() {
        line
    } else {
        format!("{line} {}", attrs.join(", "))
    }
}
