//! Logging utilities.
//!
//! Centralizes logger initialization. Library crates only use the `log`
//! facade; binaries call [`init_logging`] once at startup.

mod init;

pub use init::{init_logging, LoggingConfig};
