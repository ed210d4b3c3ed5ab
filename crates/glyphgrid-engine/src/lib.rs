//! glyphgrid engine crate.
//!
//! Host-side pieces shared by the layout session and the binaries: logging
//! setup, layout configuration, cell geometry and platform-agnostic input.

pub mod config;
pub mod coords;
pub mod input;
pub mod logging;
