//! Layout configuration files.

mod layout;

pub use layout::LayoutConfig;
