//! glyphgrid UI: a layout session on top of `glyphgrid-layout`.
//!
//! [`Layout`] owns the parsed entity table and the geometry it is shown
//! with; [`InteractionContext`] turns pointer and key input into selection
//! changes and field edits.
//!
//! # Quick start
//!
//! ```rust
//! use glyphgrid_engine::coords::Vec2;
//! use glyphgrid_engine::input::{Key, MouseButton, PointerSignal};
//! use glyphgrid_ui::{InteractionContext, Layout, NoHooks};
//!
//! let mut layout = Layout::from_source("[name  ]", None, &mut NoHooks).unwrap();
//! let mut ctx = InteractionContext::new();
//!
//! // Without a config, pointer positions are cell coordinates.
//! ctx.route_pointer(&layout, PointerSignal::press(MouseButton::Left, Vec2::new(2.0, 0.0)));
//! ctx.route_key(&mut layout, Key::Char('!'));
//! assert_eq!(layout.entity("name").unwrap().str("text"), Some("!"));
//! ```

pub mod event;
pub mod field;
pub mod interaction;
pub mod layout;

pub use event::EventResult;
pub use interaction::InteractionContext;
pub use layout::{Layout, LayoutHooks, NoHooks};
