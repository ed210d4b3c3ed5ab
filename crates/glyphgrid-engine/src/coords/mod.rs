//! Coordinate and geometry types shared by the layout session and tooling.
//!
//! Two spaces:
//! - Pixels (`Vec2`), origin top-left, +X right, +Y down
//! - Grid cells (`CellPoint`, `CellRect`), one cell = `CellSize` pixels
//!
//! `CellSize` converts between them.

mod cell;
mod color;
mod rect;
mod vec2;

pub use cell::{CellPoint, CellSize};
pub use color::Rgb;
pub use rect::CellRect;
pub use vec2::Vec2;
