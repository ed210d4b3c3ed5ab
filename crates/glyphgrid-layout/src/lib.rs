//! Parser for **glyphgrid** layout files.
//!
//! A layout file draws its widgets as ASCII art in a fixed-size grid, then
//! attaches properties to them by id:
//!
//! ```text
//! +-main-------------+
//! |[name    ]  (ok)  |
//! +------------------+
//! name -> text=untitled
//! ok -> label=Save, red=0, green=128, blue=0
//! ```
//!
//! | Glyph | Entity |
//! |-------|--------|
//! | `+-…-+` / `\|` | box (rectangle; identifier glyphs on the top edge name it) |
//! | `[ … ]` | field |
//! | `{ … }` | panel |
//! | `( … )` | button |
//!
//! The crate only depends on the `log` facade so editors and language
//! tooling can use it without pulling in the rest of the workspace.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`grid`] | `Grid`, `GridDims` |
//! | [`glyph`] | glyph predicates |
//! | [`walker`] | outline walkers for each shape |
//! | [`scanner`] | `Scanner`, `parse_grid` |
//! | [`props`] | property-line grammar |
//! | [`entity`] | `Entity`, `EntityKind`, `Value`, `EntityTable` |
//! | [`error`] | `ParseError`, `ErrorKind`, `AttributeError` |
//!
//! # Quick start
//!
//! ```rust
//! use glyphgrid_layout::{parse_layout, GridDims};
//!
//! let src = "[ab]\nab -> text=hi\n";
//! let table = parse_layout(src, GridDims::new(4, 1)).unwrap();
//! assert_eq!(table.get("ab").unwrap().str("text"), Some("hi"));
//! ```

pub mod entity;
pub mod error;
pub mod glyph;
pub mod grid;
pub mod props;
pub mod scanner;
pub mod walker;

pub use entity::{Entity, EntityKind, EntityTable, Value};
pub use error::{AttributeError, Dimension, Direction, ErrorKind, ParseError};
pub use grid::{Grid, GridDims};
pub use scanner::{parse_grid, Scanner};

/// Parse a whole layout: the first `dims.height` lines are the grid, every
/// line after them is a property line.
pub fn parse_layout(src: &str, dims: GridDims) -> Result<EntityTable, ParseError> {
    let mut grid = Grid::new(dims);
    let lines: Vec<&str> = src.lines().collect();
    let taken = grid.fill_from_lines(lines.iter().copied());

    let mut table = parse_grid(&mut grid)?;
    props::parse_properties(
        &mut table,
        lines.iter().copied().enumerate().skip(taken),
    )?;
    log::debug!("parsed layout: {} entities on a {}x{} grid", table.len(), dims.width, dims.height);
    Ok(table)
}

/// [`parse_layout`] with the grid size taken from the text itself
/// (see [`GridDims::infer`]).
pub fn parse_str(src: &str) -> Result<EntityTable, ParseError> {
    parse_layout(src, GridDims::infer(src))
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str, w: usize, h: usize) -> EntityTable {
        parse_layout(src, GridDims::new(w, h)).unwrap()
    }
    fn err(src: &str, w: usize, h: usize) -> ErrorKind {
        parse_layout(src, GridDims::new(w, h)).unwrap_err().kind
    }

    const EDITOR: &str = "\
+-editor-----------------+
|[level_name   ] (save)  |
|{sprites            }   |
+------------------------+
(load)
level_name -> text=untitled
save -> label=Save, red=0, green=128, blue=0
sprites -> columns=4, type=toolbar
";

    #[test]
    fn full_layout() {
        let t = ok(EDITOR, 26, 5);
        assert_eq!(
            t.ids().collect::<Vec<_>>(),
            vec!["editor", "level_name", "save", "sprites", "load"]
        );
        let editor = t.get("editor").unwrap();
        assert_eq!((editor.x, editor.y, editor.width, editor.height), (0, 0, 26, 4));
        let save = t.get("save").unwrap();
        assert_eq!(save.kind, EntityKind::Button);
        assert_eq!((save.x, save.y, save.width, save.height), (17, 1, 5, 1));
        assert_eq!(save.require_str("label").unwrap(), "Save");
        assert_eq!(save.require_number("green").unwrap(), 128.0);
        let sprites = t.get("sprites").unwrap();
        assert_eq!(sprites.kind, EntityKind::Custom("toolbar".into()));
        assert_eq!(sprites.number("columns"), Some(4.0));
        assert_eq!(t.get("load").unwrap().y, 4);
    }

    #[test]
    fn field_at_origin() {
        let t = ok("[ab]", 4, 1);
        let e = t.get("ab").unwrap();
        assert_eq!(e.kind, EntityKind::Field);
        assert_eq!((e.x, e.y, e.width, e.height), (0, 0, 3, 1));
    }

    #[test]
    fn long_lines_are_truncated_to_the_grid() {
        // The closer sits past the grid width.
        assert_eq!(
            err("[abcdef]", 4, 1),
            ErrorKind::Truncated { shape: EntityKind::Field, dimension: Dimension::Width }
        );
    }

    #[test]
    fn empty_grid_rejects_every_property_line() {
        let t = ok("      \n      ", 6, 2);
        assert!(t.is_empty());
        assert_eq!(
            err("      \n      \nfoo -> a=1", 6, 2),
            ErrorKind::UndefinedEntity("foo".into())
        );
    }

    #[test]
    fn grid_errors_win_over_property_errors() {
        assert_eq!(
            err("[ab\nnot a property", 3, 1),
            ErrorKind::Truncated { shape: EntityKind::Field, dimension: Dimension::Width }
        );
    }

    #[test]
    fn property_errors_carry_source_lines() {
        let e = parse_layout("[a]\n\na -> x", GridDims::new(3, 1)).unwrap_err();
        assert_eq!(e.kind, ErrorKind::MissingValue { pair: "x".into() });
        assert_eq!(e.line, 3);
    }

    #[test]
    fn parse_str_infers_the_grid() {
        let t = parse_str("+a+\n+-+\na -> k=v").unwrap();
        assert_eq!(t.get("a").unwrap().str("k"), Some("v"));
    }
}
