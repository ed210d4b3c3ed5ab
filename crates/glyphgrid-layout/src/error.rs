use std::fmt;

use crate::entity::EntityKind;

// ── Direction / Dimension ─────────────────────────────────────────────────

/// Direction of travel of an outline walk when it hit an unexpected glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Right => "right",
            Direction::Down  => "down",
            Direction::Left  => "left",
            Direction::Up    => "up",
        })
    }
}

/// The extent an outline walk was measuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dimension::Width  => "width",
            Dimension::Height => "height",
        })
    }
}

// ── ErrorKind ─────────────────────────────────────────────────────────────

/// Everything that can go wrong while parsing a layout.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// Grid access outside the declared dimensions.
    OutOfBounds { row: usize, col: usize },
    /// An outline walk met a glyph that does not belong to the shape.
    MalformedShape { shape: EntityKind, direction: Direction },
    /// An outline walk ran into the grid boundary before closing.
    Truncated { shape: EntityKind, dimension: Dimension },
    /// The return path of a box measured a different extent than the outbound path.
    DimensionMismatch { shape: EntityKind, dimension: Dimension },
    /// A property line has no `->` (or more than one).
    MissingProperties,
    /// An assignment is not exactly `key=value`.
    MissingValue { pair: String },
    /// A property line names an entity the grid never declared.
    UndefinedEntity(String),
    /// A geometry key (`x`, `y`, `width`, `height`) was given a value that is not a valid extent.
    InvalidGeometry { key: String, value: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::OutOfBounds { row, col } => {
                write!(f, "grid access out of bounds at row {}, column {}", row, col)
            }
            ErrorKind::MalformedShape { shape, direction } => {
                write!(f, "not a valid {} ({})", shape, direction)
            }
            ErrorKind::Truncated { shape, dimension } => {
                write!(f, "truncated {} ({})", shape, dimension)
            }
            ErrorKind::DimensionMismatch { shape, dimension } => {
                write!(f, "not a valid {} ({} mismatch)", shape, dimension)
            }
            ErrorKind::MissingProperties => f.write_str("entity id is missing properties"),
            ErrorKind::MissingValue { pair } => {
                write!(f, "property {:?} is missing a value", pair)
            }
            ErrorKind::UndefinedEntity(id) => write!(f, "entity {:?} is not defined", id),
            ErrorKind::InvalidGeometry { key, value } => {
                write!(f, "invalid {} value {:?}", key, value)
            }
        }
    }
}

// ── ParseError ────────────────────────────────────────────────────────────

/// A parse error from a layout file.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ErrorKind,
    /// 1-based source line number where the error occurred.
    pub line: usize,
    /// 1-based source column number where the error occurred.
    pub col: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, line: usize, col: usize) -> Self {
        Self { kind, line, col }
    }

    /// Error at a 0-based grid cell. Grid rows are the first lines of the source,
    /// so the cell maps straight onto a source position.
    pub(crate) fn at_cell(kind: ErrorKind, row: usize, col: usize) -> Self {
        Self::new(kind, row + 1, col + 1)
    }

    /// Error on a whole 0-based source line.
    pub(crate) fn on_line(kind: ErrorKind, line_index: usize) -> Self {
        Self::new(kind, line_index + 1, 1)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layout parse error at {}:{}: {}", self.line, self.col, self.kind)
    }
}

impl std::error::Error for ParseError {}

// ── AttributeError ────────────────────────────────────────────────────────

/// Failure of one of the `require_*` accessors on [`crate::Entity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeError {
    Missing { entity: String, key: String },
    WrongType { entity: String, key: String, expected: &'static str },
}

impl fmt::Display for AttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeError::Missing { entity, key } => {
                write!(f, "entity {:?} has no {:?} property", entity, key)
            }
            AttributeError::WrongType { entity, key, expected } => {
                write!(f, "property {:?} of entity {:?} is not a {}", key, entity, expected)
            }
        }
    }
}

impl std::error::Error for AttributeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_position_and_message() {
        let e = ParseError::at_cell(
            ErrorKind::DimensionMismatch { shape: EntityKind::Box, dimension: Dimension::Width },
            2,
            0,
        );
        assert_eq!(e.to_string(), "layout parse error at 3:1: not a valid box (width mismatch)");
    }

    #[test]
    fn display_undefined_entity() {
        let e = ParseError::on_line(ErrorKind::UndefinedEntity("ghost".into()), 4);
        assert_eq!(e.line, 5);
        assert_eq!(e.to_string(), "layout parse error at 5:1: entity \"ghost\" is not defined");
    }
}
