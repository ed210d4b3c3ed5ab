//! Outline walkers: trace one entity's glyphs from its marker, measure it,
//! and consume every cell that belongs to it.
//!
//! Boxes are walked right → down → left → up. The left and up legs measure
//! the rectangle a second time and must agree with the first two legs, which
//! is what rejects skewed or broken box art. Fields, panels and buttons are
//! single-row runs closed by their matching bracket.

use crate::entity::{Entity, EntityKind};
use crate::error::{Dimension, Direction, ErrorKind, ParseError};
use crate::glyph::{closer_for, is_identifier_char, BLANK, CORNER, H_EDGE, V_EDGE};
use crate::grid::Grid;

fn malformed(shape: &EntityKind, direction: Direction, row: usize, col: usize) -> ParseError {
    ParseError::at_cell(ErrorKind::MalformedShape { shape: shape.clone(), direction }, row, col)
}

fn truncated(shape: &EntityKind, dimension: Dimension, row: usize, col: usize) -> ParseError {
    ParseError::at_cell(ErrorKind::Truncated { shape: shape.clone(), dimension }, row, col)
}

fn mismatch(dimension: Dimension, row: usize, col: usize) -> ParseError {
    ParseError::at_cell(
        ErrorKind::DimensionMismatch { shape: EntityKind::Box, dimension },
        row,
        col,
    )
}

// ── Box ───────────────────────────────────────────────────────────────────

/// Walk the box whose top-left corner is at `(row, col)`.
pub fn walk_box(grid: &mut Grid, row: usize, col: usize) -> Result<Entity, ParseError> {
    let shape = EntityKind::Box;
    let mut id = String::new();
    let mut width = 1;
    let mut height = 1;

    grid.consume(row, col)?;

    // Right: top edge. Identifier glyphs on the edge spell the id.
    let mut x = col + 1;
    loop {
        if x >= grid.width() {
            return Err(truncated(&shape, Dimension::Width, row, grid.width().saturating_sub(1)));
        }
        let ch = grid.glyph(row, x)?;
        if ch == CORNER {
            width += 1;
            grid.consume(row, x)?;
            break;
        } else if is_identifier_char(ch) || ch == H_EDGE {
            if is_identifier_char(ch) {
                id.push(ch);
            }
            width += 1;
            grid.consume(row, x)?;
        } else {
            return Err(malformed(&shape, Direction::Right, row, x));
        }
        x += 1;
    }
    let right = x;

    // Down: right edge.
    let mut y = row + 1;
    loop {
        if y >= grid.height() {
            return Err(truncated(&shape, Dimension::Height, grid.height().saturating_sub(1), right));
        }
        let ch = grid.glyph(y, right)?;
        if ch == CORNER {
            height += 1;
            grid.consume(y, right)?;
            break;
        } else if ch == V_EDGE {
            height += 1;
            grid.consume(y, right)?;
        } else {
            return Err(malformed(&shape, Direction::Down, y, right));
        }
        y += 1;
    }
    let bottom = y;

    // Left: bottom edge, measured back into `rev_width`.
    let mut rev_width = 1;
    let mut x = right;
    loop {
        x = match x.checked_sub(1) {
            Some(x) => x,
            None => return Err(truncated(&shape, Dimension::Width, bottom, 0)),
        };
        let ch = grid.glyph(bottom, x)?;
        if ch == CORNER || ch == BLANK {
            rev_width += 1;
            grid.consume(bottom, x)?;
            break;
        } else if ch == H_EDGE {
            rev_width += 1;
            grid.consume(bottom, x)?;
        } else {
            return Err(malformed(&shape, Direction::Left, bottom, x));
        }
    }
    if rev_width != width {
        return Err(mismatch(Dimension::Width, bottom, x));
    }

    // Up: left edge, measured back into `rev_height`. The top-left corner was
    // consumed first, so the walk closes on a blank.
    let mut rev_height = 1;
    let mut y = bottom;
    loop {
        y = match y.checked_sub(1) {
            Some(y) => y,
            None => return Err(truncated(&shape, Dimension::Height, 0, col)),
        };
        let ch = grid.glyph(y, col)?;
        if ch == BLANK {
            rev_height += 1;
            grid.consume(y, col)?;
            break;
        } else if ch == V_EDGE {
            rev_height += 1;
            grid.consume(y, col)?;
        } else {
            return Err(malformed(&shape, Direction::Up, y, col));
        }
    }
    if rev_height != height {
        return Err(mismatch(Dimension::Height, y, col));
    }

    let mut entity = Entity::new(id, shape, col, row);
    entity.width = width;
    entity.height = height;
    Ok(entity)
}

// ── Field / Panel / Button ────────────────────────────────────────────────

/// Walk a single-row shape whose opening bracket is at `(row, col)`.
///
/// Identifier glyphs and blanks may sit between the brackets; the identifier
/// glyphs form the id. The width counts the cells after the opener up to and
/// including the closer, so `[ab]` is 3 wide.
pub fn walk_run(
    grid: &mut Grid,
    kind: EntityKind,
    row: usize,
    col: usize,
) -> Result<Entity, ParseError> {
    let Some(closer) = closer_for(&kind) else {
        return Err(malformed(&kind, Direction::Right, row, col));
    };
    let mut id = String::new();
    let mut width = 0;

    grid.consume(row, col)?;

    let mut x = col + 1;
    loop {
        if x >= grid.width() {
            return Err(truncated(&kind, Dimension::Width, row, grid.width().saturating_sub(1)));
        }
        let ch = grid.glyph(row, x)?;
        if ch == closer {
            width += 1;
            grid.consume(row, x)?;
            break;
        } else if is_identifier_char(ch) || ch == BLANK {
            if is_identifier_char(ch) {
                id.push(ch);
            }
            width += 1;
            grid.consume(row, x)?;
        } else {
            return Err(malformed(&kind, Direction::Right, row, x));
        }
        x += 1;
    }

    let mut entity = Entity::bracketed(id, kind, col, row);
    entity.width = width;
    Ok(entity)
}
