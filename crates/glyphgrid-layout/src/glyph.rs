//! Glyph classification for the layout grid.

use crate::entity::EntityKind;

/// The glyph the grid is cleared to and that pads short lines.
pub const BLANK: char = ' ';

/// Box corner. Also the box entity marker.
pub const CORNER: char = '+';
/// Horizontal box edge.
pub const H_EDGE: char = '-';
/// Vertical box edge.
pub const V_EDGE: char = '|';

/// `true` for a glyph that starts an entity: `[`, `{`, `(` or `+`.
#[inline]
pub fn is_entity_marker(ch: char) -> bool {
    matches!(ch, '[' | '{' | '(' | '+')
}

/// `true` for ASCII letters, digits and underscore.
#[inline]
pub fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Entity kind started by a marker glyph.
pub fn marker_kind(ch: char) -> Option<EntityKind> {
    match ch {
        '+' => Some(EntityKind::Box),
        '[' => Some(EntityKind::Field),
        '{' => Some(EntityKind::Panel),
        '(' => Some(EntityKind::Button),
        _   => None,
    }
}

/// Closing glyph of a single-row shape. Boxes close on [`CORNER`].
pub fn closer_for(kind: &EntityKind) -> Option<char> {
    match kind {
        EntityKind::Field  => Some(']'),
        EntityKind::Panel  => Some('}'),
        EntityKind::Button => Some(')'),
        EntityKind::Box | EntityKind::Custom(_) => None,
    }
}
