//! Heuristic source analysis for completion and hover.
//!
//! Files are usually half-typed at the cursor, so this works on raw text
//! instead of the parser: the grid is every line before the first property
//! line, and a property line is classified by where the cursor sits relative
//! to its `->`, `,` and `=`.

use glyphgrid_layout::props::ARROW;
use tower_lsp::lsp_types::Position;

// ── Context kind ──────────────────────────────────────────────────────────────

/// What the cursor is positioned inside, used to drive completions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// Inside the ASCII-art grid.
    Grid,
    /// Start of a property line, before `->`: an entity id is expected.
    EntityId,
    /// After `->`, on a key position.
    Key { entity: String },
    /// After the `=` of a `key=value` pair.
    Value { entity: String, key: String },
}

// ── word_at ───────────────────────────────────────────────────────────────────

/// Extract the identifier (or partial identifier) that contains or immediately
/// precedes the cursor column.
///
/// Returns a sub-slice of the line, so the lifetime is tied to `text`.
pub fn word_at<'t>(text: &'t str, pos: &Position) -> Option<&'t str> {
    let line = text.lines().nth(pos.line as usize)?;
    let col = (pos.character as usize).min(line.len());
    if !line.is_char_boundary(col) {
        return None;
    }

    let start = line[..col]
        .char_indices()
        .rfind(|&(_, c)| !is_word_char(c))
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);

    let end = col
        + line[col..]
            .find(|c: char| !is_word_char(c))
            .unwrap_or(line.len() - col);

    if start < end {
        Some(&line[start..end])
    } else {
        None
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

// ── Sections ──────────────────────────────────────────────────────────────────

/// Index of the first property line, if any.
pub fn property_start(text: &str) -> Option<usize> {
    text.lines().position(|l| l.contains(ARROW))
}

/// `true` if `line_idx` is part of the grid section.
pub fn in_grid(text: &str, line_idx: usize) -> bool {
    property_start(text).is_none_or(|start| line_idx < start)
}

// ── completion_context ────────────────────────────────────────────────────────

/// Classify the cursor position for completion.
pub fn completion_context(text: &str, pos: &Position) -> Context {
    let line_idx = pos.line as usize;
    if in_grid(text, line_idx) {
        return Context::Grid;
    }

    let current_line = text.lines().nth(line_idx).unwrap_or("");
    let col = (pos.character as usize).min(current_line.len());
    let before_cursor = current_line.get(..col).unwrap_or(current_line);

    let Some((entity, rest)) = before_cursor.split_once(ARROW) else {
        return Context::EntityId;
    };
    let entity = entity.trim().to_string();
    let pair = rest.rsplit(',').next().unwrap_or(rest);
    match pair.split_once('=') {
        Some((key, _)) => Context::Value { entity, key: key.trim().to_string() },
        None => Context::Key { entity },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SRC: &str = "\
+-main--+
|[name] |
+-------+
name -> text=hi, red=
";

    fn ctx(line: u32, character: u32) -> Context {
        completion_context(SRC, &Position::new(line, character))
    }

    #[test]
    fn grid_lines_have_no_context() {
        assert_eq!(ctx(1, 3), Context::Grid);
        assert!(in_grid("[a]\n[b]", 1));
    }

    #[test]
    fn property_line_positions() {
        assert_eq!(ctx(3, 2), Context::EntityId);
        assert_eq!(ctx(3, 9), Context::Key { entity: "name".into() });
        assert_eq!(ctx(3, 14), Context::Value { entity: "name".into(), key: "text".into() });
        assert_eq!(ctx(3, 17), Context::Key { entity: "name".into() });
        assert_eq!(ctx(3, 21), Context::Value { entity: "name".into(), key: "red".into() });
    }

    #[test]
    fn lines_past_the_end_start_a_property() {
        assert_eq!(ctx(4, 0), Context::EntityId);
    }

    #[test]
    fn word_at_finds_identifiers() {
        assert_eq!(word_at(SRC, &Position::new(1, 4)), Some("name"));
        assert_eq!(word_at(SRC, &Position::new(0, 3)), Some("main"));
        assert_eq!(word_at(SRC, &Position::new(3, 5)), None);
    }

    #[test]
    fn word_at_steps_over_multibyte_glyphs() {
        // `é` is two bytes; the word starts right after it.
        assert_eq!(word_at("éab -> x=1", &Position::new(0, 3)), Some("ab"));
        assert_eq!(word_at("a→bc", &Position::new(0, 5)), Some("bc"));
        assert_eq!(word_at("é", &Position::new(0, 1)), None);
    }
}
