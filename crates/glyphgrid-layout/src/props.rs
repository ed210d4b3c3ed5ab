//! The property section: `ENTITY_ID -> key=value, key=value, ...`.
//!
//! Splitting is literal and not quote-aware, so values can never contain
//! `->`, `,` or `=`.

use log::trace;

use crate::entity::{EntityTable, Value};
use crate::error::{ErrorKind, ParseError};

/// Separator between the entity id and its assignments.
pub const ARROW: &str = "->";

// ── Line splitting ────────────────────────────────────────────────────────

/// Split a property line into its trimmed `(entity_id, assignments)` halves.
pub fn split_line(line: &str) -> Result<(&str, &str), ErrorKind> {
    let mut parts = line.split(ARROW);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(id), Some(rest), None) => Ok((id.trim(), rest.trim())),
        _ => Err(ErrorKind::MissingProperties),
    }
}

/// Split the assignment half into trimmed `(key, value)` pairs.
pub fn parse_assignments(text: &str) -> Result<Vec<(&str, Value)>, ErrorKind> {
    text.split(',')
        .map(|pair| {
            let mut halves = pair.split('=');
            match (halves.next(), halves.next(), halves.next()) {
                (Some(key), Some(value), None) => Ok((key.trim(), Value::parse(value.trim()))),
                _ => Err(ErrorKind::MissingValue { pair: pair.trim().to_string() }),
            }
        })
        .collect()
}

// ── Application ───────────────────────────────────────────────────────────

/// Apply one property line to the table.
pub fn apply_line(table: &mut EntityTable, line: &str) -> Result<(), ErrorKind> {
    let (id, rest) = split_line(line)?;
    // Anonymous entities live under "" but are never addressable.
    let entity = match table.get_mut(id) {
        Some(entity) if !id.is_empty() => entity,
        _ => return Err(ErrorKind::UndefinedEntity(id.to_string())),
    };
    for (key, value) in parse_assignments(rest)? {
        trace!("{}.{} = {:?}", id, key, value);
        entity.assign(key, value)?;
    }
    Ok(())
}

/// Apply every property line, in order, stopping at the first error.
///
/// `lines` yields `(line_index, text)` with 0-based indices into the whole
/// source so errors point at the right line. Blank lines are skipped.
pub fn parse_properties<'a, I>(table: &mut EntityTable, lines: I) -> Result<(), ParseError>
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        apply_line(table, line).map_err(|kind| ParseError::on_line(kind, index))?;
    }
    Ok(())
}
