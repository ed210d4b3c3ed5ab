//! Text editing for `Field` entities.
//!
//! A field's contents live in its `text` attribute. The text never grows
//! past the cells between the brackets.

use glyphgrid_engine::input::Key;
use glyphgrid_layout::{Entity, Value};

use crate::event::EventResult;

/// Attribute holding a field's contents.
pub const TEXT_KEY: &str = "text";

/// Number of characters `field` can hold. `width` already leaves out the
/// opening bracket; the closing one is the last cell it counts.
#[inline]
pub fn capacity(field: &Entity) -> usize {
    field.width.saturating_sub(1)
}

/// Current contents. A numeric `text` value reads as its display form.
pub fn text(field: &Entity) -> String {
    match field.attr(TEXT_KEY) {
        Some(Value::Str(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

/// Apply one key press to `field`.
///
/// Printable ASCII appends while there is room, `Backspace` drops the last
/// character and `Delete` clears the field.
pub fn edit(field: &mut Entity, key: Key) -> EventResult {
    let mut contents = text(field);
    let changed = match key {
        Key::Backspace => contents.pop().is_some(),
        Key::Delete => {
            let had_text = !contents.is_empty();
            contents.clear();
            had_text
        }
        other => match other.printable() {
            Some(c) if contents.chars().count() < capacity(field) => {
                contents.push(c);
                true
            }
            _ => false,
        },
    };
    if changed {
        log::trace!("field {:?} text = {:?}", field.id, contents);
        field.set_attr(TEXT_KEY, Value::Str(contents));
    }
    changed.into()
}
