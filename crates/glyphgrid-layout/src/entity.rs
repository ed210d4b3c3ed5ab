use std::collections::HashMap;
use std::fmt;

use crate::error::{AttributeError, ErrorKind};

// ── EntityKind ────────────────────────────────────────────────────────────

/// What an entity is. The four structural kinds come from grid markers;
/// `Custom` only appears when a property line assigns `type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Box,
    Field,
    Panel,
    Button,
    Custom(String),
}

impl EntityKind {
    pub fn name(&self) -> &str {
        match self {
            EntityKind::Box       => "box",
            EntityKind::Field     => "field",
            EntityKind::Panel     => "panel",
            EntityKind::Button    => "button",
            EntityKind::Custom(s) => s,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "box"    => EntityKind::Box,
            "field"  => EntityKind::Field,
            "panel"  => EntityKind::Panel,
            "button" => EntityKind::Button,
            other    => EntityKind::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Value ─────────────────────────────────────────────────────────────────

/// A property value: every assignment is either a number or a string.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Str(String),
}

impl Value {
    /// Classify raw property text.
    ///
    /// Numbers are `[+-]? digits ('.' digits)?`. Leading zeros are allowed, so
    /// `007` is the number 7. Exponents, `.5`, `5.`, `inf` and `nan` stay strings.
    pub fn parse(text: &str) -> Value {
        if is_number_literal(text) {
            if let Ok(n) = text.parse::<f64>() {
                return Value::Number(n);
            }
        }
        Value::Str(text.to_string())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            Value::Number(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

fn is_number_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (int, frac) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(int) && frac.is_none_or(all_digits)
}

// ── Entity ────────────────────────────────────────────────────────────────

/// A widget recovered from the grid, plus whatever the property section set on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: String,
    pub kind: EntityKind,
    /// Column of the starting marker.
    pub x: usize,
    /// Row of the starting marker.
    pub y: usize,
    /// For fields, panels and buttons this excludes the opening bracket.
    pub width: usize,
    pub height: usize,
    attrs: Vec<(String, Value)>,
    /// Drawn with an opening bracket at `x` that `width` does not count.
    bracketed: bool,
}

impl Entity {
    /// A 1×1 entity at `(x, y)` with no attributes.
    pub fn new(id: impl Into<String>, kind: EntityKind, x: usize, y: usize) -> Self {
        Self { id: id.into(), kind, x, y, width: 1, height: 1, attrs: Vec::new(), bracketed: false }
    }

    /// A single-row entity whose opener at `(x, y)` sits outside `width`.
    pub fn bracketed(id: impl Into<String>, kind: EntityKind, x: usize, y: usize) -> Self {
        Self { bracketed: true, ..Self::new(id, kind, x, y) }
    }

    /// Columns the entity covers on the grid: `width`, plus the opener for
    /// bracketed runs.
    #[inline]
    pub fn cell_width(&self) -> usize {
        self.width + usize::from(self.bracketed)
    }

    /// `true` if the grid cell `(col, row)` lies inside the entity, brackets
    /// included.
    pub fn contains_cell(&self, col: usize, row: usize) -> bool {
        col >= self.x
            && row >= self.y
            && col < self.x + self.cell_width()
            && row < self.y + self.height
    }

    /// Attributes in the order they were first assigned.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.attr(key)?.as_number()
    }

    pub fn str(&self, key: &str) -> Option<&str> {
        self.attr(key)?.as_str()
    }

    pub fn has_attr(&self, key: &str) -> bool {
        self.attr(key).is_some()
    }

    /// Set an attribute, replacing any earlier value under the same key.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((key, value)),
        }
    }

    pub fn require(&self, key: &str) -> Result<&Value, AttributeError> {
        self.attr(key).ok_or_else(|| AttributeError::Missing {
            entity: self.id.clone(),
            key: key.to_string(),
        })
    }

    pub fn require_number(&self, key: &str) -> Result<f64, AttributeError> {
        self.require(key)?.as_number().ok_or_else(|| self.wrong_type(key, "number"))
    }

    pub fn require_str(&self, key: &str) -> Result<&str, AttributeError> {
        self.require(key)?.as_str().ok_or_else(|| self.wrong_type(key, "string"))
    }

    fn wrong_type(&self, key: &str, expected: &'static str) -> AttributeError {
        AttributeError::WrongType { entity: self.id.clone(), key: key.to_string(), expected }
    }

    /// Apply one assignment from the property section.
    ///
    /// `type` re-kinds the entity and the geometry keys overwrite geometry;
    /// everything else lands in the attribute set.
    pub(crate) fn assign(&mut self, key: &str, value: Value) -> Result<(), ErrorKind> {
        match key {
            "type" => {
                self.kind = EntityKind::from_name(&value.to_string());
            }
            "x" => self.x = geometry(key, &value, 0)?,
            "y" => self.y = geometry(key, &value, 0)?,
            "width" => self.width = geometry(key, &value, 1)?,
            "height" => self.height = geometry(key, &value, 1)?,
            _ => self.set_attr(key, value),
        }
        Ok(())
    }
}

fn geometry(key: &str, value: &Value, min: usize) -> Result<usize, ErrorKind> {
    let invalid = || ErrorKind::InvalidGeometry { key: key.to_string(), value: value.to_string() };
    let n = value.as_number().ok_or_else(invalid)?;
    if n.fract() != 0.0 || n < min as f64 || n > u32::MAX as f64 {
        return Err(invalid());
    }
    Ok(n as usize)
}

// ── EntityTable ───────────────────────────────────────────────────────────

/// Insertion-ordered map from entity id to entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityTable {
    entries: Vec<Entity>,
    index: HashMap<String, usize>,
}

impl EntityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert by id. An existing entity with the same id is replaced in place
    /// (it keeps its position) and returned.
    pub fn insert(&mut self, entity: Entity) -> Option<Entity> {
        match self.index.get(&entity.id) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i], entity)),
            None => {
                self.index.insert(entity.id.clone(), self.entries.len());
                self.entries.push(entity);
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Entity> {
        self.index.get(id).map(|&i| &mut self.entries[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Entity> {
        self.entries.iter_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a EntityTable {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Value ─────────────────────────────────────────────────────────────

    #[test]
    fn integers_and_decimals_are_numbers() {
        assert_eq!(Value::parse("1"), Value::Number(1.0));
        assert_eq!(Value::parse("-12"), Value::Number(-12.0));
        assert_eq!(Value::parse("+3"), Value::Number(3.0));
        assert_eq!(Value::parse("0.75"), Value::Number(0.75));
    }

    #[test]
    fn leading_zeros_are_accepted() {
        assert_eq!(Value::parse("007"), Value::Number(7.0));
        assert_eq!(Value::parse("007").to_string(), "7");
    }

    #[test]
    fn non_numbers_stay_strings() {
        for text in ["hello", "", "1e5", ".5", "5.", "inf", "NaN", "1_000", "0x10", "- 1", "1.2.3"] {
            assert_eq!(Value::parse(text), Value::Str(text.to_string()), "{text:?}");
        }
    }

    #[test]
    fn number_display_drops_trailing_zero() {
        assert_eq!(Value::Number(42.0).to_string(), "42");
        assert_eq!(Value::Number(1.5).to_string(), "1.5");
    }

    // ── Entity ────────────────────────────────────────────────────────────

    #[test]
    fn set_attr_overwrites_in_place() {
        let mut e = Entity::new("foo", EntityKind::Field, 0, 0);
        e.set_attr("a", 1.0);
        e.set_attr("b", "x");
        e.set_attr("a", "two");
        let keys: Vec<&str> = e.attrs().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(e.str("a"), Some("two"));
    }

    #[test]
    fn require_accessors() {
        let mut e = Entity::new("btn", EntityKind::Button, 0, 0);
        e.set_attr("label", "OK");
        e.set_attr("red", 255.0);
        assert_eq!(e.require_str("label").unwrap(), "OK");
        assert_eq!(e.require_number("red").unwrap(), 255.0);
        assert_eq!(
            e.require("green").unwrap_err(),
            AttributeError::Missing { entity: "btn".into(), key: "green".into() }
        );
        assert!(matches!(
            e.require_number("label").unwrap_err(),
            AttributeError::WrongType { expected: "number", .. }
        ));
    }

    #[test]
    fn assign_type_rekinds() {
        let mut e = Entity::new("l", EntityKind::Panel, 0, 0);
        e.assign("type", Value::parse("label")).unwrap();
        assert_eq!(e.kind, EntityKind::Custom("label".into()));
        e.assign("type", Value::parse("button")).unwrap();
        assert_eq!(e.kind, EntityKind::Button);
        assert!(!e.has_attr("type"));
    }

    #[test]
    fn assign_geometry() {
        let mut e = Entity::new("p", EntityKind::Panel, 0, 0);
        e.assign("height", Value::parse("4")).unwrap();
        assert_eq!(e.height, 4);
        assert!(matches!(
            e.assign("width", Value::parse("0")),
            Err(ErrorKind::InvalidGeometry { .. })
        ));
        assert!(matches!(
            e.assign("x", Value::parse("1.5")),
            Err(ErrorKind::InvalidGeometry { .. })
        ));
        assert!(matches!(
            e.assign("y", Value::parse("top")),
            Err(ErrorKind::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn contains_cell_is_inclusive_of_extent() {
        let mut e = Entity::new("b", EntityKind::Box, 2, 1);
        e.width = 3;
        e.height = 2;
        assert!(e.contains_cell(2, 1));
        assert!(e.contains_cell(4, 2));
        assert!(!e.contains_cell(5, 2));
        assert!(!e.contains_cell(2, 3));
        assert!(!e.contains_cell(1, 1));
    }

    #[test]
    fn bracketed_entity_covers_its_closer() {
        // `[ab]` at column 2: width 3, cells 2..=5.
        let mut e = Entity::bracketed("ab", EntityKind::Field, 2, 0);
        e.width = 3;
        assert_eq!(e.cell_width(), 4);
        assert!(e.contains_cell(2, 0));
        assert!(e.contains_cell(5, 0));
        assert!(!e.contains_cell(6, 0));
    }

    #[test]
    fn rekinding_keeps_the_bracket() {
        let mut e = Entity::bracketed("p", EntityKind::Panel, 0, 0);
        e.width = 5;
        e.assign("type", Value::parse("toolbar")).unwrap();
        assert_eq!(e.cell_width(), 6);
    }

    // ── EntityTable ───────────────────────────────────────────────────────

    #[test]
    fn table_keeps_insertion_order() {
        let mut t = EntityTable::new();
        t.insert(Entity::new("b", EntityKind::Box, 0, 0));
        t.insert(Entity::new("a", EntityKind::Field, 0, 1));
        assert_eq!(t.ids().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn table_insert_is_last_wins_in_place() {
        let mut t = EntityTable::new();
        t.insert(Entity::new("a", EntityKind::Box, 0, 0));
        t.insert(Entity::new("b", EntityKind::Box, 0, 5));
        let old = t.insert(Entity::new("a", EntityKind::Field, 3, 3));
        assert_eq!(old.map(|e| e.kind), Some(EntityKind::Box));
        assert_eq!(t.len(), 2);
        assert_eq!(t.ids().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(t.get("a").unwrap().kind, EntityKind::Field);
    }
}
