//! Static knowledge base: the shapes a grid can draw and the attribute keys
//! layouts conventionally set.  This drives hover documentation and
//! completion.

// ── Attribute kinds ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    /// Any numeric literal (`16`, `-2`, `0.5`).
    Number,
    /// Non-negative integer; rejected by the parser otherwise.
    Geometry,
    /// Free text. Cannot contain `->`, `,` or `=`.
    Text,
    /// Entity kind name; re-kinds the entity.
    Kind,
}

impl AttrKind {
    pub fn label(self) -> &'static str {
        match self {
            AttrKind::Number   => "number",
            AttrKind::Geometry => "integer (cells)",
            AttrKind::Text     => "text",
            AttrKind::Kind     => "entity kind",
        }
    }
}

// ── Attribute info ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct AttrInfo {
    pub name: &'static str,
    pub kind: AttrKind,
    pub doc:  &'static str,
}

pub static ATTRS: &[AttrInfo] = &[
    AttrInfo { name: "label",   kind: AttrKind::Text,     doc: "Caption drawn on buttons and labels." },
    AttrInfo { name: "text",    kind: AttrKind::Text,     doc: "Initial contents of a field." },
    AttrInfo { name: "red",     kind: AttrKind::Number,   doc: "Red channel of the entity color (0-255)." },
    AttrInfo { name: "green",   kind: AttrKind::Number,   doc: "Green channel of the entity color (0-255)." },
    AttrInfo { name: "blue",    kind: AttrKind::Number,   doc: "Blue channel of the entity color (0-255)." },
    AttrInfo { name: "columns", kind: AttrKind::Number,   doc: "Column count for grid views and toolbars." },
    AttrInfo { name: "type",    kind: AttrKind::Kind,     doc: "Re-kind the entity, e.g. `type=toolbar` on a panel." },
    AttrInfo { name: "x",       kind: AttrKind::Geometry, doc: "Left column. Overrides the scanned position." },
    AttrInfo { name: "y",       kind: AttrKind::Geometry, doc: "Top row. Overrides the scanned position." },
    AttrInfo { name: "width",   kind: AttrKind::Geometry, doc: "Width in cells (at least 1). Overrides the scanned size." },
    AttrInfo { name: "height",  kind: AttrKind::Geometry, doc: "Height in cells (at least 1). Overrides the scanned size." },
];

// ── Kinds ─────────────────────────────────────────────────────────────────

/// Built-in kinds with the glyphs that draw them, then common `type` values.
pub static KINDS: &[(&str, &str)] = &[
    ("box",      "`+-name-+` outline, `|` sides"),
    ("field",    "`[name]`: editable text"),
    ("panel",    "`{name}`"),
    ("button",   "`(name)`"),
    ("label",    "text caption (`type=label`)"),
    ("list",     "scrolling list (`type=list`)"),
    ("toolbar",  "icon strip (`type=toolbar`, needs `columns`)"),
    ("grid_view","cell grid (`type=grid_view`, needs `columns`)"),
];

// ── Lookup helpers ────────────────────────────────────────────────────────

pub fn attr_by_name(name: &str) -> Option<&'static AttrInfo> {
    ATTRS.iter().find(|a| a.name == name)
}

pub fn kind_doc(name: &str) -> Option<&'static str> {
    KINDS.iter().find(|(k, _)| *k == name).map(|(_, doc)| *doc)
}
