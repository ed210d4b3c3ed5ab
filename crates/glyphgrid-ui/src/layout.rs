use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use glyphgrid_engine::config::LayoutConfig;
use glyphgrid_engine::coords::{CellPoint, CellRect, CellSize, Rgb, Vec2};
use glyphgrid_layout::{parse_layout, Entity, EntityTable, GridDims};

// ── Hooks ─────────────────────────────────────────────────────────────────

/// Application callbacks run once a layout has been parsed.
///
/// `on_component_init` runs for every entity in table order, then `on_init`
/// runs once over the whole table. An error from either aborts loading.
pub trait LayoutHooks {
    fn on_component_init(&mut self, _entity: &mut Entity) -> Result<()> {
        Ok(())
    }

    fn on_init(&mut self, _entities: &mut EntityTable) -> Result<()> {
        Ok(())
    }
}

/// Hooks that do nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl LayoutHooks for NoHooks {}

// ── Layout ────────────────────────────────────────────────────────────────

/// A parsed layout together with the geometry it is displayed with.
#[derive(Debug, Clone)]
pub struct Layout {
    entities: EntityTable,
    dims: GridDims,
    cell: CellSize,
    background: Rgb,
}

impl Layout {
    /// Parse `src` and run the hooks.
    ///
    /// With a config the grid is `config.grid_size()` cells and pointer
    /// positions are pixels. Without one the grid size is inferred from the
    /// text and pointer positions are taken to be cell coordinates.
    pub fn from_source<H>(src: &str, config: Option<&LayoutConfig>, hooks: &mut H) -> Result<Self>
    where
        H: LayoutHooks + ?Sized,
    {
        let (dims, cell, background) = match config {
            Some(c) => {
                let (width, height) = c.grid_size();
                (GridDims::new(width, height), c.cell, c.background)
            }
            None => (GridDims::infer(src), CellSize::new(1, 1), Rgb::black()),
        };

        let mut entities = parse_layout(src, dims).context("failed to parse layout")?;

        for entity in entities.iter_mut() {
            hooks
                .on_component_init(entity)
                .with_context(|| format!("initializing {} {:?}", entity.kind, entity.id))?;
        }
        hooks.on_init(&mut entities).context("initializing layout")?;

        info!(
            "layout ready: {} entities on a {}x{} grid",
            entities.len(),
            dims.width,
            dims.height
        );
        Ok(Self { entities, dims, cell, background })
    }

    /// Read the layout file at `path`, then behave as [`Layout::from_source`].
    pub fn load<H>(path: impl AsRef<Path>, config: Option<&LayoutConfig>, hooks: &mut H) -> Result<Self>
    where
        H: LayoutHooks + ?Sized,
    {
        let path = path.as_ref();
        debug!("loading layout {}", path.display());
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read layout {}", path.display()))?;
        Self::from_source(&src, config, hooks).with_context(|| format!("in {}", path.display()))
    }

    #[inline]
    pub fn entities(&self) -> &EntityTable {
        &self.entities
    }

    #[inline]
    pub fn entities_mut(&mut self) -> &mut EntityTable {
        &mut self.entities
    }

    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn entity_mut(&mut self, id: &str) -> Option<&mut Entity> {
        self.entities.get_mut(id)
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    #[inline]
    pub fn cell_size(&self) -> CellSize {
        self.cell
    }

    #[inline]
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Cells covered by the entity `id`.
    pub fn entity_rect(&self, id: &str) -> Option<CellRect> {
        self.entity(id).and_then(rect_of)
    }

    /// Cell under a pointer position.
    pub fn cell_at(&self, pos: Vec2) -> Option<CellPoint> {
        self.cell.cell_at(pos)
    }

    /// Innermost entity covering `cell`.
    ///
    /// A box is scanned before anything drawn inside it, so the last match in
    /// table order is the innermost one.
    pub fn hit_test(&self, cell: CellPoint) -> Option<&Entity> {
        self.entities.iter().rev().find(|e| e.contains_cell(cell.col, cell.row))
    }
}

fn rect_of(entity: &Entity) -> Option<CellRect> {
    CellRect::from_extent(entity.x, entity.y, entity.cell_width(), entity.height)
}
