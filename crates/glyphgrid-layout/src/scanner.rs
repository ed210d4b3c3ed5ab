use log::debug;

use crate::entity::{Entity, EntityKind, EntityTable};
use crate::error::ParseError;
use crate::grid::{Grid, Marker};
use crate::walker::{walk_box, walk_run};

// ── Scanner ───────────────────────────────────────────────────────────────

/// Where the scanner is in its sweep → dispatch → sweep cycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScanState {
    /// Ready to sweep the grid for the next marker.
    Scanning,
    /// A marker was found and handed to its walker.
    Dispatched,
    /// The last sweep found no marker.
    Done,
}

/// Finds entities by repeatedly sweeping the grid from the top-left for the
/// first unconsumed marker and walking it.
///
/// Every sweep restarts from `(0, 0)`: the walkers consume what they trace,
/// so a fresh sweep never sees a half-walked entity.
pub struct Scanner<'g> {
    grid: &'g mut Grid,
    state: ScanState,
    sweeps: usize,
}

impl<'g> Scanner<'g> {
    pub fn new(grid: &'g mut Grid) -> Self {
        Self { grid, state: ScanState::Scanning, sweeps: 0 }
    }

    #[inline]
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Number of full or partial grid sweeps performed so far.
    #[inline]
    pub fn sweeps(&self) -> usize {
        self.sweeps
    }

    /// Sweep once and walk the first marker found. `Ok(None)` once the grid
    /// holds no markers.
    pub fn next_entity(&mut self) -> Result<Option<Entity>, ParseError> {
        if self.state == ScanState::Done {
            return Ok(None);
        }
        self.state = ScanState::Scanning;
        self.sweeps += 1;

        let Some(marker) = self.grid.find_marker() else {
            self.state = ScanState::Done;
            return Ok(None);
        };

        self.state = ScanState::Dispatched;
        let entity = self.dispatch(marker)?;
        debug!(
            "scanned {} {:?} at ({}, {}) size {}x{}",
            entity.kind, entity.id, entity.x, entity.y, entity.width, entity.height
        );
        Ok(Some(entity))
    }

    fn dispatch(&mut self, marker: Marker) -> Result<Entity, ParseError> {
        let Marker { row, col, kind } = marker;
        match kind {
            EntityKind::Box => walk_box(self.grid, row, col),
            kind => walk_run(self.grid, kind, row, col),
        }
    }

    /// Scan until no markers remain, collecting every entity.
    pub fn run(&mut self) -> Result<EntityTable, ParseError> {
        let mut table = EntityTable::new();
        while let Some(entity) = self.next_entity()? {
            if let Some(old) = table.insert(entity) {
                debug!("entity {:?} redeclared; keeping the later one", old.id);
            }
        }
        Ok(table)
    }
}

/// Scan every entity out of `grid`. Consumes the glyphs it walks.
pub fn parse_grid(grid: &mut Grid) -> Result<EntityTable, ParseError> {
    Scanner::new(grid).run()
}
