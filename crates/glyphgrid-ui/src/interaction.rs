//! Pointer selection and keyboard routing for a layout session.
//!
//! # How selection works
//!
//! 1. A Left or Right press over an entity selects it and marks it
//!    `clicked` for the current frame, provided the pointer is *armed*.
//! 2. The press disarms the pointer; any button release re-arms it, so
//!    holding a button down never selects twice.
//! 3. [`InteractionContext::begin_frame`] clears `clicked` at the start of
//!    each frame. `selected` persists until another press, `Escape`, or
//!    `Tab` moves it.
//! 4. Key presses go to the selected entity. Only `Field`s react to them.

use log::debug;

use glyphgrid_engine::coords::CellPoint;
use glyphgrid_engine::input::{InputEvent, Key, KeyState, MouseButtonState, PointerSignal};
use glyphgrid_layout::EntityKind;

use crate::event::EventResult;
use crate::field;
use crate::layout::Layout;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionContext {
    /// Entity with input focus.
    pub selected: Option<String>,
    /// Entity pressed this frame.
    pub clicked: Option<String>,
    /// Press position relative to the selected entity's top-left cell.
    pub local: CellPoint,
    pointer_armed: bool,
}

impl Default for InteractionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionContext {
    pub fn new() -> Self {
        Self { selected: None, clicked: None, local: CellPoint::default(), pointer_armed: true }
    }

    #[inline]
    pub fn begin_frame(&mut self) {
        self.clicked = None;
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.pointer_armed
    }

    #[inline]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Route any input event.
    pub fn handle(&mut self, layout: &mut Layout, event: InputEvent) -> EventResult {
        match event {
            InputEvent::Key { key, state: KeyState::Pressed } => self.route_key(layout, key),
            InputEvent::Key { .. } => EventResult::Ignored,
            InputEvent::Pointer(signal) => self.route_pointer(layout, signal),
            InputEvent::PointerLeft => {
                // The release may never arrive.
                self.pointer_armed = true;
                EventResult::Ignored
            }
        }
    }

    pub fn route_pointer(&mut self, layout: &Layout, signal: PointerSignal) -> EventResult {
        if signal.state == MouseButtonState::Released {
            self.pointer_armed = true;
            return EventResult::Ignored;
        }
        if !self.pointer_armed || !signal.button.selects() {
            return EventResult::Ignored;
        }
        let Some(cell) = layout.cell_at(signal.pos) else {
            return EventResult::Ignored;
        };
        let Some(entity) = layout.hit_test(cell) else {
            return EventResult::Ignored;
        };

        debug!("selected {} {:?} at ({}, {})", entity.kind, entity.id, cell.col, cell.row);
        self.local = CellPoint::new(cell.col - entity.x, cell.row - entity.y);
        self.selected = Some(entity.id.clone());
        self.clicked = Some(entity.id.clone());
        self.pointer_armed = false;
        EventResult::Consumed
    }

    pub fn route_key(&mut self, layout: &mut Layout, key: Key) -> EventResult {
        match key {
            Key::Escape => self.selected.take().is_some().into(),
            Key::Tab => self.advance(layout),
            _ => {
                let Some(id) = self.selected.as_deref() else {
                    return EventResult::Ignored;
                };
                match layout.entity_mut(id) {
                    Some(entity) if entity.kind == EntityKind::Field => field::edit(entity, key),
                    _ => EventResult::Ignored,
                }
            }
        }
    }

    /// Move the selection to the next `Field` in table order, wrapping.
    pub fn advance(&mut self, layout: &Layout) -> EventResult {
        let fields: Vec<&str> = layout
            .entities()
            .iter()
            .filter(|e| e.kind == EntityKind::Field)
            .map(|e| e.id.as_str())
            .collect();
        if fields.is_empty() {
            return EventResult::Ignored;
        }
        let next = match self.selected.as_deref().and_then(|s| fields.iter().position(|f| *f == s)) {
            Some(i) => fields[(i + 1) % fields.len()],
            None => fields[0],
        };
        self.selected = Some(next.to_string());
        self.local = CellPoint::default();
        EventResult::Consumed
    }
}
