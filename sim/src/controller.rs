//! The turn and selection controller.
//!
//! One explicit state machine value replaces the scatter of cursor
//! flags and selected-unit indices a click handler tends to grow.
//! The cost map of the selected unit lives inside the state, so it
//! exists exactly as long as the selection it belongs to.

use tracing::debug;

use crate::world::{ UnitId, World };
use crate::{ Coords, CostMap };

/// The input events that drive the selection state machine. Camera
/// and zoom input never reaches this level; the input layer resolves
/// clicks to grid coordinates before handing them over.
#[derive(Clone, Copy, Debug)]
pub enum Input {
    /// Activate or move the cursor at the given cell.
    Click { col: i32, row: i32 },
    /// End the active team's turn.
    EndTurn,
}

/// The selection state.
pub enum Selection {
    /// No cursor is active.
    Idle,
    /// The cursor rests on a cell without a unit.
    Cell { cursor: Coords },
    /// The cursor rests on a unit. `range` holds the cells the unit
    /// can move to this turn; it is empty for units that cannot move,
    /// e.g. emplacements or units out of movement points.
    Unit {
        cursor: Coords,
        unit: UnitId,
        range: CostMap,
    },
}

pub struct Controller {
    selection: Selection,
}

impl Controller {
    pub fn new() -> Controller {
        Controller { selection: Selection::Idle }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The cell the cursor rests on, if the cursor is active.
    pub fn cursor(&self) -> Option<Coords> {
        match &self.selection {
            Selection::Idle => None,
            Selection::Cell { cursor } => Some(*cursor),
            Selection::Unit { cursor, .. } => Some(*cursor),
        }
    }

    /// The cost map of the selected unit, for highlighting.
    pub fn range(&self) -> Option<&CostMap> {
        match &self.selection {
            Selection::Unit { range, .. } => Some(range),
            _ => None,
        }
    }

    /// Apply one input event to the world.
    pub fn apply(&mut self, world: &mut World, input: Input) {
        match input {
            Input::Click { col, row } => self.click(world, col, row),
            Input::EndTurn => {
                world.end_turn();
                self.selection = Selection::Idle;
            }
        }
    }

    fn click(&mut self, world: &mut World, col: i32, row: i32) {
        let map = world.map();
        let c = Coords::new(
            col.max(0).min(map.width() - 1),
            row.max(0).min(map.height() - 1),
        );
        // A click that had to be clamped lies outside the map and
        // deactivates the cursor.
        if c.col != col || c.row != row {
            self.selection = Selection::Idle;
            return
        }

        // Clicking the cell under the active cursor toggles it off.
        if self.cursor() == Some(c) {
            self.selection = Selection::Idle;
            return
        }

        // With a unit selected, a click on an unoccupied cell within
        // its range commits the move.
        if let Selection::Unit { unit, range, .. } = &self.selection {
            if world.unit_at(c).is_none() {
                if let Some(cost) = range.get(c) {
                    world.apply_move(*unit, c, cost);
                    self.selection = Selection::Idle;
                    return
                }
            }
        }

        // Otherwise the cursor moves to the cell and the selection
        // follows whatever stands there.
        self.selection = match world.unit_at(c) {
            Some(id) => {
                debug!(unit = id.index(), at = %c, "unit selected");
                Selection::Unit { cursor: c, unit: id, range: world.reachable(id) }
            }
            None => Selection::Cell { cursor: c },
        };
    }
}

impl Default for Controller {
    fn default() -> Controller {
        Controller::new()
    }
}
