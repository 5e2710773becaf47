//! Creature state.
//!
//! A creature's behavior lives in [`crate::herbivore`] and [`crate::carnivore`];
//! this module only holds the data the [`crate::World`] mutates.

use ecogrid_core::{CreatureKind, LifeState, Position};

/// A creature in the simulation
#[derive(Debug, Clone)]
pub struct Creature {
    kind: CreatureKind,
    sight: i32,
    energy: i32,
    cell: Option<Position>,
    placed: bool,
}

impl Creature {
    pub(crate) fn new(kind: CreatureKind, sight: i32, energy: i32) -> Self {
        Self {
            kind,
            sight,
            energy,
            cell: None,
            placed: false,
        }
    }

    pub fn kind(&self) -> CreatureKind {
        self.kind
    }

    pub fn sight(&self) -> i32 {
        self.sight
    }

    pub fn energy(&self) -> i32 {
        self.energy
    }

    /// Body size, herbivores only
    pub fn size(&self) -> Option<i32> {
        self.kind.herbivore_size()
    }

    pub fn current_cell(&self) -> Option<Position> {
        self.cell
    }

    pub fn is_alive(&self) -> bool {
        self.cell.is_some()
    }

    pub fn state(&self) -> LifeState {
        match (self.cell, self.placed) {
            (Some(_), _) => LifeState::Alive,
            (None, false) => LifeState::Unplaced,
            (None, true) => LifeState::Dead,
        }
    }

    pub(crate) fn place(&mut self, pos: Position) {
        self.cell = Some(pos);
        self.placed = true;
    }

    pub(crate) fn clear_cell(&mut self) {
        self.cell = None;
    }

    pub(crate) fn add_energy(&mut self, amount: i32) {
        self.energy = self.energy.saturating_add(amount);
    }
}
