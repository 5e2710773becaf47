//! A single grid cell: plant resource plus the creatures standing on it.

use ecogrid_core::{CreatureId, Error, Position, Result, MAX_PLANTS};
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct Cell {
    position: Position,
    plants: i32,
    occupants: Vec<CreatureId>,
}

impl Cell {
    pub(crate) fn new(x: i32, y: i32) -> Self {
        Self {
            position: Position::new(x, y),
            plants: 0,
            occupants: Vec::new(),
        }
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn plants(&self) -> i32 {
        self.plants
    }

    /// Add `delta` plants, saturating at [`MAX_PLANTS`].
    ///
    /// Fails without touching the cell if the result would be negative.
    pub fn change_plants(&mut self, delta: i32) -> Result<()> {
        let total = self.plants as i64 + delta as i64;
        if total < 0 {
            return Err(Error::InvalidArgument(format!(
                "Plants at {} would become negative ({} + {})",
                self.position, self.plants, delta
            )));
        }

        self.plants = total.min(MAX_PLANTS as i64) as i32;
        Ok(())
    }

    /// Snapshot of the current occupants, in arrival order
    pub fn creatures(&self) -> Vec<CreatureId> {
        self.occupants.clone()
    }

    pub fn creature_count(&self) -> usize {
        self.occupants.len()
    }

    pub fn contains(&self, id: CreatureId) -> bool {
        self.occupants.contains(&id)
    }

    pub(crate) fn add_creature(&mut self, id: CreatureId) {
        if !self.contains(id) {
            self.occupants.push(id);
        }
    }

    pub(crate) fn remove_creature(&mut self, id: CreatureId) {
        self.occupants.retain(|&occupant| occupant != id);
    }

    /// Grazing preference: `Less` means `self` is the better cell.
    ///
    /// More plants wins; on equal plants the less crowded cell wins.
    pub fn preference(&self, other: &Cell) -> Ordering {
        other
            .plants
            .cmp(&self.plants)
            .then_with(|| self.occupants.len().cmp(&other.occupants.len()))
    }
}
