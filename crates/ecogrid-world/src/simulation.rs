//! One simulation tick and population reporting.
//!
//! When ticks happen and how plants regrow is up to the caller; this module
//! only runs the move/act pass over the creatures alive at tick start.

use crate::World;
use ecogrid_core::{CreatureId, LifeState, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Head counts and resources across the whole world
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationStats {
    pub herbivores: usize,
    pub carnivores: usize,
    /// Creatures spawned into the world that are no longer alive
    pub dead: usize,
    pub total_plants: i64,
}

impl PopulationStats {
    pub fn alive(&self) -> usize {
        self.herbivores + self.carnivores
    }
}

impl World {
    /// Run `move` then `act` for every creature alive at tick start.
    ///
    /// Creatures killed earlier in the pass are skipped.
    #[instrument(skip(self), fields(width = self.width(), height = self.height()))]
    pub fn tick(&mut self) -> Result<()> {
        // Snapshot first: deaths during the pass must not disturb iteration
        let alive: Vec<CreatureId> = self.creatures();

        for id in alive {
            self.move_creature(id)?;
            self.act(id)?;
        }

        let stats = self.stats();
        info!(
            herbivores = stats.herbivores,
            carnivores = stats.carnivores,
            dead = stats.dead,
            total_plants = stats.total_plants,
            "Tick complete"
        );
        Ok(())
    }

    pub fn stats(&self) -> PopulationStats {
        let mut stats = PopulationStats {
            total_plants: self.cells().map(|cell| cell.plants() as i64).sum(),
            ..Default::default()
        };

        for creature in self.all_creatures() {
            match creature.state() {
                LifeState::Alive if creature.kind().is_herbivore() => stats.herbivores += 1,
                LifeState::Alive if creature.kind().is_carnivore() => stats.carnivores += 1,
                LifeState::Dead => stats.dead += 1,
                _ => {}
            }
        }

        stats
    }
}
