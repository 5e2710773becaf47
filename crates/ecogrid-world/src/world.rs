//! The world: a grid of cells plus the arena of every creature spawned into it.
//!
//! Cells and creatures refer to each other only through handles. A cell keeps
//! the [`CreatureId`]s standing on it and a creature keeps the [`Position`] of
//! its cell. All membership changes go through [`World::move_to`] and
//! [`World::die`], which update both sides together.

use crate::cell::Cell;
use crate::creature::Creature;
use crate::grid::Grid;
use crate::{carnivore, herbivore};
use ecogrid_core::{
    CreatureId, CreatureKind, EcosystemConfig, EnergyConfig, Error, LifeState, Position, Result,
    SightConfig, WorldConfig,
};
use tracing::{debug, trace};

pub struct World {
    grid: Grid,
    creatures: Vec<Creature>,
    energy: EnergyConfig,
    sight: SightConfig,
}

impl World {
    /// Create an empty world with default energy and sight parameters
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Self::from_config(&WorldConfig {
            width,
            height,
            initial_plants: 0,
        })
    }

    pub fn from_config(config: &WorldConfig) -> Result<Self> {
        Self::with_config(&EcosystemConfig {
            world: config.clone(),
            ..Default::default()
        })
    }

    pub fn with_config(config: &EcosystemConfig) -> Result<Self> {
        config.validate()?;

        let mut grid = Grid::new(config.world.width, config.world.height)?;
        if config.world.initial_plants > 0 {
            for cell in grid.iter_mut() {
                cell.change_plants(config.world.initial_plants)?;
            }
        }

        debug!(
            width = config.world.width,
            height = config.world.height,
            initial_plants = config.world.initial_plants,
            "World created"
        );

        Ok(Self {
            grid,
            creatures: Vec::new(),
            energy: config.energy.clone(),
            sight: config.sight.clone(),
        })
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub fn energy_config(&self) -> &EnergyConfig {
        &self.energy
    }

    pub fn cell(&self, x: i32, y: i32) -> Result<&Cell> {
        self.grid.get(Position::new(x, y))
    }

    pub fn cell_mut(&mut self, x: i32, y: i32) -> Result<&mut Cell> {
        self.grid.get_mut(Position::new(x, y))
    }

    /// Every cell, outer loop x, inner loop y
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.grid.iter()
    }

    /// Every placed, living creature, grouped by cell in [`World::cells`] order
    pub fn creatures(&self) -> Vec<CreatureId> {
        self.grid
            .iter()
            .flat_map(|cell| cell.creatures())
            .collect()
    }

    pub fn creature(&self, id: CreatureId) -> Result<&Creature> {
        self.creatures
            .get(id.index())
            .ok_or_else(|| Error::NotFound(format!("{} does not belong to this world", id)))
    }

    fn creature_mut(&mut self, id: CreatureId) -> Result<&mut Creature> {
        self.creatures
            .get_mut(id.index())
            .ok_or_else(|| Error::NotFound(format!("{} does not belong to this world", id)))
    }

    /// Every creature ever spawned here, whatever its state, in spawn order
    pub fn all_creatures(&self) -> impl Iterator<Item = &Creature> + '_ {
        self.creatures.iter()
    }

    /// Construct an unplaced creature. Place it with [`World::move_to`].
    pub fn spawn(&mut self, kind: CreatureKind) -> Result<CreatureId> {
        match kind {
            CreatureKind::Herbivore { size } => self.herbivore(size),
            CreatureKind::Carnivore => Ok(self.carnivore()),
        }
    }

    pub fn herbivore(&mut self, size: i32) -> Result<CreatureId> {
        if size < 1 {
            return Err(Error::InvalidArgument(format!(
                "Herbivore size must be positive, got {}",
                size
            )));
        }

        let (sight, energy) = (self.sight.herbivore, self.energy.start_energy);
        Ok(self.push_creature(CreatureKind::Herbivore { size }, sight, energy))
    }

    pub fn carnivore(&mut self) -> CreatureId {
        let (sight, energy) = (self.sight.carnivore, self.energy.carnivore_energy());
        self.push_creature(CreatureKind::Carnivore, sight, energy)
    }

    fn push_creature(&mut self, kind: CreatureKind, sight: i32, energy: i32) -> CreatureId {
        let id = CreatureId(self.creatures.len());
        self.creatures.push(Creature::new(kind, sight, energy));
        trace!(creature = %id, ?kind, energy, "Creature spawned");
        id
    }

    /// Move a creature onto the cell at `target`.
    ///
    /// An unplaced creature is placed there; a living one leaves its old cell
    /// first. Dead creatures cannot move.
    pub fn move_to(&mut self, id: CreatureId, target: Position) -> Result<()> {
        if !self.grid.contains(target) {
            return Err(Error::OutOfRange {
                x: target.x,
                y: target.y,
                width: self.grid.width(),
                height: self.grid.height(),
            });
        }

        let creature = self.creature(id)?;
        let energy = creature.energy();
        match (creature.state(), creature.current_cell()) {
            (LifeState::Dead, _) => {
                return Err(Error::InvalidState(format!("{} is dead and cannot move", id)));
            }
            (LifeState::Alive, Some(old)) => {
                self.grid.get_mut(old)?.remove_creature(id);
                trace!(creature = %id, from = %old, to = %target, "Creature moved");
            }
            _ if energy <= 0 => {
                return Err(Error::InvalidState(format!(
                    "{} has no energy left and cannot be placed",
                    id
                )));
            }
            _ => {
                debug!(creature = %id, at = %target, "Creature placed");
            }
        }

        self.grid.get_mut(target)?.add_creature(id);
        self.creature_mut(id)?.place(target);
        Ok(())
    }

    /// Kill a living creature. No-op for unplaced or already dead creatures.
    pub fn die(&mut self, id: CreatureId) -> Result<()> {
        let Some(pos) = self.creature(id)?.current_cell() else {
            return Ok(());
        };

        self.grid.get_mut(pos)?.remove_creature(id);
        let creature = self.creature_mut(id)?;
        creature.clear_cell();
        debug!(creature = %id, at = %pos, energy = creature.energy(), "Creature died");
        Ok(())
    }

    /// Adjust energy; a creature whose energy drops to zero or below dies
    /// before this returns.
    pub fn change_energy(&mut self, id: CreatureId, amount: i32) -> Result<()> {
        let creature = self.creature_mut(id)?;
        creature.add_energy(amount);
        if creature.energy() <= 0 {
            self.die(id)?;
        }
        Ok(())
    }

    /// Cells within the creature's sight, its own cell included, in
    /// [`World::cells`] order.
    pub fn visible_cells(&self, id: CreatureId) -> Result<Vec<&Cell>> {
        let creature = self.creature(id)?;
        let center = creature
            .current_cell()
            .ok_or_else(|| Error::InvalidState(format!("{} is not on the grid", id)))?;
        Ok(self.grid.within(center, creature.sight()))
    }

    /// Number of herbivores on the cell
    pub fn count_herbivores(&self, pos: Position) -> Result<usize> {
        Ok(self.herbivore_profile(self.grid.get(pos)?).0)
    }

    /// Size of the largest herbivore on the cell, 0 if there is none
    pub fn max_herbivore_size(&self, pos: Position) -> Result<i32> {
        Ok(self.herbivore_profile(self.grid.get(pos)?).1)
    }

    /// `(herbivore count, largest herbivore size)` for a cell
    pub(crate) fn herbivore_profile(&self, cell: &Cell) -> (usize, i32) {
        cell.creatures()
            .into_iter()
            .filter_map(|id| self.creatures.get(id.index()).and_then(Creature::size))
            .fold((0, 0), |(count, max), size| (count + 1, max.max(size)))
    }

    /// Let a creature pick a cell within sight and go there.
    pub fn move_creature(&mut self, id: CreatureId) -> Result<()> {
        let creature = self.creature(id)?;
        if !creature.is_alive() {
            return Ok(());
        }

        let target = match creature.kind() {
            CreatureKind::Herbivore { .. } => herbivore::choose_cell(self, id)?,
            CreatureKind::Carnivore => carnivore::choose_cell(self, id)?,
        };
        self.move_to(id, target)
    }

    /// Let a creature feed and pay its metabolic cost.
    pub fn act(&mut self, id: CreatureId) -> Result<()> {
        let creature = self.creature(id)?;
        if !creature.is_alive() {
            return Ok(());
        }

        match creature.kind() {
            CreatureKind::Herbivore { size } => herbivore::graze(self, id, size),
            CreatureKind::Carnivore => carnivore::hunt(self, id),
        }
    }
}
