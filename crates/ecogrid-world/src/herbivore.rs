//! Herbivore behavior: walk to the lushest, least crowded cell and graze.

use crate::World;
use ecogrid_core::{CreatureId, Error, Position, Result};
use tracing::trace;

/// Plants a herbivore of `size` can eat in one act: floor(2·size²/(size+1))
pub fn appetite(size: i32) -> i32 {
    let size = size.max(0) as i64;
    (2 * size * size / (size + 1)).min(i32::MAX as i64) as i32
}

/// The best visible cell by [`crate::Cell::preference`]; the first one wins ties.
pub(crate) fn choose_cell(world: &World, id: CreatureId) -> Result<Position> {
    world
        .visible_cells(id)?
        .into_iter()
        .min_by(|a, b| a.preference(b))
        .map(|cell| cell.position())
        .ok_or_else(|| Error::InvalidState(format!("{} sees no cells", id)))
}

pub(crate) fn graze(world: &mut World, id: CreatureId, size: i32) -> Result<()> {
    let pos = world
        .creature(id)?
        .current_cell()
        .ok_or_else(|| Error::InvalidState(format!("{} is not on the grid", id)))?;

    let eaten = appetite(size).min(world.cell(pos.x, pos.y)?.plants());
    world.change_energy(id, eaten)?;
    world.cell_mut(pos.x, pos.y)?.change_plants(-eaten)?;
    world.change_energy(id, -size)?;

    trace!(
        creature = %id,
        at = %pos,
        eaten,
        energy = world.creature(id)?.energy(),
        "Herbivore grazed"
    );
    Ok(())
}
