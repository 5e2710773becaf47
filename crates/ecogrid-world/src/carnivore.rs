//! Carnivore behavior: chase the densest herd in sight, eat its largest member.

use crate::World;
use ecogrid_core::{CreatureId, Error, Position, Result};
use tracing::{debug, trace};

/// Pick the visible cell with the most herbivores, then the largest one.
///
/// The first scanned cell is kept unless a later one is strictly better, so
/// with no prey in sight the carnivore heads for the first cell it sees.
pub(crate) fn choose_cell(world: &World, id: CreatureId) -> Result<Position> {
    let mut best: Option<(Position, (usize, i32))> = None;

    for cell in world.visible_cells(id)? {
        let profile = world.herbivore_profile(cell);
        match best {
            Some((_, incumbent)) if profile <= incumbent => {}
            _ => best = Some((cell.position(), profile)),
        }
    }

    best.map(|(pos, _)| pos)
        .ok_or_else(|| Error::InvalidState(format!("{} sees no cells", id)))
}

pub(crate) fn hunt(world: &mut World, id: CreatureId) -> Result<()> {
    let pos = world
        .creature(id)?
        .current_cell()
        .ok_or_else(|| Error::InvalidState(format!("{} is not on the grid", id)))?;

    let mut victim: Option<(CreatureId, i32)> = None;
    for other in world.cell(pos.x, pos.y)?.creatures() {
        let Some(size) = world.creature(other)?.size() else {
            continue;
        };
        match victim {
            Some((_, largest)) if size <= largest => {}
            _ => victim = Some((other, size)),
        }
    }

    if let Some((prey, size)) = victim {
        let gained = world.creature(prey)?.energy();
        world.change_energy(id, gained)?;
        world.die(prey)?;
        debug!(creature = %id, prey = %prey, prey_size = size, gained, at = %pos, "Carnivore killed");
    }

    let metabolism = world.energy_config().carnivore_metabolism;
    world.change_energy(id, -metabolism)?;

    trace!(creature = %id, energy = world.creature(id)?.energy(), "Carnivore acted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecogrid_core::LifeState;

    fn place_herbivore(world: &mut World, size: i32, pos: Position) -> CreatureId {
        let id = world.herbivore(size).unwrap();
        world.move_to(id, pos).unwrap();
        id
    }

    #[test]
    fn test_eats_herbivore_sharing_cell() {
        let mut world = World::new(3, 3).unwrap();
        let carnivore = world.carnivore();
        world.move_to(carnivore, Position::new(1, 1)).unwrap();
        let prey = place_herbivore(&mut world, 3, Position::new(1, 1));
        world.change_energy(prey, -8).unwrap();
        assert_eq!(world.creature(prey).unwrap().energy(), 12);

        world.act(carnivore).unwrap();

        assert_eq!(world.creature(prey).unwrap().state(), LifeState::Dead);
        assert!(!world.cell(1, 1).unwrap().contains(prey));
        assert_eq!(world.creature(carnivore).unwrap().energy(), 36);
    }

    #[test]
    fn test_eats_first_largest() {
        let mut world = World::new(1, 1).unwrap();
        let at = Position::new(0, 0);
        let carnivore = world.carnivore();
        world.move_to(carnivore, at).unwrap();
        let small = place_herbivore(&mut world, 2, at);
        let first_big = place_herbivore(&mut world, 5, at);
        let second_big = place_herbivore(&mut world, 5, at);

        world.act(carnivore).unwrap();

        assert!(!world.creature(first_big).unwrap().is_alive());
        assert!(world.creature(second_big).unwrap().is_alive());
        assert!(world.creature(small).unwrap().is_alive());
        assert_eq!(world.creature(carnivore).unwrap().energy(), 30 + 20 - 6);
    }

    #[test]
    fn test_metabolism_without_prey() {
        let mut world = World::new(2, 2).unwrap();
        let carnivore = world.carnivore();
        world.move_to(carnivore, Position::new(0, 0)).unwrap();
        let other = world.carnivore();
        world.move_to(other, Position::new(0, 0)).unwrap();

        for _ in 0..4 {
            world.act(carnivore).unwrap();
        }
        assert_eq!(world.creature(carnivore).unwrap().energy(), 6);
        assert!(world.creature(other).unwrap().is_alive());

        world.act(carnivore).unwrap();
        assert_eq!(world.creature(carnivore).unwrap().state(), LifeState::Dead);
        assert_eq!(world.creatures(), vec![other]);
    }

    #[test]
    fn test_chases_largest_herd() {
        let mut world = World::new(5, 5).unwrap();
        let carnivore = world.carnivore();
        world.move_to(carnivore, Position::new(2, 2)).unwrap();

        place_herbivore(&mut world, 9, Position::new(0, 0));
        place_herbivore(&mut world, 1, Position::new(4, 4));
        place_herbivore(&mut world, 1, Position::new(4, 4));

        world.move_creature(carnivore).unwrap();
        assert_eq!(
            world.creature(carnivore).unwrap().current_cell(),
            Some(Position::new(4, 4))
        );
    }

    #[test]
    fn test_equal_herds_break_on_size() {
        let mut world = World::new(5, 5).unwrap();
        let carnivore = world.carnivore();
        world.move_to(carnivore, Position::new(2, 2)).unwrap();

        place_herbivore(&mut world, 2, Position::new(1, 3));
        place_herbivore(&mut world, 4, Position::new(3, 0));
        place_herbivore(&mut world, 4, Position::new(4, 1));

        world.move_creature(carnivore).unwrap();
        assert_eq!(
            world.creature(carnivore).unwrap().current_cell(),
            Some(Position::new(3, 0))
        );
    }

    #[test]
    fn test_no_prey_goes_to_first_scanned_cell() {
        let mut world = World::new(6, 6).unwrap();
        let carnivore = world.carnivore();
        world.move_to(carnivore, Position::new(3, 4)).unwrap();

        world.move_creature(carnivore).unwrap();
        assert_eq!(
            world.creature(carnivore).unwrap().current_cell(),
            Some(Position::new(1, 2))
        );
    }

    #[test]
    fn test_no_prey_in_corner_stays_put() {
        let mut world = World::new(4, 4).unwrap();
        let carnivore = world.carnivore();
        world.move_to(carnivore, Position::new(0, 0)).unwrap();

        world.move_creature(carnivore).unwrap();
        assert_eq!(
            world.creature(carnivore).unwrap().current_cell(),
            Some(Position::new(0, 0))
        );
    }
}
