//! Core type definitions for the simulation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to a creature owned by a world.
///
/// Handles are indices into the world's creature arena. They stay valid after
/// the creature dies, so a dead creature can still be inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CreatureId(pub usize);

impl CreatureId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "creature#{}", self.0)
    }
}

/// 2D position in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance to another position: `max(|dx|, |dy|)`
    pub fn chebyshev_distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The closed set of creature variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatureKind {
    /// Plant eater with a fixed body size (always >= 1).
    Herbivore { size: i32 },
    /// Predator of herbivores.
    Carnivore,
}

impl CreatureKind {
    pub fn is_herbivore(&self) -> bool {
        matches!(self, CreatureKind::Herbivore { .. })
    }

    pub fn is_carnivore(&self) -> bool {
        matches!(self, CreatureKind::Carnivore)
    }

    /// Body size for herbivores, `None` for carnivores
    pub fn herbivore_size(&self) -> Option<i32> {
        match self {
            CreatureKind::Herbivore { size } => Some(*size),
            CreatureKind::Carnivore => None,
        }
    }
}

/// Lifecycle of a creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifeState {
    /// Constructed but never placed on a cell.
    Unplaced,
    /// Occupying a cell.
    Alive,
    /// Terminal.
    Dead,
}
