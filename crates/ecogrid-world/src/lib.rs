//! Ecosystem simulation engine.
//!
//! A bounded grid of plant-bearing cells where herbivores graze and carnivores
//! hunt them, each living on an energy budget.

pub mod cell;
pub mod creature;
pub mod grid;
pub mod herbivore;
pub mod simulation;
pub mod world;

mod carnivore;

pub use cell::Cell;
pub use creature::Creature;
pub use grid::Grid;
pub use simulation::PopulationStats;
pub use world::World;
