//! Configuration types for the simulation.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Upper bound on the plant count of a single cell
pub const MAX_PLANTS: i32 = 100;

/// World configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Width of the world grid
    pub width: i32,
    /// Height of the world grid
    pub height: i32,
    /// Plants placed on every cell at construction (0 to MAX_PLANTS)
    pub initial_plants: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            initial_plants: 0,
        }
    }
}

/// Energy budget parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyConfig {
    /// Starting energy for every creature
    pub start_energy: i32,
    /// Extra starting energy granted to carnivores
    pub carnivore_bonus: i32,
    /// Energy a carnivore burns per act, whether or not it killed
    pub carnivore_metabolism: i32,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            start_energy: 20,
            carnivore_bonus: 10,
            carnivore_metabolism: 6,
        }
    }
}

impl EnergyConfig {
    /// Starting energy of a carnivore
    pub fn carnivore_energy(&self) -> i32 {
        self.start_energy.saturating_add(self.carnivore_bonus)
    }
}

/// Perception radii, in Chebyshev distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SightConfig {
    pub herbivore: i32,
    pub carnivore: i32,
}

impl Default for SightConfig {
    fn default() -> Self {
        Self {
            herbivore: 1,
            carnivore: 2,
        }
    }
}

/// Full ecosystem configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EcosystemConfig {
    pub world: WorldConfig,
    pub energy: EnergyConfig,
    pub sight: SightConfig,
}

impl EcosystemConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.world.width <= 0 || self.world.height <= 0 {
            return Err(Error::InvalidArgument(format!(
                "World dimensions must be positive, got {}x{}",
                self.world.width, self.world.height
            )));
        }

        if !(0..=MAX_PLANTS).contains(&self.world.initial_plants) {
            return Err(Error::InvalidArgument(format!(
                "Initial plants must be within 0..={}, got {}",
                MAX_PLANTS, self.world.initial_plants
            )));
        }

        if self.sight.herbivore < 0 || self.sight.carnivore < 0 {
            return Err(Error::InvalidArgument(
                "Sight radius cannot be negative".to_string(),
            ));
        }

        if self.energy.start_energy <= 0 || self.energy.carnivore_energy() <= 0 {
            return Err(Error::InvalidArgument(
                "Starting energy must be positive".to_string(),
            ));
        }

        if self.energy.carnivore_metabolism < 0 {
            return Err(Error::InvalidArgument(format!(
                "Carnivore metabolism cannot be negative, got {}",
                self.energy.carnivore_metabolism
            )));
        }

        Ok(())
    }
}
