//! Per-species movement and sensor parameters.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Upper bound on species (and therefore trail channels) for any lattice.
///
/// Planar lattices allow all four; volumetric ones cap lower, see
/// `Lattice::MAX_CHANNELS` in `physarum-space`.
pub const MAX_SPECIES: usize = 4;

/// Movement and sensor parameters for one species.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeciesParams {
    /// Distance travelled per second of simulated time.
    pub move_speed: f32,
    /// Heading change per second when steering, in radians.
    pub turn_speed: f32,
    /// Angle between the forward probe and each side probe, in degrees.
    pub sensor_angle: f32,
    /// Distance from the agent to each probe point.
    pub sensor_offset: f32,
    /// Width of the sampled window around each probe, in cells. At least 1.
    pub sensor_size: u32,
    /// RGBA display colour, consumed only by external presenters.
    pub color: [f32; 4],
}

impl Default for SpeciesParams {
    fn default() -> Self {
        Self {
            move_speed: 20.0,
            turn_speed: 2.0,
            sensor_angle: 30.0,
            sensor_offset: 35.0,
            sensor_size: 1,
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

impl SpeciesParams {
    /// Sensor angle converted to radians.
    pub fn sensor_angle_radians(&self) -> f32 {
        self.sensor_angle.to_radians()
    }

    fn validate(&self) -> Result<(), String> {
        let finite = [
            ("move_speed", self.move_speed),
            ("turn_speed", self.turn_speed),
            ("sensor_angle", self.sensor_angle),
            ("sensor_offset", self.sensor_offset),
        ];
        for (name, v) in finite {
            if !v.is_finite() {
                return Err(format!("{name} must be finite, got {v}"));
            }
        }
        if self.sensor_offset < 0.0 {
            return Err(format!(
                "sensor_offset must be >= 0, got {}",
                self.sensor_offset
            ));
        }
        if self.sensor_size == 0 {
            return Err("sensor_size must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Immutable, validated, ordered list of 1 to [`MAX_SPECIES`] species.
///
/// The position of a species in the table is its channel index for the
/// lifetime of the simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SpeciesParams>", into = "Vec<SpeciesParams>")]
pub struct SpeciesTable {
    species: Vec<SpeciesParams>,
}

impl SpeciesTable {
    /// Validate and wrap a species list.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptySpeciesTable`] if `species` is empty
    /// - [`ConfigError::TooManySpecies`] if it exceeds [`MAX_SPECIES`]
    /// - [`ConfigError::InvalidSpecies`] for the first malformed entry
    pub fn new(species: Vec<SpeciesParams>) -> Result<Self, ConfigError> {
        if species.is_empty() {
            return Err(ConfigError::EmptySpeciesTable);
        }
        if species.len() > MAX_SPECIES {
            return Err(ConfigError::TooManySpecies {
                count: species.len(),
                max: MAX_SPECIES,
            });
        }
        for (index, params) in species.iter().enumerate() {
            params
                .validate()
                .map_err(|reason| ConfigError::InvalidSpecies { index, reason })?;
        }
        Ok(Self { species })
    }

    /// A one-species table.
    pub fn single(params: SpeciesParams) -> Result<Self, ConfigError> {
        Self::new(vec![params])
    }

    /// Check the table against a lattice channel limit.
    pub fn check_channel_limit(&self, max: usize) -> Result<(), ConfigError> {
        if self.species.len() > max {
            return Err(ConfigError::TooManySpecies {
                count: self.species.len(),
                max,
            });
        }
        Ok(())
    }

    /// Number of species, which is also the trail channel count.
    pub fn len(&self) -> usize {
        self.species.len()
    }

    /// Always `false`: construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Parameters for species `index`, if present.
    pub fn get(&self, index: usize) -> Option<&SpeciesParams> {
        self.species.get(index)
    }

    /// Iterate species in channel order.
    pub fn iter(&self) -> std::slice::Iter<'_, SpeciesParams> {
        self.species.iter()
    }
}

impl std::ops::Index<usize> for SpeciesTable {
    type Output = SpeciesParams;

    fn index(&self, index: usize) -> &SpeciesParams {
        &self.species[index]
    }
}

impl TryFrom<Vec<SpeciesParams>> for SpeciesTable {
    type Error = ConfigError;

    fn try_from(species: Vec<SpeciesParams>) -> Result<Self, ConfigError> {
        Self::new(species)
    }
}

impl From<SpeciesTable> for Vec<SpeciesParams> {
    fn from(table: SpeciesTable) -> Self {
        table.species
    }
}
