//! Run configuration and validation.
//!
//! [`SimulationConfig`] is fixed for the lifetime of a simulation
//! instance. [`validate()`](SimulationConfig::validate) checks structural
//! invariants at startup; changing extents or agent count means building
//! a new instance.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::species::SpeciesTable;

// ── Extents ────────────────────────────────────────────────────────

/// Per-axis lattice extents. A `depth` makes the lattice volumetric.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extents {
    /// Cells along x.
    pub width: u32,
    /// Cells along y.
    pub height: u32,
    /// Cells along z, `None` for planar lattices.
    #[serde(default)]
    pub depth: Option<u32>,
}

impl Extents {
    /// Planar extents.
    pub fn planar(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            depth: None,
        }
    }

    /// Volumetric extents.
    pub fn volumetric(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth: Some(depth),
        }
    }

    /// 2 or 3.
    pub fn ndim(&self) -> usize {
        if self.depth.is_some() {
            3
        } else {
            2
        }
    }

    /// Extents padded to three axes; planar lattices have depth 1.
    pub fn padded(&self) -> [u32; 3] {
        [self.width, self.height, self.depth.unwrap_or(1)]
    }

    /// Total cell count, or `None` on overflow.
    pub fn cell_count(&self) -> Option<usize> {
        self.padded()
            .iter()
            .try_fold(1usize, |acc, &n| acc.checked_mul(n as usize))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroExtent { axis: "width" });
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroExtent { axis: "height" });
        }
        if self.depth == Some(0) {
            return Err(ConfigError::ZeroExtent { axis: "depth" });
        }
        Ok(())
    }
}

// ── Enums ──────────────────────────────────────────────────────────

/// Initial placement and heading of agents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnMode {
    /// Uniform over the lattice, random heading.
    #[default]
    Random,
    /// All agents at the centre, random heading.
    Point,
    /// Inside a disc/ball of radius `height / 2`, heading toward the centre.
    InwardRadial,
    /// Inside a disc/ball of radius `0.15 * height`, random heading.
    RandomRadial,
}

/// How `TrailField::sample` reads between cell centres.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterMode {
    /// Value of the cell nearest the position.
    #[default]
    Nearest,
    /// Bilinear (2-D) or trilinear (3-D) interpolation.
    Linear,
}

/// Where the data-parallel passes run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Execution {
    /// On the calling thread.
    Serial,
    /// On the rayon global pool.
    #[default]
    Parallel,
}

/// How agents are distributed among species when there is more than one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeciesAssignment {
    /// Uniformly at random from the agent's own stream.
    #[default]
    Random,
    /// Agent `i` gets species `i % species_count`.
    Cyclic,
}

// ── SimulationConfig ──────────────────────────────────────────────

/// Immutable run parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Lattice extents; `depth` selects the 3-D engine.
    pub extents: Extents,
    /// Number of agents. At least 1.
    pub agent_count: u32,
    /// Initial placement.
    pub spawn_mode: SpawnMode,
    /// Trail deposited per agent per tick at full health.
    pub trail_weight: f32,
    /// Fraction of each cell's value lost per tick, in `[0, 1]`.
    pub decay_rate: f32,
    /// Blend factor toward the neighbourhood mean per tick, in `[0, 1]`.
    pub diffuse_rate: f32,
    /// Health lost per second of simulated time.
    pub starvation_rate: f32,
    /// Ticks per external frame. At least 1.
    pub steps_per_tick: u32,
    /// Sampling policy for sensors.
    pub filter_mode: FilterMode,
    /// Serial or rayon-parallel passes. Results are identical.
    pub execution: Execution,
    /// Species distribution for multi-species tables.
    pub species_assignment: SpeciesAssignment,
    /// Half-range of the per-agent sensor weight perturbation around 1.0.
    pub sensor_weight_jitter: f32,
    /// Respawn starved agents instead of leaving them silent.
    pub respawn_starved: bool,
    /// Scan the field for NaN/negative values after every tick.
    pub debug_validation: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            extents: Extents::planar(1280, 720),
            agent_count: 100,
            spawn_mode: SpawnMode::Random,
            trail_weight: 1.0,
            decay_rate: 0.02,
            diffuse_rate: 0.5,
            starvation_rate: 0.1,
            steps_per_tick: 1,
            filter_mode: FilterMode::Nearest,
            execution: Execution::Parallel,
            species_assignment: SpeciesAssignment::Random,
            sensor_weight_jitter: 0.5,
            respawn_starved: false,
            debug_validation: cfg!(debug_assertions),
        }
    }
}

impl SimulationConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.extents.validate()?;
        if self.agent_count == 0 {
            return Err(ConfigError::ZeroAgents);
        }
        if self.steps_per_tick == 0 {
            return Err(ConfigError::ZeroStepsPerTick);
        }
        non_negative("trail_weight", self.trail_weight)?;
        non_negative("starvation_rate", self.starvation_rate)?;
        unit_interval("decay_rate", self.decay_rate)?;
        unit_interval("diffuse_rate", self.diffuse_rate)?;
        non_negative("sensor_weight_jitter", self.sensor_weight_jitter)?;
        Ok(())
    }

    /// Dimensionality implied by the extents.
    pub fn ndim(&self) -> usize {
        self.extents.ndim()
    }
}

// ── SimulationRecord ──────────────────────────────────────────────

/// The structured record an external loader hands to `initialize`:
/// run parameters, species and seed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
    /// Run parameters.
    #[serde(default)]
    pub config: SimulationConfig,
    /// Species in channel order.
    pub species: SpeciesTable,
    /// Run seed.
    #[serde(default)]
    pub seed: u64,
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidRate { name, value });
    }
    Ok(())
}

fn unit_interval(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::InvalidRate { name, value });
    }
    Ok(())
}
