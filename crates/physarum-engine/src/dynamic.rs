//! Runtime choice between the planar and volumetric engines.

use physarum_core::{
    InitError, SimulationConfig, SimulationRecord, SpeciesTable, StepError, TickId,
};
use physarum_field::TrailSnapshot;
use physarum_space::{Grid2D, Grid3D};

use crate::metrics::TickMetrics;
use crate::simulation::Simulation;

/// A simulation whose dimensionality is picked from the configured
/// extents: planar without a depth, volumetric with one.
#[derive(Debug)]
pub enum AnySimulation {
    /// 2-D lattice, up to four species.
    Planar(Simulation<Grid2D>),
    /// 3-D lattice, up to three species.
    Volumetric(Simulation<Grid3D>),
}

macro_rules! dispatch {
    ($self:expr, $sim:ident => $body:expr) => {
        match $self {
            AnySimulation::Planar($sim) => $body,
            AnySimulation::Volumetric($sim) => $body,
        }
    };
}

impl AnySimulation {
    /// Build the engine matching `config.extents`.
    pub fn initialize(
        config: SimulationConfig,
        species: SpeciesTable,
        seed: u64,
    ) -> Result<Self, InitError> {
        Ok(match config.extents.depth {
            None => Self::Planar(Simulation::initialize(config, species, seed)?),
            Some(_) => Self::Volumetric(Simulation::initialize(config, species, seed)?),
        })
    }

    /// Build from a loaded record.
    pub fn from_record(record: SimulationRecord) -> Result<Self, InitError> {
        Self::initialize(record.config, record.species, record.seed)
    }

    /// 2 or 3.
    pub fn ndim(&self) -> usize {
        match self {
            Self::Planar(_) => 2,
            Self::Volumetric(_) => 3,
        }
    }

    /// See [`Simulation::advance`].
    pub fn advance(&mut self, dt: f32) -> Result<&TickMetrics, StepError> {
        dispatch!(self, s => s.advance(dt))
    }

    /// See [`Simulation::advance_frame`].
    pub fn advance_frame(&mut self, dt: f32) -> Result<&TickMetrics, StepError> {
        dispatch!(self, s => s.advance_frame(dt))
    }

    /// See [`Simulation::trail_field`].
    pub fn trail_field(&self) -> TrailSnapshot<'_> {
        dispatch!(self, s => s.trail_field())
    }

    /// See [`Simulation::trail_channel`].
    pub fn trail_channel(&self, channel: usize) -> Vec<f32> {
        dispatch!(self, s => s.trail_channel(channel))
    }

    /// Agent positions padded to three axes (`z = 0` when planar).
    pub fn agent_positions(&self) -> Vec<[f32; 3]> {
        match self {
            Self::Planar(s) => s
                .agents()
                .iter()
                .map(|a| [a.position[0], a.position[1], 0.0])
                .collect(),
            Self::Volumetric(s) => s.agents().iter().map(|a| a.position).collect(),
        }
    }

    /// Number of agents.
    pub fn agent_count(&self) -> usize {
        dispatch!(self, s => s.agents().len())
    }

    /// Lattice extents padded to three axes.
    pub fn dims(&self) -> [u32; 3] {
        dispatch!(self, s => s.config().extents.padded())
    }

    /// See [`Simulation::species`].
    pub fn species(&self) -> &SpeciesTable {
        dispatch!(self, s => s.species())
    }

    /// See [`Simulation::current_tick`].
    pub fn current_tick(&self) -> TickId {
        dispatch!(self, s => s.current_tick())
    }

    /// See [`Simulation::last_metrics`].
    pub fn last_metrics(&self) -> &TickMetrics {
        dispatch!(self, s => s.last_metrics())
    }

    /// The planar engine, if that is what was built.
    pub fn as_planar(&self) -> Option<&Simulation<Grid2D>> {
        match self {
            Self::Planar(s) => Some(s),
            Self::Volumetric(_) => None,
        }
    }

    /// The volumetric engine, if that is what was built.
    pub fn as_volumetric(&self) -> Option<&Simulation<Grid3D>> {
        match self {
            Self::Volumetric(s) => Some(s),
            Self::Planar(_) => None,
        }
    }

    /// See [`Simulation::dispose`].
    pub fn dispose(self) {
        dispatch!(self, s => s.dispose())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physarum_core::Extents;
    use physarum_test_utils::{small_config, species_table};

    #[test]
    fn depth_selects_volumetric() {
        let cfg = small_config(Extents::volumetric(8, 8, 4), 5);
        let sim = AnySimulation::initialize(cfg, species_table(3), 1).unwrap();
        assert_eq!(sim.ndim(), 3);
        assert!(sim.as_volumetric().is_some());
        assert_eq!(sim.dims(), [8, 8, 4]);
    }

    #[test]
    fn planar_positions_padded() {
        let cfg = small_config(Extents::planar(8, 8), 5);
        let mut sim = AnySimulation::initialize(cfg, species_table(4), 1).unwrap();
        assert_eq!(sim.ndim(), 2);
        sim.advance_frame(0.1).unwrap();
        assert_eq!(sim.current_tick(), TickId(1));
        assert!(sim.agent_positions().iter().all(|p| p[2] == 0.0));
        assert_eq!(sim.trail_field().channel_count(), 4);
        assert_eq!(sim.trail_channel(0).len(), 64);
        sim.dispose();
    }

    #[test]
    fn record_round_trip_initializes() {
        let record = SimulationRecord {
            config: small_config(Extents::planar(12, 12), 3),
            species: species_table(2),
            seed: 4,
        };
        let a = AnySimulation::from_record(record.clone()).unwrap();
        let b = AnySimulation::initialize(record.config, record.species, record.seed).unwrap();
        assert_eq!(a.agent_positions(), b.agent_positions());
    }

    #[test]
    fn four_volumetric_species_rejected() {
        let cfg = small_config(Extents::volumetric(4, 4, 4), 4);
        assert!(AnySimulation::initialize(cfg, species_table(4), 1).is_err());
    }
}
