//! Benchmark profiles for the Physarum simulation.
//!
//! - [`reference_profile`]: 256×256 planar lattice, 20K agents, two species
//! - [`stress_profile`]: 1024×1024 planar lattice, 200K agents, four species
//! - [`volume_profile`]: 64³ volumetric lattice, 50K agents, three species

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use physarum_core::{
    Extents, SimulationConfig, SimulationRecord, SpawnMode, SpeciesParams, SpeciesTable,
};

/// Frame dt used by every profile.
pub const PROFILE_DT: f32 = 1.0 / 60.0;

fn species(params: Vec<SpeciesParams>) -> SpeciesTable {
    match SpeciesTable::new(params) {
        Ok(t) => t,
        Err(e) => panic!("benchmark species table invalid: {e}"),
    }
}

fn params(
    move_speed: f32,
    sensor_angle: f32,
    sensor_offset: f32,
    color: [f32; 4],
) -> SpeciesParams {
    SpeciesParams {
        move_speed,
        turn_speed: 4.0,
        sensor_angle,
        sensor_offset,
        sensor_size: 1,
        color,
    }
}

/// 256×256, 20K agents spawned in a centred disc, two species.
pub fn reference_profile(seed: u64) -> SimulationRecord {
    SimulationRecord {
        config: SimulationConfig {
            extents: Extents::planar(256, 256),
            agent_count: 20_000,
            spawn_mode: SpawnMode::InwardRadial,
            debug_validation: false,
            ..SimulationConfig::default()
        },
        species: species(vec![
            params(30.0, 30.0, 9.0, [1.0, 0.6, 0.1, 1.0]),
            params(25.0, 45.0, 12.0, [0.1, 0.6, 1.0, 1.0]),
        ]),
        seed,
    }
}

/// 1024×1024, 200K agents, four species with wide sensors.
pub fn stress_profile(seed: u64) -> SimulationRecord {
    SimulationRecord {
        config: SimulationConfig {
            extents: Extents::planar(1024, 1024),
            agent_count: 200_000,
            debug_validation: false,
            ..SimulationConfig::default()
        },
        species: species(vec![
            SpeciesParams {
                sensor_size: 3,
                ..params(40.0, 22.5, 20.0, [1.0, 0.2, 0.2, 1.0])
            },
            params(35.0, 30.0, 25.0, [0.2, 1.0, 0.2, 1.0]),
            params(30.0, 35.0, 30.0, [0.2, 0.2, 1.0, 1.0]),
            params(45.0, 40.0, 15.0, [1.0, 1.0, 0.2, 1.0]),
        ]),
        seed,
    }
}

/// 64³, 50K agents in a small central ball, three species.
pub fn volume_profile(seed: u64) -> SimulationRecord {
    SimulationRecord {
        config: SimulationConfig {
            extents: Extents::volumetric(64, 64, 64),
            agent_count: 50_000,
            spawn_mode: SpawnMode::RandomRadial,
            debug_validation: false,
            ..SimulationConfig::default()
        },
        species: species(vec![
            params(12.0, 30.0, 4.0, [1.0, 0.4, 0.0, 1.0]),
            params(10.0, 40.0, 5.0, [0.0, 1.0, 0.4, 1.0]),
            params(14.0, 25.0, 3.0, [0.4, 0.0, 1.0, 1.0]),
        ]),
        seed,
    }
}
