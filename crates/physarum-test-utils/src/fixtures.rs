//! Reusable simulation fixtures.

use physarum_agents::{agent_rng, Agent};
use physarum_core::{
    Execution, Extents, SimulationConfig, SpawnMode, SpeciesAssignment, SpeciesParams,
    SpeciesTable,
};
use physarum_space::{Heading, Lattice};

/// Distinct colours for up to four species.
const PALETTE: [[f32; 4]; 4] = [
    [1.0, 0.2, 0.2, 1.0],
    [0.2, 1.0, 0.2, 1.0],
    [0.2, 0.2, 1.0, 1.0],
    [1.0, 1.0, 0.2, 1.0],
];

/// A small, fully validated config: default rates, parallel execution,
/// debug validation on, cyclic species assignment.
pub fn small_config(extents: Extents, agent_count: u32) -> SimulationConfig {
    SimulationConfig {
        extents,
        agent_count,
        spawn_mode: SpawnMode::Random,
        species_assignment: SpeciesAssignment::Cyclic,
        debug_validation: true,
        ..SimulationConfig::default()
    }
}

/// `count` species with short sensors and slow movement, scaled so they
/// fit small lattices.
pub fn species_table(count: usize) -> SpeciesTable {
    let species = (0..count)
        .map(|i| SpeciesParams {
            move_speed: 2.0 + i as f32,
            turn_speed: 1.5,
            sensor_angle: 30.0 + 5.0 * i as f32,
            sensor_offset: 2.0,
            sensor_size: 1,
            color: PALETTE[i % PALETTE.len()],
        })
        .collect();
    match SpeciesTable::new(species) {
        Ok(t) => t,
        Err(e) => panic!("fixture species table invalid: {e}"),
    }
}

/// 10×10 planar grid, one agent, trail weight 5, no decay, no diffusion,
/// no starvation, serial execution.
pub fn scenario_config() -> SimulationConfig {
    SimulationConfig {
        extents: Extents::planar(10, 10),
        agent_count: 1,
        trail_weight: 5.0,
        decay_rate: 0.0,
        diffuse_rate: 0.0,
        starvation_rate: 0.0,
        execution: Execution::Serial,
        sensor_weight_jitter: 0.0,
        debug_validation: true,
        ..SimulationConfig::default()
    }
}

/// One species with move speed 1 and a zero sensor offset, so every probe
/// reads the same cell and the agent never turns.
pub fn scenario_species() -> SpeciesTable {
    let params = SpeciesParams {
        move_speed: 1.0,
        turn_speed: 1.0,
        sensor_angle: 45.0,
        sensor_offset: 0.0,
        sensor_size: 1,
        ..SpeciesParams::default()
    };
    match SpeciesTable::single(params) {
        Ok(t) => t,
        Err(e) => panic!("fixture species table invalid: {e}"),
    }
}

/// A full-health agent with unit sensor weights drawing from stream
/// `index` of seed 0.
pub fn agent_at<L: Lattice>(
    position: &[f32],
    heading: Heading,
    species: usize,
    species_count: usize,
    index: u64,
) -> Agent<L> {
    match Agent::new(
        L::point_from(position),
        heading,
        species,
        species_count,
        agent_rng(0, index),
    ) {
        Ok(a) => a,
        Err(e) => panic!("fixture agent invalid: {e}"),
    }
}

/// The scenario agent: at (5, 5), heading along +x.
pub fn scenario_agent<L: Lattice>() -> Agent<L> {
    agent_at(&[5.0, 5.0, 0.0], Heading::planar(0.0), 0, 1, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_validate() {
        scenario_config().validate().unwrap();
        small_config(Extents::volumetric(4, 4, 4), 3).validate().unwrap();
        assert_eq!(species_table(4).len(), 4);
        assert_eq!(scenario_species().len(), 1);
    }
}
