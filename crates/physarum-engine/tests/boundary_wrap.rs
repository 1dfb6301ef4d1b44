//! Agents leaving one edge re-enter from the opposite edge.

use physarum_core::{Extents, SimulationConfig, SpeciesParams, SpeciesTable};
use physarum_engine::Simulation;
use physarum_space::{Grid2D, Grid3D, Heading, Lattice};
use physarum_test_utils::{agent_at, scenario_config};

fn mover(speed: f32) -> SpeciesTable {
    SpeciesTable::single(SpeciesParams {
        move_speed: speed,
        sensor_offset: 0.0,
        ..SpeciesParams::default()
    })
    .unwrap()
}

#[test]
fn crossing_x_edge_wraps() {
    let agent = agent_at::<Grid2D>(&[9.9, 3.0], Heading::planar(0.0), 0, 1, 0);
    let mut sim = Simulation::with_agents(scenario_config(), mover(0.5), vec![agent], 0).unwrap();
    sim.advance(1.0).unwrap();
    let p = sim.agents()[0].position;
    assert!((p[0] - 0.4).abs() < 1e-5, "x = {}", p[0]);
    assert_eq!(p[1], 3.0);
    // The deposit lands in the cell the wrapped position rounds to.
    assert_eq!(sim.trail_field().get(sim.lattice().rank(0, 3, 0), 0), Some(5.0));
}

#[test]
fn crossing_origin_wraps_to_far_edge() {
    let agent = agent_at::<Grid2D>(&[0.2, 3.0], Heading::planar(std::f32::consts::PI), 0, 1, 0);
    let mut sim = Simulation::with_agents(scenario_config(), mover(1.0), vec![agent], 0).unwrap();
    sim.advance(1.0).unwrap();
    let p = sim.agents()[0].position;
    assert!((p[0] - 9.2).abs() < 1e-4, "x = {}", p[0]);
}

#[test]
fn volumetric_wrap_along_depth() {
    let cfg = SimulationConfig {
        extents: Extents::volumetric(6, 6, 6),
        ..scenario_config()
    };
    let up = Heading::new(0.0, std::f32::consts::FRAC_PI_2);
    let agent = agent_at::<Grid3D>(&[3.0, 3.0, 5.5], up, 0, 1, 0);
    let mut sim = Simulation::with_agents(cfg, mover(1.0), vec![agent], 0).unwrap();
    sim.advance(1.0).unwrap();
    let p = sim.agents()[0].position;
    assert!((p[2] - 0.5).abs() < 1e-5, "z = {}", p[2]);
    assert!(p.iter().all(|&v| (0.0..6.0).contains(&v)));
}
