//! Health depletion and the deposit-silent starved state.

use physarum_core::SimulationConfig;
use physarum_engine::Simulation;
use physarum_space::Grid2D;
use physarum_test_utils::{scenario_agent, scenario_config, scenario_species};
use proptest::prelude::*;

fn starving(rate: f32, respawn: bool) -> Simulation<Grid2D> {
    let cfg = SimulationConfig {
        starvation_rate: rate,
        respawn_starved: respawn,
        ..scenario_config()
    };
    Simulation::with_agents(cfg, scenario_species(), vec![scenario_agent()], 0).unwrap()
}

#[test]
fn health_reaches_zero_after_exactly_five_ticks() {
    let mut sim = starving(0.2, false);
    for tick in 1..=4 {
        sim.advance(1.0).unwrap();
        assert!(sim.agents()[0].health > 0.0, "starved early at tick {tick}");
    }
    sim.advance(1.0).unwrap();
    assert_eq!(sim.agents()[0].health, 0.0);
    assert_eq!(sim.last_metrics().starved_agents, 1);
}

#[test]
fn starved_agent_deposits_nothing_but_keeps_moving() {
    let mut sim = starving(0.2, false);
    for _ in 0..5 {
        sim.advance(1.0).unwrap();
    }
    let mass = sim.trail_field().mass();
    let before = sim.agents()[0].position;
    for _ in 0..3 {
        sim.advance(1.0).unwrap();
        assert_eq!(sim.last_metrics().deposit_count, 0);
    }
    assert_eq!(sim.trail_field().mass(), mass);
    assert_ne!(sim.agents()[0].position, before);
}

#[test]
fn deposits_scale_with_remaining_health() {
    let mut sim = starving(0.25, false);
    sim.advance(1.0).unwrap();
    // trail_weight 5 at health 0.75.
    assert_eq!(sim.trail_field().mass(), 3.75);
}

#[test]
fn respawn_restores_health() {
    let mut sim = starving(0.5, true);
    sim.advance(1.0).unwrap();
    sim.advance(1.0).unwrap();
    assert_eq!(sim.last_metrics().respawned_agents, 1);
    assert_eq!(sim.last_metrics().starved_agents, 0);
    assert_eq!(sim.agents()[0].health, 1.0);
}

proptest! {
    #[test]
    fn health_never_rises_or_goes_negative(
        rate in 0.0f32..2.0,
        dts in prop::collection::vec(0.0f32..2.0, 1..20),
    ) {
        let mut sim = starving(rate, false);
        let mut last = sim.agents()[0].health;
        for dt in dts {
            sim.advance(dt).unwrap();
            let health = sim.agents()[0].health;
            prop_assert!(health >= 0.0);
            prop_assert!(health <= last);
            // Only a starved agent stays silent.
            prop_assert_eq!(sim.last_metrics().deposit_count == 0, health == 0.0);
            last = health;
        }
    }
}
