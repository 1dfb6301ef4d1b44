//! Test utilities for Physarum development.
//!
//! Configs, species tables and hand-placed agents shared by the
//! integration tests and benches of every crate.

pub mod fixtures;

pub use fixtures::{
    agent_at, scenario_agent, scenario_config, scenario_species, small_config, species_table,
};
