//! Agents for the Physarum trail simulation.
//!
//! Each tick every agent senses the trail ahead of it, steers toward the
//! strongest reading, moves, loses health and deposits into its own
//! channel. Agents are processed in fixed-size lanes that read the field
//! immutably and return their deposits; lanes are folded into the field
//! in order afterwards, so serial and parallel runs agree bit for bit.
//!
//! Every agent owns an independent ChaCha8 stream keyed by the run seed
//! and its index, the only source of randomness after spawn.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod population;
pub mod rng;
pub mod sense;
pub mod spawn;
pub mod steer;

pub use agent::{Agent, SensorWeights, STARVATION_EPSILON};
pub use population::{AgentPopulation, PassStats, StepParams, LANE_SIZE};
pub use rng::agent_rng;
pub use sense::{Probe, Readings};
pub use steer::decide;
