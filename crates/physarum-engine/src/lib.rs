//! Simulation engine for the Physarum trail model.
//!
//! [`Simulation`] owns the trail field and the agent population for one
//! run and advances them tick by tick: the agent pass deposits into the
//! live buffer, then diffusion writes the scratch buffer and the two are
//! swapped. [`AnySimulation`] picks the 2-D or 3-D engine from the
//! configured extents at runtime.
//!
//! # Lifecycle
//!
//! A `Simulation` exists only once [`Simulation::initialize`] succeeds,
//! and [`Simulation::dispose`] consumes it, so no operation can reach an
//! uninitialized or disposed instance.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dynamic;
pub mod metrics;
pub mod simulation;

pub use dynamic::AnySimulation;
pub use metrics::TickMetrics;
pub use simulation::Simulation;
