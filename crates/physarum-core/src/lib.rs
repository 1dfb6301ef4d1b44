//! Core types for the Physarum trail simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the run configuration, the species table, species channel masks,
//! the tick counter, and the error taxonomy shared by every other crate
//! in the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alloc;
pub mod config;
pub mod error;
pub mod id;
pub mod mask;
pub mod species;

pub use config::{
    Execution, Extents, FilterMode, SimulationConfig, SimulationRecord, SpawnMode,
    SpeciesAssignment,
};
pub use error::{ConfigError, InitError, InvariantViolation, ResourceError, StepError};
pub use id::TickId;
pub use mask::SpeciesMask;
pub use species::{SpeciesParams, SpeciesTable, MAX_SPECIES};
