//! Physarum: a slime-mold trail simulation on planar and volumetric lattices.
//!
//! This is the top-level facade crate that re-exports the public API from
//! every Physarum sub-crate.
//!
//! # Quick start
//!
//! ```rust
//! use physarum::prelude::*;
//!
//! let config = SimulationConfig {
//!     extents: Extents::planar(64, 64),
//!     agent_count: 500,
//!     ..SimulationConfig::default()
//! };
//! let species = SpeciesTable::single(SpeciesParams::default()).unwrap();
//! let mut sim = AnySimulation::initialize(config, species, 42).unwrap();
//! sim.advance_frame(1.0 / 60.0).unwrap();
//! assert_eq!(sim.current_tick(), TickId(1));
//! let heat = sim.trail_channel(0);
//! assert_eq!(heat.len(), 64 * 64);
//! sim.dispose();
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `physarum-core` | Config, species, masks, errors, tick ids |
//! | [`space`] | `physarum-space` | `Lattice`, `Grid2D`, `Grid3D`, headings |
//! | [`field`] | `physarum-field` | `TrailField` and read-only snapshots |
//! | [`agents`] | `physarum-agents` | Agents, sensing, steering, the agent pass |
//! | [`engine`] | `physarum-engine` | `Simulation`, `AnySimulation`, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, configuration and errors (`physarum-core`).
pub use physarum_core as types;

/// Lattices and headings (`physarum-space`).
///
/// [`space::Grid2D`] and [`space::Grid3D`] implement [`space::Lattice`].
pub use physarum_space as space;

/// The double-buffered trail field (`physarum-field`).
pub use physarum_field as field;

/// Agents and the agent pass (`physarum-agents`).
pub use physarum_agents as agents;

/// Tick orchestration and lifecycle (`physarum-engine`).
///
/// [`engine::Simulation`] for a lattice known at compile time,
/// [`engine::AnySimulation`] to choose from the extents at runtime.
pub use physarum_engine as engine;

/// Common imports for typical Physarum usage.
///
/// ```rust
/// use physarum::prelude::*;
/// ```
pub mod prelude {
    // Configuration
    pub use physarum_core::{
        Execution, Extents, FilterMode, SimulationConfig, SimulationRecord, SpawnMode,
        SpeciesAssignment, SpeciesParams, SpeciesTable, TickId,
    };

    // Errors
    pub use physarum_core::{ConfigError, InitError, InvariantViolation, ResourceError, StepError};

    // Space
    pub use physarum_space::{Grid2D, Grid3D, Heading, Lattice};

    // Field and agents
    pub use physarum_agents::Agent;
    pub use physarum_field::TrailSnapshot;

    // Engine
    pub use physarum_engine::{AnySimulation, Simulation, TickMetrics};
}
