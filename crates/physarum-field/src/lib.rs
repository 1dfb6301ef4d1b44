//! Multi-channel trail field for the Physarum simulation.
//!
//! [`TrailField`] holds two buffers of `cell_count × channels` values.
//! Agents sense and deposit into `current`; [`TrailField::diffuse`] reads
//! `current` and writes `scratch`, then [`TrailField::swap`] exchanges the
//! two so the next tick reads the fully diffused result.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod deposit;
pub mod diffusion;
pub mod sample;
pub mod snapshot;
pub mod trail;

pub use deposit::Deposit;
pub use snapshot::TrailSnapshot;
pub use trail::TrailField;
