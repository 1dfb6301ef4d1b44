//! Lattice geometry for the Physarum trail simulation.
//!
//! Provides the [`Lattice`] trait and its two implementations,
//! [`Grid2D`] and [`Grid3D`]. Continuous agent positions live in
//! `[0, extent)` per axis and wrap toroidally; discrete cells are
//! addressed by a flat rank (x fastest, then y, then z). Out-of-range
//! integer coordinates resolve through an [`EdgeBehavior`]: wrap for
//! agents and sensors, clamp for the diffusion stencil.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod grid2d;
pub mod grid3d;
pub mod heading;
pub mod lattice;

pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use grid2d::Grid2D;
pub use grid3d::Grid3D;
pub use heading::Heading;
pub use lattice::{CellCoord, Lattice, Stencil};
