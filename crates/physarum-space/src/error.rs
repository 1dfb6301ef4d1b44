//! Error types for lattice construction.

use physarum_core::ConfigError;
use std::fmt;

/// Errors arising from lattice construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// An axis has zero cells.
    EmptyAxis {
        /// Axis name.
        axis: &'static str,
    },
    /// An axis exceeds the coordinate range.
    DimensionTooLarge {
        /// Axis name.
        axis: &'static str,
        /// The value provided.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
    /// The extents describe the wrong number of axes for this lattice.
    DimensionMismatch {
        /// Axes required by the lattice.
        expected: usize,
        /// Axes described by the extents.
        got: usize,
    },
    /// The cell count does not fit in `usize`.
    CellCountOverflow,
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAxis { axis } => write!(f, "{axis} must have at least one cell"),
            Self::DimensionTooLarge { axis, value, max } => {
                write!(f, "{axis} {value} exceeds maximum {max}")
            }
            Self::DimensionMismatch { expected, got } => {
                write!(f, "expected {expected}D extents, got {got}D")
            }
            Self::CellCountOverflow => write!(f, "cell count overflows usize"),
        }
    }
}

impl std::error::Error for SpaceError {}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        match e {
            SpaceError::EmptyAxis { axis } => ConfigError::ZeroExtent { axis },
            SpaceError::DimensionMismatch { expected, got } => {
                ConfigError::DimensionMismatch { expected, got }
            }
            SpaceError::DimensionTooLarge { .. } | SpaceError::CellCountOverflow => {
                ConfigError::CellCountOverflow {
                    value: e.to_string(),
                }
            }
        }
    }
}
