//! Error types for the Physarum simulation.
//!
//! Organized by when they can occur: configuration and resource errors
//! surface synchronously from `initialize`, invariant violations are
//! programming faults that fail fast, and step errors come out of
//! `advance`. Nothing in the core is retried; every computation is
//! deterministic given the config, the seed and the dt sequence.

use std::error::Error;
use std::fmt;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a `SimulationConfig` or `SpeciesTable`.
///
/// Never recoverable by the core: the caller must fix the configuration
/// and initialize again.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A lattice axis has zero extent.
    ZeroExtent {
        /// Axis name (`width`, `height` or `depth`).
        axis: &'static str,
    },
    /// `agent_count` is zero.
    ZeroAgents,
    /// Pre-placed agents do not match `agent_count`.
    AgentCountMismatch {
        /// Configured `agent_count`.
        expected: usize,
        /// Agents supplied.
        got: usize,
    },
    /// `steps_per_tick` is zero.
    ZeroStepsPerTick,
    /// A rate parameter is NaN, infinite, or outside its allowed range.
    InvalidRate {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// The species table has no entries.
    EmptySpeciesTable,
    /// More species than the lattice has channels.
    TooManySpecies {
        /// Number of species supplied.
        count: usize,
        /// Channel limit of the target lattice.
        max: usize,
    },
    /// A species entry failed validation.
    InvalidSpecies {
        /// Index of the species in the table.
        index: usize,
        /// Description of the failure.
        reason: String,
    },
    /// Total cell count (times channel count) does not fit in `usize`.
    CellCountOverflow {
        /// Description of the overflowing product.
        value: String,
    },
    /// The extents describe a different dimensionality than the lattice
    /// the simulation was asked to build.
    DimensionMismatch {
        /// Dimensionality of the requested lattice.
        expected: usize,
        /// Dimensionality implied by the extents.
        got: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroExtent { axis } => write!(f, "{axis} must be at least 1"),
            Self::ZeroAgents => write!(f, "agent_count must be at least 1"),
            Self::AgentCountMismatch { expected, got } => {
                write!(f, "{got} agents supplied for agent_count {expected}")
            }
            Self::ZeroStepsPerTick => write!(f, "steps_per_tick must be at least 1"),
            Self::InvalidRate { name, value } => {
                write!(f, "{name} out of range, got {value}")
            }
            Self::EmptySpeciesTable => write!(f, "species table is empty"),
            Self::TooManySpecies { count, max } => {
                write!(f, "{count} species exceed the channel limit of {max}")
            }
            Self::InvalidSpecies { index, reason } => {
                write!(f, "species {index}: {reason}")
            }
            Self::CellCountOverflow { value } => {
                write!(f, "cell count overflows usize: {value}")
            }
            Self::DimensionMismatch { expected, got } => {
                write!(f, "expected {expected}D extents, got {got}D")
            }
        }
    }
}

impl Error for ConfigError {}

// ── ResourceError ──────────────────────────────────────────────────

/// Buffer allocation failures at initialization.
///
/// Fatal to the instance being built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourceError {
    /// A buffer could not be reserved.
    AllocationFailed {
        /// Which buffer was being allocated.
        what: &'static str,
        /// Requested size in bytes.
        bytes: usize,
    },
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { what, bytes } => {
                write!(f, "failed to allocate {bytes} bytes for {what}")
            }
        }
    }
}

impl Error for ResourceError {}

// ── InvariantViolation ─────────────────────────────────────────────

/// Programming-logic faults. Surfaced instead of silently clamped.
#[derive(Clone, Debug, PartialEq)]
pub enum InvariantViolation {
    /// An agent names a species that is not in the table.
    SpeciesOutOfRange {
        /// The offending species index.
        index: usize,
        /// Number of species in the table.
        species_count: usize,
    },
    /// A species mask does not match the field's channel count.
    MaskLengthMismatch {
        /// Field channel count.
        expected: usize,
        /// Mask length.
        got: usize,
    },
    /// A trail value is NaN or infinite.
    NonFiniteValue {
        /// Flat cell rank.
        cell: usize,
        /// Channel index.
        channel: usize,
    },
    /// A trail value is negative.
    NegativeValue {
        /// Flat cell rank.
        cell: usize,
        /// Channel index.
        channel: usize,
        /// The value found.
        value: f32,
    },
    /// A deposit targets a cell outside the lattice.
    CellOutOfRange {
        /// The offending rank.
        cell: usize,
        /// Number of cells in the lattice.
        cell_count: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpeciesOutOfRange {
                index,
                species_count,
            } => write!(
                f,
                "species index {index} out of range for {species_count} species"
            ),
            Self::MaskLengthMismatch { expected, got } => {
                write!(f, "species mask has {got} channels, field has {expected}")
            }
            Self::NonFiniteValue { cell, channel } => {
                write!(f, "non-finite trail value at cell {cell} channel {channel}")
            }
            Self::NegativeValue {
                cell,
                channel,
                value,
            } => write!(
                f,
                "negative trail value {value} at cell {cell} channel {channel}"
            ),
            Self::CellOutOfRange { cell, cell_count } => {
                write!(f, "cell {cell} outside lattice of {cell_count} cells")
            }
        }
    }
}

impl Error for InvariantViolation {}

// ── InitError ──────────────────────────────────────────────────────

/// Everything `initialize` can fail with.
#[derive(Clone, Debug, PartialEq)]
pub enum InitError {
    /// Invalid configuration or species table.
    Config(ConfigError),
    /// Buffer allocation failed.
    Resource(ResourceError),
    /// An agent could not be created consistently with the species table.
    Invariant(InvariantViolation),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Resource(e) => write!(f, "resource: {e}"),
            Self::Invariant(e) => write!(f, "invariant: {e}"),
        }
    }
}

impl Error for InitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Resource(e) => Some(e),
            Self::Invariant(e) => Some(e),
        }
    }
}

impl From<ConfigError> for InitError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ResourceError> for InitError {
    fn from(e: ResourceError) -> Self {
        Self::Resource(e)
    }
}

impl From<InvariantViolation> for InitError {
    fn from(e: InvariantViolation) -> Self {
        Self::Invariant(e)
    }
}

// ── StepError ──────────────────────────────────────────────────────

/// Errors from `advance`.
#[derive(Clone, Debug, PartialEq)]
pub enum StepError {
    /// dt is NaN, infinite, or negative.
    InvalidDt {
        /// The rejected value.
        value: f32,
    },
    /// Debug validation found a corrupted field after the tick.
    Invariant(InvariantViolation),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDt { value } => {
                write!(f, "dt must be finite and non-negative, got {value}")
            }
            Self::Invariant(e) => write!(f, "invariant violated: {e}"),
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invariant(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvariantViolation> for StepError {
    fn from(e: InvariantViolation) -> Self {
        Self::Invariant(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_error_wraps_config_with_source() {
        let err: InitError = ConfigError::ZeroAgents.into();
        assert_eq!(err.to_string(), "config: agent_count must be at least 1");
        assert!(err.source().is_some());
    }

    #[test]
    fn step_error_display_names_value() {
        let err = StepError::InvalidDt { value: -1.0 };
        assert!(err.to_string().contains("-1"));
        assert!(err.source().is_none());
    }

    #[test]
    fn invariant_display_mentions_cell_and_channel() {
        let err = InvariantViolation::NegativeValue {
            cell: 7,
            channel: 2,
            value: -0.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("cell 7"));
        assert!(msg.contains("channel 2"));
    }
}
