//! The double-buffered trail field.

use physarum_core::alloc::try_filled;
use physarum_core::{ConfigError, Execution, InitError, InvariantViolation, SpeciesMask};
use physarum_space::Lattice;

use crate::deposit::Deposit;
use crate::diffusion::DiffusionKernel;
use crate::snapshot::TrailSnapshot;

/// A `cell_count × channels` lattice of non-negative values with a
/// ping-pong scratch buffer.
///
/// Layout is cell-major: channel `c` of cell `rank` lives at
/// `rank * channels + c`.
#[derive(Clone, Debug)]
pub struct TrailField<L: Lattice> {
    lattice: L,
    channels: usize,
    current: Vec<f32>,
    scratch: Vec<f32>,
}

impl<L: Lattice> TrailField<L> {
    /// Allocate a zeroed field.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::TooManySpecies`] if `channels` is zero or exceeds
    ///   `L::MAX_CHANNELS`
    /// - [`ConfigError::CellCountOverflow`] if the buffer length overflows
    /// - [`ResourceError`](physarum_core::ResourceError) if either buffer
    ///   cannot be allocated
    pub fn new(lattice: L, channels: usize) -> Result<Self, InitError> {
        if channels == 0 {
            return Err(ConfigError::EmptySpeciesTable.into());
        }
        if channels > L::MAX_CHANNELS {
            return Err(ConfigError::TooManySpecies {
                count: channels,
                max: L::MAX_CHANNELS,
            }
            .into());
        }
        let len = lattice
            .cell_count()
            .checked_mul(channels)
            .ok_or_else(|| ConfigError::CellCountOverflow {
                value: format!("{} cells × {channels} channels", lattice.cell_count()),
            })?;
        let current = try_filled(len, 0.0f32, "trail field")?;
        let scratch = try_filled(len, 0.0f32, "trail scratch")?;
        Ok(Self {
            lattice,
            channels,
            current,
            scratch,
        })
    }

    /// The lattice this field covers.
    pub fn lattice(&self) -> &L {
        &self.lattice
    }

    /// Number of channels per cell.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.lattice.cell_count()
    }

    /// The live buffer.
    pub fn current(&self) -> &[f32] {
        &self.current
    }

    /// Channel values of one cell in the live buffer.
    pub fn cell(&self, rank: usize) -> Option<&[f32]> {
        let start = self.index(rank, 0)?;
        self.current.get(start..start + self.channels)
    }

    /// Read one value from the live buffer.
    pub fn get(&self, rank: usize, channel: usize) -> Option<f32> {
        let i = self.index(rank, channel)?;
        self.current.get(i).copied()
    }

    /// Overwrite one value in the live buffer. Returns `false` if out of range.
    pub fn set(&mut self, rank: usize, channel: usize, value: f32) -> bool {
        let Some(i) = self.index(rank, channel) else {
            return false;
        };
        match self.current.get_mut(i) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    fn index(&self, rank: usize, channel: usize) -> Option<usize> {
        if rank >= self.cell_count() || channel >= self.channels {
            return None;
        }
        Some(rank * self.channels + channel)
    }

    /// Add `amount * mask[c]` to each channel `c` of `cell`.
    pub fn deposit(
        &mut self,
        cell: usize,
        mask: SpeciesMask,
        amount: f32,
    ) -> Result<(), InvariantViolation> {
        if mask.len() != self.channels {
            return Err(InvariantViolation::MaskLengthMismatch {
                expected: self.channels,
                got: mask.len(),
            });
        }
        let cell_count = self.cell_count();
        if cell >= cell_count {
            return Err(InvariantViolation::CellOutOfRange { cell, cell_count });
        }
        let base = cell * self.channels;
        for c in mask.channels() {
            self.current[base + c] += amount;
        }
        Ok(())
    }

    /// Fold a batch of deposits in order.
    pub fn apply(&mut self, deposits: &[Deposit]) -> Result<(), InvariantViolation> {
        for d in deposits {
            self.deposit(d.cell, d.mask, d.amount)?;
        }
        Ok(())
    }

    /// Write the diffused and decayed live buffer into scratch.
    ///
    /// `scratch = (v + (mean - v) * diffuse_rate) * (1 - decay_rate)`
    /// where `mean` is the unweighted average over the 3×3 (or 3×3×3)
    /// neighbourhood of each cell, clamped at the edges. Reads only
    /// `current`; call [`swap`](Self::swap) afterwards.
    pub fn diffuse(&mut self, decay_rate: f32, diffuse_rate: f32, execution: Execution) {
        let kernel = DiffusionKernel::new(
            &self.lattice,
            &self.current,
            self.channels,
            decay_rate,
            diffuse_rate,
        );
        kernel.run(&mut self.scratch, execution);
    }

    /// Exchange `current` and `scratch`.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.scratch);
    }

    /// Zero both buffers.
    pub fn clear(&mut self) {
        self.current.fill(0.0);
        self.scratch.fill(0.0);
    }

    /// Sum of every value in the live buffer.
    pub fn mass(&self) -> f64 {
        self.current.iter().map(|&v| v as f64).sum()
    }

    /// Check the live buffer for NaN, infinite and negative values.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        for (i, &v) in self.current.iter().enumerate() {
            let (cell, channel) = (i / self.channels, i % self.channels);
            if !v.is_finite() {
                return Err(InvariantViolation::NonFiniteValue { cell, channel });
            }
            if v < 0.0 {
                return Err(InvariantViolation::NegativeValue {
                    cell,
                    channel,
                    value: v,
                });
            }
        }
        Ok(())
    }

    /// Read-only view of the live buffer.
    pub fn snapshot(&self) -> TrailSnapshot<'_> {
        TrailSnapshot::new(&self.current, self.channels)
    }
}
