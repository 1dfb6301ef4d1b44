//! Read-only views of the live buffer for presenters.

/// Borrowed, immutable view of a trail field between ticks.
#[derive(Clone, Copy, Debug)]
pub struct TrailSnapshot<'a> {
    data: &'a [f32],
    channels: usize,
}

impl<'a> TrailSnapshot<'a> {
    pub(crate) fn new(data: &'a [f32], channels: usize) -> Self {
        Self { data, channels }
    }

    /// Channels per cell.
    pub fn channel_count(&self) -> usize {
        self.channels
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.data.len() / self.channels
    }

    /// Value at `(cell, channel)`, or `None` if either is out of range.
    pub fn get(&self, cell: usize, channel: usize) -> Option<f32> {
        if channel >= self.channels || cell >= self.cell_count() {
            return None;
        }
        self.data.get(cell * self.channels + channel).copied()
    }

    /// Copy one channel out as a dense per-cell array.
    ///
    /// Returns an empty vector for an out-of-range channel.
    pub fn channel(&self, channel: usize) -> Vec<f32> {
        if channel >= self.channels {
            return Vec::new();
        }
        self.data
            .iter()
            .skip(channel)
            .step_by(self.channels)
            .copied()
            .collect()
    }

    /// Sum of one channel.
    pub fn channel_mass(&self, channel: usize) -> f64 {
        self.channel(channel).iter().map(|&v| v as f64).sum()
    }

    /// Sum of every value.
    pub fn mass(&self) -> f64 {
        self.data.iter().map(|&v| v as f64).sum()
    }

    /// Raw cell-major data.
    pub fn as_slice(&self) -> &'a [f32] {
        self.data
    }
}
