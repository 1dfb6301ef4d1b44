//! Species channel masks.

use crate::error::InvariantViolation;
use crate::species::MAX_SPECIES;

/// Routes an agent's deposits and sensing to its channel(s).
///
/// Conceptually a vector of `len` weights, each 0 or 1: one-hot for
/// multi-species runs, all-ones when the field has a single channel.
/// Stored as a bitset so it stays `Copy` and fits in two bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpeciesMask {
    bits: u8,
    len: u8,
}

impl SpeciesMask {
    /// Mask for `species` on a field with `channel_count` channels.
    ///
    /// A single-channel field yields the all-ones mask; otherwise the
    /// mask is one-hot at the species' channel.
    pub fn for_species(species: usize, channel_count: usize) -> Result<Self, InvariantViolation> {
        if species >= channel_count || channel_count > MAX_SPECIES {
            return Err(InvariantViolation::SpeciesOutOfRange {
                index: species,
                species_count: channel_count,
            });
        }
        if channel_count == 1 {
            return Ok(Self::all(1));
        }
        Ok(Self {
            bits: 1 << species,
            len: channel_count as u8,
        })
    }

    /// All-ones mask over `channel_count` channels (capped at [`MAX_SPECIES`]).
    pub fn all(channel_count: usize) -> Self {
        let len = channel_count.min(MAX_SPECIES) as u8;
        Self {
            bits: ((1u16 << len) - 1) as u8,
            len,
        }
    }

    /// Number of channels the mask spans.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Always `false` for masks built through the constructors.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Weight of channel `c`: 1.0 if routed, 0.0 otherwise.
    pub fn weight(&self, c: usize) -> f32 {
        if self.contains(c) {
            1.0
        } else {
            0.0
        }
    }

    /// Whether channel `c` is routed.
    pub fn contains(&self, c: usize) -> bool {
        c < self.len as usize && self.bits & (1 << c) != 0
    }

    /// Routed channel indices in ascending order.
    pub fn channels(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len as usize).filter(move |&c| self.contains(c))
    }

    /// Dot product with one cell's channel values.
    ///
    /// Routed channels past the end of `values` contribute nothing.
    pub fn dot(&self, values: &[f32]) -> f32 {
        self.channels().filter_map(|c| values.get(c)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_channel_is_all_ones() {
        let m = SpeciesMask::for_species(0, 1).unwrap();
        assert_eq!(m, SpeciesMask::all(1));
        assert_eq!(m.weight(0), 1.0);
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn multi_channel_is_one_hot() {
        let m = SpeciesMask::for_species(2, 3).unwrap();
        assert_eq!(m.channels().collect::<Vec<_>>(), vec![2]);
        assert_eq!(m.weight(0), 0.0);
        assert_eq!(m.weight(2), 1.0);
        assert_eq!(m.dot(&[5.0, 6.0, 7.0]), 7.0);
    }

    #[test]
    fn all_ones_sums_every_channel() {
        let m = SpeciesMask::all(4);
        assert_eq!(m.dot(&[1.0, 2.0, 3.0, 4.0]), 10.0);
    }

    #[test]
    fn dot_ignores_channels_past_the_values() {
        assert_eq!(SpeciesMask::all(4).dot(&[1.5]), 1.5);
        assert_eq!(SpeciesMask::for_species(3, 4).unwrap().dot(&[1.0, 2.0]), 0.0);
    }

    #[test]
    fn out_of_range_species_rejected() {
        assert_eq!(
            SpeciesMask::for_species(3, 3),
            Err(InvariantViolation::SpeciesOutOfRange {
                index: 3,
                species_count: 3
            })
        );
    }
}
