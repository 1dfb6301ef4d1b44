//! Point sampling of the live buffer for agent sensors.

use physarum_core::{FilterMode, SpeciesMask};
use physarum_space::{EdgeBehavior, Lattice};

use crate::trail::TrailField;

impl<L: Lattice> TrailField<L> {
    /// Read `channel` at a continuous position.
    ///
    /// Positions wrap toroidally. Cell centres sit at integer coordinates.
    /// Returns 0.0 for an out-of-range channel.
    pub fn sample(&self, p: &L::Point, channel: usize, filter: FilterMode) -> f32 {
        if channel >= self.channels() {
            return 0.0;
        }
        self.filtered(p, filter, |cell| cell[channel])
    }

    /// Sum of the masked channels at a continuous position.
    ///
    /// Returns 0.0 when the mask does not span exactly this field's
    /// channels.
    pub fn sample_masked(&self, p: &L::Point, mask: SpeciesMask, filter: FilterMode) -> f32 {
        if mask.len() != self.channels() {
            return 0.0;
        }
        self.filtered(p, filter, |cell| mask.dot(cell))
    }

    fn filtered(&self, p: &L::Point, filter: FilterMode, read: impl Fn(&[f32]) -> f32) -> f32 {
        let ch = self.channels();
        let data = self.current();
        let at = |rank: usize| read(&data[rank * ch..rank * ch + ch]);
        match filter {
            FilterMode::Nearest => at(self.lattice().cell_of(p)),
            FilterMode::Linear => {
                let coords = p.as_ref();
                let mut base = [0i64; 3];
                let mut frac = [0.0f32; 3];
                for (i, &v) in coords.iter().enumerate() {
                    let f = v.floor();
                    base[i] = f as i64;
                    frac[i] = v - f;
                }
                let mut acc = 0.0f32;
                for corner in 0..(1usize << L::NDIM) {
                    let mut coord = base;
                    let mut weight = 1.0f32;
                    for axis in 0..L::NDIM {
                        if corner & (1 << axis) != 0 {
                            coord[axis] += 1;
                            weight *= frac[axis];
                        } else {
                            weight *= 1.0 - frac[axis];
                        }
                    }
                    if weight != 0.0 {
                        acc += weight * at(self.lattice().resolve(coord, EdgeBehavior::Wrap));
                    }
                }
                acc
            }
        }
    }
}
