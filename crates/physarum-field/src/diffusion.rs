//! Stencil diffusion with decay.
//!
//! Every output value depends only on the input buffer, so rows are
//! independent and the parallel and serial passes produce identical bits.

use physarum_core::{Execution, MAX_SPECIES};
use physarum_space::{EdgeBehavior, Lattice, Stencil};
use rayon::prelude::*;

/// One diffusion pass over a borrowed input buffer.
pub(crate) struct DiffusionKernel<'a, L: Lattice> {
    lattice: &'a L,
    input: &'a [f32],
    channels: usize,
    stencil: Stencil,
    keep: f32,
    diffuse_rate: f32,
}

impl<'a, L: Lattice> DiffusionKernel<'a, L> {
    pub(crate) fn new(
        lattice: &'a L,
        input: &'a [f32],
        channels: usize,
        decay_rate: f32,
        diffuse_rate: f32,
    ) -> Self {
        Self {
            lattice,
            input,
            channels,
            stencil: L::stencil(),
            keep: 1.0 - decay_rate,
            diffuse_rate,
        }
    }

    /// Fill `output` (same length as the input) row by row.
    pub(crate) fn run(&self, output: &mut [f32], execution: Execution) {
        let [w, _, _] = self.lattice.dims();
        let row_len = w as usize * self.channels;
        let _span = tracing::trace_span!("diffuse", rows = output.len() / row_len).entered();
        match execution {
            Execution::Parallel => output
                .par_chunks_mut(row_len)
                .enumerate()
                .for_each(|(row, out)| self.row(row, out)),
            Execution::Serial => output
                .chunks_mut(row_len)
                .enumerate()
                .for_each(|(row, out)| self.row(row, out)),
        }
    }

    fn row(&self, row: usize, out: &mut [f32]) {
        let [w, h, _] = self.lattice.dims();
        let (y, z) = (row % h as usize, row / h as usize);
        let ch = self.channels;
        let n = self.stencil.len() as f32;
        for x in 0..w as usize {
            let mut sums = [0.0f32; MAX_SPECIES];
            for o in &self.stencil {
                let nb = self.lattice.resolve(
                    [x as i64 + o[0], y as i64 + o[1], z as i64 + o[2]],
                    EdgeBehavior::Clamp,
                );
                let cell = &self.input[nb * ch..nb * ch + ch];
                for (s, v) in sums.iter_mut().zip(cell) {
                    *s += v;
                }
            }
            let here = self.lattice.rank(x, y, z) * ch;
            for c in 0..ch {
                let v = self.input[here + c];
                let mean = sums[c] / n;
                out[x * ch + c] = (v + (mean - v) * self.diffuse_rate) * self.keep;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::TrailField;
    use physarum_core::Execution;
    use physarum_space::{Grid2D, Grid3D, Lattice};

    #[test]
    fn uniform_field_is_fixed_point_without_decay() {
        let g = Grid2D::new(5, 4).unwrap();
        let mut f = TrailField::new(g, 2).unwrap();
        for r in 0..20 {
            f.set(r, 0, 3.0);
            f.set(r, 1, 1.5);
        }
        f.diffuse(0.0, 0.7, Execution::Serial);
        f.swap();
        for r in 0..20 {
            assert!((f.get(r, 0).unwrap() - 3.0).abs() < 1e-6);
            assert!((f.get(r, 1).unwrap() - 1.5).abs() < 1e-6);
        }
    }

    #[test]
    fn full_diffuse_yields_neighbourhood_mean() {
        let g = Grid2D::new(3, 3).unwrap();
        let centre = g.rank(1, 1, 0);
        let mut f = TrailField::new(g, 1).unwrap();
        f.set(centre, 0, 9.0);
        f.diffuse(0.0, 1.0, Execution::Serial);
        f.swap();
        // Every cell of a 3×3 grid sees the centre once in its clamped stencil.
        for r in 0..9 {
            assert!((f.get(r, 0).unwrap() - 1.0).abs() < 1e-6, "cell {r}");
        }
    }

    #[test]
    fn clamped_corner_counts_itself_repeatedly() {
        let g = Grid2D::new(4, 4).unwrap();
        let mut f = TrailField::new(g, 1).unwrap();
        f.set(0, 0, 9.0);
        f.diffuse(0.0, 1.0, Execution::Serial);
        f.swap();
        // Corner (0,0) appears 4 times in its own clamped 3×3 stencil.
        assert!((f.get(0, 0).unwrap() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn channels_do_not_bleed() {
        let g = Grid2D::new(5, 5).unwrap();
        let mut f = TrailField::new(g, 3).unwrap();
        f.set(12, 1, 10.0);
        f.diffuse(0.1, 0.5, Execution::Parallel);
        f.swap();
        for r in 0..25 {
            assert_eq!(f.get(r, 0), Some(0.0));
            assert_eq!(f.get(r, 2), Some(0.0));
        }
        assert!(f.get(12, 1).unwrap() > 0.0);
    }

    #[test]
    fn volumetric_stencil_spreads_along_z() {
        let g = Grid3D::new(3, 3, 3).unwrap();
        let centre = g.rank(1, 1, 1);
        let above = g.rank(1, 1, 2);
        let mut f = TrailField::new(g, 1).unwrap();
        f.set(centre, 0, 27.0);
        f.diffuse(0.0, 1.0, Execution::Serial);
        f.swap();
        assert!((f.get(above, 0).unwrap() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn parallel_matches_serial_bitwise() {
        let g = Grid2D::new(17, 9).unwrap();
        let mut a = TrailField::new(g, 2).unwrap();
        for r in 0..a.cell_count() {
            a.set(r, r % 2, (r * 37 % 11) as f32 * 0.3);
        }
        let mut b = a.clone();
        a.diffuse(0.05, 0.6, Execution::Serial);
        b.diffuse(0.05, 0.6, Execution::Parallel);
        a.swap();
        b.swap();
        assert_eq!(a.current(), b.current());
    }
}
