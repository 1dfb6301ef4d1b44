//! The [`Lattice`] trait shared by planar and volumetric grids.

use std::fmt;

use physarum_core::Extents;
use smallvec::SmallVec;

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use crate::heading::Heading;

/// Integer cell coordinate padded to three axes (`z = 0` on planar lattices).
pub type CellCoord = [i64; 3];

/// A list of integer offsets around a cell.
pub type Stencil = SmallVec<[CellCoord; 27]>;

/// A regular lattice of cells overlaid on continuous space.
///
/// Implemented by [`Grid2D`](crate::Grid2D) and [`Grid3D`](crate::Grid3D).
/// The trait is static (associated consts and types) so the trail field
/// and agent population monomorphize per dimensionality and share one
/// implementation of sensing, steering and diffusion.
pub trait Lattice: Clone + fmt::Debug + Send + Sync + 'static {
    /// Continuous position type: `[f32; 2]` or `[f32; 3]`.
    type Point: Copy
        + Default
        + fmt::Debug
        + PartialEq
        + Send
        + Sync
        + AsRef<[f32]>
        + AsMut<[f32]>;

    /// Number of axes.
    const NDIM: usize;

    /// Maximum trail channels (and therefore species) on this lattice.
    const MAX_CHANNELS: usize;

    /// Build from extents, checking dimensionality and size.
    fn from_extents(extents: &Extents) -> Result<Self, SpaceError>;

    /// Extents padded to three axes.
    fn dims(&self) -> [u32; 3];

    /// Unit direction for a heading.
    fn direction(heading: Heading) -> Self::Point;

    /// Extents in configuration form.
    fn extents(&self) -> Extents {
        let [w, h, d] = self.dims();
        if Self::NDIM == 3 {
            Extents::volumetric(w, h, d)
        } else {
            Extents::planar(w, h)
        }
    }

    /// Total number of cells.
    fn cell_count(&self) -> usize {
        let [w, h, d] = self.dims();
        (w as usize) * (h as usize) * (d as usize)
    }

    /// Flat rank of an in-range cell.
    fn rank(&self, x: usize, y: usize, z: usize) -> usize {
        let [w, h, _] = self.dims();
        (z * h as usize + y) * w as usize + x
    }

    /// Inverse of [`rank`](Lattice::rank).
    fn coords(&self, rank: usize) -> [usize; 3] {
        let [w, h, _] = self.dims();
        let (w, h) = (w as usize, h as usize);
        [rank % w, (rank / w) % h, rank / (w * h)]
    }

    /// Rank of an arbitrary integer coordinate under `edge`.
    fn resolve(&self, coord: CellCoord, edge: EdgeBehavior) -> usize {
        let [w, h, d] = self.dims();
        self.rank(
            edge.resolve(coord[0], w),
            edge.resolve(coord[1], h),
            edge.resolve(coord[2], d),
        )
    }

    /// Integer coordinate nearest to `p` (rounded, not yet wrapped).
    fn nearest_cell(&self, p: &Self::Point) -> CellCoord {
        let mut out = [0i64; 3];
        for (o, v) in out.iter_mut().zip(p.as_ref()) {
            *o = v.round() as i64;
        }
        out
    }

    /// Rank of the cell a position deposits into: rounded, then wrapped.
    fn cell_of(&self, p: &Self::Point) -> usize {
        self.resolve(self.nearest_cell(p), EdgeBehavior::Wrap)
    }

    /// Wrap a position into `[0, extent)` on every axis.
    fn wrap_point(&self, mut p: Self::Point) -> Self::Point {
        let dims = self.dims();
        for (v, &n) in p.as_mut().iter_mut().zip(dims.iter()) {
            let n = n as f32;
            let w = v.rem_euclid(n);
            // rem_euclid of a tiny negative rounds up to n in f32.
            *v = if w >= n { 0.0 } else { w };
        }
        p
    }

    /// `p + dir * distance`, unwrapped.
    fn offset(mut p: Self::Point, dir: Self::Point, distance: f32) -> Self::Point {
        for (v, d) in p.as_mut().iter_mut().zip(dir.as_ref()) {
            *v += d * distance;
        }
        p
    }

    /// Geometric centre, using integer halving per axis.
    fn centre(&self) -> Self::Point {
        let dims = self.dims();
        let mut p = Self::Point::default();
        for (v, &n) in p.as_mut().iter_mut().zip(dims.iter()) {
            *v = (n / 2) as f32;
        }
        p
    }

    /// Build a point from the first `NDIM` components of `coords`.
    fn point_from(coords: &[f32]) -> Self::Point {
        let mut p = Self::Point::default();
        for (v, c) in p.as_mut().iter_mut().zip(coords) {
            *v = *c;
        }
        p
    }

    /// The 3×3 (planar) or 3×3×3 (volumetric) neighbourhood, self included.
    fn stencil() -> Stencil {
        Self::window(3)
    }

    /// Offsets of a `size`-wide window centred on the origin.
    ///
    /// Each axis spans `-(size - 1) / 2 ..= size / 2`, so odd sizes are
    /// symmetric and even sizes lean toward the positive side. Planar
    /// lattices keep `z = 0`.
    fn window(size: u32) -> Stencil {
        let size = size.max(1) as i64;
        let lo = -((size - 1) / 2);
        let hi = size / 2;
        let (zlo, zhi) = if Self::NDIM == 3 { (lo, hi) } else { (0, 0) };
        let mut out = Stencil::new();
        for dz in zlo..=zhi {
            for dy in lo..=hi {
                for dx in lo..=hi {
                    out.push([dx, dy, dz]);
                }
            }
        }
        out
    }
}

/// Shared constructor checks for both grids.
pub(crate) fn check_axis(axis: &'static str, value: u32) -> Result<(), SpaceError> {
    const MAX_DIM: u32 = i32::MAX as u32;
    if value == 0 {
        return Err(SpaceError::EmptyAxis { axis });
    }
    if value > MAX_DIM {
        return Err(SpaceError::DimensionTooLarge {
            axis,
            value,
            max: MAX_DIM,
        });
    }
    Ok(())
}
