//! Planar lattice.

use physarum_core::Extents;

use crate::error::SpaceError;
use crate::heading::Heading;
use crate::lattice::{check_axis, Lattice};

/// A `width × height` lattice with up to four trail channels.
///
/// # Examples
///
/// ```
/// use physarum_space::{Grid2D, Lattice};
///
/// let grid = Grid2D::new(10, 10).unwrap();
/// assert_eq!(grid.cell_count(), 100);
/// assert_eq!(grid.cell_of(&[9.7, 5.0]), grid.rank(0, 5, 0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid2D {
    width: u32,
    height: u32,
}

impl Grid2D {
    /// Create a grid. Both axes must be non-zero.
    pub fn new(width: u32, height: u32) -> Result<Self, SpaceError> {
        check_axis("width", width)?;
        check_axis("height", height)?;
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(SpaceError::CellCountOverflow)?;
        Ok(Self { width, height })
    }

    /// Cells along x.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Cells along y.
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Lattice for Grid2D {
    type Point = [f32; 2];

    const NDIM: usize = 2;
    const MAX_CHANNELS: usize = 4;

    fn from_extents(extents: &Extents) -> Result<Self, SpaceError> {
        if extents.depth.is_some() {
            return Err(SpaceError::DimensionMismatch {
                expected: 2,
                got: 3,
            });
        }
        Self::new(extents.width, extents.height)
    }

    fn dims(&self) -> [u32; 3] {
        [self.width, self.height, 1]
    }

    fn direction(heading: Heading) -> [f32; 2] {
        heading.planar_direction()
    }
}
