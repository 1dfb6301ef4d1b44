//! Volumetric lattice.

use physarum_core::Extents;

use crate::error::SpaceError;
use crate::heading::Heading;
use crate::lattice::{check_axis, Lattice};

/// A `width × height × depth` lattice with up to three trail channels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid3D {
    width: u32,
    height: u32,
    depth: u32,
}

impl Grid3D {
    /// Create a grid. All axes must be non-zero.
    pub fn new(width: u32, height: u32, depth: u32) -> Result<Self, SpaceError> {
        check_axis("width", width)?;
        check_axis("height", height)?;
        check_axis("depth", depth)?;
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(depth as usize))
            .ok_or(SpaceError::CellCountOverflow)?;
        Ok(Self {
            width,
            height,
            depth,
        })
    }

    /// Cells along x.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Cells along y.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cells along z.
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Lattice for Grid3D {
    type Point = [f32; 3];

    const NDIM: usize = 3;
    const MAX_CHANNELS: usize = 3;

    fn from_extents(extents: &Extents) -> Result<Self, SpaceError> {
        match extents.depth {
            Some(depth) => Self::new(extents.width, extents.height, depth),
            None => Err(SpaceError::DimensionMismatch {
                expected: 3,
                got: 2,
            }),
        }
    }

    fn dims(&self) -> [u32; 3] {
        [self.width, self.height, self.depth]
    }

    fn direction(heading: Heading) -> [f32; 3] {
        heading.volumetric_direction()
    }
}
