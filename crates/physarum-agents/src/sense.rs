//! Probe sampling ahead of an agent.

use physarum_core::{FilterMode, SpeciesMask};
use physarum_field::TrailField;
use physarum_space::{Heading, Lattice, Stencil};

use crate::agent::SensorWeights;

/// Weighted sensor readings for one agent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Readings {
    /// Along the heading.
    pub forward: f32,
    /// Heading rotated by `+sensor_angle`.
    pub left: f32,
    /// Heading rotated by `-sensor_angle`.
    pub right: f32,
    /// Heading tilted up by `sensor_angle`; zero on planar lattices.
    pub up: f32,
    /// Heading tilted down by `sensor_angle`; zero on planar lattices.
    pub down: f32,
}

/// Geometry of one species' sensors.
#[derive(Clone, Debug)]
pub struct Probe<'a> {
    /// Angle between forward and each side probe, radians.
    pub angle: f32,
    /// Distance to each probe point.
    pub offset: f32,
    /// Window sampled around each probe point.
    pub window: &'a Stencil,
    /// Sampling policy.
    pub filter: FilterMode,
}

impl Probe<'_> {
    /// Sum of masked samples over the window centred on `centre`.
    pub fn window_sum<L: Lattice>(
        &self,
        field: &TrailField<L>,
        centre: L::Point,
        mask: SpeciesMask,
    ) -> f32 {
        let mut sum = 0.0f32;
        for o in self.window {
            let mut q = centre;
            for (v, d) in q.as_mut().iter_mut().zip(o.iter()) {
                *v += *d as f32;
            }
            sum += field.sample_masked(&q, mask, self.filter);
        }
        sum
    }

    fn read<L: Lattice>(
        &self,
        field: &TrailField<L>,
        position: L::Point,
        heading: Heading,
        mask: SpeciesMask,
    ) -> f32 {
        let at = L::offset(position, L::direction(heading), self.offset);
        self.window_sum(field, at, mask)
    }

    /// Sample every probe and apply the agent's sensor weights.
    pub fn sense<L: Lattice>(
        &self,
        field: &TrailField<L>,
        position: L::Point,
        heading: Heading,
        mask: SpeciesMask,
        weights: SensorWeights,
    ) -> Readings {
        let mut r = Readings {
            forward: self.read(field, position, heading, mask) * weights.forward,
            left: self.read(field, position, heading.turned(self.angle), mask) * weights.left,
            right: self.read(field, position, heading.turned(-self.angle), mask) * weights.right,
            up: 0.0,
            down: 0.0,
        };
        if L::NDIM == 3 {
            r.up = self.read(field, position, heading.tilted(self.angle), mask) * weights.left;
            r.down = self.read(field, position, heading.tilted(-self.angle), mask) * weights.right;
        }
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physarum_space::{Grid2D, Grid3D};
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn side_probes_read_their_cells() {
        let g = Grid2D::new(20, 20).unwrap();
        let (fwd, left, right) = (g.rank(15, 10, 0), g.rank(10, 15, 0), g.rank(10, 5, 0));
        let mut f = TrailField::new(g, 1).unwrap();
        f.set(fwd, 0, 1.0);
        f.set(left, 0, 10.0);
        f.set(right, 0, 2.0);
        let window = Grid2D::window(1);
        let probe = Probe {
            angle: FRAC_PI_2,
            offset: 5.0,
            window: &window,
            filter: FilterMode::Nearest,
        };
        let r = probe.sense(
            &f,
            [10.0, 10.0],
            Heading::planar(0.0),
            SpeciesMask::all(1),
            SensorWeights::UNIT,
        );
        assert_eq!((r.forward, r.left, r.right), (1.0, 10.0, 2.0));
        assert_eq!((r.up, r.down), (0.0, 0.0));
    }

    #[test]
    fn weights_scale_readings() {
        let g = Grid2D::new(8, 8).unwrap();
        let mut f = TrailField::new(g, 1).unwrap();
        for r in 0..64 {
            f.set(r, 0, 1.0);
        }
        let window = Grid2D::window(1);
        let probe = Probe {
            angle: 0.5,
            offset: 2.0,
            window: &window,
            filter: FilterMode::Nearest,
        };
        let w = SensorWeights {
            forward: 0.5,
            left: 1.5,
            right: 1.0,
        };
        let r = probe.sense(&f, [4.0, 4.0], Heading::planar(0.0), SpeciesMask::all(1), w);
        assert_eq!((r.forward, r.left, r.right), (0.5, 1.5, 1.0));
    }

    #[test]
    fn window_sums_neighbourhood() {
        let g = Grid2D::new(8, 8).unwrap();
        let mut f = TrailField::new(g, 1).unwrap();
        for r in 0..64 {
            f.set(r, 0, 1.0);
        }
        let window = Grid2D::window(3);
        let probe = Probe {
            angle: 0.0,
            offset: 0.0,
            window: &window,
            filter: FilterMode::Nearest,
        };
        assert_eq!(probe.window_sum(&f, [0.0, 0.0], SpeciesMask::all(1)), 9.0);
    }

    #[test]
    fn vertical_probes_on_volumetric_lattice() {
        let g = Grid3D::new(10, 10, 10).unwrap();
        let up = g.rank(5, 5, 8);
        let mut f = TrailField::new(g, 1).unwrap();
        f.set(up, 0, 4.0);
        let window = Grid3D::window(1);
        let probe = Probe {
            angle: FRAC_PI_2,
            offset: 3.0,
            window: &window,
            filter: FilterMode::Nearest,
        };
        let r = probe.sense(
            &f,
            [5.0, 5.0, 5.0],
            Heading::new(0.0, 0.0),
            SpeciesMask::all(1),
            SensorWeights::UNIT,
        );
        assert_eq!(r.up, 4.0);
        assert_eq!(r.down, 0.0);
        assert_eq!(r.forward, 0.0);
    }
}
