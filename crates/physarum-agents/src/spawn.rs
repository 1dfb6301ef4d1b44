//! Initial placement and heading per spawn mode.

use std::f32::consts::TAU;

use physarum_core::SpawnMode;
use physarum_space::{Heading, Lattice};
use rand::Rng;

/// Fraction of the lattice height used as the `InwardRadial` radius.
const INWARD_RADIUS: f32 = 0.5;
/// Fraction of the lattice height used as the `RandomRadial` radius.
const RANDOM_RADIUS: f32 = 0.15;

/// Draw a position and heading for one agent.
///
/// The returned position is already wrapped into the lattice.
pub fn place<L: Lattice, R: Rng>(lattice: &L, mode: SpawnMode, rng: &mut R) -> (L::Point, Heading) {
    let centre = lattice.centre();
    let height = lattice.dims()[1] as f32;
    let (position, heading) = match mode {
        SpawnMode::Random => {
            let dims = lattice.dims();
            let mut p = L::Point::default();
            for (v, &n) in p.as_mut().iter_mut().zip(dims.iter()) {
                *v = rng.gen::<f32>() * n as f32;
            }
            (p, random_heading::<L, R>(rng))
        }
        SpawnMode::Point => (centre, random_heading::<L, R>(rng)),
        SpawnMode::InwardRadial => {
            let p = around(centre, unit_ball::<L, R>(rng), height * INWARD_RADIUS);
            (p, heading_toward::<L>(&p, &centre))
        }
        SpawnMode::RandomRadial => {
            let p = around(centre, unit_ball::<L, R>(rng), height * RANDOM_RADIUS);
            (p, random_heading::<L, R>(rng))
        }
    };
    (lattice.wrap_point(position), heading)
}

/// Uniform yaw; on volumetric lattices, pitch uniform on the sphere.
pub fn random_heading<L: Lattice, R: Rng>(rng: &mut R) -> Heading {
    let yaw = rng.gen::<f32>() * TAU;
    if L::NDIM == 3 {
        let pitch = rng.gen_range(-1.0f32..=1.0).asin();
        Heading::new(yaw, pitch)
    } else {
        Heading::planar(yaw)
    }
}

/// Uniform point inside the unit disc or ball, by rejection.
fn unit_ball<L: Lattice, R: Rng>(rng: &mut R) -> L::Point {
    loop {
        let mut p = L::Point::default();
        for v in p.as_mut() {
            *v = rng.gen_range(-1.0f32..=1.0);
        }
        if p.as_ref().iter().map(|v| v * v).sum::<f32>() <= 1.0 {
            return p;
        }
    }
}

fn around<P: AsRef<[f32]> + AsMut<[f32]> + Copy>(centre: P, unit: P, radius: f32) -> P {
    let mut p = centre;
    for (v, u) in p.as_mut().iter_mut().zip(unit.as_ref()) {
        *v += u * radius;
    }
    p
}

fn heading_toward<L: Lattice>(from: &L::Point, to: &L::Point) -> Heading {
    let (a, b) = (from.as_ref(), to.as_ref());
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    let yaw = dy.atan2(dx);
    if L::NDIM == 3 {
        let dz = b[2] - a[2];
        Heading::new(yaw, dz.atan2(dx.hypot(dy)))
    } else {
        Heading::planar(yaw)
    }
}
