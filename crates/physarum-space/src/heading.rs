//! Agent headings.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Direction of travel as yaw (in the x/y plane) and pitch (toward +z).
///
/// Planar lattices ignore `pitch`. Angles are in radians; "left" is the
/// counter-clockwise side, so positive yaw turns steer left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Heading {
    /// Rotation in the x/y plane, measured from +x.
    pub yaw: f32,
    /// Elevation toward +z, in `[-π/2, π/2]`.
    pub pitch: f32,
}

impl Heading {
    /// A planar heading.
    pub fn planar(yaw: f32) -> Self {
        Self { yaw, pitch: 0.0 }
    }

    /// A volumetric heading. Pitch is clamped.
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self {
            yaw,
            pitch: pitch.clamp(-FRAC_PI_2, FRAC_PI_2),
        }
    }

    /// Heading rotated by `dyaw` in the plane.
    ///
    /// Yaw is folded back into `[-π, π]` once it leaves that range, so
    /// repeated turning never grows it without bound.
    pub fn turned(self, dyaw: f32) -> Self {
        Self {
            yaw: fold_yaw(self.yaw + dyaw),
            pitch: self.pitch,
        }
    }

    /// Heading tilted by `dpitch`, without clamping (probe directions may
    /// look past the pole).
    pub fn tilted(self, dpitch: f32) -> Self {
        Self {
            yaw: self.yaw,
            pitch: self.pitch + dpitch,
        }
    }

    /// Unit direction `(x, y)` in the plane.
    pub fn planar_direction(&self) -> [f32; 2] {
        [self.yaw.cos(), self.yaw.sin()]
    }

    /// Unit direction `(x, y, z)`.
    pub fn volumetric_direction(&self) -> [f32; 3] {
        let (sp, cp) = self.pitch.sin_cos();
        [self.yaw.cos() * cp, self.yaw.sin() * cp, sp]
    }
}

fn fold_yaw(yaw: f32) -> f32 {
    if (-PI..=PI).contains(&yaw) {
        yaw
    } else {
        (yaw + PI).rem_euclid(TAU) - PI
    }
}
