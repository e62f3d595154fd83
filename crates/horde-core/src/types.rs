//! Fundamental geometric and simulation types.
//!
//! World axes follow the browser scene the game was built for:
//! x = right, y = up, z = toward the viewer. The ground plane is y = 0.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Stable identity of a zombie, assigned at spawn.
///
/// Ids grow monotonically within a session, so ascending id order is
/// also roster (spawn) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ZombieId(pub u32);

impl fmt::Display for ZombieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Z-{:04}", self.0)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of simulated (playing) frames.
    pub frame: u64,
    /// Elapsed simulation time in seconds. Frozen while not playing.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.frame += 1;
        self.elapsed_secs += dt as f64;
    }
}

/// Offset from `from` to `to` projected onto the ground plane.
pub fn planar_offset(from: Vec3, to: Vec3) -> Vec3 {
    Vec3::new(to.x - from.x, 0.0, to.z - from.z)
}

/// Ground-plane distance between two points (height ignored).
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    planar_offset(a, b).length()
}

/// Forward vector for a camera with the given yaw and pitch (radians).
///
/// Yaw 0 looks down -Z; positive yaw turns left, positive pitch looks up.
pub fn aim_direction(yaw: f32, pitch: f32) -> Vec3 {
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let (sin_pitch, cos_pitch) = pitch.sin_cos();
    Vec3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
}

/// A half-line used for hitscan tests. Direction is always unit length
/// (or zero if constructed from a zero vector).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box standing on `base` (its bottom-center) with the given half-width and height.
    pub fn from_footprint(base: Vec3, half_width: f32, height: f32) -> Self {
        Self {
            min: Vec3::new(base.x - half_width, base.y, base.z - half_width),
            max: Vec3::new(base.x + half_width, base.y + height, base.z + half_width),
        }
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Distance along `ray` to the first intersection with this box, or `None`.
    /// Returns 0.0 when the ray starts inside the box.
    pub fn ray_intersection(&self, ray: &Ray) -> Option<f32> {
        let mut t_enter = 0.0_f32;
        let mut t_exit = f32::INFINITY;

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let dir = ray.direction[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if dir.abs() < f32::EPSILON {
                // Parallel to this slab: must already be inside it.
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / dir;
            let mut t0 = (lo - origin) * inv;
            let mut t1 = (hi - origin) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_enter = t_enter.max(t0);
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return None;
            }
        }

        Some(t_enter)
    }
}
