//! Collision primitives and the radial probe test
//!
//! The camera is approximated as a cylinder probed by eight horizontal
//! rays (the four axes and four diagonals). A candidate position is
//! blocked when any probe hits a collider strictly closer than the
//! collision radius. A sufficiently thin obstacle can pass between two
//! probe directions; the reference scene's geometry is far wider than the
//! probe spacing at the collision radius.

use std::f32::consts::FRAC_1_SQRT_2;

use glam::Vec3;

/// Ray with a normalized direction
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray; `direction` is normalized
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Build a box from a center point and half-extents
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Slab test: distance to the nearest intersection, if any
    ///
    /// A ray starting inside the box reports distance 0.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let direction = ray.direction[axis];
            let (slab_min, slab_max) = (self.min[axis], self.max[axis]);

            if direction.abs() < f32::EPSILON {
                if origin < slab_min || origin > slab_max {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / direction;
            let mut t0 = (slab_min - origin) * inv;
            let mut t1 = (slab_max - origin) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return None;
            }
        }

        if t_max < 0.0 {
            return None;
        }
        Some(t_min.max(0.0))
    }
}

/// Finite rectangle in 3D, given by its center and two half-edge vectors
///
/// `half_u` and `half_v` must be non-parallel; the quad's normal is their
/// cross product. Used for walls and the TV screen plane.
#[derive(Debug, Clone, Copy)]
pub struct Quad {
    pub center: Vec3,
    pub half_u: Vec3,
    pub half_v: Vec3,
}

impl Quad {
    pub fn new(center: Vec3, half_u: Vec3, half_v: Vec3) -> Self {
        Self {
            center,
            half_u,
            half_v,
        }
    }

    /// Distance to the intersection with the quad, if any
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let normal = self.half_u.cross(self.half_v).normalize_or_zero();
        if normal == Vec3::ZERO {
            return None;
        }

        let denom = normal.dot(ray.direction);
        if denom.abs() < f32::EPSILON {
            return None;
        }

        let t = normal.dot(self.center - ray.origin) / denom;
        if t < 0.0 {
            return None;
        }

        // project the hit point onto the quad's edge axes
        let local = ray.point_at(t) - self.center;
        let u_len_sq = self.half_u.length_squared();
        let v_len_sq = self.half_v.length_squared();
        if u_len_sq < f32::EPSILON || v_len_sq < f32::EPSILON {
            return None;
        }
        let u = local.dot(self.half_u) / u_len_sq;
        let v = local.dot(self.half_v) / v_len_sq;
        if u.abs() <= 1.0 && v.abs() <= 1.0 {
            Some(t)
        } else {
            None
        }
    }
}

/// Static collision shape
#[derive(Debug, Clone, Copy)]
pub enum Collider {
    Box(Aabb),
    Quad(Quad),
}

impl Collider {
    /// Distance to the nearest intersection with this collider, if any
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        match self {
            Collider::Box(aabb) => aabb.intersect_ray(ray),
            Collider::Quad(quad) => quad.intersect_ray(ray),
        }
    }
}

/// Horizontal probe directions: the four axes and four diagonals
pub const PROBE_DIRECTIONS: [Vec3; 8] = [
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(-1.0, 0.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(0.0, 0.0, -1.0),
    Vec3::new(FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2),
    Vec3::new(FRAC_1_SQRT_2, 0.0, -FRAC_1_SQRT_2),
    Vec3::new(-FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2),
    Vec3::new(-FRAC_1_SQRT_2, 0.0, -FRAC_1_SQRT_2),
];

/// Whether a candidate camera position is blocked
///
/// Blocked when any of the eight horizontal probes hits a collider at a
/// distance strictly less than `radius`; a hit at exactly `radius` does
/// not block.
pub fn position_blocked(position: Vec3, colliders: &[Collider], radius: f32) -> bool {
    PROBE_DIRECTIONS.iter().any(|direction| {
        let ray = Ray::new(position, *direction);
        colliders
            .iter()
            .filter_map(|collider| collider.intersect_ray(&ray))
            .any(|distance| distance < radius)
    })
}

#[cfg(test)]
#[path = "collision_tests.rs"]
mod tests;
