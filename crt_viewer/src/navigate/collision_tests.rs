use super::*;
use approx::assert_relative_eq;

// ===== RAY =====

#[test]
fn test_ray_direction_is_normalized() {
    let ray = Ray::new(Vec3::ZERO, Vec3::new(3.0, 0.0, 4.0));
    assert_relative_eq!(ray.direction.length(), 1.0, epsilon = 1e-6);
}

#[test]
fn test_point_at_walks_along_direction() {
    let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::X);
    assert_relative_eq!(ray.point_at(2.5).x, 3.5);
}

// ===== AABB =====

#[test]
fn test_box_hit_reports_entry_distance() {
    let aabb = Aabb::new(Vec3::new(2.0, -1.0, -1.0), Vec3::new(4.0, 1.0, 1.0));
    let ray = Ray::new(Vec3::ZERO, Vec3::X);
    let distance = aabb.intersect_ray(&ray).unwrap();
    assert_relative_eq!(distance, 2.0, epsilon = 1e-6);
}

#[test]
fn test_box_behind_ray_misses() {
    let aabb = Aabb::new(Vec3::new(-4.0, -1.0, -1.0), Vec3::new(-2.0, 1.0, 1.0));
    let ray = Ray::new(Vec3::ZERO, Vec3::X);
    assert!(aabb.intersect_ray(&ray).is_none());
}

#[test]
fn test_parallel_ray_outside_slab_misses() {
    let aabb = Aabb::new(Vec3::new(2.0, 1.0, -1.0), Vec3::new(4.0, 2.0, 1.0));
    let ray = Ray::new(Vec3::ZERO, Vec3::X);
    assert!(aabb.intersect_ray(&ray).is_none());
}

#[test]
fn test_ray_starting_inside_box_reports_zero() {
    let aabb = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::splat(1.0));
    let ray = Ray::new(Vec3::ZERO, Vec3::X);
    assert_relative_eq!(aabb.intersect_ray(&ray).unwrap(), 0.0);
}

// ===== QUAD =====

#[test]
fn test_quad_hit_through_center() {
    // wall in the XY plane at z = -2, 4 wide and 2 tall
    let quad = Quad::new(Vec3::new(0.0, 0.0, -2.0), Vec3::X * 2.0, Vec3::Y);
    let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
    assert_relative_eq!(quad.intersect_ray(&ray).unwrap(), 2.0, epsilon = 1e-6);
}

#[test]
fn test_quad_miss_outside_extent() {
    let quad = Quad::new(Vec3::new(0.0, 0.0, -2.0), Vec3::X * 2.0, Vec3::Y);
    let ray = Ray::new(Vec3::new(2.5, 0.0, 0.0), Vec3::NEG_Z);
    assert!(quad.intersect_ray(&ray).is_none());
}

#[test]
fn test_quad_parallel_ray_misses() {
    let quad = Quad::new(Vec3::new(0.0, 0.0, -2.0), Vec3::X * 2.0, Vec3::Y);
    let ray = Ray::new(Vec3::ZERO, Vec3::X);
    assert!(quad.intersect_ray(&ray).is_none());
}

#[test]
fn test_quad_edge_hit_counts() {
    let quad = Quad::new(Vec3::new(0.0, 0.0, -2.0), Vec3::X * 2.0, Vec3::Y);
    let ray = Ray::new(Vec3::new(2.0, 1.0, 0.0), Vec3::NEG_Z);
    assert!(quad.intersect_ray(&ray).is_some());
}

// ===== PROBE DIRECTIONS =====

#[test]
fn test_probe_directions_are_horizontal_unit_vectors() {
    for direction in PROBE_DIRECTIONS {
        assert_relative_eq!(direction.y, 0.0);
        assert_relative_eq!(direction.length(), 1.0, epsilon = 1e-6);
    }
}

// ===== POSITION BLOCKED =====

#[test]
fn test_wall_inside_radius_blocks() {
    let colliders = [Collider::Box(Aabb::new(
        Vec3::new(0.3, 0.0, -10.0),
        Vec3::new(1.0, 3.0, 10.0),
    ))];
    assert!(position_blocked(Vec3::new(0.0, 1.7, 0.0), &colliders, 0.5));
}

#[test]
fn test_wall_exactly_at_radius_does_not_block() {
    let colliders = [Collider::Box(Aabb::new(
        Vec3::new(0.5, 0.0, -10.0),
        Vec3::new(1.0, 3.0, 10.0),
    ))];
    assert!(!position_blocked(Vec3::new(0.0, 1.7, 0.0), &colliders, 0.5));
}

#[test]
fn test_wall_beyond_radius_does_not_block() {
    let colliders = [Collider::Box(Aabb::new(
        Vec3::new(0.6, 0.0, -10.0),
        Vec3::new(1.0, 3.0, 10.0),
    ))];
    assert!(!position_blocked(Vec3::new(0.0, 1.7, 0.0), &colliders, 0.5));
}

#[test]
fn test_diagonal_probe_catches_corner() {
    // box positioned so only a diagonal probe reaches it within the radius
    let center = Vec3::new(0.25, 1.0, 0.25);
    let colliders = [Collider::Box(Aabb::from_center_half_extents(
        center,
        Vec3::new(0.05, 2.0, 0.05),
    ))];
    assert!(position_blocked(Vec3::new(0.0, 1.7, 0.0), &colliders, 0.5));
}

#[test]
fn test_empty_scene_never_blocks() {
    assert!(!position_blocked(Vec3::new(0.0, 1.7, 0.0), &[], 0.5));
}

#[test]
fn test_quad_wall_blocks() {
    let colliders = [Collider::Quad(Quad::new(
        Vec3::new(0.0, 1.7, -0.3),
        Vec3::X * 3.0,
        Vec3::Y * 2.0,
    ))];
    assert!(position_blocked(Vec3::new(0.0, 1.7, 0.0), &colliders, 0.5));
}
