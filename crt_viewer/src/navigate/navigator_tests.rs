use super::*;
use crate::navigate::Aabb;
use approx::assert_relative_eq;

fn config() -> ViewerConfig {
    ViewerConfig::default()
}

fn forward_press() -> ControlState {
    ControlState {
        move_forward: 100.0,
        ..ControlState::default()
    }
}

const DT: f32 = 1.0 / 60.0;

// ===== SPAWN =====

#[test]
fn test_spawn_pose() {
    let navigator = FirstPersonNavigator::new(&config());
    let pose = navigator.pose();
    assert_eq!(pose.position, Vec3::new(0.0, 1.7, 5.0));
    assert_eq!(pose.yaw, 0.0);
    assert_eq!(pose.pitch, 0.0);
    assert_eq!(pose.fov, 25.0);
}

// ===== LOOK =====

#[test]
fn test_look_right_decreases_yaw() {
    let mut navigator = FirstPersonNavigator::new(&config());
    let control = ControlState {
        look_delta_x: 50.0,
        ..ControlState::default()
    };
    let pose = navigator.step(&control, DT, &[]);
    assert_relative_eq!(pose.yaw, -50.0 * 0.0008, epsilon = 1e-6);
}

#[test]
fn test_pitch_clamped_looking_down() {
    let mut navigator = FirstPersonNavigator::new(&config());
    let control = ControlState {
        look_delta_y: 1.0e6,
        ..ControlState::default()
    };
    for _ in 0..5 {
        let pose = navigator.step(&control, DT, &[]);
        assert!(pose.pitch >= -FRAC_PI_2);
    }
    assert_relative_eq!(navigator.pose().pitch, -FRAC_PI_2);
}

#[test]
fn test_pitch_clamped_looking_up() {
    let mut navigator = FirstPersonNavigator::new(&config());
    let control = ControlState {
        look_delta_y: -1.0e6,
        ..ControlState::default()
    };
    for _ in 0..5 {
        navigator.step(&control, DT, &[]);
    }
    assert_relative_eq!(navigator.pose().pitch, FRAC_PI_2);
}

// ===== MOVEMENT =====

#[test]
fn test_forward_moves_along_negative_z() {
    let mut navigator = FirstPersonNavigator::new(&config());
    let pose = navigator.step(&forward_press(), DT, &[]);
    assert_relative_eq!(pose.position.z, 5.0 - 6.0 * DT, epsilon = 1e-5);
    assert_relative_eq!(pose.position.x, 0.0, epsilon = 1e-6);
}

#[test]
fn test_deflection_within_dead_zone_is_ignored() {
    let mut navigator = FirstPersonNavigator::new(&config());
    let control = ControlState {
        move_forward: 9.0,
        move_right: -10.0,
        ..ControlState::default()
    };
    let pose = navigator.step(&control, DT, &[]);
    assert_eq!(pose.position, Vec3::new(0.0, 1.7, 5.0));
}

#[test]
fn test_deflection_magnitude_does_not_scale_speed() {
    let mut weak = FirstPersonNavigator::new(&config());
    let mut strong = FirstPersonNavigator::new(&config());
    let gentle = ControlState {
        move_forward: 11.0,
        ..ControlState::default()
    };
    let hard = ControlState {
        move_forward: 1000.0,
        ..ControlState::default()
    };
    let a = weak.step(&gentle, DT, &[]);
    let b = strong.step(&hard, DT, &[]);
    assert_eq!(a.position, b.position);
}

#[test]
fn test_strafe_moves_along_right_vector() {
    let mut navigator = FirstPersonNavigator::new(&config());
    let control = ControlState {
        move_right: 100.0,
        ..ControlState::default()
    };
    let pose = navigator.step(&control, DT, &[]);
    assert_relative_eq!(pose.position.x, 6.0 * DT, epsilon = 1e-5);
    assert_relative_eq!(pose.position.z, 5.0, epsilon = 1e-6);
}

#[test]
fn test_eye_height_pinned_every_tick() {
    let mut navigator = FirstPersonNavigator::new(&config());
    let control = ControlState {
        look_delta_y: 500.0,
        move_forward: 100.0,
        ..ControlState::default()
    };
    for _ in 0..30 {
        let pose = navigator.step(&control, DT, &[]);
        assert_eq!(pose.position.y, 1.7);
    }
}

// ===== COLLISION =====

#[test]
fn test_blocked_move_keeps_position() {
    let mut navigator = FirstPersonNavigator::new(&config());
    // wall directly ahead, closer than the collision radius after one step
    let colliders = [Collider::Box(Aabb::new(
        Vec3::new(-5.0, 0.0, 4.0),
        Vec3::new(5.0, 3.0, 4.6),
    ))];
    let before = *navigator.pose();
    let pose = navigator.step(&forward_press(), DT, &colliders);
    assert_eq!(pose.position, before.position);
}

#[test]
fn test_move_allowed_up_to_radius() {
    let mut navigator = FirstPersonNavigator::new(&config());
    // wall far enough that the candidate stays outside the radius
    let colliders = [Collider::Box(Aabb::new(
        Vec3::new(-5.0, 0.0, 2.0),
        Vec3::new(5.0, 3.0, 3.0),
    ))];
    let pose = navigator.step(&forward_press(), DT, &colliders);
    assert!(pose.position.z < 5.0);
}

#[test]
fn test_set_position_pins_eye_height() {
    let mut navigator = FirstPersonNavigator::new(&config());
    navigator.set_position(Vec3::new(2.0, 99.0, -1.0));
    assert_eq!(navigator.pose().position, Vec3::new(2.0, 1.7, -1.0));
}

// ===== ZOOM =====

#[test]
fn test_zoom_clamped_to_bounds() {
    let mut navigator = FirstPersonNavigator::new(&config());
    let zoom_out = ControlState {
        zoom_delta: 10.0,
        ..ControlState::default()
    };
    for _ in 0..10 {
        navigator.step(&zoom_out, DT, &[]);
    }
    assert_eq!(navigator.pose().fov, 30.0);

    let zoom_in = ControlState {
        zoom_delta: -10.0,
        ..ControlState::default()
    };
    for _ in 0..10 {
        navigator.step(&zoom_in, DT, &[]);
    }
    assert_eq!(navigator.pose().fov, 20.0);
}
