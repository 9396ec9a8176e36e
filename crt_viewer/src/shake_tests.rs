use super::*;
use crate::camera::CameraPose;
use glam::Vec3;

fn level_pose() -> CameraPose {
    CameraPose::new(Vec3::new(0.0, 1.7, 5.0), 25.0)
}

// ===== CONFIG VALIDATION =====

#[test]
fn test_default_shake_config_is_valid() {
    assert!(ShakeConfig::default().validate().is_ok());
}

#[test]
fn test_decay_outside_unit_interval_rejected() {
    let mut config = ShakeConfig::default();
    config.decay = 0.0;
    assert!(config.validate().is_err());
    config.decay = 1.0;
    assert!(config.validate().is_err());
    config.decay = 1.5;
    assert!(config.validate().is_err());
}

#[test]
fn test_negative_intensity_rejected() {
    let mut config = ShakeConfig::default();
    config.position_intensity = -0.01;
    assert!(config.validate().is_err());
}

// ===== DETERMINISM =====

#[test]
fn test_same_seed_same_perturbation() {
    let mut a = CameraShake::from_seed(ShakeConfig::default(), 7);
    let mut b = CameraShake::from_seed(ShakeConfig::default(), 7);
    let pose = level_pose();

    for _ in 0..20 {
        let shaken_a = a.apply(&pose, 20.0, 30.0);
        let shaken_b = b.apply(&pose, 20.0, 30.0);
        assert_eq!(shaken_a.position, shaken_b.position);
        assert_eq!(shaken_a.yaw, shaken_b.yaw);
        assert_eq!(shaken_a.pitch, shaken_b.pitch);
        assert_eq!(shaken_a.roll, shaken_b.roll);
        assert_eq!(shaken_a.fov, shaken_b.fov);
    }
}

// ===== PERTURBATION IS TRANSIENT =====

#[test]
fn test_input_pose_is_not_mutated() {
    let mut shake = CameraShake::from_seed(ShakeConfig::default(), 1);
    let pose = level_pose();
    let _ = shake.apply(&pose, 20.0, 30.0);
    assert_eq!(pose, level_pose());
}

#[test]
fn test_perturbation_is_bounded_by_intensity() {
    let mut shake = CameraShake::from_seed(ShakeConfig::default(), 2);
    let pose = level_pose();
    let config = ShakeConfig::default();

    let shaken = shake.apply(&pose, 20.0, 30.0);
    assert!((shaken.position - pose.position).length() <= config.position_intensity);
    assert!((shaken.yaw - pose.yaw).abs() <= config.rotation_intensity / 2.0);
    assert!((shaken.pitch - pose.pitch).abs() <= config.rotation_intensity / 2.0);
    assert!((shaken.roll - pose.roll).abs() <= config.rotation_intensity / 2.0);
}

// ===== FOV CLAMP =====

#[test]
fn test_fov_clamped_within_margin() {
    let mut config = ShakeConfig::default();
    config.fov_intensity = 100.0;
    config.fov_floor = 0.0;
    config.fov_reseed = 0.0;
    let mut shake = CameraShake::from_seed(config.clone(), 3);
    let pose = level_pose();

    for _ in 0..50 {
        let shaken = shake.apply(&pose, 20.0, 30.0);
        assert!(shaken.fov >= 20.0 - config.fov_margin);
        assert!(shaken.fov <= 30.0 + config.fov_margin);
    }
}

// ===== DECAY AND RE-SEED =====

#[test]
fn test_intensities_decay_each_tick() {
    let mut shake = CameraShake::from_seed(ShakeConfig::default(), 4);
    let (p0, r0, f0) = shake.intensities();
    let _ = shake.apply(&level_pose(), 20.0, 30.0);
    let (p1, r1, f1) = shake.intensities();
    assert!(p1 < p0);
    assert!(r1 < r0);
    assert!(f1 < f0);
}

#[test]
fn test_intensities_never_extinguish() {
    let mut shake = CameraShake::from_seed(ShakeConfig::default(), 5);
    let pose = level_pose();
    let config = ShakeConfig::default();

    for _ in 0..1000 {
        let _ = shake.apply(&pose, 20.0, 30.0);
        let (p, r, f) = shake.intensities();
        assert!(p > 0.0 && p <= config.position_intensity.max(config.position_reseed));
        assert!(r > 0.0 && r <= config.rotation_intensity.max(config.rotation_reseed));
        assert!(f > 0.0 && f <= config.fov_intensity.max(config.fov_reseed));
    }
}

// ===== ENABLE FLAG =====

#[test]
fn test_enable_flag_roundtrip() {
    let mut shake = CameraShake::new(ShakeConfig::default());
    assert!(shake.is_enabled());
    shake.set_enabled(false);
    assert!(!shake.is_enabled());
}

#[test]
fn test_disabled_in_config_starts_disabled() {
    let mut config = ShakeConfig::default();
    config.enabled = false;
    assert!(!CameraShake::new(config).is_enabled());
}
