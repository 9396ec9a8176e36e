//! Per-tick control state
//!
//! The viewer is input-agnostic: the embedding application samples its
//! devices (mouse, gamepad, scripted playback) and hands the viewer one
//! `ControlState` per tick. All fields are deltas or axis deflections for
//! that tick only; nothing is latched between ticks.

/// Control state sampled for one tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlState {
    /// Horizontal look delta (positive turns right)
    pub look_delta_x: f32,
    /// Vertical look delta (positive looks down)
    pub look_delta_y: f32,
    /// Forward/backward movement axis deflection (positive is forward)
    pub move_forward: f32,
    /// Strafe axis deflection (positive is right)
    pub move_right: f32,
    /// Zoom axis delta (positive widens the FOV)
    pub zoom_delta: f32,
}

impl ControlState {
    /// A tick with no input at all
    pub fn idle() -> Self {
        Self::default()
    }
}
