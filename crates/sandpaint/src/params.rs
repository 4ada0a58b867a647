//! Tunable simulation parameters, read-only to the physics pass.

use std::fmt;

use crate::cell::Rgb;

/// Untinted sand beige, the paint color before the wheel is first used.
pub const DEFAULT_COLOR: Rgb = Rgb::new(194, 178, 128);

/// The per-frame update rule applied to every grain.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PhysicsModel {
    /// Exactly one cell per frame, the classic sandpile rule.
    Discrete,
    /// Gravity-integrated velocity with fractional horizontal drift.
    Kinetic,
}

impl PhysicsModel {
    /// The other model, for the toggle control.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Discrete => Self::Kinetic,
            Self::Kinetic => Self::Discrete,
        }
    }
}

impl fmt::Display for PhysicsModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discrete => write!(f, "discrete"),
            Self::Kinetic => write!(f, "kinetic"),
        }
    }
}

/// Snapshot of the control surface read by the physics pass and the
/// brush each frame. Range clamping happens in the [`crate::Universe`]
/// setters; the core trusts these values.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SimParams {
    /// Acceleration added to a grain's velocity each tick (kinetic only).
    pub gravity: f32,
    /// Upper clamp on vertical velocity, in cells per tick.
    pub terminal_velocity: f32,
    /// Side of the square brush footprint, in cells.
    pub brush_size: i32,
    /// Color given to newly painted grains.
    pub color: Rgb,
    /// Active update rule.
    pub model: PhysicsModel,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            terminal_velocity: 10.0,
            brush_size: 1,
            color: DEFAULT_COLOR,
            model: PhysicsModel::Kinetic,
        }
    }
}
