//! Eased rotation toward a desired angle.

use glam::Vec2;
use math::Angle;

/// Remaining rotation, in radians, below which the current angle snaps on to
/// the desired one.
pub const SMOOTHING_EPSILON: f32 = 1e-3;

/// Each update closes `rate` of the remaining gap, taking the short way
/// around. Convergence is geometric: the gap after `n` updates is
/// `gap * (1 - rate)^n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothOrientation {
    current: Angle,
    desired: Angle,
    rate: f32,
    moved: bool,
}

impl SmoothOrientation {
    pub fn new(rate: f32) -> Self {
        debug_assert!(rate > 0.0 && rate <= 1.0, "smoothing rate out of range: {rate}");
        Self {
            current: Angle::default(),
            desired: Angle::default(),
            rate,
            moved: false,
        }
    }

    pub fn update(&mut self) {
        let delta = self.current.delta_to(self.desired);
        if delta == 0.0 {
            self.moved = false;
            return;
        }

        if delta.abs() < SMOOTHING_EPSILON {
            self.current = self.desired;
        } else {
            self.current += delta * self.rate;
        }
        self.moved = true;
    }

    /// Place the orientation immediately, with nothing left to rotate.
    pub fn set_orientation(&mut self, angle: Angle) {
        self.current = angle;
        self.desired = angle;
    }

    pub fn set_desired_orientation(&mut self, angle: Angle) {
        self.desired = angle;
    }

    pub const fn orientation(&self) -> Angle {
        self.current
    }

    pub const fn desired_orientation(&self) -> Angle {
        self.desired
    }

    /// Did the last `update` change the current angle
    pub const fn moved(&self) -> bool {
        self.moved
    }

    pub fn facing(&self) -> Vec2 {
        self.current.unit()
    }
}
