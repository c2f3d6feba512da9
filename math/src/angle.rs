use glam::Vec2;
use std::f32::consts::{PI, TAU};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// An orientation in radians, always wrapped to `0..TAU`.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct Angle(f32);

impl Angle {
    /// Will always wrap < 0 to > PI
    #[inline]
    pub const fn new(mut radians: f32) -> Self {
        radians %= TAU;
        if radians < 0.0 {
            radians += TAU;
        }
        Angle(radians)
    }

    #[inline]
    const fn inner_wrap(&mut self) {
        self.0 %= TAU;
        if self.0 < 0.0 {
            self.0 += TAU;
        }
    }

    #[inline]
    pub const fn rad(&self) -> f32 {
        self.0
    }

    #[inline]
    pub fn degrees(&self) -> f32 {
        self.0.to_degrees()
    }

    #[inline]
    pub fn sin_cos(&self) -> (f32, f32) {
        self.0.sin_cos()
    }

    /// The unit vector pointing along this angle. Y grows "down" the map the
    /// same way it does on screen.
    #[inline(always)]
    pub fn unit(&self) -> Vec2 {
        let (y, x) = self.sin_cos();
        Vec2::new(x, y)
    }

    pub fn from_vector(input: Vec2) -> Self {
        Angle::new(input.y.atan2(input.x))
    }

    /// Shortest signed rotation that takes `self` on to `other`, in `(-PI, PI]`.
    #[inline]
    pub fn delta_to(self, other: Angle) -> f32 {
        let mut delta = other.0 - self.0;
        if delta > PI {
            delta -= TAU;
        } else if delta <= -PI {
            delta += TAU;
        }
        delta
    }
}

impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, other: Angle) -> Angle {
        Angle::new(self.0 + other.0)
    }
}

impl Add<f32> for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, other: f32) -> Angle {
        Angle::new(self.0 + other)
    }
}

impl AddAssign<f32> for Angle {
    #[inline]
    fn add_assign(&mut self, other: f32) {
        self.0 += other;
        self.inner_wrap();
    }
}

impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, other: Angle) -> Angle {
        Angle::new(self.0 - other.0)
    }
}

impl Sub<f32> for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, other: f32) -> Angle {
        Angle::new(self.0 - other)
    }
}

impl SubAssign<f32> for Angle {
    #[inline]
    fn sub_assign(&mut self, other: f32) {
        self.0 -= other;
        self.inner_wrap();
    }
}

impl Neg for Angle {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Angle::new(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Angle;
    use glam::Vec2;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn wraps_negative() {
        let a = Angle::new(-FRAC_PI_2);
        assert!((a.rad() - 3.0 * FRAC_PI_2).abs() < 1e-6);

        let mut b = Angle::new(0.1);
        b -= 0.2;
        assert!((b.rad() - (TAU - 0.1)).abs() < 1e-5);
    }

    #[test]
    fn shortest_delta_crosses_zero() {
        let from = Angle::new(3.0 * FRAC_PI_2);
        let to = Angle::new(0.0);
        assert!((from.delta_to(to) - FRAC_PI_2).abs() < 1e-6);
        assert!((to.delta_to(from) + FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn half_turn_is_positive() {
        let d = Angle::new(0.0).delta_to(Angle::new(PI));
        assert!((d - PI).abs() < 1e-6);
    }

    #[test]
    fn unit_and_back() {
        let a = Angle::new(FRAC_PI_2);
        let u = a.unit();
        assert!(u.x.abs() < 1e-6);
        assert!((u.y - 1.0).abs() < 1e-6);

        let b = Angle::from_vector(Vec2::new(0.0, -1.0));
        assert!((b.rad() - 3.0 * FRAC_PI_2).abs() < 1e-6);
    }
}
