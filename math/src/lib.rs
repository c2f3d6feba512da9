//! Small 2D math kit shared by the gameplay and net crates. Vectors are
//! glam's `Vec2`, everything else is built on top of that.

mod angle;
mod intercept;
mod rect;

pub use angle::*;
pub use glam::Vec2;
pub use intercept::*;
pub use rect::*;

/// Scale `dir` by `scale` and add it to `origin`. Used for placing points
/// some distance along a facing.
#[inline]
pub fn vec2_ma(origin: Vec2, dir: Vec2, scale: f32) -> Vec2 {
    origin + dir * scale
}

/// The facing rotated a quarter turn clockwise on screen (y down).
#[inline]
pub fn perpendicular(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

#[cfg(test)]
mod tests {
    use super::{perpendicular, vec2_ma};
    use glam::Vec2;

    #[test]
    fn multiply_add() {
        let p = vec2_ma(Vec2::new(10.0, 10.0), Vec2::new(0.0, -1.0), 64.0);
        assert_eq!(p, Vec2::new(10.0, -54.0));
    }

    #[test]
    fn perpendicular_of_east_is_south() {
        assert_eq!(perpendicular(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0));
        assert_eq!(perpendicular(Vec2::new(0.0, -1.0)), Vec2::new(1.0, 0.0));
    }
}
