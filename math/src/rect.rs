use glam::Vec2;

/// Axis aligned box, `xy` is the top-left corner.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A box of the given extent sitting at the origin. Usually followed by
    /// a `centre_around`.
    #[inline]
    pub const fn with_extent(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub fn centre(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Move the box so its centre sits on `point`, keeping the extent.
    #[inline]
    pub fn centre_around(&mut self, point: Vec2) {
        self.x = point.x - self.width * 0.5;
        self.y = point.y - self.height * 0.5;
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Overlap test. Boxes that only share an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// True if `other` lies entirely inside this box, edges inclusive.
    #[inline]
    pub fn contains(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;
    use glam::Vec2;

    #[test]
    fn centre_around_keeps_extent() {
        let mut r = Rect::with_extent(48.0, 48.0);
        r.centre_around(Vec2::new(100.0, 50.0));
        assert_eq!(r, Rect::new(76.0, 26.0, 48.0, 48.0));
        assert_eq!(r.centre(), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));

        let c = Rect::new(9.0, 9.0, 10.0, 10.0);
        assert!(a.intersects(&c));
        assert!(c.intersects(&a));
    }

    #[test]
    fn containment_is_stricter_than_overlap() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inside = Rect::new(10.0, 10.0, 20.0, 20.0);
        let straddle = Rect::new(90.0, 10.0, 20.0, 20.0);

        assert!(outer.contains(&inside));
        assert!(!outer.contains(&straddle));
        assert!(outer.intersects(&straddle));
        assert!(outer.contains(&outer));
    }
}
