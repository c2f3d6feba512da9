use glam::Vec2;

use crate::Rect;

/// A line segment stored as origin plus delta. `xy + dxy` is the far end.
#[derive(Debug, Clone, Copy)]
pub struct Trace {
    pub xy: Vec2,
    pub dxy: Vec2,
}

impl Trace {
    #[inline]
    pub const fn new(xy: Vec2, dxy: Vec2) -> Self {
        Self { xy, dxy }
    }

    #[inline]
    pub fn between(start: Vec2, end: Vec2) -> Self {
        Self::new(start, end - start)
    }

    #[inline]
    pub fn end(&self) -> Vec2 {
        self.xy + self.dxy
    }
}

/// True if any part of the segment lies inside or on the box. The segment is
/// clipped against each slab in turn (Liang-Barsky), so a segment passing
/// straight through without an endpoint inside still counts.
pub fn trace_intersects_rect(trace: Trace, rect: &Rect) -> bool {
    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;

    let checks = [
        (-trace.dxy.x, trace.xy.x - rect.left()),
        (trace.dxy.x, rect.right() - trace.xy.x),
        (-trace.dxy.y, trace.xy.y - rect.top()),
        (trace.dxy.y, rect.bottom() - trace.xy.y),
    ];

    for (p, q) in checks {
        if p == 0.0 {
            // Parallel to this slab, reject if outside it
            if q < 0.0 {
                return false;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return false;
            }
            if r > t0 {
                t0 = r;
            }
        } else {
            if r < t0 {
                return false;
            }
            if r < t1 {
                t1 = r;
            }
        }
    }
    t0 <= t1
}
