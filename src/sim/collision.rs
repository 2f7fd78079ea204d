//! Axis-aligned collision tests
//!
//! Everything in the world is an axis-aligned rectangle, so the only
//! primitives needed are strict AABB overlap and the platform landing test.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, top-left origin, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict horizontal overlap (touching edges do not count)
    #[inline]
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.x < other.right() && self.right() > other.x
    }

    /// Strict AABB overlap on all four sides
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.overlaps_horizontally(other) && self.y < other.bottom() && self.bottom() > other.y
    }
}

/// Whether a body with `bounds` moving down at `vel_y` lands on `platform` this frame.
///
/// The body's bottom edge has to be strictly inside the platform's vertical
/// band. A body moving faster than the platform is thick can pass through it.
pub fn lands_on(bounds: &Rect, vel_y: f32, platform: &Rect) -> bool {
    let bottom = bounds.bottom();
    vel_y > 0.0
        && bounds.overlaps_horizontally(platform)
        && bottom > platform.y
        && bottom < platform.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_is_strict() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);

        // Sharing an edge is not an overlap
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));

        assert!(a.overlaps(&Rect::new(9.9, 9.9, 10.0, 10.0)));
        assert!(a.overlaps(&Rect::new(2.0, 2.0, 2.0, 2.0)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Rect::new(0.0, 0.0, 40.0, 40.0);
        let b = Rect::new(30.0, 35.0, 15.0, 15.0);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_lands_when_bottom_inside_band() {
        let platform = Rect::new(0.0, 100.0, 200.0, 20.0);
        let body = Rect::new(50.0, 61.0, 40.0, 40.0); // bottom at 101

        assert!(lands_on(&body, 1.0, &platform));
    }

    #[test]
    fn test_no_landing_when_rising() {
        let platform = Rect::new(0.0, 100.0, 200.0, 20.0);
        let body = Rect::new(50.0, 61.0, 40.0, 40.0);

        assert!(!lands_on(&body, -3.0, &platform));
        assert!(!lands_on(&body, 0.0, &platform));
    }

    #[test]
    fn test_no_landing_outside_band() {
        let platform = Rect::new(0.0, 100.0, 200.0, 20.0);

        // Bottom exactly on the surface
        assert!(!lands_on(&Rect::new(50.0, 60.0, 40.0, 40.0), 1.0, &platform));
        // Bottom exactly at the underside
        assert!(!lands_on(&Rect::new(50.0, 80.0, 40.0, 40.0), 1.0, &platform));
        // Off the side
        assert!(!lands_on(&Rect::new(200.0, 61.0, 40.0, 40.0), 1.0, &platform));
    }
}
