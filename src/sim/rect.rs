//! Axis-aligned rectangle geometry for paddles, obstacles and UI hit-boxes
//!
//! Everything in the playfield is a rectangle or a circle; this is the
//! rectangle half. Screen coordinates: origin top-left, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge x coordinate
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge y coordinate
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Vertical center
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.center_y())
    }

    /// Check if a point lies inside the rectangle (edges inclusive)
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Closest point on (or in) the rectangle to `p`
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.x, self.right()),
            p.y.clamp(self.y, self.bottom()),
        )
    }

    /// Clamp the rectangle's vertical extent into `[0, bound]`, keeping height
    ///
    /// Idempotent: an already-in-bounds rectangle is returned unchanged.
    pub fn clamped_vertically(&self, bound: f32) -> Self {
        let y = self.y.clamp(0.0, (bound - self.h).max(0.0));
        Self { y, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains_point(Vec2::new(10.0, 20.0))); // corner is inside
        assert!(r.contains_point(Vec2::new(60.0, 45.0)));
        assert!(!r.contains_point(Vec2::new(9.9, 45.0)));
        assert!(!r.contains_point(Vec2::new(60.0, 70.1)));
    }

    #[test]
    fn test_closest_point() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Point inside maps to itself
        assert_eq!(r.closest_point(Vec2::new(5.0, 5.0)), Vec2::new(5.0, 5.0));
        // Point left of the rect clamps to the left edge
        assert_eq!(r.closest_point(Vec2::new(-3.0, 5.0)), Vec2::new(0.0, 5.0));
        // Point past a corner clamps to the corner
        assert_eq!(r.closest_point(Vec2::new(15.0, 15.0)), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_clamp_keeps_in_bounds_rect_unchanged() {
        let r = Rect::new(50.0, 100.0, 20.0, 100.0);
        assert_eq!(r.clamped_vertically(800.0), r);
        // And clamping twice is the same as clamping once
        let below = Rect::new(50.0, 900.0, 20.0, 100.0);
        let once = below.clamped_vertically(800.0);
        assert_eq!(once.clamped_vertically(800.0), once);
    }

    #[test]
    fn test_clamp_pushes_back_on_screen() {
        let above = Rect::new(50.0, -30.0, 20.0, 100.0);
        assert_eq!(above.clamped_vertically(800.0).y, 0.0);
        let below = Rect::new(50.0, 750.0, 20.0, 100.0);
        assert_eq!(below.clamped_vertically(800.0).y, 700.0);
    }
}
