//! Collision detection between the ball and rectangular geometry
//!
//! The ball is a circle; paddles and obstacles are axis-aligned rectangles.
//! Overlap uses the closest-point test; responses (axis flips and flush
//! repositioning) live in the tick, next to the rules that trigger them.

use glam::Vec2;

use super::rect::Rect;

/// Check whether a circle overlaps an axis-aligned rectangle
///
/// Closest-point test: the circle overlaps iff the nearest point of the
/// rectangle is within `radius` of the circle center. Touching counts.
pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    (center - closest).length_squared() <= radius * radius
}

/// Reflect velocity off a vertical surface (flips the x component)
#[inline]
pub fn reflect_horizontal(vel: Vec2) -> Vec2 {
    Vec2::new(-vel.x, vel.y)
}

/// Reflect velocity off a horizontal surface (flips the y component)
#[inline]
pub fn reflect_vertical(vel: Vec2) -> Vec2 {
    Vec2::new(vel.x, -vel.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_center_inside() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(circle_overlaps_rect(Vec2::new(50.0, 50.0), 5.0, &rect));
    }

    #[test]
    fn test_overlap_edge() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        // 10 units left of the rect with radius 10: touching
        assert!(circle_overlaps_rect(Vec2::new(-10.0, 50.0), 10.0, &rect));
        // 11 units away: clear miss
        assert!(!circle_overlaps_rect(Vec2::new(-11.0, 50.0), 10.0, &rect));
    }

    #[test]
    fn test_overlap_corner() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        // Diagonal distance from the corner is sqrt(50) ~ 7.07
        assert!(circle_overlaps_rect(Vec2::new(-5.0, -5.0), 8.0, &rect));
        assert!(!circle_overlaps_rect(Vec2::new(-5.0, -5.0), 7.0, &rect));
    }

    #[test]
    fn test_reflections_flip_one_axis() {
        let v = Vec2::new(5.0, -3.0);
        assert_eq!(reflect_horizontal(v), Vec2::new(-5.0, -3.0));
        assert_eq!(reflect_vertical(v), Vec2::new(5.0, 3.0));
    }

    proptest! {
        /// Reflection preserves speed and is its own inverse
        #[test]
        fn prop_reflection_involution(x in -100.0f32..100.0, y in -100.0f32..100.0) {
            let v = Vec2::new(x, y);
            prop_assert_eq!(reflect_horizontal(reflect_horizontal(v)), v);
            prop_assert_eq!(reflect_vertical(reflect_vertical(v)), v);
            prop_assert!((reflect_horizontal(v).length() - v.length()).abs() < 1e-4);
        }

        /// The overlap test is symmetric in y around the rect center
        #[test]
        fn prop_overlap_mirror_symmetry(
            cx in -200i32..400,
            dy in -200i32..200,
            radius in 1i32..50,
        ) {
            // Integer-valued inputs keep every intermediate exact in f32
            let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
            let mid = rect.center_y();
            let above = Vec2::new(cx as f32, mid - dy as f32);
            let below = Vec2::new(cx as f32, mid + dy as f32);
            let radius = radius as f32;
            prop_assert_eq!(
                circle_overlaps_rect(above, radius, &rect),
                circle_overlaps_rect(below, radius, &rect)
            );
        }
    }
}
