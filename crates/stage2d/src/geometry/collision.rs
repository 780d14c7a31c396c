//! AABB collision queries
//!
//! Narrow-phase tests between axis-aligned boxes: boolean overlap,
//! minimum-translation-vector penetration, and segment sweeps using the
//! slab method.

use crate::foundation::math::{clamp, Vec2};
use crate::geometry::rect::Rect;

/// Result of a collision query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// The box the query was made against
    pub collider: Rect,
    /// Point of contact between the two objects (or an estimation of it)
    pub position: Vec2,
    /// Overlap between the two objects; adding it to the colliding object's
    /// position moves it back to a non-colliding state
    pub delta: Vec2,
    /// Surface normal at the point of contact, axis-aligned
    pub normal: Vec2,
    /// Entry time along a segment, 0..1; stays 0 for static overlap tests
    pub time: f32,
}

impl Hit {
    /// Create an empty hit against the given box
    pub fn new(collider: Rect) -> Self {
        Self {
            collider,
            position: Vec2::zeros(),
            delta: Vec2::zeros(),
            normal: Vec2::zeros(),
            time: 0.0,
        }
    }
}

/// Sign with zero preserved: -1, 0, or +1
///
/// `f32::signum` maps 0.0 to 1.0, which would fabricate a push direction
/// for exactly aligned centers; collision resolution needs the zero.
fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Penetration test between two overlapping boxes
///
/// Computes the minimum translation vector: penetration is measured on
/// both axes and resolved along the axis with the smaller overlap (the Y
/// axis on an exact tie). Returns `None` when the boxes do not overlap.
///
/// The returned [`Hit`] carries box1 as the collider; `normal` points from
/// box1 toward box2, `delta` is the displacement that separates box2 from
/// box1, and `position` is the contact point on box1's edge.
pub fn intersect_boxes(box1: &Rect, box2: &Rect) -> Option<Hit> {
    let dx = box2.center.x - box1.center.x;
    let px = box2.half.x + box1.half.x - dx.abs();
    if px <= 0.0 {
        return None;
    }

    let dy = box2.center.y - box1.center.y;
    let py = box2.half.y + box1.half.y - dy.abs();
    if py <= 0.0 {
        return None;
    }

    let mut hit = Hit::new(*box1);
    if px < py {
        let sx = sign(dx);
        hit.delta.x = px * sx;
        hit.normal.x = sx;
        hit.position.x = box1.center.x + box1.half.x * sx;
        hit.position.y = box2.center.y;
    } else {
        let sy = sign(dy);
        hit.delta.y = py * sy;
        hit.normal.y = sy;
        hit.position.x = box2.center.x;
        hit.position.y = box1.center.y + box1.half.y * sy;
    }
    Some(hit)
}

impl Rect {
    /// Penetration test against another box
    ///
    /// See [`intersect_boxes`].
    pub fn intersect(&self, other: &Rect) -> Option<Hit> {
        intersect_boxes(self, other)
    }

    /// Segment sweep against this box using the slab method
    ///
    /// The segment runs from `position` to `position + delta`; `padding`
    /// grows the box per axis before testing (useful for sweeping a box by
    /// its half-extents). Returns the entry [`Hit`] or `None` when the
    /// segment misses, stops short, or starts past the box.
    ///
    /// A zero component in `delta` produces an infinite reciprocal scale,
    /// and the IEEE-754 infinity/NaN comparison rules below make that axis
    /// unconstrained. The exact comparison structure (strict `>`, branch
    /// picks instead of min/max) is what keeps those semantics; do not
    /// "simplify" it.
    pub fn intersect_segment(&self, position: Vec2, delta: Vec2, padding: Vec2) -> Option<Hit> {
        let scale_x = 1.0 / delta.x;
        let scale_y = 1.0 / delta.y;
        let sign_x = sign(scale_x);
        let sign_y = sign(scale_y);

        let near_time_x = (self.center.x - sign_x * (self.half.x + padding.x) - position.x) * scale_x;
        let near_time_y = (self.center.y - sign_y * (self.half.y + padding.y) - position.y) * scale_y;
        let far_time_x = (self.center.x + sign_x * (self.half.x + padding.x) - position.x) * scale_x;
        let far_time_y = (self.center.y + sign_y * (self.half.y + padding.y) - position.y) * scale_y;

        if near_time_x > far_time_y || near_time_y > far_time_x {
            return None;
        }

        let near_time = if near_time_x > near_time_y { near_time_x } else { near_time_y };
        let far_time = if far_time_x < far_time_y { far_time_x } else { far_time_y };

        if near_time >= 1.0 || far_time <= 0.0 {
            return None;
        }

        let mut hit = Hit::new(*self);
        hit.time = clamp(near_time, 0.0, 1.0);
        if near_time_x > near_time_y {
            hit.normal.x = -sign_x;
        } else {
            hit.normal.y = -sign_y;
        }
        hit.delta = -delta * (1.0 - hit.time);
        hit.position = position + delta * hit.time;
        Some(hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn centered_box(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::from_center(Vec2::new(x, y), Vec2::new(w, h))
    }

    fn assert_unit_axis_normal(normal: Vec2) {
        let x_unit = normal.x.abs() == 1.0 && normal.y == 0.0;
        let y_unit = normal.y.abs() == 1.0 && normal.x == 0.0;
        assert!(x_unit || y_unit, "normal {normal:?} is not a unit axis vector");
    }

    #[test]
    fn test_separated_boxes_do_not_hit() {
        let a = centered_box(0.0, 0.0, 10.0, 10.0);
        let b = centered_box(20.0, 0.0, 10.0, 10.0);
        assert!(intersect_boxes(&a, &b).is_none());

        let c = centered_box(0.0, -30.0, 10.0, 10.0);
        assert!(intersect_boxes(&a, &c).is_none());
    }

    #[test]
    fn test_edge_contact_is_not_penetration() {
        // Touching edges have zero penetration; the MTV test rejects them
        // even though the boolean overlap test accepts them
        let a = centered_box(0.0, 0.0, 10.0, 10.0);
        let b = centered_box(10.0, 0.0, 10.0, 10.0);
        assert!(intersect_boxes(&a, &b).is_none());
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_penetration_resolves_along_smaller_axis() {
        // Deep on Y, shallow on X: resolution happens on X
        let a = centered_box(0.0, 0.0, 10.0, 10.0);
        let b = centered_box(8.0, 0.0, 10.0, 10.0);

        let hit = intersect_boxes(&a, &b).expect("boxes overlap");
        assert_eq!(hit.normal, Vec2::new(1.0, 0.0));
        assert_relative_eq!(hit.delta.x, 2.0);
        assert_eq!(hit.delta.y, 0.0);
        assert_eq!(hit.position, Vec2::new(5.0, 0.0));
        assert_eq!(hit.time, 0.0);
    }

    #[test]
    fn test_equal_penetration_resolves_on_y() {
        // Diagonal offset with identical penetration on both axes; the
        // strict `<` comparison sends ties to the Y branch
        let a = centered_box(0.0, 0.0, 10.0, 10.0);
        let b = centered_box(5.0, 5.0, 10.0, 10.0);

        let hit = intersect_boxes(&a, &b).expect("boxes overlap");
        assert_eq!(hit.normal, Vec2::new(0.0, 1.0));
        assert_relative_eq!(hit.delta.y, 5.0);
        assert_eq!(hit.position, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_normal_is_unit_axis_vector() {
        let a = centered_box(0.0, 0.0, 10.0, 10.0);
        let others = [
            centered_box(7.0, 1.0, 10.0, 10.0),
            centered_box(-6.0, 2.0, 10.0, 10.0),
            centered_box(1.0, 8.0, 10.0, 10.0),
            centered_box(-2.0, -7.5, 10.0, 10.0),
        ];

        for b in others {
            let hit = intersect_boxes(&a, &b).expect("boxes overlap");
            assert_unit_axis_normal(hit.normal);
        }
    }

    #[test]
    fn test_normal_points_toward_second_box() {
        let a = centered_box(0.0, 0.0, 10.0, 10.0);
        let left = centered_box(-8.0, 0.0, 10.0, 10.0);

        let hit = intersect_boxes(&a, &left).expect("boxes overlap");
        assert_eq!(hit.normal, Vec2::new(-1.0, 0.0));
        assert_relative_eq!(hit.delta.x, -2.0);
        assert_eq!(hit.position, Vec2::new(-5.0, 0.0));
    }

    #[test]
    fn test_segment_through_box() {
        let rect = centered_box(0.0, 0.0, 10.0, 10.0);
        let hit = rect
            .intersect_segment(Vec2::new(-10.0, 0.0), Vec2::new(20.0, 0.0), Vec2::zeros())
            .expect("segment crosses the box");

        assert_relative_eq!(hit.time, 0.25);
        assert_eq!(hit.normal, Vec2::new(-1.0, 0.0));
        assert_eq!(hit.position, Vec2::new(-5.0, 0.0));
        assert_eq!(hit.delta, Vec2::new(-15.0, 0.0));
        assert!((0.0..=1.0).contains(&hit.time));
    }

    #[test]
    fn test_segment_missing_box() {
        let rect = centered_box(0.0, 0.0, 10.0, 10.0);
        // Parallel to the X axis but above the box: the Y slab times are
        // both -inf and the interval check rejects
        assert!(rect
            .intersect_segment(Vec2::new(-10.0, 20.0), Vec2::new(20.0, 0.0), Vec2::zeros())
            .is_none());
    }

    #[test]
    fn test_segment_stopping_short_or_starting_past() {
        let rect = centered_box(0.0, 0.0, 10.0, 10.0);
        // Ends before reaching the box
        assert!(rect
            .intersect_segment(Vec2::new(-20.0, 0.0), Vec2::new(5.0, 0.0), Vec2::zeros())
            .is_none());
        // Starts on the far side, moving away
        assert!(rect
            .intersect_segment(Vec2::new(10.0, 0.0), Vec2::new(20.0, 0.0), Vec2::zeros())
            .is_none());
    }

    #[test]
    fn test_segment_diagonal_entry() {
        let rect = centered_box(0.0, 0.0, 10.0, 10.0);
        let hit = rect
            .intersect_segment(Vec2::new(-10.0, -10.0), Vec2::new(20.0, 20.0), Vec2::zeros())
            .expect("diagonal segment crosses the box");

        assert_relative_eq!(hit.time, 0.25);
        // Equal entry times on both axes resolve to the Y normal, signed
        // against the motion
        assert_eq!(hit.normal, Vec2::new(0.0, -1.0));
        assert_eq!(hit.position, Vec2::new(-5.0, -5.0));
    }

    #[test]
    fn test_segment_starting_inside_clamps_time() {
        let rect = centered_box(0.0, 0.0, 10.0, 10.0);
        let hit = rect
            .intersect_segment(Vec2::zeros(), Vec2::new(20.0, 0.0), Vec2::zeros())
            .expect("segment starts inside the box");

        assert_eq!(hit.time, 0.0);
        assert_eq!(hit.position, Vec2::zeros());
    }

    #[test]
    fn test_segment_padding_extends_the_box() {
        let rect = centered_box(0.0, 0.0, 10.0, 10.0);
        let start = Vec2::new(-10.0, 6.5);
        let delta = Vec2::new(20.0, 0.0);

        assert!(rect.intersect_segment(start, delta, Vec2::zeros()).is_none());

        let hit = rect
            .intersect_segment(start, delta, Vec2::new(0.0, 2.0))
            .expect("padding brings the segment into range");
        assert_relative_eq!(hit.time, 0.25);
        assert_eq!(hit.normal, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_vertical_segment_ignores_stationary_axis() {
        // delta.x == 0 exercises the infinite-reciprocal path: the X slab
        // spans the whole line and only the Y slab constrains the hit
        let rect = centered_box(0.0, 0.0, 10.0, 10.0);
        let hit = rect
            .intersect_segment(Vec2::new(0.0, -20.0), Vec2::new(0.0, 40.0), Vec2::zeros())
            .expect("vertical segment crosses the box");

        assert_relative_eq!(hit.time, 0.375);
        assert_eq!(hit.normal, Vec2::new(0.0, -1.0));
        assert_eq!(hit.position, Vec2::new(0.0, -5.0));

        // Same segment shifted off the box on X misses entirely
        assert!(rect
            .intersect_segment(Vec2::new(9.0, -20.0), Vec2::new(0.0, 40.0), Vec2::zeros())
            .is_none());
    }
}
