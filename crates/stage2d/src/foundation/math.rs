//! Math utilities and types
//!
//! Provides the fundamental 2D math types used throughout the crate.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Clamp a value between min and max
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min { min } else if value > max { max } else { value }
}

/// Linear interpolation
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Map a value from the range [min1, max1] into the range [min2, max2]
///
/// The value is not clamped; inputs outside the source range extrapolate.
pub fn map(value: f32, min1: f32, max1: f32, min2: f32, max2: f32) -> f32 {
    let range1 = max1 - min1;
    let range2 = max2 - min2;
    (value - min1) * range2 / range1 + min2
}

/// Returns true if the number is odd
pub fn is_odd(value: i64) -> bool {
    value % 2 != 0
}

/// Extension trait for [`Vec2`] with 2D-scene conveniences
pub trait Vec2Ext {
    /// Per-component equality within an absolute threshold
    ///
    /// Useful where accumulated floating-point error makes exact comparison
    /// meaningless (positions fed through repeated transforms).
    fn equals_approx(&self, other: &Vec2, threshold: f32) -> bool;

    /// Unit vector pointing from this vector toward `target`
    ///
    /// Returns the zero vector when the two positions coincide.
    fn direction_to(&self, target: &Vec2) -> Vec2;
}

impl Vec2Ext for Vec2 {
    fn equals_approx(&self, other: &Vec2, threshold: f32) -> bool {
        (self.x - other.x).abs() <= threshold && (self.y - other.y).abs() <= threshold
    }

    fn direction_to(&self, target: &Vec2) -> Vec2 {
        let delta = target - self;
        let length = delta.magnitude();
        if length == 0.0 {
            return Vec2::zeros();
        }
        delta / length
    }
}

/// Default threshold for [`Vec2Ext::equals_approx`]
pub const DEFAULT_EPSILON: f32 = 1e-5;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn test_map_ranges() {
        assert_relative_eq!(map(5.0, 0.0, 10.0, 0.0, 1.0), 0.5);
        assert_relative_eq!(map(0.0, -1.0, 1.0, 0.0, 100.0), 50.0);
        // Values outside the source range extrapolate
        assert_relative_eq!(map(20.0, 0.0, 10.0, 0.0, 1.0), 2.0);
    }

    #[test]
    fn test_is_odd() {
        assert!(is_odd(3));
        assert!(is_odd(-1));
        assert!(!is_odd(0));
        assert!(!is_odd(8));
    }

    #[test]
    fn test_negate_round_trip() {
        let vectors = [
            Vec2::new(1.0, 2.0),
            Vec2::new(-3.5, 0.25),
            Vec2::zeros(),
            Vec2::new(1e-3, -1e6),
        ];
        for v in vectors {
            assert!((-(-v)).equals_approx(&v, DEFAULT_EPSILON));
        }
    }

    #[test]
    fn test_magnitude_matches_definition() {
        let v = Vec2::new(3.0, 4.0);
        assert_relative_eq!(v.magnitude(), 5.0);
        assert_relative_eq!(v.magnitude(), (v.x * v.x + v.y * v.y).sqrt());
    }

    #[test]
    fn test_direction_to() {
        let origin = Vec2::zeros();
        let target = Vec2::new(10.0, 0.0);
        assert_relative_eq!(origin.direction_to(&target), Vec2::new(1.0, 0.0));

        // Coincident points yield the zero vector instead of NaN
        assert_eq!(origin.direction_to(&origin), Vec2::zeros());
    }

    #[test]
    fn test_equals_approx_threshold() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(1.0 + 1e-6, 1.0 - 1e-6);
        assert!(a.equals_approx(&b, DEFAULT_EPSILON));
        assert!(!a.equals_approx(&Vec2::new(1.1, 1.0), DEFAULT_EPSILON));
    }
}
