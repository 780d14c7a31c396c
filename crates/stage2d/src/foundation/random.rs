//! Random helpers
//!
//! Thin conveniences over `rand` for the handful of patterns game code
//! reaches for constantly: unit floats, ranges, and picking from a slice.

use rand::seq::SliceRandom;
use rand::Rng;

/// Random float in `[0, 1)`
pub fn random_unit() -> f32 {
    rand::thread_rng().gen::<f32>()
}

/// Random float in `[min, max)`
///
/// Returns `min` when the range is empty (`max <= min`).
pub fn random_range(min: f32, max: f32) -> f32 {
    if max <= min {
        return min;
    }
    rand::thread_rng().gen_range(min..max)
}

/// Random integer in `[min, max]`, both bounds inclusive
///
/// Returns `min` when the range is empty (`max < min`).
pub fn random_int(min: i32, max: i32) -> i32 {
    if max < min {
        return min;
    }
    rand::thread_rng().gen_range(min..=max)
}

/// Pick a uniformly random element from a slice
///
/// Returns `None` for an empty slice.
pub fn random_element<T>(items: &[T]) -> Option<&T> {
    items.choose(&mut rand::thread_rng())
}
