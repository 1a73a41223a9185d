//! Wrapping of values into half-open ranges.

use crate::error::{Error, Result};
use std::ops::{Add, Sub};

/// Wrap `value` into `[min, max)` by adding or subtracting `max - min`.
///
/// Works for integers and floats alike; angles can be mapped into
/// `[-180, 180)` with `wrap_value(angle, -180.0, 180.0)`.
///
/// # Panics
///
/// Panics if `min < max` does not hold.
///
/// # Examples
///
/// ```rust
/// # use latticekit::wrap_value;
/// assert_eq!(wrap_value(15, 0, 12), 3);
/// assert_eq!(wrap_value(-377.5, -180.0, 180.0), -17.5);
/// ```
pub fn wrap_value<T>(value: T, min: T, max: T) -> T
where
    T: Copy + PartialOrd + Add<Output = T> + Sub<Output = T>,
{
    assert!(min < max, "Invalid wrapping range: min must be less than max");

    let width = max - min;
    let mut value = value;
    while value >= max {
        value = value - width;
    }
    while value < min {
        value = value + width;
    }

    // `value + width` may round up onto `max` for values just below `min`
    if value >= max {
        return min;
    }
    value
}

/// Fallible variant of [`wrap_value`].
///
/// Returns an error instead of panicking on an empty range, and instead of
/// looping forever on values the range width cannot move (NaN, infinities).
pub fn try_wrap_value<T>(value: T, min: T, max: T) -> Result<T>
where
    T: Copy + PartialOrd + Add<Output = T> + Sub<Output = T>,
{
    if !(min < max) {
        return Err(Error::EmptyRange);
    }
    if !(value < min || value >= min) {
        return Err(Error::Unordered);
    }

    let width = max - min;
    let stuck = if value >= max {
        !(value - width < value)
    } else if value < min {
        !(value + width > value)
    } else {
        false
    };
    if stuck {
        return Err(Error::Unbounded);
    }

    Ok(wrap_value(value, min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS: f64 = 1.0e-4;

    #[test]
    fn wrap_f64() {
        assert_abs_diff_eq!(wrap_value(0.0, 0.0, 1.0), 0.0, epsilon = EPS);
        assert_abs_diff_eq!(wrap_value(1.0, 0.0, 1.0), 0.0, epsilon = EPS);
        assert_abs_diff_eq!(wrap_value(0.5, 0.0, 1.0), 0.5, epsilon = EPS);
        assert_abs_diff_eq!(wrap_value(1.25, 0.0, 1.0), 0.25, epsilon = EPS);
        assert_abs_diff_eq!(wrap_value(-0.25, 0.0, 1.0), 0.75, epsilon = EPS);
        assert_abs_diff_eq!(wrap_value(100.1, 0.0, 1.0), 0.1, epsilon = EPS);
    }

    #[test]
    fn wrap_f32() {
        let eps = EPS as f32;
        assert_abs_diff_eq!(wrap_value(0.0f32, 0.0, 1.0), 0.0, epsilon = eps);
        assert_abs_diff_eq!(wrap_value(1.0f32, 0.0, 1.0), 0.0, epsilon = eps);
        assert_abs_diff_eq!(wrap_value(0.5f32, 0.0, 1.0), 0.5, epsilon = eps);
        assert_abs_diff_eq!(wrap_value(1.25f32, 0.0, 1.0), 0.25, epsilon = eps);
        assert_abs_diff_eq!(wrap_value(-0.25f32, 0.0, 1.0), 0.75, epsilon = eps);
        assert_abs_diff_eq!(wrap_value(100.1f32, 0.0, 1.0), 0.1, epsilon = eps);
    }

    #[test]
    fn wrap_integer() {
        assert_eq!(wrap_value(0, 0, 12), 0);
        assert_eq!(wrap_value(12, 0, 12), 0);
        assert_eq!(wrap_value(5, 0, 12), 5);
        assert_eq!(wrap_value(15, 0, 12), 3);
        assert_eq!(wrap_value(-2, 0, 12), 10);
        assert_eq!(wrap_value(25, 0, 12), 1);
    }

    #[test]
    fn wrap_angles() {
        assert_eq!(wrap_value(90.0, -180.0, 180.0), 90.0);
        assert_eq!(wrap_value(180.0, -180.0, 180.0), -180.0);
        assert_eq!(wrap_value(360.0, -180.0, 180.0), 0.0);
        assert_eq!(wrap_value(-90.0, -180.0, 180.0), -90.0);
        assert_eq!(wrap_value(-360.0, -180.0, 180.0), 0.0);
        assert_eq!(wrap_value(-377.5, -180.0, 180.0), -17.5);
    }

    #[test]
    fn wrap_stays_in_range_and_congruent() {
        for v in -50i32..50 {
            let r = wrap_value(v, -3, 4);
            assert!(-3 <= r && r < 4, "{} wrapped to {}", v, r);
            assert_eq!((v - r).rem_euclid(7), 0);
            assert_eq!(wrap_value(r, -3, 4), r);
        }
    }

    #[test]
    fn wrap_upper_bound_maps_to_lower() {
        assert_eq!(wrap_value(4, -3, 4), -3);
        assert_eq!(wrap_value(2.5, -0.5, 2.5), -0.5);
    }

    #[test]
    fn wrap_idempotent() {
        for &v in &[-1000.25, -1.0, 0.0, 0.3, 359.9, 360.0, 7200.5] {
            let once = wrap_value(v, 0.0, 360.0);
            assert_eq!(wrap_value(once, 0.0, 360.0), once);
        }
    }

    #[test]
    fn wrap_just_below_min_f32() {
        let min = 4.948452f32;
        let max = 81.45507f32;
        let value = f32::from_bits(min.to_bits() - 1);

        let wrapped = wrap_value(value, min, max);
        assert!(min <= wrapped && wrapped < max, "{} wrapped to {}", value, wrapped);
        assert_eq!(wrapped, min);
        assert_eq!(wrap_value(wrapped, min, max), wrapped);
        assert_eq!(try_wrap_value(value, min, max), Ok(min));
    }

    #[test]
    fn wrap_just_below_min_f64() {
        let min = 0.1f64;
        let max = 0.7f64;
        let value = f64::from_bits(min.to_bits() - 1);

        let wrapped = wrap_value(value, min, max);
        assert!(min <= wrapped && wrapped < max, "{} wrapped to {}", value, wrapped);
        assert_eq!(wrap_value(wrapped, min, max), wrapped);
        assert_eq!(try_wrap_value(value, min, max), Ok(wrapped));
    }

    #[test]
    fn wrap_near_bounds_stays_in_range() {
        let (min, max) = (-180.0f64, 180.0f64);
        for &value in &[
            f64::from_bits(min.to_bits() + 1),
            f64::from_bits(max.to_bits() - 1),
            f64::from_bits(max.to_bits() + 1),
            3.0 * max - 1.0e-12,
            3.0 * min + 1.0e-12,
        ] {
            let wrapped = wrap_value(value, min, max);
            assert!(min <= wrapped && wrapped < max, "{} wrapped to {}", value, wrapped);
            assert_eq!(wrap_value(wrapped, min, max), wrapped);
        }
    }

    #[test]
    #[should_panic(expected = "Invalid wrapping range")]
    fn wrap_empty_range_panics() {
        wrap_value(1, 5, 5);
    }

    #[test]
    fn try_wrap_errors() {
        assert_eq!(try_wrap_value(1, 5, 5), Err(Error::EmptyRange));
        assert_eq!(try_wrap_value(1.0, 2.0, 1.0), Err(Error::EmptyRange));
        assert_eq!(try_wrap_value(f64::NAN, 0.0, 1.0), Err(Error::Unordered));
        assert_eq!(try_wrap_value(f64::INFINITY, 0.0, 1.0), Err(Error::Unbounded));
        assert_eq!(try_wrap_value(f64::NEG_INFINITY, 0.0, 1.0), Err(Error::Unbounded));
        assert_eq!(try_wrap_value(-2, 0, 12), Ok(10));
    }
}
