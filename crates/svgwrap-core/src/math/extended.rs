//! Scalar helpers: angle conversions, trigonometry, interpolation and ranges.

use super::vector::Vector2;
use std::f64::consts::PI;

pub const TAU: f64 = 2.0 * PI;
/// The golden ratio, (1 + sqrt 5) / 2.
pub const PHI: f64 = 1.618_033_988_749_895;
pub const GOLDEN_RATIO: f64 = PHI;
/// Default tolerance of [`epsilon_compare`].
pub const EPSILON: f64 = 0.000_001;
pub const SQRT3: f64 = 1.732_050_807_568_877_2;

pub fn degree_to_radian(angle: f64) -> f64 {
    angle * (PI / 180.0)
}

pub fn radian_to_degree(angle: f64) -> f64 {
    angle / (PI / 180.0)
}

/// Convert to `(radius, angle)`.
pub fn cartesian_to_polar(x: f64, y: f64) -> (f64, f64) {
    (x.hypot(y), y.atan2(x))
}

/// Convert `(radius, angle)` to `(x, y)`.
pub fn polar_to_cartesian(r: f64, angle: f64) -> (f64, f64) {
    (r * angle.cos(), r * angle.sin())
}

/// [`cartesian_to_polar`] on a vector; the result holds `(radius, angle)`.
pub fn vector_to_polar(v: Vector2) -> Vector2 {
    cartesian_to_polar(v.x, v.y).into()
}

/// [`polar_to_cartesian`] on a vector holding `(radius, angle)`.
pub fn polar_to_vector(polar: Vector2) -> Vector2 {
    polar_to_cartesian(polar.x, polar.y).into()
}

pub fn sec(angle: f64) -> f64 {
    1.0 / angle.cos()
}

pub fn csc(angle: f64) -> f64 {
    1.0 / angle.sin()
}

pub fn cot(angle: f64) -> f64 {
    1.0 / angle.tan()
}

/// Inverse secant, defined for `|value| >= 1`.
pub fn arcsec(value: f64) -> Option<f64> {
    (value.abs() >= 1.0).then(|| (1.0 / value).acos())
}

/// Inverse cosecant, defined for `|value| >= 1`.
pub fn arccsc(value: f64) -> Option<f64> {
    (value.abs() >= 1.0).then(|| (1.0 / value).asin())
}

pub fn arccot(value: f64) -> f64 {
    (1.0 / value).atan()
}

pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Relative comparison: `|x - y| <= epsilon * max(|x|, |y|, 1)`.
pub fn epsilon_compare(x: f64, y: f64, epsilon: f64) -> bool {
    let max_abs = x.abs().max(y.abs()).max(1.0);
    (x - y).abs() <= epsilon * max_abs
}

/// Restrict `value` to `[min, max]`. Never panics; `max` wins when `min > max`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Linear interpolation from `start` to `end`, with `t` clamped to `[0, 1]`.
pub fn lerp(t: f64, start: f64, end: f64) -> f64 {
    let t = clamp(t, 0.0, 1.0);
    start * (1.0 - t) + end * t
}

/// Map `value` from `[from_low, from_high]` to `[to_low, to_high]`.
/// The input is clamped to the source range; an empty source range yields `to_low`.
pub fn remap(value: f64, from_low: f64, from_high: f64, to_low: f64, to_high: f64) -> f64 {
    if from_high == from_low {
        return to_low;
    }
    let clamped = clamp(value, from_low.min(from_high), from_low.max(from_high));
    let ratio = (clamped - from_low) / (from_high - from_low);
    to_low + ratio * (to_high - to_low)
}

/// Uniform random number in `[min, max)`.
pub fn random(min: f64, max: f64) -> f64 {
    min + rand::random::<f64>() * (max - min)
}

pub fn is_within_range(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!((PHI - (1.0 + 5f64.sqrt()) / 2.0).abs() < 1e-15);
        assert!((SQRT3 - 3f64.sqrt()).abs() < 1e-15);
        assert!((TAU - std::f64::consts::TAU).abs() < 1e-15);
    }

    #[test]
    fn test_angle_conversions() {
        assert!((degree_to_radian(180.0) - PI).abs() < 1e-12);
        assert!((radian_to_degree(PI / 2.0) - 90.0).abs() < 1e-12);

        let (r, angle) = cartesian_to_polar(0.0, 2.0);
        assert!((r - 2.0).abs() < 1e-12);
        assert!((angle - PI / 2.0).abs() < 1e-12);
        let (x, y) = polar_to_cartesian(r, angle);
        assert!(x.abs() < 1e-12 && (y - 2.0).abs() < 1e-12);

        let v = polar_to_vector(vector_to_polar(Vector2::new(3.0, 4.0)));
        assert!((v.x - 3.0).abs() < 1e-12 && (v.y - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_trigonometry() {
        assert!((sec(0.0) - 1.0).abs() < 1e-12);
        assert!((csc(PI / 2.0) - 1.0).abs() < 1e-12);
        assert!((cot(PI / 4.0) - 1.0).abs() < 1e-12);
        assert!((arccot(1.0) - PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_inverse_domain() {
        assert_eq!(arcsec(0.5), None);
        assert_eq!(arccsc(-0.2), None);
        assert!((arcsec(2.0).unwrap() - PI / 3.0).abs() < 1e-12);
        assert!((arccsc(2.0).unwrap() - PI / 6.0).abs() < 1e-12);
        assert!((arcsec(-1.0).unwrap() - PI).abs() < 1e-12);
    }

    #[test]
    fn test_is_prime() {
        let primes: Vec<u64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(is_prime(7919));
        assert!(!is_prime(7917));
        assert!(!is_prime(u64::MAX));
        assert!(!is_prime(u64::MAX - 1));
        assert!(is_prime(4_294_967_311));
    }

    #[test]
    fn test_epsilon_compare() {
        assert!(epsilon_compare(1.0, 1.0 + 1e-7, EPSILON));
        assert!(!epsilon_compare(1.0, 1.001, EPSILON));
        assert!(epsilon_compare(1e9, 1e9 + 100.0, EPSILON));
    }

    #[test]
    fn test_lerp_and_clamp() {
        assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(lerp(0.5, 10.0, 20.0), 15.0);
        assert_eq!(lerp(2.0, 10.0, 20.0), 20.0);
        assert_eq!(lerp(-1.0, 10.0, 20.0), 10.0);
    }

    #[test]
    fn test_remap() {
        assert_eq!(remap(0.0, -1.0, 1.0, 0.0, 1.0), 0.5);
        assert_eq!(remap(5.0, 0.0, 10.0, 100.0, 200.0), 150.0);
        assert_eq!(remap(50.0, 0.0, 10.0, 100.0, 200.0), 200.0);
        assert_eq!(remap(3.0, 2.0, 2.0, 7.0, 9.0), 7.0);
        assert_eq!(remap(2.0, 10.0, 0.0, 0.0, 1.0), 0.8);
    }

    #[test]
    fn test_random_range() {
        for _ in 0..100 {
            let value = random(-2.0, 3.0);
            assert!(is_within_range(value, -2.0, 3.0));
        }
    }
}
