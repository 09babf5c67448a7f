//! Two- and three-component vectors.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 2D vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Alias of [`Vector2::magnitude`].
    pub fn length(self) -> f64 {
        self.magnitude()
    }

    /// Unit vector in the same direction. The zero vector is returned unchanged.
    pub fn normalize(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return self;
        }
        Self::new(self.x / magnitude, self.y / magnitude)
    }

    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    pub fn add_scalar(self, scalar: f64) -> Self {
        Self::new(self.x + scalar, self.y + scalar)
    }

    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    pub fn subtract_scalar(self, scalar: f64) -> Self {
        Self::new(self.x - scalar, self.y - scalar)
    }

    /// Component-wise product.
    pub fn multiply(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    pub fn multiply_scalar(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Component-wise quotient. Unchanged when any component of `other` is zero.
    pub fn divide(self, other: Self) -> Self {
        if other.x == 0.0 || other.y == 0.0 {
            return self;
        }
        Self::new(self.x / other.x, self.y / other.y)
    }

    /// Unchanged when `scalar` is zero.
    pub fn divide_scalar(self, scalar: f64) -> Self {
        if scalar == 0.0 {
            return self;
        }
        Self::new(self.x / scalar, self.y / scalar)
    }

    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Component-wise reciprocal.
    pub fn invert(self) -> Self {
        Self::new(1.0 / self.x, 1.0 / self.y)
    }

    /// Order by magnitude.
    pub fn compare(self, other: Self) -> Ordering {
        self.magnitude()
            .partial_cmp(&other.magnitude())
            .unwrap_or(Ordering::Equal)
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector2::add(self, other)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.subtract(other)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.multiply_scalar(scalar)
    }
}

impl Div<f64> for Vector2 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        self.divide_scalar(scalar)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl From<Vec2> for Vector2 {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for Vec2 {
    fn from(v: Vector2) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Point> for Vector2 {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl IntoIterator for Vector2 {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 2>;

    fn into_iter(self) -> Self::IntoIter {
        [self.x, self.y].into_iter()
    }
}

/// A 3D vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn set(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// The `x` and `y` components.
    pub fn xy(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn length(self) -> f64 {
        self.magnitude()
    }

    /// Unit vector in the same direction. The zero vector is returned unchanged.
    pub fn normalize(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return self;
        }
        Self::new(self.x / magnitude, self.y / magnitude, self.z / magnitude)
    }

    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn add_scalar(self, scalar: f64) -> Self {
        Self::new(self.x + scalar, self.y + scalar, self.z + scalar)
    }

    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn subtract_scalar(self, scalar: f64) -> Self {
        Self::new(self.x - scalar, self.y - scalar, self.z - scalar)
    }

    pub fn multiply(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    pub fn multiply_scalar(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Component-wise quotient. Unchanged when any component of `other` is zero.
    pub fn divide(self, other: Self) -> Self {
        if other.x == 0.0 || other.y == 0.0 || other.z == 0.0 {
            return self;
        }
        Self::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }

    pub fn divide_scalar(self, scalar: f64) -> Self {
        if scalar == 0.0 {
            return self;
        }
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }

    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    pub fn invert(self) -> Self {
        Self::new(1.0 / self.x, 1.0 / self.y, 1.0 / self.z)
    }

    pub fn compare(self, other: Self) -> Ordering {
        self.magnitude()
            .partial_cmp(&other.magnitude())
            .unwrap_or(Ordering::Equal)
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector3::add(self, other)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.subtract(other)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.multiply_scalar(scalar)
    }
}

impl Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        self.divide_scalar(scalar)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl IntoIterator for Vector3 {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        [self.x, self.y, self.z].into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector2_basics() {
        let v = Vector2::new(2.0, 3.0);
        assert!((v.magnitude() - 3.6055).abs() < 1e-4);
        assert!((v.normalize().magnitude() - 1.0).abs() < 1e-9);
        assert!((v.distance(Vector2::new(5.0, 7.0)) - 5.0).abs() < 1e-9);
        assert_eq!(v.dot(Vector2::new(4.0, 6.0)), 26.0);

        let mut w = v;
        w.set(7.0, 8.0);
        assert_eq!(w, Vector2::new(7.0, 8.0));
        assert_eq!(v, Vector2::new(2.0, 3.0));
    }

    #[test]
    fn test_vector2_arithmetic() {
        let v = Vector2::new(2.0, 4.0);
        assert_eq!(v + Vector2::new(1.0, 1.0), Vector2::new(3.0, 5.0));
        assert_eq!(v - Vector2::new(1.0, 1.0), Vector2::new(1.0, 3.0));
        assert_eq!(v.add_scalar(1.0), Vector2::new(3.0, 5.0));
        assert_eq!(v.multiply(Vector2::new(2.0, 0.5)), Vector2::new(4.0, 2.0));
        assert_eq!(v * 2.0, Vector2::new(4.0, 8.0));
        assert_eq!(-v, Vector2::new(-2.0, -4.0));
        assert_eq!(v.invert(), Vector2::new(0.5, 0.25));
    }

    #[test]
    fn test_divide_by_zero_is_unchanged() {
        let v = Vector2::new(2.0, 4.0);
        assert_eq!(v.divide(Vector2::new(2.0, 0.0)), v);
        assert_eq!(v.divide(Vector2::new(2.0, 4.0)), Vector2::new(1.0, 1.0));
        assert_eq!(v / 0.0, v);
        assert_eq!(Vector2::ZERO.normalize(), Vector2::ZERO);
        assert_eq!(Vector3::new(1.0, 1.0, 1.0).divide_scalar(0.0), Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_compare_by_magnitude() {
        let short = Vector2::new(1.0, 0.0);
        let long = Vector2::new(0.0, -3.0);
        assert_eq!(short.compare(long), Ordering::Less);
        assert_eq!(long.compare(short), Ordering::Greater);
        assert_eq!(short.compare(Vector2::new(0.0, 1.0)), Ordering::Equal);
    }

    #[test]
    fn test_vector3() {
        let v = Vector3::new(1.0, 2.0, 2.0);
        assert!((v.magnitude() - 3.0).abs() < 1e-12);
        let n = v.normalize();
        assert!((n.z - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(v.dot(Vector3::new(1.0, 1.0, 1.0)), 5.0);
        assert_eq!(
            Vector3::new(1.0, 0.0, 0.0).cross(Vector3::new(0.0, 1.0, 0.0)),
            Vector3::new(0.0, 0.0, 1.0)
        );
        assert_eq!(v.xy(), Vector2::new(1.0, 2.0));
        assert_eq!(v.into_iter().sum::<f64>(), 5.0);
    }

    #[test]
    fn test_kurbo_conversions() {
        let v: Vector2 = Vec2::new(1.0, 2.0).into();
        let back: Vec2 = v.into();
        assert_eq!(back, Vec2::new(1.0, 2.0));
        assert_eq!(Vector2::from(Point::new(3.0, 4.0)).to_point(), Point::new(3.0, 4.0));
    }
}
