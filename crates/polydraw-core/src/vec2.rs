//! 2D point/vector value type used throughout the geometry model.

use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// A 2D point or displacement with `f64` components.
///
/// Plain value type: freely copyable, immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// Horizontal component, in canvas units.
    pub x: f64,
    /// Vertical component, in canvas units.
    pub y: f64,
}

impl Vec2 {
    /// Creates a new vector with the given components.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Vec2) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vec2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtract() {
        let a = Vec2::new(5.0, 9.0);
        let b = Vec2::new(2.0, 4.0);
        assert_eq!(a - b, Vec2::new(3.0, 5.0));
    }

    #[test]
    fn test_subtract_self_is_zero() {
        let a = Vec2::new(-3.5, 7.25);
        assert_eq!(a - a, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
    }

    #[test]
    fn test_distance_symmetry() {
        let a = Vec2::new(12.5, -8.0);
        let b = Vec2::new(-1.0, 44.0);
        assert_eq!(a.distance_to(b), b.distance_to(a));
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = Vec2::new(100.0, 130.0);
        assert_eq!(a.distance_to(a), 0.0);
    }
}
