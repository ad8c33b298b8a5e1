//! 3D point representation

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use super::Vector3D;

/// A point in 3D space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3D {
    /// Origin point (0, 0, 0)
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new 3D point
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Coordinates as an array, in x, y, z order
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Point3D {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Point3D {
    /// Fixed-width readout used by debug panels
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:6.3}, {:6.3}, {:6.3}", self.x, self.y, self.z)
    }
}

impl Add<Vector3D> for Point3D {
    type Output = Point3D;

    fn add(self, rhs: Vector3D) -> Self::Output {
        Point3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign<Vector3D> for Point3D {
    fn add_assign(&mut self, rhs: Vector3D) {
        *self = *self + rhs;
    }
}

impl Sub for Point3D {
    type Output = Vector3D;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin() {
        let p = Point3D::ORIGIN;
        assert_eq!(p.to_array(), [0.0, 0.0, 0.0]);
        assert_eq!(p, Point3D::default());
    }

    #[test]
    fn test_add_assign_vector() {
        let mut p = Point3D::new(1.0, 2.0, 3.0);
        p += Vector3D::new(1.0, -2.0, 0.5);
        assert_eq!(p, Point3D::new(2.0, 0.0, 3.5));
    }

    #[test]
    fn test_display_readout() {
        let p = Point3D::new(1.0, -2.5, 10.0);
        assert_eq!(p.to_string(), " 1.000, -2.500, 10.000");
    }
}
