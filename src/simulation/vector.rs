//! 2D vector value type used for every kinematic quantity in the simulation
//!
//! `Vector2D` wraps an nalgebra `Vector2<f64>` (`NVec2`) and adds the handful of
//! operations the physics code leans on: polar angle, a unit vector that is
//! total over the zero vector, and a checked scalar division.
//!
//! The type is `Copy`; every operation returns a new value and callers rebind.

use std::f64::consts::TAU;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use nalgebra::Vector2;

use crate::error::VectorError;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, Copy, Default)]
pub struct Vector2D(NVec2);

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self(NVec2::new(x, y))
    }

    pub fn zeros() -> Self {
        Self(NVec2::zeros())
    }

    /// Vector with both components set to `value`
    pub fn splat(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Cartesian vector from polar coordinates (radius `r`, angle `phi` in radians)
    pub fn from_polar(r: f64, phi: f64) -> Self {
        Self::new(r * phi.cos(), r * phi.sin())
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn scale(self, s: f64) -> Self {
        Self(self.0 * s)
    }

    /// Divide both components by `divisor`
    /// - fails with [`VectorError::DivisionByZero`] when `divisor == 0`
    pub fn divide(self, divisor: f64) -> Result<Self, VectorError> {
        if divisor == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(Self(self.0 / divisor))
    }

    /// Euclidean norm
    pub fn magnitude(&self) -> f64 {
        self.0.norm()
    }

    /// Polar angle in [0, 2π)
    pub fn phi(&self) -> f64 {
        let angle = self.0.y.atan2(self.0.x);
        if angle < 0.0 {
            // atan2 can return -0.0 or tiny negatives that round back up to 2π
            let wrapped = angle + TAU;
            if wrapped >= TAU { 0.0 } else { wrapped }
        } else {
            angle
        }
    }

    /// Same direction, length 1
    /// The zero vector maps to the zero vector instead of NaN
    pub fn unit_vector(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Self::zeros();
        }
        Self(self.0 / magnitude)
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.0.dot(&other.0)
    }

    pub fn distance(&self, other: &Self) -> f64 {
        (self.0 - other.0).norm()
    }

    /// Angle between two vectors in [0, π]; NaN if either has zero length
    pub fn angle_between(&self, other: &Self) -> f64 {
        (self.dot(other) / (self.magnitude() * other.magnitude())).acos()
    }

    pub fn as_nvec(&self) -> &NVec2 {
        &self.0
    }
}

// Bitwise comparison, so 0.0 and -0.0 differ and identical NaNs match
impl PartialEq for Vector2D {
    fn eq(&self, other: &Self) -> bool {
        self.0.x.to_bits() == other.0.x.to_bits() && self.0.y.to_bits() == other.0.y.to_bits()
    }
}

impl Eq for Vector2D {}

impl From<NVec2> for Vector2D {
    fn from(v: NVec2) -> Self {
        Self(v)
    }
}

impl From<Vector2D> for NVec2 {
    fn from(v: Vector2D) -> Self {
        v.0
    }
}

impl From<[f64; 2]> for Vector2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Vector2D {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, rhs: Vector2D) -> Vector2D {
        rhs.scale(self)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}
