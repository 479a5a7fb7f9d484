//! Plane angles in radians.
//!
//! [`Angle`] is a thin wrapper over `f64` radians used for circle opening
//! angles and angular separations. It deliberately carries no normalization:
//! an opening angle of `π` and one of `3π` mean different things to a
//! [`Circle`](crate::Circle) (both full), and a negative opening angle marks
//! an empty circle.

use crate::constants::{DEG_TO_RAD, RAD_TO_DEG};
use core::ops::{Add, Div, Mul, Neg, Sub};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    #[inline]
    pub const fn from_radians(radians: f64) -> Self {
        Self(radians)
    }

    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees * DEG_TO_RAD)
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0 * RAD_TO_DEG
    }

    #[inline]
    pub fn sin(self) -> f64 {
        libm::sin(self.0)
    }

    #[inline]
    pub fn cos(self) -> f64 {
        libm::cos(self.0)
    }

    /// Returns `(sin, cos)` in one call.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        libm::sincos(self.0)
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self(libm::fabs(self.0))
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rad", self.0)
    }
}

impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Angle(self.0 - rhs.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn mul(self, k: f64) -> Self {
        Angle(self.0 * k)
    }
}

impl Div<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn div(self, k: f64) -> Self {
        Angle(self.0 / k)
    }
}

impl Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Self {
        Angle(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PI;

    #[test]
    fn test_degree_conversion() {
        let a = Angle::from_degrees(180.0);
        assert!((a.radians() - PI).abs() < 1e-15);
        assert!((Angle::from_radians(PI / 2.0).degrees() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_ops() {
        let a = Angle::from_radians(1.0);
        let b = Angle::from_radians(0.5);
        assert_eq!((a + b).radians(), 1.5);
        assert_eq!((a - b).radians(), 0.5);
        assert_eq!((a * 2.0).radians(), 2.0);
        assert_eq!((a / 2.0).radians(), 0.5);
        assert_eq!((-a).radians(), -1.0);
    }

    #[test]
    fn test_ordering() {
        assert!(Angle::from_degrees(10.0) < Angle::from_degrees(11.0));
        assert_eq!(
            Angle::from_radians(1.0).min(Angle::from_radians(2.0)),
            Angle::from_radians(1.0)
        );
        assert!(Angle::from_radians(f64::NAN).is_nan());
    }
}
