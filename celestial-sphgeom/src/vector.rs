//! Cartesian vectors and points on the unit sphere.
//!
//! Two types cover the geometry:
//!
//! - [`Vector3`]: an arbitrary 3-vector, the result of sums, differences and
//!   cross products.
//! - [`UnitVector3`]: a direction, i.e. a point on the unit sphere. Every
//!   trixel vertex, circle centre and polygon vertex is one of these.
//!
//! A `UnitVector3` can only be obtained from components that are already
//! normalized ([`UnitVector3::from_normalized`]), by normalizing a non-zero
//! vector ([`Vector3::normalize`], [`UnitVector3::new`]), from longitude and
//! latitude, or as the spherical midpoint of two other unit vectors.
//!
//! ```
//! use celestial_sphgeom::{Angle, UnitVector3};
//!
//! let a = UnitVector3::X;
//! let b = UnitVector3::Y;
//! let m = a.midpoint(&b);
//! assert!((m.angle_to(&a).degrees() - 45.0).abs() < 1e-12);
//!
//! let v = UnitVector3::from_lon_lat(Angle::from_degrees(90.0), Angle::ZERO);
//! assert!((v.y() - 1.0).abs() < 1e-15);
//! ```

use crate::{Angle, SphgeomError, SphgeomResult};
use std::fmt;

/// A general 3D Cartesian vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.magnitude_squared())
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Scales the vector to unit length.
    ///
    /// Fails for the zero vector and for non-finite components, neither of
    /// which has a direction.
    pub fn normalize(&self) -> SphgeomResult<UnitVector3> {
        if !self.is_finite() {
            return Err(SphgeomError::invalid_vector(
                self.x,
                self.y,
                self.z,
                "components must be finite",
            ));
        }
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(SphgeomError::invalid_vector(
                self.x,
                self.y,
                self.z,
                "zero vector has no direction",
            ));
        }
        Ok(UnitVector3 {
            x: self.x / mag,
            y: self.y / mag,
            z: self.z / mag,
        })
    }
}

impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// A point on the unit sphere.
///
/// Components are private so the unit-norm invariant cannot be broken after
/// construction. Use [`x`](Self::x), [`y`](Self::y), [`z`](Self::z) to read
/// them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitVector3 {
    x: f64,
    y: f64,
    z: f64,
}

impl UnitVector3 {
    pub const X: UnitVector3 = UnitVector3::from_normalized(1.0, 0.0, 0.0);
    pub const Y: UnitVector3 = UnitVector3::from_normalized(0.0, 1.0, 0.0);
    pub const Z: UnitVector3 = UnitVector3::from_normalized(0.0, 0.0, 1.0);

    /// Wraps components the caller guarantees to be normalized.
    ///
    /// No check is made. This is the constructor for compile-time tables of
    /// raw coordinates.
    #[inline]
    pub const fn from_normalized(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Normalizes `(x, y, z)`.
    pub fn new(x: f64, y: f64, z: f64) -> SphgeomResult<Self> {
        Vector3::new(x, y, z).normalize()
    }

    /// Builds the unit vector for a longitude (from +X towards +Y) and a
    /// latitude (from the XY plane towards +Z).
    pub fn from_lon_lat(lon: Angle, lat: Angle) -> Self {
        let (sin_lon, cos_lon) = lon.sin_cos();
        let (sin_lat, cos_lat) = lat.sin_cos();
        Self::from_normalized(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
    }

    /// Returns `(longitude, latitude)`; longitude is in `(-π, π]`.
    pub fn lon_lat(&self) -> (Angle, Angle) {
        let d2 = self.x * self.x + self.y * self.y;
        let lon = if d2 == 0.0 {
            0.0
        } else {
            libm::atan2(self.y, self.x)
        };
        let lat = libm::atan2(self.z, libm::sqrt(d2));
        (Angle::from_radians(lon), Angle::from_radians(lat))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    #[inline]
    pub fn as_vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(&self, other: &Self) -> Vector3 {
        self.as_vector().cross(&other.as_vector())
    }

    /// The normalized sum of `self` and `other`: the point halfway along the
    /// great-circle arc between them.
    ///
    /// Antipodal inputs have no unique midpoint; `self` is returned for them.
    pub fn midpoint(&self, other: &Self) -> Self {
        (*self + *other).normalize().unwrap_or(*self)
    }

    /// Angular separation in `[0, π]`.
    ///
    /// Uses `atan2(|a × b|, a · b)`, which stays accurate for both tiny and
    /// near-antipodal separations.
    pub fn angle_to(&self, other: &Self) -> Angle {
        let sin = self.cross(other).magnitude();
        let cos = self.dot(other);
        Angle::from_radians(libm::atan2(sin, cos))
    }

    /// Returns true when the squared norm is within `tolerance` of 1.
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        libm::fabs(self.as_vector().magnitude_squared() - 1.0) <= tolerance
    }
}

impl std::ops::Add for UnitVector3 {
    type Output = Vector3;

    fn add(self, rhs: Self) -> Vector3 {
        self.as_vector() + rhs.as_vector()
    }
}

impl std::ops::Sub for UnitVector3 {
    type Output = Vector3;

    fn sub(self, rhs: Self) -> Vector3 {
        self.as_vector() - rhs.as_vector()
    }
}

/// The antipode.
impl std::ops::Neg for UnitVector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_normalized(-self.x, -self.y, -self.z)
    }
}

impl From<UnitVector3> for Vector3 {
    fn from(v: UnitVector3) -> Self {
        v.as_vector()
    }
}

impl TryFrom<Vector3> for UnitVector3 {
    type Error = SphgeomError;

    fn try_from(v: Vector3) -> SphgeomResult<Self> {
        v.normalize()
    }
}

impl fmt::Display for UnitVector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}
