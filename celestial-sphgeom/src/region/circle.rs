//! Spherical caps.
//!
//! A [`Circle`] is every point within an opening angle of its centre. A
//! negative opening angle is the empty circle and an opening of `π` or more
//! covers the whole sphere.
//!
//! Relating a cap to a convex polygon reduces to angular distances:
//!
//! - the nearest point of the polygon to the centre decides `Disjoint`;
//! - the farthest point decides `Contains`, and it is the antipode of the
//!   point nearest to the antipodal centre, so the same routine answers both;
//! - the distance from an interior centre to the polygon boundary decides
//!   `Within`.

use super::{ConvexPolygon, Region};
use crate::constants::{ANGLE_EPSILON, PI};
use crate::{Angle, Relationship, UnitVector3};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    center: UnitVector3,
    opening_angle: Angle,
}

impl Circle {
    pub fn new(center: UnitVector3, opening_angle: Angle) -> Self {
        Self {
            center,
            opening_angle,
        }
    }

    pub fn empty() -> Self {
        Self::new(UnitVector3::Z, Angle::from_radians(-1.0))
    }

    pub fn full() -> Self {
        Self::new(UnitVector3::Z, Angle::from_radians(PI))
    }

    pub fn center(&self) -> UnitVector3 {
        self.center
    }

    pub fn opening_angle(&self) -> Angle {
        self.opening_angle
    }

    pub fn is_full(&self) -> bool {
        self.opening_angle.radians() >= PI
    }

    /// Area in steradians.
    pub fn area(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else if self.is_full() {
            4.0 * PI
        } else {
            2.0 * PI * (1.0 - self.opening_angle.cos())
        }
    }

    fn relate_polygon(&self, polygon: &ConvexPolygon) -> Relationship {
        if self.is_empty() {
            return Relationship::Disjoint;
        }
        if self.is_full() {
            return Relationship::Contains;
        }
        let r = self.opening_angle.radians();
        let nearest = min_distance(&self.center, polygon);
        if nearest > r + ANGLE_EPSILON {
            return Relationship::Disjoint;
        }
        let farthest = PI - min_distance(&-self.center, polygon);
        if farthest <= r - ANGLE_EPSILON {
            return Relationship::Contains;
        }
        if nearest == 0.0 && boundary_distance(&self.center, polygon) >= r + ANGLE_EPSILON {
            return Relationship::Within;
        }
        Relationship::Intersects
    }
}

impl Region for Circle {
    fn contains(&self, v: &UnitVector3) -> bool {
        !self.is_empty() && self.center.angle_to(v) <= self.opening_angle
    }

    fn relate(&self, polygon: &ConvexPolygon) -> Relationship {
        self.relate_polygon(polygon)
    }

    fn is_empty(&self) -> bool {
        self.opening_angle.is_nan() || self.opening_angle.radians() < 0.0
    }
}

/// Angular distance from `p` to the closest point of `polygon`, 0 inside.
fn min_distance(p: &UnitVector3, polygon: &ConvexPolygon) -> f64 {
    if polygon.contains(p) {
        return 0.0;
    }
    boundary_distance(p, polygon)
}

fn boundary_distance(p: &UnitVector3, polygon: &ConvexPolygon) -> f64 {
    polygon
        .edges()
        .map(|(a, b)| arc_distance(p, a, b))
        .fold(f64::INFINITY, f64::min)
}

/// Angular distance from `p` to the minor great-circle arc `a -> b`.
fn arc_distance(p: &UnitVector3, a: &UnitVector3, b: &UnitVector3) -> f64 {
    let endpoints = || {
        p.angle_to(a)
            .radians()
            .min(p.angle_to(b).radians())
    };
    let n = a.cross(b);
    let n_mag = n.magnitude();
    if n_mag == 0.0 {
        return endpoints();
    }
    // The projection of p onto the great circle falls inside the arc iff p
    // lies between the planes through the origin, n and each endpoint.
    let pv = p.as_vector();
    let inside_arc = a.cross(p).dot(&n) >= 0.0 && pv.cross(&b.as_vector()).dot(&n) >= 0.0;
    if !inside_arc {
        return endpoints();
    }
    let s = (libm::fabs(pv.dot(&n)) / n_mag).min(1.0);
    libm::asin(s)
}
