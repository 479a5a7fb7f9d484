//! Exact orientation of three points on the sphere.
//!
//! `orientation(a, b, c)` is the sign of the triple product `a · (b × c)`:
//!
//! | Result | Meaning |
//! |--------|---------|
//! | `1` | `a`, `b`, `c` turn counter-clockwise seen from outside the sphere |
//! | `-1` | clockwise |
//! | `0` | coplanar with the origin (on one great circle), or a repeated point |
//!
//! Equivalently, `orientation(v, a, b) >= 0` says `v` lies on the left of, or
//! on, the directed great circle from `a` to `b`. The sign is computed with
//! Shewchuk's adaptive-precision `orient3d` against the origin, so it is
//! exact for the given `f64` inputs: callers that partition the sphere with
//! it never see a point land on both sides of an edge.

use crate::UnitVector3;
use robust::{orient3d, Coord3D};

const ORIGIN: [f64; 3] = [0.0, 0.0, 0.0];

#[inline]
fn coord(v: [f64; 3]) -> Coord3D<f64> {
    Coord3D {
        x: v[0],
        y: v[1],
        z: v[2],
    }
}

/// Sign of `a · (b × c)`, exactly.
pub fn orientation(a: &UnitVector3, b: &UnitVector3, c: &UnitVector3) -> i32 {
    let det = orient3d(
        coord(a.to_array()),
        coord(b.to_array()),
        coord(c.to_array()),
        coord(ORIGIN),
    );
    if det > 0.0 {
        1
    } else if det < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_counter_clockwise() {
        let (x, y, z) = (UnitVector3::X, UnitVector3::Y, UnitVector3::Z);
        assert_eq!(orientation(&x, &y, &z), 1);
        assert_eq!(orientation(&y, &z, &x), 1);
        assert_eq!(orientation(&x, &z, &y), -1);
    }

    #[test]
    fn test_degenerate_is_zero() {
        let x = UnitVector3::X;
        let y = UnitVector3::Y;
        assert_eq!(orientation(&x, &x, &y), 0);
        let m = x.midpoint(&y);
        assert_eq!(orientation(&x, &m, &y), 0);
    }

    #[test]
    fn test_antisymmetric() {
        let a = UnitVector3::new(0.3, -0.2, 0.9).unwrap();
        let b = UnitVector3::new(-0.7, 0.1, 0.2).unwrap();
        let c = UnitVector3::new(0.1, 0.8, -0.4).unwrap();
        assert_eq!(orientation(&a, &b, &c), -orientation(&b, &a, &c));
        assert_eq!(orientation(&a, &b, &c), orientation(&c, &a, &b));
    }

    #[test]
    fn test_nearly_coplanar_is_decided() {
        // Points a few ulps off the equator still get a definite side.
        let a = UnitVector3::X;
        let b = UnitVector3::Y;
        let above = UnitVector3::new(1.0, 1.0, 1.0e-300).unwrap();
        let below = UnitVector3::new(1.0, 1.0, -1.0e-300).unwrap();
        assert_eq!(orientation(&a, &b, &above), 1);
        assert_eq!(orientation(&a, &b, &below), -1);
    }
}
