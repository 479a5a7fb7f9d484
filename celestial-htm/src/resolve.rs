//! Index to trixel.

use crate::index::{child_codes, validate};
use crate::mesh::{self, Triangle, ROOT_VERTICES};
use crate::HtmResult;
use celestial_sphgeom::{ConvexPolygon, UnitVector3};

/// Vertices of trixel `index`, counter-clockwise.
pub fn resolve(index: u64) -> HtmResult<Triangle> {
    let level = validate(index)?;
    let root = ((index >> (2 * level)) & 7) as usize;
    let triangle = child_codes(index, level).fold(ROOT_VERTICES[root], |t, c| {
        mesh::child_triangle(&mesh::split(&t), c)
    });
    Ok(triangle)
}

/// Trixel `index` as a polygon region.
pub fn pixel(index: u64) -> HtmResult<ConvexPolygon> {
    resolve(index).map(ConvexPolygon::from_triangle)
}

/// Normalized vertex centroid of trixel `index`.
pub fn center(index: u64) -> HtmResult<UnitVector3> {
    Ok(pixel(index)?.centroid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locate::locate;
    use crate::{HtmError, MAX_LEVEL};
    use celestial_sphgeom::{Angle, Region};

    #[test]
    fn test_resolve_roots() {
        for root in 0..8 {
            assert_eq!(resolve(root as u64 + 8), Ok(ROOT_VERTICES[root]));
        }
    }

    #[test]
    fn test_resolve_child() {
        let kids = mesh::children(&ROOT_VERTICES[3]);
        for (c, kid) in kids.iter().enumerate() {
            assert_eq!(resolve((11 << 2) | c as u64).as_ref(), Ok(kid));
        }
    }

    #[test]
    fn test_resolve_invalid() {
        assert!(matches!(resolve(0), Err(HtmError::InvalidIndex { .. })));
        assert!(resolve(4).is_err());
        assert!(resolve(8u64 << (2 * (MAX_LEVEL + 1))).is_err());
    }

    #[test]
    fn test_located_trixel_contains_point() {
        let points = [
            UnitVector3::from_lon_lat(Angle::from_degrees(0.0), Angle::from_degrees(0.0)),
            UnitVector3::from_lon_lat(Angle::from_degrees(359.9), Angle::from_degrees(-89.9)),
            UnitVector3::from_lon_lat(Angle::from_degrees(201.3), Angle::from_degrees(33.3)),
            UnitVector3::from_lon_lat(Angle::from_degrees(45.0), Angle::from_degrees(35.26)),
        ];
        for p in &points {
            for level in [0, 1, 5, 12, 20, MAX_LEVEL] {
                let i = locate(p, level).unwrap();
                assert!(pixel(i).unwrap().contains(p), "{} at level {}", p, level);
            }
        }
    }

    #[test]
    fn test_center_locates_back() {
        for i in [8u64, 15, (9 << 2) | 3, (14 << 10) | 0b10_01_11_00_01] {
            let level = validate(i).unwrap();
            assert_eq!(locate(&center(i).unwrap(), level), Ok(i));
        }
    }
}
