//! Point to index.

use crate::index::check_level;
use crate::mesh::{self, ROOT_VERTICES};
use crate::HtmResult;
use celestial_sphgeom::{Angle, UnitVector3};

/// Root trixel containing `v`.
///
/// Points on the equator belong to the north; points on a meridian plane are
/// assigned by the sign tests below, which keep every root closed on the
/// same sides as the child selection in [`mesh`].
pub fn root_of(v: &UnitVector3) -> usize {
    let (x, y, z) = (v.x(), v.y(), v.z());
    if z < 0.0 {
        if y > 0.0 {
            if x > 0.0 {
                0
            } else {
                1
            }
        } else if y == 0.0 {
            if x >= 0.0 {
                0
            } else {
                2
            }
        } else if x < 0.0 {
            2
        } else {
            3
        }
    } else if y > 0.0 {
        if x > 0.0 {
            7
        } else {
            6
        }
    } else if y == 0.0 {
        if x >= 0.0 {
            7
        } else {
            5
        }
    } else if x < 0.0 {
        5
    } else {
        4
    }
}

/// Index of the level-`level` trixel containing `v`.
pub fn locate(v: &UnitVector3, level: u32) -> HtmResult<u64> {
    check_level(level)?;
    Ok(descend(v, level))
}

/// [`locate`] for a level already known to be valid.
pub(crate) fn descend(v: &UnitVector3, level: u32) -> u64 {
    let root = root_of(v);
    let mut index = root as u64 + 8;
    let mut triangle = ROOT_VERTICES[root];
    for _ in 0..level {
        let points = mesh::split(&triangle);
        let c = mesh::select_child(&points, v);
        index = (index << 2) | c as u64;
        triangle = mesh::child_triangle(&points, c);
    }
    index
}

/// Locates a longitude/latitude position.
pub fn locate_lon_lat(lon: Angle, lat: Angle, level: u32) -> HtmResult<u64> {
    locate(&UnitVector3::from_lon_lat(lon, lat), level)
}

/// Locates a raw Cartesian direction, normalizing it first.
///
/// Fails with a geometry error for the zero vector or non-finite input.
pub fn locate_xyz(x: f64, y: f64, z: f64, level: u32) -> HtmResult<u64> {
    let v = UnitVector3::new(x, y, z)?;
    locate(&v, level)
}
