//! Trixel geometry.
//!
//! The mesh starts from the octahedron: eight spherical triangles, one per
//! octant, listed in [`ROOT_VERTICES`]. Every trixel splits into four by
//! joining the midpoints of its edges. With the six points of a split trixel
//! numbered
//!
//! | slot | point |
//! |------|-------|
//! | 0 | `v0` |
//! | 1 | `v1` |
//! | 2 | `v2` |
//! | 3 | `m01`, midpoint of `v0 v1` |
//! | 4 | `m12`, midpoint of `v1 v2` |
//! | 5 | `m20`, midpoint of `v2 v0` |
//!
//! child `c` is the triangle whose vertices sit in slots `CHILD_LAYOUT[c]`.
//! The same table drives subdivision, point location and index resolution,
//! so the three can never disagree about which child is which.

use celestial_sphgeom::{orientation, UnitVector3};

/// Counter-clockwise spherical triangle, as seen from outside the sphere.
pub type Triangle = [UnitVector3; 3];

/// `v0, v1, v2, m01, m12, m20` of a split trixel.
pub type SplitPoints = [UnitVector3; 6];

const fn p(x: f64, y: f64, z: f64) -> UnitVector3 {
    UnitVector3::from_normalized(x, y, z)
}

/// Vertices of the eight root trixels. Roots 0–3 cover the southern
/// hemisphere and 4–7 the northern one.
pub const ROOT_VERTICES: [Triangle; 8] = [
    [p(1.0, 0.0, 0.0), p(0.0, 0.0, -1.0), p(0.0, 1.0, 0.0)],
    [p(0.0, 1.0, 0.0), p(0.0, 0.0, -1.0), p(-1.0, 0.0, 0.0)],
    [p(-1.0, 0.0, 0.0), p(0.0, 0.0, -1.0), p(0.0, -1.0, 0.0)],
    [p(0.0, -1.0, 0.0), p(0.0, 0.0, -1.0), p(1.0, 0.0, 0.0)],
    [p(1.0, 0.0, 0.0), p(0.0, 0.0, 1.0), p(0.0, -1.0, 0.0)],
    [p(0.0, -1.0, 0.0), p(0.0, 0.0, 1.0), p(-1.0, 0.0, 0.0)],
    [p(-1.0, 0.0, 0.0), p(0.0, 0.0, 1.0), p(0.0, 1.0, 0.0)],
    [p(0.0, 1.0, 0.0), p(0.0, 0.0, 1.0), p(1.0, 0.0, 0.0)],
];

pub(crate) const CHILD_LAYOUT: [[usize; 3]; 4] = [[0, 3, 5], [1, 4, 3], [2, 5, 4], [4, 5, 3]];

pub fn root_triangle(root: usize) -> Option<Triangle> {
    ROOT_VERTICES.get(root).copied()
}

pub fn split(t: &Triangle) -> SplitPoints {
    [
        t[0],
        t[1],
        t[2],
        t[0].midpoint(&t[1]),
        t[1].midpoint(&t[2]),
        t[2].midpoint(&t[0]),
    ]
}

/// Child `c` (0–3) of a split trixel.
#[inline]
pub fn child_triangle(points: &SplitPoints, c: usize) -> Triangle {
    let [a, b, d] = CHILD_LAYOUT[c & 3];
    [points[a], points[b], points[d]]
}

pub fn children(t: &Triangle) -> [Triangle; 4] {
    let points = split(t);
    [0, 1, 2, 3].map(|c| child_triangle(&points, c))
}

/// Picks the child of a split trixel that `v` falls in.
///
/// Corner children are tried in order and each is accepted when `v` is on
/// or left of its inner edge; a point on an inner edge goes to the lowest
/// numbered corner child. Anything left over is in the centre child.
pub(crate) fn select_child(points: &SplitPoints, v: &UnitVector3) -> usize {
    CHILD_LAYOUT[..3]
        .iter()
        .position(|&[_, b, c]| orientation(v, &points[b], &points[c]) >= 0)
        .unwrap_or(3)
}
