//! Convex polygons with great-circle edges.
//!
//! Vertices run counter-clockwise seen from outside the sphere, so the
//! interior is on the left of every directed edge. That makes point
//! containment one [`orientation`] test per edge, and it lets two polygons be
//! related purely through vertex tests:
//!
//! - every vertex of `B` inside `A` means `B ⊆ A`, because `A` is an
//!   intersection of closed hemispheres and `B` is the set of positive
//!   combinations of its vertices;
//! - all vertices of `B` strictly outside one edge of `A` (or vice versa)
//!   means a great circle separates them.
//!
//! Everything else is reported as [`Relationship::Intersects`].

use super::Region;
use crate::orientation::orientation;
use crate::{Relationship, SphgeomError, SphgeomResult, UnitVector3};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvexPolygon {
    vertices: Vec<UnitVector3>,
}

impl ConvexPolygon {
    /// Builds a polygon from counter-clockwise vertices.
    ///
    /// Every vertex must lie strictly on the left of every edge it is not an
    /// endpoint of; this rejects clockwise input, repeated or collinear
    /// vertices, and self-overlapping outlines.
    pub fn new(vertices: Vec<UnitVector3>) -> SphgeomResult<Self> {
        let n = vertices.len();
        if n < 3 {
            return Err(SphgeomError::invalid_polygon(format!(
                "need at least 3 vertices, got {}",
                n
            )));
        }
        for i in 0..n {
            let a = &vertices[i];
            let b = &vertices[(i + 1) % n];
            for (j, v) in vertices.iter().enumerate() {
                if j == i || j == (i + 1) % n {
                    continue;
                }
                if orientation(a, b, v) <= 0 {
                    return Err(SphgeomError::invalid_polygon(format!(
                        "vertex {} is not strictly left of edge {} -> {}",
                        j,
                        i,
                        (i + 1) % n
                    )));
                }
            }
        }
        Ok(Self { vertices })
    }

    /// Wraps a triangle already known to be counter-clockwise.
    pub fn from_triangle(triangle: [UnitVector3; 3]) -> Self {
        Self {
            vertices: triangle.to_vec(),
        }
    }

    pub fn vertices(&self) -> &[UnitVector3] {
        &self.vertices
    }

    /// Directed edges `(v[i], v[i + 1])`, closing back to the first vertex.
    pub fn edges(&self) -> impl Iterator<Item = (&UnitVector3, &UnitVector3)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % n]))
    }

    /// The normalized vertex sum.
    pub fn centroid(&self) -> UnitVector3 {
        self.vertices
            .iter()
            .fold(crate::Vector3::default(), |acc, v| acc + v.as_vector())
            .normalize()
            .unwrap_or(self.vertices[0])
    }

    /// Relates `self` (`A`) to `other` (`B`).
    pub fn relate_polygon(&self, other: &ConvexPolygon) -> Relationship {
        if other.vertices.iter().all(|v| self.contains_point(v)) {
            return Relationship::Contains;
        }
        if self.vertices.iter().all(|v| other.contains_point(v)) {
            return Relationship::Within;
        }
        if self.separates(other) || other.separates(self) {
            return Relationship::Disjoint;
        }
        Relationship::Intersects
    }

    fn contains_point(&self, v: &UnitVector3) -> bool {
        self.edges().all(|(a, b)| orientation(a, b, v) >= 0)
    }

    /// True if some edge of `self` has every vertex of `other` strictly on
    /// its right.
    fn separates(&self, other: &ConvexPolygon) -> bool {
        self.edges().any(|(a, b)| {
            other
                .vertices
                .iter()
                .all(|v| orientation(a, b, v) < 0)
        })
    }
}

impl Region for ConvexPolygon {
    fn contains(&self, v: &UnitVector3) -> bool {
        self.contains_point(v)
    }

    fn relate(&self, polygon: &ConvexPolygon) -> Relationship {
        self.relate_polygon(polygon)
    }
}
