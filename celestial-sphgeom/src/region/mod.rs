//! Regions on the unit sphere.
//!
//! A [`Region`] answers two questions: does it contain a point, and how does
//! it relate to a convex spherical polygon. Pixelizations only ever ask the
//! second question about their own cells, so implementing [`Region`] is all a
//! new shape needs in order to be rasterized.
//!
//! | Type | Shape |
//! |------|-------|
//! | [`Circle`] | spherical cap: centre plus opening angle |
//! | [`ConvexPolygon`] | counter-clockwise convex polygon |

mod circle;
mod convex_polygon;

pub use circle::Circle;
pub use convex_polygon::ConvexPolygon;

use crate::{Relationship, UnitVector3};

pub trait Region {
    /// Returns true if `v` lies inside or on the boundary of the region.
    fn contains(&self, v: &UnitVector3) -> bool;

    /// Relates the region to `polygon`; see [`Relationship`] for the
    /// direction of the answer. Must never report `Disjoint` or `Contains`
    /// unless that is certain.
    fn relate(&self, polygon: &ConvexPolygon) -> Relationship;

    /// Returns true if the region contains no points at all.
    fn is_empty(&self) -> bool {
        false
    }
}

impl<R: Region + ?Sized> Region for &R {
    fn contains(&self, v: &UnitVector3) -> bool {
        (**self).contains(v)
    }

    fn relate(&self, polygon: &ConvexPolygon) -> Relationship {
        (**self).relate(polygon)
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

impl<R: Region + ?Sized> Region for Box<R> {
    fn contains(&self, v: &UnitVector3) -> bool {
        (**self).contains(v)
    }

    fn relate(&self, polygon: &ConvexPolygon) -> Relationship {
        (**self).relate(polygon)
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}
