//! Spherical geometry primitives for sky pixelizations.
//!
//! The building blocks a hierarchical pixelization consumes: points on the
//! unit sphere, an exact orientation predicate, regions that can be related
//! to convex spherical polygons, and a compact interval set for pixel
//! indices.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`vector`] | [`Vector3`], [`UnitVector3`], spherical midpoints, angular separation |
//! | [`angle`] | [`Angle`] value type |
//! | [`orientation`] | exact sign of `a · (b × c)` |
//! | [`relationship`] | [`Relationship`] between two regions |
//! | [`region`] | the [`Region`] trait, [`Circle`], [`ConvexPolygon`] |
//! | [`range_set`] | [`RangeSet`] of half-open `u64` intervals |
//!
//! # Features
//!
//! - **`serde`**: `Serialize`/`Deserialize` for the value types.

pub mod angle;
pub mod constants;
pub mod error;
pub mod orientation;
pub mod range_set;
pub mod region;
pub mod relationship;
pub mod vector;

pub use angle::Angle;
pub use error::{SphgeomError, SphgeomResult};
pub use orientation::orientation;
pub use range_set::RangeSet;
pub use region::{Circle, ConvexPolygon, Region};
pub use relationship::Relationship;
pub use vector::{UnitVector3, Vector3};
