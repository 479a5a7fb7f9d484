//! Hierarchical Triangular Mesh (HTM) pixelization of the unit sphere.
//!
//! The sphere is split into the eight faces of an octahedron, and every
//! spherical triangle ("trixel") is recursively split into four by joining
//! its edge midpoints. Each trixel gets a 64-bit index whose bits record the
//! path from its root, so that all descendants of a trixel at a finer level
//! form one contiguous range of indices.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`index`] | index bit layout, levels, names, parent/child arithmetic |
//! | [`mesh`] | root trixels and subdivision |
//! | [`locate`] | point → index |
//! | [`resolve`] | index → trixel vertices |
//! | [`finder`] | region → envelope / interior index ranges |
//! | [`pixelization`] | [`HtmPixelization`], a fixed-level facade |
//! | [`config`] | [`HtmConfig`] |
//!
//! # Example
//!
//! ```
//! use celestial_htm::{envelope, interior, locate, resolve, to_string};
//! use celestial_sphgeom::{Angle, Circle, Region, UnitVector3};
//!
//! let v = UnitVector3::from_lon_lat(Angle::from_degrees(45.0), Angle::from_degrees(30.0));
//! let i = locate(&v, 8).unwrap();
//! assert_eq!(to_string(i).unwrap().len(), 10);
//!
//! let cap = Circle::new(v, Angle::from_degrees(0.5));
//! let outer = envelope(&cap, 8, 16).unwrap();
//! let inner = interior(&cap, 8, 16).unwrap();
//! assert!(outer.contains(i));
//! assert!(inner.is_subset_of(&outer));
//! # let _ = resolve(i).unwrap();
//! ```
//!
//! # Features
//!
//! - **`serde`**: `Serialize`/`Deserialize` for [`HtmConfig`] and
//!   [`Coverage`].

pub mod config;
pub mod error;
pub mod finder;
pub mod index;
pub mod locate;
pub mod mesh;
pub mod pixelization;
pub mod resolve;

/// Deepest subdivision level. Level-24 indices use 52 bits.
pub const MAX_LEVEL: u32 = 24;

pub use config::HtmConfig;
pub use error::{HtmError, HtmResult};
pub use finder::{envelope, interior, Coverage};
pub use index::{descendant_range, level, parse, to_string};
pub use locate::locate;
pub use mesh::Triangle;
pub use pixelization::HtmPixelization;
pub use resolve::{center, pixel, resolve};
