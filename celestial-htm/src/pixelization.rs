use crate::config::{HtmConfig, DEFAULT_MAX_RANGES};
use crate::finder::{self, Coverage};
use crate::index::check_level;
use crate::{locate, resolve, HtmResult};
use celestial_sphgeom::{ConvexPolygon, RangeSet, Region, UnitVector3};
use std::fmt;

/// The HTM at one fixed subdivision level.
///
/// Holds a validated level and a default interval budget so that callers
/// doing many lookups at the same resolution do not re-check them.
///
/// ```
/// use celestial_htm::HtmPixelization;
/// use celestial_sphgeom::{Angle, Circle, Region, UnitVector3};
///
/// let htm = HtmPixelization::new(10).unwrap();
/// let v = UnitVector3::from_lon_lat(Angle::from_degrees(10.0), Angle::from_degrees(20.0));
/// let i = htm.index(&v);
/// assert!(htm.pixel(i).unwrap().contains(&v));
///
/// let cap = Circle::new(v, Angle::from_degrees(1.0));
/// assert!(htm.envelope(&cap).contains(i));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmPixelization {
    level: u32,
    max_ranges: usize,
}

impl HtmPixelization {
    pub fn new(level: u32) -> HtmResult<Self> {
        Ok(Self {
            level: check_level(level)?,
            max_ranges: DEFAULT_MAX_RANGES,
        })
    }

    pub fn from_config(config: &HtmConfig) -> HtmResult<Self> {
        config.validate()?;
        Ok(Self {
            level: config.level,
            max_ranges: config.max_ranges,
        })
    }

    pub fn with_max_ranges(mut self, max_ranges: usize) -> Self {
        self.max_ranges = max_ranges;
        self
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn max_ranges(&self) -> usize {
        self.max_ranges
    }

    /// Every index at this level: `[8 · 4^level, 16 · 4^level)`.
    pub fn universe(&self) -> RangeSet {
        RangeSet::from_range(8 << (2 * self.level), 16 << (2 * self.level))
    }

    pub fn index(&self, v: &UnitVector3) -> u64 {
        locate::descend(v, self.level)
    }

    /// Trixel `index` as a polygon. The index may be at any level.
    pub fn pixel(&self, index: u64) -> HtmResult<ConvexPolygon> {
        resolve::pixel(index)
    }

    pub fn envelope<R: Region + ?Sized>(&self, region: &R) -> RangeSet {
        self.envelope_within(region, self.max_ranges)
    }

    pub fn envelope_within<R: Region + ?Sized>(&self, region: &R, max_ranges: usize) -> RangeSet {
        finder::search(region, Coverage::Envelope, self.level, max_ranges)
    }

    pub fn interior<R: Region + ?Sized>(&self, region: &R) -> RangeSet {
        self.interior_within(region, self.max_ranges)
    }

    pub fn interior_within<R: Region + ?Sized>(&self, region: &R, max_ranges: usize) -> RangeSet {
        finder::search(region, Coverage::Interior, self.level, max_ranges)
    }
}

impl Default for HtmPixelization {
    fn default() -> Self {
        let config = HtmConfig::default();
        Self {
            level: config.level,
            max_ranges: config.max_ranges,
        }
    }
}

impl fmt::Display for HtmPixelization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTM level {} ({} ranges)", self.level, self.max_ranges)
    }
}
