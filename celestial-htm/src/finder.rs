//! Region rasterization.
//!
//! A region is turned into index intervals by a depth-first walk of the mesh,
//! roots 0 to 7 and then children 0 to 3, asking the region how it relates to
//! each trixel:
//!
//! | Relationship | Action |
//! |--------------|--------|
//! | `Disjoint` | prune |
//! | `Contains` | add every descendant at the target level |
//! | `Intersects`, `Within` | split further, or at the working level add (envelope) or skip (interior) |
//!
//! The working level starts at the target level. Whenever more than
//! `max_ranges` intervals have accumulated, it drops by one and the intervals
//! found so far are coarsened to the new alignment: widened for an envelope,
//! narrowed for an interior. When even level 0 is too fine, a final pass
//! closes gaps (envelope) or drops the shortest intervals (interior), so the
//! result never exceeds the budget and always satisfies
//!
//! ```text
//! interior ⊆ pixels touching the region ⊆ envelope
//! ```

use crate::index::check_level;
use crate::mesh::{self, Triangle, ROOT_VERTICES};
use crate::HtmResult;
use celestial_sphgeom::{ConvexPolygon, RangeSet, Region, Relationship};

/// Which side of the region boundary a search errs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Coverage {
    /// Every trixel that may intersect the region. A superset.
    Envelope,
    /// Only trixels certainly inside the region. A subset.
    Interior,
}

/// Level-`level` trixels that may intersect `region`, as at most
/// `max(max_ranges, 1)` intervals.
pub fn envelope<R: Region + ?Sized>(
    region: &R,
    level: u32,
    max_ranges: usize,
) -> HtmResult<RangeSet> {
    find(region, Coverage::Envelope, level, max_ranges)
}

/// Level-`level` trixels certainly inside `region`, as at most `max_ranges`
/// intervals.
pub fn interior<R: Region + ?Sized>(
    region: &R,
    level: u32,
    max_ranges: usize,
) -> HtmResult<RangeSet> {
    find(region, Coverage::Interior, level, max_ranges)
}

pub fn find<R: Region + ?Sized>(
    region: &R,
    coverage: Coverage,
    level: u32,
    max_ranges: usize,
) -> HtmResult<RangeSet> {
    check_level(level)?;
    Ok(search(region, coverage, level, max_ranges))
}

/// [`find`] for a level already known to be valid.
pub(crate) fn search<R: Region + ?Sized>(
    region: &R,
    coverage: Coverage,
    level: u32,
    max_ranges: usize,
) -> RangeSet {
    PixelFinder::new(region, coverage, level, max_ranges).run()
}

struct PixelFinder<'a, R: Region + ?Sized> {
    region: &'a R,
    coverage: Coverage,
    level: u32,
    working_level: u32,
    max_ranges: usize,
    ranges: RangeSet,
    visited: u64,
}

impl<'a, R: Region + ?Sized> PixelFinder<'a, R> {
    fn new(region: &'a R, coverage: Coverage, level: u32, max_ranges: usize) -> Self {
        Self {
            region,
            coverage,
            level,
            working_level: level,
            max_ranges,
            ranges: RangeSet::new(),
            visited: 0,
        }
    }

    fn run(mut self) -> RangeSet {
        if !self.region.is_empty() {
            for (root, triangle) in ROOT_VERTICES.iter().enumerate() {
                self.visit(triangle, root as u64 + 8, 0);
            }
        }
        match self.coverage {
            Coverage::Envelope => self.ranges.close_gaps(self.max_ranges),
            Coverage::Interior => self.ranges.drop_shortest(self.max_ranges),
        }
        tracing::trace!(
            coverage = ?self.coverage,
            level = self.level,
            working_level = self.working_level,
            visited = self.visited,
            ranges = self.ranges.len(),
            "Pixel search finished"
        );
        self.ranges
    }

    fn visit(&mut self, triangle: &Triangle, index: u64, level: u32) {
        self.visited += 1;
        match self.region.relate(&ConvexPolygon::from_triangle(*triangle)) {
            Relationship::Disjoint => {}
            Relationship::Contains => self.emit(index, level),
            Relationship::Intersects | Relationship::Within => {
                let points = mesh::split(triangle);
                for c in 0..4 {
                    // The working level can drop while earlier children are
                    // searched; past it a partial trixel is a leaf.
                    if level >= self.working_level {
                        if self.coverage == Coverage::Envelope {
                            self.emit(index, level);
                        }
                        return;
                    }
                    let child = mesh::child_triangle(&points, c);
                    self.visit(&child, (index << 2) | c as u64, level + 1);
                }
            }
        }
    }

    /// Adds the target-level descendants of `index`, or of its ancestor at
    /// the working level when `index` is deeper than that.
    fn emit(&mut self, index: u64, level: u32) {
        let (index, level) = if level > self.working_level {
            if self.coverage == Coverage::Interior {
                return;
            }
            (
                index >> (2 * (level - self.working_level)),
                self.working_level,
            )
        } else {
            (index, level)
        };
        let shift = 2 * (self.level - level);
        self.ranges.insert(index << shift, (index + 1) << shift);
        if self.ranges.len() > self.max_ranges {
            self.coarsen();
        }
    }

    fn coarsen(&mut self) {
        while self.ranges.len() > self.max_ranges && self.working_level > 0 {
            self.working_level -= 1;
            let bits = 2 * (self.level - self.working_level);
            match self.coverage {
                Coverage::Envelope => self.ranges.simplify(bits),
                Coverage::Interior => self.ranges.narrow(bits),
            }
            tracing::debug!(
                coverage = ?self.coverage,
                level = self.level,
                working_level = self.working_level,
                ranges = self.ranges.len(),
                max_ranges = self.max_ranges,
                "Coarsened pixel search"
            );
        }
    }
}
