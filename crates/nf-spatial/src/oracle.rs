//! Distance oracle and the nearest-candidate seam.
//!
//! # Pluggability
//!
//! `nf-graph` queries candidates through the [`NearestOracle`] trait, so a
//! spatial index can replace the naive scan without touching the builder.
//! The default [`LinearScan`] is O(m) per query and sufficient for the
//! tens-to-hundreds of facilities in a single NHS region.

use nf_core::{GeoPoint, PointSet};

/// Great-circle distance between `a` and `b` in kilometres.
#[inline]
pub fn distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    a.distance_km(b)
}

/// Nearest candidate to `point` by a full scan.
///
/// Returns `None` for an empty candidate set.  Among equidistant candidates
/// the first in `candidates` order wins.
pub fn nearest<'a>(point: &GeoPoint, candidates: &'a PointSet) -> Option<&'a GeoPoint> {
    scan_min(point, candidates.as_slice()).map(|i| &candidates[i])
}

/// Index of the first minimum-distance candidate.
fn scan_min(point: &GeoPoint, candidates: &[GeoPoint]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, c) in candidates.iter().enumerate() {
        let d = point.distance_km(c);
        // Strict `<` keeps the earliest candidate on exact ties.
        if best.is_none_or(|(_, b)| d < b) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

// ── NearestOracle trait ───────────────────────────────────────────────────────

/// Answers "which candidate is closest to this point?" for a fixed set.
///
/// # Contract
///
/// Implementations must return the same index as a linear scan: minimum
/// haversine distance, lowest index on exact ties, `None` iff the candidate
/// set is empty.
///
/// # Thread safety
///
/// `Send + Sync` so one oracle can be shared across Rayon workers when the
/// graph builder runs its source loop in parallel.
pub trait NearestOracle: Send + Sync {
    /// The candidate set this oracle searches.
    fn candidates(&self) -> &PointSet;

    /// Position in [`candidates`](Self::candidates) of the nearest candidate.
    fn nearest_index(&self, point: &GeoPoint) -> Option<usize>;

    fn nearest(&self, point: &GeoPoint) -> Option<&GeoPoint> {
        self.nearest_index(point).map(|i| &self.candidates()[i])
    }
}

// ── LinearScan ────────────────────────────────────────────────────────────────

/// Reference oracle: compares `point` against every candidate.
#[derive(Clone, Copy, Debug)]
pub struct LinearScan<'a> {
    candidates: &'a PointSet,
}

impl<'a> LinearScan<'a> {
    pub fn new(candidates: &'a PointSet) -> Self {
        Self { candidates }
    }
}

impl NearestOracle for LinearScan<'_> {
    fn candidates(&self) -> &PointSet {
        self.candidates
    }

    fn nearest_index(&self, point: &GeoPoint) -> Option<usize> {
        scan_min(point, self.candidates.as_slice())
    }
}
