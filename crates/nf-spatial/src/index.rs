//! R-tree backed nearest-candidate oracle.
//!
//! # Geometry
//!
//! Candidates are stored as unit vectors on the sphere.  Straight-line
//! (chord) distance between unit vectors is a monotone function of the
//! great-circle angle:
//!
//! ```text
//! chord = 2 · sin(θ / 2),   θ = d_km / R
//! ```
//!
//! so the R-tree's Euclidean nearest-neighbour order is the haversine order
//! up to rounding.  Every visited candidate is re-scored with the exact
//! haversine, and the walk continues past the first hit until the chord
//! lower bound clears the best haversine by [`CHORD_SLACK`].  That makes
//! results (ties included) identical to [`LinearScan`](crate::LinearScan).

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use nf_core::{EARTH_RADIUS_KM, GeoPoint, PointSet};

use crate::oracle::NearestOracle;

/// Tolerance on the unit sphere (≈ 6 µm on the ground) absorbing rounding
/// differences between chord and haversine distances.
const CHORD_SLACK: f64 = 1e-9;

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct CandidateEntry {
    point: [f64; 3],
    index: usize,
}

impl RTreeObject for CandidateEntry {
    type Envelope = AABB<[f64; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for CandidateEntry {
    /// Squared chord distance on the unit sphere.
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

fn unit_vector(p: &GeoPoint) -> [f64; 3] {
    let lat = p.latitude().to_radians();
    let lon = p.longitude().to_radians();
    [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
}

fn km_to_chord(d_km: f64) -> f64 {
    2.0 * (d_km / (2.0 * EARTH_RADIUS_KM)).sin()
}

// ── RTreeOracle ───────────────────────────────────────────────────────────────

/// Nearest-candidate oracle backed by an `rstar` R-tree.
///
/// Construction is O(m log m) (bulk load); each query visits only the
/// candidates near the chord-distance frontier.  Worth it once the
/// candidate set reaches the thousands (e.g. national GP practice tables).
pub struct RTreeOracle<'a> {
    candidates: &'a PointSet,
    tree: RTree<CandidateEntry>,
}

impl<'a> RTreeOracle<'a> {
    pub fn new(candidates: &'a PointSet) -> Self {
        let entries: Vec<CandidateEntry> = candidates
            .iter()
            .enumerate()
            .map(|(index, p)| CandidateEntry { point: unit_vector(p), index })
            .collect();
        Self { candidates, tree: RTree::bulk_load(entries) }
    }
}

impl NearestOracle for RTreeOracle<'_> {
    fn candidates(&self) -> &PointSet {
        self.candidates
    }

    fn nearest_index(&self, point: &GeoPoint) -> Option<usize> {
        let query = unit_vector(point);
        let mut best: Option<(usize, f64)> = None;
        let mut cutoff_2 = f64::INFINITY;

        for (entry, chord_2) in self.tree.nearest_neighbor_iter_with_distance_2(&query) {
            if chord_2 > cutoff_2 {
                break;
            }
            let d = point.distance_km(&self.candidates[entry.index]);
            let better = match best {
                None => true,
                Some((bi, bd)) => d < bd || (d == bd && entry.index < bi),
            };
            if better {
                best = Some((entry.index, d));
                let cutoff = km_to_chord(d) + CHORD_SLACK;
                cutoff_2 = cutoff * cutoff;
            }
        }
        best.map(|(i, _)| i)
    }
}
