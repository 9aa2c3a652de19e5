//! Unit tests for nf-spatial.
//!
//! Coordinates are real South West England sites, so expected distances can
//! be sanity-checked against a map.

#[cfg(test)]
mod helpers {
    use nf_core::{GeoPoint, PointSet};

    pub fn pt(id: &str, lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(id, lat, lon, "GP").unwrap()
    }

    pub fn set(points: Vec<GeoPoint>) -> PointSet {
        PointSet::new(points).unwrap()
    }
}

// ── distance ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod distance {
    use super::helpers::pt;
    use crate::distance;

    #[test]
    fn identity_is_zero() {
        let a = pt("a", 50.4167, -4.1136);
        assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn symmetric_and_bounded() {
        let coords = [
            (50.7167, -3.5056),
            (51.4585, -2.5967),
            (-33.86, 151.21),
            (89.9, 0.0),
            (-89.9, 179.9),
        ];
        let bound = 2.0 * std::f64::consts::PI * nf_core::EARTH_RADIUS_KM;
        for (i, &(la, lo)) in coords.iter().enumerate() {
            for &(lb, lob) in &coords[i..] {
                let a = pt("a", la, lo);
                let b = pt("b", lb, lob);
                let d = distance(&a, &b);
                assert_eq!(d, distance(&b, &a));
                assert!(d >= 0.0 && d <= bound, "{d}");
            }
        }
    }

    #[test]
    fn exeter_to_bristol() {
        // Royal Devon & Exeter to Bristol Royal Infirmary: ~104 km
        let exeter = pt("exeter", 50.7167, -3.5056);
        let bristol = pt("bristol", 51.4585, -2.5967);
        let d = distance(&exeter, &bristol);
        assert!((d - 104.1).abs() < 0.5, "got {d}");
    }
}

// ── nearest (linear) ──────────────────────────────────────────────────────────

#[cfg(test)]
mod nearest {
    use super::helpers::{pt, set};
    use crate::{LinearScan, NearestOracle, nearest};
    use nf_core::PointSet;

    #[test]
    fn empty_candidates_gives_none() {
        let a = pt("A", 51.0, -3.0);
        assert!(nearest(&a, &PointSet::empty()).is_none());
        assert!(LinearScan::new(&PointSet::empty()).nearest(&a).is_none());
    }

    #[test]
    fn picks_closest() {
        let a = pt("A", 51.0, -3.0);
        let candidates = set(vec![pt("B", 51.0, -3.1), pt("C", 52.0, -3.0)]);
        let got = nearest(&a, &candidates).unwrap();
        assert_eq!(got.id(), "B");
        assert!(a.distance_km(got) < 8.0);
    }

    #[test]
    fn tie_goes_to_first() {
        let a = pt("A", 51.0, -3.0);
        // East and west at identical offsets: mirror images, exact tie.
        let candidates = set(vec![pt("west", 51.0, -3.2), pt("east", 51.0, -2.8)]);
        assert_eq!(nearest(&a, &candidates).unwrap().id(), "west");

        let swapped = set(vec![pt("east", 51.0, -2.8), pt("west", 51.0, -3.2)]);
        assert_eq!(nearest(&a, &swapped).unwrap().id(), "east");
    }

    #[test]
    fn duplicate_coordinates_tie_goes_to_first() {
        let a = pt("A", 50.0, -4.0);
        let candidates = set(vec![
            pt("far", 52.0, -1.0),
            pt("twin_1", 50.1, -4.0),
            pt("twin_2", 50.1, -4.0),
        ]);
        assert_eq!(LinearScan::new(&candidates).nearest_index(&a), Some(1));
    }
}

// ── R-tree oracle ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod rtree {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::helpers::{pt, set};
    use crate::{LinearScan, NearestOracle, RTreeOracle};
    use nf_core::PointSet;

    fn random_set(rng: &mut SmallRng, prefix: &str, n: usize) -> PointSet {
        // Roughly the South West NHS region bounding box.
        set((0..n)
            .map(|i| {
                let lat = rng.gen_range(49.9..52.2);
                let lon = rng.gen_range(-6.4..-1.5);
                pt(&format!("{prefix}{i}"), lat, lon)
            })
            .collect())
    }

    #[test]
    fn empty_tree_gives_none() {
        let empty = PointSet::empty();
        let oracle = RTreeOracle::new(&empty);
        assert!(oracle.nearest(&pt("A", 51.0, -3.0)).is_none());
    }

    #[test]
    fn agrees_with_linear_scan() {
        let mut rng = SmallRng::seed_from_u64(20_250_411);
        let candidates = random_set(&mut rng, "f", 400);
        let queries = random_set(&mut rng, "q", 200);

        let linear = LinearScan::new(&candidates);
        let tree = RTreeOracle::new(&candidates);
        for q in &queries {
            assert_eq!(linear.nearest_index(q), tree.nearest_index(q), "query {q}");
        }
    }

    #[test]
    fn ties_match_linear_scan() {
        let a = pt("A", 51.0, -3.0);
        let candidates = set(vec![
            pt("far", 51.9, -3.0),
            pt("west", 51.0, -3.2),
            pt("east", 51.0, -2.8),
            pt("twin", 51.0, -3.2),
        ]);
        let tree = RTreeOracle::new(&candidates);
        assert_eq!(tree.nearest_index(&a), LinearScan::new(&candidates).nearest_index(&a));
        assert_eq!(tree.nearest(&a).unwrap().id(), "west");
    }

    #[test]
    fn across_the_antimeridian() {
        let q = pt("q", 0.0, 179.9);
        let candidates = set(vec![pt("wrap", 0.0, -179.9), pt("same_side", 0.0, 179.0)]);
        let tree = RTreeOracle::new(&candidates);
        assert_eq!(tree.nearest(&q).unwrap().id(), "wrap");
        assert_eq!(LinearScan::new(&candidates).nearest(&q).unwrap().id(), "wrap");
    }
}
