//! Fluent builder for nearest-facility edge sets.

use log::{debug, info};

use nf_core::{CategorySource, GeoPoint, PairingDirection, PipelineConfig, PointSet};
use nf_spatial::{LinearScan, NearestOracle, RTreeOracle};

use crate::{EdgeSet, GraphResult, NearestEdge};

/// Pairs every source point with its nearest candidate.
///
/// # Options (have defaults)
///
/// | Method                   | Default                       |
/// |--------------------------|-------------------------------|
/// | `.category_source(c)`    | `CategorySource::FromTarget`  |
/// | `.parallel(b)`           | `false` (feature `parallel`)  |
/// | `.num_threads(n)`        | global pool (feature `parallel`) |
///
/// # Example
///
/// ```
/// use nf_core::{CategorySource, GeoPoint, PointSet};
/// use nf_graph::NearestFacilityGraphBuilder;
///
/// let hospitals = PointSet::new(vec![
///     GeoPoint::new("A", 51.0, -3.0, "Acute Hospital").unwrap(),
/// ]).unwrap();
/// let gps = PointSet::new(vec![
///     GeoPoint::new("B", 51.0, -3.1, "GP").unwrap(),
///     GeoPoint::new("C", 52.0, -3.0, "GP").unwrap(),
/// ]).unwrap();
///
/// let edges = NearestFacilityGraphBuilder::new()
///     .category_source(CategorySource::FromTarget)
///     .build(&hospitals, &gps);
/// assert_eq!(edges.len(), 1);
/// assert_eq!(edges.as_slice()[0].target_id, "B");
/// ```
#[derive(Clone, Debug, Default)]
pub struct NearestFacilityGraphBuilder {
    category_source: CategorySource,
    #[cfg(feature = "parallel")]
    parallel: bool,
    #[cfg(feature = "parallel")]
    num_threads: Option<usize>,
}

impl NearestFacilityGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preset from a pipeline configuration.
    pub fn from_config(config: &PipelineConfig) -> Self {
        let builder = Self::new().category_source(config.category_source);
        #[cfg(feature = "parallel")]
        let builder = builder.parallel(true).num_threads(config.num_threads);
        builder
    }

    /// Which endpoint's category is copied onto each edge.
    pub fn category_source(mut self, source: CategorySource) -> Self {
        self.category_source = source;
        self
    }

    /// Run the source loop on Rayon.  Results keep source order.
    #[cfg(feature = "parallel")]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Use a dedicated pool of `n` workers instead of the global pool.
    #[cfg(feature = "parallel")]
    pub fn num_threads(mut self, n: Option<usize>) -> Self {
        self.num_threads = n;
        self
    }

    // ── Entry points ──────────────────────────────────────────────────────

    /// Pair each source with its nearest candidate using a linear scan.
    ///
    /// Time complexity: O(|sources| · |candidates|).
    pub fn build(&self, sources: &PointSet, candidates: &PointSet) -> EdgeSet {
        self.build_with(sources, &LinearScan::new(candidates))
    }

    /// Like [`build`](Self::build) but searches candidates through an
    /// R-tree.  Same output; faster once candidates run into the thousands.
    pub fn build_indexed(&self, sources: &PointSet, candidates: &PointSet) -> EdgeSet {
        self.build_with(sources, &RTreeOracle::new(candidates))
    }

    /// Pair each source with the candidate `oracle` reports as nearest.
    pub fn build_with<O: NearestOracle + ?Sized>(&self, sources: &PointSet, oracle: &O) -> EdgeSet {
        let candidates = oracle.candidates();
        if candidates.is_empty() {
            info!("no candidates supplied: no edges produced for {} sources", sources.len());
            return EdgeSet::default();
        }
        debug!(
            "nearest-facility search: {} sources x {} candidates",
            sources.len(),
            candidates.len()
        );

        let edges = self.pair_all(sources, oracle);
        debug!("produced {} edges", edges.len());
        EdgeSet::from_vec(edges)
    }

    /// Run the configured pairing direction over hospitals and facilities.
    ///
    /// # Errors
    /// Configuration errors from [`PipelineConfig::validate`], or a Rayon
    /// pool that cannot be created (feature `parallel`).
    pub fn build_from_config(
        config:     &PipelineConfig,
        hospitals:  &PointSet,
        facilities: &PointSet,
    ) -> GraphResult<EdgeSet> {
        config.validate()?;
        let builder = Self::from_config(config);
        let (sources, candidates) = match config.direction {
            PairingDirection::HospitalsToFacilities => (hospitals, facilities),
            PairingDirection::FacilitiesToHospitals => (facilities, hospitals),
        };
        builder.try_build(sources, candidates)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    #[cfg(not(feature = "parallel"))]
    fn try_build(&self, sources: &PointSet, candidates: &PointSet) -> GraphResult<EdgeSet> {
        Ok(self.build(sources, candidates))
    }

    #[cfg(feature = "parallel")]
    fn try_build(&self, sources: &PointSet, candidates: &PointSet) -> GraphResult<EdgeSet> {
        match self.num_threads {
            Some(n) if self.parallel => {
                let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
                Ok(pool.install(|| self.build(sources, candidates)))
            }
            _ => Ok(self.build(sources, candidates)),
        }
    }

    fn edge_for<O: NearestOracle + ?Sized>(&self, source: &GeoPoint, oracle: &O) -> Option<NearestEdge> {
        let target = oracle.nearest(source)?;
        let category = match self.category_source {
            CategorySource::FromSource => source.category(),
            CategorySource::FromTarget => target.category(),
        };
        Some(NearestEdge {
            source_id: source.id().to_owned(),
            target_id: target.id().to_owned(),
            category:  category.to_owned(),
        })
    }

    #[cfg(not(feature = "parallel"))]
    fn pair_all<O: NearestOracle + ?Sized>(&self, sources: &PointSet, oracle: &O) -> Vec<NearestEdge> {
        sources.iter().filter_map(|s| self.edge_for(s, oracle)).collect()
    }

    #[cfg(feature = "parallel")]
    fn pair_all<O: NearestOracle + ?Sized>(&self, sources: &PointSet, oracle: &O) -> Vec<NearestEdge> {
        use rayon::prelude::*;

        if !self.parallel {
            return sources.iter().filter_map(|s| self.edge_for(s, oracle)).collect();
        }
        // Rayon's `collect` keeps input order, so the edge set matches the
        // sequential result exactly.
        sources
            .as_slice()
            .par_iter()
            .filter_map(|s| self.edge_for(s, oracle))
            .collect()
    }
}
