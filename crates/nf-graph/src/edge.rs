//! Edge types produced by the graph builder.

use std::collections::BTreeMap;

/// A directed link from a source point to its nearest candidate.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NearestEdge {
    pub source_id: String,
    pub target_id: String,
    /// Facility type label, taken from the endpoint chosen by
    /// [`CategorySource`](nf_core::CategorySource).
    pub category: String,
}

/// Edges in source order, at most one per source.
///
/// Only [`NearestFacilityGraphBuilder`](crate::NearestFacilityGraphBuilder)
/// constructs these, which is what guarantees the one-edge-per-source rule.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeSet {
    edges: Vec<NearestEdge>,
}

impl EdgeSet {
    pub(crate) fn from_vec(edges: Vec<NearestEdge>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<&str> = edges.iter().map(|e| e.source_id.as_str()).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "more than one edge for a source"
        );
        Self { edges }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// `true` when nothing was paired, e.g. because no candidates were
    /// supplied.  Callers should show "nothing to show", not an error.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NearestEdge> {
        self.edges.iter()
    }

    pub fn as_slice(&self) -> &[NearestEdge] {
        &self.edges
    }

    pub fn into_vec(self) -> Vec<NearestEdge> {
        self.edges
    }

    /// The outgoing edge of `source_id`, if it was paired.
    pub fn edge_from(&self, source_id: &str) -> Option<&NearestEdge> {
        self.edges.iter().find(|e| e.source_id == source_id)
    }

    /// Number of edges per category, sorted by category.
    pub fn category_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for e in &self.edges {
            *counts.entry(e.category.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = &'a NearestEdge;
    type IntoIter = std::slice::Iter<'a, NearestEdge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
