//! De-duplicated node-link graph for the interactive renderer.
//!
//! An [`EdgeSet`] names points only by id, and one target may be shared by
//! many sources.  `FacilityNetwork` folds the edges into unique nodes (in
//! first-seen order) and unique `(source, target)` edges, each tagged with
//! the data a renderer needs: a role for colouring and a category label.
//! Node categories are not carried by edges; attach them from the input
//! points with [`FacilityNetwork::with_categories`].

use std::collections::{BTreeMap, HashMap, HashSet};

use nf_core::GeoPoint;

use crate::EdgeSet;

/// The side of the pairing a node was first seen on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeRole {
    Source,
    Target,
}

impl NodeRole {
    /// Node colour used by the network view.
    pub fn color(self) -> &'static str {
        match self {
            NodeRole::Source => "red",
            NodeRole::Target => "blue",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NetworkNode {
    pub id: String,
    pub role: NodeRole,
    pub category: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NetworkEdge {
    pub from: String,
    pub to: String,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacilityNetwork {
    nodes: Vec<NetworkNode>,
    edges: Vec<NetworkEdge>,
}

impl FacilityNetwork {
    /// Fold `edges` into unique nodes and edges.
    ///
    /// A node keeps the role of its first appearance, so an id that is both
    /// a target and, later, a source stays a target.
    pub fn from_edges(edges: &EdgeSet) -> Self {
        let mut net = Self::default();
        let mut node_index: HashMap<&str, usize> = HashMap::new();
        let mut seen_edges: HashSet<(&str, &str)> = HashSet::new();

        for e in edges {
            for (id, role) in [(&e.source_id, NodeRole::Source), (&e.target_id, NodeRole::Target)] {
                if !node_index.contains_key(id.as_str()) {
                    node_index.insert(id.as_str(), net.nodes.len());
                    net.nodes.push(NetworkNode { id: id.clone(), role, category: None });
                }
            }
            if seen_edges.insert((e.source_id.as_str(), e.target_id.as_str())) {
                net.edges.push(NetworkEdge {
                    from:  e.source_id.clone(),
                    to:    e.target_id.clone(),
                    label: e.category.clone(),
                });
            }
        }
        net
    }

    /// Tag each node with the category of the point sharing its id.
    ///
    /// Points that are not nodes are ignored; the first point with a given
    /// id wins.
    pub fn with_categories<'a, I>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = &'a GeoPoint>,
    {
        let tagged: Vec<Option<String>> = {
            let index: HashMap<&str, usize> =
                self.nodes.iter().enumerate().map(|(i, n)| (n.id.as_str(), i)).collect();
            let mut tagged = vec![None; self.nodes.len()];
            for p in points {
                if let Some(&i) = index.get(p.id()) {
                    tagged[i].get_or_insert_with(|| p.category().to_owned());
                }
            }
            tagged
        };
        for (node, category) in self.nodes.iter_mut().zip(tagged) {
            if category.is_some() {
                node.category = category;
            }
        }
        self
    }

    pub fn nodes(&self) -> &[NetworkNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[NetworkEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&NetworkNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Number of sources pointing at each target, keyed (and sorted) by
    /// target id.
    pub fn in_degrees(&self) -> BTreeMap<&str, usize> {
        let mut degrees = BTreeMap::new();
        for e in &self.edges {
            *degrees.entry(e.to.as_str()).or_insert(0) += 1;
        }
        degrees
    }
}
