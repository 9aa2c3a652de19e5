//! Node-link JSON document for the interactive network view.
//!
//! The shape follows vis-network's `{ nodes, edges }` data model.  Nodes
//! with a layout position are emitted with `x`/`y`, `fixed: true` and
//! `physics: false`, so the renderer places them exactly where the projector
//! put them; nodes without one are left to the force-directed solver.  A
//! node's category, when known, becomes its vis-network `group`, which the
//! renderer styles (colour, size) per category.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use nf_graph::FacilityNetwork;
use nf_layout::Layout;

use crate::DataResult;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeDoc {
    pub id:      String,
    pub label:   String,
    pub color:   &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group:   Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x:       Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y:       Option<f64>,
    pub fixed:   bool,
    pub physics: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeDoc {
    pub from:   String,
    pub to:     String,
    pub label:  String,
    pub arrows: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NetworkDocument {
    pub directed: bool,
    pub nodes:    Vec<NodeDoc>,
    pub edges:    Vec<EdgeDoc>,
}

impl NetworkDocument {
    pub fn new(network: &FacilityNetwork, layout: &Layout) -> Self {
        let nodes = network
            .nodes()
            .iter()
            .map(|n| {
                let pos = layout.get(&n.id);
                NodeDoc {
                    id:      n.id.clone(),
                    label:   n.id.clone(),
                    color:   n.role.color(),
                    group:   n.category.clone(),
                    x:       pos.map(|p| p.x),
                    y:       pos.map(|p| p.y),
                    fixed:   pos.is_some(),
                    physics: pos.is_none(),
                }
            })
            .collect();
        let edges = network
            .edges()
            .iter()
            .map(|e| EdgeDoc {
                from:   e.from.clone(),
                to:     e.to.clone(),
                label:  e.label.clone(),
                arrows: "to",
            })
            .collect();
        Self { directed: true, nodes, edges }
    }

    pub fn write_to<W: Write>(&self, writer: W) -> DataResult<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn write_to_path(&self, path: &Path) -> DataResult<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }
}
