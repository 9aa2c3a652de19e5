//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `edges.csv`  — `source_id,target_id,category`
//! - `layout.csv` — `id,x,y`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use nf_graph::EdgeSet;
use nf_layout::Layout;

use crate::DataResult;

/// Writes the edge set and layout to two CSV files.
pub struct CsvExporter {
    edges:  Writer<File>,
    layout: Writer<File>,
}

impl CsvExporter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> DataResult<Self> {
        let mut edges = Writer::from_path(dir.join("edges.csv"))?;
        edges.write_record(["source_id", "target_id", "category"])?;

        let mut layout = Writer::from_path(dir.join("layout.csv"))?;
        layout.write_record(["id", "x", "y"])?;

        Ok(Self { edges, layout })
    }

    pub fn write_edges(&mut self, edges: &EdgeSet) -> DataResult<()> {
        for e in edges {
            self.edges.write_record([&e.source_id, &e.target_id, &e.category])?;
        }
        Ok(())
    }

    pub fn write_layout(&mut self, layout: &Layout) -> DataResult<()> {
        for p in layout {
            self.layout.write_record([p.id.clone(), p.x.to_string(), p.y.to_string()])?;
        }
        Ok(())
    }

    /// Flush both files and close the exporter.
    ///
    /// The exporter is consumed, so nothing can be written afterwards:
    ///
    /// ```compile_fail
    /// # fn run(dir: &std::path::Path, edges: &nf_graph::EdgeSet) -> nf_data::DataResult<()> {
    /// let mut out = nf_data::CsvExporter::new(dir)?;
    /// out.finish()?;
    /// out.write_edges(edges)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn finish(mut self) -> DataResult<()> {
        self.edges.flush()?;
        self.layout.flush()?;
        Ok(())
    }
}
