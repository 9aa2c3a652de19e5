//! `nf-data` — tabular input and renderer-facing output.
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`loader`]  | `load_points_csv`, `load_facilities` (enriched NHS tables) |
//! | [`config`]  | `load_config` — JSON `PipelineConfig`, validated           |
//! | [`csv`]     | `CsvExporter` — `edges.csv`, `layout.csv`                  |
//! | [`network`] | `NetworkDocument` — node-link JSON with fixed positions    |
//! | [`error`]   | `DataError`, `DataResult`                                  |
//!
//! # Usage
//!
//! ```rust,ignore
//! use nf_data::{CsvExporter, NetworkDocument, load_points_csv};
//!
//! let hospitals = load_points_csv(&acute_path, "Acute Hospital")?;
//! let mut out = CsvExporter::new(Path::new("./output"))?;
//! out.write_edges(&edges)?;
//! out.write_layout(&layout)?;
//! out.finish()?;
//! NetworkDocument::new(&network, &layout).write_to_path(Path::new("./output/network.json"))?;
//! ```

pub mod config;
pub mod csv;
pub mod error;
pub mod loader;
pub mod network;

#[cfg(test)]
mod tests;

pub use config::{load_config, load_config_reader};
pub use csv::CsvExporter;
pub use error::{DataError, DataResult};
pub use loader::{FacilitySource, load_facilities, load_facilities_from_readers, load_points_csv, load_points_reader};
pub use network::{EdgeDoc, NetworkDocument, NodeDoc};
