//! CSV facility loader.
//!
//! # CSV format
//!
//! The enriched NHS facility tables carry many columns; only three are read.
//! Column order does not matter and extra columns are ignored.
//!
//! ```csv
//! Name,latitude,longitude,Postcode
//! Derriford Hospital,50.4167,-4.1136,PL6 8DH
//! Musgrove Park Hospital,51.0118,-3.1207,TA1 5DA
//! ```
//!
//! An empty `latitude` or `longitude` cell fails the load with
//! [`CoreError::MissingCoordinate`](nf_core::CoreError::MissingCoordinate);
//! rows are never dropped silently.

use std::io::Read;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use nf_core::{FacilityType, GeoPoint, PointSet};

use crate::DataResult;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FacilityRecord {
    #[serde(rename = "Name")]
    name:      String,
    latitude:  Option<f64>,
    longitude: Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// One facility table and the type its rows are tagged with.
#[derive(Clone, Debug)]
pub struct FacilitySource {
    pub kind: FacilityType,
    pub path: PathBuf,
}

/// Load a point table, tagging every row with `category`.
pub fn load_points_csv(path: &Path, category: &str) -> DataResult<PointSet> {
    let file = std::fs::File::open(path)?;
    let set = load_points_reader(file, category)?;
    debug!("loaded {} points from {}", set.len(), path.display());
    Ok(set)
}

/// Like [`load_points_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded tables.
pub fn load_points_reader<R: Read>(reader: R, category: &str) -> DataResult<PointSet> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut points = Vec::new();
    for result in csv_reader.deserialize::<FacilityRecord>() {
        let row = result?;
        points.push(GeoPoint::from_parts(row.name, row.latitude, row.longitude, category)?);
    }
    Ok(PointSet::new(points)?)
}

/// Load several facility tables into one candidate set, in `sources` order,
/// each row tagged with its table's [`FacilityType`] label.
pub fn load_facilities(sources: &[FacilitySource]) -> DataResult<PointSet> {
    let mut all = PointSet::empty();
    for src in sources {
        all = all.concat(load_points_csv(&src.path, src.kind.label())?)?;
    }
    Ok(all)
}

/// Like [`load_facilities`] over in-memory readers.
pub fn load_facilities_from_readers<R, I>(inputs: I) -> DataResult<PointSet>
where
    R: Read,
    I: IntoIterator<Item = (FacilityType, R)>,
{
    let mut all = PointSet::empty();
    for (kind, reader) in inputs {
        all = all.concat(load_points_reader(reader, kind.label())?)?;
    }
    Ok(all)
}
