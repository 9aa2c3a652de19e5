//! Integration tests for nf-data.

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use nf_core::{Axis, CoreError, FacilityType, GeoPoint};

    use crate::{DataError, load_facilities_from_readers, load_points_reader};

    const ACUTE_CSV: &str = "\
Name,Trust,latitude,longitude
Derriford Hospital,University Hospitals Plymouth,50.4167,-4.1136
Musgrove Park Hospital,Somerset FT,51.0118,-3.1207
";

    #[test]
    fn reads_required_columns_and_ignores_others() {
        let set = load_points_reader(Cursor::new(ACUTE_CSV), "Acute Hospital").unwrap();
        assert_eq!(set.len(), 2);
        let ids: Vec<_> = set.iter().map(GeoPoint::id).collect();
        assert_eq!(ids, ["Derriford Hospital", "Musgrove Park Hospital"]);
        assert_eq!(set[0].latitude(), 50.4167);
        assert_eq!(set[0].category(), "Acute Hospital");
    }

    #[test]
    fn header_only_is_empty() {
        let set = load_points_reader(Cursor::new("Name,latitude,longitude\n"), "CDC").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn missing_coordinate_fails_fast() {
        let csv = "Name,latitude,longitude\nBroken Site,50.1,\n";
        let err = load_points_reader(Cursor::new(csv), "CDC").unwrap_err();
        match err {
            DataError::Invalid(CoreError::MissingCoordinate { id, axis }) => {
                assert_eq!(id, "Broken Site");
                assert_eq!(axis, Axis::Longitude);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn out_of_range_coordinate_fails() {
        let csv = "Name,latitude,longitude\nSomewhere,150.0,-3.0\n";
        let err = load_points_reader(Cursor::new(csv), "CDC").unwrap_err();
        assert!(matches!(err, DataError::Invalid(CoreError::InvalidCoordinate { .. })));
    }

    #[test]
    fn non_numeric_coordinate_is_csv_error() {
        let csv = "Name,latitude,longitude\nSomewhere,north,-3.0\n";
        let err = load_points_reader(Cursor::new(csv), "CDC").unwrap_err();
        assert!(matches!(err, DataError::Csv(_)));
    }

    #[test]
    fn facilities_are_tagged_and_concatenated() {
        let cdc = "Name,latitude,longitude\nExeter CDC,50.7260,-3.5270\n";
        let gp = "Name,latitude,longitude\nPlymouth GP,50.3755,-4.1427\nTaunton GP,51.0150,-3.1000\n";
        let set = load_facilities_from_readers([
            (FacilityType::Cdc, Cursor::new(cdc)),
            (FacilityType::GpPractice, Cursor::new(gp)),
        ])
        .unwrap();
        let tagged: Vec<_> = set.iter().map(|p| (p.id(), p.category())).collect();
        assert_eq!(
            tagged,
            [
                ("Exeter CDC", "CDC"),
                ("Plymouth GP", "GP Practice"),
                ("Taunton GP", "GP Practice"),
            ]
        );
    }

    #[test]
    fn duplicate_names_across_tables_fail() {
        let a = "Name,latitude,longitude\nShared Site,50.7,-3.5\n";
        let b = "Name,latitude,longitude\nShared Site,50.7,-3.5\n";
        let err = load_facilities_from_readers([
            (FacilityType::Cdc, Cursor::new(a)),
            (FacilityType::CommunityHospital, Cursor::new(b)),
        ])
        .unwrap_err();
        assert!(matches!(err, DataError::Invalid(CoreError::DuplicateId(_))));
    }
}

#[cfg(test)]
mod file_tests {
    use std::fs;

    use tempfile::TempDir;

    use nf_core::FacilityType;

    use crate::{DataError, FacilitySource, load_facilities, load_points_csv};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn loads_from_disk() {
        let dir = tmp();
        let path = dir.path().join("acute.csv");
        fs::write(&path, "Name,latitude,longitude\nRoyal Cornwall,50.2669,-5.0930\n").unwrap();
        let set = load_points_csv(&path, "Acute Hospital").unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tmp();
        let err = load_points_csv(&dir.path().join("nope.csv"), "CDC").unwrap_err();
        assert!(matches!(err, DataError::Io(_)));
    }

    #[test]
    fn load_facilities_in_source_order() {
        let dir = tmp();
        let amb = dir.path().join("ambulance.csv");
        let specialist = dir.path().join("specialist.csv");
        fs::write(&amb, "Name,latitude,longitude\nExeter Ambulance,50.72,-3.48\n").unwrap();
        fs::write(&specialist, "Name,latitude,longitude\nBristol Eye,51.46,-2.60\n").unwrap();

        let set = load_facilities(&[
            FacilitySource { kind: FacilityType::SpecialistHospital, path: specialist },
            FacilitySource { kind: FacilityType::AmbulanceStation, path: amb },
        ])
        .unwrap();
        assert_eq!(set[0].category(), "Specialist Hospital");
        assert_eq!(set[1].category(), "Ambulance Station");
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use nf_core::{GeoPoint, PointSet};
    use nf_graph::NearestFacilityGraphBuilder;
    use nf_layout::LayoutProjector;

    use crate::CsvExporter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn sets() -> (PointSet, PointSet) {
        let hospitals = PointSet::new(vec![
            GeoPoint::new("A", 51.0, -3.0, "Acute Hospital").unwrap(),
        ])
        .unwrap();
        let gps = PointSet::new(vec![
            GeoPoint::new("B", 51.0, -3.1, "GP").unwrap(),
            GeoPoint::new("C", 52.0, -3.0, "GP").unwrap(),
        ])
        .unwrap();
        (hospitals, gps)
    }

    #[test]
    fn csv_files_created_with_headers() {
        let dir = tmp();
        let w = CsvExporter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("edges.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["source_id", "target_id", "category"]);

        let mut rdr = csv::Reader::from_path(dir.path().join("layout.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["id", "x", "y"]);
    }

    #[test]
    fn edges_and_layout_rows() {
        let dir = tmp();
        let (hospitals, gps) = sets();
        let edges = NearestFacilityGraphBuilder::new().build(&hospitals, &gps);
        let layout = LayoutProjector::default().project_sets(&[&hospitals, &gps]);

        let mut w = CsvExporter::new(dir.path()).unwrap();
        w.write_edges(&edges).unwrap();
        w.write_layout(&layout).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("edges.csv")).unwrap();
        let rows: Vec<Vec<String>> = rdr
            .records()
            .map(|r| r.unwrap().iter().map(str::to_owned).collect())
            .collect();
        assert_eq!(rows, [["A", "B", "GP"]]);

        let mut rdr = csv::Reader::from_path(dir.path().join("layout.csv")).unwrap();
        let rows: Vec<(String, f64, f64)> = rdr
            .records()
            .map(|r| {
                let r = r.unwrap();
                (r[0].to_owned(), r[1].parse().unwrap(), r[2].parse().unwrap())
            })
            .collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].0, "A");
        assert_eq!(rows[2], ("C".to_owned(), 1000.0, -1000.0));
    }
}

#[cfg(test)]
mod network_tests {
    use nf_core::{GeoPoint, PointSet};
    use nf_graph::{FacilityNetwork, NearestFacilityGraphBuilder};
    use nf_layout::{Layout, LayoutProjector};

    use crate::NetworkDocument;

    fn network() -> (FacilityNetwork, PointSet, PointSet) {
        let hospitals = PointSet::new(vec![
            GeoPoint::new("H", 50.7, -3.5, "Acute Hospital").unwrap(),
        ])
        .unwrap();
        let facilities = PointSet::new(vec![
            GeoPoint::new("F", 50.8, -3.4, "CDC").unwrap(),
        ])
        .unwrap();
        let edges = NearestFacilityGraphBuilder::new().build(&hospitals, &facilities);
        let net = FacilityNetwork::from_edges(&edges)
            .with_categories(hospitals.iter().chain(facilities.iter()));
        (net, hospitals, facilities)
    }

    #[test]
    fn fixed_positions_from_layout() {
        let (net, hospitals, facilities) = network();
        let layout = LayoutProjector::default().project_sets(&[&hospitals, &facilities]);
        let doc = NetworkDocument::new(&net, &layout);

        assert!(doc.directed);
        assert_eq!(doc.nodes.len(), 2);
        let h = &doc.nodes[0];
        assert_eq!((h.id.as_str(), h.color), ("H", "red"));
        assert_eq!((h.x, h.y), (Some(-1000.0), Some(1000.0)));
        assert!(h.fixed && !h.physics);
        assert_eq!(h.group.as_deref(), Some("Acute Hospital"));
        assert_eq!(doc.nodes[1].color, "blue");
        assert_eq!(doc.nodes[1].group.as_deref(), Some("CDC"));
        assert_eq!(doc.edges[0].label, "CDC");
        assert_eq!(doc.edges[0].arrows, "to");
    }

    #[test]
    fn unplaced_nodes_use_physics() {
        let (net, _, _) = network();
        let doc = NetworkDocument::new(&net, &Layout::default());
        assert!(doc.nodes.iter().all(|n| n.physics && !n.fixed && n.x.is_none()));
    }

    #[test]
    fn untagged_nodes_have_no_group() {
        let (_, hospitals, facilities) = network();
        let edges = NearestFacilityGraphBuilder::new().build(&hospitals, &facilities);
        let doc = NetworkDocument::new(&FacilityNetwork::from_edges(&edges), &Layout::default());
        let v = serde_json::to_value(&doc).unwrap();
        assert!(v["nodes"][0].get("group").is_none());
    }

    #[test]
    fn json_shape() {
        let (net, hospitals, facilities) = network();
        let layout = LayoutProjector::default().project_sets(&[&hospitals, &facilities]);
        let mut buf = Vec::new();
        NetworkDocument::new(&net, &layout).write_to(&mut buf).unwrap();

        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v["nodes"][0]["id"], "H");
        assert_eq!(v["nodes"][0]["group"], "Acute Hospital");
        assert_eq!(v["nodes"][0]["fixed"], true);
        assert_eq!(v["nodes"][1]["x"], 1000.0);
        assert_eq!(v["edges"][0]["from"], "H");
        assert_eq!(v["edges"][0]["to"], "F");

        let doc = NetworkDocument::new(&net, &Layout::default());
        let v = serde_json::to_value(&doc).unwrap();
        assert!(v["nodes"][0].get("x").is_none());
    }
}

#[cfg(test)]
mod config_tests {
    use std::io::Cursor;

    use nf_core::{CategorySource, CoreError, FacilityType, PairingDirection, PipelineConfig};

    use crate::{DataError, load_config, load_config_reader};

    #[test]
    fn reads_json_config() {
        let json = r#"{
            "direction": "FacilitiesToHospitals",
            "category_source": "FromSource",
            "target_range": [-500.0, 500.0],
            "facility_types": ["Cdc", "GpPractice"],
            "num_threads": 2
        }"#;
        let cfg = load_config_reader(Cursor::new(json)).unwrap();
        assert_eq!(
            cfg,
            PipelineConfig {
                direction: PairingDirection::FacilitiesToHospitals,
                category_source: CategorySource::FromSource,
                target_range: (-500.0, 500.0),
                facility_types: vec![FacilityType::Cdc, FacilityType::GpPractice],
                num_threads: Some(2),
            }
        );
    }

    #[test]
    fn invalid_config_is_rejected() {
        let json = r#"{
            "direction": "HospitalsToFacilities",
            "category_source": "FromTarget",
            "target_range": [-1e308, 1e308],
            "facility_types": ["Cdc"],
            "num_threads": null
        }"#;
        let err = load_config_reader(Cursor::new(json)).unwrap_err();
        assert!(matches!(err, DataError::Invalid(CoreError::Config(_))));
    }

    #[test]
    fn malformed_json_is_json_error() {
        let err = load_config_reader(Cursor::new("{ not json")).unwrap_err();
        assert!(matches!(err, DataError::Json(_)));
    }

    #[test]
    fn reads_from_disk() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("pipeline.json");
        let json = serde_json::to_string(&PipelineConfig::default()).unwrap();
        std::fs::write(&path, json).unwrap();
        assert_eq!(load_config(&path).unwrap(), PipelineConfig::default());
    }
}
