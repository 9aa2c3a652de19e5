//! south_west — nearest-facility network for the NHS South West region.
//!
//! Links each acute hospital to its nearest selected facility (or, with
//! `--reverse`, each facility to its nearest acute hospital), projects all
//! sites onto a ±1000 canvas, and writes:
//!
//! - `output/south_west/edges.csv`
//! - `output/south_west/layout.csv`
//! - `output/south_west/network.json` (node-link document with fixed positions)
//!
//! `--config <file.json>` loads a `PipelineConfig` instead of the built-in
//! selection.  Set `RUST_LOG=debug` to see the search sizes.

mod data;

use std::io::Cursor;
use std::path::Path;

use anyhow::Result;
use env_logger::{Env, Target};
use log::info;

use nf_core::{FacilityType, PairingDirection, PipelineConfig};
use nf_data::{
    CsvExporter, NetworkDocument, load_config, load_facilities_from_readers, load_points_reader,
};
use nf_graph::{FacilityNetwork, NearestFacilityGraphBuilder};
use nf_layout::{LayoutProjector, TargetRange};

const OUTPUT_DIR: &str = "output/south_west";

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stderr)
        .init();

    // 1. Configuration: `--config <file.json>` replaces the built-in one.
    let args: Vec<String> = std::env::args().collect();
    let config_path = args.iter().position(|a| a == "--config").and_then(|i| args.get(i + 1));
    let mut config = match config_path {
        Some(path) => load_config(Path::new(path))?,
        None => PipelineConfig {
            facility_types: vec![
                FacilityType::Cdc,
                FacilityType::GpPractice,
                FacilityType::AmbulanceStation,
            ],
            ..Default::default()
        },
    };
    let reverse = args.iter().any(|a| a == "--reverse");
    if reverse {
        config.direction = PairingDirection::FacilitiesToHospitals;
    }
    if config_path.is_none() || reverse {
        config.category_source = config.recommended_category_source();
    }
    config.validate()?;

    println!("=== south_west — nearest facility network ===");
    println!("Direction: {:?}", config.direction);
    println!(
        "Facility types: {}",
        config.facility_types.iter().map(|t| t.label()).collect::<Vec<_>>().join(", ")
    );
    println!();

    // 2. Load tables.
    let hospitals = load_points_reader(
        Cursor::new(data::ACUTE_CSV),
        FacilityType::AcuteHospital.label(),
    )?;
    let facilities = load_facilities_from_readers(
        config
            .facility_types
            .iter()
            .filter_map(|&t| data::facility_table(t).map(|csv| (t, Cursor::new(csv)))),
    )?;
    info!("loaded {} acute hospitals, {} facilities", hospitals.len(), facilities.len());

    // 3. Nearest-facility edges.
    let edges = NearestFacilityGraphBuilder::build_from_config(&config, &hospitals, &facilities)?;
    if edges.is_empty() {
        println!("No facilities selected: nothing to show.");
        return Ok(());
    }

    // 4. Render graph and shared-canvas layout.
    let network = FacilityNetwork::from_edges(&edges)
        .with_categories(hospitals.iter().chain(facilities.iter()));
    let range = TargetRange::try_from(config.target_range)?;
    let layout = LayoutProjector::new(range).project_sets(&[&hospitals, &facilities]);

    // 5. Write outputs.
    let out_dir = Path::new(OUTPUT_DIR);
    std::fs::create_dir_all(out_dir)?;
    let mut csv = CsvExporter::new(out_dir)?;
    csv.write_edges(&edges)?;
    csv.write_layout(&layout)?;
    csv.finish()?;
    NetworkDocument::new(&network, &layout).write_to_path(&out_dir.join("network.json"))?;

    // 6. Summary.
    println!(
        "Network: {} nodes, {} edges  →  {}",
        network.node_count(),
        network.edge_count(),
        out_dir.display()
    );
    for (category, n) in edges.category_counts() {
        println!("  {category:<24} {n}");
    }
    println!();

    println!("{:<34} {:<34} {:>8}", "Source", "Nearest", "km");
    println!("{}", "-".repeat(78));
    for e in &edges {
        let (Some(from), Some(to)) = (
            hospitals.get(&e.source_id).or_else(|| facilities.get(&e.source_id)),
            hospitals.get(&e.target_id).or_else(|| facilities.get(&e.target_id)),
        ) else {
            continue;
        };
        println!("{:<34} {:<34} {:>8.1}", e.source_id, e.target_id, from.distance_km(to));
    }

    Ok(())
}
