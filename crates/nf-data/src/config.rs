//! Pipeline configuration files.
//!
//! A config file is the JSON form of [`PipelineConfig`]; the loaded value is
//! validated before it is returned.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;

use nf_core::PipelineConfig;

use crate::DataResult;

pub fn load_config(path: &Path) -> DataResult<PipelineConfig> {
    debug!("reading pipeline config from {}", path.display());
    load_config_reader(BufReader::new(File::open(path)?))
}

pub fn load_config_reader<R: Read>(reader: R) -> DataResult<PipelineConfig> {
    let config: PipelineConfig = serde_json::from_reader(reader)?;
    config.validate()?;
    Ok(config)
}
