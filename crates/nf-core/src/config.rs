//! Pipeline configuration.
//!
//! Typically filled in by the calling application (dashboard, CLI, or a
//! TOML/JSON file deserialised with the `serde` feature) and passed to the
//! graph builder and layout projector.

use crate::{CoreError, CoreResult, FacilityType};

// ── PairingDirection ──────────────────────────────────────────────────────────

/// Which side of the pairing searches for its nearest counterpart.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PairingDirection {
    /// Each acute hospital is linked to its nearest facility.
    #[default]
    HospitalsToFacilities,
    /// Each facility is linked to its nearest acute hospital.
    FacilitiesToHospitals,
}

// ── CategorySource ────────────────────────────────────────────────────────────

/// Which endpoint's category is copied onto an edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CategorySource {
    FromSource,
    #[default]
    FromTarget,
}

// ── PipelineConfig ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PipelineConfig {
    pub direction: PairingDirection,

    /// Edge category policy.  Use [`recommended_category_source`] to tag
    /// edges with the non-hospital endpoint regardless of direction.
    ///
    /// [`recommended_category_source`]: PipelineConfig::recommended_category_source
    pub category_source: CategorySource,

    /// Layout canvas range `(min, max)`, applied to both axes.
    pub target_range: (f64, f64),

    /// Facility types paired against acute hospitals.
    pub facility_types: Vec<FacilityType>,

    /// Rayon worker count for the parallel source loop.  `None` uses the
    /// global pool.  Ignored without the `parallel` feature.
    pub num_threads: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            direction: PairingDirection::HospitalsToFacilities,
            category_source: CategorySource::FromTarget,
            target_range: (-1000.0, 1000.0),
            facility_types: FacilityType::SELECTABLE.to_vec(),
            num_threads: None,
        }
    }
}

impl PipelineConfig {
    /// The category source that labels edges with the non-hospital side.
    pub fn recommended_category_source(&self) -> CategorySource {
        match self.direction {
            PairingDirection::HospitalsToFacilities => CategorySource::FromTarget,
            PairingDirection::FacilitiesToHospitals => CategorySource::FromSource,
        }
    }

    /// Check the configuration before running the pipeline.
    pub fn validate(&self) -> CoreResult<()> {
        let (min, max) = self.target_range;
        if !(min.is_finite() && max.is_finite() && min < max && (max - min).is_finite()) {
            return Err(CoreError::Config(format!(
                "target range ({min}, {max}) must be finite with min < max and a finite width"
            )));
        }
        if self.facility_types.is_empty() {
            return Err(CoreError::Config("no facility types selected".into()));
        }
        if self.facility_types.iter().any(|t| t.is_hospital_endpoint()) {
            return Err(CoreError::Config(
                "acute hospitals cannot be selected as a facility type".into(),
            ));
        }
        if self.num_threads == Some(0) {
            return Err(CoreError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }
}
