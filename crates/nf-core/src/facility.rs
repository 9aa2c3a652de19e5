//! NHS facility type registry.
//!
//! The display label of each type doubles as the `category` tag carried by
//! points and edges, so renderers can colour and label by it directly.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FacilityType {
    AcuteHospital,
    Cdc,
    GpPractice,
    AmbulanceStation,
    CommunityOutreach,
    CommunityHospital,
    SpecialistHospital,
}

impl FacilityType {
    /// Types that can be paired against acute hospitals, in selection order.
    pub const SELECTABLE: [FacilityType; 6] = [
        FacilityType::Cdc,
        FacilityType::GpPractice,
        FacilityType::AmbulanceStation,
        FacilityType::CommunityOutreach,
        FacilityType::CommunityHospital,
        FacilityType::SpecialistHospital,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FacilityType::AcuteHospital => "Acute Hospital",
            FacilityType::Cdc => "CDC",
            FacilityType::GpPractice => "GP Practice",
            FacilityType::AmbulanceStation => "Ambulance Station",
            FacilityType::CommunityOutreach => "Community and Outreach",
            FacilityType::CommunityHospital => "Community Hospital",
            FacilityType::SpecialistHospital => "Specialist Hospital",
        }
    }

    /// `true` for the hospital side of a nearest-facility pairing.
    pub fn is_hospital_endpoint(self) -> bool {
        self == FacilityType::AcuteHospital
    }
}

impl fmt::Display for FacilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FacilityType {
    type Err = CoreError;

    /// Parse a display label, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        std::iter::once(FacilityType::AcuteHospital)
            .chain(FacilityType::SELECTABLE)
            .find(|t| t.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownFacilityType(s.to_owned()))
    }
}
