//! Embedded extracts of the enriched South West facility tables.
//!
//! Column layout matches the full tables (`Name`, `latitude`, `longitude`
//! plus columns the loader ignores), so the same loader reads both.

use nf_core::FacilityType;

pub const ACUTE_CSV: &str = "\
Name,Postcode,latitude,longitude
Royal Devon and Exeter Hospital,EX2 5DW,50.7167,-3.5056
Derriford Hospital,PL6 8DH,50.4167,-4.1136
Musgrove Park Hospital,TA1 5DA,51.0118,-3.1207
Royal Cornwall Hospital,TR1 3LJ,50.2669,-5.0930
Gloucestershire Royal Hospital,GL1 3NN,51.8655,-2.2335
Southmead Hospital,BS10 5NB,51.4958,-2.5917
Bristol Royal Infirmary,BS2 8HW,51.4585,-2.5967
Great Western Hospital,SN3 6BB,51.5434,-1.7383
Torbay Hospital,TQ2 7AA,50.4833,-3.5462
";

const CDC_CSV: &str = "\
Name,Postcode,latitude,longitude
Exeter Nightingale CDC,EX2 7JS,50.7217,-3.4745
Cumberland Centre CDC,PL1 5AT,50.3710,-4.1600
Taunton CDC,TA1 2PX,51.0200,-3.1000
";

const GP_CSV: &str = "\
Name,Postcode,latitude,longitude
Southernhay House Surgery,EX1 1SG,50.7230,-3.5260
Mount Gould GP,PL4 7PY,50.3786,-4.1195
Truro Health Park,TR1 2JA,50.2640,-5.0570
Cheltenham Road Surgery,GL2 0JH,51.8750,-2.2270
";

const AMBULANCE_CSV: &str = "\
Name,Postcode,latitude,longitude
Exeter Ambulance Station,EX2 7HY,50.7070,-3.4810
Bristol Ambulance Station,BS2 0JZ,51.4640,-2.5800
Swindon Ambulance Station,SN2 2DJ,51.5720,-1.7900
";

/// Embedded table for each selectable type that has one.
pub fn facility_table(kind: FacilityType) -> Option<&'static str> {
    match kind {
        FacilityType::Cdc => Some(CDC_CSV),
        FacilityType::GpPractice => Some(GP_CSV),
        FacilityType::AmbulanceStation => Some(AMBULANCE_CSV),
        _ => None,
    }
}
