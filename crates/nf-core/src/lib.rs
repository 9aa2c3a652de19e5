//! `nf-core` — foundational types for the `nearest_facility` toolkit.
//!
//! Every other `nf-*` crate depends on this one.  It has no `nf-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`geo`]       | `GeoPoint`, `Axis`, haversine distance                   |
//! | [`point_set`] | `PointSet` — ordered, id-unique collection of points     |
//! | [`facility`]  | `FacilityType` registry (labels used as category tags)   |
//! | [`config`]    | `PipelineConfig`, `PairingDirection`, `CategorySource`   |
//! | [`error`]     | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to public types.            |

pub mod config;
pub mod error;
pub mod facility;
pub mod geo;
pub mod point_set;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CategorySource, PairingDirection, PipelineConfig};
pub use error::{CoreError, CoreResult};
pub use facility::FacilityType;
pub use geo::{Axis, EARTH_RADIUS_KM, GeoPoint};
pub use point_set::PointSet;
