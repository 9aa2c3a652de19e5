//! `nf-graph` — nearest-facility edges and the render graph built from them.
//!
//! # Pipeline
//!
//! ```text
//! sources ──┐
//!           ├─ NearestFacilityGraphBuilder ─→ EdgeSet ─→ FacilityNetwork
//! candidates┘        (NearestOracle)
//! ```
//!
//! One edge per source, pointing at its nearest candidate by haversine
//! distance.  The pairing direction is just argument order: pass hospitals
//! as `sources` to link each hospital to its nearest facility, or swap the
//! sets to link each facility to its nearest hospital.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the source loop on Rayon's thread pool.           |

pub mod builder;
pub mod edge;
pub mod error;
pub mod network;


pub use builder::NearestFacilityGraphBuilder;
pub use edge::{EdgeSet, NearestEdge};
pub use error::{GraphError, GraphResult};
pub use network::{FacilityNetwork, NetworkEdge, NetworkNode, NodeRole};
