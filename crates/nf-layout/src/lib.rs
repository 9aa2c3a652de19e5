//! `nf-layout` — map geographic points onto a bounded 2-D canvas.
//!
//! | Module        | Contents                                             |
//! |---------------|------------------------------------------------------|
//! | [`extent`]    | `Extent` — lat/lon bounding box of a collection      |
//! | [`projector`] | `LayoutProjector`, `TargetRange`, `Layout`, `LayoutPoint` |
//! | [`error`]     | `LayoutError`, `LayoutResult`                        |
//!
//! Project every point destined for one canvas in a single call (see
//! [`LayoutProjector::project_sets`]): the extent is shared, so subsets
//! projected separately would not line up.

pub mod error;
pub mod extent;
pub mod projector;


pub use error::{LayoutError, LayoutResult};
pub use extent::Extent;
pub use projector::{Layout, LayoutPoint, LayoutProjector, TargetRange};
