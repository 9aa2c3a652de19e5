//! `nf-spatial` — distance oracle and nearest-candidate search.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`oracle`] | `distance`, `nearest`, `NearestOracle` trait, `LinearScan`   |
//! | [`index`]  | `RTreeOracle` — R-tree backed drop-in for `LinearScan`       |
//!
//! Both oracles return the same candidate for every query, including on
//! ties (first candidate in set order wins), so callers can swap one for
//! the other without changing results.

pub mod index;
pub mod oracle;

#[cfg(test)]
mod tests;

pub use index::RTreeOracle;
pub use oracle::{LinearScan, NearestOracle, distance, nearest};
