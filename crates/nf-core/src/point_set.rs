//! Ordered collection of points with unique ids.

use std::collections::HashSet;
use std::ops::Index;

use crate::{CoreError, CoreResult, GeoPoint};

/// An ordered sequence of [`GeoPoint`]s whose ids are unique within the set.
///
/// Iteration order is insertion order and is significant: nearest-match
/// tie-breaks and edge ordering both follow it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    points: Vec<GeoPoint>,
}

impl PointSet {
    /// Build a set, rejecting the first repeated id.
    pub fn new(points: Vec<GeoPoint>) -> CoreResult<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(points.len());
        for p in &points {
            if !seen.insert(p.id()) {
                return Err(CoreError::DuplicateId(p.id().to_owned()));
            }
        }
        Ok(Self { points })
    }

    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeoPoint> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Linear lookup by id.
    pub fn get(&self, id: &str) -> Option<&GeoPoint> {
        self.points.iter().find(|p| p.id() == id)
    }

    /// Union of `self` followed by `other`, preserving both orders.
    ///
    /// Used to merge per-type facility tables into one candidate set.
    ///
    /// # Errors
    /// [`CoreError::DuplicateId`] if an id appears in both sets.
    pub fn concat(mut self, other: PointSet) -> CoreResult<Self> {
        self.points.extend(other.points);
        Self::new(self.points)
    }

    pub fn into_vec(self) -> Vec<GeoPoint> {
        self.points
    }
}

impl Index<usize> for PointSet {
    type Output = GeoPoint;

    fn index(&self, i: usize) -> &GeoPoint {
        &self.points[i]
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a GeoPoint;
    type IntoIter = std::slice::Iter<'a, GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl TryFrom<Vec<GeoPoint>> for PointSet {
    type Error = CoreError;

    fn try_from(points: Vec<GeoPoint>) -> CoreResult<Self> {
        Self::new(points)
    }
}
