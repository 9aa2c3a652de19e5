//! Linear lat/lon → canvas projection.
//!
//! ```text
//! x = (lon − min_lon) / (max_lon − min_lon) · (max − min) + min
//! y = (max_lat − lat) / (max_lat − min_lat) · (max − min) + min   // north on top
//! ```
//!
//! A zero-width axis (all points share that coordinate) maps to the middle
//! of the range instead of dividing by zero.

use std::collections::HashMap;

use nf_core::{GeoPoint, PointSet};

use crate::{Extent, LayoutError, LayoutResult};

// ── TargetRange ───────────────────────────────────────────────────────────────

/// Canvas coordinate range, shared by both axes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TargetRange {
    min: f64,
    max: f64,
}

impl TargetRange {
    /// `min < max`, both finite, and `max - min` representable.
    pub fn new(min: f64, max: f64) -> LayoutResult<Self> {
        if min.is_finite() && max.is_finite() && min < max && (max - min).is_finite() {
            Ok(Self { min, max })
        } else {
            Err(LayoutError::InvalidRange { min, max })
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn midpoint(&self) -> f64 {
        self.min + self.width() / 2.0
    }

    pub fn contains(&self, v: f64) -> bool {
        (self.min..=self.max).contains(&v)
    }

    /// Map `t ∈ [0, 1]` onto the range, clamped so rounding never leaves it.
    fn scale(&self, t: f64) -> f64 {
        (t * self.width() + self.min).clamp(self.min, self.max)
    }
}

impl Default for TargetRange {
    fn default() -> Self {
        Self { min: -1000.0, max: 1000.0 }
    }
}

impl TryFrom<(f64, f64)> for TargetRange {
    type Error = LayoutError;

    fn try_from((min, max): (f64, f64)) -> LayoutResult<Self> {
        Self::new(min, max)
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// Canvas position of one point.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPoint {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

/// Projected points keyed by id, iterated in first-seen order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    points: Vec<LayoutPoint>,
    by_id: HashMap<String, usize>,
}

impl Layout {
    pub fn get(&self, id: &str) -> Option<&LayoutPoint> {
        self.by_id.get(id).map(|&i| &self.points[i])
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LayoutPoint> {
        self.points.iter()
    }

    /// Insert unless `id` is already placed; the first position wins.
    fn insert_first(&mut self, point: LayoutPoint) {
        if !self.by_id.contains_key(&point.id) {
            self.by_id.insert(point.id.clone(), self.points.len());
            self.points.push(point);
        }
    }
}

impl<'a> IntoIterator for &'a Layout {
    type Item = &'a LayoutPoint;
    type IntoIter = std::slice::Iter<'a, LayoutPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

// ── LayoutProjector ───────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, Default)]
pub struct LayoutProjector {
    range: TargetRange,
}

impl LayoutProjector {
    pub fn new(range: TargetRange) -> Self {
        Self { range }
    }

    pub fn range(&self) -> TargetRange {
        self.range
    }

    /// Project every point against the extent of the whole collection.
    ///
    /// A point id that appears more than once keeps its first position.
    pub fn project<'a, I>(&self, points: I) -> Layout
    where
        I: IntoIterator<Item = &'a GeoPoint>,
        I::IntoIter: Clone,
    {
        let iter = points.into_iter();
        let Some(extent) = Extent::from_points(iter.clone()) else {
            return Layout::default();
        };

        let mut layout = Layout::default();
        for p in iter {
            let (x, y) = self.project_one(&extent, p);
            layout.insert_first(LayoutPoint { id: p.id().to_owned(), x, y });
        }
        layout
    }

    /// Project the union of several sets onto one canvas.
    pub fn project_sets(&self, sets: &[&PointSet]) -> Layout {
        self.project(sets.iter().flat_map(|s| s.iter()))
    }

    /// Canvas position of `p` within `extent`.
    pub fn project_one(&self, extent: &Extent, p: &GeoPoint) -> (f64, f64) {
        let x = if extent.lon_span() == 0.0 {
            self.range.midpoint()
        } else {
            self.range.scale((p.longitude() - extent.min_lon) / extent.lon_span())
        };
        let y = if extent.lat_span() == 0.0 {
            self.range.midpoint()
        } else {
            self.range.scale((extent.max_lat - p.latitude()) / extent.lat_span())
        };
        (x, y)
    }
}
