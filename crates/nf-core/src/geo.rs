//! Geographic point type and great-circle distance.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Distances must be reproducible
//! bit-for-bit across runs and platforms, so the haversine below keeps the
//! exact operation order of the reference formula:
//!
//! ```text
//! φ1, φ2 = radians(lat1), radians(lat2)
//! Δφ = radians(lat2 − lat1);  Δλ = radians(lon2 − lon1)
//! h  = sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)
//! d  = R · 2·atan2(√h, √(1 − h))
//! ```

use std::fmt;

use crate::{CoreError, CoreResult};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Which coordinate a validation error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn bound(self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// A named WGS-84 location tagged with its facility category.
///
/// Fields are private: a `GeoPoint` that exists has a non-empty id and
/// finite, in-range coordinates.  Construct with [`GeoPoint::new`] or
/// [`GeoPoint::from_parts`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeoPoint {
    id: String,
    latitude: f64,
    longitude: f64,
    category: String,
}

impl GeoPoint {
    /// Validate and build a point.
    ///
    /// # Errors
    /// - [`CoreError::EmptyId`] if `id` is blank.
    /// - [`CoreError::InvalidCoordinate`] if either coordinate is NaN,
    ///   infinite, or outside `[-90, 90]` / `[-180, 180]`.
    pub fn new(
        id: impl Into<String>,
        latitude: f64,
        longitude: f64,
        category: impl Into<String>,
    ) -> CoreResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CoreError::EmptyId);
        }
        check_axis(&id, Axis::Latitude, latitude)?;
        check_axis(&id, Axis::Longitude, longitude)?;
        Ok(Self { id, latitude, longitude, category: category.into() })
    }

    /// Like [`new`](Self::new) but accepts coordinates that may be absent,
    /// as read from a tabular source with empty cells.
    ///
    /// # Errors
    /// [`CoreError::MissingCoordinate`] for a `None` coordinate, otherwise as
    /// for [`new`](Self::new).
    pub fn from_parts(
        id: impl Into<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        category: impl Into<String>,
    ) -> CoreResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CoreError::EmptyId);
        }
        let latitude = latitude
            .ok_or_else(|| CoreError::MissingCoordinate { id: id.clone(), axis: Axis::Latitude })?;
        let longitude = longitude
            .ok_or_else(|| CoreError::MissingCoordinate { id: id.clone(), axis: Axis::Longitude })?;
        Self::new(id, latitude, longitude, category)
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Returns exactly `0.0` for identical coordinates.  `h` is clamped to 1
    /// so near-antipodal rounding cannot reach `sqrt` of a negative number.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let phi1 = self.latitude.to_radians();
        let phi2 = other.latitude.to_radians();
        let d_phi = (other.latitude - self.latitude).to_radians();
        let d_lambda = (other.longitude - self.longitude).to_radians();

        let h = (d_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
        let h = h.min(1.0);

        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
        EARTH_RADIUS_KM * c
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.6}, {:.6})", self.id, self.latitude, self.longitude)
    }
}

fn check_axis(id: &str, axis: Axis, value: f64) -> CoreResult<()> {
    if value.is_finite() && value.abs() <= axis.bound() {
        Ok(())
    } else {
        Err(CoreError::InvalidCoordinate { id: id.to_owned(), axis, value })
    }
}
