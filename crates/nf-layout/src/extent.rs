//! Bounding extent of a point collection.

use nf_core::GeoPoint;

/// Latitude/longitude bounds over every point on a canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Extent {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Extent {
    /// Bounds of `points`, or `None` if there are none.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a GeoPoint>,
    {
        points.into_iter().fold(None, |acc, p| {
            let (lat, lon) = (p.latitude(), p.longitude());
            Some(match acc {
                None => Extent { min_lat: lat, max_lat: lat, min_lon: lon, max_lon: lon },
                Some(e) => Extent {
                    min_lat: e.min_lat.min(lat),
                    max_lat: e.max_lat.max(lat),
                    min_lon: e.min_lon.min(lon),
                    max_lon: e.max_lon.max(lon),
                },
            })
        })
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// `true` if every point shares a latitude or a longitude.
    pub fn is_degenerate(&self) -> bool {
        self.lat_span() == 0.0 || self.lon_span() == 0.0
    }
}
