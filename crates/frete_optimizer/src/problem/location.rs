use geo::{Distance, Euclidean, Haversine};

use crate::error::ProblemError;

const METERS_PER_KILOMETER: f64 = 1_000.0;

/// A geographic position, stored as a `geo::Point` with x = longitude and
/// y = latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    point: geo::Point,
}

impl Location {
    /// Builds a location from latitude/longitude in degrees. Latitude must
    /// be within [-90, 90] and longitude within [-180, 180].
    pub fn try_from_lat_lon(lat: f64, lon: f64) -> Result<Self, ProblemError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(ProblemError::InvalidCoordinate { lat, lon });
        }

        Ok(Self {
            point: geo::Point::new(lon, lat),
        })
    }

    /// Unvalidated planar coordinates, for abstract instances.
    pub fn from_cartesian(x: f64, y: f64) -> Self {
        Self {
            point: geo::Point::new(x, y),
        }
    }

    pub fn x(&self) -> f64 {
        self.point.x()
    }

    pub fn y(&self) -> f64 {
        self.point.y()
    }

    pub fn lon(&self) -> f64 {
        self.point.x()
    }

    pub fn lat(&self) -> f64 {
        self.point.y()
    }

    pub fn euclidean_distance(&self, to: &Location) -> f64 {
        let euclidean = Euclidean;
        euclidean.distance(&self.point, &to.point)
    }

    /// Great-circle distance in kilometres.
    pub fn haversine_distance_km(&self, to: &Location) -> f64 {
        let haversine = Haversine;

        haversine.distance(self.point, to.point) / METERS_PER_KILOMETER
    }
}

impl From<&Location> for geo::Point<f64> {
    fn from(location: &Location) -> Self {
        location.point
    }
}
