use geo::{Distance, HaversineMeasure, Point};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS: f64 = 6_371_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for Point {
    fn from(coordinates: Coordinates) -> Self {
        Point::new(coordinates.lng, coordinates.lat)
    }
}

/// Great-circle distance in meters between two points, using the haversine formula.
pub fn compute_distance(from: Coordinates, to: Coordinates) -> f64 {
    HaversineMeasure::new(EARTH_RADIUS).distance(Point::from(from), Point::from(to))
}
