//! Polar coordinate value type

use std::fmt;

use super::DEFAULT_PRECISION;

/// A position given as a radial distance and a direction from the northing axis
///
/// The angle is in radians. Neither field is range-checked: a negative
/// distance or an angle outside `(-π, π]` is stored as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarCoordinate {
    distance: f64,
    angle: f64,
}

impl PolarCoordinate {
    /// Create a new polar coordinate
    pub fn new(distance: f64, angle: f64) -> Self {
        PolarCoordinate { distance, angle }
    }

    /// Radial length from the origin
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Direction in radians, measured from the northing axis towards easting
    pub fn angle(&self) -> f64 {
        self.angle
    }
}

impl fmt::Display for PolarCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(f, "<PolarCoordinate, distance={:.*}, angle={:.*}>",
               precision, self.distance, precision, self.angle)
    }
}
