//! Rectangular (northing/easting) coordinate value type

use std::fmt;

use super::quadrant::Quadrant;
use super::DEFAULT_PRECISION;

/// A position given as two orthogonal signed displacements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangularCoordinate {
    northing: f64,
    easting: f64,
}

impl RectangularCoordinate {
    /// Create a new rectangular coordinate
    pub fn new(northing: f64, easting: f64) -> Self {
        RectangularCoordinate { northing, easting }
    }

    /// Displacement along the north axis
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Displacement along the east axis
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Compass quadrant this point falls in
    pub fn quadrant(&self) -> Quadrant {
        Quadrant::of(self)
    }
}

impl fmt::Display for RectangularCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(f, "<RectangularCoordinate, northing={:.*}, easting={:.*}>",
               precision, self.northing, precision, self.easting)
    }
}
