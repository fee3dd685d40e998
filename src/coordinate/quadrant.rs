//! Compass quadrant classification for rectangular coordinates

use std::fmt;

use super::rectangular::RectangularCoordinate;

/// Compass quadrant of a northing/easting position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    /// Northing >= 0, easting >= 0
    NorthEast,
    /// Northing >= 0, easting < 0
    NorthWest,
    /// Northing < 0, easting < 0
    SouthWest,
    /// Northing < 0, easting >= 0
    SouthEast,
}

impl Quadrant {
    /// Classify a rectangular coordinate
    ///
    /// Points on an axis belong to the quadrant on the non-negative side of
    /// that axis, so the origin is `NorthEast`.
    pub fn of(coord: &RectangularCoordinate) -> Self {
        let north = coord.northing() >= 0.0;
        let east = coord.easting() >= 0.0;
        match (north, east) {
            (true, true) => Quadrant::NorthEast,
            (true, false) => Quadrant::NorthWest,
            (false, false) => Quadrant::SouthWest,
            (false, true) => Quadrant::SouthEast,
        }
    }

    /// Two-letter compass abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Quadrant::NorthEast => "NE",
            Quadrant::NorthWest => "NW",
            Quadrant::SouthWest => "SW",
            Quadrant::SouthEast => "SE",
        }
    }

    /// Get a description of this quadrant
    pub fn description(&self) -> String {
        let ordinal = match self {
            Quadrant::NorthEast => "First",
            Quadrant::NorthWest => "Second",
            Quadrant::SouthWest => "Third",
            Quadrant::SouthEast => "Fourth",
        };
        format!("{} ({} Quadrant)", self.abbreviation(), ordinal)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}
