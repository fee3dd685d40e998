//! Coordinate system identifiers and the tagged coordinate value

use std::fmt;
use std::str::FromStr;

use crate::errors::ConvertError;
use super::polar::PolarCoordinate;
use super::rectangular::RectangularCoordinate;
use super::transform::{polar_to_rect, rect_to_polar};

/// Identifier for the two supported coordinate systems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateKind {
    /// Distance and angle
    Polar,
    /// Northing and easting
    Rectangular,
}

impl CoordinateKind {
    /// The system a coordinate of this kind converts into
    pub fn opposite(&self) -> CoordinateKind {
        match self {
            CoordinateKind::Polar => CoordinateKind::Rectangular,
            CoordinateKind::Rectangular => CoordinateKind::Polar,
        }
    }

    /// Names of the two fields, in input order
    pub fn field_names(&self) -> (&'static str, &'static str) {
        match self {
            CoordinateKind::Polar => ("distance", "angle"),
            CoordinateKind::Rectangular => ("northing", "easting"),
        }
    }

    /// Get a description of this coordinate system
    pub fn description(&self) -> &'static str {
        match self {
            CoordinateKind::Polar => "Polar",
            CoordinateKind::Rectangular => "Rectangular",
        }
    }
}

impl fmt::Display for CoordinateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for CoordinateKind {
    type Err = ConvertError;

    /// Parse a coordinate system name (e.g. "Polar", "rect")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "polar" | "p" => Ok(CoordinateKind::Polar),
            "rectangular" | "rect" | "r" => Ok(CoordinateKind::Rectangular),
            _ => Err(ConvertError::UnknownCoordinateSystem(s.trim().to_string())),
        }
    }
}

/// A coordinate tagged with the system it is expressed in
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coordinate {
    Polar(PolarCoordinate),
    Rectangular(RectangularCoordinate),
}

impl Coordinate {
    /// Build a coordinate of the given kind from its two field values
    ///
    /// The pair is read in the order reported by [`CoordinateKind::field_names`].
    pub fn from_pair(kind: CoordinateKind, first: f64, second: f64) -> Self {
        match kind {
            CoordinateKind::Polar => Coordinate::Polar(PolarCoordinate::new(first, second)),
            CoordinateKind::Rectangular => {
                Coordinate::Rectangular(RectangularCoordinate::new(first, second))
            },
        }
    }

    /// The system this coordinate is expressed in
    pub fn kind(&self) -> CoordinateKind {
        match self {
            Coordinate::Polar(_) => CoordinateKind::Polar,
            Coordinate::Rectangular(_) => CoordinateKind::Rectangular,
        }
    }

    /// The two field values, in input order
    pub fn values(&self) -> (f64, f64) {
        match self {
            Coordinate::Polar(p) => (p.distance(), p.angle()),
            Coordinate::Rectangular(r) => (r.northing(), r.easting()),
        }
    }

    /// Convert into the opposite coordinate system
    pub fn convert(&self) -> Coordinate {
        match self {
            Coordinate::Polar(p) => Coordinate::Rectangular(polar_to_rect(p)),
            Coordinate::Rectangular(r) => Coordinate::Polar(rect_to_polar(r)),
        }
    }

    /// This position as northing/easting, converting if needed
    pub fn to_rectangular(&self) -> RectangularCoordinate {
        match self {
            Coordinate::Polar(p) => polar_to_rect(p),
            Coordinate::Rectangular(r) => *r,
        }
    }
}

impl From<PolarCoordinate> for Coordinate {
    fn from(coord: PolarCoordinate) -> Self {
        Coordinate::Polar(coord)
    }
}

impl From<RectangularCoordinate> for Coordinate {
    fn from(coord: RectangularCoordinate) -> Self {
        Coordinate::Rectangular(coord)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Forward the formatter so a caller-supplied precision survives
        match self {
            Coordinate::Polar(p) => fmt::Display::fmt(p, f),
            Coordinate::Rectangular(r) => fmt::Display::fmt(r, f),
        }
    }
}
