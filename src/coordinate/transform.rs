//! Conversions between polar and rectangular coordinates
//!
//! Both directions are total over finite inputs and apply no rounding beyond
//! what the `f64` trigonometric primitives produce.

use super::polar::PolarCoordinate;
use super::rectangular::RectangularCoordinate;

/// Convert a polar coordinate to northing/easting
///
/// `northing = d·cos(θ)`, `easting = d·sin(θ)`
pub fn polar_to_rect(coord: &PolarCoordinate) -> RectangularCoordinate {
    let (sin, cos) = coord.angle().sin_cos();
    RectangularCoordinate::new(coord.distance() * cos, coord.distance() * sin)
}

/// Convert a northing/easting coordinate to polar form
///
/// The angle comes from `atan2(easting, northing)`, so it lies in `(-π, π]`
/// and is measured from the northing axis. The origin maps to `(0, 0)`.
pub fn rect_to_polar(coord: &RectangularCoordinate) -> PolarCoordinate {
    let distance = f64::sqrt(coord.northing() * coord.northing() + coord.easting() * coord.easting());
    let angle = f64::atan2(coord.easting(), coord.northing());
    PolarCoordinate::new(distance, angle)
}

impl From<PolarCoordinate> for RectangularCoordinate {
    #[inline]
    fn from(coord: PolarCoordinate) -> Self {
        polar_to_rect(&coord)
    }
}

impl From<RectangularCoordinate> for PolarCoordinate {
    #[inline]
    fn from(coord: RectangularCoordinate) -> Self {
        rect_to_polar(&coord)
    }
}
