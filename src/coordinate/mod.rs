//! Coordinate handling for surveying data
//!
//! This module provides the polar and rectangular value types and the
//! transformations between them.

mod polar;
mod rectangular;
mod quadrant;
mod kind;
mod transform;
#[cfg(test)]
mod tests;

/// Decimal places used when no precision is requested
pub const DEFAULT_PRECISION: usize = 4;

// Re-export key types
pub use self::polar::PolarCoordinate;
pub use self::rectangular::RectangularCoordinate;
pub use self::quadrant::Quadrant;
pub use self::kind::{Coordinate, CoordinateKind};
pub use self::transform::{polar_to_rect, rect_to_polar};
