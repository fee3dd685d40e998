pub mod errors;
pub mod coordinate;
pub mod session;
pub mod input;
pub mod report;
pub mod utils;
pub mod cli;
pub mod commands;

pub use errors::{ConvertError, ConvertResult};
pub use coordinate::{
    polar_to_rect, rect_to_polar, Coordinate, CoordinateKind, PolarCoordinate, Quadrant,
    RectangularCoordinate,
};
pub use session::{transform_coordinates, ConversionSession};
