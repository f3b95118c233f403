pub mod grid;
pub mod polar;
pub mod rotation;

pub use grid::{tile_position_from_coordinates, GridPos, Side};
pub use rotation::Rotation;

/// 2D point type. World coordinates are measured in tiles, y pointing down.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
