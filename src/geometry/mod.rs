pub mod curve;
pub mod segment;
pub mod straight;

pub use curve::Curve;
pub use segment::{Segment, SegmentShape, TrackPath};
pub use straight::Straight;

use crate::math::Point2;

/// Number of steps along one tile width of track.
pub const STEPS_PER_TILE: f64 = 40.0;

/// A position and heading on a tile's path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelPoint {
    /// World coordinates.
    pub point: Point2,
    /// Heading in degrees, measured from +x toward +y.
    pub angle: f64,
}

/// Trait for the cell-local path a piece of track follows.
///
/// Paths are parameterized over `t` in `[0, 1]` from their start side to their
/// end side. Values outside that range extrapolate smoothly past either end.
pub trait TrackShape {
    /// Evaluates the path at parameter `t`, returning a cell-local point.
    fn evaluate(&self, t: f64) -> Point2;

    /// Returns the direction of travel at `t` in radians.
    fn heading(&self, t: f64) -> f64;

    /// Returns the length of the path in tile units.
    fn length(&self) -> f64;
}
