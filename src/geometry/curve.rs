use std::f64::consts::{PI, TAU};

use crate::error::GeometryError;
use crate::math::polar::cartesian_from_polar;
use crate::math::{Point2, Side};

use super::TrackShape;

/// Radius of a curve, in tiles.
pub const CURVE_RADIUS: f64 = 0.5;

/// Quarter-circle track joining the midpoints of two adjacent sides.
///
/// The arc is centered on the corner the two sides share and sweeps
/// `start_angle + sweep * t` (radians) around it.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    center: Point2,
    start_angle: f64,
    sweep: f64,
}

impl Curve {
    /// Creates curved track running from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if the two sides do not meet at a corner.
    pub fn new(from: Side, to: Side) -> Result<Self, GeometryError> {
        let center = from
            .shared_corner(to)
            .ok_or(GeometryError::Disconnected {
                shape: "curve",
                from,
                to,
            })?;

        let start = from.midpoint() - center;
        let end = to.midpoint() - center;
        let start_angle = start.y.atan2(start.x);
        let end_angle = end.y.atan2(end.x);

        // Normalize sweep to (-π, π].
        let mut sweep = (end_angle - start_angle).rem_euclid(TAU);
        if sweep > PI {
            sweep -= TAU;
        }

        Ok(Self {
            center,
            start_angle,
            sweep,
        })
    }

    /// Returns the corner the arc is centered on.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns whether the arc turns clockwise on screen.
    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.sweep > 0.0
    }
}

impl TrackShape for Curve {
    fn evaluate(&self, t: f64) -> Point2 {
        self.center + cartesian_from_polar(CURVE_RADIUS, self.start_angle + self.sweep * t)
    }

    fn heading(&self, t: f64) -> f64 {
        let angle = self.start_angle + self.sweep * t;
        let sign = self.sweep.signum();
        (sign * angle.cos()).atan2(-sign * angle.sin())
    }

    fn length(&self) -> f64 {
        CURVE_RADIUS * self.sweep.abs()
    }
}
