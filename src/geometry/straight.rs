use crate::error::GeometryError;
use crate::math::{Point2, Side, Vector2};

use super::TrackShape;

/// Straight track across a cell, joining the midpoints of two opposite sides.
///
/// The parametric form is: `P(t) = start + t * (end - start)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Straight {
    start: Point2,
    direction: Vector2,
}

impl Straight {
    /// Creates straight track running from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if the two sides are not opposite each other.
    pub fn new(from: Side, to: Side) -> Result<Self, GeometryError> {
        if from.opposite() != to {
            return Err(GeometryError::Disconnected {
                shape: "straight",
                from,
                to,
            });
        }
        let start = from.midpoint();
        Ok(Self {
            start,
            direction: to.midpoint() - start,
        })
    }
}

impl TrackShape for Straight {
    fn evaluate(&self, t: f64) -> Point2 {
        self.start + self.direction * t
    }

    fn heading(&self, _t: f64) -> f64 {
        self.direction.y.atan2(self.direction.x)
    }

    fn length(&self) -> f64 {
        self.direction.norm()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn west_to_east_crosses_cell() {
        let s = Straight::new(Side::West, Side::East).unwrap();
        assert_eq!(s.evaluate(0.0), Point2::new(0.0, 0.5));
        assert_eq!(s.evaluate(1.0), Point2::new(1.0, 0.5));
        assert_abs_diff_eq!(s.length(), 1.0);
        assert_abs_diff_eq!(s.heading(0.3), 0.0);
    }

    #[test]
    fn extrapolates_past_both_ends() {
        let s = Straight::new(Side::North, Side::South).unwrap();
        let past = s.evaluate(1.1);
        assert_abs_diff_eq!(past.x, 0.5);
        assert_abs_diff_eq!(past.y, 1.1, epsilon = 1e-12);
        let before = s.evaluate(-0.1);
        assert_abs_diff_eq!(before.y, -0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(s.heading(0.0), FRAC_PI_2);
    }

    #[test]
    fn adjacent_sides_rejected() {
        assert_eq!(
            Straight::new(Side::West, Side::South),
            Err(GeometryError::Disconnected {
                shape: "straight",
                from: Side::West,
                to: Side::South,
            })
        );
    }
}
