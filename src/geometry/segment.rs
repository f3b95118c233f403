use crate::error::GeometryError;
use crate::math::{Point2, Rotation, Side};

use super::{Curve, Straight, TrackShape, STEPS_PER_TILE};

/// The shape family of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentShape {
    Straight,
    Curve,
}

/// The geometric path of a segment, oriented from its first end to its second.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackPath {
    /// Straight track.
    Straight(Straight),
    /// A quarter-circle curve.
    Curve(Curve),
}

impl TrackPath {
    fn build(shape: SegmentShape, from: Side, to: Side) -> Result<Self, GeometryError> {
        Ok(match shape {
            SegmentShape::Straight => TrackPath::Straight(Straight::new(from, to)?),
            SegmentShape::Curve => TrackPath::Curve(Curve::new(from, to)?),
        })
    }

    fn shape(&self) -> &dyn TrackShape {
        match self {
            TrackPath::Straight(s) => s,
            TrackPath::Curve(c) => c,
        }
    }
}

impl TrackShape for TrackPath {
    fn evaluate(&self, t: f64) -> Point2 {
        self.shape().evaluate(t)
    }

    fn heading(&self, t: f64) -> f64 {
        self.shape().heading(t)
    }

    fn length(&self) -> f64 {
        self.shape().length()
    }
}

/// One route through a tile: a path between two connection points,
/// discretized into `total_steps` steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    shape: SegmentShape,
    ends: [Side; 2],
    path: TrackPath,
    total_steps: u32,
}

impl Segment {
    /// Creates a segment with an explicit step count.
    ///
    /// # Errors
    ///
    /// Returns an error if `total_steps` is zero or the shape cannot join
    /// the two sides.
    pub fn new(
        shape: SegmentShape,
        from: Side,
        to: Side,
        total_steps: u32,
    ) -> Result<Self, GeometryError> {
        if total_steps == 0 {
            return Err(GeometryError::NoSteps);
        }
        let path = TrackPath::build(shape, from, to)?;
        Ok(Self {
            shape,
            ends: [from, to],
            path,
            total_steps,
        })
    }

    /// Creates a segment whose step count follows from its length.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape cannot join the two sides.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn with_default_steps(
        shape: SegmentShape,
        from: Side,
        to: Side,
    ) -> Result<Self, GeometryError> {
        let path = TrackPath::build(shape, from, to)?;
        let steps = (path.length() * STEPS_PER_TILE).round().max(1.0) as u32;
        Ok(Self {
            shape,
            ends: [from, to],
            path,
            total_steps: steps,
        })
    }

    /// Straight segment with the default step count.
    ///
    /// # Errors
    ///
    /// Returns an error if the sides are not opposite.
    pub fn straight(from: Side, to: Side) -> Result<Self, GeometryError> {
        Self::with_default_steps(SegmentShape::Straight, from, to)
    }

    /// Curved segment with the default step count.
    ///
    /// # Errors
    ///
    /// Returns an error if the sides are not adjacent.
    pub fn curve(from: Side, to: Side) -> Result<Self, GeometryError> {
        Self::with_default_steps(SegmentShape::Curve, from, to)
    }

    #[must_use]
    pub fn shape(&self) -> SegmentShape {
        self.shape
    }

    /// The two connection points, in path order.
    #[must_use]
    pub fn ends(&self) -> [Side; 2] {
        self.ends
    }

    #[must_use]
    pub fn path(&self) -> &TrackPath {
        &self.path
    }

    #[must_use]
    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    /// Returns the end across the path from `side`, or `None` if `side` is not an end.
    #[must_use]
    pub fn other_end(&self, side: Side) -> Option<Side> {
        match self.ends {
            [a, b] if a == side => Some(b),
            [a, b] if b == side => Some(a),
            _ => None,
        }
    }

    /// Returns a copy of this segment turned by `rotation`.
    ///
    /// # Errors
    ///
    /// Never fails for a valid segment; rotation preserves side adjacency.
    pub fn rotated(&self, rotation: Rotation) -> Result<Self, GeometryError> {
        let [from, to] = self.ends;
        Self::new(
            self.shape,
            rotation.apply(from),
            rotation.apply(to),
            self.total_steps,
        )
    }
}
