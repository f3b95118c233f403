use crate::error::GeometryError;

use super::Side;

/// Quarter-turn rotation of a tile, clockwise on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Creates a rotation from degrees, normalizing into `[0, 360)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `degrees` is not a multiple of 90.
    pub fn from_degrees(degrees: i32) -> Result<Self, GeometryError> {
        match degrees.rem_euclid(360) {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            _ => Err(GeometryError::InvalidRotation(degrees)),
        }
    }

    /// Returns the rotation in degrees.
    #[must_use]
    pub fn degrees(self) -> i32 {
        i32::from(self.quarter_turns()) * 90
    }

    /// Returns the number of clockwise quarter turns.
    #[must_use]
    pub fn quarter_turns(self) -> u8 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    /// Returns this rotation advanced by 90 degrees, wrapping at 360.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    /// Rotates a connection point about the cell center.
    #[must_use]
    pub fn apply(self, side: Side) -> Side {
        (0..self.quarter_turns()).fold(side, |s, _| s.clockwise())
    }
}
