use std::fmt;

use crate::error::GeometryError;
use crate::geometry::Segment;
use crate::math::Side;

/// The kinds of track piece a tile can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// A single straight route.
    Straight,
    /// A single quarter-circle route.
    Curve,
    /// A straight and a curved route sharing one end; one is selected at a time.
    Switch,
}

impl TileKind {
    /// Returns the unrotated routes for this kind of tile.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in kinds.
    pub fn default_segments(self) -> Result<Vec<Segment>, GeometryError> {
        Ok(match self {
            TileKind::Straight => vec![Segment::straight(Side::West, Side::East)?],
            TileKind::Curve => vec![Segment::curve(Side::West, Side::South)?],
            TileKind::Switch => vec![
                Segment::straight(Side::West, Side::East)?,
                Segment::curve(Side::West, Side::South)?,
            ],
        })
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TileKind::Straight => "STRAIGHT",
            TileKind::Curve => "CURVE",
            TileKind::Switch => "SWITCH",
        };
        f.write_str(name)
    }
}
