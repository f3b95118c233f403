use std::fmt;

use super::Point2;

/// Integer coordinates of one grid cell.
///
/// The cell at `(x, y)` covers `[x, x + 1] x [y, y + 1]` in world coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    /// Creates a new grid position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the cell adjacent to this one across `side`.
    #[must_use]
    pub fn neighbor(self, side: Side) -> Self {
        let (dx, dy) = side.offset();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Returns the world coordinates of the cell's top-left corner.
    #[must_use]
    pub fn origin(self) -> Point2 {
        Point2::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Returns the grid cell containing a world coordinate.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn tile_position_from_coordinates(point: &Point2) -> GridPos {
    GridPos::new(point.x.floor() as i32, point.y.floor() as i32)
}

/// A connection point of a cell, located at the midpoint of one of its sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    North,
    East,
    South,
    West,
}

impl Side {
    /// All sides in clockwise order starting at north.
    pub const ALL: [Side; 4] = [Side::North, Side::East, Side::South, Side::West];

    /// Returns the side across the cell.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Side::North => Side::South,
            Side::East => Side::West,
            Side::South => Side::North,
            Side::West => Side::East,
        }
    }

    /// Returns the next side a quarter turn clockwise.
    #[must_use]
    pub fn clockwise(self) -> Self {
        match self {
            Side::North => Side::East,
            Side::East => Side::South,
            Side::South => Side::West,
            Side::West => Side::North,
        }
    }

    /// Returns whether the two sides meet at a corner.
    #[must_use]
    pub fn is_adjacent(self, other: Side) -> bool {
        self.clockwise() == other || other.clockwise() == self
    }

    /// Grid offset of the neighbor across this side.
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Side::North => (0, -1),
            Side::East => (1, 0),
            Side::South => (0, 1),
            Side::West => (-1, 0),
        }
    }

    /// Midpoint of this side in cell-local coordinates.
    #[must_use]
    pub fn midpoint(self) -> Point2 {
        match self {
            Side::North => Point2::new(0.5, 0.0),
            Side::East => Point2::new(1.0, 0.5),
            Side::South => Point2::new(0.5, 1.0),
            Side::West => Point2::new(0.0, 0.5),
        }
    }

    /// Cell-local corner shared with `other`, or `None` if the sides are not adjacent.
    #[must_use]
    pub fn shared_corner(self, other: Side) -> Option<Point2> {
        if !self.is_adjacent(other) {
            return None;
        }
        let center = Point2::new(0.5, 0.5);
        Some(self.midpoint() + (other.midpoint() - center))
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::North => "north",
            Side::East => "east",
            Side::South => "south",
            Side::West => "west",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_follows_side_offset() {
        let pos = GridPos::new(2, 3);
        assert_eq!(pos.neighbor(Side::North), GridPos::new(2, 2));
        assert_eq!(pos.neighbor(Side::East), GridPos::new(3, 3));
        assert_eq!(pos.neighbor(Side::South), GridPos::new(2, 4));
        assert_eq!(pos.neighbor(Side::West), GridPos::new(1, 3));
    }

    #[test]
    fn display_matches_key_format() {
        assert_eq!(GridPos::new(-1, 4).to_string(), "-1,4");
    }

    #[test]
    fn coordinates_floor_into_cells() {
        assert_eq!(
            tile_position_from_coordinates(&Point2::new(1.5, 0.2)),
            GridPos::new(1, 0)
        );
        assert_eq!(
            tile_position_from_coordinates(&Point2::new(-0.1, 2.0)),
            GridPos::new(-1, 2)
        );
    }

    #[test]
    fn opposite_and_adjacent_sides() {
        for side in Side::ALL {
            assert_eq!(side.opposite().opposite(), side);
            assert!(!side.is_adjacent(side.opposite()));
            assert!(side.is_adjacent(side.clockwise()));
        }
    }

    #[test]
    fn shared_corner_of_west_and_south() {
        assert_eq!(
            Side::West.shared_corner(Side::South),
            Some(Point2::new(0.0, 1.0))
        );
        assert_eq!(
            Side::North.shared_corner(Side::East),
            Some(Point2::new(1.0, 0.0))
        );
        assert_eq!(Side::North.shared_corner(Side::South), None);
    }
}
