mod kind;

pub use kind::TileKind;

use std::f64::consts::PI;

use crate::error::GeometryError;
use crate::geometry::{Segment, TrackShape, TravelPoint};
use crate::math::polar::{degrees_from_radians, reflect_over};
use crate::math::{GridPos, Point2, Rotation, Side};

/// An entry point is one of the connection points of a tile's active path.
pub type EntryPoint = Side;

/// The connectivity contract a tile exposes to the traversal engine.
///
/// Step `0` sits at the entry point and `total_steps()` at the opposite end of
/// the active path.
pub trait Traversable {
    /// Number of steps along the active path.
    fn total_steps(&self) -> i64;

    /// Maps a step and entry point to world coordinates and heading.
    ///
    /// Steps outside `[0, total_steps()]` extrapolate past the ends.
    ///
    /// # Errors
    ///
    /// Returns an error if `entry` is not an end of the active path.
    fn travel(&self, step: i64, entry: EntryPoint) -> Result<TravelPoint, GeometryError>;

    /// Grid position of the cell reached by travelling toward increasing steps.
    ///
    /// # Errors
    ///
    /// Returns an error if `entry` is not an end of the active path.
    fn next_tile_position(&self, entry: EntryPoint) -> Result<GridPos, GeometryError>;

    /// Grid position of the cell reached by travelling toward decreasing steps.
    ///
    /// # Errors
    ///
    /// Returns an error if `entry` is not an end of the active path.
    fn previous_tile_position(&self, entry: EntryPoint) -> Result<GridPos, GeometryError>;

    /// Finds the entry point matching a boundary coordinate for a train moving with `speed`.
    ///
    /// A forward-moving train enters at the matched connection; a reversing train
    /// enters so that the matched connection sits at the far end of the path.
    /// Returns `None` when no connection lies within `snap_radius` or the
    /// train is not moving.
    fn reference_point(&self, coords: &Point2, speed: f64, snap_radius: f64)
        -> Option<EntryPoint>;
}

/// One grid cell's piece of track.
///
/// Tiles are values: rotating a tile or switching its route produces a new tile.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    position: GridPos,
    kind: TileKind,
    rotation: Rotation,
    segments: Vec<Segment>,
    selected_segment: usize,
    /// The selected segment with the rotation applied.
    active: Segment,
}

impl Tile {
    /// Creates an unrotated tile of the given kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the kind's routes cannot be built.
    pub fn new(kind: TileKind, position: GridPos) -> Result<Self, GeometryError> {
        Self::from_segments(kind, position, Rotation::Deg0, kind.default_segments()?, 0)
    }

    /// Creates a tile from explicit routes.
    ///
    /// # Errors
    ///
    /// Returns an error if `segments` is empty or `selected_segment` is out of range.
    pub fn from_segments(
        kind: TileKind,
        position: GridPos,
        rotation: Rotation,
        segments: Vec<Segment>,
        selected_segment: usize,
    ) -> Result<Self, GeometryError> {
        if segments.is_empty() {
            return Err(GeometryError::NoSegments);
        }
        let selected = segments
            .get(selected_segment)
            .ok_or(GeometryError::SegmentOutOfRange {
                index: selected_segment,
                len: segments.len(),
            })?;
        let active = selected.rotated(rotation)?;
        Ok(Self {
            position,
            kind,
            rotation,
            segments,
            selected_segment,
            active,
        })
    }

    #[must_use]
    pub fn position(&self) -> GridPos {
        self.position
    }

    #[must_use]
    pub fn kind(&self) -> TileKind {
        self.kind
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Returns the unrotated routes of this tile.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn selected_segment(&self) -> usize {
        self.selected_segment
    }

    /// Returns the selected route with the tile's rotation applied.
    #[must_use]
    pub fn active_segment(&self) -> &Segment {
        &self.active
    }

    /// The entry point a newly placed train starts from.
    #[must_use]
    pub fn default_entry_point(&self) -> EntryPoint {
        self.active.ends()[0]
    }

    /// Returns a copy of this tile with a different rotation.
    ///
    /// # Errors
    ///
    /// Never fails for a valid tile.
    pub fn with_rotation(&self, rotation: Rotation) -> Result<Self, GeometryError> {
        Self::from_segments(
            self.kind,
            self.position,
            rotation,
            self.segments.clone(),
            self.selected_segment,
        )
    }

    /// Returns a copy of this tile with a different route selected.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn with_selected_segment(&self, index: usize) -> Result<Self, GeometryError> {
        Self::from_segments(
            self.kind,
            self.position,
            self.rotation,
            self.segments.clone(),
            index,
        )
    }

    /// Returns a copy of this tile with the next route selected, wrapping to the first.
    ///
    /// # Errors
    ///
    /// Never fails for a valid tile.
    pub fn with_next_segment(&self) -> Result<Self, GeometryError> {
        self.with_selected_segment((self.selected_segment + 1) % self.segments.len())
    }

    /// World coordinates of a connection point of this cell.
    #[must_use]
    pub fn connection_point(&self, side: Side) -> Point2 {
        self.position.origin() + side.midpoint().coords
    }

    fn exit_for(&self, entry: EntryPoint) -> Result<Side, GeometryError> {
        self.active
            .other_end(entry)
            .ok_or(GeometryError::EntryPointNotOnPath { entry })
    }
}

impl Traversable for Tile {
    fn total_steps(&self) -> i64 {
        i64::from(self.active.total_steps())
    }

    #[allow(clippy::cast_precision_loss)]
    fn travel(&self, step: i64, entry: EntryPoint) -> Result<TravelPoint, GeometryError> {
        self.exit_for(entry)?;
        let total = f64::from(self.active.total_steps());
        let step = step as f64;

        // Paths are oriented from their first end; entering at the second end
        // walks the same path mirrored around its middle step.
        let reversed = entry != self.active.ends()[0];
        let t = if reversed {
            reflect_over(step, total / 2.0) / total
        } else {
            step / total
        };

        let path = self.active.path();
        let mut heading = path.heading(t);
        if reversed {
            heading += PI;
        }

        Ok(TravelPoint {
            point: self.position.origin() + path.evaluate(t).coords,
            angle: degrees_from_radians(heading).rem_euclid(360.0),
        })
    }

    fn next_tile_position(&self, entry: EntryPoint) -> Result<GridPos, GeometryError> {
        Ok(self.position.neighbor(self.exit_for(entry)?))
    }

    fn previous_tile_position(&self, entry: EntryPoint) -> Result<GridPos, GeometryError> {
        self.exit_for(entry)?;
        Ok(self.position.neighbor(entry))
    }

    fn reference_point(
        &self,
        coords: &Point2,
        speed: f64,
        snap_radius: f64,
    ) -> Option<EntryPoint> {
        let matched = self
            .active
            .ends()
            .into_iter()
            .map(|side| (side, (self.connection_point(side) - coords).norm()))
            .filter(|&(_, dist)| dist <= snap_radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(side, _)| side)?;

        if speed > 0.0 {
            Some(matched)
        } else if speed < 0.0 {
            self.active.other_end(matched)
        } else {
            None
        }
    }
}
