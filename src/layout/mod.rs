use std::collections::HashMap;
use std::hash::BuildHasher;

use slotmap::SlotMap;

use crate::error::LayoutError;
use crate::math::{tile_position_from_coordinates, GridPos, Point2};
use crate::tile::{Tile, Traversable};
use crate::train::{Train, TrainId};

/// Tiles keyed by their grid position, at most one per cell.
pub type TileMap = HashMap<GridPos, Tile>;

/// Read-only access to tiles by grid position.
pub trait TileLookup {
    type Tile: Traversable;

    /// Returns the tile at `position`, if any.
    fn tile_at(&self, position: GridPos) -> Option<&Self::Tile>;
}

impl<T: Traversable, S: BuildHasher> TileLookup for HashMap<GridPos, T, S> {
    type Tile = T;

    fn tile_at(&self, position: GridPos) -> Option<&T> {
        self.get(&position)
    }
}

/// Central store for the track layout and the trains running on it.
///
/// Trains reference tiles by position only; removing a tile does not touch
/// the trains on it.
#[derive(Debug, Default)]
pub struct Playspace {
    tiles: TileMap,
    trains: SlotMap<TrainId, Train>,
}

impl Playspace {
    /// Creates a new, empty playspace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Tile operations ---

    /// Places a tile, replacing and returning whatever occupied its cell.
    pub fn insert_tile(&mut self, tile: Tile) -> Option<Tile> {
        self.tiles.insert(tile.position(), tile)
    }

    /// Replaces the whole layout with `tiles`.
    pub fn load_tiles(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.tiles = tiles.into_iter().map(|t| (t.position(), t)).collect();
    }

    /// Returns the tile at `position`.
    ///
    /// # Errors
    ///
    /// Returns an error if no tile occupies the cell.
    pub fn tile(&self, position: GridPos) -> Result<&Tile, LayoutError> {
        self.tiles
            .get(&position)
            .ok_or(LayoutError::TileNotFound(position))
    }

    /// Returns the tile whose cell contains the world coordinate.
    #[must_use]
    pub fn tile_by_coordinates(&self, point: &Point2) -> Option<&Tile> {
        self.tiles.get(&tile_position_from_coordinates(point))
    }

    /// Removes and returns the tile at `position`.
    ///
    /// # Errors
    ///
    /// Returns an error if no tile occupies the cell.
    pub fn remove_tile(&mut self, position: GridPos) -> Result<Tile, LayoutError> {
        self.tiles
            .remove(&position)
            .ok_or(LayoutError::TileNotFound(position))
    }

    /// Iterates over all tiles in no particular order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Returns the underlying tile map.
    #[must_use]
    pub fn tile_map(&self) -> &TileMap {
        &self.tiles
    }

    // --- Train operations ---

    /// Inserts a train built from its freshly assigned ID and returns the ID.
    pub fn add_train(&mut self, make: impl FnOnce(TrainId) -> Train) -> TrainId {
        self.trains.insert_with_key(make)
    }

    /// Returns the train with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the train is not in the playspace.
    pub fn train(&self, id: TrainId) -> Result<&Train, LayoutError> {
        self.trains.get(id).ok_or(LayoutError::TrainNotFound)
    }

    /// Stores `train` in place of the train with the same ID, returning the old value.
    ///
    /// # Errors
    ///
    /// Returns an error if the train is not in the playspace.
    pub fn replace_train(&mut self, train: Train) -> Result<Train, LayoutError> {
        let slot = self
            .trains
            .get_mut(train.id)
            .ok_or(LayoutError::TrainNotFound)?;
        Ok(std::mem::replace(slot, train))
    }

    /// Removes and returns the train with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the train is not in the playspace.
    pub fn remove_train(&mut self, id: TrainId) -> Result<Train, LayoutError> {
        self.trains.remove(id).ok_or(LayoutError::TrainNotFound)
    }

    /// Iterates over all trains.
    pub fn trains(&self) -> impl Iterator<Item = &Train> {
        self.trains.values()
    }
}

impl TileLookup for Playspace {
    type Tile = Tile;

    fn tile_at(&self, position: GridPos) -> Option<&Tile> {
        self.tiles.get(&position)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Side;
    use crate::tile::TileKind;

    fn straight(x: i32, y: i32) -> Tile {
        Tile::new(TileKind::Straight, GridPos::new(x, y)).unwrap()
    }

    #[test]
    fn one_tile_per_cell() {
        let mut space = Playspace::new();
        assert!(space.insert_tile(straight(0, 0)).is_none());
        let curve = Tile::new(TileKind::Curve, GridPos::new(0, 0)).unwrap();
        let old = space.insert_tile(curve).unwrap();
        assert_eq!(old.kind(), TileKind::Straight);
        assert_eq!(space.tiles().count(), 1);
        assert_eq!(space.tile(GridPos::new(0, 0)).unwrap().kind(), TileKind::Curve);
    }

    #[test]
    fn load_replaces_layout() {
        let mut space = Playspace::new();
        space.insert_tile(straight(9, 9));
        space.load_tiles(vec![straight(0, 0), straight(1, 0)]);
        assert_eq!(space.tiles().count(), 2);
        assert_eq!(
            space.tile(GridPos::new(9, 9)),
            Err(LayoutError::TileNotFound(GridPos::new(9, 9)))
        );
    }

    #[test]
    fn select_by_coordinates() {
        let mut space = Playspace::new();
        space.insert_tile(straight(2, 3));
        let found = space.tile_by_coordinates(&Point2::new(2.7, 3.1)).unwrap();
        assert_eq!(found.position(), GridPos::new(2, 3));
        assert!(space.tile_by_coordinates(&Point2::new(1.9, 3.1)).is_none());
    }

    #[test]
    fn remove_missing_tile() {
        let mut space = Playspace::new();
        assert!(space.remove_tile(GridPos::new(0, 0)).is_err());
        space.insert_tile(straight(0, 0));
        assert!(space.remove_tile(GridPos::new(0, 0)).is_ok());
        assert!(space.tile_at(GridPos::new(0, 0)).is_none());
    }

    #[test]
    fn train_lifecycle() {
        let mut space = Playspace::new();
        let id = space.add_train(|id| Train::new(id, GridPos::new(0, 0), Side::West, 10));
        assert_eq!(space.train(id).unwrap().id, id);

        let faster = space.train(id).unwrap().with_speed(4.0);
        let old = space.replace_train(faster).unwrap();
        assert!(old.is_stopped());
        assert!(!space.train(id).unwrap().is_stopped());

        space.remove_train(id).unwrap();
        assert_eq!(space.train(id), Err(LayoutError::TrainNotFound));
        assert_eq!(space.trains().count(), 0);
    }
}
