use tracing::debug;

use crate::error::Result;
use crate::layout::Playspace;
use crate::math::{GridPos, Rotation};
use crate::train::Train;

/// Turns a tile a quarter turn clockwise.
///
/// Trains standing on the tile turn with it, so their entry points stay on
/// the tile's path.
pub struct RotateTile {
    position: GridPos,
}

impl RotateTile {
    /// Creates a new `RotateTile` operation.
    #[must_use]
    pub fn new(position: GridPos) -> Self {
        Self { position }
    }

    /// Executes the rotation, replacing the tile in the playspace.
    ///
    /// # Errors
    ///
    /// Returns an error if no tile occupies the position.
    pub fn execute(&self, space: &mut Playspace) -> Result<()> {
        let tile = space.tile(self.position)?;
        let rotated = tile.with_rotation(tile.rotation().next())?;

        let turned: Vec<Train> = space
            .trains()
            .filter(|t| t.tile_position == self.position)
            .map(|t| Train {
                entry_point: Rotation::Deg90.apply(t.entry_point),
                ..t.clone()
            })
            .collect();

        debug!(
            tile = %self.position,
            rotation = rotated.rotation().degrees(),
            trains = turned.len(),
            "rotated tile"
        );
        space.insert_tile(rotated);
        for train in turned {
            space.replace_train(train)?;
        }
        Ok(())
    }
}
