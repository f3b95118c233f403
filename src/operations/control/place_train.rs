use tracing::debug;

use crate::error::Result;
use crate::layout::Playspace;
use crate::math::GridPos;
use crate::operations::TraversalParams;
use crate::tile::Traversable;
use crate::train::{Train, TrainId};

/// Puts a new, stopped train on a tile.
///
/// The train enters from the tile's default entry point and starts at the
/// placement step, clamped to the tile's path.
pub struct PlaceTrain {
    position: GridPos,
    params: TraversalParams,
}

impl PlaceTrain {
    /// Creates a new `PlaceTrain` operation with default parameters.
    #[must_use]
    pub fn new(position: GridPos) -> Self {
        Self {
            position,
            params: TraversalParams::default(),
        }
    }

    /// Uses `params` instead of the defaults.
    #[must_use]
    pub fn with_params(mut self, params: TraversalParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the placement, returning the new train's ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or no tile occupies the position.
    pub fn execute(&self, space: &mut Playspace) -> Result<TrainId> {
        self.params.validate()?;
        let tile = space.tile(self.position)?;
        let entry = tile.default_entry_point();
        let step = self.params.placement_step.min(tile.total_steps());

        let position = self.position;
        let id = space.add_train(|id| Train::new(id, position, entry, step));
        debug!(train = ?id, tile = %position, %entry, step, "placed train");
        Ok(id)
    }
}
