use tracing::debug;

use crate::error::{LayoutError, Result};
use crate::layout::Playspace;
use crate::math::GridPos;
use crate::tile::Traversable;
use crate::train::Train;

/// Selects a tile's next route, wrapping back to the first.
///
/// Trains on the tile keep their place, clamped to the new route's length.
/// A train whose entry point is not on the new route would be stranded, so the
/// toggle is refused while one is on the tile.
pub struct ToggleSegment {
    position: GridPos,
}

impl ToggleSegment {
    /// Creates a new `ToggleSegment` operation.
    #[must_use]
    pub fn new(position: GridPos) -> Self {
        Self { position }
    }

    /// Executes the toggle, replacing the tile in the playspace.
    ///
    /// # Errors
    ///
    /// Returns an error if no tile occupies the position, or if a train on the
    /// tile entered from a connection the new route does not use.
    pub fn execute(&self, space: &mut Playspace) -> Result<()> {
        let toggled = space.tile(self.position)?.with_next_segment()?;
        let total = toggled.total_steps();

        let rerouted = space
            .trains()
            .filter(|t| t.tile_position == self.position)
            .map(|t| {
                if toggled.active_segment().other_end(t.entry_point).is_none() {
                    return Err(LayoutError::TileOccupied(self.position));
                }
                Ok(Train {
                    step: t.step.min(total),
                    ..t.clone()
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!(
            tile = %self.position,
            segment = toggled.selected_segment(),
            total_steps = total,
            "toggled segment"
        );
        space.insert_tile(toggled);
        for train in rerouted {
            space.replace_train(train)?;
        }
        Ok(())
    }
}
