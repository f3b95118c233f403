use tracing::{debug, trace};

use crate::error::{GeometryError, LayoutError, Result};
use crate::layout::TileLookup;
use crate::math::GridPos;
use crate::operations::TraversalParams;
use crate::tile::{EntryPoint, Traversable};
use crate::train::Train;

/// Moves a train a signed number of steps through the tile layout.
///
/// The train walks its current tile's path; when the destination step falls
/// off either end it is handed to the adjacent tile, entering through the
/// connection point that matches the boundary. The remaining steps carry
/// over, so one call may cross several tiles. When there is no tile ahead, or
/// the tile ahead has no matching connection, the train stalls: it stops at
/// the edge of the tile it is on with its speed set to zero.
///
/// The computation is pure; the input train and tiles are left untouched.
pub struct Advance<'a> {
    train: &'a Train,
    steps: i64,
    params: TraversalParams,
}

impl<'a> Advance<'a> {
    /// Creates a new `Advance` operation with default parameters.
    #[must_use]
    pub fn new(train: &'a Train, steps: i64) -> Self {
        Self {
            train,
            steps,
            params: TraversalParams::default(),
        }
    }

    /// Uses `params` instead of the defaults.
    #[must_use]
    pub fn with_params(mut self, params: TraversalParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the move, returning the train's new state.
    ///
    /// # Errors
    ///
    /// Returns an error if the train's tile is missing from `tiles`, if the
    /// train's entry point is not on the active path of a tile it has to
    /// leave, or if a tile's path has no steps.
    pub fn execute<L: TileLookup>(&self, tiles: &L) -> Result<Train> {
        self.params.validate()?;

        let speed = self.train.speed;
        let mut position = self.train.tile_position;
        let mut entry = self.train.entry_point;
        let mut step = self.train.step;
        let mut budget = self.steps;

        let mut tile = tiles
            .tile_at(position)
            .ok_or(LayoutError::TileNotFound(position))?;

        // Each pass either settles the train, stalls it, or hands it to the
        // next tile with a budget reduced by at least one whole tile.
        loop {
            let total = tile.total_steps();
            if total < 1 {
                return Err(GeometryError::NoSteps.into());
            }

            let dest = step.saturating_add(budget);
            if (0..total).contains(&dest) {
                trace!(train = ?self.train.id, tile = %position, step = dest, "settled");
                return Ok(self.placed(position, entry, dest, speed));
            }

            let forward = dest >= 0;
            let edge = if forward { total } else { 0 };
            let next_position = if forward {
                tile.next_tile_position(entry)?
            } else {
                tile.previous_tile_position(entry)?
            };

            let Some(next_tile) = tiles.tile_at(next_position) else {
                debug!(train = ?self.train.id, tile = %position, toward = %next_position, "stalled: no track ahead");
                return Ok(self.placed(position, entry, edge, 0.0));
            };

            let border_step = if forward { total + 1 } else { -1 };
            let border = tile.travel(border_step, entry)?.point;
            let Some(next_entry) =
                next_tile.reference_point(&border, speed, self.params.snap_radius)
            else {
                debug!(train = ?self.train.id, tile = %position, toward = %next_position, "stalled: track ahead does not connect");
                return Ok(self.placed(position, entry, edge, 0.0));
            };

            budget = if forward {
                dest - total
            } else {
                next_tile.total_steps() + dest
            };
            debug!(
                train = ?self.train.id,
                from = %position,
                to = %next_position,
                entry = %next_entry,
                remaining = budget,
                "crossed tile boundary"
            );

            position = next_position;
            entry = next_entry;
            step = 0;
            tile = next_tile;
        }
    }

    fn placed(&self, tile_position: GridPos, entry_point: EntryPoint, step: i64, speed: f64) -> Train {
        Train {
            tile_position,
            entry_point,
            step,
            speed,
            ..self.train.clone()
        }
    }
}
