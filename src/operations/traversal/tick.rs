use tracing::info;

use crate::error::{OperationError, Result};
use crate::layout::Playspace;
use crate::operations::TraversalParams;
use crate::train::{Train, TrainId};

use super::Advance;

/// Summary of one simulation tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Number of trains advanced.
    pub advanced: usize,
    /// Trains that were moving before the tick and stalled during it.
    pub stalled: Vec<TrainId>,
}

/// Advances every train in the playspace by `round(speed * dt)` steps.
///
/// All new states are computed against the same layout before any of them is
/// stored, so the order trains are visited in does not matter.
pub struct Tick {
    dt: f64,
    params: TraversalParams,
}

impl Tick {
    /// Creates a new `Tick` covering `dt` units of time.
    #[must_use]
    pub fn new(dt: f64) -> Self {
        Self {
            dt,
            params: TraversalParams::default(),
        }
    }

    /// Uses `params` instead of the defaults.
    #[must_use]
    pub fn with_params(mut self, params: TraversalParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the tick, replacing every train with its advanced state.
    ///
    /// # Errors
    ///
    /// Returns an error if `dt` is negative or non-finite, or if any train
    /// cannot be advanced. On error no train is updated.
    pub fn execute(&self, space: &mut Playspace) -> Result<TickReport> {
        if !self.dt.is_finite() || self.dt < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "tick duration must be a non-negative number, got {}",
                self.dt
            ))
            .into());
        }

        let snapshot: &Playspace = space;
        let moved = snapshot
            .trains()
            .map(|train| {
                let next = Advance::new(train, steps_for(train.speed, self.dt))
                    .with_params(self.params)
                    .execute(snapshot)?;
                Ok((train.is_stopped(), next))
            })
            .collect::<Result<Vec<(bool, Train)>>>()?;

        let mut report = TickReport::default();
        for (was_stopped, train) in moved {
            if !was_stopped && train.is_stopped() {
                report.stalled.push(train.id);
            }
            report.advanced += 1;
            space.replace_train(train)?;
        }

        info!(
            advanced = report.advanced,
            stalled = report.stalled.len(),
            "tick"
        );
        Ok(report)
    }
}

/// Whole steps covered at `speed` over `dt`.
#[allow(clippy::cast_possible_truncation)]
fn steps_for(speed: f64, dt: f64) -> i64 {
    (speed * dt).round() as i64
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{LayoutError, SwitchyardError};
    use crate::math::{GridPos, Side};
    use crate::tile::{Tile, TileKind};

    fn line(space: &mut Playspace, len: i32) {
        for x in 0..len {
            space.insert_tile(Tile::new(TileKind::Straight, GridPos::new(x, 0)).unwrap());
        }
    }

    #[test]
    fn steps_round_to_nearest() {
        assert_eq!(steps_for(10.0, 0.26), 3);
        assert_eq!(steps_for(-10.0, 0.26), -3);
        assert_eq!(steps_for(0.0, 5.0), 0);
    }

    #[test]
    fn trains_advance_independently() {
        let mut space = Playspace::new();
        line(&mut space, 3);
        let fast = space.add_train(|id| {
            Train::new(id, GridPos::new(0, 0), Side::West, 10).with_speed(20.0)
        });
        let slow = space.add_train(|id| {
            Train::new(id, GridPos::new(2, 0), Side::West, 10).with_speed(-5.0)
        });

        let report = Tick::new(2.0).execute(&mut space).unwrap();
        assert_eq!(report.advanced, 2);
        assert!(report.stalled.is_empty());

        let fast = space.train(fast).unwrap();
        assert_eq!(fast.tile_position, GridPos::new(1, 0));
        assert_eq!(fast.step, 10);
        let slow = space.train(slow).unwrap();
        assert_eq!(slow.tile_position, GridPos::new(2, 0));
        assert_eq!(slow.step, 0);
    }

    #[test]
    fn reports_trains_that_stall() {
        let mut space = Playspace::new();
        line(&mut space, 1);
        let id = space.add_train(|id| {
            Train::new(id, GridPos::new(0, 0), Side::West, 35).with_speed(10.0)
        });
        let parked = space.add_train(|id| Train::new(id, GridPos::new(0, 0), Side::West, 5));

        let report = Tick::new(1.0).execute(&mut space).unwrap();
        assert_eq!(report.stalled, vec![id]);
        assert_eq!(space.train(id).unwrap().step, 40);
        assert_eq!(space.train(parked).unwrap().step, 5);
    }

    #[test]
    fn train_laps_a_ring_of_track() {
        use crate::math::Rotation;

        let piece = |kind, x, y, rotation| {
            Tile::new(kind, GridPos::new(x, y))
                .unwrap()
                .with_rotation(rotation)
                .unwrap()
        };
        let mut space = Playspace::new();
        space.load_tiles([
            piece(TileKind::Curve, 0, 0, Rotation::Deg270),
            piece(TileKind::Straight, 1, 0, Rotation::Deg0),
            piece(TileKind::Curve, 2, 0, Rotation::Deg0),
            piece(TileKind::Straight, 2, 1, Rotation::Deg90),
            piece(TileKind::Curve, 2, 2, Rotation::Deg90),
            piece(TileKind::Straight, 1, 2, Rotation::Deg0),
            piece(TileKind::Curve, 0, 2, Rotation::Deg180),
            piece(TileKind::Straight, 0, 1, Rotation::Deg90),
        ]);
        let id = space.add_train(|id| {
            Train::new(id, GridPos::new(1, 0), Side::West, 10).with_speed(4.0)
        });

        // Four straights of 40 steps and four curves of 31.
        let lap = 4 * 40 + 4 * 31;
        for _ in 0..lap / 4 {
            let report = Tick::new(1.0).execute(&mut space).unwrap();
            assert!(report.stalled.is_empty());
        }

        let train = space.train(id).unwrap();
        assert_eq!(train.tile_position, GridPos::new(1, 0));
        assert_eq!(train.entry_point, Side::West);
        assert_eq!(train.step, 10);
    }

    #[test]
    fn negative_duration_rejected() {
        let mut space = Playspace::new();
        assert!(Tick::new(-1.0).execute(&mut space).is_err());
        assert!(Tick::new(f64::INFINITY).execute(&mut space).is_err());
    }

    #[test]
    fn missing_tile_leaves_all_trains_untouched() {
        let mut space = Playspace::new();
        line(&mut space, 1);
        let ok = space.add_train(|id| {
            Train::new(id, GridPos::new(0, 0), Side::West, 10).with_speed(1.0)
        });
        space.add_train(|id| Train::new(id, GridPos::new(7, 7), Side::West, 0).with_speed(1.0));

        let err = Tick::new(1.0).execute(&mut space).unwrap_err();
        assert!(matches!(
            err,
            SwitchyardError::Layout(LayoutError::TileNotFound(_))
        ));
        assert_eq!(space.train(ok).unwrap().step, 10);
    }
}
