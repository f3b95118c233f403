use crate::math::GridPos;
use crate::tile::EntryPoint;

slotmap::new_key_type! {
    /// Unique identifier for a train in the playspace.
    pub struct TrainId;
}

/// Where a train is and how it moves.
///
/// Trains are values. Every change, including coupling cars, produces a new
/// `Train` that replaces the stored one.
#[derive(Debug, Clone, PartialEq)]
pub struct Train {
    pub id: TrainId,
    /// Grid position of the tile the train occupies.
    pub tile_position: GridPos,
    /// Connection point of the current tile that anchors step 0.
    pub entry_point: EntryPoint,
    /// Progress along the tile's active path.
    pub step: i64,
    /// Signed steps per unit time; positive moves toward increasing steps.
    pub speed: f64,
    /// Number of attached cars.
    pub cars: u32,
}

impl Train {
    /// Creates a stopped train with no cars.
    #[must_use]
    pub fn new(id: TrainId, tile_position: GridPos, entry_point: EntryPoint, step: i64) -> Self {
        Self {
            id,
            tile_position,
            entry_point,
            step,
            speed: 0.0,
            cars: 0,
        }
    }

    #[must_use]
    pub fn with_speed(&self, speed: f64) -> Self {
        Self {
            speed,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_car_added(&self) -> Self {
        Self {
            cars: self.cars.saturating_add(1),
            ..self.clone()
        }
    }

    /// Removes one car, never going below zero.
    #[must_use]
    pub fn with_car_removed(&self) -> Self {
        Self {
            cars: self.cars.saturating_sub(1),
            ..self.clone()
        }
    }

    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_stopped(&self) -> bool {
        self.speed == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Side;

    fn train() -> Train {
        Train::new(TrainId::default(), GridPos::new(0, 0), Side::West, 10)
    }

    #[test]
    fn new_train_is_stopped() {
        let t = train();
        assert!(t.is_stopped());
        assert_eq!(t.cars, 0);
        assert_eq!(t.step, 10);
    }

    #[test]
    fn car_count_saturates_at_zero() {
        let t = train().with_car_removed();
        assert_eq!(t.cars, 0);
        let t = t.with_car_added().with_car_added().with_car_removed();
        assert_eq!(t.cars, 1);
    }

    #[test]
    fn with_speed_keeps_position() {
        let t = train();
        let moving = t.with_speed(-3.0);
        assert!(!moving.is_stopped());
        assert_eq!(moving.tile_position, t.tile_position);
        assert_eq!(moving.step, t.step);
        assert!(t.is_stopped());
    }
}
