use crate::error::Result;
use crate::layout::Playspace;
use crate::train::TrainId;

/// Couples one more car to a train.
pub struct AddCar {
    train: TrainId,
}

impl AddCar {
    /// Creates a new `AddCar` operation.
    #[must_use]
    pub fn new(train: TrainId) -> Self {
        Self { train }
    }

    /// Executes the operation, returning the new car count.
    ///
    /// # Errors
    ///
    /// Returns an error if the train is not in the playspace.
    pub fn execute(&self, space: &mut Playspace) -> Result<u32> {
        let updated = space.train(self.train)?.with_car_added();
        let cars = updated.cars;
        space.replace_train(updated)?;
        Ok(cars)
    }
}

/// Uncouples one car from a train. A train without cars is left as is.
pub struct RemoveCar {
    train: TrainId,
}

impl RemoveCar {
    /// Creates a new `RemoveCar` operation.
    #[must_use]
    pub fn new(train: TrainId) -> Self {
        Self { train }
    }

    /// Executes the operation, returning the new car count.
    ///
    /// # Errors
    ///
    /// Returns an error if the train is not in the playspace.
    pub fn execute(&self, space: &mut Playspace) -> Result<u32> {
        let updated = space.train(self.train)?.with_car_removed();
        let cars = updated.cars;
        space.replace_train(updated)?;
        Ok(cars)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{GridPos, Side};
    use crate::train::Train;

    #[test]
    fn cars_added_and_removed() {
        let mut space = Playspace::new();
        let id = space.add_train(|id| Train::new(id, GridPos::new(0, 0), Side::West, 10));
        assert_eq!(AddCar::new(id).execute(&mut space).unwrap(), 1);
        assert_eq!(AddCar::new(id).execute(&mut space).unwrap(), 2);
        assert_eq!(RemoveCar::new(id).execute(&mut space).unwrap(), 1);
        assert_eq!(space.train(id).unwrap().cars, 1);
        assert_eq!(space.train(id).unwrap().step, 10);
    }

    #[test]
    fn removing_from_empty_train() {
        let mut space = Playspace::new();
        let id = space.add_train(|id| Train::new(id, GridPos::new(0, 0), Side::West, 10));
        assert_eq!(RemoveCar::new(id).execute(&mut space).unwrap(), 0);
    }
}
