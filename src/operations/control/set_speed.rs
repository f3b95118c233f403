use crate::error::{OperationError, Result};
use crate::layout::Playspace;
use crate::operations::TraversalParams;
use crate::train::TrainId;

/// Changes a train's speed, clamped to `[-max_speed, max_speed]`.
///
/// Setting the speed to zero stops the train.
pub struct SetSpeed {
    train: TrainId,
    speed: f64,
    params: TraversalParams,
}

impl SetSpeed {
    /// Creates a new `SetSpeed` operation with default parameters.
    #[must_use]
    pub fn new(train: TrainId, speed: f64) -> Self {
        Self {
            train,
            speed,
            params: TraversalParams::default(),
        }
    }

    /// Creates an operation that stops the train.
    #[must_use]
    pub fn stop(train: TrainId) -> Self {
        Self::new(train, 0.0)
    }

    /// Uses `params` instead of the defaults.
    #[must_use]
    pub fn with_params(mut self, params: TraversalParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the change, returning the speed actually applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the speed is not finite, the parameters are invalid,
    /// or the train is not in the playspace.
    pub fn execute(&self, space: &mut Playspace) -> Result<f64> {
        self.params.validate()?;
        if !self.speed.is_finite() {
            return Err(OperationError::InvalidInput(format!(
                "speed must be finite, got {}",
                self.speed
            ))
            .into());
        }
        let max = self.params.max_speed;
        let speed = self.speed.clamp(-max, max);
        let updated = space.train(self.train)?.with_speed(speed);
        space.replace_train(updated)?;
        Ok(speed)
    }
}
