pub mod control;
pub mod edit;
pub mod traversal;

use crate::error::OperationError;

/// Parameters controlling how trains are placed and moved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraversalParams {
    /// Maximum distance, in tiles, between a boundary point and a connection
    /// point for the two to count as the same connection.
    pub snap_radius: f64,
    /// Step at which a newly placed train starts.
    pub placement_step: i64,
    /// Largest speed magnitude a train can be set to.
    pub max_speed: f64,
}

impl Default for TraversalParams {
    fn default() -> Self {
        Self {
            snap_radius: 0.25,
            placement_step: 10,
            max_speed: 100.0,
        }
    }
}

impl TraversalParams {
    /// Checks that the parameters are usable.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is non-finite, non-positive, or negative.
    pub fn validate(&self) -> Result<(), OperationError> {
        if !self.snap_radius.is_finite() || self.snap_radius <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "snap radius must be positive, got {}",
                self.snap_radius
            )));
        }
        if !self.max_speed.is_finite() || self.max_speed <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "max speed must be positive, got {}",
                self.max_speed
            )));
        }
        if self.placement_step < 0 {
            return Err(OperationError::InvalidInput(format!(
                "placement step must not be negative, got {}",
                self.placement_step
            )));
        }
        Ok(())
    }
}
