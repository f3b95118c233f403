pub mod error;
pub mod geometry;
pub mod layout;
pub mod math;
pub mod operations;
pub mod tile;
pub mod train;

pub use error::{Result, SwitchyardError};
