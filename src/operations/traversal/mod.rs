mod advance;
mod tick;

pub use advance::Advance;
pub use tick::{Tick, TickReport};
