mod rotate_tile;
mod toggle_segment;

pub use rotate_tile::RotateTile;
pub use toggle_segment::ToggleSegment;
