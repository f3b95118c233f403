//! Runs a train around a small loop of track and prints where it is each tick.
//!
//! Usage:
//! ```text
//! cargo run --example simulate                        # 40 ticks
//! cargo run --example simulate -- 200                 # 200 ticks
//! RUST_LOG=switchyard=debug cargo run --example simulate
//! ```

use switchyard::layout::Playspace;
use switchyard::math::{GridPos, Rotation};
use switchyard::operations::control::{AddCar, PlaceTrain, SetSpeed};
use switchyard::operations::traversal::Tick;
use switchyard::tile::{Tile, TileKind, Traversable};
use switchyard::Result;

const DT: f64 = 0.25;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for switchyard.
    // Override with RUST_LOG env var (e.g. RUST_LOG=switchyard=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("switchyard=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let ticks: usize = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(40);

    let mut space = Playspace::new();
    space.load_tiles(loop_layout()?);

    let train = PlaceTrain::new(GridPos::new(1, 0)).execute(&mut space)?;
    AddCar::new(train).execute(&mut space)?;
    SetSpeed::new(train, 60.0).execute(&mut space)?;

    for tick in 0..ticks {
        let report = Tick::new(DT).execute(&mut space)?;
        let state = space.train(train)?;
        let tile = space.tile(state.tile_position)?;
        let at = tile.travel(state.step, state.entry_point)?;
        println!(
            "{tick:>4}  tile {:>5}  step {:>2}/{:<2}  ({:.3}, {:.3})  heading {:>6.1}",
            state.tile_position.to_string(),
            state.step,
            tile.total_steps(),
            at.point.x,
            at.point.y,
            at.angle,
        );
        if !report.stalled.is_empty() {
            println!("train stalled");
            break;
        }
    }
    Ok(())
}

/// A 3x3 ring: straights along the edges, curves in the corners.
fn loop_layout() -> Result<Vec<Tile>> {
    let curve = |x, y, rotation| -> Result<Tile> {
        Ok(Tile::new(TileKind::Curve, GridPos::new(x, y))?.with_rotation(rotation)?)
    };
    let straight = |x, y, rotation| -> Result<Tile> {
        Ok(Tile::new(TileKind::Straight, GridPos::new(x, y))?.with_rotation(rotation)?)
    };

    Ok(vec![
        curve(0, 0, Rotation::Deg270)?,
        straight(1, 0, Rotation::Deg0)?,
        curve(2, 0, Rotation::Deg0)?,
        straight(2, 1, Rotation::Deg90)?,
        curve(2, 2, Rotation::Deg90)?,
        straight(1, 2, Rotation::Deg0)?,
        curve(0, 2, Rotation::Deg180)?,
        straight(0, 1, Rotation::Deg90)?,
    ])
}
