//! Walks a player sprite across a small level and reports what it hits.
//!
//! Run with `cargo run --example playground`; set `RUST_LOG=debug` for
//! per-step output.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use vecrec::math::interpolate;
use vecrec::{Alignment, Anchor, Rect, Vector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let level = Rect::from_size(64.0, 36.0);
    let floor = Rect::from_size(level.width(), 2.0);
    let wall = Rect::from_size(2.0, 12.0)
        .aligned_to(Alignment::Right, &level)
        .aligned_to(Alignment::Bottom, &floor.with_bottom(floor.top()));
    info!(%level, %floor, %wall, "level built");

    let mut rng = StdRng::seed_from_u64(7);
    let coins: Vec<Vector> = (0..5).map(|_| level.shrunk(4.0).random_point(&mut rng)).collect();

    let player = Rect::from_square(3.0).moved_to(Anchor::BottomCenter, (4.0, floor.top()));
    let target = Vector::new(level.right() - 4.0, floor.top());
    let path = interpolate(player.bottom_center(), target, 16)?;

    let mut collected = 0;
    for (step, foot) in path.into_iter().enumerate() {
        let sprite = player.moved_to(Anchor::BottomCenter, foot);
        debug!(step, %sprite, "moved");

        if sprite.overlaps(&wall) {
            warn!(step, %sprite, "blocked by wall");
            break;
        }
        for coin in coins.iter().filter(|c| sprite.contains(**c)) {
            collected += 1;
            info!(step, %coin, "coin collected");
        }
    }

    let heading = (target - player.center()).unit()?;
    info!(
        collected,
        heading = %heading.rounded(3),
        degrees = heading.degrees(),
        "walk finished"
    );
    Ok(())
}
