//! Pipe pair spawning.

use super::types::{Pipe, PipeKind};
use crate::core::GameConfig;
use rand::Rng;

/// Random y for a top pipe: a quarter of the pipe height above the base,
/// minus up to another half pipe height. Truncates toward zero.
pub fn random_top_y<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> i32 {
    let base = (config.pipe_base_y - config.pipe_height / 4) as f64;
    let spread = (config.pipe_height / 2) as f64;
    (base - rng.gen::<f64>() * spread) as i32
}

/// Append a top/bottom pair at the right edge, top first.
pub fn spawn_pair<R: Rng + ?Sized>(pipes: &mut Vec<Pipe>, config: &GameConfig, rng: &mut R) {
    let top_y = random_top_y(config, rng);
    let bottom_y = top_y + config.pipe_height + config.gap_size();

    pipes.push(Pipe::new(config, PipeKind::Top, top_y));
    pipes.push(Pipe::new(config, PipeKind::Bottom, bottom_y));
}
