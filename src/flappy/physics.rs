//! Per-frame physics: gravity, scrolling, scoring and collision.

use super::types::{Bird, Pipe};
use crate::core::{intersects, GameConfig};

/// Why a turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEnd {
    /// The bird hit a pipe.
    Collision,
    /// The bird dropped below the bottom of the board.
    FellOut,
}

/// What one frame did.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameResult {
    /// Pipes newly marked as passed this frame.
    pub pipes_passed: u32,
    pub turn_end: Option<TurnEnd>,
}

/// Advance the bird and every pipe by one frame, adding to `score` for each
/// pipe the bird clears.
///
/// Pipes are checked in spawn order and the first collision stops the frame,
/// so pipes after it are neither moved nor scored.
pub fn step(
    bird: &mut Bird,
    pipes: &mut Vec<Pipe>,
    score: &mut f64,
    config: &GameConfig,
) -> FrameResult {
    let mut result = FrameResult::default();

    bird.velocity += config.gravity;
    bird.y += bird.velocity;
    // Ceiling clamp only; falling out the bottom is the loss condition
    bird.y = bird.y.max(0);

    let bird_rect = bird.rect();
    for pipe in pipes.iter_mut() {
        pipe.x += config.scroll_velocity;

        if !pipe.passed && bird.x > pipe.right() {
            pipe.passed = true;
            *score += config.score_per_pipe;
            result.pipes_passed += 1;
        }

        if intersects(&bird_rect, &pipe.rect()) {
            result.turn_end = Some(TurnEnd::Collision);
            return result;
        }
    }

    // Passed pipes left of the board can never score or collide again
    pipes.retain(|pipe| !(pipe.passed && pipe.right() < 0));

    if bird.y > config.board_height {
        result.turn_end = Some(TurnEnd::FellOut);
    }

    result
}
