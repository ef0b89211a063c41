//! Bird and pipe data structures.

use crate::core::{GameConfig, Rect};

/// The player-controlled sprite. Only `y` and `velocity` change during play.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Vertical velocity in units/frame (positive = downward).
    pub velocity: i32,
}

impl Bird {
    /// A bird at rest at the start position.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_start_x(),
            y: config.bird_start_y(),
            width: config.bird_width,
            height: config.bird_height,
            velocity: 0,
        }
    }

    /// Back to the start position with zero velocity.
    pub fn reset(&mut self, config: &GameConfig) {
        self.y = config.bird_start_y();
        self.velocity = 0;
    }

    /// Overrides the velocity; a flap is not additive.
    pub fn flap(&mut self, config: &GameConfig) {
        self.velocity = config.flap_velocity;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Which half of a pair a pipe is. Only the renderer cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeKind {
    Top,
    Bottom,
}

/// One obstacle. Pairs share a gap but are tracked independently.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub kind: PipeKind,
    /// X position, decreasing as the pipe scrolls.
    pub x: i32,
    /// Y position, fixed at spawn.
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Whether the bird has cleared this pipe (scored once).
    pub passed: bool,
}

impl Pipe {
    /// A fresh pipe at the right edge of the board.
    pub fn new(config: &GameConfig, kind: PipeKind, y: i32) -> Self {
        Self {
            kind,
            x: config.board_width,
            y,
            width: config.pipe_width,
            height: config.pipe_height,
            passed: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }
}
