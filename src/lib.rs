//! Flappy Rounds - turn-based multiplayer Flappy Bird.
//!
//! The library holds the whole game: geometry and scheduling in [`core`],
//! bird and pipe simulation in [`flappy`], turn and round bookkeeping in
//! [`rounds`] and the phase state machine in [`game`]. The terminal binary
//! adds setup prompts, key bindings and drawing on top.

pub mod core;
pub mod flappy;
pub mod game;
pub mod input;
pub mod rounds;
pub mod setup;
pub mod ui;
pub mod utils;

pub use crate::core::GameConfig;
pub use game::{Action, Match, Phase};
