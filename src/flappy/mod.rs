//! Flappy Bird entities and per-frame simulation.
//!
//! The bird falls under constant gravity and is kicked upward by flaps while
//! pipe pairs scroll in from the right. Everything here works on plain data
//! and a [`GameConfig`](crate::core::GameConfig); phase control lives in
//! [`crate::game`].

pub mod physics;
pub mod spawner;
pub mod types;

pub use physics::{step, FrameResult, TurnEnd};
pub use spawner::{random_top_y, spawn_pair};
pub use types::{Bird, Pipe, PipeKind};
