//! Core building blocks shared by the match logic: tuning constants, the
//! game configuration, rectangle geometry and the periodic task scheduler.

pub mod config;
pub mod constants;
pub mod geometry;
pub mod scheduler;

pub use config::GameConfig;
pub use constants::*;
pub use geometry::{intersects, Rect};
pub use scheduler::{IntervalScheduler, Scheduler, Task};
