//! Match state machine.
//!
//! A [`Match`] owns the bird, the live pipes, the turn sequencer, the random
//! source and the scheduler, and is the only place any of them change. Input
//! arrives as [`Action`]s, time arrives as physics and spawn ticks.

pub mod action;
pub mod state;

pub use action::Action;
pub use state::{AdvanceReport, FinalStandings, Match, Phase, TickOutcome};
