//! Turn and round bookkeeping for a multiplayer match.
//!
//! Players take one turn each per round. Each finished turn adds its score to
//! that player's running total; when the last player of the last round is
//! done the match is complete and the standings decide the winners.

pub mod sequencer;
pub mod standings;

pub use sequencer::{Advance, TurnSequencer, TurnSlot};
pub use standings::Standings;
