//! Turn order across players and rounds.

use super::standings::Standings;

/// A (player, round) position in the turn order. Both are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSlot {
    pub player: usize,
    pub round: u32,
}

/// Result of moving past a finished turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Another turn follows.
    NextTurn(TurnSlot),
    /// That was the last turn of the last round.
    Complete,
}

/// Tracks whose turn it is and accumulates finished turns into standings.
#[derive(Debug, Clone)]
pub struct TurnSequencer {
    num_players: usize,
    num_rounds: u32,
    current: TurnSlot,
    standings: Standings,
    complete: bool,
}

impl TurnSequencer {
    /// Both counts must be at least 1.
    pub fn new(num_players: usize, num_rounds: u32) -> Self {
        debug_assert!(num_players >= 1, "a match needs at least one player");
        debug_assert!(num_rounds >= 1, "a match needs at least one round");
        Self {
            num_players,
            num_rounds,
            current: TurnSlot {
                player: 1,
                round: 1,
            },
            standings: Standings::new(num_players),
            complete: false,
        }
    }

    pub fn num_players(&self) -> usize {
        self.num_players
    }

    pub fn num_rounds(&self) -> u32 {
        self.num_rounds
    }

    pub fn current(&self) -> TurnSlot {
        self.current
    }

    pub fn current_player(&self) -> usize {
        self.current.player
    }

    pub fn current_round(&self) -> u32 {
        self.current.round
    }

    pub fn standings(&self) -> &Standings {
        &self.standings
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Credit a finished turn to the current player.
    pub fn record_turn(&mut self, score: f64) {
        self.standings.record(self.current.player, score);
    }

    /// The slot after the current one in turn order, past the last round
    /// when the current turn is the final one.
    fn following(&self) -> TurnSlot {
        if self.current.player >= self.num_players {
            TurnSlot {
                player: 1,
                round: self.current.round + 1,
            }
        } else {
            TurnSlot {
                player: self.current.player + 1,
                round: self.current.round,
            }
        }
    }

    /// The slot after the current one, or `None` if the current turn is the last.
    pub fn peek_next(&self) -> Option<TurnSlot> {
        if self.complete {
            return None;
        }
        let next = self.following();
        (next.round <= self.num_rounds).then_some(next)
    }

    /// Move to the next turn. Moving past the last player of the last round
    /// completes the match with the counters left at player 1, round R + 1;
    /// from then on they stay put and every call returns `Complete`.
    pub fn advance(&mut self) -> Advance {
        if self.complete {
            return Advance::Complete;
        }

        self.current = self.following();
        if self.current.round > self.num_rounds {
            self.complete = true;
            Advance::Complete
        } else {
            Advance::NextTurn(self.current)
        }
    }

    /// Back to player 1, round 1 with zero totals.
    pub fn reset(&mut self) {
        self.current = TurnSlot {
            player: 1,
            round: 1,
        };
        self.standings.reset();
        self.complete = false;
    }
}
