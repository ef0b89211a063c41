//! The match: phases, transitions and the data they act on.

use super::action::Action;
use crate::core::{GameConfig, IntervalScheduler, Rect, Scheduler, Task};
use crate::flappy::{spawn_pair, step, Bird, FrameResult, Pipe, TurnEnd};
use crate::rounds::{Advance, Standings, TurnSequencer, TurnSlot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Phase of the match.
///
/// ```text
/// NotStarted --flap--> TurnActive --crash--> TurnEnded --flap--> TurnActive
///                                                      \--flap--> AllComplete --restart--> NotStarted
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first flap of the match.
    NotStarted,
    /// A turn is being played; ticks are running.
    TurnActive,
    /// The current player's turn is over, waiting for a flap to continue.
    TurnEnded,
    /// Every player has played every round.
    AllComplete,
}

/// What a single physics tick did.
pub type TickOutcome = FrameResult;

/// What [`Match::advance_clock`] ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvanceReport {
    pub frames: u32,
    pub spawns: u32,
    pub turn_end: Option<TurnEnd>,
}

/// Results shown once the match is complete.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalStandings {
    pub totals: Vec<f64>,
    pub best_score: f64,
    /// 1-based player numbers sharing the best score.
    pub winners: Vec<usize>,
}

/// A full multiplayer match.
///
/// `R` supplies pipe placement randomness and `S` drives the physics and spawn
/// tasks. Both are injected so tests can pin them down.
pub struct Match<R = StdRng, S = IntervalScheduler> {
    config: GameConfig,
    phase: Phase,
    bird: Bird,
    pipes: Vec<Pipe>,
    turn_score: f64,
    sequencer: TurnSequencer,
    rng: R,
    scheduler: S,
}

impl Match {
    /// A match with a virtual-clock scheduler. `None` seeds from the OS.
    pub fn new(
        config: GameConfig,
        num_players: usize,
        num_rounds: u32,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let scheduler = IntervalScheduler::from_config(&config);
        Self::with_parts(config, num_players, num_rounds, rng, scheduler)
    }
}

impl<R: Rng, S: Scheduler> Match<R, S> {
    /// `num_players` and `num_rounds` must both be at least 1.
    pub fn with_parts(
        config: GameConfig,
        num_players: usize,
        num_rounds: u32,
        rng: R,
        mut scheduler: S,
    ) -> Self {
        scheduler.stop_all();
        Self {
            bird: Bird::new(&config),
            config,
            phase: Phase::NotStarted,
            pipes: Vec::new(),
            turn_score: 0.0,
            sequencer: TurnSequencer::new(num_players, num_rounds),
            rng,
            scheduler,
        }
    }

    // ── Inputs ──────────────────────────────────────────────────────────

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Flap => self.apply_flap(),
            Action::Restart => self.apply_restart(),
            Action::Other => {}
        }
    }

    pub fn apply_flap(&mut self) {
        match self.phase {
            Phase::NotStarted => {
                self.bird.flap(&self.config);
                self.scheduler.start_all();
                self.phase = Phase::TurnActive;
                tracing::info!(
                    player = self.sequencer.current_player(),
                    round = self.sequencer.current_round(),
                    "match started"
                );
            }
            Phase::TurnActive => self.bird.flap(&self.config),
            Phase::TurnEnded => match self.sequencer.advance() {
                Advance::NextTurn(slot) => self.begin_turn(slot),
                Advance::Complete => {
                    self.phase = Phase::AllComplete;
                    tracing::info!(
                        winners = ?self.sequencer.standings().winners(),
                        best = self.sequencer.standings().best_score().unwrap_or(0.0),
                        "match complete"
                    );
                }
            },
            Phase::AllComplete => {}
        }
    }

    /// Only honored on the final results screen.
    pub fn apply_restart(&mut self) {
        if self.phase != Phase::AllComplete {
            return;
        }

        self.sequencer.reset();
        self.bird.reset(&self.config);
        self.pipes.clear();
        self.turn_score = 0.0;
        self.scheduler.stop_all();
        self.phase = Phase::NotStarted;
        tracing::info!("match restarted");
    }

    // ── Time ────────────────────────────────────────────────────────────

    /// One physics frame. Does nothing unless a turn is active.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::TurnActive {
            return TickOutcome::default();
        }

        let outcome = step(
            &mut self.bird,
            &mut self.pipes,
            &mut self.turn_score,
            &self.config,
        );
        if let Some(cause) = outcome.turn_end {
            self.end_turn(cause);
        }
        outcome
    }

    /// Spawn one pipe pair. Does nothing unless a turn is active.
    pub fn spawn_tick(&mut self) {
        if self.phase != Phase::TurnActive {
            return;
        }
        spawn_pair(&mut self.pipes, &self.config, &mut self.rng);
        tracing::trace!(live_pipes = self.pipes.len(), "spawned pipe pair");
    }

    fn begin_turn(&mut self, slot: TurnSlot) {
        self.bird.reset(&self.config);
        self.pipes.clear();
        self.turn_score = 0.0;
        // The confirming flap doubles as the first flap of the new turn
        self.bird.flap(&self.config);
        self.scheduler.start_all();
        self.phase = Phase::TurnActive;
        tracing::info!(player = slot.player, round = slot.round, "turn started");
    }

    fn end_turn(&mut self, cause: TurnEnd) {
        self.sequencer.record_turn(self.turn_score);
        self.scheduler.stop_all();
        self.phase = Phase::TurnEnded;
        tracing::info!(
            player = self.sequencer.current_player(),
            round = self.sequencer.current_round(),
            score = self.turn_score,
            ?cause,
            "turn ended"
        );
    }

    // ── Read-only view ──────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn bird_rect(&self) -> Rect {
        self.bird.rect()
    }

    /// Live pipes in spawn order.
    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn turn_score(&self) -> f64 {
        self.turn_score
    }

    pub fn num_players(&self) -> usize {
        self.sequencer.num_players()
    }

    pub fn num_rounds(&self) -> u32 {
        self.sequencer.num_rounds()
    }

    pub fn current_player(&self) -> usize {
        self.sequencer.current_player()
    }

    pub fn current_round(&self) -> u32 {
        self.sequencer.current_round()
    }

    /// The turn a flap would start from the between-turns screen, or `None`
    /// when that flap ends the match.
    pub fn next_turn(&self) -> Option<TurnSlot> {
        self.sequencer.peek_next()
    }

    pub fn standings(&self) -> &Standings {
        self.sequencer.standings()
    }

    pub fn totals(&self) -> &[f64] {
        self.sequencer.standings().totals()
    }

    pub fn all_rounds_complete(&self) -> bool {
        self.sequencer.is_complete()
    }

    /// Final totals and winners, once the match is complete.
    pub fn final_standings(&self) -> Option<FinalStandings> {
        if self.phase != Phase::AllComplete {
            return None;
        }
        let standings = self.sequencer.standings();
        Some(FinalStandings {
            totals: standings.totals().to_vec(),
            best_score: standings.best_score().unwrap_or(0.0),
            winners: standings.winners(),
        })
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl<R: Rng> Match<R, IntervalScheduler> {
    /// Advance the virtual clock by `elapsed_ms`, running every physics and
    /// spawn firing that falls due, in order. Firings scheduled after a turn
    /// ends inside the window are dropped with the stopped tasks.
    pub fn advance_clock(&mut self, elapsed_ms: u64) -> AdvanceReport {
        let deadline = self.scheduler.now_ms() + elapsed_ms;
        let mut report = AdvanceReport::default();

        while let Some(task) = self.scheduler.pop_due(deadline) {
            match task {
                Task::Physics => {
                    report.frames += 1;
                    if let Some(cause) = self.tick().turn_end {
                        report.turn_end = Some(cause);
                    }
                }
                Task::Spawn => {
                    report.spawns += 1;
                    self.spawn_tick();
                }
            }
        }

        self.scheduler.settle(deadline);
        report
    }
}
