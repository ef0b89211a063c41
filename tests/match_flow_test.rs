//! Integration test: a match driven end to end through the virtual clock
//!
//! Covers turn start and end, free fall, spawn cadence, turn rotation across
//! rounds, final standings and restart.

use flappy_rounds::core::{GameConfig, IntervalScheduler, Scheduler, Task};
use flappy_rounds::flappy::TurnEnd;
use flappy_rounds::game::{Action, Match, Phase};
use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Frames from the first flap until the bird drops below a 640-high board:
/// y after n frames is 320 - 9n + n(n+1)/2, first above 640 at n = 36.
const FRAMES_TO_FALL_OUT: u64 = 36;

/// A flap every 17 frames brings the bird back to exactly where it started.
const HOVER_FRAMES: u64 = 17;

fn frame_ms() -> u64 {
    GameConfig::default().tick_interval_ms
}

/// Board wide enough that no pipe reaches the bird for several seconds.
fn wide_config() -> GameConfig {
    GameConfig {
        board_width: 3600,
        ..GameConfig::default()
    }
}

/// Flap and let the bird fall out of the board.
fn play_losing_turn(game: &mut Match) {
    game.apply(Action::Flap);
    let report = game.advance_clock(FRAMES_TO_FALL_OUT * frame_ms());
    assert_eq!(report.turn_end, Some(TurnEnd::FellOut));
}

#[test]
fn test_free_fall_ends_turn_on_exact_frame() {
    let mut game = Match::new(GameConfig::default(), 1, 1, Some(7));
    game.apply(Action::Flap);

    let report = game.advance_clock((FRAMES_TO_FALL_OUT - 1) * frame_ms());
    assert_eq!(report.frames as u64, FRAMES_TO_FALL_OUT - 1);
    assert_eq!(report.turn_end, None);
    assert_eq!(game.phase(), Phase::TurnActive);
    assert_eq!(game.bird().y, 635);

    let report = game.advance_clock(frame_ms());
    assert_eq!(report.frames, 1);
    assert_eq!(report.turn_end, Some(TurnEnd::FellOut));
    assert_eq!(game.phase(), Phase::TurnEnded);
    assert_eq!(game.totals(), &[0.0]);
}

#[test]
fn test_clock_does_nothing_before_first_flap() {
    let mut game = Match::new(GameConfig::default(), 2, 1, Some(1));
    let report = game.advance_clock(10_000);
    assert_eq!(report.frames, 0);
    assert_eq!(report.spawns, 0);
    assert_eq!(game.phase(), Phase::NotStarted);
    assert_eq!(game.bird().y, 320);
}

#[test]
fn test_no_firings_after_turn_ends_inside_window() {
    let mut game = Match::new(GameConfig::default(), 1, 2, Some(3));
    game.apply(Action::Flap);

    // Crash happens at frame 36, long before the window closes
    let report = game.advance_clock(5_000);
    assert_eq!(report.frames as u64, FRAMES_TO_FALL_OUT);
    assert_eq!(report.spawns, 0);
    assert!(!game.scheduler().is_running(Task::Physics));
    assert!(!game.scheduler().is_running(Task::Spawn));

    let report = game.advance_clock(5_000);
    assert_eq!(report.frames, 0);
}

#[test]
fn test_pipes_spawn_every_interval() {
    let config = wide_config();
    let spawn_ms = config.spawn_interval_ms;
    let mut game = Match::new(config, 1, 1, Some(11));

    let mut spawns = 0;
    let mut frames = 0;
    for _ in 0..20 {
        game.apply(Action::Flap);
        let report = game.advance_clock(HOVER_FRAMES * frame_ms());
        assert_eq!(report.turn_end, None);
        spawns += report.spawns;
        frames += report.frames;
    }

    let elapsed = 20 * HOVER_FRAMES * frame_ms();
    assert_eq!(frames as u64, 20 * HOVER_FRAMES);
    assert_eq!(spawns as u64, elapsed / spawn_ms);
    assert_eq!(game.pipes().len() as u64, 2 * (elapsed / spawn_ms));
    assert_eq!(game.bird().y, 320);
}

#[test]
fn test_same_seed_same_pipes() {
    let run = |seed: u64| {
        let mut game = Match::new(wide_config(), 1, 1, Some(seed));
        for _ in 0..12 {
            game.apply(Action::Flap);
            game.advance_clock(HOVER_FRAMES * frame_ms());
        }
        game.pipes().iter().map(|p| p.y).collect::<Vec<_>>()
    };

    let first = run(99);
    assert!(!first.is_empty());
    assert_eq!(first, run(99));
}

#[test]
fn test_injected_rng_and_scheduler() {
    let config = wide_config();
    let scheduler = IntervalScheduler::from_config(&config);
    let mut game = Match::with_parts(config, 1, 1, ChaCha8Rng::seed_from_u64(5), scheduler);

    for _ in 0..6 {
        game.apply(Action::Flap);
        game.advance_clock(HOVER_FRAMES * frame_ms());
    }

    // 1632 ms elapsed: one pair
    let pipes = game.pipes();
    assert_eq!(pipes.len(), 2);
    assert!((-383..=-128).contains(&pipes[0].y));
    assert_eq!(pipes[1].y, pipes[0].y + 512 + 160);
}

#[test]
fn test_scored_turn_ending_in_a_pipe_is_totalled() {
    // A zero draw places every top pipe at y = -128, so each gap spans
    // y 384..544 and the pairs reach the bird around frames 164 and 258
    let config = GameConfig::default();
    let scheduler = IntervalScheduler::from_config(&config);
    let mut game = Match::with_parts(config, 1, 1, StepRng::new(0, 0), scheduler);

    // Sink to y = 474, then hover between 438 and 474 inside the gap
    game.apply(Action::Flap);
    assert_eq!(game.advance_clock(28 * frame_ms()).turn_end, None);
    assert_eq!(game.bird().y, 474);
    for _ in 0..13 {
        game.apply(Action::Flap);
        let report = game.advance_clock(HOVER_FRAMES * frame_ms());
        assert_eq!(report.turn_end, None);
    }

    // First pair cleared, second pair still approaching
    assert_eq!(game.turn_score(), 1.0);
    assert_eq!(game.totals(), &[0.0]);
    assert_eq!(game.pipes().len(), 2);
    assert!(game.pipes().iter().all(|p| !p.passed));

    // Climb into the second top pipe: one flap per frame rises 8 units
    let mut crash = None;
    for _ in 0..20 {
        game.apply(Action::Flap);
        let report = game.advance_clock(frame_ms());
        if report.turn_end.is_some() {
            crash = report.turn_end;
            break;
        }
    }

    assert_eq!(crash, Some(TurnEnd::Collision));
    assert_eq!(game.bird().y, 378);
    assert_eq!(game.phase(), Phase::TurnEnded);
    assert_eq!(game.totals(), &[1.0]);
    assert!(!game.scheduler().is_running(Task::Physics));
    assert!(!game.scheduler().is_running(Task::Spawn));

    game.apply(Action::Flap);
    let results = game.final_standings().expect("match is complete");
    assert_eq!(results.best_score, 1.0);
    assert_eq!(results.winners, vec![1]);
}

#[test]
fn test_turns_rotate_players_then_rounds() {
    let mut game = Match::new(GameConfig::default(), 2, 2, Some(21));
    let expected = [(1, 1), (2, 1), (1, 2), (2, 2)];

    for (i, &(player, round)) in expected.iter().enumerate() {
        // The flap that starts a turn is what moves the sequencer on
        game.apply(Action::Flap);
        assert_eq!(
            (game.current_player(), game.current_round()),
            (player, round),
            "turn {}",
            i
        );
        let report = game.advance_clock(FRAMES_TO_FALL_OUT * frame_ms());
        assert_eq!(report.turn_end, Some(TurnEnd::FellOut));
        assert_eq!(game.phase(), Phase::TurnEnded);
    }

    assert_eq!(game.next_turn(), None);
    game.apply(Action::Flap);
    assert_eq!(game.phase(), Phase::AllComplete);
    assert!(game.all_rounds_complete());
    assert_eq!((game.current_player(), game.current_round()), (1, 3));

    let results = game.final_standings().expect("match is complete");
    assert_eq!(results.totals, vec![0.0, 0.0]);
    assert_eq!(results.winners, vec![1, 2]);
}

#[test]
fn test_between_turns_keys_other_than_flap_do_nothing() {
    let mut game = Match::new(GameConfig::default(), 2, 1, Some(2));
    play_losing_turn(&mut game);

    game.apply(Action::Other);
    game.apply(Action::Restart);
    game.advance_clock(1_000);
    assert_eq!(game.phase(), Phase::TurnEnded);
    assert_eq!(game.current_player(), 1);

    game.apply(Action::Flap);
    assert_eq!(game.phase(), Phase::TurnActive);
    assert_eq!(game.current_player(), 2);
    assert!(game.pipes().is_empty());
    assert_eq!(game.turn_score(), 0.0);
}

#[test]
fn test_restart_after_results_plays_a_fresh_match() {
    let mut game = Match::new(GameConfig::default(), 1, 2, Some(8));
    play_losing_turn(&mut game);
    game.apply(Action::Flap);
    assert_eq!(game.current_round(), 2);
    let report = game.advance_clock(FRAMES_TO_FALL_OUT * frame_ms());
    assert_eq!(report.turn_end, Some(TurnEnd::FellOut));
    game.apply(Action::Flap);
    assert_eq!(game.phase(), Phase::AllComplete);

    game.apply(Action::Restart);
    assert_eq!(game.phase(), Phase::NotStarted);
    assert_eq!(game.current_player(), 1);
    assert_eq!(game.current_round(), 1);
    assert_eq!(game.totals(), &[0.0]);
    assert!(game.final_standings().is_none());

    play_losing_turn(&mut game);
    assert_eq!(game.phase(), Phase::TurnEnded);
}
