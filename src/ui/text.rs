//! Screen text for each phase, kept separate from drawing so it can be tested.

use crate::rounds::TurnSlot;

/// Scores are shown as whole points; half a pair does not count yet.
pub fn whole_points(score: f64) -> u64 {
    score.max(0.0) as u64
}

pub fn score_line(score: f64) -> String {
    format!("Score: {}", whole_points(score))
}

/// "P2 | R1/3" in-game position marker.
pub fn position_line(player: usize, round: u32, num_rounds: u32) -> String {
    format!("P{} | R{}/{}", player, round, num_rounds)
}

pub fn start_lines(first_player: &str, num_rounds: u32) -> [String; 3] {
    [
        first_player.to_string(),
        format!("Round 1/{}", num_rounds),
        "Press SPACE to Start".to_string(),
    ]
}

/// Lines for the screen between turns. `next` is `None` when the next flap
/// ends the match.
pub fn between_turns_lines(
    player_name: &str,
    turn_score: f64,
    next: Option<(&str, TurnSlot)>,
    num_rounds: u32,
) -> Vec<String> {
    let mut lines = vec![format!("{} Score: {}", player_name, whole_points(turn_score))];
    match next {
        Some((next_name, slot)) => {
            lines.push(format!("Press SPACE for {}'s turn.", next_name));
            lines.push(format!("(Round {}/{})", slot.round, num_rounds));
        }
        None => lines.push("Press SPACE for final results".to_string()),
    }
    lines
}

/// "Winner: Ada!" or "Winners: Ada, Grace!".
pub fn winner_line(winner_names: &[String]) -> String {
    match winner_names {
        [] => "No winner!".to_string(),
        [only] => format!("Winner: {}!", only),
        many => format!("Winners: {}!", many.join(", ")),
    }
}
