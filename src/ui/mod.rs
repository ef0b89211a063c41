//! Terminal presentation. Reads the match, never changes it.

pub mod game_common;
pub mod play_scene;
pub mod results_scene;
pub mod text;

use crate::core::Scheduler;
use crate::game::Match;
use crate::setup::MatchSettings;
use rand::Rng;
use ratatui::Frame;

/// Draw whichever screen the match phase calls for.
pub fn draw<R: Rng, S: Scheduler>(frame: &mut Frame, game: &Match<R, S>, settings: &MatchSettings) {
    let area = frame.size();
    match game.final_standings() {
        Some(results) => results_scene::render_results(frame, area, &results, settings),
        None => play_scene::render_play(frame, area, game, settings),
    }
}
