//! Final results screen.

use super::game_common::{draw_border, draw_status};
use super::text;
use crate::game::FinalStandings;
use crate::setup::MatchSettings;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_results(
    frame: &mut Frame,
    area: Rect,
    results: &FinalStandings,
    settings: &MatchSettings,
) {
    let inner = draw_border(frame, area, " Final Results ", Color::Green);
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(2)]).split(inner);

    let mut lines = vec![
        Line::from(Span::styled(
            "Final Results",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, total) in results.totals.iter().enumerate() {
        let player = i + 1;
        let style = if results.winners.contains(&player) {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(
            format!("{}: {}", settings.name_of(player), text::whole_points(*total)),
            style,
        )));
    }

    let winner_names: Vec<String> = results
        .winners
        .iter()
        .map(|&player| settings.name_of(player))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        text::winner_line(&winner_names),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));

    let content_height = lines.len() as u16;
    let y = chunks[0].y + chunks[0].height.saturating_sub(content_height) / 2;
    let content = Rect {
        y,
        height: content_height.min(chunks[0].height),
        ..chunks[0]
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), content);

    draw_status(
        frame,
        chunks[1],
        "Press 'R' to Restart",
        Color::Cyan,
        &[("[R]", "Restart"), ("[Q]", "Quit")],
    );
}
