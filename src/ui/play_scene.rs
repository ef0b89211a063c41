//! Board rendering and the in-match screens (start, playing, between turns).

use super::game_common::{centered_rect, draw_border, draw_sidebar, draw_status, ScreenLayout};
use super::text;
use crate::core::{GameConfig, Rect as BoardRect, Scheduler};
use crate::flappy::Pipe;
use crate::game::{Match, Phase};
use crate::setup::MatchSettings;
use rand::Rng;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SIDEBAR_WIDTH: u16 = 24;

/// What a terminal cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Pipe,
    Bird,
}

/// Board point at the center of a display cell.
fn cell_center(col: u16, row: u16, cols: u16, rows: u16, config: &GameConfig) -> (i32, i32) {
    let x = (col as f64 + 0.5) * config.board_width as f64 / cols as f64;
    let y = (row as f64 + 0.5) * config.board_height as f64 / rows as f64;
    (x as i32, y as i32)
}

/// Display cell containing a board point.
fn board_to_cell(x: i32, y: i32, cols: u16, rows: u16, config: &GameConfig) -> (i64, i64) {
    let col = (x as i64 * cols as i64).div_euclid(config.board_width as i64);
    let row = (y as i64 * rows as i64).div_euclid(config.board_height as i64);
    (col, row)
}

fn contains(rect: &BoardRect, (x, y): (i32, i32)) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

/// Sample the board into a `cols` x `rows` grid. The bird always occupies at
/// least the cell holding its center, however coarse the grid.
pub fn sample_board(
    config: &GameConfig,
    bird: &BoardRect,
    pipes: &[Pipe],
    cols: u16,
    rows: u16,
) -> Vec<Vec<Cell>> {
    let mut grid = vec![vec![Cell::Empty; cols as usize]; rows as usize];

    for (row, line) in grid.iter_mut().enumerate() {
        for (col, cell) in line.iter_mut().enumerate() {
            let point = cell_center(col as u16, row as u16, cols, rows, config);
            if contains(bird, point) {
                *cell = Cell::Bird;
            } else if pipes.iter().any(|pipe| contains(&pipe.rect(), point)) {
                *cell = Cell::Pipe;
            }
        }
    }

    let (col, row) = board_to_cell(
        bird.x + bird.width / 2,
        bird.y + bird.height / 2,
        cols,
        rows,
        config,
    );
    if (0..cols as i64).contains(&col) && (0..rows as i64).contains(&row) {
        grid[row as usize][col as usize] = Cell::Bird;
    }

    grid
}

fn render_board(
    frame: &mut Frame,
    area: Rect,
    config: &GameConfig,
    bird: &BoardRect,
    pipes: &[Pipe],
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let grid = sample_board(config, bird, pipes, area.width, area.height);
    let lines: Vec<Line> = grid
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|cell| match cell {
                        Cell::Bird => Span::styled(
                            "●",
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                        Cell::Empty => Span::raw(" "),
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Centered message box drawn over the board.
fn render_message(frame: &mut Frame, area: Rect, lines: &[String], color: Color) {
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16 + 4;
    let height = lines.len() as u16 + 2;
    let box_area = centered_rect(area, width, height);

    frame.render_widget(Clear, box_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let text: Vec<Line> = lines
        .iter()
        .map(|l| Line::from(Span::styled(l.clone(), Style::default().fg(Color::White))))
        .collect();
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

fn render_info_panel<R: Rng, S: Scheduler>(
    frame: &mut Frame,
    area: Rect,
    game: &Match<R, S>,
    settings: &MatchSettings,
) {
    let inner = draw_sidebar(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", settings.name_of(game.current_player())),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" Round: ", label),
            Span::styled(
                format!("{}/{}", game.current_round(), game.num_rounds()),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Turn: ", label),
            Span::styled(
                text::whole_points(game.turn_score()).to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(" Totals:", label)),
    ];

    for (i, total) in game.totals().iter().enumerate() {
        let player = i + 1;
        let style = if player == game.current_player() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(
            format!(" {} {}", settings.name_of(player), text::whole_points(*total)),
            style,
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Draw the match for any phase before the final results.
pub fn render_play<R: Rng, S: Scheduler>(
    frame: &mut Frame,
    area: Rect,
    game: &Match<R, S>,
    settings: &MatchSettings,
) {
    let inner = draw_border(frame, area, " Flappy Rounds ", Color::Cyan);
    let layout = ScreenLayout::split(inner, SIDEBAR_WIDTH);

    render_board(
        frame,
        layout.board,
        game.config(),
        &game.bird_rect(),
        game.pipes(),
    );
    render_info_panel(frame, layout.sidebar, game, settings);

    let player_name = settings.name_of(game.current_player());
    match game.phase() {
        Phase::NotStarted => {
            let lines = text::start_lines(&player_name, game.num_rounds());
            render_message(frame, layout.board, &lines, Color::Yellow);
            draw_status(
                frame,
                layout.status,
                "Press Space to start!",
                Color::Yellow,
                &[("[Space]", "Flap"), ("[Q]", "Quit")],
            );
        }
        Phase::TurnActive => {
            let position = text::position_line(
                game.current_player(),
                game.current_round(),
                game.num_rounds(),
            );
            let status = format!("{}    {}", text::score_line(game.turn_score()), position);
            draw_status(
                frame,
                layout.status,
                &status,
                Color::Green,
                &[("[Space]", "Flap"), ("[Q]", "Quit")],
            );
        }
        Phase::TurnEnded => {
            let upcoming = game
                .next_turn()
                .map(|slot| (settings.name_of(slot.player), slot));
            let next = upcoming.as_ref().map(|(name, slot)| (name.as_str(), *slot));
            let lines = text::between_turns_lines(
                &player_name,
                game.turn_score(),
                next,
                game.num_rounds(),
            );
            render_message(frame, layout.board, &lines, Color::Red);
            draw_status(
                frame,
                layout.status,
                "Turn over",
                Color::Red,
                &[("[Space]", "Continue"), ("[Q]", "Quit")],
            );
        }
        // Drawn by the results scene
        Phase::AllComplete => {}
    }
}
