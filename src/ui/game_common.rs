//! Screen chrome shared by the match and results scenes.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Rows reserved under the board for the status message and key hints.
const STATUS_ROWS: u16 = 2;

/// Where each part of the match screen goes.
///
/// ```text
/// ┌─ Flappy Rounds ─────────────┬─ Info ─────┐
/// │ board                       │ sidebar    │
/// │ status / key hints          │            │
/// └─────────────────────────────┴────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub board: Rect,
    pub status: Rect,
    pub sidebar: Rect,
}

impl ScreenLayout {
    /// Split the inside of the outer border. The sidebar keeps its width and
    /// the board takes whatever is left above the status rows.
    pub fn split(inner: Rect, sidebar_width: u16) -> Self {
        let columns = Layout::horizontal([Constraint::Min(20), Constraint::Length(sidebar_width)])
            .split(inner);
        let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(STATUS_ROWS)])
            .split(columns[0]);

        Self {
            board: rows[0],
            status: rows[1],
            sidebar: columns[1],
        }
    }
}

/// Clear `area`, draw a titled border round it and return the inside.
pub fn draw_border(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// "[Space] Flap  [Q] Quit" with keys bright and actions dimmed.
pub fn key_hints(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (key, action) in hints {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(key.to_string(), Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Message on the first status row, key hints on the second if there is room.
pub fn draw_status(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    color: Color,
    hints: &[(&str, &str)],
) {
    if area.height == 0 {
        return;
    }

    let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(area);
    frame.render_widget(
        Paragraph::new(message.to_string())
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        rows[0],
    );
    if rows[1].height > 0 && !hints.is_empty() {
        frame.render_widget(
            Paragraph::new(key_hints(hints)).alignment(Alignment::Center),
            rows[1],
        );
    }
}

/// The sidebar border; returns the inside.
pub fn draw_sidebar(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// A `width` x `height` rect centered in `area`, clipped to it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
