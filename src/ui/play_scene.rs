//! Playfield rendering: world pixels scaled down to terminal cells.

use crate::game::{GameSession, LevelNotice};
use crate::ui::centered_rect;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the whole play screen: bordered field, status bar, and the
/// level-up notice overlay when one is active.
pub fn render_play(frame: &mut Frame, area: Rect, session: &GameSession) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" flap ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(2)])
        .split(inner);

    render_field(frame, chunks[0], session);
    render_status_bar(frame, chunks[1], session);

    if let Some(notice) = &session.notice {
        render_level_notice(frame, area, notice);
    }
}

/// Bird glyph: wing position while gliding, pitch arrows when moving fast.
fn bird_glyph(session: &GameSession) -> &'static str {
    if session.bird.speed < -4.0 {
        "▲"
    } else if session.bird.speed > 8.0 {
        "▼"
    } else {
        ["►", "▸", "▶"][session.bird.frame % 3]
    }
}

fn render_field(frame: &mut Frame, area: Rect, session: &GameSession) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let config = &session.config;
    let x_scale = f64::from(config.screen_width) / width as f64;
    let y_scale = f64::from(config.screen_height) / height as f64;

    let bird_left = session.bird.left();
    let bird_right = bird_left + session.bird.width();
    let bird_top = session.bird.top();
    let bird_bottom = bird_top + session.bird.height();

    let glyph = bird_glyph(session);
    let bird_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let pipe_style = Style::default().fg(Color::Green);
    let ground_style = Style::default().fg(Color::DarkGray);

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        // Sample each cell at the world point under its top-left corner.
        let world_y = (row as f64 * y_scale) as i32;
        let mut spans = Vec::with_capacity(width);
        for col in 0..width {
            let world_x = (col as f64 * x_scale) as i32;

            if world_x >= bird_left
                && world_x < bird_right
                && world_y >= bird_top
                && world_y < bird_bottom
            {
                spans.push(Span::styled(glyph, bird_style));
                continue;
            }

            let in_pipe = session.pipes.iter().any(|p| {
                world_x >= p.left() && world_x < p.right() && world_y >= p.top() && world_y < p.bottom()
            });
            if in_pipe {
                spans.push(Span::styled("█", pipe_style));
                continue;
            }

            let in_ground = session
                .grounds
                .iter()
                .any(|g| world_x >= g.left() && world_x < g.right() && world_y >= g.y);
            if in_ground {
                spans.push(Span::styled("▒", ground_style));
            } else {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, session: &GameSession) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" Score: {}", session.score as i64),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  Level: {}", session.level()),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::styled(" [Space/Up]", Style::default().fg(Color::Yellow)),
            Span::styled(" Flap  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Q]", Style::default().fg(Color::Yellow)),
            Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_level_notice(frame: &mut Frame, area: Rect, notice: &LevelNotice) {
    let rect = centered_rect(26, 5, area);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let lines = vec![
        Line::from(Span::styled(
            format!("LEVEL {}", notice.level),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "faster pipes, tighter gap",
            Style::default().fg(Color::White),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center),
        inner,
    );
}
