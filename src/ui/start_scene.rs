//! Start screen: title card and launch instructions.

use crate::ui::centered_rect;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TITLE: [&str; 5] = [
    " ███████ ██       █████  ██████  ",
    " ██      ██      ██   ██ ██   ██ ",
    " █████   ██      ███████ ██████  ",
    " ██      ██      ██   ██ ██      ",
    " ██      ███████ ██   ██ ██      ",
];

pub fn render_start(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" flap ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = TITLE
        .iter()
        .map(|row| {
            Line::from(Span::styled(
                *row,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Guide the bird through the pipes.",
        Style::default().fg(Color::White),
    )));
    lines.push(Line::from(Span::styled(
        "Every 5 points the world speeds up.",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[Space]", Style::default().fg(Color::Yellow)),
        Span::styled(" Start   ", Style::default().fg(Color::DarkGray)),
        Span::styled("[Q]", Style::default().fg(Color::Yellow)),
        Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
    ]));

    let rect = centered_rect(40, lines.len() as u16, inner);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}
