//! Game-over screen: final score and the replay button.
//!
//! `replay_button_rect` is shared between the renderer and the main
//! loop's mouse hit-test so clicks land exactly on what was drawn.

use crate::ui::centered_rect;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BUTTON_WIDTH: u16 = 16;
const BUTTON_HEIGHT: u16 = 3;

/// Where the "Play Again" button sits for a given screen area.
pub fn replay_button_rect(area: Rect) -> Rect {
    let mut rect = centered_rect(BUTTON_WIDTH, BUTTON_HEIGHT, area);
    // Nudge below the score text.
    let shifted_y = rect.y.saturating_add(3);
    if shifted_y + rect.height <= area.y + area.height {
        rect.y = shifted_y;
    }
    rect
}

/// True if a terminal cell (such as a mouse click) falls on the button.
pub fn hits_replay_button(area: Rect, column: u16, row: u16) -> bool {
    let button = replay_button_rect(area);
    column >= button.x
        && column < button.x + button.width
        && row >= button.y
        && row < button.y + button.height
}

pub fn render_game_over(frame: &mut Frame, area: Rect, final_score: i64) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" flap ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", final_score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    let text_rect = centered_rect(30, lines.len() as u16, inner);
    // Keep the text above the button.
    let text_rect = Rect {
        y: text_rect.y.saturating_sub(2),
        ..text_rect
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), text_rect);

    // Computed from the full screen area, same as the mouse hit-test.
    let button = replay_button_rect(area);
    let button_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let button_inner = button_block.inner(button);
    frame.render_widget(button_block, button);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Play Again",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        button_inner,
    );

    let hint = Line::from(vec![
        Span::styled("[Space/Enter/Click]", Style::default().fg(Color::Yellow)),
        Span::styled(" Replay   ", Style::default().fg(Color::DarkGray)),
        Span::styled("[Q]", Style::default().fg(Color::Yellow)),
        Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
    ]);
    let hint_rect = Rect {
        x: inner.x,
        y: (button.y + button.height + 1).min(inner.y + inner.height.saturating_sub(1)),
        width: inner.width,
        height: 1,
    };
    frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), hint_rect);
}
