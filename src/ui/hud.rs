use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::PALETTE;
use crate::game::GameState;

const SEPARATOR: &str = " │ ";

/// Renders the one-line title and score bar.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState) {
    let bounds = state.bounds();
    let muted = Style::new().fg(PALETTE.menu_footer);

    let line = Line::from(vec![
        Span::styled(
            "SNAKE",
            Style::new()
                .fg(PALETTE.hud_title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(SEPARATOR, muted),
        Span::styled(
            format!("Score: {}", state.score()),
            Style::new().fg(PALETTE.hud_score),
        ),
        Span::styled(SEPARATOR, muted),
        Span::styled(format!("Length: {}", state.snake.len()), muted),
        Span::styled(SEPARATOR, muted),
        Span::styled(format!("{}x{}", bounds.width, bounds.height), muted),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
