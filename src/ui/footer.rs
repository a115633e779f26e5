use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_MUTED};
use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let key_style = Style::default()
        .fg(COLOR_ACCENT)
        .add_modifier(Modifier::BOLD);
    let hint_style = Style::default().fg(COLOR_MUTED);

    let line = if let Some(status) = app.status.as_ref() {
        Line::from(Span::styled(status.text.as_str(), status.level.style()))
    } else {
        let hints = [
            ("q", "quit"),
            ("r", "refresh"),
            ("left/right", "column"),
            ("space", "order"),
            ("p/s/n/c/e", "sort by"),
        ];
        let spans = hints
            .iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(*key, key_style),
                    Span::styled(format!(" {label}  "), hint_style),
                ]
            })
            .collect::<Vec<_>>();
        Line::from(spans)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(COLOR_BORDER));
    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
