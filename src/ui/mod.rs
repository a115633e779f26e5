mod footer;
pub mod theme;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_MUTED, COLOR_WARN};

pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();
    let footer_height = 3;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(footer_height)])
        .split(size);

    render_grid(frame, chunks[0], app);
    footer::render(frame, chunks[1], app);
}

pub fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title_style(
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )
}

/// Header, rule and as many grid lines as fit; the rest is clipped.
fn render_grid(frame: &mut Frame, area: Rect, app: &App) {
    let title = match app.last_error.as_deref() {
        Some(err) => format!(" proctab | {err} "),
        None => format!(
            " proctab | {} processes | sort: {} {} ",
            app.records.len(),
            app.sort_key.label(),
            app.sort_dir.label()
        ),
    };
    let mut block = panel_block(&title);
    if app.last_error.is_some() {
        block = block.title_style(Style::default().fg(COLOR_WARN).add_modifier(Modifier::BOLD));
    }
    let inner = block.inner(area);
    let body_rows = (inner.height as usize).saturating_sub(2);

    let header_style = Style::default()
        .fg(COLOR_ACCENT)
        .add_modifier(Modifier::BOLD);
    let mut lines = Vec::with_capacity(body_rows + 2);
    lines.push(Line::from(Span::styled(app.header.as_str(), header_style)));
    lines.push(Line::from(Span::styled(
        app.rule(),
        Style::default().fg(COLOR_MUTED),
    )));
    lines.extend(
        app.lines
            .iter()
            .take(body_rows)
            .map(|line| Line::from(line.as_str())),
    );

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
