use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let bg_style = Style::default().bg(Theme::BG_ELEVATED);
    let catalog = state.session.catalog();

    let part_title = catalog
        .part(state.session.current_part())
        .map(|p| p.title.as_str())
        .unwrap_or("");

    let mut spans = vec![
        Span::styled(
            " ◆ ",
            Style::default()
                .fg(Theme::ACCENT_TEAL)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            catalog.title(),
            Style::default()
                .fg(Theme::TEXT_PRIMARY)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " │ ",
            Style::default().fg(Theme::BORDER_DIM).bg(Theme::BG_ELEVATED),
        ),
        Span::styled(
            part_title,
            Style::default()
                .fg(Theme::ACCENT_TEAL)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::ITALIC),
        ),
    ];

    if state.session.show_answer() {
        spans.push(Span::styled(
            " │ ",
            Style::default().fg(Theme::BORDER_DIM).bg(Theme::BG_ELEVATED),
        ));
        spans.push(Span::styled(
            " RESULTS ",
            Style::default()
                .fg(Theme::BG_DARK)
                .bg(Theme::ACCENT_LAVENDER)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(bg_style);
    frame.render_widget(paragraph, area);
}
