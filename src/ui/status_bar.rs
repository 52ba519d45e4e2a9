use crate::app::state::*;
use crate::ui::display_width;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Session start time
    parts.push(Span::styled(
        format!(
            " [{}] ",
            state
                .started_at
                .format(&state.config.ui.timestamp_format)
        ),
        Style::default().fg(Theme::ACCENT_GREEN).bg(Theme::BG_ELEVATED),
    ));

    // Status text
    let status_style = if state.status_message.is_some() {
        Style::default().fg(Theme::ACCENT_AMBER).bg(Theme::BG_ELEVATED)
    } else {
        Theme::status_bar()
    };
    parts.push(Span::styled(format!(" {} ", state.status_line()), status_style));

    // Focus indicator
    let focus_name = match state.focus {
        FocusPanel::Navigator => "NAVIGATOR",
        FocusPanel::Question => "QUESTION",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| display_width(&s.content)).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 4);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
