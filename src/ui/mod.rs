mod header;
mod layout;
mod navigator;
mod question_view;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    header::render(frame, app_layout.header, state);
    navigator::render(frame, app_layout.navigator, state);
    question_view::render(frame, app_layout.question, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

pub(crate) fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cut `text` to at most `max` terminal columns, ending with `…` when cut.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::exam::loader::sample_catalog;
    use crate::exam::model::tests::two_part_catalog;
    use crate::exam::model::QuestionId;
    use crate::exam::ExamSession;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 32)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Reading", 10), "Reading");
        assert_eq!(truncate("Part 2: Reading", 8), "Part 2:…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_renders_progress_and_question() {
        let mut session = ExamSession::new(two_part_catalog());
        session.select_option(&QuestionId::new("Q1"), 0).unwrap();
        let state = AppState::new(AppConfig::default(), session);
        let screen = draw(&state);

        assert!(screen.contains("Sample"));
        assert!(screen.contains("Part A 1/2"));
        assert!(screen.contains("Part B 0/1"));
        assert!(screen.contains("Question 1 of 3"));
        assert!(screen.contains("Prompt for Q1"));
        assert!(screen.contains("your answer"));
        assert!(screen.contains("Remaining: 2"));
    }

    #[test]
    fn test_renders_with_invalid_timestamp_format() {
        let mut config = AppConfig::default();
        config.ui.timestamp_format = "%Q".to_string();
        let state = AppState::new(config, ExamSession::new(two_part_catalog()));
        assert_eq!(state.config.ui.timestamp_format, "%H:%M");

        let screen = draw(&state);
        assert!(screen.contains("Answered: 0/3"));
        assert!(screen.contains(&state.started_at.format("[%H:%M]").to_string()));
    }

    #[test]
    fn test_renders_reveal_mode() {
        let mut session = ExamSession::new(sample_catalog().unwrap());
        let first = session.current_question_id().clone();
        session.select_option(&first, 0).unwrap();
        session.reveal();
        let state = AppState::new(AppConfig::default(), session);
        let screen = draw(&state);

        assert!(screen.contains("RESULTS"));
        assert!(screen.contains("✗ your answer"));
        assert!(screen.contains("✓"));
        assert!(screen.contains("Score: 0/9"));
    }
}
