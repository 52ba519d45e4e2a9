use crate::config::AppConfig;
use crate::exam::progress;
use crate::exam::reveal;
use crate::exam::{ExamError, ExamSession};
use chrono::{DateTime, Local};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Navigator,
    Question,
}

/// Everything the view owns for one exam run. The session is the only
/// source of truth for answers, flags and position; the rest is view state.
pub struct AppState {
    pub config: AppConfig,
    pub session: ExamSession,
    pub focus: FocusPanel,
    /// Highlighted option in the question panel.
    pub option_cursor: usize,
    pub status_message: Option<String>,
    pub should_quit: bool,
    pub dirty: bool,
    pub started_at: DateTime<Local>,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(mut config: AppConfig, mut session: ExamSession) -> Self {
        if let Some(rejected) = config.ui.sanitize() {
            warn!(
                format = %rejected,
                fallback = %config.ui.timestamp_format,
                "invalid timestamp format, using fallback"
            );
        }
        if config.exam.start_revealed {
            session.reveal();
        }
        let mut state = Self {
            config,
            session,
            focus: FocusPanel::Question,
            option_cursor: 0,
            status_message: None,
            should_quit: false,
            dirty: true,
            started_at: Local::now(),
            tick_count: 0,
        };
        state.sync_cursor();
        state
    }

    /// Put the option cursor on the stored answer of the current question.
    pub fn sync_cursor(&mut self) {
        let id = self.session.current_question_id();
        self.option_cursor = self.session.answer_for(id).unwrap_or(0);
        self.dirty = true;
    }

    /// Surface a rejected mutation as a status line instead of failing.
    fn report<T>(&mut self, result: Result<T, ExamError>) -> Option<T> {
        self.dirty = true;
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(error = %e, "session update rejected");
                self.status_message = Some(e.to_string());
                None
            }
        }
    }

    pub fn select_option(&mut self, index: usize) {
        let id = self.session.current_question_id().clone();
        let result = self.session.select_option(&id, index);
        if self.report(result).is_some() {
            self.option_cursor = index;
        }
    }

    pub fn choose_highlighted(&mut self) {
        self.select_option(self.option_cursor);
    }

    pub fn toggle_flag(&mut self) {
        let id = self.session.current_question_id().clone();
        let result = self.session.toggle_flag(&id);
        if let Some(flagged) = self.report(result) {
            let number = self.session.catalog().number_of(&id).unwrap_or(0);
            self.status_message = Some(if flagged {
                format!("Question {} flagged for review", number)
            } else {
                format!("Question {} unflagged", number)
            });
        }
    }

    pub fn next_question(&mut self) {
        if self.session.next_question() {
            self.sync_cursor();
        } else {
            self.status_message = Some("This is the last question".to_string());
            self.dirty = true;
        }
    }

    pub fn previous_question(&mut self) {
        if self.session.previous_question() {
            self.sync_cursor();
        } else {
            self.status_message = Some("This is the first question".to_string());
            self.dirty = true;
        }
    }

    /// Browse to a neighbouring part, wrapping around. The current question
    /// stays where it is until the part is entered.
    pub fn browse_part(&mut self, forward: bool) {
        let parts = self.session.catalog().parts();
        let len = parts.len();
        let idx = self
            .session
            .catalog()
            .part_index(self.session.current_part())
            .unwrap_or(0);
        let next = if forward {
            (idx + 1) % len
        } else if idx == 0 {
            len - 1
        } else {
            idx - 1
        };
        let part = parts[next].id.clone();
        let result = self.session.select_part(&part);
        self.report(result);
    }

    /// Move onto the browsed part's first question unless the current
    /// question already belongs to it.
    pub fn enter_current_part(&mut self) {
        let part = self.session.current_part().clone();
        if self.session.current_question().part == part {
            return;
        }
        let result = self.session.first_in_part(&part);
        if self.report(result).is_some() {
            self.sync_cursor();
        }
    }

    pub fn move_cursor_up(&mut self) {
        self.option_cursor = self.option_cursor.saturating_sub(1);
        self.dirty = true;
    }

    pub fn move_cursor_down(&mut self) {
        let len = self.session.current_question().options.len();
        if self.option_cursor + 1 < len {
            self.option_cursor += 1;
        }
        self.dirty = true;
    }

    pub fn toggle_reveal(&mut self) {
        let shown = self.session.toggle_reveal();
        if shown {
            let score = reveal::score(&self.session);
            info!(
                correct = score.correct,
                answered = score.answered,
                total = score.total,
                "answers revealed"
            );
            self.status_message = Some(format!(
                "Results: {}/{} correct ({}%)",
                score.correct,
                score.total,
                score.percent()
            ));
        } else {
            self.status_message = Some("Back to answering".to_string());
        }
        self.dirty = true;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Navigator => FocusPanel::Question,
            FocusPanel::Question => FocusPanel::Navigator,
        };
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        let summary = progress::summary(&self.session);
        let mut s = format!(
            "Answered: {}/{} | Flagged: {} | Remaining: {}",
            summary.answered, summary.total, summary.flagged, summary.remaining
        );
        if self.session.show_answer() {
            let score = reveal::score(&self.session);
            s.push_str(&format!(" | Score: {}/{}", score.correct, score.total));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exam::model::tests::two_part_catalog;
    use crate::exam::model::{PartId, QuestionId};

    fn state() -> AppState {
        AppState::new(AppConfig::default(), ExamSession::new(two_part_catalog()))
    }

    #[test]
    fn test_rejected_selection_becomes_status_message() {
        let mut state = state();
        state.select_option(7);
        assert!(state.session.answers().is_empty());
        assert!(state
            .status_message
            .as_deref()
            .unwrap()
            .contains("out of range"));
    }

    #[test]
    fn test_cursor_follows_stored_answer() {
        let mut state = state();
        state.select_option(2);
        state.next_question();
        assert_eq!(state.option_cursor, 0);
        state.previous_question();
        assert_eq!(state.option_cursor, 2);
    }

    #[test]
    fn test_cursor_clamped_to_options() {
        let mut state = state();
        for _ in 0..10 {
            state.move_cursor_down();
        }
        assert_eq!(state.option_cursor, 2);
        for _ in 0..10 {
            state.move_cursor_up();
        }
        assert_eq!(state.option_cursor, 0);
    }

    #[test]
    fn test_browse_then_enter_part() {
        let mut state = state();
        state.browse_part(true);
        assert_eq!(state.session.current_part(), &PartId::new("B"));
        assert_eq!(state.session.current_question_id(), &QuestionId::new("Q1"));
        state.enter_current_part();
        assert_eq!(state.session.current_question_id(), &QuestionId::new("Q3"));

        state.browse_part(true);
        assert_eq!(state.session.current_part(), &PartId::new("A"));
        state.browse_part(false);
        assert_eq!(state.session.current_part(), &PartId::new("B"));
    }

    #[test]
    fn test_start_revealed_locks_answers() {
        let mut config = AppConfig::default();
        config.exam.start_revealed = true;
        let mut state = AppState::new(config, ExamSession::new(two_part_catalog()));
        assert!(state.session.show_answer());
        state.select_option(1);
        assert!(state.session.answers().is_empty());
        assert!(state.status_message.is_some());
    }

    #[test]
    fn test_status_line_counts() {
        let mut state = state();
        state.select_option(1);
        state.toggle_flag();
        state.status_message = None;
        assert_eq!(
            state.status_line(),
            "Answered: 1/3 | Flagged: 1 | Remaining: 2"
        );
        state.toggle_reveal();
        state.status_message = None;
        assert!(state.status_line().ends_with("Score: 1/3"));
    }
}
