//! Derived progress for display.
//!
//! Nothing here is cached: every value is recomputed from the session on each
//! render. Exams are tens of questions, so the linear scans are fine.

use crate::exam::model::{PartId, QuestionId};
use crate::exam::session::ExamSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartProgress {
    pub answered: usize,
    pub total: usize,
}

impl PartProgress {
    /// Every question answered. A part without questions is never complete.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.answered == self.total
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamSummary {
    pub total: usize,
    pub answered: usize,
    pub flagged: usize,
    pub remaining: usize,
    /// Neither answered nor flagged.
    pub untouched: usize,
}

/// Visual status of a question in the navigator, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionStatus {
    Answered,
    Flagged,
    Current,
    Unanswered,
}

#[derive(Debug, Clone)]
pub struct GridCell {
    pub number: usize,
    pub status: QuestionStatus,
    /// The cell is the question on screen, whatever its status says.
    pub is_current: bool,
}

#[derive(Debug, Clone)]
pub struct PartGrid {
    pub title: String,
    pub progress: PartProgress,
    pub is_current: bool,
    pub cells: Vec<GridCell>,
}

pub fn part_progress(session: &ExamSession, part: &PartId) -> PartProgress {
    let mut progress = PartProgress {
        answered: 0,
        total: 0,
    };
    for q in session.catalog().questions_in(part) {
        progress.total += 1;
        if session.is_answered(&q.id) {
            progress.answered += 1;
        }
    }
    progress
}

pub fn summary(session: &ExamSession) -> ExamSummary {
    let total = session.catalog().question_count();
    let answered = session.answers().len();
    let untouched = session
        .catalog()
        .questions()
        .iter()
        .filter(|q| !session.is_answered(&q.id) && !session.is_flagged(&q.id))
        .count();
    ExamSummary {
        total,
        answered,
        flagged: session.flags().len(),
        remaining: total.saturating_sub(answered),
        untouched,
    }
}

/// First match wins: answered, flagged, current, unanswered.
pub fn question_status(session: &ExamSession, id: &QuestionId) -> QuestionStatus {
    if session.is_answered(id) {
        QuestionStatus::Answered
    } else if session.is_flagged(id) {
        QuestionStatus::Flagged
    } else if session.current_question_id() == id {
        QuestionStatus::Current
    } else {
        QuestionStatus::Unanswered
    }
}

/// Navigator render description: one entry per part, in catalog order.
pub fn grid(session: &ExamSession) -> Vec<PartGrid> {
    let catalog = session.catalog();
    catalog
        .parts()
        .iter()
        .map(|part| {
            let cells = catalog
                .questions()
                .iter()
                .enumerate()
                .filter(|(_, q)| q.part == part.id)
                .map(|(i, q)| GridCell {
                    number: i + 1,
                    status: question_status(session, &q.id),
                    is_current: session.current_question_id() == &q.id,
                })
                .collect();
            PartGrid {
                title: part.title.clone(),
                progress: part_progress(session, &part.id),
                is_current: session.current_part() == &part.id,
                cells,
            }
        })
        .collect()
}
