//! Answer reveal (grading display).
//!
//! Correctness is never stored: styles and scores are recomputed from the
//! selected option and the question's correct index whenever they are needed.

use crate::exam::model::Question;
use crate::exam::session::ExamSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionStyle {
    Default,
    /// Chosen option while answers are still editable.
    Selected,
    Correct,
    IncorrectSelected,
}

pub fn option_style(
    question: &Question,
    selected: Option<usize>,
    show_answer: bool,
    index: usize,
) -> OptionStyle {
    if !show_answer {
        return if selected == Some(index) {
            OptionStyle::Selected
        } else {
            OptionStyle::Default
        };
    }
    if index == question.correct {
        OptionStyle::Correct
    } else if selected == Some(index) {
        OptionStyle::IncorrectSelected
    } else {
        OptionStyle::Default
    }
}

/// Styles for every option of a question, in option order.
pub fn option_styles(session: &ExamSession, question: &Question) -> Vec<OptionStyle> {
    let selected = session.answer_for(&question.id);
    (0..question.options.len())
        .map(|i| option_style(question, selected, session.show_answer(), i))
        .collect()
}

pub fn is_correct(question: &Question, selected: Option<usize>) -> bool {
    selected == Some(question.correct)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub answered: usize,
    pub total: usize,
}

impl Score {
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.correct * 100 / self.total) as u32
    }
}

pub fn score(session: &ExamSession) -> Score {
    let questions = session.catalog().questions();
    let correct = questions
        .iter()
        .filter(|q| is_correct(q, session.answer_for(&q.id)))
        .count();
    Score {
        correct,
        answered: session.answers().len(),
        total: questions.len(),
    }
}
