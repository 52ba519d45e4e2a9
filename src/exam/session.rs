//! Exam session state: answers, review flags, and navigation.
//!
//! An [`ExamSession`] is created when an exam is loaded and dropped when the
//! view goes away. Every mutation validates its input against the catalog and
//! returns [`ExamError`] instead of storing something the renderer could not
//! resolve.

use crate::exam::error::ExamError;
use crate::exam::model::{Catalog, PartId, Question, QuestionId};
use std::collections::{HashMap, HashSet};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ExamSession {
    catalog: Catalog,
    answers: HashMap<QuestionId, usize>,
    flags: HashSet<QuestionId>,
    current_question: QuestionId,
    current_part: PartId,
    show_answer: bool,
}

impl ExamSession {
    /// Start a session positioned on the first question of the catalog.
    pub fn new(catalog: Catalog) -> Self {
        // Catalog::new guarantees at least one question.
        let first = &catalog.questions()[0];
        let current_question = first.id.clone();
        let current_part = first.part.clone();
        Self {
            catalog,
            answers: HashMap::new(),
            flags: HashSet::new(),
            current_question,
            current_part,
            show_answer: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn answers(&self) -> &HashMap<QuestionId, usize> {
        &self.answers
    }

    pub fn flags(&self) -> &HashSet<QuestionId> {
        &self.flags
    }

    pub fn answer_for(&self, id: &QuestionId) -> Option<usize> {
        self.answers.get(id).copied()
    }

    pub fn is_answered(&self, id: &QuestionId) -> bool {
        self.answers.contains_key(id)
    }

    pub fn is_flagged(&self, id: &QuestionId) -> bool {
        self.flags.contains(id)
    }

    pub fn current_question_id(&self) -> &QuestionId {
        &self.current_question
    }

    pub fn current_question(&self) -> &Question {
        // current_question is only ever set to ids that exist in the catalog
        self.catalog
            .question(&self.current_question)
            .unwrap_or(&self.catalog.questions()[0])
    }

    pub fn current_part(&self) -> &PartId {
        &self.current_part
    }

    pub fn show_answer(&self) -> bool {
        self.show_answer
    }

    fn lookup(&self, id: &QuestionId) -> Result<&Question, ExamError> {
        self.catalog
            .question(id)
            .ok_or_else(|| ExamError::UnknownQuestion(id.clone()))
    }

    /// Record the chosen option for a question. Last write wins.
    pub fn select_option(&mut self, id: &QuestionId, index: usize) -> Result<(), ExamError> {
        if self.show_answer {
            return Err(ExamError::AnswersLocked);
        }
        let len = self.lookup(id)?.options.len();
        if index >= len {
            return Err(ExamError::OptionIndexOutOfRange {
                question: id.clone(),
                index,
                len,
            });
        }
        let previous = self.answers.insert(id.clone(), index);
        debug!(question = %id, index, ?previous, "option selected");
        Ok(())
    }

    /// Flag the question if unflagged, unflag it otherwise. Returns the new state.
    pub fn toggle_flag(&mut self, id: &QuestionId) -> Result<bool, ExamError> {
        self.lookup(id)?;
        let flagged = if self.flags.remove(id) {
            false
        } else {
            self.flags.insert(id.clone());
            true
        };
        debug!(question = %id, flagged, "flag toggled");
        Ok(flagged)
    }

    /// Move to a question; the current part follows the question.
    pub fn select_question(&mut self, id: &QuestionId) -> Result<(), ExamError> {
        let part = self.lookup(id)?.part.clone();
        self.current_question = id.clone();
        self.current_part = part;
        Ok(())
    }

    /// Browse a part without moving off the current question.
    pub fn select_part(&mut self, id: &PartId) -> Result<(), ExamError> {
        if self.catalog.part(id).is_none() {
            return Err(ExamError::UnknownPart(id.clone()));
        }
        self.current_part = id.clone();
        Ok(())
    }

    /// Jump to the first question of a part.
    pub fn first_in_part(&mut self, id: &PartId) -> Result<(), ExamError> {
        if self.catalog.part(id).is_none() {
            return Err(ExamError::UnknownPart(id.clone()));
        }
        let first = self
            .catalog
            .questions_in(id)
            .next()
            .map(|q| q.id.clone())
            .ok_or_else(|| ExamError::EmptyPart(id.clone()))?;
        self.select_question(&first)
    }

    /// Step to the next question in catalog order. Returns false at the end.
    pub fn next_question(&mut self) -> bool {
        self.step(1)
    }

    /// Step to the previous question in catalog order. Returns false at the start.
    pub fn previous_question(&mut self) -> bool {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> bool {
        let Some(pos) = self.catalog.position(&self.current_question) else {
            return false;
        };
        let Some(target) = pos.checked_add_signed(delta) else {
            return false;
        };
        let Some(next) = self.catalog.questions().get(target) else {
            return false;
        };
        self.current_question = next.id.clone();
        self.current_part = next.part.clone();
        true
    }

    pub fn reveal(&mut self) {
        self.show_answer = true;
    }

    pub fn hide_answers(&mut self) {
        self.show_answer = false;
    }

    pub fn toggle_reveal(&mut self) -> bool {
        if self.show_answer {
            self.hide_answers();
        } else {
            self.reveal();
        }
        self.show_answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exam::model::tests::{part, question, two_part_catalog};
    use crate::exam::model::Catalog;

    fn q(id: &str) -> QuestionId {
        QuestionId::new(id)
    }

    fn p(id: &str) -> PartId {
        PartId::new(id)
    }

    #[test]
    fn test_starts_on_first_question() {
        let session = ExamSession::new(two_part_catalog());
        assert_eq!(session.current_question_id(), &q("Q1"));
        assert_eq!(session.current_part(), &p("A"));
        assert!(session.answers().is_empty());
        assert!(session.flags().is_empty());
        assert!(!session.show_answer());
    }

    #[test]
    fn test_select_option_last_write_wins() {
        let mut session = ExamSession::new(two_part_catalog());
        session.select_option(&q("Q1"), 0).unwrap();
        session.select_option(&q("Q1"), 2).unwrap();
        assert_eq!(session.answer_for(&q("Q1")), Some(2));
        assert_eq!(session.answers().len(), 1);
    }

    #[test]
    fn test_select_option_rejects_bad_input() {
        let mut session = ExamSession::new(two_part_catalog());
        assert_eq!(
            session.select_option(&q("Q9"), 0),
            Err(ExamError::UnknownQuestion(q("Q9")))
        );
        assert_eq!(
            session.select_option(&q("Q1"), 3),
            Err(ExamError::OptionIndexOutOfRange {
                question: q("Q1"),
                index: 3,
                len: 3
            })
        );
        assert!(session.answers().is_empty());
    }

    #[test]
    fn test_answers_locked_in_reveal_mode() {
        let mut session = ExamSession::new(two_part_catalog());
        session.select_option(&q("Q1"), 2).unwrap();
        session.reveal();
        assert_eq!(session.select_option(&q("Q1"), 1), Err(ExamError::AnswersLocked));
        assert_eq!(session.answer_for(&q("Q1")), Some(2));
        session.hide_answers();
        session.select_option(&q("Q1"), 1).unwrap();
        assert_eq!(session.answer_for(&q("Q1")), Some(1));
    }

    #[test]
    fn test_toggle_flag_is_involution() {
        let mut session = ExamSession::new(two_part_catalog());
        assert_eq!(session.toggle_flag(&q("Q2")), Ok(true));
        assert!(session.is_flagged(&q("Q2")));
        assert_eq!(session.toggle_flag(&q("Q2")), Ok(false));
        assert!(session.flags().is_empty());
        assert!(session.toggle_flag(&q("nope")).is_err());
    }

    #[test]
    fn test_flags_independent_of_answers() {
        let mut session = ExamSession::new(two_part_catalog());
        session.select_option(&q("Q1"), 1).unwrap();
        session.toggle_flag(&q("Q1")).unwrap();
        session.toggle_flag(&q("Q1")).unwrap();
        assert!(session.is_answered(&q("Q1")));
        assert!(!session.is_flagged(&q("Q1")));
    }

    #[test]
    fn test_select_question_derives_part() {
        let mut session = ExamSession::new(two_part_catalog());
        session.select_question(&q("Q3")).unwrap();
        assert_eq!(session.current_question_id(), &q("Q3"));
        assert_eq!(session.current_part(), &p("B"));
        assert!(session.select_question(&q("Q7")).is_err());
        assert_eq!(session.current_question_id(), &q("Q3"));
    }

    #[test]
    fn test_select_part_keeps_current_question() {
        let mut session = ExamSession::new(two_part_catalog());
        session.select_part(&p("B")).unwrap();
        assert_eq!(session.current_part(), &p("B"));
        assert_eq!(session.current_question_id(), &q("Q1"));
        assert_eq!(session.select_part(&p("Z")), Err(ExamError::UnknownPart(p("Z"))));
        assert_eq!(session.current_part(), &p("B"));
    }

    #[test]
    fn test_first_in_part_is_question_driven() {
        let mut session = ExamSession::new(two_part_catalog());
        session.select_part(&p("B")).unwrap();
        session.first_in_part(&p("B")).unwrap();
        assert_eq!(session.current_question_id(), &q("Q3"));
        assert_eq!(session.current_part(), &p("B"));
    }

    #[test]
    fn test_first_in_part_reports_empty_part() {
        let catalog = Catalog::new(
            "x",
            vec![part("A"), part("B")],
            vec![question("Q1", "A", 2, 0)],
        )
        .unwrap();
        let mut session = ExamSession::new(catalog);
        assert_eq!(session.first_in_part(&p("B")), Err(ExamError::EmptyPart(p("B"))));
        assert_eq!(session.first_in_part(&p("Z")), Err(ExamError::UnknownPart(p("Z"))));
        assert_eq!(session.current_question_id(), &q("Q1"));
        assert_eq!(session.current_part(), &p("A"));
    }

    #[test]
    fn test_step_crosses_parts_and_clamps() {
        let mut session = ExamSession::new(two_part_catalog());
        assert!(!session.previous_question());
        assert!(session.next_question());
        assert!(session.next_question());
        assert_eq!(session.current_question_id(), &q("Q3"));
        assert_eq!(session.current_part(), &p("B"));
        assert!(!session.next_question());
        assert!(session.previous_question());
        assert_eq!(session.current_part(), &p("A"));
    }
}
