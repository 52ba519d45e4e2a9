//! Question catalog data model.
//!
//! A [`Catalog`] is an ordered list of parts and an ordered list of
//! questions. Questions point at their part by id; the questions of a part are
//! always derived by filtering, never stored twice.

use crate::exam::error::CatalogError;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct PartId(pub String);

#[cfg(test)]
impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

#[cfg(test)]
impl PartId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Listening,
    #[default]
    Reading,
}

impl QuestionKind {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::Listening => "Listening",
            QuestionKind::Reading => "Reading",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub part: PartId,
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct: usize,
    #[serde(default)]
    pub passage: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Part {
    pub id: PartId,
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    title: String,
    parts: Vec<Part>,
    questions: Vec<Question>,
}

impl Catalog {
    /// Build a catalog, rejecting anything the session could not navigate.
    pub fn new(
        title: impl Into<String>,
        parts: Vec<Part>,
        questions: Vec<Question>,
    ) -> Result<Self, CatalogError> {
        if parts.is_empty() || questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut part_ids = HashSet::new();
        for part in &parts {
            if !part_ids.insert(&part.id) {
                return Err(CatalogError::DuplicatePart(part.id.clone()));
            }
        }

        let mut question_ids = HashSet::new();
        for q in &questions {
            if !question_ids.insert(&q.id) {
                return Err(CatalogError::DuplicateQuestion(q.id.clone()));
            }
            if !part_ids.contains(&q.part) {
                return Err(CatalogError::UnknownPartReference {
                    question: q.id.clone(),
                    part: q.part.clone(),
                });
            }
            if q.options.is_empty() {
                return Err(CatalogError::NoOptions(q.id.clone()));
            }
            if q.correct >= q.options.len() {
                return Err(CatalogError::CorrectOutOfRange {
                    question: q.id.clone(),
                    index: q.correct,
                    len: q.options.len(),
                });
            }
        }

        Ok(Self {
            title: title.into(),
            parts,
            questions,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }

    pub fn part(&self, id: &PartId) -> Option<&Part> {
        self.parts.iter().find(|p| &p.id == id)
    }

    pub fn questions_in<'a>(&'a self, part: &'a PartId) -> impl Iterator<Item = &'a Question> + 'a {
        self.questions.iter().filter(move |q| &q.part == part)
    }

    /// Catalog index of a question.
    pub fn position(&self, id: &QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| &q.id == id)
    }

    /// 1-based number shown to the user.
    pub fn number_of(&self, id: &QuestionId) -> Option<usize> {
        self.position(id).map(|i| i + 1)
    }

    pub fn part_index(&self, id: &PartId) -> Option<usize> {
        self.parts.iter().position(|p| &p.id == id)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
