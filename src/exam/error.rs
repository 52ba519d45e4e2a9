use crate::exam::model::{PartId, QuestionId};
use thiserror::Error;

/// Rejected session mutations. Raised at the mutation boundary so nothing
/// invalid ever reaches the renderer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExamError {
    #[error("unknown question '{0}'")]
    UnknownQuestion(QuestionId),

    #[error("unknown part '{0}'")]
    UnknownPart(PartId),

    #[error("part '{0}' has no questions")]
    EmptyPart(PartId),

    #[error("option {index} is out of range for question '{question}' ({len} options)")]
    OptionIndexOutOfRange {
        question: QuestionId,
        index: usize,
        len: usize,
    },

    #[error("answers are locked while results are shown")]
    AnswersLocked,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog needs at least one part and one question")]
    Empty,

    #[error("duplicate part id '{0}'")]
    DuplicatePart(PartId),

    #[error("duplicate question id '{0}'")]
    DuplicateQuestion(QuestionId),

    #[error("question '{question}' references unknown part '{part}'")]
    UnknownPartReference { question: QuestionId, part: PartId },

    #[error("question '{0}' has no options")]
    NoOptions(QuestionId),

    #[error("question '{question}' marks option {index} as correct but has {len} options")]
    CorrectOutOfRange {
        question: QuestionId,
        index: usize,
        len: usize,
    },

    #[error("invalid catalog file: {0}")]
    Parse(#[from] toml::de::Error),
}
