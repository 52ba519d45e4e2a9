//! Exam session core: catalog model, session state, and the pure functions
//! that derive progress and grading for display.

pub mod error;
pub mod loader;
pub mod model;
pub mod progress;
pub mod reveal;
pub mod session;

pub use error::ExamError;
pub use session::ExamSession;
