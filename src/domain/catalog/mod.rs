//! The static question catalog: questions, answer options, and the four
//! management-style categories used for classification.
//!
//! The catalog is loaded once and immutable for the process lifetime.

mod catalog;
mod question;
mod style;

pub use catalog::{default_catalog, QuestionCatalog};
pub use question::{AnswerOption, Question, SelectionMode};
pub use style::StyleCategory;
