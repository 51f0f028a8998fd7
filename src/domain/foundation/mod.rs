//! Shared value objects for the domain layer.

mod errors;
mod ids;
mod percentage;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{OptionId, QuestionId, VoteId};
pub use percentage::Percentage;
pub use timestamp::Timestamp;
