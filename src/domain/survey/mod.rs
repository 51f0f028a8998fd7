//! Survey submissions: answer sheets, vote records, classification,
//! aggregation, and simulated votes.

mod aggregator;
mod answers;
mod classifier;
mod record;
mod simulation;

pub use aggregator::{aggregate, AggregatedStats};
pub use answers::{AnswerSheet, AnswerValidationError};
pub use classifier::StyleClassifier;
pub use record::{ParticipantName, VoteRecord};
pub use simulation::{random_sheet, simulated_name};
