//! Session crate for the peak finder.
//!
//! This crate holds the questionnaire session that tracks a user's answers
//! and keeps the recommendation in sync with them.

pub mod session;

pub use session::{PeakRecommendation, QuestionnaireSession};
