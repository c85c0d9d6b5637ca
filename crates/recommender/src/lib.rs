//! Peak recommendation from questionnaire answers.
//!
//! This crate provides:
//! - `Answers`, the per-question record of selected endorsement lists
//! - Candidate narrowing with the duration fallback
//! - Frequency scoring over surviving candidates
//! - Deterministic selection (highest score, then alphabetical)
//!
//! ## Architecture
//! A recommendation runs in stages:
//! 1. The duration answer (question 0) forms the candidate base
//! 2. Every other answer intersects the candidates; an empty result restores the base
//! 3. Candidates are scored by how many answers endorse them
//! 4. The best-scoring candidate wins, ties broken alphabetically
//!
//! ## Example Usage
//! ```ignore
//! use recommender::{Answers, Recommender};
//!
//! let recommender = Recommender::new(questionnaire.clone());
//!
//! let mut answers = Answers::new();
//! answers.record(0, questionnaire.option(0, 1)?.peaks.iter().cloned());
//! answers.record(1, questionnaire.option(1, 0)?.peaks.iter().cloned());
//!
//! let peak_id = recommender.recommend(&answers);
//! ```

pub mod answers;
pub mod candidates;
pub mod collation;
pub mod narrowing;
pub mod scoring;
pub mod selection;
pub mod recommend;

// Re-export main types
pub use answers::Answers;
pub use candidates::CandidateSet;
pub use collation::locale_cmp;
pub use narrowing::{Narrowing, candidate_base, narrow};
pub use recommend::{Evaluation, Recommender, evaluate, recommend};
pub use scoring::ScoreBoard;
pub use selection::select_best;
