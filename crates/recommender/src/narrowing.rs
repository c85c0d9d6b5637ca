//! Candidate narrowing with the hard-constraint fallback.
//!
//! ## Algorithm
//! 1. Base: the duration answer (question 0), or every catalog peak
//! 2. Each further answered question intersects the candidates, in question order
//! 3. The first empty intersection stops narrowing
//! 4. If nothing survives, candidates revert to the base

use catalog::Catalog;
use tracing::debug;

use crate::answers::Answers;
use crate::candidates::CandidateSet;

/// Result of narrowing the candidate set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrowing {
    pub candidates: CandidateSet,
    /// True when the intersections emptied the set and the base was restored
    pub fell_back: bool,
}

/// Starting candidates: question 0's endorsement list, or all catalog ids
pub fn candidate_base(catalog: &Catalog, answers: &Answers) -> CandidateSet {
    match answers.get(0) {
        Some(duration) => CandidateSet::from_ids(duration.iter().cloned()),
        None => CandidateSet::from_ids(catalog.ids()),
    }
}

/// Narrow the base by every answered question in `1..question_count`.
pub fn narrow(catalog: &Catalog, answers: &Answers, question_count: usize) -> Narrowing {
    let base = candidate_base(catalog, answers);
    let mut candidates = base.clone();

    for question in 1..question_count {
        let Some(endorsed) = answers.get(question) else {
            continue;
        };
        let input = candidates.len();
        candidates = candidates.intersect(endorsed);
        debug!(
            "Narrowed by question {} (input count: {}, output count: {})",
            question,
            input,
            candidates.len()
        );
        if candidates.is_empty() {
            break;
        }
    }

    if candidates.is_empty() {
        debug!(
            "No candidate survived narrowing, falling back to {} base candidates",
            base.len()
        );
        return Narrowing {
            candidates: base,
            fell_back: true,
        };
    }

    Narrowing {
        candidates,
        fell_back: false,
    }
}
