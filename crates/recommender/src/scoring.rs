//! Frequency scoring restricted to the surviving candidates.

use catalog::PeakId;
use std::collections::HashMap;

use crate::answers::Answers;
use crate::candidates::CandidateSet;

/// How many answered questions endorse each candidate.
///
/// Ids never counted read as 0 through [`ScoreBoard::count`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    counts: HashMap<PeakId, u32>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Count endorsements of current candidates over every answered question
    /// in `[0, question_count)`, including the duration question.
    pub fn tally(answers: &Answers, candidates: &CandidateSet, question_count: usize) -> Self {
        let mut board = Self::new();
        for (_, endorsed) in answers.iter().filter(|(q, _)| *q < question_count) {
            for id in endorsed.iter().filter(|id| candidates.contains(id)) {
                board.increment(id);
            }
        }
        board
    }

    /// Endorsement count for `id`, 0 if it was never counted
    pub fn count(&self, id: &str) -> u32 {
        self.counts.get(id).copied().unwrap_or(0)
    }

    fn increment(&mut self, id: &str) {
        *self.counts.entry(id.to_string()).or_insert(0) += 1;
    }

    /// Counted ids with their scores, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.counts.iter().map(|(id, &count)| (id.as_str(), count))
    }
}
