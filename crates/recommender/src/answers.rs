//! The per-question answer record.
//!
//! Answers map a question index to the endorsement list of the option the
//! user picked. Lists are normalised on the way in: duplicates are dropped
//! (first occurrence wins) and an empty list means "not answered".

use catalog::PeakId;
use std::collections::BTreeMap;

use crate::candidates::dedup_ids;

/// Selected endorsement lists keyed by question index.
///
/// Iteration is in ascending question order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    by_question: BTreeMap<usize, Vec<PeakId>>,
}

impl Answers {
    pub fn new() -> Self {
        Self {
            by_question: BTreeMap::new(),
        }
    }

    /// Record the endorsement list chosen for `question`, replacing any
    /// previous answer. An empty list clears the question instead.
    pub fn record<I>(&mut self, question: usize, peaks: I)
    where
        I: IntoIterator,
        I::Item: Into<PeakId>,
    {
        let peaks = dedup_ids(peaks);
        if peaks.is_empty() {
            self.by_question.remove(&question);
        } else {
            self.by_question.insert(question, peaks);
        }
    }

    /// Remove the answer for `question`, returning it if there was one
    pub fn clear(&mut self, question: usize) -> Option<Vec<PeakId>> {
        self.by_question.remove(&question)
    }

    /// Endorsement list recorded for `question`
    pub fn get(&self, question: usize) -> Option<&[PeakId]> {
        self.by_question.get(&question).map(|v| v.as_slice())
    }

    pub fn is_answered(&self, question: usize) -> bool {
        self.by_question.contains_key(&question)
    }

    /// True once every question in `[0, question_count)` has an answer
    pub fn is_complete(&self, question_count: usize) -> bool {
        (0..question_count).all(|q| self.is_answered(q))
    }

    /// Number of answered questions in `[0, question_count)`
    pub fn count_within(&self, question_count: usize) -> usize {
        self.by_question.range(..question_count).count()
    }

    /// Number of answered questions
    pub fn len(&self) -> usize {
        self.by_question.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_question.is_empty()
    }

    /// `(question, endorsement list)` pairs in ascending question order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[PeakId])> + '_ {
        self.by_question.iter().map(|(&q, peaks)| (q, peaks.as_slice()))
    }
}

impl<I> FromIterator<(usize, I)> for Answers
where
    I: IntoIterator,
    I::Item: Into<PeakId>,
{
    fn from_iter<T: IntoIterator<Item = (usize, I)>>(iter: T) -> Self {
        let mut answers = Answers::new();
        for (question, peaks) in iter {
            answers.record(question, peaks);
        }
        answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_dedups_in_first_seen_order() {
        let mut answers = Answers::new();
        answers.record(0, ["gimpel", "thaneller", "gimpel", "aggenstein"]);

        assert_eq!(answers.get(0).unwrap(), ["gimpel", "thaneller", "aggenstein"]);
    }

    #[test]
    fn test_empty_list_is_unanswered() {
        let mut answers = Answers::new();
        answers.record(1, ["hahnenkamm"]);
        answers.record(1, Vec::<String>::new());

        assert!(!answers.is_answered(1));
        assert!(answers.is_empty());
    }

    #[test]
    fn test_is_complete() {
        let mut answers: Answers = [(0, vec!["einstein"]), (2, vec!["alpkopf"])]
            .into_iter()
            .collect();
        assert!(!answers.is_complete(3));

        answers.record(1, ["alpkopf"]);
        assert!(answers.is_complete(3));
        assert!(answers.is_complete(2));
    }

    #[test]
    fn test_count_within_ignores_out_of_range_questions() {
        let answers: Answers = [(0, vec!["a"]), (1, vec!["b"]), (7, vec!["c"])]
            .into_iter()
            .collect();

        assert_eq!(answers.len(), 3);
        assert_eq!(answers.count_within(2), 2);
        assert_eq!(answers.count_within(8), 3);
        assert_eq!(answers.count_within(0), 0);
    }

    #[test]
    fn test_iter_in_question_order() {
        let answers: Answers = [(2, vec!["c"]), (0, vec!["a"]), (1, vec!["b"])]
            .into_iter()
            .collect();

        let questions: Vec<usize> = answers.iter().map(|(q, _)| q).collect();
        assert_eq!(questions, vec![0, 1, 2]);
    }
}
