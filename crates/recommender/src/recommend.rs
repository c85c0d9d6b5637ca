//! The recommendation entry points.
//!
//! `evaluate` runs the whole algorithm and reports every intermediate result;
//! `recommend` keeps only the winner. Both are pure: they read the catalog
//! and answers and allocate their own working sets.

use catalog::{Catalog, PeakId, Questionnaire};
use std::sync::Arc;
use tracing::debug;

use crate::answers::Answers;
use crate::narrowing::narrow;
use crate::scoring::ScoreBoard;
use crate::selection::select_best;

/// Everything the algorithm decided on the way to a recommendation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Winning peak id. May name a peak missing from the catalog when an
    /// endorsement list contains an unknown id.
    pub best: Option<PeakId>,
    /// Score of the winner (0 when there is no winner)
    pub best_score: u32,
    /// Candidates that survived narrowing (or the fallback base), in order
    pub candidates: Vec<PeakId>,
    pub scores: ScoreBoard,
    /// True when narrowing emptied the set and the duration base was used
    pub fell_back: bool,
}

/// Run narrowing, fallback, scoring and selection.
pub fn evaluate(catalog: &Catalog, answers: &Answers, question_count: usize) -> Evaluation {
    let narrowing = narrow(catalog, answers, question_count);
    let scores = ScoreBoard::tally(answers, &narrowing.candidates, question_count);
    let best = select_best(&narrowing.candidates, &scores).map(str::to_string);
    let best_score = best.as_deref().map(|id| scores.count(id)).unwrap_or(0);

    debug!(
        "Selected {:?} (score {}) from {} candidates",
        best,
        best_score,
        narrowing.candidates.len()
    );

    Evaluation {
        best,
        best_score,
        candidates: narrowing.candidates.into_vec(),
        scores,
        fell_back: narrowing.fell_back,
    }
}

/// Recommend a single peak id, or `None` when there are no candidates.
///
/// The caller must check the id against the catalog before looking up its
/// attributes.
pub fn recommend(catalog: &Catalog, answers: &Answers, question_count: usize) -> Option<PeakId> {
    evaluate(catalog, answers, question_count).best
}

/// Recommender bound to a loaded questionnaire.
///
/// Cheap to clone and safe to share across threads; the questionnaire is
/// never mutated.
#[derive(Debug, Clone)]
pub struct Recommender {
    questionnaire: Arc<Questionnaire>,
}

impl Recommender {
    pub fn new(questionnaire: Arc<Questionnaire>) -> Self {
        Self { questionnaire }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    /// Evaluate answers against this questionnaire's catalog and question count
    pub fn evaluate(&self, answers: &Answers) -> Evaluation {
        evaluate(
            self.questionnaire.catalog(),
            answers,
            self.questionnaire.question_count(),
        )
    }

    pub fn recommend(&self, answers: &Answers) -> Option<PeakId> {
        self.evaluate(answers).best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Peak;

    fn catalog(ids: &[&str]) -> Catalog {
        Catalog::from_peaks(ids.iter().map(|id| Peak {
            id: id.to_string(),
            name: id.to_string(),
            start: "Tannheim, Tirol".to_string(),
            duration: "2-3h".to_string(),
        }))
        .unwrap()
    }

    fn answers(pairs: &[(usize, &[&str])]) -> Answers {
        pairs.iter().map(|&(q, ids)| (q, ids.iter().copied())).collect()
    }

    #[test]
    fn test_overlap_narrows_to_single_peak() {
        let catalog = catalog(&["a", "b", "c"]);
        let answers = answers(&[(0, &["a", "b"]), (1, &["b", "c"])]);

        assert_eq!(recommend(&catalog, &answers, 2), Some("b".to_string()));
    }

    #[test]
    fn test_no_overlap_falls_back_and_breaks_tie() {
        let catalog = catalog(&["a", "b", "c"]);
        let answers = answers(&[(0, &["a", "b"]), (1, &["c"])]);

        let evaluation = evaluate(&catalog, &answers, 2);
        assert!(evaluation.fell_back);
        assert_eq!(evaluation.candidates, vec!["a", "b"]);
        assert_eq!(evaluation.scores.count("a"), 1);
        assert_eq!(evaluation.scores.count("b"), 1);
        assert_eq!(evaluation.scores.count("c"), 0);
        assert_eq!(evaluation.best.as_deref(), Some("a"));
    }

    #[test]
    fn test_no_answers_picks_smallest_catalog_key() {
        let catalog = catalog(&["thaneller", "gimpel", "neuner"]);

        let evaluation = evaluate(&catalog, &Answers::new(), 3);
        assert_eq!(evaluation.best.as_deref(), Some("gimpel"));
        assert_eq!(evaluation.best_score, 0);
    }

    #[test]
    fn test_unknown_duration_id_is_returned() {
        let catalog = catalog(&["a", "b", "c"]);
        let answers = answers(&[(0, &["x"])]);

        assert_eq!(recommend(&catalog, &answers, 1), Some("x".to_string()));
    }

    #[test]
    fn test_tie_uses_locale_order_not_code_points() {
        let catalog = catalog(&["pa", "øa"]);
        let answers = answers(&[(0, &["pa", "øa"])]);

        assert_eq!(recommend(&catalog, &answers, 1).as_deref(), Some("øa"));
    }

    #[test]
    fn test_empty_catalog_recommends_nothing() {
        let evaluation = evaluate(&Catalog::new(), &Answers::new(), 2);

        assert_eq!(evaluation.best, None);
        assert_eq!(evaluation.best_score, 0);
        assert!(evaluation.candidates.is_empty());
    }

    #[test]
    fn test_unknown_ids_outside_base_are_inert() {
        let catalog = catalog(&["a", "b"]);
        let answers = answers(&[(0, &["a", "b"]), (1, &["b", "zz"]), (2, &["zz"])]);

        // Question 2 empties the set, so the base {a, b} is scored
        let evaluation = evaluate(&catalog, &answers, 3);
        assert!(evaluation.fell_back);
        assert_eq!(evaluation.scores.count("zz"), 0);
        assert_eq!(evaluation.best.as_deref(), Some("b"));
    }

    #[test]
    fn test_recommender_uses_question_count() {
        let questionnaire = Questionnaire::from_json(
            r#"[
                { "id": "a", "name": "A", "start": "Grän, Tirol", "duration": "2-3h" },
                { "id": "b", "name": "B", "start": "Grän, Tirol", "duration": "2-3h" }
            ]"#,
            r#"[
                { "text": "Dauer?", "options": [{ "text": "Kurz", "peaks": ["a", "b"] }] },
                { "text": "Bahn?", "options": [{ "text": "Ja", "peaks": ["b"] }] }
            ]"#,
        )
        .unwrap();
        let recommender = Recommender::new(Arc::new(questionnaire));

        let answers = answers(&[(0, &["a", "b"]), (1, &["b"])]);
        assert_eq!(recommender.recommend(&answers).as_deref(), Some("b"));
    }
}
