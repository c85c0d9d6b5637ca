//! # Questionnaire Session
//!
//! A session owns one user's answers and the recommendation derived from them.
//! Every change to the answer set applies the same rule:
//! 1. If every question has an answer, run the recommender and cache the result
//! 2. Otherwise clear the cached result
//!
//! A winner that is not in the catalog (an endorsement typo) resolves to no
//! result; there is no peak to show for it.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use catalog::{Peak, Questionnaire};
use recommender::{Answers, Evaluation, Recommender};

/// Final recommendation shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeakRecommendation {
    pub peak: Peak,
    /// Number of answers endorsing the peak
    pub score: u32,
    /// True when no peak matched every answer and the duration list was used
    pub fell_back: bool,
    pub explanation: String,
}

/// One user's pass through the questionnaire
#[derive(Debug, Clone)]
pub struct QuestionnaireSession {
    recommender: Recommender,
    answers: Answers,
    selections: Vec<Option<usize>>,
    result: Option<PeakRecommendation>,
}

impl QuestionnaireSession {
    pub fn new(questionnaire: Arc<Questionnaire>) -> Self {
        let question_count = questionnaire.question_count();
        Self {
            recommender: Recommender::new(questionnaire),
            answers: Answers::new(),
            selections: vec![None; question_count],
            result: None,
        }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        self.recommender.questionnaire()
    }

    /// Select option `option` for question `question`.
    ///
    /// Replaces any earlier selection for that question and refreshes the
    /// recommendation.
    pub fn select(&mut self, question: usize, option: usize) -> Result<()> {
        let peaks = self
            .questionnaire()
            .option(question, option)
            .context("Failed to select answer")?
            .peaks
            .clone();

        debug!(
            "Question {} answered with option {} ({} peaks)",
            question,
            option,
            peaks.len()
        );
        self.answers.record(question, peaks);
        self.selections[question] = self.answers.is_answered(question).then_some(option);
        self.refresh();
        Ok(())
    }

    /// Withdraw the answer to `question`
    pub fn clear(&mut self, question: usize) -> Result<()> {
        self.questionnaire()
            .question(question)
            .context("Failed to clear answer")?;

        self.answers.clear(question);
        self.selections[question] = None;
        self.refresh();
        Ok(())
    }

    /// Drop every answer and the cached recommendation
    pub fn reset(&mut self) {
        self.answers = Answers::new();
        self.selections.iter_mut().for_each(|s| *s = None);
        self.result = None;
    }

    /// Option currently selected for `question`, if any
    pub fn selected_option(&self, question: usize) -> Option<usize> {
        self.selections.get(question).copied().flatten()
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Indices of questions that still need an answer
    pub fn unanswered(&self) -> Vec<usize> {
        (0..self.questionnaire().question_count())
            .filter(|&q| !self.answers.is_answered(q))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.answers
            .is_complete(self.questionnaire().question_count())
    }

    /// The cached recommendation, present only once every question is answered
    pub fn recommendation(&self) -> Option<&PeakRecommendation> {
        self.result.as_ref()
    }

    /// Full evaluation of the current answers, whether or not the session is complete
    pub fn evaluate(&self) -> Evaluation {
        self.recommender.evaluate(&self.answers)
    }

    fn refresh(&mut self) {
        if !self.is_complete() {
            if self.result.take().is_some() {
                debug!("Answer set incomplete, cleared recommendation");
            }
            return;
        }

        let start_time = Instant::now();
        let evaluation = self.evaluate();
        self.result = self.resolve(&evaluation);
        info!(
            "Recommendation refreshed in {:.2?}: {:?}",
            start_time.elapsed(),
            self.result.as_ref().map(|r| r.peak.id.as_str())
        );
    }

    fn resolve(&self, evaluation: &Evaluation) -> Option<PeakRecommendation> {
        let peak_id = evaluation.best.as_deref()?;
        let Some(peak) = self.questionnaire().catalog().get_peak(peak_id) else {
            warn!("Recommended peak '{}' is not in the catalog", peak_id);
            return None;
        };

        Some(PeakRecommendation {
            peak: peak.clone(),
            score: evaluation.best_score,
            fell_back: evaluation.fell_back,
            explanation: explain(
                evaluation,
                self.answers.count_within(self.questionnaire().question_count()),
            ),
        })
    }
}

fn explain(evaluation: &Evaluation, answered: usize) -> String {
    if evaluation.fell_back {
        format!(
            "No peak matches every answer; best of the chosen duration, endorsed by {} of {} answers",
            evaluation.best_score, answered
        )
    } else if evaluation.candidates.len() == 1 {
        format!("Only peak matching all {} answers", answered)
    } else {
        format!(
            "Matches every answer, endorsed by {} of {} answers; {} peaks matched, ties go alphabetically",
            evaluation.best_score,
            answered,
            evaluation.candidates.len()
        )
    }
}
