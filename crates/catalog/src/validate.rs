//! Reference checks between the questionnaire and the catalog.
//!
//! Endorsement lists are hand-written and may name peaks that do not exist
//! (the shipped Reutte data lists "rauuhorn" where the catalog has
//! "rauhhorn"). These references are reported, never rewritten: fixing a
//! typo changes which peak wins for the affected answer combinations.

use crate::types::{PeakId, Questionnaire};
use std::collections::HashSet;

/// An endorsement of a peak id that is not in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownReference {
    pub question: usize,
    pub option: usize,
    pub peak_id: PeakId,
}

impl Questionnaire {
    /// List every (question, option, id) whose id is not a catalog key.
    ///
    /// Each id is reported once per option, in questionnaire order.
    pub fn unknown_references(&self) -> Vec<UnknownReference> {
        let mut unknown = Vec::new();
        for (q_idx, question) in self.questions().iter().enumerate() {
            for (o_idx, option) in question.options.iter().enumerate() {
                let mut seen = HashSet::new();
                for id in &option.peaks {
                    if !self.catalog().contains(id) && seen.insert(id.as_str()) {
                        unknown.push(UnknownReference {
                            question: q_idx,
                            option: o_idx,
                            peak_id: id.clone(),
                        });
                    }
                }
            }
        }
        unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_misspelled_ids() {
        let peaks = r#"[
            { "id": "rauhhorn", "name": "Rauhhorn (2240 m)", "start": "Tannheim, Tirol", "duration": "6-7h" },
            { "id": "gaishorn", "name": "Gaishorn (2247 m)", "start": "Tannheim, Tirol", "duration": "6-7h" }
        ]"#;
        let questions = r#"[
            { "text": "Wie lange möchtest du wandern?", "options": [
                { "text": "Sehr lang (>7h)", "peaks": ["rauuhorn", "gaishorn", "rauuhorn"] }
            ]},
            { "text": "Wie schwierig darf die Tour sein?", "options": [
                { "text": "Leicht", "peaks": "all" },
                { "text": "Anspruchsvoll", "peaks": ["rauuhorn"] }
            ]}
        ]"#;
        let questionnaire = Questionnaire::from_json(peaks, questions).unwrap();

        let unknown = questionnaire.unknown_references();
        assert_eq!(
            unknown,
            vec![
                UnknownReference { question: 0, option: 0, peak_id: "rauuhorn".to_string() },
                UnknownReference { question: 1, option: 1, peak_id: "rauuhorn".to_string() },
            ]
        );
    }
}
