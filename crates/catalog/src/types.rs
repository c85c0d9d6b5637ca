//! Core domain types for the peak catalog and its questionnaire.
//!
//! - `Peak` is a single recommendable catalog entry
//! - `Catalog` keeps peaks in the order they were listed and indexes them by id
//! - `Question` / `AnswerOption` describe the questionnaire; every option carries
//!   the list of peak ids it endorses
//! - `Questionnaire` bundles the catalog with its questions and is the unit of
//!   configuration handed to the recommender

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a peak (e.g. "thaneller")
///
/// Endorsement lists in the questionnaire may reference ids that do not exist
/// in the catalog, so this stays a plain string rather than a checked handle.
pub type PeakId = String;

// =============================================================================
// Peak
// =============================================================================

/// A hiking peak the system may recommend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peak {
    pub id: PeakId,
    /// Display name, usually including the altitude ("Thaneller (2341 m)")
    pub name: String,
    /// Starting location of the tour
    pub start: String,
    /// Expected walking time label ("5-6h")
    pub duration: String,
}

// =============================================================================
// Catalog
// =============================================================================

/// All peaks, in listing order, with an id index for O(1) lookups.
///
/// Listing order matters: when no duration was chosen the recommender starts
/// from every catalog key in this order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    peaks: Vec<Peak>,
    positions: HashMap<PeakId, usize>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self {
            peaks: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Build a catalog from peaks in listing order
    pub fn from_peaks(peaks: impl IntoIterator<Item = Peak>) -> Result<Self> {
        let mut catalog = Self::new();
        for peak in peaks {
            catalog.insert_peak(peak)?;
        }
        Ok(catalog)
    }

    /// Append a peak, rejecting duplicate ids
    pub fn insert_peak(&mut self, peak: Peak) -> Result<()> {
        if self.positions.contains_key(&peak.id) {
            return Err(CatalogError::DuplicatePeak { id: peak.id });
        }
        self.positions.insert(peak.id.clone(), self.peaks.len());
        self.peaks.push(peak);
        Ok(())
    }

    /// Get a peak by id
    pub fn get_peak(&self, id: &str) -> Option<&Peak> {
        self.positions.get(id).map(|&pos| &self.peaks[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Peak ids in listing order
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.peaks.iter().map(|peak| peak.id.as_str())
    }

    /// All peaks in listing order
    pub fn peaks(&self) -> &[Peak] {
        &self.peaks
    }

    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }
}

// =============================================================================
// Questionnaire
// =============================================================================

/// One selectable answer of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Label shown to the user ("Kurz (<3h)")
    pub text: String,
    /// Peak ids this option endorses, already resolved (an "all" option holds
    /// every catalog id)
    pub peaks: Vec<PeakId>,
}

/// A question with its ordered options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<AnswerOption>,
}

/// Catalog plus questions: the complete, immutable configuration.
///
/// Question 0 is the hard constraint (duration). Its chosen option is the
/// fallback candidate base when the other answers rule out every peak.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    catalog: Catalog,
    questions: Vec<Question>,
}

impl Questionnaire {
    /// Bundle a catalog with its questions.
    ///
    /// Fails when there are no questions, a question has no options, or an
    /// option endorses no peaks.
    pub fn new(catalog: Catalog, questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(CatalogError::NoQuestions);
        }
        for (question, q) in questions.iter().enumerate() {
            if q.options.is_empty() {
                return Err(CatalogError::NoOptions { question });
            }
            if let Some(option) = q.options.iter().position(|o| o.peaks.is_empty()) {
                return Err(CatalogError::EmptyEndorsement { question, option });
            }
        }
        Ok(Self { catalog, questions })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Get a question by index
    pub fn question(&self, index: usize) -> Result<&Question> {
        self.questions
            .get(index)
            .ok_or(CatalogError::UnknownQuestion {
                index,
                count: self.questions.len(),
            })
    }

    /// Get the option `option` of question `question`
    pub fn option(&self, question: usize, option: usize) -> Result<&AnswerOption> {
        let q = self.question(question)?;
        q.options.get(option).ok_or(CatalogError::UnknownOption {
            question,
            option,
            count: q.options.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peak(id: &str) -> Peak {
        Peak {
            id: id.to_string(),
            name: format!("{id} (2000 m)"),
            start: "Tannheim, Tirol".to_string(),
            duration: "3-4h".to_string(),
        }
    }

    #[test]
    fn test_catalog_keeps_listing_order() {
        let catalog = Catalog::from_peaks(vec![peak("neuner"), peak("aggenstein"), peak("einstein")])
            .unwrap();

        let ids: Vec<&str> = catalog.ids().collect();
        assert_eq!(ids, vec!["neuner", "aggenstein", "einstein"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_catalog_rejects_duplicates() {
        let mut catalog = Catalog::new();
        catalog.insert_peak(peak("gimpel")).unwrap();

        let err = catalog.insert_peak(peak("gimpel")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicatePeak { id } if id == "gimpel"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_empty_queries() {
        let catalog = Catalog::new();

        assert!(catalog.is_empty());
        assert!(catalog.get_peak("gimpel").is_none());
        assert!(!catalog.contains("gimpel"));
    }

    #[test]
    fn test_questionnaire_requires_questions() {
        let err = Questionnaire::new(Catalog::new(), vec![]).unwrap_err();
        assert!(matches!(err, CatalogError::NoQuestions));
    }

    #[test]
    fn test_questionnaire_requires_options() {
        let questions = vec![Question {
            text: "Wie lange möchtest du wandern?".to_string(),
            options: vec![],
        }];

        let err = Questionnaire::new(Catalog::new(), questions).unwrap_err();
        assert!(matches!(err, CatalogError::NoOptions { question: 0 }));
    }

    #[test]
    fn test_questionnaire_rejects_empty_endorsement() {
        let questions = vec![Question {
            text: "Möchtest du eine Rundtour?".to_string(),
            options: vec![
                AnswerOption {
                    text: "Ja".to_string(),
                    peaks: vec!["gaishorn".to_string()],
                },
                AnswerOption {
                    text: "Nein".to_string(),
                    peaks: vec![],
                },
            ],
        }];

        let err = Questionnaire::new(Catalog::new(), questions).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyEndorsement { question: 0, option: 1 }));
    }

    #[test]
    fn test_option_lookup_out_of_range() {
        let questions = vec![Question {
            text: "Möchtest du eine Rundtour?".to_string(),
            options: vec![AnswerOption {
                text: "Ja".to_string(),
                peaks: vec!["gaishorn".to_string()],
            }],
        }];
        let questionnaire = Questionnaire::new(Catalog::new(), questions).unwrap();

        assert_eq!(questionnaire.option(0, 0).unwrap().text, "Ja");
        assert!(matches!(
            questionnaire.option(0, 1),
            Err(CatalogError::UnknownOption { question: 0, option: 1, count: 1 })
        ));
        assert!(matches!(
            questionnaire.option(3, 0),
            Err(CatalogError::UnknownQuestion { index: 3, count: 1 })
        ));
    }
}
