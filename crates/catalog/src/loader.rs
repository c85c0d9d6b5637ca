//! Loading the catalog and questionnaire from JSON data files.
//!
//! A data directory holds two files:
//! - `peaks.json`: `[{ "id", "name", "start", "duration" }, ...]`
//! - `questions.json`: `[{ "text", "options": [{ "text", "peaks": [...] | "all" }] }, ...]`
//!
//! An option whose `peaks` is the keyword `"all"` endorses every catalog peak;
//! it is resolved here, after the catalog is known, into the full id list in
//! catalog order.

use crate::error::{CatalogError, Result};
use crate::types::*;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

const PEAKS_FILE: &str = "peaks.json";
const QUESTIONS_FILE: &str = "questions.json";

/// Question as written in `questions.json`, before "all" is resolved
#[derive(Debug, Deserialize)]
struct RawQuestion {
    text: String,
    options: Vec<RawOption>,
}

#[derive(Debug, Deserialize)]
struct RawOption {
    text: String,
    peaks: Endorsement,
}

/// Either an explicit id list or the keyword `"all"`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Endorsement {
    Keyword(EndorsementKeyword),
    List(Vec<PeakId>),
}

#[derive(Debug, Deserialize)]
enum EndorsementKeyword {
    #[serde(rename = "all")]
    All,
}

impl Questionnaire {
    /// Load a questionnaire from a data directory
    ///
    /// Steps:
    /// 1. Parse `peaks.json` and `questions.json` in parallel
    /// 2. Build the catalog (rejecting duplicate ids)
    /// 3. Resolve "all" options against the catalog
    /// 4. Warn about endorsement ids that are not in the catalog
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        info!("Loading questionnaire from {:?}", data_dir);

        let peaks_path = data_dir.join(PEAKS_FILE);
        let questions_path = data_dir.join(QUESTIONS_FILE);

        let (peaks, questions) = rayon::join(
            || read_file(&peaks_path).and_then(|s| parse_peaks(&s, PEAKS_FILE)),
            || read_file(&questions_path).and_then(|s| parse_questions(&s, QUESTIONS_FILE)),
        );

        let questionnaire = build(peaks?, questions?)?;
        info!(
            "Loaded {} peaks and {} questions",
            questionnaire.catalog().len(),
            questionnaire.question_count()
        );
        Ok(questionnaire)
    }

    /// Build a questionnaire from in-memory JSON documents
    pub fn from_json(peaks_json: &str, questions_json: &str) -> Result<Self> {
        build(
            parse_peaks(peaks_json, PEAKS_FILE)?,
            parse_questions(questions_json, QUESTIONS_FILE)?,
        )
    }
}

fn build(peaks: Vec<Peak>, raw_questions: Vec<RawQuestion>) -> Result<Questionnaire> {
    let catalog = Catalog::from_peaks(peaks)?;
    let all_ids: Vec<PeakId> = catalog.ids().map(str::to_string).collect();

    let questions = raw_questions
        .into_iter()
        .map(|raw| Question {
            text: raw.text,
            options: raw
                .options
                .into_iter()
                .map(|opt| AnswerOption {
                    text: opt.text,
                    peaks: match opt.peaks {
                        Endorsement::Keyword(EndorsementKeyword::All) => all_ids.clone(),
                        Endorsement::List(ids) => ids,
                    },
                })
                .collect(),
        })
        .collect();

    let questionnaire = Questionnaire::new(catalog, questions)?;
    for reference in questionnaire.unknown_references() {
        warn!(
            question = reference.question,
            option = reference.option,
            "Endorsement references unknown peak '{}'",
            reference.peak_id
        );
    }
    Ok(questionnaire)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })
}

fn parse_peaks(json: &str, file: &str) -> Result<Vec<Peak>> {
    serde_json::from_str(json).map_err(|source| CatalogError::ParseError {
        file: file.to_string(),
        source,
    })
}

fn parse_questions(json: &str, file: &str) -> Result<Vec<RawQuestion>> {
    serde_json::from_str(json).map_err(|source| CatalogError::ParseError {
        file: file.to_string(),
        source,
    })
}
