//! Error types for the catalog crate.
//!
//! Loading the catalog and questionnaire is the only fallible part of the
//! system. The recommendation algorithm itself never fails, so everything
//! that can go wrong is about the data files.

use thiserror::Error;

/// Errors that can occur while loading or querying a questionnaire
///
/// The `#[derive(Error)]` macro from thiserror implements `Display` from the
/// `#[error(...)]` attributes below.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Data file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// File contents are not valid JSON for the expected shape
    #[error("Parse error in {file}: {source}")]
    ParseError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// The same peak identifier is listed twice in the catalog
    #[error("Duplicate peak id: {id}")]
    DuplicatePeak { id: String },

    /// A questionnaire needs at least one question
    #[error("Questionnaire has no questions")]
    NoQuestions,

    /// Every question needs at least one option to choose from
    #[error("Question {question} has no options")]
    NoOptions { question: usize },

    /// An option that endorses no peak can never count as an answer
    #[error("Option {option} of question {question} endorses no peaks")]
    EmptyEndorsement { question: usize, option: usize },

    /// Question index is outside the questionnaire
    #[error("Unknown question {index} (questionnaire has {count})")]
    UnknownQuestion { index: usize, count: usize },

    /// Option index is outside the question's option list
    #[error("Unknown option {option} for question {question} ({count} options)")]
    UnknownOption {
        question: usize,
        option: usize,
        count: usize,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
