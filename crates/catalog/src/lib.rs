//! # Catalog Crate
//!
//! This crate holds the static configuration of the peak finder: the catalog
//! of recommendable peaks and the questionnaire whose options endorse them.
//!
//! ## Main Components
//!
//! - **types**: Domain types (Peak, Catalog, Question, AnswerOption, Questionnaire)
//! - **loader**: Load a questionnaire from `peaks.json` + `questions.json`
//! - **validate**: Report endorsements of peaks missing from the catalog
//! - **error**: Error types for loading and lookups
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Questionnaire;
//! use std::path::Path;
//!
//! let questionnaire = Questionnaire::load_from_dir(Path::new("data/reutte"))?;
//!
//! let peak = questionnaire.catalog().get_peak("thaneller").unwrap();
//! let short = questionnaire.option(0, 0)?;
//!
//! println!("{} starts in {}", peak.name, peak.start);
//! println!("'{}' endorses {} peaks", short.text, short.peaks.len());
//! ```

pub mod error;
pub mod types;
pub mod loader;
pub mod validate;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{AnswerOption, Catalog, Peak, PeakId, Question, Questionnaire};
pub use validate::UnknownReference;
