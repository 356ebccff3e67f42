//! Error types for the analysis core.
//!
//! Only [`AnalysisError`] ever leaves the library. The other types describe
//! conditions that are handled locally and folded into neutral results.

use thiserror::Error;

/// Hard failures surfaced to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The dialect identifier is not in the registry.
    #[error("unsupported dialect: '{0}'")]
    UnsupportedDialect(String),
}

/// Source text was empty or whitespace-only.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("source text is empty")]
pub struct ValidationError;

/// A single output call whose argument region could not be isolated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unbalanced parentheses in call starting at byte {offset}")]
pub struct ExtractionSkip {
    pub offset: usize,
}

/// Reject empty or whitespace-only source.
pub fn validate_source(source: &str) -> Result<&str, ValidationError> {
    if source.trim().is_empty() {
        Err(ValidationError)
    } else {
        Ok(source)
    }
}
