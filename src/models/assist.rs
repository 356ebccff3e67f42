//! Suggestion and documentation records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Completion,
    Fix,
    Refactor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A single proposed insertion at the cursor.
pub struct Suggestion {
    pub insertion_text: String,
    /// In `[0, 1]`.
    pub confidence: f64,
    pub kind: SuggestionKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocReturns {
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Fixed-shape documentation stub.
pub struct DocumentationRecord {
    pub summary: String,
    pub parameters: Vec<DocParameter>,
    pub returns: DocReturns,
}

impl DocumentationRecord {
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.parameters.is_empty()
    }
}
