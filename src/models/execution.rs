//! Request and result shapes for simulated execution.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// 1-based cursor position inside the source text.
pub struct Cursor {
    pub line: usize,
    pub column: usize,
}

impl Cursor {
    pub fn new(line: usize, column: usize) -> Cursor {
        Cursor { line, column }
    }

    /// Cursor placed after the last character of `source`.
    pub fn end_of(source: &str) -> Cursor {
        let last = source.split('\n').last().unwrap_or("");
        Cursor {
            line: source.split('\n').count().max(1),
            column: last.chars().count() + 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Input handed to every facade operation.
pub struct AnalysisRequest {
    pub source_text: String,
    pub dialect: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,
}

impl AnalysisRequest {
    pub fn new(source_text: impl Into<String>, dialect: impl Into<String>) -> AnalysisRequest {
        AnalysisRequest {
            source_text: source_text.into(),
            dialect: dialect.into(),
            cursor: None,
        }
    }

    pub fn with_cursor(mut self, cursor: Cursor) -> AnalysisRequest {
        self.cursor = Some(cursor);
        self
    }

    /// The explicit cursor, or the end of the source when none was given.
    pub fn cursor_or_end(&self) -> Cursor {
        self.cursor.unwrap_or_else(|| Cursor::end_of(&self.source_text))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Outcome of a simulated run. `stdout` may be non-empty alongside `error`.
pub struct ExecutionResult {
    pub stdout: String,
    pub error: Option<String>,
    pub execution_time_seconds: f64,
}

impl ExecutionResult {
    /// Result for empty input.
    pub fn empty() -> ExecutionResult {
        ExecutionResult {
            stdout: String::new(),
            error: None,
            execution_time_seconds: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_end_of_multiline() {
        assert_eq!(Cursor::end_of("ab\ncde"), Cursor::new(2, 4));
        assert_eq!(Cursor::end_of(""), Cursor::new(1, 1));
    }

    #[test]
    fn test_execution_result_json_shape() {
        let v = serde_json::to_value(ExecutionResult::empty()).unwrap();
        assert_eq!(v["stdout"], "");
        assert!(v["error"].is_null());
        assert_eq!(v["executionTimeSeconds"], 0.0);
    }
}
