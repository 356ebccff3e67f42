//! Shared data models for execution, lint, suggestion, and documentation
//! results. Everything here is built per request and never mutated after.

pub mod assist;
pub mod execution;

pub use assist::{DocParameter, DocReturns, DocumentationRecord, Suggestion, SuggestionKind};
pub use execution::{AnalysisRequest, Cursor, ExecutionResult};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Severity attached to a lint issue.
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A single lint issue with severity, location, and optional fix.
pub struct LintIssue {
    /// 1-based line number.
    pub line: usize,
    /// 0-based character offset within the line.
    pub column: usize,
    pub message: String,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Aggregated lint summary used by printers.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
    pub files: usize,
}

impl Summary {
    /// Count issues by severity.
    pub fn tally<'a>(issues: impl IntoIterator<Item = &'a LintIssue>, files: usize) -> Summary {
        let mut s = Summary {
            files,
            ..Summary::default()
        };
        for is in issues {
            match is.severity {
                Severity::Error => s.errors += 1,
                Severity::Warning => s.warnings += 1,
                Severity::Info => s.infos += 1,
            }
        }
        s
    }
}

#[derive(Debug, Clone, Serialize)]
/// Lint issues found in one file.
pub struct FileIssues {
    pub file: String,
    pub dialect: String,
    pub issues: Vec<LintIssue>,
}

#[derive(Debug, Clone, Serialize)]
/// Lint results container across files.
pub struct LintReport {
    pub files: Vec<FileIssues>,
    pub summary: Summary,
}

impl LintReport {
    pub fn new(files: Vec<FileIssues>) -> LintReport {
        let summary = Summary::tally(files.iter().flat_map(|f| f.issues.iter()), files.len());
        LintReport { files, summary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(line: usize, severity: Severity) -> LintIssue {
        LintIssue {
            line,
            column: 0,
            message: "m".into(),
            severity,
            fix: None,
        }
    }

    #[test]
    fn test_report_summary_counts_severities() {
        let report = LintReport::new(vec![
            FileIssues {
                file: "a.js".into(),
                dialect: "javascript".into(),
                issues: vec![issue(1, Severity::Warning), issue(2, Severity::Info)],
            },
            FileIssues {
                file: "b.py".into(),
                dialect: "python".into(),
                issues: vec![issue(1, Severity::Error)],
            },
        ]);
        assert_eq!(
            report.summary,
            Summary {
                errors: 1,
                warnings: 1,
                infos: 1,
                files: 2
            }
        );
    }

    #[test]
    fn test_issue_json_omits_missing_fix() {
        let v = serde_json::to_value(issue(3, Severity::Info)).unwrap();
        assert_eq!(v["severity"], "info");
        assert!(v.get("fix").is_none());
    }
}
