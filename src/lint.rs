//! Lint heuristics and the file-level lint runner.
//!
//! `lint_source` scans one source text line by line and emits issues in
//! ascending line order. Per line the checks run in a fixed order:
//! - output call left in code (warning, fix comments it out); skipped when
//!   the line carries a comment outside quoted text
//! - `TODO` marker (info)
//! - bare member access without optional chaining (warning, JS/TS only)
//!
//! `run_lint` expands glob patterns, lints matched files in parallel, and
//! folds the results into a `LintReport`.

use crate::dialect::{Dialect, DialectRules};
use crate::models::{FileIssues, LintIssue, LintReport, Severity};
use crate::scan;
use glob::glob;
use rayon::prelude::*;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, warn};

fn member_access_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b([A-Za-z_$][\w$]*)\.([A-Za-z_$][\w$]*)").expect("member access pattern"))
}

/// Lint one source text. Empty input yields no issues.
pub fn lint_source(source: &str, rules: &DialectRules) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let line_no = idx + 1;
        check_output_call(line, line_no, rules, &mut issues);
        check_todo(line, line_no, &mut issues);
        if rules.null_safe_access {
            check_member_access(line, line_no, rules, &mut issues);
        }
    }
    issues
}

fn check_output_call(line: &str, line_no: usize, rules: &DialectRules, out: &mut Vec<LintIssue>) {
    if scan::comment_start(line, rules.comment_marker).is_some() {
        return;
    }
    let token = rules.output_call;
    if let Some(at) = scan::find_word(line, token, 0) {
        let mut fix = String::with_capacity(line.len() + 3);
        fix.push_str(&line[..at]);
        fix.push_str(rules.comment_marker);
        fix.push(' ');
        fix.push_str(&line[at..]);
        out.push(LintIssue {
            line: line_no,
            column: scan::char_column(line, at),
            message: format!("Avoid using {token} in production code"),
            severity: Severity::Warning,
            fix: Some(fix),
        });
    }
}

fn check_todo(line: &str, line_no: usize, out: &mut Vec<LintIssue>) {
    if let Some(at) = line.find("TODO") {
        out.push(LintIssue {
            line: line_no,
            column: scan::char_column(line, at),
            message: "Unresolved TODO comment".into(),
            severity: Severity::Info,
            fix: None,
        });
    }
}

fn check_member_access(line: &str, line_no: usize, rules: &DialectRules, out: &mut Vec<LintIssue>) {
    if line.contains("?.") || scan::contains_word(line, "if") {
        return;
    }
    // the output call itself is not a nullable access
    let access = member_access_re()
        .captures_iter(line)
        .filter_map(|c| c.get(0).map(|m| (m, c)))
        .find(|(m, _)| !line[m.start()..].starts_with(rules.output_call));
    if let Some((m, caps)) = access {
        let fix = format!(
            "{}{}?.{}{}",
            &line[..m.start()],
            &caps[1],
            &caps[2],
            &line[m.end()..]
        );
        out.push(LintIssue {
            line: line_no,
            column: scan::char_column(line, m.start()),
            message: "Potential null/undefined object access".into(),
            severity: Severity::Warning,
            fix: Some(fix),
        });
    }
}

/// Pick the dialect for a file: explicit choice, then extension, then the
/// configured fallback.
pub fn dialect_for_path(path: &Path, explicit: Option<Dialect>, fallback: Option<Dialect>) -> Option<Dialect> {
    explicit
        .or_else(|| {
            path.extension()
                .and_then(|e| e.to_str())
                .and_then(Dialect::from_extension)
        })
        .or(fallback)
}

/// Lint every file matched by `patterns` (relative to `root`).
///
/// Files whose dialect cannot be determined or that cannot be read as
/// UTF-8 are reported in the returned error list and left out of the
/// report. Results are sorted by file path for deterministic output.
pub fn run_lint(
    root: &Path,
    patterns: &[String],
    explicit: Option<Dialect>,
    fallback: Option<Dialect>,
) -> (LintReport, Vec<String>) {
    let mut errors: Vec<String> = Vec::new();
    let mut targets: Vec<PathBuf> = Vec::new();
    for pat in patterns {
        let abs = root.join(pat);
        let pattern = abs.to_string_lossy().to_string();
        match glob(&pattern) {
            Ok(paths) => {
                let before = targets.len();
                targets.extend(paths.flatten().filter(|p| p.is_file()));
                if targets.len() == before {
                    warn!(pattern = %pat, "pattern matched no files");
                    errors.push(format!("No files matched: {pat}"));
                }
            }
            Err(e) => errors.push(format!("Invalid pattern '{pat}': {e}")),
        }
    }
    targets.sort();
    targets.dedup();

    let per_file: Vec<Result<FileIssues, String>> = targets
        .par_iter()
        .map(|path| {
            let shown = display_path(root, path);
            let dialect = dialect_for_path(path, explicit, fallback)
                .ok_or_else(|| format!("Cannot determine dialect for {shown}; pass --dialect"))?;
            let data = fs::read_to_string(path).map_err(|e| format!("Cannot read {shown}: {e}"))?;
            debug!(file = %shown, %dialect, "linting");
            Ok(FileIssues {
                file: shown,
                dialect: dialect.id().to_string(),
                issues: lint_source(&data, dialect.rules()),
            })
        })
        .collect();

    let mut files = Vec::new();
    for r in per_file {
        match r {
            Ok(f) => files.push(f),
            Err(e) => errors.push(e),
        }
    }
    files.sort_by(|a, b| a.file.cmp(&b.file));
    (LintReport::new(files), errors)
}

fn display_path(root: &Path, path: &Path) -> String {
    pathdiff::diff_paths(path, root)
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn js(src: &str) -> Vec<LintIssue> {
        lint_source(src, Dialect::JavaScript.rules())
    }

    #[test]
    fn test_commented_line_is_not_flagged() {
        let issues = js("console.log('x') // debug\nconsole.log('y')");
        assert_eq!(issues.len(), 1);
        assert!(issues.iter().all(|i| i.line == 2));
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
        let out = &issues[0];
        assert_eq!(out.message, "Avoid using console.log in production code");
        assert_eq!(out.column, 0);
        assert_eq!(out.fix.as_deref(), Some("// console.log('y')"));
    }

    #[test]
    fn test_multiple_issues_on_one_line_in_fixed_order() {
        let issues = js("  console.log(user.name) // TODO");
        // commented, so only TODO and member access remain
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].severity, Severity::Info);
        assert_eq!(issues[0].column, 28);
        assert_eq!(issues[1].message, "Potential null/undefined object access");

        let issues = js("  console.log(user.name)");
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].column, 2);
        assert_eq!(issues[1].column, 14);
        assert_eq!(issues[1].fix.as_deref(), Some("  console.log(user?.name)"));
    }

    #[test]
    fn test_member_access_guards() {
        assert!(js("const n = user?.name").is_empty());
        assert!(js("if (user.name) {}").is_empty());
        let diff = js("const n = user.name;");
        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0].column, 10);
        assert_eq!(diff[0].fix.as_deref(), Some("const n = user?.name;"));
        // `gift` is not the `if` keyword
        assert_eq!(js("gift.wrap()").len(), 1);
    }

    #[test]
    fn test_numeric_literals_are_not_member_access() {
        assert!(js("const pi = 3.14;").is_empty());
        assert!(js("let big = 1.5e3;").is_empty());
        let mixed = js("const r = 2.5 * circle.radius;");
        assert_eq!(mixed.len(), 1);
        assert_eq!(mixed[0].fix.as_deref(), Some("const r = 2.5 * circle?.radius;"));
    }

    #[test]
    fn test_comment_markers_inside_strings_do_not_hide_output_calls() {
        let issues = js("console.log(\"http://x\")");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].fix.as_deref(), Some("// console.log(\"http://x\")"));
        let py = lint_source("print(\"#1\")\nprint(2)  # keep", Dialect::Python.rules());
        assert_eq!(py.len(), 1);
        assert_eq!(py[0].line, 1);
    }

    #[test]
    fn test_issues_ascend_by_line() {
        let issues = js("a.b\n// TODO later\nconsole.log(1)");
        let lines: Vec<usize> = issues.iter().map(|i| i.line).collect();
        let mut sorted = lines.clone();
        sorted.sort();
        assert_eq!(lines, sorted);
        assert_eq!(lines, vec![1, 2, 3]);
    }

    #[test]
    fn test_python_uses_its_own_tokens() {
        let issues = lint_source("print(x.y)\n# print(z)\nx = 1  # TODO", Dialect::Python.rules());
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].message, "Avoid using print in production code");
        assert_eq!(issues[0].fix.as_deref(), Some("# print(x.y)"));
        assert_eq!(issues[1].line, 3);
        assert_eq!(issues[1].severity, Severity::Info);
    }

    #[test]
    fn test_empty_source_has_no_issues() {
        assert!(js("").is_empty());
    }

    #[test]
    fn test_run_lint_over_files() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("src/a.js"), "console.log('x')\n").unwrap();
        fs::write(root.join("src/b.py"), "# TODO\n").unwrap();
        fs::write(root.join("src/c.txt"), "console.log('x')\n").unwrap();

        let (report, errors) = run_lint(root, &["src/*".to_string()], None, None);
        assert_eq!(report.files.len(), 2);
        assert_eq!(report.files[0].file, Path::new("src").join("a.js").to_string_lossy());
        assert_eq!(report.files[1].dialect, "python");
        assert_eq!(report.summary.warnings, 1);
        assert_eq!(report.summary.infos, 1);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("c.txt"));
    }

    #[test]
    fn test_dialect_for_path_precedence() {
        let p = Path::new("x.py");
        assert_eq!(dialect_for_path(p, Some(Dialect::Java), None), Some(Dialect::Java));
        assert_eq!(dialect_for_path(p, None, Some(Dialect::Java)), Some(Dialect::Python));
        assert_eq!(
            dialect_for_path(Path::new("x"), None, Some(Dialect::Java)),
            Some(Dialect::Java)
        );
    }
}
