//! Output assembly: a top-to-bottom textual scan for output calls and the
//! first error-raising statement. Nothing is executed; a call inside an
//! unreachable branch still produces output.

use crate::dialect::{Dialect, DialectRules};
use crate::literal::classify;
use crate::scan;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembled {
    /// Rendered output lines, in source order.
    pub stdout_lines: Vec<String>,
    pub error_text: Option<String>,
}

impl Assembled {
    /// Stdout buffer: every line followed by a newline.
    pub fn stdout(&self) -> String {
        self.stdout_lines.iter().map(|l| format!("{l}\n")).collect()
    }
}

pub fn assemble(source: &str, rules: &DialectRules) -> Assembled {
    Assembled {
        stdout_lines: output_lines(source, rules),
        error_text: first_error(source, rules),
    }
}

fn output_lines(source: &str, rules: &DialectRules) -> Vec<String> {
    let token = rules.output_call;
    let mut lines = Vec::new();
    let mut from = 0;
    while let Some(at) = scan::find_word(source, token, from) {
        from = at + token.len();
        let rest = &source[from..];
        let open = from + (rest.len() - rest.trim_start().len());
        if !source[open..].starts_with('(') {
            continue;
        }
        match scan::call_argument(source, open) {
            Ok(range) => lines.push(classify(&source[range], rules).rendered_text),
            Err(skip) => debug!(dialect = %rules.dialect, %skip, "skipping output call"),
        }
    }
    lines
}

/// Byte offset of the first occurrence of the dialect's raise phrase.
fn find_raise(source: &str, phrase: &[&str]) -> Option<usize> {
    let (first, tail) = phrase.split_first()?;
    let mut from = 0;
    while let Some(at) = scan::find_word(source, first, from) {
        from = at + first.len();
        let mut cursor = from;
        let complete = tail.iter().all(|word| {
            let rest = &source[cursor..];
            let trimmed = rest.trim_start();
            let gap = rest.len() - trimmed.len();
            if gap > 0 && scan::find_word(trimmed, word, 0) == Some(0) {
                cursor += gap + word.len();
                true
            } else {
                false
            }
        });
        if complete {
            return Some(at);
        }
    }
    None
}

fn first_error(source: &str, rules: &DialectRules) -> Option<String> {
    let at = find_raise(source, rules.raise_phrase)?;
    let line_end = source[at..].find('\n').map_or(source.len(), |i| at + i);
    let message = scan::first_quoted(&source[at..line_end]);
    let line_no = source[..at].matches('\n').count() + 1;
    Some(render_error(rules.dialect, message, line_no))
}

fn render_error(dialect: Dialect, message: Option<&str>, line_no: usize) -> String {
    match dialect {
        Dialect::JavaScript | Dialect::TypeScript => match message {
            Some(m) => format!("Error: {m}"),
            None => "Error thrown".to_string(),
        },
        Dialect::Python => format!(
            "Traceback (most recent call last):\n  File \"<string>\", line {line_no}\n{}",
            message.unwrap_or("Exception raised")
        ),
        Dialect::Java => match message {
            Some(m) => format!("Exception: {m}"),
            None => "Exception thrown".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(src: &str, d: Dialect) -> Assembled {
        assemble(src, d.rules())
    }

    #[test]
    fn test_hello_world_javascript() {
        let a = run("console.log(\"Hello, World!\")", Dialect::JavaScript);
        assert_eq!(a.stdout(), "Hello, World!\n");
        assert_eq!(a.error_text, None);
    }

    #[test]
    fn test_output_follows_source_order_not_control_flow() {
        let src = "if (false) {\n  console.log('never')\n}\nconsole.log(1)\nconsole.log(x.y)";
        let a = run(src, Dialect::JavaScript);
        assert_eq!(a.stdout_lines, vec!["never", "1", "Variable: x.y"]);
    }

    #[test]
    fn test_malformed_call_is_skipped() {
        let src = "print('a')\nprint(('broken'\nprint(\"b\")";
        // the unbalanced call swallows nothing; later calls still match
        let a = run(src, Dialect::Python);
        assert_eq!(a.stdout_lines, vec!["a", "b"]);
    }

    #[test]
    fn test_token_boundaries() {
        let a = run("sprint('no')\nprint ('yes')\nprinter = 1", Dialect::Python);
        assert_eq!(a.stdout_lines, vec!["yes"]);
    }

    #[test]
    fn test_javascript_throw() {
        let a = run("throw new Error(\"boom\")", Dialect::JavaScript);
        assert_eq!(a.error_text.as_deref(), Some("Error: boom"));
        let b = run("throw err;", Dialect::JavaScript);
        assert_eq!(b.error_text.as_deref(), Some("Error thrown"));
    }

    #[test]
    fn test_python_traceback_uses_raise_line() {
        let a = run("print('before')\nraise ValueError('bad input')", Dialect::Python);
        assert_eq!(a.stdout(), "before\n");
        assert_eq!(
            a.error_text.as_deref(),
            Some("Traceback (most recent call last):\n  File \"<string>\", line 2\nbad input")
        );
        let b = run("raise", Dialect::Python);
        assert!(b.error_text.unwrap().ends_with("\nException raised"));
    }

    #[test]
    fn test_java_requires_throw_new() {
        let a = run("throw new IllegalStateException(\"nope\");", Dialect::Java);
        assert_eq!(a.error_text.as_deref(), Some("Exception: nope"));
        assert_eq!(run("throw e;", Dialect::Java).error_text, None);
        let b = run("throw new RuntimeException();", Dialect::Java);
        assert_eq!(b.error_text.as_deref(), Some("Exception thrown"));
    }

    #[test]
    fn test_only_first_error_is_honored() {
        let a = run("throw new Error('one')\nthrow new Error('two')", Dialect::JavaScript);
        assert_eq!(a.error_text.as_deref(), Some("Error: one"));
    }

    #[test]
    fn test_error_message_stays_on_raise_line() {
        let a = run("throw err\nconsole.log('later')", Dialect::JavaScript);
        assert_eq!(a.error_text.as_deref(), Some("Error thrown"));
        assert_eq!(a.stdout_lines, vec!["later"]);
    }
}
