//! Suggestion generator: proposes one insertion for the line under the
//! cursor from the dialect's ordered trigger rules.

use crate::dialect::{DialectRules, Trigger, TriggerRule};
use crate::models::{Cursor, Suggestion};
use crate::scan;

/// Sources shorter than this never get a suggestion.
pub const MIN_SOURCE_LEN: usize = 3;

/// Only the text left of `cursor.column` (1-based, clamped to the line end)
/// is matched against the triggers.
pub fn suggest(source: &str, rules: &DialectRules, cursor: Cursor) -> Option<Suggestion> {
    if source.chars().count() < MIN_SOURCE_LEN {
        return None;
    }
    let line = current_line(source, cursor)?;
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(rules.comment_marker) {
        return None;
    }
    select_best(candidates(before_cursor(line, cursor.column), rules))
}

fn before_cursor(line: &str, column: usize) -> &str {
    let upto = column.saturating_sub(1);
    line.char_indices()
        .nth(upto)
        .map_or(line, |(i, _)| &line[..i])
}

fn current_line(source: &str, cursor: Cursor) -> Option<&str> {
    let idx = cursor.line.checked_sub(1)?;
    source
        .split('\n')
        .nth(idx)
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
}

/// Every rule that matches `line`, in rule order.
pub fn candidates(line: &str, rules: &DialectRules) -> Vec<Suggestion> {
    rules
        .triggers
        .iter()
        .filter_map(|rule| {
            insertion_for(line, rule).map(|text| Suggestion {
                insertion_text: text,
                confidence: rule.confidence,
                kind: rule.kind,
            })
        })
        .collect()
}

fn insertion_for(line: &str, rule: &TriggerRule) -> Option<String> {
    match rule.trigger {
        Trigger::Keyword {
            keyword,
            absent,
            insertion,
        } => {
            let blocked = absent.is_some_and(|a| line.contains(a));
            (scan::contains_word(line, keyword) && !blocked).then(|| insertion.to_string())
        }
        Trigger::Partial { stem, canonical } => {
            let at = line.rmatch_indices(stem).map(|(i, _)| i).find(|&i| {
                line[..i]
                    .chars()
                    .next_back()
                    .map_or(true, |c| !scan::is_ident_char(c) && c != '.')
            })?;
            let typed = line[at..].trim_end();
            (canonical.starts_with(typed) && typed.len() < canonical.len())
                .then(|| canonical[typed.len()..].to_string())
        }
    }
}

/// Highest confidence wins; ties go to the earliest candidate.
pub fn select_best(candidates: Vec<Suggestion>) -> Option<Suggestion> {
    candidates.into_iter().fold(None, |best, s| match best {
        Some(b) if b.confidence >= s.confidence => Some(b),
        _ => Some(s),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Dialect;
    use crate::models::SuggestionKind;

    fn at_end(src: &str, d: Dialect) -> Option<String> {
        suggest(src, d.rules(), Cursor::end_of(src)).map(|s| s.insertion_text)
    }

    #[test]
    fn test_short_source_is_ignored() {
        for d in Dialect::ALL {
            assert_eq!(suggest("if", d.rules(), Cursor::new(1, 1)), None);
        }
    }

    #[test]
    fn test_blank_and_commented_lines() {
        assert_eq!(at_end("let x = 1;\n   ", Dialect::JavaScript), None);
        assert_eq!(at_end("// function foo", Dialect::JavaScript), None);
        assert_eq!(at_end("# def foo", Dialect::Python), None);
        assert_eq!(suggest("abc", Dialect::Python.rules(), Cursor::new(9, 1)), None);
    }

    #[test]
    fn test_javascript_triggers() {
        assert_eq!(
            at_end("function greet", Dialect::JavaScript).as_deref(),
            Some("() {\n  // Function body\n  return result;\n}")
        );
        assert_eq!(at_end("if (a) {", Dialect::JavaScript), None);
        assert_eq!(at_end("  console.l", Dialect::JavaScript).as_deref(), Some("og()"));
        assert_eq!(at_end("console.lo", Dialect::JavaScript).as_deref(), Some("g()"));
        assert_eq!(at_end("console.log('done')", Dialect::JavaScript), None);
    }

    #[test]
    fn test_python_triggers() {
        assert_eq!(at_end("for", Dialect::Python).as_deref(), Some(" item in items:\n    # For loop body"));
        assert_eq!(at_end("    pri", Dialect::Python).as_deref(), Some("nt()"));
        assert_eq!(at_end("sprint", Dialect::Python), None);
        assert_eq!(at_end("import", Dialect::Python).as_deref(), Some(" numpy as np"));
        assert_eq!(at_end("import pandas as pd", Dialect::Python), None);
    }

    #[test]
    fn test_java_triggers() {
        let src = "public class Main";
        assert!(at_end(src, Dialect::Java).unwrap().starts_with(" {\n    public static void main"));
        assert_eq!(
            at_end("    System.out.", Dialect::Java).as_deref(),
            Some("println()")
        );
    }

    #[test]
    fn test_cursor_selects_line() {
        let src = "function a\nconsole.l";
        let s = suggest(src, Dialect::JavaScript.rules(), Cursor::new(1, 11)).unwrap();
        assert!(s.insertion_text.starts_with("() {"));
        assert_eq!(s.kind, SuggestionKind::Completion);
    }

    #[test]
    fn test_only_text_left_of_cursor_counts() {
        let rules = Dialect::JavaScript.rules();
        // cursor right after `console.l`, before the rest of the line
        let src = "console.l; let x = 1";
        let s = suggest(src, rules, Cursor::new(1, 10)).unwrap();
        assert_eq!(s.insertion_text, "og()");
        assert_eq!(suggest(src, rules, Cursor::new(1, 5)), None);
        // columns past the end clamp to the whole line
        let s = suggest("function a", rules, Cursor::new(1, 99)).unwrap();
        assert!(s.insertion_text.starts_with("() {"));
    }

    #[test]
    fn test_first_rule_wins_when_several_match() {
        // both `if` and `for` match; `if` comes first
        let line = "if for";
        let all = candidates(line, Dialect::JavaScript.rules());
        assert_eq!(all.len(), 2);
        let best = select_best(all).unwrap();
        assert!(best.insertion_text.contains("If body"));
    }

    #[test]
    fn test_select_best_prefers_confidence_then_order() {
        let mk = |t: &str, c: f64| Suggestion {
            insertion_text: t.into(),
            confidence: c,
            kind: SuggestionKind::Completion,
        };
        let best = select_best(vec![mk("a", 0.5), mk("b", 0.9), mk("c", 0.9)]).unwrap();
        assert_eq!(best.insertion_text, "b");
        assert_eq!(select_best(Vec::new()), None);
    }
}
