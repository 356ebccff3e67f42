//! Literal extraction: classify the raw text of an output call's argument
//! into a value kind and render it without evaluating anything.
//!
//! Classification order (first match wins):
//! 1. quoted text      -> string, inner text verbatim (no unescaping)
//! 2. numeric literal  -> number, as written
//! 3. boolean keyword  -> boolean, as written
//! 4. nullish keyword  -> nullish, as written
//! 5. `[ ... ]`        -> array, top-level elements joined, not re-classified
//! 6. allocation       -> object, fixed per-dialect placeholder
//! 7. anything else    -> expression, `Variable: <text>`

use crate::dialect::DialectRules;
use crate::scan;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    Nullish,
    Array,
    Object,
    Expression,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classified {
    pub kind: ValueKind,
    pub rendered_text: String,
}

impl Classified {
    fn new(kind: ValueKind, rendered_text: impl Into<String>) -> Classified {
        Classified {
            kind,
            rendered_text: rendered_text.into(),
        }
    }
}

pub const EXPRESSION_LABEL: &str = "Variable: ";

fn numeric_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:0[xX][0-9a-fA-F]+|(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)$")
            .expect("numeric literal pattern")
    })
}

/// Classify an argument region taken verbatim from between an output
/// call's parentheses.
pub fn classify(argument: &str, rules: &DialectRules) -> Classified {
    let text = argument.trim();
    if text.is_empty() {
        return Classified::new(ValueKind::String, "");
    }
    if let Some(inner) = quoted(text) {
        return Classified::new(ValueKind::String, inner);
    }
    if numeric_re().is_match(text) {
        return Classified::new(ValueKind::Number, text);
    }
    if rules.boolean_keywords.contains(&text) {
        return Classified::new(ValueKind::Boolean, text);
    }
    if rules.nullish_keywords.contains(&text) {
        return Classified::new(ValueKind::Nullish, text);
    }
    if text.starts_with('[') && text.ends_with(']') && text.len() >= 2 {
        let elements = scan::split_top_level(&text[1..text.len() - 1]);
        return Classified::new(ValueKind::Array, format!("[{}]", elements.join(", ")));
    }
    if is_allocation(text, rules) {
        return Classified::new(ValueKind::Object, rules.object_placeholder);
    }
    Classified::new(ValueKind::Expression, format!("{EXPRESSION_LABEL}{text}"))
}

/// Inner text when the whole argument is one single- or double-quoted
/// run. Template literals are expressions.
fn quoted(text: &str) -> Option<&str> {
    if !text.starts_with(|c: char| c == '"' || c == '\'') {
        return None;
    }
    let close = scan::closing_quote(text)?;
    (close == text.len() - 1).then(|| &text[1..close])
}

fn is_allocation(text: &str, rules: &DialectRules) -> bool {
    let has_keyword = rules
        .allocation_keywords
        .iter()
        .any(|kw| scan::contains_word(text, kw));
    has_keyword && (text.contains('{') || text.contains('['))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Dialect;

    fn js(arg: &str) -> Classified {
        classify(arg, Dialect::JavaScript.rules())
    }

    #[test]
    fn test_string_number_expression() {
        assert_eq!(js("\"hello\""), Classified::new(ValueKind::String, "hello"));
        assert_eq!(js("42"), Classified::new(ValueKind::Number, "42"));
        assert_eq!(js("x.y"), Classified::new(ValueKind::Expression, "Variable: x.y"));
    }

    #[test]
    fn test_string_keeps_escapes_verbatim() {
        assert_eq!(js(r"'a\nb'").rendered_text, r"a\nb");
        assert_eq!(js(r#""say \"hi\"""#).rendered_text, r#"say \"hi\""#);
    }

    #[test]
    fn test_concatenation_is_not_a_string() {
        let c = js("'a' + 'b'");
        assert_eq!(c.kind, ValueKind::Expression);
        assert_eq!(c.rendered_text, "Variable: 'a' + 'b'");
    }

    #[test]
    fn test_template_literal_is_an_expression() {
        let c = js("`Hello ${name}`");
        assert_eq!(c.kind, ValueKind::Expression);
        assert_eq!(c.rendered_text, "Variable: `Hello ${name}`");
        assert_eq!(js("`plain`").kind, ValueKind::Expression);
    }

    #[test]
    fn test_numeric_forms() {
        for n in ["-3.5", ".5", "1e9", "0xFF", "+7", "10."] {
            assert_eq!(js(n).kind, ValueKind::Number, "{n}");
        }
        assert_eq!(js("1.2.3").kind, ValueKind::Expression);
    }

    #[test]
    fn test_dialect_keywords() {
        assert_eq!(js("true").kind, ValueKind::Boolean);
        assert_eq!(js("undefined").kind, ValueKind::Nullish);
        let py = Dialect::Python.rules();
        assert_eq!(classify("None", py), Classified::new(ValueKind::Nullish, "None"));
        assert_eq!(classify("True", py).kind, ValueKind::Boolean);
        assert_eq!(classify("null", py).kind, ValueKind::Expression);
    }

    #[test]
    fn test_array_is_shallow() {
        assert_eq!(
            js("[1,  'two' ,[3,4], x]"),
            Classified::new(ValueKind::Array, "[1, 'two', [3,4], x]")
        );
        assert_eq!(js("[]").rendered_text, "[]");
    }

    #[test]
    fn test_allocation_uses_placeholder() {
        assert_eq!(
            js("new Object({ a: 1 })"),
            Classified::new(ValueKind::Object, "[object Object]")
        );
        let java = Dialect::Java.rules();
        assert_eq!(
            classify("new int[]{1, 2}", java).rendered_text,
            "java.lang.Object@1b6d3586"
        );
        // no marker, no object
        assert_eq!(js("new Date()").kind, ValueKind::Expression);
    }

    #[test]
    fn test_empty_argument_renders_blank() {
        assert_eq!(js("  "), Classified::new(ValueKind::String, ""));
    }
}
