//! Dialect registry.
//!
//! A closed enum of supported source dialects plus a static rules table.
//! Every dialect-specific decision elsewhere in the crate goes through
//! [`DialectRules`] or an exhaustive `match` on [`Dialect`], so adding a
//! dialect is a compile-checked change.

use crate::error::AnalysisError;
use crate::models::SuggestionKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    JavaScript,
    TypeScript,
    Python,
    Java,
}

/// How a suggestion rule recognises the current line.
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// `keyword` appears as a word while `absent` does not appear at all.
    Keyword {
        keyword: &'static str,
        absent: Option<&'static str>,
        insertion: &'static str,
    },
    /// The line ends with a partially typed `canonical` call that already
    /// includes `stem`; the insertion is whatever of `canonical` is missing.
    Partial {
        stem: &'static str,
        canonical: &'static str,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct TriggerRule {
    pub trigger: Trigger,
    pub kind: SuggestionKind,
    pub confidence: f64,
}

/// Per-dialect syntax table.
#[derive(Debug)]
pub struct DialectRules {
    pub dialect: Dialect,
    /// Call token that prints to stdout, e.g. `console.log`.
    pub output_call: &'static str,
    /// Words, in sequence, that start an error-raising statement.
    pub raise_phrase: &'static [&'static str],
    pub comment_marker: &'static str,
    pub boolean_keywords: &'static [&'static str],
    pub nullish_keywords: &'static [&'static str],
    pub allocation_keywords: &'static [&'static str],
    pub object_placeholder: &'static str,
    /// Whether the optional-chaining lint applies.
    pub null_safe_access: bool,
    /// Ordered; confidences are non-increasing.
    pub triggers: &'static [TriggerRule],
}

const fn keyword(
    keyword: &'static str,
    absent: &'static str,
    insertion: &'static str,
    confidence: f64,
) -> TriggerRule {
    TriggerRule {
        trigger: Trigger::Keyword {
            keyword,
            absent: Some(absent),
            insertion,
        },
        kind: SuggestionKind::Completion,
        confidence,
    }
}

const fn partial(stem: &'static str, canonical: &'static str, confidence: f64) -> TriggerRule {
    TriggerRule {
        trigger: Trigger::Partial { stem, canonical },
        kind: SuggestionKind::Completion,
        confidence,
    }
}

const JS_TRIGGERS: &[TriggerRule] = &[
    keyword("function", "{", "() {\n  // Function body\n  return result;\n}", 0.9),
    keyword("if", "{", " (condition) {\n  // If body\n}", 0.85),
    keyword(
        "for",
        "{",
        " (let i = 0; i < array.length; i++) {\n  // For loop body\n}",
        0.85,
    ),
    partial("console.l", "console.log()", 0.8),
];

const PYTHON_TRIGGERS: &[TriggerRule] = &[
    keyword("def", ":", "(parameters):\n    # Function body\n    return result", 0.9),
    keyword("if", ":", " condition:\n    # If body", 0.85),
    keyword("for", ":", " item in items:\n    # For loop body", 0.85),
    partial("pri", "print()", 0.8),
    TriggerRule {
        trigger: Trigger::Keyword {
            keyword: "import",
            absent: Some(" as "),
            insertion: " numpy as np",
        },
        kind: SuggestionKind::Completion,
        confidence: 0.6,
    },
];

const JAVA_TRIGGERS: &[TriggerRule] = &[
    keyword(
        "public class",
        "{",
        " {\n    public static void main(String[] args) {\n        // Main method\n    }\n}",
        0.9,
    ),
    keyword("if", "{", " (condition) {\n    // If body\n}", 0.85),
    keyword(
        "for",
        "{",
        " (int i = 0; i < array.length; i++) {\n    // For loop body\n}",
        0.85,
    ),
    partial("System.out.", "System.out.println()", 0.8),
];

const JS_RULES: DialectRules = DialectRules {
    dialect: Dialect::JavaScript,
    output_call: "console.log",
    raise_phrase: &["throw"],
    comment_marker: "//",
    boolean_keywords: &["true", "false"],
    nullish_keywords: &["null", "undefined"],
    allocation_keywords: &["new", "Object", "Array"],
    object_placeholder: "[object Object]",
    null_safe_access: true,
    triggers: JS_TRIGGERS,
};

static JAVASCRIPT: DialectRules = JS_RULES;

static TYPESCRIPT: DialectRules = DialectRules {
    dialect: Dialect::TypeScript,
    ..JS_RULES
};

static PYTHON: DialectRules = DialectRules {
    dialect: Dialect::Python,
    output_call: "print",
    raise_phrase: &["raise"],
    comment_marker: "#",
    boolean_keywords: &["True", "False"],
    nullish_keywords: &["None"],
    allocation_keywords: &["dict", "list", "set"],
    object_placeholder: "<object>",
    null_safe_access: false,
    triggers: PYTHON_TRIGGERS,
};

static JAVA: DialectRules = DialectRules {
    dialect: Dialect::Java,
    output_call: "System.out.println",
    raise_phrase: &["throw", "new"],
    comment_marker: "//",
    boolean_keywords: &["true", "false"],
    nullish_keywords: &["null"],
    allocation_keywords: &["new"],
    object_placeholder: "java.lang.Object@1b6d3586",
    null_safe_access: false,
    triggers: JAVA_TRIGGERS,
};

impl Dialect {
    pub const ALL: [Dialect; 4] = [
        Dialect::JavaScript,
        Dialect::TypeScript,
        Dialect::Python,
        Dialect::Java,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Dialect::JavaScript => "javascript",
            Dialect::TypeScript => "typescript",
            Dialect::Python => "python",
            Dialect::Java => "java",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dialect::JavaScript => "JavaScript",
            Dialect::TypeScript => "TypeScript",
            Dialect::Python => "Python",
            Dialect::Java => "Java",
        }
    }

    pub fn rules(self) -> &'static DialectRules {
        match self {
            Dialect::JavaScript => &JAVASCRIPT,
            Dialect::TypeScript => &TYPESCRIPT,
            Dialect::Python => &PYTHON,
            Dialect::Java => &JAVA,
        }
    }

    /// Map a file extension (without the dot) to a dialect.
    pub fn from_extension(ext: &str) -> Option<Dialect> {
        match ext.to_ascii_lowercase().as_str() {
            "js" | "mjs" | "cjs" | "jsx" => Some(Dialect::JavaScript),
            "ts" | "mts" | "cts" | "tsx" => Some(Dialect::TypeScript),
            "py" => Some(Dialect::Python),
            "java" => Some(Dialect::Java),
            _ => None,
        }
    }

    /// Starter program shown for a freshly selected dialect.
    pub fn sample_source(self) -> &'static str {
        match self {
            Dialect::JavaScript | Dialect::TypeScript => "console.log(\"Hello, World!\");",
            Dialect::Python => "print(\"Hello, World!\")",
            Dialect::Java => {
                "public class Main {\n  public static void main(String[] args) {\n    System.out.println(\"Hello, World!\");\n  }\n}"
            }
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Dialect {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "javascript" | "js" => Ok(Dialect::JavaScript),
            "typescript" | "ts" => Ok(Dialect::TypeScript),
            "python" | "py" => Ok(Dialect::Python),
            "java" => Ok(Dialect::Java),
            _ => Err(AnalysisError::UnsupportedDialect(s.to_string())),
        }
    }
}

/// Resolve a dialect identifier to its rules. Unknown identifiers fail;
/// there is no fallback dialect.
pub fn resolve(id: &str) -> Result<&'static DialectRules, AnalysisError> {
    Ok(id.parse::<Dialect>()?.rules())
}
