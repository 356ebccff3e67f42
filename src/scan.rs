//! Small text scanners shared by the extractor, assembler, lint, and
//! suggestion passes. All offsets are byte offsets into the input.

use crate::error::ExtractionSkip;
use std::ops::Range;

const QUOTES: [char; 3] = ['"', '\'', '`'];

pub fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Find `word` at or after `from`, requiring identifier boundaries on both
/// sides of the match.
pub fn find_word(hay: &str, word: &str, from: usize) -> Option<usize> {
    if word.is_empty() || from > hay.len() {
        return None;
    }
    hay[from..]
        .match_indices(word)
        .map(|(i, _)| from + i)
        .find(|&at| {
            let before_ok = hay[..at].chars().next_back().map_or(true, |c| !is_ident_char(c));
            let after_ok = hay[at + word.len()..]
                .chars()
                .next()
                .map_or(true, |c| !is_ident_char(c));
            before_ok && after_ok
        })
}

pub fn contains_word(hay: &str, word: &str) -> bool {
    find_word(hay, word, 0).is_some()
}

/// Given `text[open] == '('`, return the byte range strictly inside the
/// matching `)`. Parentheses inside quoted text are ignored.
pub fn call_argument(text: &str, open: usize) -> Result<Range<usize>, ExtractionSkip> {
    let skip = ExtractionSkip { offset: open };
    if !text[open..].starts_with('(') {
        return Err(skip);
    }
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (i, c) in text[open..].char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(open + 1..open + i);
                }
            }
            c if QUOTES.contains(&c) => quote = Some(c),
            _ => {}
        }
    }
    Err(skip)
}

/// For text starting with a quote, the byte offset of its first unescaped
/// closing quote.
pub fn closing_quote(text: &str) -> Option<usize> {
    let q = text.chars().next().filter(|c| QUOTES.contains(c))?;
    let mut escaped = false;
    for (i, c) in text.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == q {
            return Some(i);
        }
    }
    None
}

/// Inner text of the first single- or double-quoted run in `text`.
pub fn first_quoted(text: &str) -> Option<&str> {
    let start = text.find(|c: char| c == '"' || c == '\'')?;
    let end = closing_quote(&text[start..])?;
    Some(&text[start + 1..start + end])
}

/// Byte offset of the first `marker` outside quoted text.
pub fn comment_start(line: &str, marker: &str) -> Option<usize> {
    if marker.is_empty() {
        return None;
    }
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        if QUOTES.contains(&c) {
            quote = Some(c);
        } else if line[i..].starts_with(marker) {
            return Some(i);
        }
    }
    None
}

/// Split on commas that sit outside brackets, braces, parentheses, and
/// quotes. Pieces are trimmed; a blank input yields no pieces.
pub fn split_top_level(text: &str) -> Vec<&str> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut depth = 0i32;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth -= 1,
            ',' if depth == 0 => {
                out.push(text[start..i].trim());
                start = i + 1;
            }
            c if QUOTES.contains(&c) => quote = Some(c),
            _ => {}
        }
    }
    out.push(text[start..].trim());
    out
}

/// Character (not byte) column of a byte offset within `line`.
pub fn char_column(line: &str, byte: usize) -> usize {
    line[..byte].chars().count()
}
