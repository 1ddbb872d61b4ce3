//! Escaping rules for literal and wildcard filter text
//!
//! Literal text becomes a regex pattern by backslash-escaping every regex
//! metacharacter. Wildcard text follows the same rule except that `?` and `*`
//! translate to `.?` and `.*` instead of being escaped. Both routines return
//! zero-copy borrows when the input contains no metacharacters.

use std::borrow::Cow;

/// Returns true for characters that carry meaning in regex syntax
pub fn is_regex_metacharacter(c: char) -> bool {
    matches!(
        c,
        '^' | '$' | '\\' | '.' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '|'
    )
}

/// Escapes literal text so a regex engine matches it verbatim (zero-copy
/// when no escaping is needed)
pub fn escape_literal(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_regex_metacharacter) {
        return Cow::Borrowed(text);
    }

    let mut pattern = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        if is_regex_metacharacter(c) {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    Cow::Owned(pattern)
}

/// Translates shell-style wildcard text into a regex pattern (zero-copy when
/// no rewriting is needed)
///
/// `?` becomes `.?` (zero or one of any character) and `*` becomes `.*`
/// (zero or more of any character); every other metacharacter is escaped as
/// in [`escape_literal`].
pub fn wildcard_to_regex(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_regex_metacharacter) {
        return Cow::Borrowed(text);
    }

    let mut pattern = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        match c {
            '?' => pattern.push_str(".?"),
            '*' => pattern.push_str(".*"),
            _ => {
                if is_regex_metacharacter(c) {
                    pattern.push('\\');
                }
                pattern.push(c);
            }
        }
    }
    Cow::Owned(pattern)
}
