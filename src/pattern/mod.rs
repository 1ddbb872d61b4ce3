//! Search pattern synthesis for match types
//!
//! Turns literal filter text into a regex-engine-ready pattern string
//! according to the selected [`MatchType`]. This crate never compiles or
//! evaluates the pattern; that is the job of the consuming filter component
//! and its regex engine.

pub mod escape;

pub use escape::{escape_literal, is_regex_metacharacter, wildcard_to_regex};

use crate::match_type::MatchType;
use std::borrow::Cow;

/// Builds a regex-engine-ready pattern from literal filter text
///
/// `Simple` escapes every regex metacharacter so the text matches literally.
/// `Wildcard` does the same but translates `?` to `.?` and `*` to `.*`.
/// `Regex` and `RegexGroups` pass `text` through unchanged, since the caller
/// already supplied regex syntax. Never fails; empty text yields an empty
/// pattern for every match type.
///
/// # Example
///
/// ```
/// use logmatch::{build_pattern, MatchType};
///
/// assert_eq!(build_pattern(MatchType::Simple, "a.b*c"), "a\\.b\\*c");
/// assert_eq!(build_pattern(MatchType::Wildcard, "a?b*c"), "a.?b.*c");
/// assert_eq!(build_pattern(MatchType::Regex, "^a.*$"), "^a.*$");
/// ```
pub fn build_pattern(match_type: MatchType, text: &str) -> Cow<'_, str> {
    match match_type {
        MatchType::Simple => escape::escape_literal(text),
        MatchType::Wildcard => escape::wildcard_to_regex(text),
        MatchType::Regex | MatchType::RegexGroups => Cow::Borrowed(text),
    }
}
