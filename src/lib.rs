//! Match-type codec and pattern synthesis for log filter expressions
//!
//! A log filter pairs a [`MatchType`] with literal text supplied by the user.
//! This crate converts the match type among its external representations
//! (persisted integer code, canonical name, display string) and synthesizes a
//! regex-engine-ready search pattern from the literal text. Pattern
//! compilation and matching are left to the consuming filter component.
//!
//! # Example
//!
//! ```
//! use logmatch::{build_pattern, MatchType};
//!
//! # fn example() -> logmatch::Result<()> {
//! // Round-trip a match type through its persisted filter-file code
//! let ty = MatchType::from_code(1)?;
//! assert_eq!(ty, MatchType::Wildcard);
//! assert_eq!(ty.name(), "Wildcard");
//!
//! // Turn user-supplied wildcard text into a regex pattern
//! let pattern = build_pattern(ty, "error-*.log");
//! assert_eq!(pattern, "error-.*\\.log");
//! # Ok(())
//! # }
//! ```
//!
//! The persisted codes (Simple=0, Wildcard=1, Regex=2, RegexGroups=3) are a
//! stability contract: they are stored in filter files and must never be
//! renumbered. New match types receive new trailing codes only.

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

// Re-export commonly used items
pub use error::{MatchTypeError, Result};
pub use match_type::MatchType;
pub use pattern::build_pattern;

/// Error types
pub mod error;

/// The `MatchType` enumeration and its conversions
pub mod match_type;

/// Search pattern synthesis
pub mod pattern;
