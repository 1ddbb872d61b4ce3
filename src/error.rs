/// Error types for match-type conversions
use thiserror::Error;

/// Error raised when a persisted code or name does not map to a known match type
///
/// Both variants signal the same condition: input that is not one of the four
/// known match kinds. This is a data-corruption or version-skew error (for
/// example, a filter file written by a newer version introducing a code this
/// build does not know), never an expected runtime condition, so callers
/// should surface it immediately rather than fall back silently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchTypeError {
    /// Persisted integer code outside the known range
    #[error("invalid match type code: {0}")]
    InvalidCode(u32),

    /// Name that is not one of the canonical variant spellings
    #[error("invalid match type name: {0:?}")]
    InvalidName(String),
}

/// Result type alias for match-type operations
pub type Result<T> = std::result::Result<T, MatchTypeError>;
