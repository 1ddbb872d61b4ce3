//! The `MatchType` enumeration and its external representations
//!
//! A `MatchType` has three representations beyond the enum value itself: a
//! persisted integer code stored in filter files, a canonical name used in
//! configuration and display, and a generated search pattern (see
//! [`crate::pattern`]). All conversions go through one static table so the
//! representations cannot drift apart.

use crate::error::{MatchTypeError, Result};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// How literal filter text is turned into a search pattern
///
/// `Simple` matches the text literally, `Wildcard` treats `*` and `?` as
/// shell-style wildcards, and `Regex`/`RegexGroups` pass the text to the
/// regex engine untouched (`RegexGroups` additionally exposes capture groups
/// to the consumer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchType {
    /// Literal text match; regex metacharacters are escaped
    Simple,
    /// Shell-style wildcard match; `*` and `?` translate to regex equivalents
    Wildcard,
    /// Raw regular expression supplied by the caller
    Regex,
    /// Raw regular expression with capture groups
    RegexGroups,
}

// Codes are stored in filter files; never renumber an existing entry.
// New match types get new trailing codes only.
const MATCH_TYPES: [(MatchType, u32, &str); 4] = [
    (MatchType::Simple, 0, "Simple"),
    (MatchType::Wildcard, 1, "Wildcard"),
    (MatchType::Regex, 2, "Regex"),
    (MatchType::RegexGroups, 3, "RegexGroups"),
];

impl MatchType {
    /// All match types, in persisted-code order
    pub const ALL: [MatchType; 4] = [
        MatchType::Simple,
        MatchType::Wildcard,
        MatchType::Regex,
        MatchType::RegexGroups,
    ];

    /// Returns the stable integer code stored in filter files
    pub fn code(self) -> u32 {
        // Table rows are in declaration order; verified by a test below.
        MATCH_TYPES[self as usize].1
    }

    /// Looks up the match type for a persisted integer code
    ///
    /// # Errors
    ///
    /// Returns [`MatchTypeError::InvalidCode`] if `code` is not one of the
    /// known persisted codes.
    pub fn from_code(code: u32) -> Result<MatchType> {
        MATCH_TYPES
            .iter()
            .find(|(_, c, _)| *c == code)
            .map(|(ty, _, _)| *ty)
            .ok_or(MatchTypeError::InvalidCode(code))
    }

    /// Returns the canonical name, e.g. `"RegexGroups"`
    pub fn name(self) -> &'static str {
        MATCH_TYPES[self as usize].2
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatchType {
    type Err = MatchTypeError;

    /// Parses a canonical name by exact, case-sensitive comparison
    fn from_str(s: &str) -> Result<MatchType> {
        MATCH_TYPES
            .iter()
            .find(|(_, _, name)| *name == s)
            .map(|(ty, _, _)| *ty)
            .ok_or_else(|| MatchTypeError::InvalidName(s.to_string()))
    }
}

impl TryFrom<u32> for MatchType {
    type Error = MatchTypeError;

    fn try_from(code: u32) -> Result<MatchType> {
        MatchType::from_code(code)
    }
}

impl From<MatchType> for u32 {
    fn from(ty: MatchType) -> u32 {
        ty.code()
    }
}

// Serialized as the persisted integer code, not the variant name, to honor
// the filter-file stability contract. Derived serde impls cannot express
// this mapping.
impl Serialize for MatchType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.code())
    }
}

impl<'de> Deserialize<'de> for MatchType {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<MatchType, D::Error> {
        let code = u32::deserialize(deserializer)?;
        MatchType::from_code(code).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_rows_follow_declaration_order() {
        for (i, (ty, _, _)) in MATCH_TYPES.iter().enumerate() {
            assert_eq!(*ty as usize, i);
        }
    }

    #[test]
    fn test_persisted_codes_are_stable() {
        assert_eq!(MatchType::Simple.code(), 0);
        assert_eq!(MatchType::Wildcard.code(), 1);
        assert_eq!(MatchType::Regex.code(), 2);
        assert_eq!(MatchType::RegexGroups.code(), 3);
    }

    #[test]
    fn test_code_round_trip() {
        for ty in MatchType::ALL {
            assert_eq!(MatchType::from_code(ty.code()), Ok(ty));
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert_eq!(
            MatchType::from_code(99),
            Err(MatchTypeError::InvalidCode(99))
        );
        assert_eq!(
            MatchType::try_from(4),
            Err(MatchTypeError::InvalidCode(4))
        );
    }

    #[test]
    fn test_canonical_names() {
        assert_eq!(MatchType::Simple.name(), "Simple");
        assert_eq!(MatchType::Wildcard.name(), "Wildcard");
        assert_eq!(MatchType::Regex.name(), "Regex");
        assert_eq!(MatchType::RegexGroups.name(), "RegexGroups");
    }

    #[test]
    fn test_name_round_trip() {
        for ty in MatchType::ALL {
            assert_eq!(ty.name().parse::<MatchType>(), Ok(ty));
        }
    }

    #[test]
    fn test_display_matches_canonical_name() {
        for ty in MatchType::ALL {
            assert_eq!(ty.to_string(), ty.name());
        }
    }

    #[test]
    fn test_name_parsing_is_case_sensitive() {
        assert_eq!(
            "simple".parse::<MatchType>(),
            Err(MatchTypeError::InvalidName("simple".to_string()))
        );
        assert_eq!(
            "bogus".parse::<MatchType>(),
            Err(MatchTypeError::InvalidName("bogus".to_string()))
        );
    }
}
