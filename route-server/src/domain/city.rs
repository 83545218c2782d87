//! City identifiers.

use std::fmt;
use std::sync::Arc;

/// Error returned when parsing an invalid city name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid city name: {reason}")]
pub struct InvalidCity {
    reason: &'static str,
}

/// A normalized city name.
///
/// Names are stored trimmed and upper-cased, so two raw names that normalize
/// to the same string are the same city. Cloning is cheap: the name is
/// shared.
///
/// # Examples
///
/// ```
/// use route_server::domain::City;
///
/// let rio = City::parse("RIO DE JANEIRO").unwrap();
/// assert_eq!(rio.as_str(), "RIO DE JANEIRO");
///
/// // Un-normalized input is rejected by `parse`...
/// assert!(City::parse(" rio de janeiro").is_err());
///
/// // ...but accepted by `parse_normalized`.
/// assert_eq!(City::parse_normalized(" rio de janeiro").unwrap(), rio);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct City(Arc<str>);

impl City {
    /// Parse an already-normalized city name.
    ///
    /// The input must be non-empty, carry no surrounding whitespace and be
    /// unchanged by upper-casing. Characters with no upper-case form, such
    /// as `ª`, are allowed.
    pub fn parse(s: &str) -> Result<Self, InvalidCity> {
        if s.is_empty() {
            return Err(InvalidCity {
                reason: "must not be empty",
            });
        }

        if s.trim() != s {
            return Err(InvalidCity {
                reason: "must not have surrounding whitespace",
            });
        }

        if s.to_uppercase() != s {
            return Err(InvalidCity {
                reason: "must be upper case",
            });
        }

        Ok(City(Arc::from(s)))
    }

    /// Normalize a raw name (trim, upper-case) and parse it.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidCity> {
        Self::parse(&normalize(s))
    }

    /// Returns the normalized name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Trim and upper-case a raw city name.
pub fn normalize(s: &str) -> String {
    s.trim().to_uppercase()
}

impl fmt::Debug for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "City({})", self.as_str())
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for City {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Normalizing is idempotent
        #[test]
        fn normalize_idempotent(s in "[ a-zA-Z]{0,12}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        /// Any name with at least one letter survives parse_normalized
        #[test]
        fn letters_always_parse(s in " {0,3}[a-zA-Z][a-zA-Z ]{0,10}[a-zA-Z]? {0,3}") {
            let city = City::parse_normalized(&s).unwrap();
            prop_assert_eq!(city.as_str(), s.trim().to_uppercase());
        }

        /// Normalized output round-trips through the strict parser
        #[test]
        fn normalized_roundtrip(s in "[A-Z]{1,10}") {
            let city = City::parse(&s).unwrap();
            prop_assert_eq!(city.as_str(), s.as_str());
        }

        /// Any non-blank name, accented or not, parses once normalized
        #[test]
        fn normalized_non_ascii_parses(s in "[ a-zA-ZÀ-ÿªºᵃᵒ'-]{0,12}") {
            prop_assume!(!s.trim().is_empty());
            let name = normalize(&s);
            let city = City::parse(&name).unwrap();
            prop_assert_eq!(city.as_str(), name.as_str());
        }
    }
}
