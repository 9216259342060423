//! Strongly-typed key wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up keys from different
//! entity types at compile time. Unlike synthetic IDs, both keys here are
//! natural: an ISBN string for books and an integer ID for members.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// The unique key of a book in the catalog.
///
/// Not validated for checksum or format; any non-empty string the librarian
/// types is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Isbn(String);

impl Isbn {
    /// Create an ISBN key from a string
    pub fn new(isbn: impl Into<String>) -> Self {
        Self(isbn.into())
    }

    /// Get the underlying string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Isbn {
    fn from(s: &str) -> Self {
        Self(s.trim().to_string())
    }
}

impl From<String> for Isbn {
    fn from(s: String) -> Self {
        Self(s.trim().to_string())
    }
}

impl FromStr for Isbn {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// The unique key of a member in the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(u32);

impl MemberId {
    /// Create a member ID from a raw integer
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying integer
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MemberId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl FromStr for MemberId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isbn_trims_input() {
        let isbn = Isbn::from(" 9780743273565 ");
        assert_eq!(isbn.as_str(), "9780743273565");
    }

    #[test]
    fn test_isbn_display_round_trip() {
        let isbn = Isbn::new("9780451524935");
        assert_eq!(isbn.to_string(), "9780451524935");
        assert_eq!("9780451524935".parse::<Isbn>().unwrap(), isbn);
    }

    #[test]
    fn test_member_id_parse() {
        let id: MemberId = " 42 ".parse().unwrap();
        assert_eq!(id, MemberId::new(42));
        assert!("abc".parse::<MemberId>().is_err());
    }

    #[test]
    fn test_member_id_ordering() {
        let mut ids = vec![MemberId::new(3), MemberId::new(1), MemberId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![MemberId::new(1), MemberId::new(2), MemberId::new(3)]);
    }

    #[test]
    fn test_id_serialization_is_transparent() {
        let isbn = Isbn::new("978");
        assert_eq!(serde_json::to_string(&isbn).unwrap(), "\"978\"");

        let id = MemberId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }
}
