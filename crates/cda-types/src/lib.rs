//! Validated primitive types shared across the CDA crates.
//!
//! These wrappers guarantee a small invariant once constructed so that downstream code does not
//! need to re-check it.

use std::fmt;
use std::str::FromStr;

/// Errors that can occur when creating validated primitive types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TypeError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,

    /// The input was not a dotted-decimal OID or a hyphenated UUID
    #[error("invalid namespace root '{0}': expected a dotted OID or a UUID")]
    InvalidOid(String),
}

/// A string type that guarantees non-empty content.
///
/// The input is trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::Empty` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TypeError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TypeError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A namespace root for instance identifiers.
///
/// An identifier root must resolve to a namespace. Two forms are accepted:
/// - a dotted-decimal ISO OID (`1.2.36.1.2001.1003.0.8003608833357361`), at least two arcs, no
///   leading zeros within an arc;
/// - a hyphenated UUID (`7f0c3a34-1d5e-4a49-9a0b-6b5c8f2e0d11`), stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Oid(String);

impl Oid {
    /// Parses and validates a namespace root.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::Empty` for blank input and `TypeError::InvalidOid` when the value is
    /// neither a well-formed OID nor a hyphenated UUID.
    pub fn parse(raw: &str) -> Result<Self, TypeError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(TypeError::Empty);
        }

        if is_dotted_oid(raw) {
            return Ok(Self(raw.to_owned()));
        }

        // Only the hyphenated form is a valid II root.
        if raw.len() == 36 {
            if let Ok(uuid) = uuid::Uuid::parse_str(raw) {
                return Ok(Self(uuid.hyphenated().to_string()));
            }
        }

        Err(TypeError::InvalidOid(raw.to_owned()))
    }

    /// Returns `true` when this root is a UUID rather than an OID.
    pub fn is_uuid(&self) -> bool {
        self.0.contains('-')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_dotted_oid(raw: &str) -> bool {
    let mut arcs = 0usize;
    for arc in raw.split('.') {
        if arc.is_empty() || !arc.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        if arc.len() > 1 && arc.starts_with('0') {
            return false;
        }
        arcs += 1;
    }
    // First arc of an ISO OID is 0, 1 or 2.
    arcs >= 2 && matches!(raw.as_bytes()[0], b'0' | b'1' | b'2')
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Oid {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Oid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_input() {
        let text = NonEmptyText::new("  Dr Jane Smith \n").expect("non-empty");
        assert_eq!(text.as_str(), "Dr Jane Smith");
    }

    #[test]
    fn non_empty_text_rejects_whitespace() {
        assert_eq!(NonEmptyText::new("   "), Err(TypeError::Empty));
    }

    #[test]
    fn oid_accepts_dotted_decimal() {
        let oid = Oid::parse("1.2.36.1.2001.1003.0.8003608833357361").expect("valid oid");
        assert!(!oid.is_uuid());
        assert_eq!(oid.to_string(), "1.2.36.1.2001.1003.0.8003608833357361");
    }

    #[test]
    fn oid_accepts_uuid_and_normalises_case() {
        let oid = Oid::parse("7F0C3A34-1D5E-4A49-9A0B-6B5C8F2E0D11").expect("valid uuid root");
        assert!(oid.is_uuid());
        assert_eq!(oid.as_str(), "7f0c3a34-1d5e-4a49-9a0b-6b5c8f2e0d11");
    }

    #[test]
    fn oid_rejects_malformed_roots() {
        for bad in ["1", "1..2", "1.02.3", "3.1.4", "urn:oid:1.2.3", "not an oid"] {
            assert!(
                matches!(Oid::parse(bad), Err(TypeError::InvalidOid(_))),
                "expected '{bad}' to be rejected"
            );
        }
        assert_eq!(Oid::parse(""), Err(TypeError::Empty));
    }

    #[test]
    fn oid_rejects_simple_uuid_form() {
        let err = Oid::parse("7f0c3a341d5e4a499a0b6b5c8f2e0d11").expect_err("no hyphens");
        assert!(matches!(err, TypeError::InvalidOid(_)));
    }
}
