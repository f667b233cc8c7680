//! CDA data types.
//!
//! Wire representations of the HL7 data types used throughout the structural tree. These are
//! simplified: only the attributes the assembler populates are carried.
//!
//! Key types:
//! - [`Cd`]: coded concept (`CD`/`CE`) with optional translations.
//! - [`Ii`]: instance identifier (`II`), a namespace root plus an optional local extension.
//! - [`TemplateId`]: parsed and validated template identifier with version.

use cda_types::Oid;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::CdaError;

/// Wire representation of a coded concept.
///
/// A well-formed concept carries either a `code`/`code_system`/`display_name` triple or, when no
/// code applies, an `original_text` fallback. The wire layer does not enforce this; the
/// assembler only ever emits validated concepts.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Cd {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_system: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_system_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_system_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub translations: Vec<Cd>,
}

impl Cd {
    /// Coded form with a code system name.
    pub fn coded(code: &str, code_system: &str, code_system_name: &str, display_name: &str) -> Self {
        Self {
            code: Some(code.to_string()),
            code_system: Some(code_system.to_string()),
            code_system_name: Some(code_system_name.to_string()),
            display_name: Some(display_name.to_string()),
            ..Self::default()
        }
    }

    /// Text-only form used when no code applies.
    pub fn text(original_text: &str) -> Self {
        Self {
            original_text: Some(original_text.to_string()),
            ..Self::default()
        }
    }

    /// The best human-readable label for this concept.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.original_text.as_deref())
            .or(self.code.as_deref())
            .unwrap_or_default()
    }
}

/// Wire representation of an instance identifier.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Ii {
    pub root: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigning_authority_name: Option<String>,
}

impl Ii {
    pub fn new(root: impl Into<String>, extension: Option<String>) -> Self {
        Self {
            root: root.into(),
            extension,
            assigning_authority_name: None,
        }
    }
}

impl fmt::Display for Ii {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.extension {
            Some(extension) => write!(f, "{}^{}", self.root, extension),
            None => f.write_str(&self.root),
        }
    }
}

/// Time interval; bounds are CDA `TS` strings.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Interval {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<String>,
}

/// Physical quantity. The value is kept as its decimal text to avoid float drift.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Quantity {
    pub value: String,
    pub unit: String,
}

/// Postal address.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_code: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub street_lines: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Electronic communication endpoint, e.g. `tel:0299999999` or `mailto:gp@example.org`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Telecom {
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_code: Option<String>,
}

/// Person name.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PersonName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_code: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prefixes: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub given: Vec<String>,

    pub family: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suffixes: Vec<String>,
}

/// Parsed and validated template identifier.
///
/// Every document type is bound to a published implementation guide template, identified by an
/// OID root and a version string.
///
/// # Canonical Form
///
/// `<root>^<version>`
///
/// Example: `1.2.36.1.2001.1001.101.100.1002.2^3.4`
///
/// The root must be a dotted OID (UUID roots are not used for templates) and the version must be
/// a non-empty run of digits and dots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateId {
    pub root: String,
    pub version: String,
}

impl TemplateId {
    fn validate_components(root: &str, version: &str) -> Result<(), CdaError> {
        let oid = Oid::parse(root)
            .map_err(|e| CdaError::InvalidTemplateId(format!("root: {e}")))?;
        if oid.is_uuid() {
            return Err(CdaError::InvalidTemplateId(format!(
                "root must be an OID, got '{root}'"
            )));
        }

        let version_ok = !version.is_empty()
            && !version.starts_with('.')
            && !version.ends_with('.')
            && version.bytes().all(|b| b.is_ascii_digit() || b == b'.');
        if !version_ok {
            return Err(CdaError::InvalidTemplateId(format!(
                "version must be dotted digits, got '{version}'"
            )));
        }

        Ok(())
    }

    /// Creates a new `TemplateId` from its components.
    ///
    /// # Errors
    ///
    /// Returns [`CdaError::InvalidTemplateId`] if the root is not an OID or the version is
    /// malformed.
    pub fn new(root: &str, version: &str) -> Result<Self, CdaError> {
        Self::validate_components(root, version)?;
        Ok(Self {
            root: root.to_string(),
            version: version.to_string(),
        })
    }

    /// Parses `<root>^<version>`.
    ///
    /// # Errors
    ///
    /// Returns [`CdaError::InvalidTemplateId`] if the separator is missing or either component
    /// fails validation.
    pub fn parse(raw: &str) -> Result<Self, CdaError> {
        let (root, version) = raw
            .split_once('^')
            .ok_or_else(|| CdaError::InvalidTemplateId(raw.to_string()))?;
        Self::new(root, version)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}^{}", self.root, self.version)
    }
}

impl Serialize for TemplateId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TemplateId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Template identity of a document type: the template identifier plus its published title.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TemplateIdentity {
    pub template_id: TemplateId,
    pub title: String,
}

/// Formats a point in time as a CDA `TS` value (`YYYYMMDDHHMMSS+ZZZZ`).
pub fn ts(value: &DateTime<FixedOffset>) -> String {
    value.format("%Y%m%d%H%M%S%z").to_string()
}

/// Formats a calendar date as a CDA `TS` value (`YYYYMMDD`).
pub fn ts_date(value: &NaiveDate) -> String {
    value.format("%Y%m%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn template_id_round_trips_through_display() {
        let id = TemplateId::parse("1.2.36.1.2001.1001.101.100.1002.2^3.4").expect("valid");
        assert_eq!(id.root, "1.2.36.1.2001.1001.101.100.1002.2");
        assert_eq!(id.version, "3.4");
        assert_eq!(id.to_string(), "1.2.36.1.2001.1001.101.100.1002.2^3.4");
    }

    #[test]
    fn template_id_rejects_missing_version() {
        let err = TemplateId::parse("1.2.36.1.2001").expect_err("no separator");
        assert!(matches!(err, CdaError::InvalidTemplateId(_)));

        let err = TemplateId::new("1.2.36.1.2001", "v1").expect_err("bad version");
        assert!(matches!(err, CdaError::InvalidTemplateId(msg) if msg.contains("version")));
    }

    #[test]
    fn template_id_rejects_uuid_root() {
        let err = TemplateId::new("7f0c3a34-1d5e-4a49-9a0b-6b5c8f2e0d11", "1.0")
            .expect_err("uuid root");
        assert!(matches!(err, CdaError::InvalidTemplateId(msg) if msg.contains("must be an OID")));
    }

    #[test]
    fn cd_label_prefers_display_name() {
        let coded = Cd::coded("91936005", "2.16.840.1.113883.6.96", "SNOMED CT-AU", "Penicillin allergy");
        assert_eq!(coded.label(), "Penicillin allergy");
        assert_eq!(Cd::text("Bee sting").label(), "Bee sting");
    }

    #[test]
    fn formats_timestamps_with_offset() {
        let offset = FixedOffset::east_opt(10 * 3600).expect("valid offset");
        let dt = offset.with_ymd_and_hms(2026, 3, 4, 9, 30, 0).single().expect("valid time");
        assert_eq!(ts(&dt), "20260304093000+1000");

        let date = NaiveDate::from_ymd_opt(1970, 1, 2).expect("valid date");
        assert_eq!(ts_date(&date), "19700102");
    }
}
