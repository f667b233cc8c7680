//! Structured document (wire model) and its YAML/JSON translation.
//!
//! Responsibilities:
//! - Define the strict structural tree (`StructuredDocument`) produced by the assembler.
//! - Render it to YAML or JSON, and parse it back with path-aware error reporting.
//!
//! Notes:
//! - Optional fields are `Option<T>` or empty `Vec<T>` and are skipped when absent, so an omitted
//!   section or participation never appears as an empty placeholder on the wire.

use serde::{Deserialize, Serialize};

use crate::data_types::{Cd, Ii, Interval, TemplateIdentity};
use crate::narrative::Narrative;
use crate::participation::Participation;
use crate::CdaError;

/// Root of the structural tree.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StructuredDocument {
    pub template: TemplateIdentity,
    pub id: Ii,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_id: Option<Ii>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_number: Option<u32>,

    pub code: Cd,
    pub title: String,
    pub effective_time: String,
    pub status_code: String,
    pub confidentiality: Cd,
    pub language: String,
    pub header: Header,
    pub body: Body,
}

/// Header participations and document references.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Header {
    pub record_target: Participation,
    pub authors: Vec<Participation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custodian: Option<Participation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_authenticator: Option<Participation>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub information_recipients: Vec<Participation>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<Participation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_of: Option<EncompassingEncounter>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_documents: Vec<RelatedDocument>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub in_fulfillment_of: Vec<Ii>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branding: Option<BrandingLogo>,
}

/// The encounter a document was produced in.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EncompassingEncounter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Ii>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Cd>,

    pub effective_time: Interval,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discharge_disposition: Option<Cd>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Participation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_party: Option<Participation>,
}

/// Reference to a parent or related document.
///
/// `type_code` is `RPLC` (replaces), `APND` (appends), `XFRM` (transforms) or `XCRPT` (excerpt).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RelatedDocument {
    pub type_code: String,
    pub parent_id: Ii,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_set_id: Option<Ii>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_code: Option<Cd>,
}

/// Resolved branding image referenced by the rendered document.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BrandingLogo {
    pub reference: String,
    pub media_type: String,
    pub size_bytes: u64,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Body {
    pub sections: Vec<Section>,
}

/// Body section: coded identity, title, optional narrative, ordered entries.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Section {
    pub code: Cd,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Narrative>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<Entry>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
}

impl Section {
    /// Section code value, if coded.
    pub fn code_value(&self) -> Option<&str> {
        self.code.code.as_deref()
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Observation,
    Act,
    SubstanceAdministration,
    Supply,
    Procedure,
    Encounter,
    ObservationMedia,
    Organizer,
}

/// Structured, machine-processable clinical statement.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Entry {
    pub kind: EntryKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Ii>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Cd>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_time: Option<Interval>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<EntryValue>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<Participation>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<EntryRelationship>,
}

impl Entry {
    /// Bare entry of the given kind; fill the rest with struct update syntax.
    pub fn new(kind: EntryKind, code: Option<Cd>) -> Self {
        Self {
            kind,
            id: None,
            code,
            status_code: None,
            effective_time: None,
            text: None,
            values: Vec::new(),
            participants: Vec::new(),
            relationships: Vec::new(),
        }
    }
}

/// Link from an entry to a nested entry.
///
/// `type_code` is the HL7 relationship (`COMP`, `SUBJ`, `MFST`, `RSON`, `REFR`, `SPRT`).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EntryRelationship {
    pub type_code: String,
    pub entry: Entry,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntryValue {
    Coded { concept: Cd },
    Text { value: String },
    Quantity { value: String, unit: String },
    Integer { value: i64 },
    Boolean { value: bool },
    Timestamp { value: String },
    Identifier { id: Ii },
}

impl StructuredDocument {
    /// Body section codes in document order.
    pub fn section_codes(&self) -> Vec<&str> {
        self.body
            .sections
            .iter()
            .filter_map(Section::code_value)
            .collect()
    }

    /// First top-level section with the given code.
    pub fn section(&self, code: &str) -> Option<&Section> {
        self.body
            .sections
            .iter()
            .find(|section| section.code_value() == Some(code))
    }
}

pub(crate) fn render_yaml(document: &StructuredDocument) -> Result<String, CdaError> {
    Ok(serde_yaml::to_string(document)?)
}

/// Parse YAML with `serde_path_to_error`, surfacing the failing path (e.g. `header.authors[0]`).
pub(crate) fn parse_yaml(yaml_text: &str) -> Result<StructuredDocument, CdaError> {
    let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

    serde_path_to_error::deserialize::<_, StructuredDocument>(deserializer).map_err(|err| {
        let path = err.path().to_string();
        let source = err.into_inner();
        schema_mismatch(&path, &source)
    })
}

pub(crate) fn render_json(document: &StructuredDocument) -> Result<String, CdaError> {
    Ok(serde_json::to_string_pretty(document)?)
}

pub(crate) fn parse_json(json_text: &str) -> Result<StructuredDocument, CdaError> {
    let mut deserializer = serde_json::Deserializer::from_str(json_text);

    serde_path_to_error::deserialize::<_, StructuredDocument>(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        let source = err.into_inner();
        schema_mismatch(&path, &source)
    })
}

fn schema_mismatch(path: &str, source: &dyn std::fmt::Display) -> CdaError {
    let path = if path.is_empty() || path == "." {
        "<root>"
    } else {
        path
    };
    CdaError::Translation(format!("Document schema mismatch at {path}: {source}"))
}
