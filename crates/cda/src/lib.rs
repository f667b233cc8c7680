//! CDA wire/boundary support.
//!
//! This crate defines the generic structural tree handed to a serializer once a clinical document
//! has been validated and assembled: a header of participations, and a body of coded sections,
//! each carrying a human-readable narrative next to its structured entries.
//!
//! Document-type knowledge (which sections, which header facts) lives in `cda-core`. This crate
//! handles the structural shape and its wire formats only.

pub mod data_types;
pub mod document;
pub mod narrative;
pub mod participation;

pub use data_types::{
    Address, Cd, Ii, Interval, PersonName, Quantity, Telecom, TemplateId, TemplateIdentity,
};
pub use document::{
    Body, BrandingLogo, EncompassingEncounter, Entry, EntryKind, EntryRelationship, EntryValue,
    Header, RelatedDocument, Section, StructuredDocument,
};
pub use narrative::{Narrative, NarrativeBlock};
pub use participation::{Actor, Entitlement, OrganizationRef, ParticipantEntity, Participation};

use thiserror::Error;

/// Errors returned by the `cda` boundary crate.
#[derive(Debug, Error)]
pub enum CdaError {
    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid template identifier: {0}")]
    InvalidTemplateId(String),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Render a structured document as YAML.
pub fn document_render(document: &StructuredDocument) -> Result<String, CdaError> {
    document::render_yaml(document)
}

/// Parse a structured document from YAML.
pub fn document_parse(yaml_text: &str) -> Result<StructuredDocument, CdaError> {
    document::parse_yaml(yaml_text)
}

/// Render a structured document as pretty-printed JSON.
pub fn document_render_json(document: &StructuredDocument) -> Result<String, CdaError> {
    document::render_json(document)
}

/// Parse a structured document from JSON.
pub fn document_parse_json(json_text: &str) -> Result<StructuredDocument, CdaError> {
    document::parse_json(json_text)
}
