//! Serializer collaborators.
//!
//! The assembler hands a finished [`StructuredDocument`] to a [`DocumentSerializer`]. YAML and
//! JSON serializers are provided on top of the `cda` crate; an XML writer would implement the same
//! trait.

use cda::{CdaError, StructuredDocument};

pub trait DocumentSerializer {
    type Output;

    /// Serializes an assembled document.
    ///
    /// # Errors
    ///
    /// Returns a [`CdaError`] if the document cannot be written in this format.
    fn serialize(&self, document: &StructuredDocument) -> Result<Self::Output, CdaError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct YamlSerializer;

impl DocumentSerializer for YamlSerializer {
    type Output = String;

    fn serialize(&self, document: &StructuredDocument) -> Result<String, CdaError> {
        cda::document_render(document)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct JsonSerializer;

impl DocumentSerializer for JsonSerializer {
    type Output = String;

    fn serialize(&self, document: &StructuredDocument) -> Result<String, CdaError> {
        cda::document_render_json(document)
    }
}
