//! # CDA Core
//!
//! Assembly and validation of structured clinical documents.
//!
//! The caller populates a typed document model (one root type per supported document type, see
//! [`documents`]), and the [`DocumentAssembler`] turns it into the generic structural tree
//! defined by the `cda` crate:
//! - every mandatory and conditional rule is checked first and all violations are returned
//!   together as a [`ValidationFailure`];
//! - the header and body sections are built from declarative per-type descriptors;
//! - each section carries coded entries and a narrative rendered from the same data.
//!
//! **No transport concerns**: rendering the tree to bytes is delegated to a
//! [`DocumentSerializer`](serializer::DocumentSerializer); YAML and JSON are provided.

pub mod assembler;
mod branding;
pub mod components;
pub mod config;
pub mod constants;
pub mod documents;
pub mod error;
pub mod model;
pub mod narrative;
pub mod serializer;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use assembler::{DocumentAssembler, DocumentModel};
pub use config::{BrandingOptions, GenerationOptions, GeneratorConfig};
pub use documents::DocumentType;
pub use error::{GenerationError, GenerationResult, ValidationFailure, ValidationMessage};
pub use narrative::{DefaultNarrativeGenerator, NarrativeGenerator};
pub use serializer::{DocumentSerializer, JsonSerializer, YamlSerializer};
