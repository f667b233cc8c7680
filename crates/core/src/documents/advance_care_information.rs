//! Advance Care Information.

use super::{validate_parts, DocumentType};
use crate::assembler::{DocumentDescriptor, DocumentModel, SectionSpec};
use crate::components::{HeaderFacts, SectionKind};
use crate::model::common::person_participation;
use crate::model::{
    AdvanceCareDirective, DocumentMetadata, HeaderContext, Participation, ReportAttachment,
    SubjectOfCare,
};
use crate::narrative::SectionData;
use crate::validation::{child_path, Validate, ValidationBuilder};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdvanceCareInformation {
    pub metadata: DocumentMetadata,
    pub context: AdvanceCareInformationContext,
    pub content: AdvanceCareInformationContent,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdvanceCareInformationContext {
    pub subject_of_care: Option<SubjectOfCare>,
    pub author: Option<Participation>,
    pub header: HeaderContext,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdvanceCareInformationContent {
    pub advance_care_directive: Option<AdvanceCareDirective>,
    /// Scanned copy of the directive, when one is held.
    pub related_document: Option<ReportAttachment>,
}

impl AdvanceCareInformation {
    pub fn create() -> Self {
        Self {
            metadata: DocumentMetadata::create(),
            ..Self::default()
        }
    }
}

impl Validate for AdvanceCareInformation {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_parts(path, vb, &self.metadata, &self.context, &self.content);
    }
}

impl Validate for AdvanceCareInformationContext {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "subject_of_care", self.subject_of_care.as_ref());
        person_participation(vb, path, "author", self.author.as_ref(), true);
        self.header.validate(&child_path(path, "header"), vb);
    }
}

impl Validate for AdvanceCareInformationContent {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(
            path,
            "advance_care_directive",
            self.advance_care_directive.as_ref(),
        );
        vb.optional(path, "related_document", self.related_document.as_ref());
    }
}

fn header(doc: &AdvanceCareInformation) -> HeaderFacts<'_> {
    let context = &doc.context;
    HeaderFacts::new(&context.header)
        .subject(context.subject_of_care.as_ref())
        .author(context.author.as_ref())
}

fn advance_care_directive(doc: &AdvanceCareInformation) -> Option<SectionData<'_>> {
    doc.content
        .advance_care_directive
        .as_ref()
        .map(SectionData::AdvanceCareDirective)
}

fn related_document(doc: &AdvanceCareInformation) -> Option<SectionData<'_>> {
    doc.content.related_document.as_ref().map(SectionData::RelatedDocument)
}

impl DocumentModel for AdvanceCareInformation {
    fn descriptor() -> DocumentDescriptor<Self> {
        DocumentDescriptor::new(DocumentType::AdvanceCareInformation, header)
            .section(SectionSpec::new(
                SectionKind::AdvanceCareDirective,
                advance_care_directive,
            ))
            .section(SectionSpec::new(SectionKind::RelatedDocument, related_document))
    }

    fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::DocumentAssembler;
    use crate::config::{GenerationOptions, GeneratorConfig};
    use crate::testing;
    use crate::validation::validate_model;
    use std::sync::Arc;

    fn reported(remove: impl FnOnce(&mut AdvanceCareInformation), field: &str) {
        testing::assert_reported(
            testing::advance_care_information(),
            "advance_care_information",
            remove,
            field,
        );
    }

    #[test]
    fn each_mandatory_field_is_reported_by_path() {
        reported(|d| d.context.subject_of_care = None, "context.subject_of_care");
        reported(|d| d.context.author = None, "context.author");
        reported(
            |d| d.content.advance_care_directive = None,
            "content.advance_care_directive",
        );
        reported(
            |d| {
                if let Some(directive) = d.content.advance_care_directive.as_mut() {
                    directive.description = None;
                }
            },
            "content.advance_care_directive.description",
        );
    }

    #[test]
    fn related_document_is_optional() {
        let mut info = testing::advance_care_information();
        info.content.related_document = None;
        assert!(validate_model(&info, "advance_care_information").is_empty());

        let document = DocumentAssembler::new(Arc::new(GeneratorConfig::default()))
            .assemble(&info, &GenerationOptions::default())
            .expect("generates");
        assert!(document
            .section(SectionKind::RelatedDocument.code().code)
            .is_none());
        assert!(document
            .section(SectionKind::AdvanceCareDirective.code().code)
            .is_some());
    }
}
