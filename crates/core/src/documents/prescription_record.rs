//! Prescription Record.

use super::{validate_parts, DocumentType};
use crate::assembler::{DocumentDescriptor, DocumentModel, SectionSpec};
use crate::components::{HeaderFacts, ParticipantRole, SectionKind};
use crate::model::common::{organisation_participation, person_participation};
use crate::model::{
    DocumentMetadata, HeaderContext, Participation, PrescriberInstructions, PrescriptionItem,
    SubjectOfCare,
};
use crate::narrative::SectionData;
use crate::validation::{child_path, Validate, ValidationBuilder};

/// A single prescription as written by the prescriber.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrescriptionRecord {
    pub metadata: DocumentMetadata,
    pub context: PrescriptionRecordContext,
    pub content: PrescriptionRecordContent,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrescriptionRecordContext {
    pub subject_of_care: Option<SubjectOfCare>,
    /// Authors the document.
    pub prescriber: Option<Participation>,
    pub prescriber_organisation: Option<Participation>,
    pub header: HeaderContext,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrescriptionRecordContent {
    pub prescription_item: Option<PrescriptionItem>,
    pub prescriber_instructions: Option<PrescriberInstructions>,
}

impl PrescriptionRecord {
    pub fn create() -> Self {
        Self {
            metadata: DocumentMetadata::create(),
            ..Self::default()
        }
    }
}

impl Validate for PrescriptionRecord {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_parts(path, vb, &self.metadata, &self.context, &self.content);
    }
}

impl Validate for PrescriptionRecordContext {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "subject_of_care", self.subject_of_care.as_ref());
        person_participation(vb, path, "prescriber", self.prescriber.as_ref(), true);
        organisation_participation(
            vb,
            path,
            "prescriber_organisation",
            self.prescriber_organisation.as_ref(),
            true,
        );
        self.header.validate(&child_path(path, "header"), vb);
    }
}

impl Validate for PrescriptionRecordContent {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "prescription_item", self.prescription_item.as_ref());
        vb.optional(
            path,
            "prescriber_instructions",
            self.prescriber_instructions.as_ref(),
        );
    }
}

fn header(doc: &PrescriptionRecord) -> HeaderFacts<'_> {
    let context = &doc.context;
    HeaderFacts::new(&context.header)
        .subject(context.subject_of_care.as_ref())
        .author(context.prescriber.as_ref())
        .participant(
            ParticipantRole::PrescriberOrganisation,
            context.prescriber_organisation.as_ref(),
        )
}

fn prescription_item(doc: &PrescriptionRecord) -> Option<SectionData<'_>> {
    doc.content
        .prescription_item
        .as_ref()
        .map(SectionData::PrescriptionItem)
}

fn prescriber_instructions(doc: &PrescriptionRecord) -> Option<SectionData<'_>> {
    doc.content
        .prescriber_instructions
        .as_ref()
        .map(SectionData::PrescriberInstructions)
}

impl DocumentModel for PrescriptionRecord {
    fn descriptor() -> DocumentDescriptor<Self> {
        DocumentDescriptor::new(DocumentType::PrescriptionRecord, header)
            .section(SectionSpec::new(SectionKind::PrescriptionItem, prescription_item))
            .section(SectionSpec::new(
                SectionKind::PrescriberInstructions,
                prescriber_instructions,
            ))
    }

    fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }
}
