//! Shared Health Summary.

use super::{validate_parts, DocumentType};
use crate::assembler::{DocumentDescriptor, DocumentModel, SectionSpec};
use crate::components::{HeaderFacts, SectionKind};
use crate::model::common::person_participation;
use crate::model::{
    AdverseReactions, DocumentMetadata, HeaderContext, Immunisations, MedicalHistory, Medications,
    Participation, SubjectOfCare,
};
use crate::narrative::SectionData;
use crate::validation::{child_path, Validate, ValidationBuilder};

/// The nominated healthcare provider's summary of the patient's health status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SharedHealthSummary {
    pub metadata: DocumentMetadata,
    pub context: SharedHealthSummaryContext,
    pub content: SharedHealthSummaryContent,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SharedHealthSummaryContext {
    pub subject_of_care: Option<SubjectOfCare>,
    pub author: Option<Participation>,
    pub header: HeaderContext,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SharedHealthSummaryContent {
    pub adverse_reactions: Option<AdverseReactions>,
    pub medications: Option<Medications>,
    pub medical_history: Option<MedicalHistory>,
    pub immunisations: Option<Immunisations>,
}

impl SharedHealthSummary {
    pub fn create() -> Self {
        Self {
            metadata: DocumentMetadata::create(),
            ..Self::default()
        }
    }
}

impl Validate for SharedHealthSummary {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_parts(path, vb, &self.metadata, &self.context, &self.content);
    }
}

impl Validate for SharedHealthSummaryContext {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "subject_of_care", self.subject_of_care.as_ref());
        person_participation(vb, path, "author", self.author.as_ref(), true);
        self.header.validate(&child_path(path, "header"), vb);
    }
}

impl Validate for SharedHealthSummaryContent {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "adverse_reactions", self.adverse_reactions.as_ref());
        vb.nested(path, "medications", self.medications.as_ref());
        vb.nested(path, "medical_history", self.medical_history.as_ref());
        vb.nested(path, "immunisations", self.immunisations.as_ref());
    }
}

fn header(doc: &SharedHealthSummary) -> HeaderFacts<'_> {
    let context = &doc.context;
    HeaderFacts::new(&context.header)
        .subject(context.subject_of_care.as_ref())
        .author(context.author.as_ref())
}

fn adverse_reactions(doc: &SharedHealthSummary) -> Option<SectionData<'_>> {
    doc.content.adverse_reactions.as_ref().map(SectionData::AdverseReactions)
}

fn medications(doc: &SharedHealthSummary) -> Option<SectionData<'_>> {
    doc.content.medications.as_ref().map(SectionData::Medications)
}

fn medical_history(doc: &SharedHealthSummary) -> Option<SectionData<'_>> {
    doc.content.medical_history.as_ref().map(SectionData::MedicalHistory)
}

fn immunisations(doc: &SharedHealthSummary) -> Option<SectionData<'_>> {
    doc.content.immunisations.as_ref().map(SectionData::Immunisations)
}

impl DocumentModel for SharedHealthSummary {
    fn descriptor() -> DocumentDescriptor<Self> {
        DocumentDescriptor::new(DocumentType::SharedHealthSummary, header)
            .section(SectionSpec::new(SectionKind::AdverseReactions, adverse_reactions))
            .section(SectionSpec::new(SectionKind::Medications, medications))
            .section(SectionSpec::new(SectionKind::MedicalHistory, medical_history))
            .section(SectionSpec::new(SectionKind::Immunisations, immunisations))
    }

    fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExclusionStatement, Immunisations};
    use crate::testing;
    use crate::validation::validate_model;

    fn reported(remove: impl FnOnce(&mut SharedHealthSummary), field: &str) {
        testing::assert_reported(
            testing::shared_health_summary(),
            "shared_health_summary",
            remove,
            field,
        );
    }

    #[test]
    fn each_mandatory_field_is_reported_by_path() {
        reported(|d| d.context.subject_of_care = None, "context.subject_of_care");
        reported(|d| d.context.author = None, "context.author");
        reported(|d| d.content.adverse_reactions = None, "content.adverse_reactions");
        reported(|d| d.content.medications = None, "content.medications");
        reported(|d| d.content.medical_history = None, "content.medical_history");
        reported(|d| d.content.immunisations = None, "content.immunisations");
    }

    #[test]
    fn immunisations_need_items_or_a_statement() {
        let mut summary = testing::shared_health_summary();
        summary.content.immunisations = Some(Immunisations::default());
        let messages = validate_model(&summary, "shared_health_summary");
        assert_eq!(
            messages[0].location(),
            "shared_health_summary.content.immunisations.items|exclusion_statement"
        );

        summary.content.immunisations = Some(Immunisations::none(ExclusionStatement::NotAsked));
        assert!(validate_model(&summary, "shared_health_summary").is_empty());
    }
}
