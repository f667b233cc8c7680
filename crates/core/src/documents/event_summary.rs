//! Event Summary.

use super::{validate_parts, DocumentType};
use crate::assembler::{DocumentDescriptor, DocumentModel, SectionSpec};
use crate::components::{EncodingTable, HeaderFacts, SectionEncoding, SectionKind};
use crate::model::common::person_participation;
use crate::model::{
    AdverseReactions, DiagnosesInterventions, DiagnosticInvestigations, DocumentMetadata,
    HeaderContext, Immunisations, Medications, Participation, SubjectOfCare,
};
use crate::narrative::SectionData;
use crate::validation::{child_path, Validate, ValidationBuilder};

/// Summary of a single healthcare event. Every section is optional but at least one is required.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventSummary {
    pub metadata: DocumentMetadata,
    pub context: EventSummaryContext,
    pub content: EventSummaryContent,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventSummaryContext {
    pub subject_of_care: Option<SubjectOfCare>,
    pub author: Option<Participation>,
    pub header: HeaderContext,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventSummaryContent {
    pub adverse_reactions: Option<AdverseReactions>,
    pub medications: Option<Medications>,
    pub diagnoses_interventions: Option<DiagnosesInterventions>,
    pub immunisations: Option<Immunisations>,
    pub diagnostic_investigations: Option<DiagnosticInvestigations>,
}

impl EventSummaryContent {
    fn is_empty(&self) -> bool {
        self.adverse_reactions.is_none()
            && self.medications.is_none()
            && self.diagnoses_interventions.is_none()
            && self.immunisations.is_none()
            && self.diagnostic_investigations.is_none()
    }
}

impl EventSummary {
    pub fn create() -> Self {
        Self {
            metadata: DocumentMetadata::create(),
            ..Self::default()
        }
    }
}

impl Validate for EventSummary {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_parts(path, vb, &self.metadata, &self.context, &self.content);
    }
}

impl Validate for EventSummaryContext {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "subject_of_care", self.subject_of_care.as_ref());
        person_participation(vb, path, "author", self.author.as_ref(), true);
        self.header.validate(&child_path(path, "header"), vb);
    }
}

impl Validate for EventSummaryContent {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if self.is_empty() {
            vb.add(
                path,
                "adverse_reactions|medications|diagnoses_interventions|immunisations|diagnostic_investigations",
                "an event summary requires at least one section",
            );
        }
        vb.optional(path, "adverse_reactions", self.adverse_reactions.as_ref());
        vb.optional(path, "medications", self.medications.as_ref());
        vb.optional(
            path,
            "diagnoses_interventions",
            self.diagnoses_interventions.as_ref(),
        );
        vb.optional(path, "immunisations", self.immunisations.as_ref());
        vb.optional(
            path,
            "diagnostic_investigations",
            self.diagnostic_investigations.as_ref(),
        );
    }
}

fn header(doc: &EventSummary) -> HeaderFacts<'_> {
    let context = &doc.context;
    HeaderFacts::new(&context.header)
        .subject(context.subject_of_care.as_ref())
        .author(context.author.as_ref())
}

fn adverse_reactions(doc: &EventSummary) -> Option<SectionData<'_>> {
    doc.content.adverse_reactions.as_ref().map(SectionData::AdverseReactions)
}

fn medications(doc: &EventSummary) -> Option<SectionData<'_>> {
    doc.content.medications.as_ref().map(SectionData::Medications)
}

fn diagnoses_interventions(doc: &EventSummary) -> Option<SectionData<'_>> {
    doc.content
        .diagnoses_interventions
        .as_ref()
        .map(SectionData::DiagnosesInterventions)
}

fn immunisations(doc: &EventSummary) -> Option<SectionData<'_>> {
    doc.content.immunisations.as_ref().map(SectionData::Immunisations)
}

fn diagnostic_investigations(doc: &EventSummary) -> Option<SectionData<'_>> {
    doc.content
        .diagnostic_investigations
        .as_ref()
        .map(SectionData::DiagnosticInvestigations)
}

impl DocumentModel for EventSummary {
    fn descriptor() -> DocumentDescriptor<Self> {
        DocumentDescriptor::new(DocumentType::EventSummary, header)
            .section(SectionSpec::new(SectionKind::AdverseReactions, adverse_reactions))
            .section(SectionSpec::new(SectionKind::Medications, medications))
            .section(SectionSpec::new(
                SectionKind::DiagnosesInterventions,
                diagnoses_interventions,
            ))
            .section(SectionSpec::new(SectionKind::Immunisations, immunisations))
            .section(SectionSpec::new(
                SectionKind::DiagnosticInvestigations,
                diagnostic_investigations,
            ))
            .encodings(
                EncodingTable::current()
                    .with(SectionKind::AdverseReactions, SectionEncoding::Legacy),
            )
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
    use crate::model::{AdverseReaction, CodedConcept};
    use crate::testing;
    use crate::validation::validate_model;
    use cda::EntryKind;
    use std::sync::Arc;

    fn reported(remove: impl FnOnce(&mut EventSummary), field: &str) {
        testing::assert_reported(testing::event_summary(), "event_summary", remove, field);
    }

    #[test]
    fn each_mandatory_field_is_reported_by_path() {
        reported(|d| d.context.subject_of_care = None, "context.subject_of_care");
        reported(|d| d.context.author = None, "context.author");
        reported(
            |d| d.content = EventSummaryContent::default(),
            "content.adverse_reactions|medications|diagnoses_interventions|immunisations|diagnostic_investigations",
        );
    }

    #[test]
    fn any_single_section_satisfies_the_content_rule() {
        let mut summary = testing::event_summary();
        summary.content = EventSummaryContent {
            immunisations: Some(testing::immunisations()),
            ..EventSummaryContent::default()
        };
        assert!(validate_model(&summary, "event_summary").is_empty());
    }

    #[test]
    fn adverse_reactions_use_the_legacy_encoding() {
        let mut summary = testing::event_summary();
        summary.content.adverse_reactions = Some(AdverseReactions::of(vec![AdverseReaction::new(
            CodedConcept::from_original_text("Latex"),
        )]));
        let document = DocumentAssembler::new(Arc::new(GeneratorConfig::default()))
            .assemble(&summary, &GenerationOptions::default())
            .expect("generates");
        let section = document
            .section(SectionKind::AdverseReactions.code().code)
            .expect("adverse reactions");
        assert_eq!(section.entries[0].kind, EntryKind::Act);
    }
}
