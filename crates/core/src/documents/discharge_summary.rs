//! Discharge Summary.
//!
//! Uses the legacy adverse reaction encoding inside its Health Profile, and emits a "Not asked"
//! placeholder when the caller supplies no Health Profile at all.

use super::{validate_parts, DocumentType};
use crate::assembler::{DocumentDescriptor, DocumentModel, SectionSpec};
use crate::components::{EncodingTable, HeaderFacts, ParticipantRole, SectionEncoding, SectionKind};
use crate::model::common::person_participation;
use crate::model::{
    DocumentMetadata, Encounter, Event, ExclusionStatement, HeaderContext, HealthProfile,
    Medications, Participation, Plan, SubjectOfCare,
};
use crate::narrative::SectionData;
use crate::validation::{child_path, Validate, ValidationBuilder};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DischargeSummary {
    pub metadata: DocumentMetadata,
    pub context: DischargeSummaryContext,
    pub content: DischargeSummaryContent,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DischargeSummaryContext {
    pub subject_of_care: Option<SubjectOfCare>,
    pub author: Option<Participation>,
    /// The admission; facility and period are required.
    pub encounter: Option<Encounter>,
    pub responsible_health_professional: Option<Participation>,
    pub header: HeaderContext,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DischargeSummaryContent {
    pub event: Option<Event>,
    pub medications: Option<Medications>,
    pub health_profile: Option<HealthProfile>,
    pub plan: Option<Plan>,
}

impl DischargeSummary {
    pub fn create() -> Self {
        Self {
            metadata: DocumentMetadata::create(),
            ..Self::default()
        }
    }
}

impl Validate for DischargeSummary {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_parts(path, vb, &self.metadata, &self.context, &self.content);
    }
}

impl Validate for DischargeSummaryContext {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "subject_of_care", self.subject_of_care.as_ref());
        person_participation(vb, path, "author", self.author.as_ref(), true);
        vb.nested(path, "encounter", self.encounter.as_ref());
        person_participation(
            vb,
            path,
            "responsible_health_professional",
            self.responsible_health_professional.as_ref(),
            true,
        );
        self.header.validate(&child_path(path, "header"), vb);
    }
}

impl Validate for DischargeSummaryContent {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "event", self.event.as_ref());
        vb.nested(path, "medications", self.medications.as_ref());
        vb.optional(path, "health_profile", self.health_profile.as_ref());
        vb.optional(path, "plan", self.plan.as_ref());
    }
}

fn header(doc: &DischargeSummary) -> HeaderFacts<'_> {
    let context = &doc.context;
    HeaderFacts::new(&context.header)
        .subject(context.subject_of_care.as_ref())
        .author(context.author.as_ref())
        .participant(
            ParticipantRole::ResponsibleHealthProfessional,
            context.responsible_health_professional.as_ref(),
        )
        .encounter(context.encounter.as_ref())
}

fn event(doc: &DischargeSummary) -> Option<SectionData<'_>> {
    doc.content.event.as_ref().map(SectionData::Event)
}

fn medications(doc: &DischargeSummary) -> Option<SectionData<'_>> {
    doc.content.medications.as_ref().map(SectionData::Medications)
}

fn health_profile(doc: &DischargeSummary) -> Option<SectionData<'_>> {
    doc.content.health_profile.as_ref().map(SectionData::HealthProfile)
}

fn plan(doc: &DischargeSummary) -> Option<SectionData<'_>> {
    doc.content.plan.as_ref().map(SectionData::Plan)
}

impl DocumentModel for DischargeSummary {
    fn descriptor() -> DocumentDescriptor<Self> {
        DocumentDescriptor::new(DocumentType::DischargeSummary, header)
            .section(SectionSpec::new(SectionKind::Event, event))
            .section(SectionSpec::new(SectionKind::Medications, medications))
            .section(
                SectionSpec::new(SectionKind::HealthProfile, health_profile)
                    .or_placeholder(ExclusionStatement::NotAsked),
            )
            .section(SectionSpec::new(SectionKind::Plan, plan))
            .encodings(
                EncodingTable::current()
                    .with(SectionKind::AdverseReactions, SectionEncoding::Legacy),
            )
    }

    fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }
}
