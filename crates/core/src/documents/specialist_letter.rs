//! Specialist Letter.

use super::{validate_parts, DocumentType};
use crate::assembler::{DocumentDescriptor, DocumentModel, SectionSpec};
use crate::components::{HeaderFacts, ParticipantRole, SectionKind};
use crate::model::common::person_participation;
use crate::model::{
    AdverseReactions, DiagnosticInvestigations, DocumentMetadata, HeaderContext, Medications,
    Participation, Recommendations, ResponseDetails, SubjectOfCare,
};
use crate::narrative::SectionData;
use crate::validation::{child_path, Validate, ValidationBuilder};

/// A specialist's reply to the referring clinician.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpecialistLetter {
    pub metadata: DocumentMetadata,
    pub context: SpecialistLetterContext,
    pub content: SpecialistLetterContent,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpecialistLetterContext {
    pub subject_of_care: Option<SubjectOfCare>,
    pub author: Option<Participation>,
    /// The clinician who made the original referral.
    pub referrer: Option<Participation>,
    pub usual_gp: Option<Participation>,
    pub header: HeaderContext,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpecialistLetterContent {
    pub response_details: Option<ResponseDetails>,
    pub recommendations: Option<Recommendations>,
    pub adverse_reactions: Option<AdverseReactions>,
    pub medications: Option<Medications>,
    pub diagnostic_investigations: Option<DiagnosticInvestigations>,
}

impl SpecialistLetter {
    pub fn create() -> Self {
        Self {
            metadata: DocumentMetadata::create(),
            ..Self::default()
        }
    }
}

impl Validate for SpecialistLetter {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_parts(path, vb, &self.metadata, &self.context, &self.content);
    }
}

impl Validate for SpecialistLetterContext {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "subject_of_care", self.subject_of_care.as_ref());
        person_participation(vb, path, "author", self.author.as_ref(), true);
        person_participation(vb, path, "referrer", self.referrer.as_ref(), true);
        person_participation(vb, path, "usual_gp", self.usual_gp.as_ref(), false);
        self.header.validate(&child_path(path, "header"), vb);
    }
}

impl Validate for SpecialistLetterContent {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "response_details", self.response_details.as_ref());
        vb.nested(path, "recommendations", self.recommendations.as_ref());
        vb.nested(path, "adverse_reactions", self.adverse_reactions.as_ref());
        vb.nested(path, "medications", self.medications.as_ref());
        vb.optional(
            path,
            "diagnostic_investigations",
            self.diagnostic_investigations.as_ref(),
        );
    }
}

fn header(doc: &SpecialistLetter) -> HeaderFacts<'_> {
    let context = &doc.context;
    HeaderFacts::new(&context.header)
        .subject(context.subject_of_care.as_ref())
        .author(context.author.as_ref())
        .participant(ParticipantRole::Referrer, context.referrer.as_ref())
        .participant(ParticipantRole::UsualGp, context.usual_gp.as_ref())
}

fn response_details(doc: &SpecialistLetter) -> Option<SectionData<'_>> {
    doc.content.response_details.as_ref().map(SectionData::ResponseDetails)
}

fn recommendations(doc: &SpecialistLetter) -> Option<SectionData<'_>> {
    doc.content.recommendations.as_ref().map(SectionData::Recommendations)
}

fn adverse_reactions(doc: &SpecialistLetter) -> Option<SectionData<'_>> {
    doc.content.adverse_reactions.as_ref().map(SectionData::AdverseReactions)
}

fn medications(doc: &SpecialistLetter) -> Option<SectionData<'_>> {
    doc.content.medications.as_ref().map(SectionData::Medications)
}

fn diagnostic_investigations(doc: &SpecialistLetter) -> Option<SectionData<'_>> {
    doc.content
        .diagnostic_investigations
        .as_ref()
        .map(SectionData::DiagnosticInvestigations)
}

impl DocumentModel for SpecialistLetter {
    fn descriptor() -> DocumentDescriptor<Self> {
        DocumentDescriptor::new(DocumentType::SpecialistLetter, header)
            .section(SectionSpec::new(SectionKind::ResponseDetails, response_details))
            .section(SectionSpec::new(SectionKind::Recommendations, recommendations))
            .section(SectionSpec::new(SectionKind::AdverseReactions, adverse_reactions))
            .section(SectionSpec::new(SectionKind::Medications, medications))
            .section(SectionSpec::new(
                SectionKind::DiagnosticInvestigations,
                diagnostic_investigations,
            ))
    }

    fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }
}
