//! e-Referral.

use super::{validate_parts, DocumentType};
use crate::assembler::{DocumentDescriptor, DocumentModel, SectionSpec};
use crate::components::{HeaderFacts, ParticipantRole, SectionKind};
use crate::model::common::person_participation;
use crate::model::{
    AdverseReactions, DiagnosticInvestigations, DocumentMetadata, HeaderContext, MedicalHistory,
    Medications, Participation, ReferralDetail, SubjectOfCare,
};
use crate::narrative::SectionData;
use crate::validation::{child_path, Validate, ValidationBuilder};

/// A referral from one healthcare provider to another.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EReferral {
    pub metadata: DocumentMetadata,
    pub context: EReferralContext,
    pub content: EReferralContent,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EReferralContext {
    pub subject_of_care: Option<SubjectOfCare>,
    pub author: Option<Participation>,
    pub referee: Option<Participation>,
    pub usual_gp: Option<Participation>,
    pub header: HeaderContext,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EReferralContent {
    pub referral_detail: Option<ReferralDetail>,
    pub adverse_reactions: Option<AdverseReactions>,
    pub medications: Option<Medications>,
    pub medical_history: Option<MedicalHistory>,
    pub diagnostic_investigations: Option<DiagnosticInvestigations>,
}

impl EReferral {
    /// An empty e-Referral with a fresh document id.
    pub fn create() -> Self {
        Self {
            metadata: DocumentMetadata::create(),
            ..Self::default()
        }
    }
}

impl Validate for EReferral {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_parts(path, vb, &self.metadata, &self.context, &self.content);
    }
}

impl Validate for EReferralContext {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "subject_of_care", self.subject_of_care.as_ref());
        person_participation(vb, path, "author", self.author.as_ref(), true);
        person_participation(vb, path, "referee", self.referee.as_ref(), true);
        person_participation(vb, path, "usual_gp", self.usual_gp.as_ref(), false);
        self.header.validate(&child_path(path, "header"), vb);
    }
}

impl Validate for EReferralContent {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "referral_detail", self.referral_detail.as_ref());
        vb.nested(path, "adverse_reactions", self.adverse_reactions.as_ref());
        vb.nested(path, "medications", self.medications.as_ref());
        vb.nested(path, "medical_history", self.medical_history.as_ref());
        vb.optional(
            path,
            "diagnostic_investigations",
            self.diagnostic_investigations.as_ref(),
        );
    }
}

fn header(doc: &EReferral) -> HeaderFacts<'_> {
    let context = &doc.context;
    HeaderFacts::new(&context.header)
        .subject(context.subject_of_care.as_ref())
        .author(context.author.as_ref())
        .participant(ParticipantRole::Referee, context.referee.as_ref())
        .participant(ParticipantRole::UsualGp, context.usual_gp.as_ref())
}

fn referral_detail(doc: &EReferral) -> Option<SectionData<'_>> {
    doc.content.referral_detail.as_ref().map(SectionData::ReferralDetail)
}

fn adverse_reactions(doc: &EReferral) -> Option<SectionData<'_>> {
    doc.content.adverse_reactions.as_ref().map(SectionData::AdverseReactions)
}

fn medications(doc: &EReferral) -> Option<SectionData<'_>> {
    doc.content.medications.as_ref().map(SectionData::Medications)
}

fn medical_history(doc: &EReferral) -> Option<SectionData<'_>> {
    doc.content.medical_history.as_ref().map(SectionData::MedicalHistory)
}

fn diagnostic_investigations(doc: &EReferral) -> Option<SectionData<'_>> {
    doc.content
        .diagnostic_investigations
        .as_ref()
        .map(SectionData::DiagnosticInvestigations)
}

impl DocumentModel for EReferral {
    fn descriptor() -> DocumentDescriptor<Self> {
        DocumentDescriptor::new(DocumentType::EReferral, header)
            .section(SectionSpec::new(SectionKind::ReferralDetail, referral_detail))
            .section(SectionSpec::new(SectionKind::AdverseReactions, adverse_reactions))
            .section(SectionSpec::new(SectionKind::Medications, medications))
            .section(SectionSpec::new(SectionKind::MedicalHistory, medical_history))
            .section(SectionSpec::new(
                SectionKind::DiagnosticInvestigations,
                diagnostic_investigations,
            ))
    }

    fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }
}
