//! Service Referral.

use super::{validate_parts, DocumentType};
use crate::assembler::{DocumentDescriptor, DocumentModel, SectionSpec};
use crate::components::{HeaderFacts, ParticipantRole, SectionKind};
use crate::model::common::person_participation;
use crate::model::{
    AdverseReactions, DocumentMetadata, HeaderContext, MedicalHistory, Medications, Participation,
    ServiceReferralDetail, SubjectOfCare,
};
use crate::narrative::SectionData;
use crate::validation::{child_path, Validate, ValidationBuilder};

/// A request for a service (rather than a named clinician) on the patient's behalf.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceReferral {
    pub metadata: DocumentMetadata,
    pub context: ServiceReferralContext,
    pub content: ServiceReferralContent,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceReferralContext {
    pub subject_of_care: Option<SubjectOfCare>,
    pub author: Option<Participation>,
    /// Person or organisation asked to provide the service.
    pub service_provider: Option<Participation>,
    pub header: HeaderContext,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceReferralContent {
    pub service_referral_detail: Option<ServiceReferralDetail>,
    pub adverse_reactions: Option<AdverseReactions>,
    pub medications: Option<Medications>,
    pub medical_history: Option<MedicalHistory>,
}

impl ServiceReferral {
    pub fn create() -> Self {
        Self {
            metadata: DocumentMetadata::create(),
            ..Self::default()
        }
    }
}

impl Validate for ServiceReferral {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_parts(path, vb, &self.metadata, &self.context, &self.content);
    }
}

impl Validate for ServiceReferralContext {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "subject_of_care", self.subject_of_care.as_ref());
        person_participation(vb, path, "author", self.author.as_ref(), true);
        vb.nested(path, "service_provider", self.service_provider.as_ref());
        self.header.validate(&child_path(path, "header"), vb);
    }
}

impl Validate for ServiceReferralContent {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(
            path,
            "service_referral_detail",
            self.service_referral_detail.as_ref(),
        );
        vb.nested(path, "adverse_reactions", self.adverse_reactions.as_ref());
        vb.nested(path, "medications", self.medications.as_ref());
        vb.optional(path, "medical_history", self.medical_history.as_ref());
    }
}

fn header(doc: &ServiceReferral) -> HeaderFacts<'_> {
    let context = &doc.context;
    HeaderFacts::new(&context.header)
        .subject(context.subject_of_care.as_ref())
        .author(context.author.as_ref())
        .participant(
            ParticipantRole::ServiceProvider,
            context.service_provider.as_ref(),
        )
}

fn service_referral_detail(doc: &ServiceReferral) -> Option<SectionData<'_>> {
    doc.content
        .service_referral_detail
        .as_ref()
        .map(SectionData::ServiceReferralDetail)
}

fn adverse_reactions(doc: &ServiceReferral) -> Option<SectionData<'_>> {
    doc.content.adverse_reactions.as_ref().map(SectionData::AdverseReactions)
}

fn medications(doc: &ServiceReferral) -> Option<SectionData<'_>> {
    doc.content.medications.as_ref().map(SectionData::Medications)
}

fn medical_history(doc: &ServiceReferral) -> Option<SectionData<'_>> {
    doc.content.medical_history.as_ref().map(SectionData::MedicalHistory)
}

impl DocumentModel for ServiceReferral {
    fn descriptor() -> DocumentDescriptor<Self> {
        DocumentDescriptor::new(DocumentType::ServiceReferral, header)
            .section(SectionSpec::new(
                SectionKind::ServiceReferralDetail,
                service_referral_detail,
            ))
            .section(SectionSpec::new(SectionKind::AdverseReactions, adverse_reactions))
            .section(SectionSpec::new(SectionKind::Medications, medications))
            .section(SectionSpec::new(SectionKind::MedicalHistory, medical_history))
    }

    fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }
}
