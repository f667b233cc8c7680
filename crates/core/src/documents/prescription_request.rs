//! Prescription Request.

use super::{validate_parts, DocumentType};
use crate::assembler::{DocumentDescriptor, DocumentModel, SectionSpec};
use crate::components::{HeaderFacts, ParticipantRole, SectionKind};
use crate::model::common::{organisation_participation, person_participation};
use crate::model::{
    DocumentMetadata, HeaderContext, Participation, PrescriptionRequestItem, SubjectOfCare,
};
use crate::narrative::SectionData;
use crate::validation::{child_path, Validate, ValidationBuilder};

/// A request from a dispenser to a prescriber for a new prescription.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrescriptionRequest {
    pub metadata: DocumentMetadata,
    pub context: PrescriptionRequestContext,
    pub content: PrescriptionRequestContent,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrescriptionRequestContext {
    pub subject_of_care: Option<SubjectOfCare>,
    pub requester: Option<Participation>,
    pub dispensing_organisation: Option<Participation>,
    pub header: HeaderContext,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrescriptionRequestContent {
    pub request_item: Option<PrescriptionRequestItem>,
}

impl PrescriptionRequest {
    pub fn create() -> Self {
        Self {
            metadata: DocumentMetadata::create(),
            ..Self::default()
        }
    }
}

impl Validate for PrescriptionRequest {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_parts(path, vb, &self.metadata, &self.context, &self.content);
    }
}

impl Validate for PrescriptionRequestContext {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "subject_of_care", self.subject_of_care.as_ref());
        person_participation(vb, path, "requester", self.requester.as_ref(), true);
        organisation_participation(
            vb,
            path,
            "dispensing_organisation",
            self.dispensing_organisation.as_ref(),
            true,
        );
        self.header.validate(&child_path(path, "header"), vb);
    }
}

impl Validate for PrescriptionRequestContent {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "request_item", self.request_item.as_ref());
    }
}

fn header(doc: &PrescriptionRequest) -> HeaderFacts<'_> {
    let context = &doc.context;
    HeaderFacts::new(&context.header)
        .subject(context.subject_of_care.as_ref())
        .author(context.requester.as_ref())
        .participant(
            ParticipantRole::DispensingOrganisation,
            context.dispensing_organisation.as_ref(),
        )
}

fn request_item(doc: &PrescriptionRequest) -> Option<SectionData<'_>> {
    doc.content
        .request_item
        .as_ref()
        .map(SectionData::PrescriptionRequestItem)
}

impl DocumentModel for PrescriptionRequest {
    fn descriptor() -> DocumentDescriptor<Self> {
        DocumentDescriptor::new(DocumentType::PrescriptionRequest, header)
            .section(SectionSpec::new(SectionKind::PrescriptionRequestItem, request_item))
    }

    fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    fn reported(remove: impl FnOnce(&mut PrescriptionRequest), field: &str) {
        testing::assert_reported(
            testing::prescription_request(),
            "prescription_request",
            remove,
            field,
        );
    }

    #[test]
    fn each_mandatory_field_is_reported_by_path() {
        reported(|d| d.context.subject_of_care = None, "context.subject_of_care");
        reported(|d| d.context.requester = None, "context.requester");
        reported(
            |d| d.context.dispensing_organisation = None,
            "context.dispensing_organisation",
        );
        reported(|d| d.content.request_item = None, "content.request_item");
        reported(
            |d| {
                if let Some(item) = d.content.request_item.as_mut() {
                    item.medicine = None;
                }
            },
            "content.request_item.medicine",
        );
    }
}
