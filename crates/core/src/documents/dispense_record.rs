//! Dispense Record.

use super::{validate_parts, DocumentType};
use crate::assembler::{DocumentDescriptor, DocumentModel, SectionSpec};
use crate::components::{HeaderFacts, ParticipantRole, SectionKind};
use crate::model::common::{organisation_participation, person_participation};
use crate::model::{
    DispenseItem, DocumentMetadata, HeaderContext, Identifier, Participation, SubjectOfCare,
};
use crate::narrative::SectionData;
use crate::validation::{child_path, Validate, ValidationBuilder};

/// Record of one supply against a prescription.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispenseRecord {
    pub metadata: DocumentMetadata,
    pub context: DispenseRecordContext,
    pub content: DispenseRecordContent,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispenseRecordContext {
    pub subject_of_care: Option<SubjectOfCare>,
    /// The pharmacist; authors the document.
    pub dispenser: Option<Participation>,
    pub dispensing_organisation: Option<Participation>,
    /// Prescription being dispensed against.
    pub prescription_id: Option<Identifier>,
    pub header: HeaderContext,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispenseRecordContent {
    pub dispense_item: Option<DispenseItem>,
}

impl DispenseRecord {
    pub fn create() -> Self {
        Self {
            metadata: DocumentMetadata::create(),
            ..Self::default()
        }
    }
}

impl Validate for DispenseRecord {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_parts(path, vb, &self.metadata, &self.context, &self.content);
    }
}

impl Validate for DispenseRecordContext {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "subject_of_care", self.subject_of_care.as_ref());
        person_participation(vb, path, "dispenser", self.dispenser.as_ref(), true);
        organisation_participation(
            vb,
            path,
            "dispensing_organisation",
            self.dispensing_organisation.as_ref(),
            true,
        );
        vb.nested(path, "prescription_id", self.prescription_id.as_ref());
        self.header.validate(&child_path(path, "header"), vb);
    }
}

impl Validate for DispenseRecordContent {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "dispense_item", self.dispense_item.as_ref());
    }
}

fn header(doc: &DispenseRecord) -> HeaderFacts<'_> {
    let context = &doc.context;
    HeaderFacts::new(&context.header)
        .subject(context.subject_of_care.as_ref())
        .author(context.dispenser.as_ref())
        .participant(
            ParticipantRole::DispensingOrganisation,
            context.dispensing_organisation.as_ref(),
        )
        .order(context.prescription_id.as_ref())
}

fn dispense_item(doc: &DispenseRecord) -> Option<SectionData<'_>> {
    doc.content.dispense_item.as_ref().map(SectionData::DispenseItem)
}

impl DocumentModel for DispenseRecord {
    fn descriptor() -> DocumentDescriptor<Self> {
        DocumentDescriptor::new(DocumentType::DispenseRecord, header)
            .section(SectionSpec::new(SectionKind::DispenseItem, dispense_item))
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
    use std::sync::Arc;

    fn reported(remove: impl FnOnce(&mut DispenseRecord), field: &str) {
        testing::assert_reported(testing::dispense_record(), "dispense_record", remove, field);
    }

    #[test]
    fn each_mandatory_field_is_reported_by_path() {
        reported(|d| d.context.subject_of_care = None, "context.subject_of_care");
        reported(|d| d.context.dispenser = None, "context.dispenser");
        reported(
            |d| d.context.dispensing_organisation = None,
            "context.dispensing_organisation",
        );
        reported(|d| d.context.prescription_id = None, "context.prescription_id");
        reported(|d| d.content.dispense_item = None, "content.dispense_item");
    }

    #[test]
    fn header_names_dispenser_and_prescription() {
        let record = testing::dispense_record();
        let document = DocumentAssembler::new(Arc::new(GeneratorConfig::default()))
            .assemble(&record, &GenerationOptions::default())
            .expect("generates");
        let header = &document.header;
        assert_eq!(header.authors.len(), 1);
        assert_eq!(header.participants.len(), 1);
        assert_eq!(header.participants[0].type_code, "DST");
        assert_eq!(header.in_fulfillment_of.len(), 1);
        assert_eq!(header.in_fulfillment_of[0].extension.as_deref(), Some("RX-2001"));
    }
}
