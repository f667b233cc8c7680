//! Consumer Entered Health Summary.

use super::{validate_parts, DocumentType};
use crate::assembler::{DocumentDescriptor, DocumentModel, SectionSpec};
use crate::components::{HeaderFacts, SectionKind};
use crate::model::common::person_participation;
use crate::model::{
    AdverseReactions, DocumentMetadata, HeaderContext, Medications, Participation, SubjectOfCare,
};
use crate::narrative::SectionData;
use crate::validation::{child_path, Validate, ValidationBuilder};

/// Health summary written by the consumer (or their representative).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsumerEnteredHealthSummary {
    pub metadata: DocumentMetadata,
    pub context: ConsumerEnteredHealthSummaryContext,
    pub content: ConsumerEnteredHealthSummaryContent,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsumerEnteredHealthSummaryContext {
    pub subject_of_care: Option<SubjectOfCare>,
    /// The consumer or their authorised representative.
    pub author: Option<Participation>,
    pub header: HeaderContext,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsumerEnteredHealthSummaryContent {
    pub adverse_reactions: Option<AdverseReactions>,
    pub medications: Option<Medications>,
}

impl ConsumerEnteredHealthSummary {
    pub fn create() -> Self {
        Self {
            metadata: DocumentMetadata::create(),
            ..Self::default()
        }
    }
}

impl Validate for ConsumerEnteredHealthSummary {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_parts(path, vb, &self.metadata, &self.context, &self.content);
    }
}

impl Validate for ConsumerEnteredHealthSummaryContext {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "subject_of_care", self.subject_of_care.as_ref());
        person_participation(vb, path, "author", self.author.as_ref(), true);
        self.header.validate(&child_path(path, "header"), vb);
    }
}

impl Validate for ConsumerEnteredHealthSummaryContent {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "adverse_reactions", self.adverse_reactions.as_ref());
        vb.nested(path, "medications", self.medications.as_ref());
    }
}

fn header(doc: &ConsumerEnteredHealthSummary) -> HeaderFacts<'_> {
    let context = &doc.context;
    HeaderFacts::new(&context.header)
        .subject(context.subject_of_care.as_ref())
        .author(context.author.as_ref())
}

fn adverse_reactions(doc: &ConsumerEnteredHealthSummary) -> Option<SectionData<'_>> {
    doc.content.adverse_reactions.as_ref().map(SectionData::AdverseReactions)
}

fn medications(doc: &ConsumerEnteredHealthSummary) -> Option<SectionData<'_>> {
    doc.content.medications.as_ref().map(SectionData::Medications)
}

impl DocumentModel for ConsumerEnteredHealthSummary {
    fn descriptor() -> DocumentDescriptor<Self> {
        DocumentDescriptor::new(DocumentType::ConsumerEnteredHealthSummary, header)
            .section(SectionSpec::new(SectionKind::AdverseReactions, adverse_reactions))
            .section(SectionSpec::new(SectionKind::Medications, medications))
    }

    fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    fn reported(remove: impl FnOnce(&mut ConsumerEnteredHealthSummary), field: &str) {
        testing::assert_reported(
            testing::consumer_entered_health_summary(),
            "consumer_entered_health_summary",
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
    }
}
