//! Pathology Result Report.

use super::{validate_parts, DocumentType};
use crate::assembler::{DocumentDescriptor, DocumentModel, SectionSpec};
use crate::components::{HeaderFacts, SectionKind};
use crate::model::common::person_participation;
use crate::model::{
    DocumentMetadata, HeaderContext, Identifier, Participation, PathologyReport, ReportAttachment,
    SubjectOfCare,
};
use crate::narrative::SectionData;
use crate::validation::{child_path, Validate, ValidationBuilder};

/// Laboratory report packaged with its rendered original.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathologyResultReport {
    pub metadata: DocumentMetadata,
    pub context: PathologyResultReportContext,
    pub content: PathologyResultReportContent,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathologyResultReportContext {
    pub subject_of_care: Option<SubjectOfCare>,
    /// Reporting pathologist.
    pub author: Option<Participation>,
    /// Order this report fulfils.
    pub order: Option<Identifier>,
    pub header: HeaderContext,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathologyResultReportContent {
    pub pathology: Option<PathologyReport>,
    pub related_document: Option<ReportAttachment>,
}

impl PathologyResultReport {
    pub fn create() -> Self {
        Self {
            metadata: DocumentMetadata::create(),
            ..Self::default()
        }
    }
}

impl Validate for PathologyResultReport {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_parts(path, vb, &self.metadata, &self.context, &self.content);
    }
}

impl Validate for PathologyResultReportContext {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "subject_of_care", self.subject_of_care.as_ref());
        person_participation(vb, path, "author", self.author.as_ref(), true);
        vb.nested(path, "order", self.order.as_ref());
        self.header.validate(&child_path(path, "header"), vb);
    }
}

impl Validate for PathologyResultReportContent {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "pathology", self.pathology.as_ref());
        vb.nested(path, "related_document", self.related_document.as_ref());
    }
}

fn header(doc: &PathologyResultReport) -> HeaderFacts<'_> {
    let context = &doc.context;
    HeaderFacts::new(&context.header)
        .subject(context.subject_of_care.as_ref())
        .author(context.author.as_ref())
        .order(context.order.as_ref())
}

fn pathology(doc: &PathologyResultReport) -> Option<SectionData<'_>> {
    doc.content.pathology.as_ref().map(SectionData::Pathology)
}

fn related_document(doc: &PathologyResultReport) -> Option<SectionData<'_>> {
    doc.content.related_document.as_ref().map(SectionData::RelatedDocument)
}

impl DocumentModel for PathologyResultReport {
    fn descriptor() -> DocumentDescriptor<Self> {
        DocumentDescriptor::new(DocumentType::PathologyResultReport, header)
            .section(SectionSpec::new(SectionKind::Pathology, pathology))
            .section(SectionSpec::new(SectionKind::RelatedDocument, related_document))
    }

    fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }
}
