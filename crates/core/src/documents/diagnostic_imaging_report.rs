//! Diagnostic Imaging Report.

use super::{validate_parts, DocumentType};
use crate::assembler::{DocumentDescriptor, DocumentModel, SectionSpec};
use crate::components::{HeaderFacts, SectionKind};
use crate::model::common::person_participation;
use crate::model::{
    DocumentMetadata, HeaderContext, Identifier, ImagingReport, Participation, ReportAttachment,
    SubjectOfCare,
};
use crate::narrative::SectionData;
use crate::validation::{child_path, Validate, ValidationBuilder};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticImagingReport {
    pub metadata: DocumentMetadata,
    pub context: DiagnosticImagingReportContext,
    pub content: DiagnosticImagingReportContent,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticImagingReportContext {
    pub subject_of_care: Option<SubjectOfCare>,
    /// Reporting radiologist.
    pub author: Option<Participation>,
    pub order: Option<Identifier>,
    pub header: HeaderContext,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticImagingReportContent {
    pub imaging_examination_results: Option<ImagingReport>,
    pub related_document: Option<ReportAttachment>,
}

impl DiagnosticImagingReport {
    pub fn create() -> Self {
        Self {
            metadata: DocumentMetadata::create(),
            ..Self::default()
        }
    }
}

impl Validate for DiagnosticImagingReport {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        validate_parts(path, vb, &self.metadata, &self.context, &self.content);
    }
}

impl Validate for DiagnosticImagingReportContext {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "subject_of_care", self.subject_of_care.as_ref());
        person_participation(vb, path, "author", self.author.as_ref(), true);
        vb.nested(path, "order", self.order.as_ref());
        self.header.validate(&child_path(path, "header"), vb);
    }
}

impl Validate for DiagnosticImagingReportContent {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(
            path,
            "imaging_examination_results",
            self.imaging_examination_results.as_ref(),
        );
        vb.nested(path, "related_document", self.related_document.as_ref());
    }
}

fn header(doc: &DiagnosticImagingReport) -> HeaderFacts<'_> {
    let context = &doc.context;
    HeaderFacts::new(&context.header)
        .subject(context.subject_of_care.as_ref())
        .author(context.author.as_ref())
        .order(context.order.as_ref())
}

fn imaging_examination_results(doc: &DiagnosticImagingReport) -> Option<SectionData<'_>> {
    doc.content
        .imaging_examination_results
        .as_ref()
        .map(SectionData::ImagingExaminationResults)
}

fn related_document(doc: &DiagnosticImagingReport) -> Option<SectionData<'_>> {
    doc.content.related_document.as_ref().map(SectionData::RelatedDocument)
}

impl DocumentModel for DiagnosticImagingReport {
    fn descriptor() -> DocumentDescriptor<Self> {
        DocumentDescriptor::new(DocumentType::DiagnosticImagingReport, header)
            .section(SectionSpec::new(
                SectionKind::ImagingExaminationResults,
                imaging_examination_results,
            ))
            .section(SectionSpec::new(SectionKind::RelatedDocument, related_document))
    }

    fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    fn reported(remove: impl FnOnce(&mut DiagnosticImagingReport), field: &str) {
        testing::assert_reported(
            testing::diagnostic_imaging_report(),
            "diagnostic_imaging_report",
            remove,
            field,
        );
    }

    #[test]
    fn each_mandatory_field_is_reported_by_path() {
        reported(|d| d.context.subject_of_care = None, "context.subject_of_care");
        reported(|d| d.context.author = None, "context.author");
        reported(|d| d.context.order = None, "context.order");
        reported(
            |d| d.content.imaging_examination_results = None,
            "content.imaging_examination_results",
        );
        reported(|d| d.content.related_document = None, "content.related_document");
    }

    #[test]
    fn attachment_media_type_is_checked() {
        let mut report = testing::diagnostic_imaging_report();
        if let Some(attachment) = report.content.related_document.as_mut() {
            attachment.media_type = Some("pdf".into());
        }
        let messages = crate::validation::validate_model(&report, "diagnostic_imaging_report");
        assert_eq!(
            messages[0].location(),
            "diagnostic_imaging_report.content.related_document.media_type"
        );
    }
}
