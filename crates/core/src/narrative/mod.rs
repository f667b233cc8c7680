//! Narrative generation.
//!
//! A [`NarrativeGenerator`] turns the data of one section into the human-readable narrative that
//! sits next to its structured entries. The generator sees exactly the values the section builder
//! encodes, so the two representations cannot diverge.
//!
//! The generator is passed to the assembler explicitly; there is no process-wide default slot.

mod default;

pub use default::DefaultNarrativeGenerator;

use chrono::{DateTime, FixedOffset};

use crate::components::SectionKind;
use crate::documents::DocumentType;
use crate::model::{
    AdverseReactions, AdvanceCareDirective, Alert, ArrangedService, DiagnosesInterventions,
    DiagnosticInvestigations, DispenseItem, Event, ExclusionStatement, HealthProfile,
    Identifier, ImagingReport, Immunisations, MedicalHistory, Medications, PathologyReport, Plan,
    PrescriberInstructions, PrescriptionItem, PrescriptionRequestItem, Recommendations,
    ReferralDetail, ReportAttachment, ResponseDetails, ServiceReferralDetail, SubjectOfCare,
};
use cda::Narrative;

/// The data one body section is built from.
#[derive(Clone, Copy, Debug)]
pub enum SectionData<'a> {
    ReferralDetail(&'a ReferralDetail),
    ServiceReferralDetail(&'a ServiceReferralDetail),
    AdverseReactions(&'a AdverseReactions),
    Medications(&'a Medications),
    MedicalHistory(&'a MedicalHistory),
    DiagnosticInvestigations(&'a DiagnosticInvestigations),
    Immunisations(&'a Immunisations),
    ResponseDetails(&'a ResponseDetails),
    Recommendations(&'a Recommendations),
    Event(&'a Event),
    HealthProfile(&'a HealthProfile),
    Alerts(&'a [Alert]),
    Plan(&'a Plan),
    ArrangedServices(&'a [ArrangedService]),
    DiagnosesInterventions(&'a DiagnosesInterventions),
    Pathology(&'a PathologyReport),
    ImagingExaminationResults(&'a ImagingReport),
    RelatedDocument(&'a ReportAttachment),
    PrescriptionItem(&'a PrescriptionItem),
    PrescriberInstructions(&'a PrescriberInstructions),
    DispenseItem(&'a DispenseItem),
    PrescriptionRequestItem(&'a PrescriptionRequestItem),
    AdvanceCareDirective(&'a AdvanceCareDirective),
    /// Placeholder for a section the document type requires but the caller left empty.
    ExclusionStatement {
        kind: SectionKind,
        statement: ExclusionStatement,
    },
    /// Trailer linking the document to the subject of care's identifiers.
    AdministrativeObservations {
        subject: &'a SubjectOfCare,
        as_at: Option<DateTime<FixedOffset>>,
    },
}

impl SectionData<'_> {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionData::ReferralDetail(_) => SectionKind::ReferralDetail,
            SectionData::ServiceReferralDetail(_) => SectionKind::ServiceReferralDetail,
            SectionData::AdverseReactions(_) => SectionKind::AdverseReactions,
            SectionData::Medications(_) => SectionKind::Medications,
            SectionData::MedicalHistory(_) => SectionKind::MedicalHistory,
            SectionData::DiagnosticInvestigations(_) => SectionKind::DiagnosticInvestigations,
            SectionData::Immunisations(_) => SectionKind::Immunisations,
            SectionData::ResponseDetails(_) => SectionKind::ResponseDetails,
            SectionData::Recommendations(_) => SectionKind::Recommendations,
            SectionData::Event(_) => SectionKind::Event,
            SectionData::HealthProfile(_) => SectionKind::HealthProfile,
            SectionData::Alerts(_) => SectionKind::Alerts,
            SectionData::Plan(_) => SectionKind::Plan,
            SectionData::ArrangedServices(_) => SectionKind::ArrangedServices,
            SectionData::DiagnosesInterventions(_) => SectionKind::DiagnosesInterventions,
            SectionData::Pathology(_) => SectionKind::Pathology,
            SectionData::ImagingExaminationResults(_) => SectionKind::ImagingExaminationResults,
            SectionData::RelatedDocument(_) => SectionKind::RelatedDocument,
            SectionData::PrescriptionItem(_) => SectionKind::PrescriptionItem,
            SectionData::PrescriberInstructions(_) => SectionKind::PrescriberInstructions,
            SectionData::DispenseItem(_) => SectionKind::DispenseItem,
            SectionData::PrescriptionRequestItem(_) => SectionKind::PrescriptionRequestItem,
            SectionData::AdvanceCareDirective(_) => SectionKind::AdvanceCareDirective,
            SectionData::ExclusionStatement { kind, .. } => *kind,
            SectionData::AdministrativeObservations { .. } => SectionKind::AdministrativeObservations,
        }
    }
}

/// Identifiers a generator may reference while rendering a section.
#[derive(Clone, Copy, Debug)]
pub struct NarrativeContext<'a> {
    pub document_type: DocumentType,
    pub subject_of_care_id: Option<&'a Identifier>,
}

/// Produces section narrative.
///
/// Implementations must be deterministic: the same data and context yield the same narrative.
/// Dates are rendered from the values passed in, never from the clock or the host locale.
pub trait NarrativeGenerator {
    fn narrative(&self, data: SectionData<'_>, ctx: &NarrativeContext<'_>) -> Narrative;
}
