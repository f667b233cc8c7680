//! Document types.
//!
//! Each supported document type has a root model (metadata, context, content) in one of the
//! submodules, implements [`DocumentModel`](crate::assembler::DocumentModel), and supplies a
//! declarative descriptor: the header facts it consumes and its ordered list of sections.
//!
//! Template identities and document codes are static and looked up through [`DocumentType`].

mod advance_care_information;
mod consumer_entered_health_summary;
mod diagnostic_imaging_report;
mod discharge_summary;
mod dispense_record;
mod e_referral;
mod event_summary;
mod pathology_result_report;
mod prescription_record;
mod prescription_request;
mod service_referral;
mod shared_health_summary;
mod specialist_letter;

pub use advance_care_information::{
    AdvanceCareInformation, AdvanceCareInformationContent, AdvanceCareInformationContext,
};
pub use consumer_entered_health_summary::{
    ConsumerEnteredHealthSummary, ConsumerEnteredHealthSummaryContent,
    ConsumerEnteredHealthSummaryContext,
};
pub use diagnostic_imaging_report::{
    DiagnosticImagingReport, DiagnosticImagingReportContent, DiagnosticImagingReportContext,
};
pub use discharge_summary::{
    DischargeSummary, DischargeSummaryContent, DischargeSummaryContext,
};
pub use dispense_record::{DispenseRecord, DispenseRecordContent, DispenseRecordContext};
pub use e_referral::{EReferral, EReferralContent, EReferralContext};
pub use event_summary::{EventSummary, EventSummaryContent, EventSummaryContext};
pub use pathology_result_report::{
    PathologyResultReport, PathologyResultReportContent, PathologyResultReportContext,
};
pub use prescription_record::{
    PrescriptionRecord, PrescriptionRecordContent, PrescriptionRecordContext,
};
pub use prescription_request::{
    PrescriptionRequest, PrescriptionRequestContent, PrescriptionRequestContext,
};
pub use service_referral::{ServiceReferral, ServiceReferralContent, ServiceReferralContext};
pub use shared_health_summary::{
    SharedHealthSummary, SharedHealthSummaryContent, SharedHealthSummaryContext,
};
pub use specialist_letter::{
    SpecialistLetter, SpecialistLetterContent, SpecialistLetterContext,
};

use std::fmt;

use cda::{Cd, TemplateId, TemplateIdentity};

use crate::constants::{
    LOINC_CODE_SYSTEM, LOINC_CODE_SYSTEM_NAME, NCTIS_CODE_SYSTEM, NCTIS_CODE_SYSTEM_NAME,
};
use crate::model::DocumentMetadata;
use crate::validation::{child_path, Validate, ValidationBuilder};

/// Root of every clinical document template identifier.
const TEMPLATE_ROOT_PREFIX: &str = "1.2.36.1.2001.1001.101.100";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DocumentType {
    EReferral,
    ServiceReferral,
    SpecialistLetter,
    DischargeSummary,
    SharedHealthSummary,
    EventSummary,
    PathologyResultReport,
    DiagnosticImagingReport,
    PrescriptionRecord,
    DispenseRecord,
    PrescriptionRequest,
    AdvanceCareInformation,
    ConsumerEnteredHealthSummary,
}

#[derive(Clone, Copy)]
enum CodeSystem {
    Loinc,
    Nctis,
}

/// Static facts about a document type.
#[derive(Clone, Copy)]
struct TypeInfo {
    template: &'static str,
    version: &'static str,
    title: &'static str,
    code: &'static str,
    system: CodeSystem,
    root_path: &'static str,
}

const fn info(
    template: &'static str,
    version: &'static str,
    title: &'static str,
    code: &'static str,
    system: CodeSystem,
    root_path: &'static str,
) -> TypeInfo {
    TypeInfo {
        template,
        version,
        title,
        code,
        system,
        root_path,
    }
}

impl DocumentType {
    pub const ALL: [DocumentType; 13] = [
        DocumentType::EReferral,
        DocumentType::ServiceReferral,
        DocumentType::SpecialistLetter,
        DocumentType::DischargeSummary,
        DocumentType::SharedHealthSummary,
        DocumentType::EventSummary,
        DocumentType::PathologyResultReport,
        DocumentType::DiagnosticImagingReport,
        DocumentType::PrescriptionRecord,
        DocumentType::DispenseRecord,
        DocumentType::PrescriptionRequest,
        DocumentType::AdvanceCareInformation,
        DocumentType::ConsumerEnteredHealthSummary,
    ];

    fn info(self) -> TypeInfo {
        use CodeSystem::{Loinc, Nctis};
        match self {
            DocumentType::EReferral => {
                info("1002.2", "2.2", "e-Referral", "57133-1", Loinc, "e_referral")
            }
            DocumentType::ServiceReferral => info(
                "1002.136",
                "1.0",
                "Service Referral",
                "100.16620",
                Nctis,
                "service_referral",
            ),
            DocumentType::SpecialistLetter => info(
                "1002.132",
                "1.3",
                "Specialist Letter",
                "51852-2",
                Loinc,
                "specialist_letter",
            ),
            DocumentType::DischargeSummary => info(
                "1002.4",
                "3.4",
                "Discharge Summary",
                "18842-5",
                Loinc,
                "discharge_summary",
            ),
            DocumentType::SharedHealthSummary => info(
                "1002.120",
                "1.0",
                "Shared Health Summary",
                "60591-5",
                Loinc,
                "shared_health_summary",
            ),
            DocumentType::EventSummary => info(
                "1002.144",
                "1.1",
                "Event Summary",
                "34133-9",
                Loinc,
                "event_summary",
            ),
            DocumentType::PathologyResultReport => info(
                "1002.220",
                "1.0",
                "Pathology Report",
                "11526-1",
                Loinc,
                "pathology_result_report",
            ),
            DocumentType::DiagnosticImagingReport => info(
                "1002.222",
                "1.0",
                "Diagnostic Imaging Report",
                "18748-4",
                Loinc,
                "diagnostic_imaging_report",
            ),
            DocumentType::PrescriptionRecord => info(
                "1002.170",
                "2.2",
                "Prescription Record",
                "100.16765",
                Nctis,
                "prescription_record",
            ),
            DocumentType::DispenseRecord => info(
                "1002.171",
                "2.2",
                "Dispense Record",
                "100.16764",
                Nctis,
                "dispense_record",
            ),
            DocumentType::PrescriptionRequest => info(
                "1002.172",
                "2.0",
                "Prescription Request",
                "100.16285",
                Nctis,
                "prescription_request",
            ),
            DocumentType::AdvanceCareInformation => info(
                "1002.185",
                "1.0",
                "Advance Care Information",
                "100.16975",
                Nctis,
                "advance_care_information",
            ),
            DocumentType::ConsumerEnteredHealthSummary => info(
                "1002.147",
                "1.0",
                "Consumer Entered Health Summary",
                "100.16685",
                Nctis,
                "consumer_entered_health_summary",
            ),
        }
    }

    /// Static template identity of this document type.
    pub fn template_identity(self) -> TemplateIdentity {
        let info = self.info();
        TemplateIdentity {
            template_id: TemplateId {
                root: format!("{TEMPLATE_ROOT_PREFIX}.{}", info.template),
                version: info.version.to_string(),
            },
            title: info.title.to_string(),
        }
    }

    /// Document code (`ClinicalDocument/code`).
    pub fn document_code(self) -> Cd {
        let info = self.info();
        match info.system {
            CodeSystem::Loinc => {
                Cd::coded(info.code, LOINC_CODE_SYSTEM, LOINC_CODE_SYSTEM_NAME, info.title)
            }
            CodeSystem::Nctis => {
                Cd::coded(info.code, NCTIS_CODE_SYSTEM, NCTIS_CODE_SYSTEM_NAME, info.title)
            }
        }
    }

    pub fn title(self) -> &'static str {
        self.info().title
    }

    /// Root label used in validation paths, e.g. `e_referral`.
    pub fn root_path(self) -> &'static str {
        self.info().root_path
    }
}

/// Validates the three parts every document root carries.
fn validate_parts(
    path: &str,
    vb: &mut ValidationBuilder,
    metadata: &DocumentMetadata,
    context: &dyn Validate,
    content: &dyn Validate,
) {
    metadata.validate(&child_path(path, "metadata"), vb);
    context.validate(&child_path(path, "context"), vb);
    content.validate(&child_path(path, "content"), vb);
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn template_identities_are_valid_and_distinct() {
        let mut roots = BTreeSet::new();
        for document_type in DocumentType::ALL {
            let identity = document_type.template_identity();
            let reparsed = TemplateId::parse(&identity.template_id.to_string())
                .expect("static template id parses");
            assert_eq!(reparsed, identity.template_id);
            assert!(roots.insert(identity.template_id.root.clone()));
        }
    }

    #[test]
    fn e_referral_identity() {
        let identity = DocumentType::EReferral.template_identity();
        assert_eq!(
            identity.template_id.to_string(),
            "1.2.36.1.2001.1001.101.100.1002.2^2.2"
        );
        assert_eq!(identity.title, "e-Referral");
        assert_eq!(
            DocumentType::EReferral.document_code().code.as_deref(),
            Some("57133-1")
        );
    }

    #[test]
    fn root_paths_are_unique() {
        let paths: BTreeSet<&str> = DocumentType::ALL.iter().map(|t| t.root_path()).collect();
        assert_eq!(paths.len(), DocumentType::ALL.len());
    }
}
