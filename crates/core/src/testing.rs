//! Shared fixtures for unit tests: one minimal valid model per document type.

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::assembler::{DocumentAssembler, DocumentModel};
use crate::config::GenerationOptions;
use crate::documents::*;
use crate::model::*;
use crate::validation::{validate_model, Validate};
use crate::GenerationResult;

const LOCAL_ROOT: &str = "1.2.36.1.2001.1005.1";

pub(crate) fn created() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2026-03-05T10:30:00+10:00").expect("fixture time")
}

fn at(raw: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(raw).expect("fixture time")
}

fn concept(text: &str) -> CodedConcept {
    CodedConcept::from_original_text(text)
}

pub(crate) fn metadata() -> DocumentMetadata {
    DocumentMetadata {
        document_id: Some(Identifier::new(LOCAL_ROOT, Some("doc-1"))),
        ..DocumentMetadata::default()
    }
    .created_at(created())
}

pub(crate) fn subject_of_care() -> SubjectOfCare {
    SubjectOfCare {
        names: vec![PersonName::new("Ada", "Lovelace")],
        sex: Some(Sex::Female),
        date_of_birth: NaiveDate::from_ymd_opt(1980, 1, 2),
        identifiers: vec![Identifier::new("1.2.36.1.2001.1003.0", Some("8003608833357361"))],
        ..SubjectOfCare::default()
    }
}

pub(crate) fn person(role: &str, given: &str, family: &str) -> Participation {
    Participation::new(
        concept(role),
        Participant::person(Person::named(PersonName::new(given, family))),
    )
}

pub(crate) fn organisation(role: &str, name: &str) -> Participation {
    Participation::new(concept(role), Participant::organisation(Organisation::named(name)))
}

pub(crate) fn header_context() -> HeaderContext {
    HeaderContext {
        custodian: Some(organisation("Custodian", "Good Health Clinic")),
        ..HeaderContext::default()
    }
}

fn author() -> Option<Participation> {
    Some(person("General practitioner", "Grace", "Hopper"))
}

fn adverse_reactions() -> AdverseReactions {
    AdverseReactions::of(vec![AdverseReaction::new(concept("Penicillin"))
        .with_manifestation(concept("Urticaria"))])
}

fn medications() -> Medications {
    Medications::of(vec![MedicationItem::new(
        concept("Atorvastatin 20 mg tablet"),
        "One tablet at night",
    )])
}

pub(crate) fn diagnostic_investigations() -> DiagnosticInvestigations {
    DiagnosticInvestigations {
        other_tests: vec!["Resting ECG".to_string()],
        ..DiagnosticInvestigations::default()
    }
}

pub(crate) fn immunisations() -> Immunisations {
    Immunisations {
        items: vec![Immunisation {
            vaccine: Some(concept("Influenza vaccine")),
            administered: NaiveDate::from_ymd_opt(2025, 4, 14),
            sequence_number: Some(1),
        }],
        exclusion_statement: None,
    }
}

fn attachment(title: &str) -> ReportAttachment {
    ReportAttachment {
        title: Some(title.to_string()),
        reference: Some("report.pdf".to_string()),
        media_type: Some("application/pdf".to_string()),
        status: ResultStatus::Final,
    }
}

pub(crate) fn e_referral() -> EReferral {
    EReferral {
        metadata: metadata(),
        context: EReferralContext {
            subject_of_care: Some(subject_of_care()),
            author: author(),
            referee: Some(person("Cardiologist", "Sam", "Jones")),
            usual_gp: None,
            header: header_context(),
        },
        content: EReferralContent {
            referral_detail: Some(ReferralDetail {
                reasons: vec![concept("Chest pain on exertion")],
                ..ReferralDetail::default()
            }),
            adverse_reactions: Some(adverse_reactions()),
            medications: Some(medications()),
            medical_history: Some(MedicalHistory::none(ExclusionStatement::NoneKnown)),
            diagnostic_investigations: None,
        },
    }
}

pub(crate) fn service_referral() -> ServiceReferral {
    ServiceReferral {
        metadata: metadata(),
        context: ServiceReferralContext {
            subject_of_care: Some(subject_of_care()),
            author: author(),
            service_provider: Some(person("Physiotherapist", "Lee", "Park")),
            header: header_context(),
        },
        content: ServiceReferralContent {
            service_referral_detail: Some(ServiceReferralDetail {
                requested_services: vec![RequestedService {
                    service: Some(concept("Physiotherapy")),
                    requested_on: Some(created()),
                    provider_note: None,
                }],
                clinical_synopsis: None,
            }),
            adverse_reactions: Some(AdverseReactions::none(ExclusionStatement::NoneKnown)),
            medications: Some(medications()),
            medical_history: None,
        },
    }
}

pub(crate) fn specialist_letter() -> SpecialistLetter {
    SpecialistLetter {
        metadata: metadata(),
        context: SpecialistLetterContext {
            subject_of_care: Some(subject_of_care()),
            author: Some(person("Cardiologist", "Sam", "Jones")),
            referrer: author(),
            usual_gp: None,
            header: header_context(),
        },
        content: SpecialistLetterContent {
            response_details: Some(ResponseDetails {
                response_narrative: Some("Stable angina, managed medically.".to_string()),
                ..ResponseDetails::default()
            }),
            recommendations: Some(Recommendations::none(ExclusionStatement::NoneSupplied)),
            adverse_reactions: Some(adverse_reactions()),
            medications: Some(medications()),
            diagnostic_investigations: None,
        },
    }
}

pub(crate) fn discharge_summary() -> DischargeSummary {
    DischargeSummary {
        metadata: metadata(),
        context: DischargeSummaryContext {
            subject_of_care: Some(subject_of_care()),
            author: Some(person("Registrar", "Ana", "Lee")),
            encounter: Some(Encounter {
                facility: Some(Organisation::named("General Hospital")),
                period: Some(Period::between(
                    at("2026-03-01T08:00:00+10:00"),
                    at("2026-03-05T10:00:00+10:00"),
                )),
                ..Encounter::default()
            }),
            responsible_health_professional: Some(person("Consultant", "Ravi", "Shah")),
            header: header_context(),
        },
        content: DischargeSummaryContent {
            event: Some(Event {
                clinical_synopsis: Some("Admitted with community acquired pneumonia.".to_string()),
                ..Event::default()
            }),
            medications: Some(medications()),
            health_profile: None,
            plan: None,
        },
    }
}

pub(crate) fn shared_health_summary() -> SharedHealthSummary {
    SharedHealthSummary {
        metadata: metadata(),
        context: SharedHealthSummaryContext {
            subject_of_care: Some(subject_of_care()),
            author: author(),
            header: header_context(),
        },
        content: SharedHealthSummaryContent {
            adverse_reactions: Some(adverse_reactions()),
            medications: Some(medications()),
            medical_history: Some(MedicalHistory::none(ExclusionStatement::NoneKnown)),
            immunisations: Some(immunisations()),
        },
    }
}

pub(crate) fn event_summary() -> EventSummary {
    EventSummary {
        metadata: metadata(),
        context: EventSummaryContext {
            subject_of_care: Some(subject_of_care()),
            author: author(),
            header: header_context(),
        },
        content: EventSummaryContent {
            diagnoses_interventions: Some(DiagnosesInterventions {
                problems: vec![ProblemDiagnosis::new(concept("Sprained ankle"))],
                ..DiagnosesInterventions::default()
            }),
            ..EventSummaryContent::default()
        },
    }
}

pub(crate) fn consumer_entered_health_summary() -> ConsumerEnteredHealthSummary {
    ConsumerEnteredHealthSummary {
        metadata: metadata(),
        context: ConsumerEnteredHealthSummaryContext {
            subject_of_care: Some(subject_of_care()),
            author: Some(person("Consumer", "Ada", "Lovelace")),
            header: header_context(),
        },
        content: ConsumerEnteredHealthSummaryContent {
            adverse_reactions: Some(AdverseReactions::none(ExclusionStatement::NoneKnown)),
            medications: Some(medications()),
        },
    }
}

pub(crate) fn pathology_result_report() -> PathologyResultReport {
    PathologyResultReport {
        metadata: metadata(),
        context: PathologyResultReportContext {
            subject_of_care: Some(subject_of_care()),
            author: Some(person("Pathologist", "Jo", "Tan")),
            order: Some(Identifier::new("1.2.36.1.2001.1005.52", Some("ORD-1001"))),
            header: header_context(),
        },
        content: PathologyResultReportContent {
            pathology: Some(PathologyReport {
                results: vec![PathologyTestResult {
                    test_name: Some(concept("Serum sodium")),
                    collected: Some(at("2026-03-04T07:45:00+10:00")),
                    status: ResultStatus::Final,
                    values: vec![ResultValue {
                        name: Some(concept("Sodium")),
                        value: Some(Measurement::quantity("139", "mmol/L")),
                        reference_range: Some("135-145".to_string()),
                        abnormal: false,
                    }],
                    conclusion: None,
                }],
            }),
            related_document: Some(attachment("Electrolytes")),
        },
    }
}

pub(crate) fn diagnostic_imaging_report() -> DiagnosticImagingReport {
    DiagnosticImagingReport {
        metadata: metadata(),
        context: DiagnosticImagingReportContext {
            subject_of_care: Some(subject_of_care()),
            author: Some(person("Radiologist", "Max", "Bell")),
            order: Some(Identifier::new("1.2.36.1.2001.1005.52", Some("ORD-1002"))),
            header: header_context(),
        },
        content: DiagnosticImagingReportContent {
            imaging_examination_results: Some(ImagingReport {
                results: vec![ImagingExaminationResult {
                    examination: Some(concept("Chest X-ray")),
                    performed: Some(at("2026-03-04T09:10:00+10:00")),
                    status: ResultStatus::Final,
                    anatomical_site: None,
                    findings: Some("No acute abnormality.".to_string()),
                }],
            }),
            related_document: Some(attachment("Chest X-ray report")),
        },
    }
}

fn pharmacy() -> Participation {
    organisation("Dispensing organisation", "Corner Pharmacy")
}

fn medicine() -> Option<CodedConcept> {
    Some(concept("Amoxicillin 500 mg capsule"))
}

pub(crate) fn prescription_record() -> PrescriptionRecord {
    PrescriptionRecord {
        metadata: metadata(),
        context: PrescriptionRecordContext {
            subject_of_care: Some(subject_of_care()),
            prescriber: author(),
            prescriber_organisation: Some(organisation(
                "Prescriber organisation",
                "Good Health Clinic",
            )),
            header: header_context(),
        },
        content: PrescriptionRecordContent {
            prescription_item: Some(PrescriptionItem {
                prescription_id: Some(Identifier::new(LOCAL_ROOT, Some("RX-2001"))),
                medicine: medicine(),
                directions: Some("One capsule three times a day".to_string()),
                quantity: Some("20".to_string()),
                repeats: Some(0),
                written: Some(created()),
                ..PrescriptionItem::default()
            }),
            prescriber_instructions: None,
        },
    }
}

pub(crate) fn dispense_record() -> DispenseRecord {
    DispenseRecord {
        metadata: metadata(),
        context: DispenseRecordContext {
            subject_of_care: Some(subject_of_care()),
            dispenser: Some(person("Pharmacist", "Noor", "Haddad")),
            dispensing_organisation: Some(pharmacy()),
            prescription_id: Some(Identifier::new(LOCAL_ROOT, Some("RX-2001"))),
            header: header_context(),
        },
        content: DispenseRecordContent {
            dispense_item: Some(DispenseItem {
                dispense_id: Some(Identifier::new(LOCAL_ROOT, Some("DSP-3001"))),
                medicine: medicine(),
                quantity: Some("20".to_string()),
                dispensed: Some(at("2026-03-05T15:00:00+10:00")),
                ..DispenseItem::default()
            }),
        },
    }
}

pub(crate) fn prescription_request() -> PrescriptionRequest {
    PrescriptionRequest {
        metadata: metadata(),
        context: PrescriptionRequestContext {
            subject_of_care: Some(subject_of_care()),
            requester: Some(person("Pharmacist", "Noor", "Haddad")),
            dispensing_organisation: Some(pharmacy()),
            header: header_context(),
        },
        content: PrescriptionRequestContent {
            request_item: Some(PrescriptionRequestItem {
                request_id: Some(Identifier::new(LOCAL_ROOT, Some("REQ-4001"))),
                medicine: medicine(),
                requested: Some(created()),
                ..PrescriptionRequestItem::default()
            }),
        },
    }
}

pub(crate) fn advance_care_information() -> AdvanceCareInformation {
    AdvanceCareInformation {
        metadata: metadata(),
        context: AdvanceCareInformationContext {
            subject_of_care: Some(subject_of_care()),
            author: author(),
            header: header_context(),
        },
        content: AdvanceCareInformationContent {
            advance_care_directive: Some(AdvanceCareDirective {
                directive_type: Some(concept("Advance care plan")),
                description: Some("Copy held by general practitioner.".to_string()),
                recorded: NaiveDate::from_ymd_opt(2025, 11, 20),
            }),
            related_document: Some(attachment("Advance care plan")),
        },
    }
}

/// Asserts that applying `remove` to a valid `base` yields exactly one message at `root.field`.
pub(crate) fn assert_reported<D: Validate>(
    mut base: D,
    root: &str,
    remove: impl FnOnce(&mut D),
    field: &str,
) {
    assert!(validate_model(&base, root).is_empty(), "fixture for {root} is valid");
    remove(&mut base);
    let locations: Vec<String> = validate_model(&base, root)
        .iter()
        .map(|m| m.location())
        .collect();
    assert_eq!(locations, vec![format!("{root}.{field}")]);
}

fn assemble<D: DocumentModel>(
    assembler: &DocumentAssembler,
    options: &GenerationOptions,
    doc: D,
) -> GenerationResult<cda::StructuredDocument> {
    assembler.assemble(&doc, options)
}

/// Generates every document type from its minimal model.
pub(crate) fn all_minimal(
    assembler: &DocumentAssembler,
    options: &GenerationOptions,
) -> Vec<GenerationResult<cda::StructuredDocument>> {
    vec![
        assemble(assembler, options, e_referral()),
        assemble(assembler, options, service_referral()),
        assemble(assembler, options, specialist_letter()),
        assemble(assembler, options, discharge_summary()),
        assemble(assembler, options, shared_health_summary()),
        assemble(assembler, options, event_summary()),
        assemble(assembler, options, pathology_result_report()),
        assemble(assembler, options, diagnostic_imaging_report()),
        assemble(assembler, options, prescription_record()),
        assemble(assembler, options, dispense_record()),
        assemble(assembler, options, prescription_request()),
        assemble(assembler, options, advance_care_information()),
        assemble(assembler, options, consumer_entered_health_summary()),
    ]
}
