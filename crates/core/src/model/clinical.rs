//! Section content shared across document types.
//!
//! Each type here is the domain object one body section is built from. Sections that may record
//! "nothing to report" carry an [`ExclusionStatement`] alongside their items; exactly one of the
//! two must be supplied.

use chrono::{DateTime, FixedOffset, NaiveDate};

use super::common::{CodedConcept, Identifier, Measurement, Participation, Period};
use crate::validation::{Validate, ValidationBuilder};

/// Explicit statement that a list section has no items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExclusionStatement {
    NoneKnown,
    NotAsked,
    NoneSupplied,
    NotApplicable,
}

impl ExclusionStatement {
    /// Global statement code and display.
    pub fn code(self) -> (&'static str, &'static str) {
        match self {
            ExclusionStatement::NoneKnown => ("01", "None known"),
            ExclusionStatement::NotAsked => ("02", "Not asked"),
            ExclusionStatement::NoneSupplied => ("03", "None supplied"),
            ExclusionStatement::NotApplicable => ("04", "Not applicable"),
        }
    }

    pub fn display(self) -> &'static str {
        self.code().1
    }
}

/// Items-or-exclusion rule shared by list sections.
fn items_or_exclusion(
    vb: &mut ValidationBuilder,
    path: &str,
    items_field: &str,
    has_items: bool,
    exclusion: Option<ExclusionStatement>,
) {
    vb.exactly_one(
        path,
        &[(items_field, has_items), ("exclusion_statement", exclusion.is_some())],
    );
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferralDetail {
    pub reasons: Vec<CodedConcept>,
    pub clinical_synopsis: Option<String>,
    pub validity: Option<Period>,
}

impl Validate for ReferralDetail {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if vb.required_items(path, "reasons", &self.reasons) {
            vb.each(path, "reasons", &self.reasons);
        }
        vb.optional_text(path, "clinical_synopsis", self.clinical_synopsis.as_deref());
        vb.optional(path, "validity", self.validity.as_ref());
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestedService {
    pub service: Option<CodedConcept>,
    pub requested_on: Option<DateTime<FixedOffset>>,
    pub provider_note: Option<String>,
}

impl Validate for RequestedService {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "service", self.service.as_ref());
        vb.optional_text(path, "provider_note", self.provider_note.as_deref());
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceReferralDetail {
    pub requested_services: Vec<RequestedService>,
    pub clinical_synopsis: Option<String>,
}

impl Validate for ServiceReferralDetail {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if vb.required_items(path, "requested_services", &self.requested_services) {
            vb.each(path, "requested_services", &self.requested_services);
        }
        vb.optional_text(path, "clinical_synopsis", self.clinical_synopsis.as_deref());
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdverseReaction {
    pub substance: Option<CodedConcept>,
    pub reaction_type: Option<CodedConcept>,
    pub manifestations: Vec<CodedConcept>,
}

impl AdverseReaction {
    pub fn new(substance: CodedConcept) -> Self {
        Self {
            substance: Some(substance),
            ..Self::default()
        }
    }

    pub fn with_manifestation(mut self, manifestation: CodedConcept) -> Self {
        self.manifestations.push(manifestation);
        self
    }
}

impl Validate for AdverseReaction {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "substance", self.substance.as_ref());
        vb.optional(path, "reaction_type", self.reaction_type.as_ref());
        vb.each(path, "manifestations", &self.manifestations);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdverseReactions {
    pub reactions: Vec<AdverseReaction>,
    pub exclusion_statement: Option<ExclusionStatement>,
}

impl AdverseReactions {
    pub fn none(statement: ExclusionStatement) -> Self {
        Self {
            reactions: Vec::new(),
            exclusion_statement: Some(statement),
        }
    }

    pub fn of(reactions: Vec<AdverseReaction>) -> Self {
        Self {
            reactions,
            exclusion_statement: None,
        }
    }
}

impl Validate for AdverseReactions {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        items_or_exclusion(
            vb,
            path,
            "reactions",
            !self.reactions.is_empty(),
            self.exclusion_statement,
        );
        vb.each(path, "reactions", &self.reactions);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeStatus {
    Unchanged,
    Changed,
    Ceased,
    Prescribed,
}

impl ChangeStatus {
    pub fn code(self) -> (&'static str, &'static str) {
        match self {
            ChangeStatus::Changed => ("01", "Changed"),
            ChangeStatus::Unchanged => ("02", "Unchanged"),
            ChangeStatus::Ceased => ("03", "Ceased"),
            ChangeStatus::Prescribed => ("04", "Prescribed"),
        }
    }

    fn requires_reason(self) -> bool {
        matches!(self, ChangeStatus::Changed | ChangeStatus::Ceased)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MedicationChange {
    pub status: ChangeStatus,
    pub reason: Option<String>,
}

impl Validate for MedicationChange {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if self.status.requires_reason() {
            vb.required_text(path, "reason", self.reason.as_deref());
        } else if self.reason.is_some() {
            vb.add(
                path,
                "reason",
                format!("not allowed when status is {}", self.status.code().1),
            );
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MedicationItem {
    pub medicine: Option<CodedConcept>,
    pub directions: Option<String>,
    pub clinical_indication: Option<String>,
    pub comment: Option<String>,
    pub change: Option<MedicationChange>,
}

impl MedicationItem {
    pub fn new(medicine: CodedConcept, directions: &str) -> Self {
        Self {
            medicine: Some(medicine),
            directions: Some(directions.to_string()),
            ..Self::default()
        }
    }
}

impl Validate for MedicationItem {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "medicine", self.medicine.as_ref());
        vb.required_text(path, "directions", self.directions.as_deref());
        vb.optional_text(path, "clinical_indication", self.clinical_indication.as_deref());
        vb.optional_text(path, "comment", self.comment.as_deref());
        vb.optional(path, "change", self.change.as_ref());
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Medications {
    pub items: Vec<MedicationItem>,
    pub exclusion_statement: Option<ExclusionStatement>,
}

impl Medications {
    pub fn none(statement: ExclusionStatement) -> Self {
        Self {
            items: Vec::new(),
            exclusion_statement: Some(statement),
        }
    }

    pub fn of(items: Vec<MedicationItem>) -> Self {
        Self {
            items,
            exclusion_statement: None,
        }
    }
}

impl Validate for Medications {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        items_or_exclusion(vb, path, "items", !self.items.is_empty(), self.exclusion_statement);
        vb.each(path, "items", &self.items);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProblemDiagnosis {
    pub identification: Option<CodedConcept>,
    pub onset: Option<NaiveDate>,
    pub resolved: Option<NaiveDate>,
    pub comment: Option<String>,
}

impl ProblemDiagnosis {
    pub fn new(identification: CodedConcept) -> Self {
        Self {
            identification: Some(identification),
            ..Self::default()
        }
    }
}

impl Validate for ProblemDiagnosis {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "identification", self.identification.as_ref());
        if let (Some(onset), Some(resolved)) = (self.onset, self.resolved) {
            if resolved < onset {
                vb.add(path, "resolved", "must not be before onset");
            }
        }
        vb.optional_text(path, "comment", self.comment.as_deref());
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Procedure {
    pub procedure: Option<CodedConcept>,
    pub performed: Option<NaiveDate>,
    pub comment: Option<String>,
}

impl Procedure {
    pub fn new(procedure: CodedConcept) -> Self {
        Self {
            procedure: Some(procedure),
            ..Self::default()
        }
    }
}

impl Validate for Procedure {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "procedure", self.procedure.as_ref());
        vb.optional_text(path, "comment", self.comment.as_deref());
    }
}

/// Medical history entry that is neither a problem nor a procedure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MedicalHistoryItem {
    pub description: Option<String>,
    pub period: Option<Period>,
    pub comment: Option<String>,
}

impl Validate for MedicalHistoryItem {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.required_text(path, "description", self.description.as_deref());
        vb.optional(path, "period", self.period.as_ref());
        vb.optional_text(path, "comment", self.comment.as_deref());
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MedicalHistory {
    pub problems: Vec<ProblemDiagnosis>,
    pub procedures: Vec<Procedure>,
    pub other_items: Vec<MedicalHistoryItem>,
    pub exclusion_statement: Option<ExclusionStatement>,
}

impl MedicalHistory {
    pub fn none(statement: ExclusionStatement) -> Self {
        Self {
            exclusion_statement: Some(statement),
            ..Self::default()
        }
    }

    pub fn has_items(&self) -> bool {
        !(self.problems.is_empty() && self.procedures.is_empty() && self.other_items.is_empty())
    }
}

impl Validate for MedicalHistory {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        items_or_exclusion(vb, path, "items", self.has_items(), self.exclusion_statement);
        vb.each(path, "problems", &self.problems);
        vb.each(path, "procedures", &self.procedures);
        vb.each(path, "other_items", &self.other_items);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResultStatus {
    Registered,
    Interim,
    #[default]
    Final,
    Amended,
    Cancelled,
}

impl ResultStatus {
    pub fn code(self) -> (&'static str, &'static str) {
        match self {
            ResultStatus::Registered => ("1", "Registered"),
            ResultStatus::Interim => ("2", "Interim"),
            ResultStatus::Final => ("3", "Final"),
            ResultStatus::Amended => ("4", "Amended"),
            ResultStatus::Cancelled => ("5", "Cancelled/Aborted"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultValue {
    pub name: Option<CodedConcept>,
    pub value: Option<Measurement>,
    pub reference_range: Option<String>,
    pub abnormal: bool,
}

impl Validate for ResultValue {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "name", self.name.as_ref());
        vb.nested(path, "value", self.value.as_ref());
        vb.optional_text(path, "reference_range", self.reference_range.as_deref());
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathologyTestResult {
    pub test_name: Option<CodedConcept>,
    pub collected: Option<DateTime<FixedOffset>>,
    pub status: ResultStatus,
    pub values: Vec<ResultValue>,
    pub conclusion: Option<String>,
}

impl Validate for PathologyTestResult {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "test_name", self.test_name.as_ref());
        vb.required(path, "collected", self.collected.as_ref());
        vb.each(path, "values", &self.values);
        vb.optional_text(path, "conclusion", self.conclusion.as_deref());
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImagingExaminationResult {
    pub examination: Option<CodedConcept>,
    pub performed: Option<DateTime<FixedOffset>>,
    pub status: ResultStatus,
    pub anatomical_site: Option<CodedConcept>,
    pub findings: Option<String>,
}

impl Validate for ImagingExaminationResult {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "examination", self.examination.as_ref());
        vb.required(path, "performed", self.performed.as_ref());
        vb.optional(path, "anatomical_site", self.anatomical_site.as_ref());
        vb.optional_text(path, "findings", self.findings.as_deref());
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticInvestigations {
    pub pathology: Vec<PathologyTestResult>,
    pub imaging: Vec<ImagingExaminationResult>,
    pub other_tests: Vec<String>,
}

impl Validate for DiagnosticInvestigations {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if self.pathology.is_empty() && self.imaging.is_empty() && self.other_tests.is_empty() {
            vb.add(
                path,
                "pathology|imaging|other_tests",
                "requires at least one investigation",
            );
        }
        vb.each(path, "pathology", &self.pathology);
        vb.each(path, "imaging", &self.imaging);
        for (index, test) in self.other_tests.iter().enumerate() {
            vb.required_text(path, &format!("other_tests[{index}]"), Some(test));
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Immunisation {
    pub vaccine: Option<CodedConcept>,
    pub administered: Option<NaiveDate>,
    pub sequence_number: Option<u32>,
}

impl Validate for Immunisation {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "vaccine", self.vaccine.as_ref());
        vb.required(path, "administered", self.administered.as_ref());
        if self.sequence_number == Some(0) {
            vb.add(path, "sequence_number", "must be at least 1");
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Immunisations {
    pub items: Vec<Immunisation>,
    pub exclusion_statement: Option<ExclusionStatement>,
}

impl Immunisations {
    pub fn none(statement: ExclusionStatement) -> Self {
        Self {
            items: Vec::new(),
            exclusion_statement: Some(statement),
        }
    }
}

impl Validate for Immunisations {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        items_or_exclusion(vb, path, "items", !self.items.is_empty(), self.exclusion_statement);
        vb.each(path, "items", &self.items);
    }
}

/// Specialist's response to a referral.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseDetails {
    pub response_narrative: Option<String>,
    pub diagnoses: Vec<CodedConcept>,
    pub procedures: Vec<CodedConcept>,
}

impl Validate for ResponseDetails {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.required_text(path, "response_narrative", self.response_narrative.as_deref());
        vb.each(path, "diagnoses", &self.diagnoses);
        vb.each(path, "procedures", &self.procedures);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Recommendation {
    pub note: Option<String>,
    pub addressee: Option<Participation>,
    pub time_frame: Option<Period>,
}

impl Validate for Recommendation {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.required_text(path, "note", self.note.as_deref());
        vb.optional(path, "addressee", self.addressee.as_ref());
        vb.optional(path, "time_frame", self.time_frame.as_ref());
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Recommendations {
    pub items: Vec<Recommendation>,
    pub exclusion_statement: Option<ExclusionStatement>,
}

impl Recommendations {
    pub fn none(statement: ExclusionStatement) -> Self {
        Self {
            items: Vec::new(),
            exclusion_statement: Some(statement),
        }
    }
}

impl Validate for Recommendations {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        items_or_exclusion(vb, path, "items", !self.items.is_empty(), self.exclusion_statement);
        vb.each(path, "items", &self.items);
    }
}

/// The episode a discharge summary describes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Event {
    pub clinical_synopsis: Option<String>,
    pub problems: Vec<ProblemDiagnosis>,
    pub interventions: Vec<Procedure>,
}

impl Validate for Event {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.required_text(path, "clinical_synopsis", self.clinical_synopsis.as_deref());
        vb.each(path, "problems", &self.problems);
        vb.each(path, "interventions", &self.interventions);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alert {
    pub alert_type: Option<CodedConcept>,
    pub description: Option<String>,
}

impl Validate for Alert {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.optional(path, "alert_type", self.alert_type.as_ref());
        vb.required_text(path, "description", self.description.as_deref());
    }
}

/// Grouping section holding adverse reactions and alerts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HealthProfile {
    pub adverse_reactions: Option<AdverseReactions>,
    pub alerts: Vec<Alert>,
}

impl Validate for HealthProfile {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "adverse_reactions", self.adverse_reactions.as_ref());
        vb.each(path, "alerts", &self.alerts);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArrangedService {
    pub service: Option<CodedConcept>,
    pub booked_for: Option<DateTime<FixedOffset>>,
    pub provider: Option<Participation>,
}

impl Validate for ArrangedService {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "service", self.service.as_ref());
        vb.optional(path, "provider", self.provider.as_ref());
    }
}

/// Follow-up plan: arranged services and recommendations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Plan {
    pub arranged_services: Vec<ArrangedService>,
    pub recommendations: Option<Recommendations>,
}

impl Validate for Plan {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if self.arranged_services.is_empty() && self.recommendations.is_none() {
            vb.add(
                path,
                "arranged_services|recommendations",
                "a plan requires arranged services or recommendations",
            );
        }
        vb.each(path, "arranged_services", &self.arranged_services);
        vb.optional(path, "recommendations", self.recommendations.as_ref());
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosesInterventions {
    pub problems: Vec<ProblemDiagnosis>,
    pub procedures: Vec<Procedure>,
    pub other_items: Vec<MedicalHistoryItem>,
}

impl DiagnosesInterventions {
    pub fn has_items(&self) -> bool {
        !(self.problems.is_empty() && self.procedures.is_empty() && self.other_items.is_empty())
    }
}

impl Validate for DiagnosesInterventions {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if !self.has_items() {
            vb.add(
                path,
                "problems|procedures|other_items",
                "requires at least one diagnosis or intervention",
            );
        }
        vb.each(path, "problems", &self.problems);
        vb.each(path, "procedures", &self.procedures);
        vb.each(path, "other_items", &self.other_items);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathologyReport {
    pub results: Vec<PathologyTestResult>,
}

impl Validate for PathologyReport {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if vb.required_items(path, "results", &self.results) {
            vb.each(path, "results", &self.results);
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImagingReport {
    pub results: Vec<ImagingExaminationResult>,
}

impl Validate for ImagingReport {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if vb.required_items(path, "results", &self.results) {
            vb.each(path, "results", &self.results);
        }
    }
}

/// Reference to a rendered report or document packaged with this one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportAttachment {
    pub title: Option<String>,
    pub reference: Option<String>,
    pub media_type: Option<String>,
    pub status: ResultStatus,
}

impl Validate for ReportAttachment {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.required_text(path, "title", self.title.as_deref());
        vb.required_text(path, "reference", self.reference.as_deref());
        if vb.required_text(path, "media_type", self.media_type.as_deref()) {
            let media_type = self.media_type.as_deref().unwrap_or_default();
            if !media_type.contains('/') {
                vb.add(path, "media_type", format!("'{media_type}' is not a media type"));
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrescriptionItem {
    pub prescription_id: Option<Identifier>,
    pub medicine: Option<CodedConcept>,
    pub directions: Option<String>,
    pub quantity: Option<String>,
    pub repeats: Option<u32>,
    pub brand_substitute_allowed: bool,
    pub clinical_indication: Option<String>,
    pub comment: Option<String>,
    pub written: Option<DateTime<FixedOffset>>,
}

impl Validate for PrescriptionItem {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "prescription_id", self.prescription_id.as_ref());
        vb.nested(path, "medicine", self.medicine.as_ref());
        vb.required_text(path, "directions", self.directions.as_deref());
        vb.required_text(path, "quantity", self.quantity.as_deref());
        vb.required(path, "written", self.written.as_ref());
        vb.optional_text(path, "clinical_indication", self.clinical_indication.as_deref());
        vb.optional_text(path, "comment", self.comment.as_deref());
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrescriberInstructions {
    pub instruction: Option<String>,
    pub communication_medium: Option<CodedConcept>,
}

impl Validate for PrescriberInstructions {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.required_text(path, "instruction", self.instruction.as_deref());
        vb.optional(path, "communication_medium", self.communication_medium.as_ref());
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispenseItem {
    pub dispense_id: Option<Identifier>,
    pub medicine: Option<CodedConcept>,
    pub label_instruction: Option<String>,
    pub quantity: Option<String>,
    pub repeats_remaining: Option<u32>,
    pub brand_substituted: bool,
    pub dispensed: Option<DateTime<FixedOffset>>,
    pub comment: Option<String>,
}

impl Validate for DispenseItem {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "dispense_id", self.dispense_id.as_ref());
        vb.nested(path, "medicine", self.medicine.as_ref());
        vb.required_text(path, "quantity", self.quantity.as_deref());
        vb.required(path, "dispensed", self.dispensed.as_ref());
        vb.optional_text(path, "label_instruction", self.label_instruction.as_deref());
        vb.optional_text(path, "comment", self.comment.as_deref());
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrescriptionRequestItem {
    pub request_id: Option<Identifier>,
    pub medicine: Option<CodedConcept>,
    pub directions: Option<String>,
    pub quantity: Option<String>,
    pub request_comment: Option<String>,
    pub requested: Option<DateTime<FixedOffset>>,
}

impl Validate for PrescriptionRequestItem {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "request_id", self.request_id.as_ref());
        vb.nested(path, "medicine", self.medicine.as_ref());
        vb.required(path, "requested", self.requested.as_ref());
        vb.optional_text(path, "directions", self.directions.as_deref());
        vb.optional_text(path, "quantity", self.quantity.as_deref());
        vb.optional_text(path, "request_comment", self.request_comment.as_deref());
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdvanceCareDirective {
    pub directive_type: Option<CodedConcept>,
    pub description: Option<String>,
    pub recorded: Option<NaiveDate>,
}

impl Validate for AdvanceCareDirective {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "directive_type", self.directive_type.as_ref());
        vb.required_text(path, "description", self.description.as_deref());
    }
}
