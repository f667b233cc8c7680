//! Constants used throughout the CDA core crate.
//!
//! Code system identifiers and the fixed codes the assembler itself emits (section codes, entry
//! codes, participation type codes). Codes describing clinical content are supplied by the caller
//! through the model.

/// A fixed code from a known code system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedCode {
    pub code: &'static str,
    pub display: &'static str,
}

const fn fixed(code: &'static str, display: &'static str) -> FixedCode {
    FixedCode { code, display }
}

/// NCTIS data component code system.
pub const NCTIS_CODE_SYSTEM: &str = "1.2.36.1.2001.1001.101";
pub const NCTIS_CODE_SYSTEM_NAME: &str = "NCTIS Data Components";

/// NCTIS global statement values.
pub const NCTIS_GLOBAL_STATEMENT_SYSTEM: &str = "1.2.36.1.2001.1001.101.104.16299";
pub const NCTIS_GLOBAL_STATEMENT_SYSTEM_NAME: &str = "NCTIS Global Statement Values";

/// NCTIS medication status values.
pub const NCTIS_MEDICATION_STATUS_SYSTEM: &str = "1.2.36.1.2001.1001.101.104.16595";

/// NCTIS result status values.
pub const NCTIS_RESULT_STATUS_SYSTEM: &str = "1.2.36.1.2001.1001.101.104.16501";

pub const LOINC_CODE_SYSTEM: &str = "2.16.840.1.113883.6.1";
pub const LOINC_CODE_SYSTEM_NAME: &str = "LOINC";

/// AS 5017-2006 sex values.
pub const SEX_CODE_SYSTEM: &str = "2.16.840.1.113883.13.68";
pub const SEX_CODE_SYSTEM_NAME: &str = "AS 5017-2006 Health Care Client Identifier Sex";

/// HL7 confidentiality codes.
pub const CONFIDENTIALITY_CODE_SYSTEM: &str = "2.16.840.1.113883.5.25";
pub const CONFIDENTIALITY_CODE_SYSTEM_NAME: &str = "HL7 Confidentiality";

/// NCTIS entitlement types.
pub const ENTITLEMENT_TYPE_SYSTEM: &str = "1.2.36.1.2001.1001.101.104.16047";

/// Document language.
pub const DEFAULT_LANGUAGE: &str = "en-AU";

/// Default branding asset file name searched for when no explicit location is configured.
pub const DEFAULT_LOGO_FILE_NAME: &str = "logo.png";

/// Date format used in generated narrative.
pub const NARRATIVE_DATE_FORMAT: &str = "%d %b %Y";

/// Date-time format used in generated narrative. The offset is printed so output does not
/// depend on the host time zone.
pub const NARRATIVE_DATE_TIME_FORMAT: &str = "%d %b %Y %H:%M %:z";

// Section codes.
pub const REFERRAL_DETAIL: FixedCode = fixed("101.16347", "Referral Detail");
pub const SERVICE_REFERRAL_DETAIL: FixedCode = fixed("101.16362", "Service Referral Detail");
pub const ADVERSE_REACTIONS: FixedCode = fixed("101.20113", "Adverse Reactions");
pub const MEDICATIONS: FixedCode = fixed("101.16022", "Medications");
pub const MEDICAL_HISTORY: FixedCode = fixed("101.16117", "Medical History");
pub const DIAGNOSTIC_INVESTIGATIONS: FixedCode = fixed("101.20117", "Diagnostic Investigations");
pub const IMMUNISATIONS: FixedCode = fixed("101.16638", "Immunisations");
pub const RESPONSE_DETAILS: FixedCode = fixed("101.16298", "Response Details");
pub const RECOMMENDATIONS: FixedCode = fixed("101.20020", "Recommendations");
pub const EVENT: FixedCode = fixed("101.16006", "Event");
pub const HEALTH_PROFILE: FixedCode = fixed("101.16011", "Health Profile");
pub const ALERTS: FixedCode = fixed("101.15520", "Alerts");
pub const PLAN: FixedCode = fixed("101.16020", "Plan");
pub const ARRANGED_SERVICES: FixedCode = fixed("101.16500", "Arranged Services");
pub const DIAGNOSES_INTERVENTIONS: FixedCode = fixed("101.15022", "Diagnoses/Interventions");
pub const PATHOLOGY: FixedCode = fixed("101.20018", "Pathology");
pub const IMAGING_EXAMINATION_RESULTS: FixedCode =
    fixed("102.16145.1", "Imaging Examination Results");
pub const RELATED_DOCUMENT: FixedCode = fixed("101.16971", "Related Document");
pub const PRESCRIPTION_ITEM: FixedCode = fixed("102.16211", "Prescription Item");
pub const PRESCRIBER_INSTRUCTIONS: FixedCode = fixed("102.16212", "Prescriber Instructions");
pub const DISPENSE_ITEM: FixedCode = fixed("102.16210", "Dispense Item");
pub const PRESCRIPTION_REQUEST_ITEM: FixedCode = fixed("102.16286", "Prescription Request Item");
pub const ADVANCE_CARE_DIRECTIVE: FixedCode = fixed("101.16973", "Advance Care Information");
pub const ADMINISTRATIVE_OBSERVATIONS: FixedCode = fixed("102.16080", "Administrative Observations");

// Entry codes.
pub const REFERRAL_REASON: FixedCode = fixed("42349-1", "Reason for referral");
pub const REFERRAL_VALIDITY: FixedCode = fixed("103.16622", "Referral Validity Duration");
pub const REQUESTED_SERVICE: FixedCode = fixed("102.20158", "Requested Service");
pub const ADVERSE_REACTION: FixedCode = fixed("102.15517", "Adverse Reaction");
pub const REACTION_EVENT: FixedCode = fixed("102.15517.1", "Reaction Event");
pub const MANIFESTATION: FixedCode = fixed("102.16041", "Manifestation");
pub const GLOBAL_STATEMENT: FixedCode = fixed("103.16302.1", "Global Statement");
pub const EXCLUSION_STATEMENT: FixedCode = fixed("102.16302", "Exclusion Statement");
pub const MEDICATION_INSTRUCTION: FixedCode = fixed("102.16211.1", "Medication Instruction");
pub const CLINICAL_INDICATION: FixedCode = fixed("103.10141", "Clinical Indication");
pub const COMMENT: FixedCode = fixed("103.16044", "Comment");
pub const CHANGE_STATUS: FixedCode = fixed("103.16593", "Change Status");
pub const CHANGE_REASON: FixedCode = fixed("103.16617", "Change Reason");
pub const PROBLEM_DIAGNOSIS: FixedCode = fixed("282291009", "Diagnosis interpretation");
pub const PROCEDURE: FixedCode = fixed("102.16058", "Procedure");
pub const MEDICAL_HISTORY_ITEM: FixedCode = fixed("102.16627", "Uncategorised Medical History Item");
pub const PATHOLOGY_TEST_RESULT: FixedCode = fixed("102.16144", "Pathology Test Result");
pub const IMAGING_EXAMINATION_RESULT: FixedCode = fixed("102.16145", "Imaging Examination Result");
pub const RESULT_VALUE: FixedCode = fixed("103.16605", "Result Value");
pub const RESULT_STATUS: FixedCode = fixed("308552006", "Report status");
pub const CONCLUSION: FixedCode = fixed("103.16559", "Pathology Test Conclusion");
pub const FINDINGS: FixedCode = fixed("103.16503", "Findings");
pub const IMMUNISATION: FixedCode = fixed("102.16638", "Vaccine Administration");
pub const SEQUENCE_NUMBER: FixedCode = fixed("30973-2", "Dose number");
pub const RESPONSE_NARRATIVE: FixedCode = fixed("103.16299.1", "Response Narrative");
pub const RECOMMENDATION: FixedCode = fixed("102.20016", "Recommendation");
pub const CLINICAL_SYNOPSIS: FixedCode = fixed("103.15582", "Clinical Synopsis");
pub const ALERT: FixedCode = fixed("102.16020.1", "Alert");
pub const ATTACHED_REPORT: FixedCode = fixed("102.11981", "Attached Report");
pub const PBS_QUANTITY: FixedCode = fixed("103.16109", "Quantity");
pub const REPEATS: FixedCode = fixed("103.16106", "Maximum Number of Repeats");
pub const BRAND_SUBSTITUTE: FixedCode = fixed("103.10107", "Brand Substitute Allowed");
pub const LABEL_INSTRUCTION: FixedCode = fixed("103.10111", "Label Instruction");
pub const REQUEST_COMMENT: FixedCode = fixed("103.16044.2", "Request Comment");
pub const ADVANCE_CARE_DIRECTIVE_ENTRY: FixedCode = fixed("102.16748", "Advance Care Directive");
pub const SUBJECT_IDENTIFIER: FixedCode = fixed("103.16549", "Subject of Care Identifier");
pub const AGE: FixedCode = fixed("103.20109", "Age");
pub const ENTITLEMENT: FixedCode = fixed("102.11838", "Entitlement");

// Participation type codes.
pub const PARTICIPATION_AUTHOR: &str = "AUT";
pub const PARTICIPATION_CUSTODIAN: &str = "CST";
pub const PARTICIPATION_LEGAL_AUTHENTICATOR: &str = "LA";
pub const PARTICIPATION_RECORD_TARGET: &str = "RCT";
pub const PARTICIPATION_PRIMARY_RECIPIENT: &str = "PRCP";
pub const PARTICIPATION_TRACKER: &str = "TRC";
pub const PARTICIPATION_REFERRED_TO: &str = "REFT";
pub const PARTICIPATION_REFERRER: &str = "REFB";
pub const PARTICIPATION_PERFORMER: &str = "PRF";
pub const PARTICIPATION_RESPONSIBLE: &str = "RESP";
pub const PARTICIPATION_LOCATION: &str = "LOC";
pub const PARTICIPATION_DISTRIBUTOR: &str = "DST";
pub const PARTICIPATION_PARTICIPANT: &str = "PART";
