//! Component Builder.
//!
//! Maps typed domain objects onto the generic structural shape of the `cda` crate: header
//! participations in [`header`], body sections in [`sections`]. [`SectionBuilder`] ties a
//! section's data to its builder function, its encoding and its narrative.

pub mod encoding;
pub mod header;
pub(crate) mod mapping;
pub(crate) mod sections;

pub use encoding::{EncodingTable, SectionEncoding};
pub use header::{HeaderFacts, ParticipantRole};

use std::collections::BTreeSet;

use cda::{Narrative, Section};

use crate::constants::{self, FixedCode};
use crate::narrative::{NarrativeContext, NarrativeGenerator, SectionData};

/// Logical body sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKind {
    ReferralDetail,
    ServiceReferralDetail,
    AdverseReactions,
    Medications,
    MedicalHistory,
    DiagnosticInvestigations,
    Immunisations,
    ResponseDetails,
    Recommendations,
    Event,
    HealthProfile,
    Alerts,
    Plan,
    ArrangedServices,
    DiagnosesInterventions,
    Pathology,
    ImagingExaminationResults,
    RelatedDocument,
    PrescriptionItem,
    PrescriberInstructions,
    DispenseItem,
    PrescriptionRequestItem,
    AdvanceCareDirective,
    AdministrativeObservations,
}

impl SectionKind {
    /// Section code.
    pub fn code(self) -> FixedCode {
        match self {
            SectionKind::ReferralDetail => constants::REFERRAL_DETAIL,
            SectionKind::ServiceReferralDetail => constants::SERVICE_REFERRAL_DETAIL,
            SectionKind::AdverseReactions => constants::ADVERSE_REACTIONS,
            SectionKind::Medications => constants::MEDICATIONS,
            SectionKind::MedicalHistory => constants::MEDICAL_HISTORY,
            SectionKind::DiagnosticInvestigations => constants::DIAGNOSTIC_INVESTIGATIONS,
            SectionKind::Immunisations => constants::IMMUNISATIONS,
            SectionKind::ResponseDetails => constants::RESPONSE_DETAILS,
            SectionKind::Recommendations => constants::RECOMMENDATIONS,
            SectionKind::Event => constants::EVENT,
            SectionKind::HealthProfile => constants::HEALTH_PROFILE,
            SectionKind::Alerts => constants::ALERTS,
            SectionKind::Plan => constants::PLAN,
            SectionKind::ArrangedServices => constants::ARRANGED_SERVICES,
            SectionKind::DiagnosesInterventions => constants::DIAGNOSES_INTERVENTIONS,
            SectionKind::Pathology => constants::PATHOLOGY,
            SectionKind::ImagingExaminationResults => constants::IMAGING_EXAMINATION_RESULTS,
            SectionKind::RelatedDocument => constants::RELATED_DOCUMENT,
            SectionKind::PrescriptionItem => constants::PRESCRIPTION_ITEM,
            SectionKind::PrescriberInstructions => constants::PRESCRIBER_INSTRUCTIONS,
            SectionKind::DispenseItem => constants::DISPENSE_ITEM,
            SectionKind::PrescriptionRequestItem => constants::PRESCRIPTION_REQUEST_ITEM,
            SectionKind::AdvanceCareDirective => constants::ADVANCE_CARE_DIRECTIVE,
            SectionKind::AdministrativeObservations => constants::ADMINISTRATIVE_OBSERVATIONS,
        }
    }

    pub fn title(self) -> &'static str {
        self.code().display
    }
}

/// Builds body sections for one generation call.
pub struct SectionBuilder<'a> {
    narrative: &'a dyn NarrativeGenerator,
    context: NarrativeContext<'a>,
    suppressed: &'a BTreeSet<SectionKind>,
    encodings: &'a EncodingTable,
}

impl<'a> SectionBuilder<'a> {
    pub fn new(
        narrative: &'a dyn NarrativeGenerator,
        context: NarrativeContext<'a>,
        suppressed: &'a BTreeSet<SectionKind>,
        encodings: &'a EncodingTable,
    ) -> Self {
        Self {
            narrative,
            context,
            suppressed,
            encodings,
        }
    }

    /// Narrative for `data`, or `None` when suppressed for its section kind.
    fn narrative_for(&self, data: SectionData<'_>) -> Option<Narrative> {
        if self.suppressed.contains(&data.kind()) {
            return None;
        }
        let narrative = self.narrative.narrative(data, &self.context);
        (!narrative.is_empty()).then_some(narrative)
    }

    fn strategy(&self, kind: SectionKind) -> &'static encoding::EntryStrategy {
        self.encodings.encoding_for(kind).strategy()
    }

    /// Builds the section for `data`, including nested sections.
    pub fn build(&self, data: SectionData<'_>) -> Section {
        let narrative = self.narrative_for(data);
        let kind = data.kind();

        match data {
            SectionData::ReferralDetail(detail) => sections::referral_detail(detail, narrative),
            SectionData::ServiceReferralDetail(detail) => {
                sections::service_referral_detail(detail, narrative)
            }
            SectionData::AdverseReactions(reactions) => {
                sections::adverse_reactions(reactions, self.strategy(kind), narrative)
            }
            SectionData::Medications(medications) => {
                sections::medications(medications, self.strategy(kind), narrative)
            }
            SectionData::MedicalHistory(history) => {
                sections::medical_history(history, self.strategy(kind), narrative)
            }
            SectionData::DiagnosticInvestigations(investigations) => {
                sections::diagnostic_investigations(investigations, narrative)
            }
            SectionData::Immunisations(immunisations) => {
                sections::immunisations(immunisations, self.strategy(kind), narrative)
            }
            SectionData::ResponseDetails(details) => sections::response_details(details, narrative),
            SectionData::Recommendations(recommendations) => {
                sections::recommendations(recommendations, self.strategy(kind), narrative)
            }
            SectionData::Event(event) => sections::event(event, narrative),
            SectionData::HealthProfile(profile) => {
                let mut subsections = Vec::new();
                if let Some(reactions) = profile.adverse_reactions.as_ref() {
                    subsections.push(self.build(SectionData::AdverseReactions(reactions)));
                }
                if !profile.alerts.is_empty() {
                    subsections.push(self.build(SectionData::Alerts(&profile.alerts)));
                }
                sections::health_profile(subsections, narrative)
            }
            SectionData::Alerts(alerts) => sections::alerts(alerts, narrative),
            SectionData::Plan(plan) => {
                let mut subsections = Vec::new();
                if !plan.arranged_services.is_empty() {
                    subsections
                        .push(self.build(SectionData::ArrangedServices(&plan.arranged_services)));
                }
                if let Some(recommendations) = plan.recommendations.as_ref() {
                    subsections.push(self.build(SectionData::Recommendations(recommendations)));
                }
                sections::plan(subsections, narrative)
            }
            SectionData::ArrangedServices(services) => {
                sections::arranged_services(services, narrative)
            }
            SectionData::DiagnosesInterventions(items) => {
                sections::diagnoses_interventions(items, narrative)
            }
            SectionData::Pathology(report) => sections::pathology(report, narrative),
            SectionData::ImagingExaminationResults(report) => {
                sections::imaging_examination_results(report, narrative)
            }
            SectionData::RelatedDocument(attachment) => {
                sections::related_document(attachment, narrative)
            }
            SectionData::PrescriptionItem(item) => sections::prescription_item(item, narrative),
            SectionData::PrescriberInstructions(instructions) => {
                sections::prescriber_instructions(instructions, narrative)
            }
            SectionData::DispenseItem(item) => sections::dispense_item(item, narrative),
            SectionData::PrescriptionRequestItem(item) => {
                sections::prescription_request_item(item, narrative)
            }
            SectionData::AdvanceCareDirective(directive) => {
                sections::advance_care_directive(directive, narrative)
            }
            SectionData::ExclusionStatement { kind, statement } => {
                sections::exclusion_placeholder(kind, statement, self.strategy(kind), narrative)
            }
            SectionData::AdministrativeObservations { subject, as_at } => {
                sections::administrative_observations(subject, as_at.as_ref(), narrative)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::DocumentType;
    use crate::model::{
        AdverseReaction, AdverseReactions, Alert, CodedConcept, ExclusionStatement, HealthProfile,
    };
    use crate::narrative::DefaultNarrativeGenerator;

    fn builder<'a>(
        suppressed: &'a BTreeSet<SectionKind>,
        encodings: &'a EncodingTable,
    ) -> SectionBuilder<'a> {
        SectionBuilder::new(
            &DefaultNarrativeGenerator,
            NarrativeContext {
                document_type: DocumentType::DischargeSummary,
                subject_of_care_id: None,
            },
            suppressed,
            encodings,
        )
    }

    fn profile() -> HealthProfile {
        HealthProfile {
            adverse_reactions: Some(AdverseReactions::of(vec![AdverseReaction::new(
                CodedConcept::from_original_text("Penicillin"),
            )])),
            alerts: vec![Alert {
                alert_type: None,
                description: Some("Falls risk".into()),
            }],
        }
    }

    #[test]
    fn suppression_drops_narrative_but_keeps_entries() {
        let encodings = EncodingTable::current();
        let reactions = AdverseReactions::none(ExclusionStatement::NoneKnown);

        let none = BTreeSet::new();
        let with_text = builder(&none, &encodings).build(SectionData::AdverseReactions(&reactions));

        let suppressed = BTreeSet::from([SectionKind::AdverseReactions]);
        let without_text =
            builder(&suppressed, &encodings).build(SectionData::AdverseReactions(&reactions));

        assert!(with_text.text.is_some());
        assert!(without_text.text.is_none());
        assert_eq!(with_text.entries, without_text.entries);
    }

    #[test]
    fn health_profile_builds_nested_sections_with_their_encoding() {
        let encodings =
            EncodingTable::current().with(SectionKind::AdverseReactions, SectionEncoding::Legacy);
        let none = BTreeSet::new();
        let profile = profile();
        let section = builder(&none, &encodings).build(SectionData::HealthProfile(&profile));

        let titles: Vec<&str> = section.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Adverse Reactions", "Alerts"]);
        assert_eq!(section.sections[0].entries[0].kind, cda::EntryKind::Act);
    }

    #[test]
    fn suppression_applies_to_nested_sections() {
        let encodings = EncodingTable::current();
        let suppressed = BTreeSet::from([SectionKind::Alerts]);
        let profile = profile();
        let section = builder(&suppressed, &encodings).build(SectionData::HealthProfile(&profile));
        assert!(section.text.is_some());
        assert!(section.sections[0].text.is_some());
        assert!(section.sections[1].text.is_none());
    }
}
