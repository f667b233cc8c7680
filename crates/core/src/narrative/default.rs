use chrono::{DateTime, FixedOffset, NaiveDate};

use super::{NarrativeContext, NarrativeGenerator, SectionData};
use crate::components::SectionKind;
use crate::constants::{NARRATIVE_DATE_FORMAT, NARRATIVE_DATE_TIME_FORMAT};
use crate::model::{
    AdverseReactions, CodedConcept, EntitlementType, ExclusionStatement, Identifier,
    MedicalHistoryItem, Period, ProblemDiagnosis, Procedure, Recommendations, SubjectOfCare,
};
use cda::Narrative;

/// Renders each section as paragraphs, lists and tables.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultNarrativeGenerator;

impl NarrativeGenerator for DefaultNarrativeGenerator {
    fn narrative(&self, data: SectionData<'_>, _ctx: &NarrativeContext<'_>) -> Narrative {
        match data {
            SectionData::ReferralDetail(detail) => {
                let mut narrative = Narrative::new().list(
                    Some("Reason for referral"),
                    detail.reasons.iter().map(|r| r.label().to_string()).collect(),
                );
                if let Some(synopsis) = detail.clinical_synopsis.as_deref() {
                    narrative = narrative.paragraph(synopsis);
                }
                if let Some(validity) = detail.validity.as_ref() {
                    narrative = narrative.paragraph(format!("Valid {}", period(validity)));
                }
                narrative
            }
            SectionData::ServiceReferralDetail(detail) => {
                let rows = detail
                    .requested_services
                    .iter()
                    .map(|service| {
                        vec![
                            label(service.service.as_ref()),
                            service.requested_on.as_ref().map(date_time).unwrap_or_default(),
                            service.provider_note.clone().unwrap_or_default(),
                        ]
                    })
                    .collect();
                let narrative = Narrative::new().table(
                    Some("Requested services"),
                    &["Service", "Requested", "Note"],
                    rows,
                );
                match detail.clinical_synopsis.as_deref() {
                    Some(synopsis) => narrative.paragraph(synopsis),
                    None => narrative,
                }
            }
            SectionData::AdverseReactions(reactions) => adverse_reactions(reactions),
            SectionData::Medications(medications) => {
                if let Some(statement) = medications.exclusion_statement {
                    return exclusion(statement);
                }
                let rows = medications
                    .items
                    .iter()
                    .map(|item| {
                        vec![
                            label(item.medicine.as_ref()),
                            item.directions.clone().unwrap_or_default(),
                            item.clinical_indication.clone().unwrap_or_default(),
                            item.change
                                .as_ref()
                                .map(|change| match change.reason.as_deref() {
                                    Some(reason) => {
                                        format!("{} ({reason})", change.status.code().1)
                                    }
                                    None => change.status.code().1.to_string(),
                                })
                                .unwrap_or_default(),
                            item.comment.clone().unwrap_or_default(),
                        ]
                    })
                    .collect();
                Narrative::new().table(
                    None,
                    &["Medication", "Directions", "Clinical indication", "Change", "Comment"],
                    rows,
                )
            }
            SectionData::MedicalHistory(history) => match history.exclusion_statement {
                Some(statement) => exclusion(statement),
                None => history_tables(&history.problems, &history.procedures, &history.other_items),
            },
            SectionData::DiagnosticInvestigations(investigations) => {
                let mut narrative = Narrative::new();
                if !investigations.pathology.is_empty() {
                    narrative = narrative.table(
                        Some("Pathology"),
                        &["Test", "Collected", "Status", "Result"],
                        investigations
                            .pathology
                            .iter()
                            .map(|result| {
                                vec![
                                    label(result.test_name.as_ref()),
                                    result.collected.as_ref().map(date_time).unwrap_or_default(),
                                    result.status.code().1.to_string(),
                                    result_summary(result),
                                ]
                            })
                            .collect(),
                    );
                }
                if !investigations.imaging.is_empty() {
                    narrative = narrative.table(
                        Some("Imaging"),
                        &["Examination", "Performed", "Status", "Findings"],
                        investigations
                            .imaging
                            .iter()
                            .map(|result| {
                                vec![
                                    label(result.examination.as_ref()),
                                    result.performed.as_ref().map(date_time).unwrap_or_default(),
                                    result.status.code().1.to_string(),
                                    result.findings.clone().unwrap_or_default(),
                                ]
                            })
                            .collect(),
                    );
                }
                if !investigations.other_tests.is_empty() {
                    narrative =
                        narrative.list(Some("Other tests"), investigations.other_tests.clone());
                }
                narrative
            }
            SectionData::Immunisations(immunisations) => {
                if let Some(statement) = immunisations.exclusion_statement {
                    return exclusion(statement);
                }
                Narrative::new().table(
                    None,
                    &["Vaccine", "Date", "Dose"],
                    immunisations
                        .items
                        .iter()
                        .map(|item| {
                            vec![
                                label(item.vaccine.as_ref()),
                                item.administered.as_ref().map(date).unwrap_or_default(),
                                item.sequence_number.map(|n| n.to_string()).unwrap_or_default(),
                            ]
                        })
                        .collect(),
                )
            }
            SectionData::ResponseDetails(details) => {
                let mut narrative = Narrative::new()
                    .paragraph(details.response_narrative.clone().unwrap_or_default());
                if !details.diagnoses.is_empty() {
                    narrative = narrative.list(Some("Diagnoses"), labels(&details.diagnoses));
                }
                if !details.procedures.is_empty() {
                    narrative = narrative.list(Some("Procedures"), labels(&details.procedures));
                }
                narrative
            }
            SectionData::Recommendations(recommendations) => self::recommendations(recommendations),
            SectionData::Event(event) => {
                let narrative = Narrative::new()
                    .paragraph(event.clinical_synopsis.clone().unwrap_or_default());
                history_tables_into(narrative, &event.problems, &event.interventions, &[])
            }
            SectionData::HealthProfile(profile) => {
                let mut contents = Vec::new();
                if let Some(reactions) = profile.adverse_reactions.as_ref() {
                    contents.push(summary(
                        SectionKind::AdverseReactions,
                        reactions.reactions.len(),
                        reactions.exclusion_statement,
                    ));
                }
                if !profile.alerts.is_empty() {
                    contents.push(summary(SectionKind::Alerts, profile.alerts.len(), None));
                }
                Narrative::new().list(Some("Contents"), contents)
            }
            SectionData::Alerts(alerts) => Narrative::new().table(
                None,
                &["Alert", "Description"],
                alerts
                    .iter()
                    .map(|alert| {
                        vec![
                            label(alert.alert_type.as_ref()),
                            alert.description.clone().unwrap_or_default(),
                        ]
                    })
                    .collect(),
            ),
            SectionData::Plan(plan) => {
                let mut contents = Vec::new();
                if !plan.arranged_services.is_empty() {
                    contents.push(summary(
                        SectionKind::ArrangedServices,
                        plan.arranged_services.len(),
                        None,
                    ));
                }
                if let Some(recommendations) = plan.recommendations.as_ref() {
                    contents.push(summary(
                        SectionKind::Recommendations,
                        recommendations.items.len(),
                        recommendations.exclusion_statement,
                    ));
                }
                Narrative::new().list(Some("Contents"), contents)
            }
            SectionData::ArrangedServices(services) => Narrative::new().table(
                None,
                &["Service", "Booked for", "Provider"],
                services
                    .iter()
                    .map(|service| {
                        vec![
                            label(service.service.as_ref()),
                            service.booked_for.as_ref().map(date_time).unwrap_or_default(),
                            service
                                .provider
                                .as_ref()
                                .map(|provider| provider.display_name())
                                .unwrap_or_default(),
                        ]
                    })
                    .collect(),
            ),
            SectionData::DiagnosesInterventions(items) => {
                history_tables(&items.problems, &items.procedures, &items.other_items)
            }
            SectionData::Pathology(report) => Narrative::new().table(
                None,
                &["Test", "Collected", "Status", "Result", "Conclusion"],
                report
                    .results
                    .iter()
                    .map(|result| {
                        vec![
                            label(result.test_name.as_ref()),
                            result.collected.as_ref().map(date_time).unwrap_or_default(),
                            result.status.code().1.to_string(),
                            result_summary(result),
                            result.conclusion.clone().unwrap_or_default(),
                        ]
                    })
                    .collect(),
            ),
            SectionData::ImagingExaminationResults(report) => Narrative::new().table(
                None,
                &["Examination", "Site", "Performed", "Status", "Findings"],
                report
                    .results
                    .iter()
                    .map(|result| {
                        vec![
                            label(result.examination.as_ref()),
                            label(result.anatomical_site.as_ref()),
                            result.performed.as_ref().map(date_time).unwrap_or_default(),
                            result.status.code().1.to_string(),
                            result.findings.clone().unwrap_or_default(),
                        ]
                    })
                    .collect(),
            ),
            SectionData::RelatedDocument(attachment) => Narrative::new().table(
                None,
                &["Title", "Status", "Reference"],
                vec![vec![
                    attachment.title.clone().unwrap_or_default(),
                    attachment.status.code().1.to_string(),
                    attachment.reference.clone().unwrap_or_default(),
                ]],
            ),
            SectionData::PrescriptionItem(item) => Narrative::new().table(
                None,
                &["Medication", "Directions", "Quantity", "Repeats", "Brand substitution", "Written"],
                vec![vec![
                    label(item.medicine.as_ref()),
                    item.directions.clone().unwrap_or_default(),
                    item.quantity.clone().unwrap_or_default(),
                    item.repeats.unwrap_or(0).to_string(),
                    yes_no(item.brand_substitute_allowed),
                    item.written.as_ref().map(date_time).unwrap_or_default(),
                ]],
            ),
            SectionData::PrescriberInstructions(instructions) => Narrative::new()
                .paragraph(instructions.instruction.clone().unwrap_or_default()),
            SectionData::DispenseItem(item) => Narrative::new().table(
                None,
                &["Medication", "Label instruction", "Quantity", "Repeats remaining", "Dispensed"],
                vec![vec![
                    label(item.medicine.as_ref()),
                    item.label_instruction.clone().unwrap_or_default(),
                    item.quantity.clone().unwrap_or_default(),
                    item.repeats_remaining.unwrap_or(0).to_string(),
                    item.dispensed.as_ref().map(date_time).unwrap_or_default(),
                ]],
            ),
            SectionData::PrescriptionRequestItem(item) => Narrative::new().table(
                None,
                &["Medication", "Directions", "Quantity", "Comment", "Requested"],
                vec![vec![
                    label(item.medicine.as_ref()),
                    item.directions.clone().unwrap_or_default(),
                    item.quantity.clone().unwrap_or_default(),
                    item.request_comment.clone().unwrap_or_default(),
                    item.requested.as_ref().map(date_time).unwrap_or_default(),
                ]],
            ),
            SectionData::AdvanceCareDirective(directive) => {
                let mut narrative = Narrative::new()
                    .paragraph(format!(
                        "{}: {}",
                        label(directive.directive_type.as_ref()),
                        directive.description.clone().unwrap_or_default()
                    ));
                if let Some(recorded) = directive.recorded.as_ref() {
                    narrative = narrative.paragraph(format!("Recorded {}", date(recorded)));
                }
                narrative
            }
            SectionData::ExclusionStatement { statement, .. } => exclusion(statement),
            SectionData::AdministrativeObservations { subject, as_at } => {
                administrative_observations(subject, as_at)
            }
        }
    }
}

fn date(value: &NaiveDate) -> String {
    value.format(NARRATIVE_DATE_FORMAT).to_string()
}

fn date_time(value: &DateTime<FixedOffset>) -> String {
    value.format(NARRATIVE_DATE_TIME_FORMAT).to_string()
}

fn period(value: &Period) -> String {
    match (value.start.as_ref(), value.end.as_ref()) {
        (Some(start), Some(end)) => format!("{} to {}", date_time(start), date_time(end)),
        (Some(start), None) => format!("from {}", date_time(start)),
        (None, Some(end)) => format!("until {}", date_time(end)),
        (None, None) => String::new(),
    }
}

fn label(concept: Option<&CodedConcept>) -> String {
    concept.map(|c| c.label().to_string()).unwrap_or_default()
}

fn labels(concepts: &[CodedConcept]) -> Vec<String> {
    concepts.iter().map(|c| c.label().to_string()).collect()
}

fn yes_no(value: bool) -> String {
    (if value { "Yes" } else { "No" }).to_string()
}

fn identifier(id: &Identifier) -> String {
    match id.extension.as_deref() {
        Some(extension) => format!("{extension} ({})", id.root),
        None => id.root.clone(),
    }
}

fn exclusion(statement: ExclusionStatement) -> Narrative {
    Narrative::new().paragraph(statement.display())
}

/// One line per nested section, e.g. `Alerts: 2 recorded`.
fn summary(kind: SectionKind, count: usize, statement: Option<ExclusionStatement>) -> String {
    match statement {
        Some(statement) => format!("{}: {}", kind.title(), statement.display()),
        None => format!("{}: {count} recorded", kind.title()),
    }
}

fn result_summary(result: &crate::model::PathologyTestResult) -> String {
    result
        .values
        .iter()
        .map(|value| {
            let mut text = format!(
                "{}: {}",
                label(value.name.as_ref()),
                value.value.as_ref().map(|v| v.display()).unwrap_or_default()
            );
            if let Some(range) = value.reference_range.as_deref() {
                text.push_str(&format!(" [{range}]"));
            }
            if value.abnormal {
                text.push_str(" (abnormal)");
            }
            text
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn adverse_reactions(reactions: &AdverseReactions) -> Narrative {
    if let Some(statement) = reactions.exclusion_statement {
        return exclusion(statement);
    }
    Narrative::new().table(
        None,
        &["Substance", "Reaction type", "Manifestations"],
        reactions
            .reactions
            .iter()
            .map(|reaction| {
                vec![
                    label(reaction.substance.as_ref()),
                    label(reaction.reaction_type.as_ref()),
                    labels(&reaction.manifestations).join(", "),
                ]
            })
            .collect(),
    )
}

fn recommendations(recommendations: &Recommendations) -> Narrative {
    if let Some(statement) = recommendations.exclusion_statement {
        return exclusion(statement);
    }
    Narrative::new().table(
        None,
        &["Recommendation", "Addressee", "Time frame"],
        recommendations
            .items
            .iter()
            .map(|item| {
                vec![
                    item.note.clone().unwrap_or_default(),
                    item.addressee
                        .as_ref()
                        .map(|addressee| addressee.display_name())
                        .unwrap_or_default(),
                    item.time_frame.as_ref().map(period).unwrap_or_default(),
                ]
            })
            .collect(),
    )
}

fn history_tables(
    problems: &[ProblemDiagnosis],
    procedures: &[Procedure],
    other_items: &[MedicalHistoryItem],
) -> Narrative {
    history_tables_into(Narrative::new(), problems, procedures, other_items)
}

fn history_tables_into(
    mut narrative: Narrative,
    problems: &[ProblemDiagnosis],
    procedures: &[Procedure],
    other_items: &[MedicalHistoryItem],
) -> Narrative {
    if !problems.is_empty() {
        narrative = narrative.table(
            Some("Problems/Diagnoses"),
            &["Problem", "Onset", "Resolved", "Comment"],
            problems
                .iter()
                .map(|problem| {
                    vec![
                        label(problem.identification.as_ref()),
                        problem.onset.as_ref().map(date).unwrap_or_default(),
                        problem.resolved.as_ref().map(date).unwrap_or_default(),
                        problem.comment.clone().unwrap_or_default(),
                    ]
                })
                .collect(),
        );
    }
    if !procedures.is_empty() {
        narrative = narrative.table(
            Some("Procedures"),
            &["Procedure", "Date", "Comment"],
            procedures
                .iter()
                .map(|procedure| {
                    vec![
                        label(procedure.procedure.as_ref()),
                        procedure.performed.as_ref().map(date).unwrap_or_default(),
                        procedure.comment.clone().unwrap_or_default(),
                    ]
                })
                .collect(),
        );
    }
    if !other_items.is_empty() {
        narrative = narrative.table(
            Some("Other medical history"),
            &["Item", "Period", "Comment"],
            other_items
                .iter()
                .map(|item| {
                    vec![
                        item.description.clone().unwrap_or_default(),
                        item.period.as_ref().map(period).unwrap_or_default(),
                        item.comment.clone().unwrap_or_default(),
                    ]
                })
                .collect(),
        );
    }
    narrative
}

fn administrative_observations(
    subject: &SubjectOfCare,
    as_at: Option<DateTime<FixedOffset>>,
) -> Narrative {
    let mut narrative = Narrative::new().list(
        Some("Subject of care identifiers"),
        subject.identifiers.iter().map(identifier).collect(),
    );
    if !subject.entitlements.is_empty() {
        narrative = narrative.table(
            Some("Entitlements"),
            &["Type", "Number"],
            subject
                .entitlements
                .iter()
                .map(|entitlement| {
                    vec![
                        entitlement_label(entitlement.entitlement_type),
                        entitlement.id.as_ref().map(identifier).unwrap_or_default(),
                    ]
                })
                .collect(),
        );
    }
    if let Some(age) = as_at.and_then(|as_at| subject.age_at(as_at.date_naive())) {
        narrative = narrative.paragraph(format!("Age: {age} years"));
    }
    narrative
}

fn entitlement_label(kind: EntitlementType) -> String {
    kind.code().1.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::DocumentType;
    use crate::model::{
        AdverseReaction, Alert, ArrangedService, HealthProfile, MedicationItem, Medications, Plan,
    };
    use cda::NarrativeBlock;

    fn ctx() -> NarrativeContext<'static> {
        NarrativeContext {
            document_type: DocumentType::EReferral,
            subject_of_care_id: None,
        }
    }

    #[test]
    fn exclusion_statement_renders_its_display() {
        let reactions = AdverseReactions::none(ExclusionStatement::NoneKnown);
        let narrative =
            DefaultNarrativeGenerator.narrative(SectionData::AdverseReactions(&reactions), &ctx());
        assert_eq!(narrative.plain_text(), "None known");
    }

    #[test]
    fn medication_table_has_one_row_per_item() {
        let medications = Medications::of(vec![
            MedicationItem::new(CodedConcept::from_original_text("Atenolol 50mg"), "One daily"),
            MedicationItem::new(CodedConcept::from_original_text("Aspirin 100mg"), "One daily"),
        ]);
        let narrative =
            DefaultNarrativeGenerator.narrative(SectionData::Medications(&medications), &ctx());
        match &narrative.blocks[0] {
            NarrativeBlock::Table { rows, .. } => {
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[1][0], "Aspirin 100mg");
            }
            other => panic!("expected a table, got {other:?}"),
        }
    }

    #[test]
    fn health_profile_summarises_its_nested_sections() {
        let profile = HealthProfile {
            adverse_reactions: Some(AdverseReactions::of(vec![
                AdverseReaction::new(CodedConcept::from_original_text("Penicillin")),
                AdverseReaction::new(CodedConcept::from_original_text("Latex")),
            ])),
            alerts: vec![Alert {
                alert_type: None,
                description: Some("Falls risk".into()),
            }],
        };
        let narrative =
            DefaultNarrativeGenerator.narrative(SectionData::HealthProfile(&profile), &ctx());
        assert_eq!(
            narrative.plain_text(),
            "Contents\n- Adverse Reactions: 2 recorded\n- Alerts: 1 recorded"
        );

        let none_known = HealthProfile {
            adverse_reactions: Some(AdverseReactions::none(ExclusionStatement::NoneKnown)),
            alerts: vec![],
        };
        let narrative =
            DefaultNarrativeGenerator.narrative(SectionData::HealthProfile(&none_known), &ctx());
        assert_eq!(narrative.plain_text(), "Contents\n- Adverse Reactions: None known");
    }

    #[test]
    fn plan_lists_only_the_sections_it_carries() {
        let plan = Plan {
            arranged_services: vec![ArrangedService::default(), ArrangedService::default()],
            recommendations: None,
        };
        let narrative = DefaultNarrativeGenerator.narrative(SectionData::Plan(&plan), &ctx());
        assert_eq!(narrative.plain_text(), "Contents\n- Arranged Services: 2 recorded");
    }

    #[test]
    fn narrative_is_stable_across_calls() {
        let reactions = AdverseReactions::of(vec![AdverseReaction::new(
            CodedConcept::from_original_text("Penicillin"),
        )
        .with_manifestation(CodedConcept::from_original_text("Rash"))]);
        let first =
            DefaultNarrativeGenerator.narrative(SectionData::AdverseReactions(&reactions), &ctx());
        let second =
            DefaultNarrativeGenerator.narrative(SectionData::AdverseReactions(&reactions), &ctx());
        assert_eq!(first, second);
    }

    #[test]
    fn dates_use_explicit_offset() {
        let time = DateTime::parse_from_rfc3339("2026-03-05T10:30:00+10:00").expect("time");
        assert_eq!(date_time(&time), "05 Mar 2026 10:30 +10:00");
    }
}
