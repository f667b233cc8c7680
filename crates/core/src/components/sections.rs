//! Section components.
//!
//! One pure function per logical section: `(domain object, narrative) -> Section`. Sections with
//! more than one encoding also take the [`EntryStrategy`] selected for the document type.

use chrono::{DateTime, FixedOffset};

use cda::{Entry, EntryKind, EntryRelationship, EntryValue, Narrative, Section};

use super::encoding::EntryStrategy;
use super::mapping::{
    coded, coded_value, date_point, fixed, identifier, interval, participation, point_in_time,
};
use super::SectionKind;
use crate::constants::{
    AGE, ADVANCE_CARE_DIRECTIVE_ENTRY, ALERT, ATTACHED_REPORT, BRAND_SUBSTITUTE,
    CLINICAL_INDICATION, CLINICAL_SYNOPSIS, COMMENT, CONCLUSION, ENTITLEMENT,
    ENTITLEMENT_TYPE_SYSTEM, FINDINGS, IMAGING_EXAMINATION_RESULT, IMMUNISATION,
    LABEL_INSTRUCTION, MEDICAL_HISTORY_ITEM, NCTIS_RESULT_STATUS_SYSTEM, PARTICIPATION_PERFORMER,
    PARTICIPATION_PRIMARY_RECIPIENT, PATHOLOGY_TEST_RESULT, PBS_QUANTITY, PRESCRIPTION_ITEM,
    PRESCRIBER_INSTRUCTIONS, DISPENSE_ITEM, PRESCRIPTION_REQUEST_ITEM, PROBLEM_DIAGNOSIS,
    RECOMMENDATION, REFERRAL_REASON, REFERRAL_VALIDITY, REPEATS, REQUESTED_SERVICE,
    REQUEST_COMMENT, RESPONSE_NARRATIVE, RESULT_STATUS, RESULT_VALUE, SEQUENCE_NUMBER,
    SUBJECT_IDENTIFIER,
};
use crate::model::{
    AdvanceCareDirective, AdverseReactions, Alert, ArrangedService, DiagnosesInterventions,
    DiagnosticInvestigations, DispenseItem, Event, ExclusionStatement, ImagingExaminationResult,
    ImagingReport, Immunisations, Measurement, MedicalHistory, MedicalHistoryItem, Medications,
    PathologyReport, PathologyTestResult, PrescriberInstructions, PrescriptionItem,
    PrescriptionRequestItem, ProblemDiagnosis, Procedure, Recommendations, ReferralDetail,
    ReportAttachment, ResponseDetails, ResultStatus, ServiceReferralDetail, SubjectOfCare,
};

// Entry helpers.

pub(crate) fn observation(code: cda::Cd, value: EntryValue) -> Entry {
    Entry {
        values: vec![value],
        ..Entry::new(EntryKind::Observation, Some(code))
    }
}

pub(crate) fn text_observation(code: cda::Cd, text: &str) -> Entry {
    observation(
        code,
        EntryValue::Text {
            value: text.to_string(),
        },
    )
}

pub(crate) fn text_act(code: cda::Cd, text: &str) -> Entry {
    Entry {
        text: Some(text.to_string()),
        ..Entry::new(EntryKind::Act, Some(code))
    }
}

pub(crate) fn related(type_code: &str, entry: Entry) -> EntryRelationship {
    EntryRelationship {
        type_code: type_code.to_string(),
        entry,
    }
}

fn comment(text: Option<&str>) -> Option<EntryRelationship> {
    text.map(|text| related("COMP", text_act(fixed(COMMENT), text)))
}

fn section(kind: SectionKind, narrative: Option<Narrative>, entries: Vec<Entry>) -> Section {
    Section {
        code: fixed(kind.code()),
        title: kind.title().to_string(),
        text: narrative,
        entries,
        sections: Vec::new(),
    }
}

fn measurement(value: &Measurement) -> EntryValue {
    match value {
        Measurement::Quantity { value, unit } => EntryValue::Quantity {
            value: value.trim().to_string(),
            unit: unit.clone(),
        },
        Measurement::Coded(concept) => EntryValue::Coded {
            concept: coded(concept),
        },
        Measurement::Text(text) => EntryValue::Text {
            value: text.clone(),
        },
    }
}

fn result_status(status: ResultStatus) -> EntryRelationship {
    related(
        "COMP",
        observation(
            fixed(RESULT_STATUS),
            EntryValue::Coded {
                concept: coded_value(
                    status.code(),
                    NCTIS_RESULT_STATUS_SYSTEM,
                    "NCTIS Result Status Values",
                ),
            },
        ),
    )
}

fn problem(problem: &ProblemDiagnosis) -> Entry {
    let mut entry = Entry {
        values: problem
            .identification
            .as_ref()
            .map(|identification| EntryValue::Coded {
                concept: coded(identification),
            })
            .into_iter()
            .collect(),
        ..Entry::new(EntryKind::Observation, Some(fixed(PROBLEM_DIAGNOSIS)))
    };
    if problem.onset.is_some() || problem.resolved.is_some() {
        entry.effective_time = Some(cda::Interval {
            low: problem.onset.as_ref().map(cda::data_types::ts_date),
            high: problem.resolved.as_ref().map(cda::data_types::ts_date),
        });
    }
    entry.relationships.extend(comment(problem.comment.as_deref()));
    entry
}

fn procedure(procedure: &Procedure) -> Entry {
    let mut entry = Entry {
        effective_time: procedure.performed.as_ref().map(date_point),
        ..Entry::new(EntryKind::Procedure, procedure.procedure.as_ref().map(coded))
    };
    entry.relationships.extend(comment(procedure.comment.as_deref()));
    entry
}

fn history_item(item: &MedicalHistoryItem) -> Entry {
    let mut entry = Entry {
        text: item.description.clone(),
        effective_time: item.period.as_ref().map(interval),
        ..Entry::new(EntryKind::Act, Some(fixed(MEDICAL_HISTORY_ITEM)))
    };
    entry.relationships.extend(comment(item.comment.as_deref()));
    entry
}

fn history_entries(
    problems: &[ProblemDiagnosis],
    procedures: &[Procedure],
    other_items: &[MedicalHistoryItem],
) -> Vec<Entry> {
    problems
        .iter()
        .map(problem)
        .chain(procedures.iter().map(procedure))
        .chain(other_items.iter().map(history_item))
        .collect()
}

fn pathology_result(result: &PathologyTestResult) -> Entry {
    let mut relationships: Vec<EntryRelationship> = result
        .values
        .iter()
        .map(|value| {
            let mut entry = Entry {
                values: value.value.iter().map(measurement).collect(),
                ..Entry::new(EntryKind::Observation, value.name.as_ref().map(coded))
            };
            if let Some(range) = value.reference_range.as_deref() {
                entry.text = Some(range.to_string());
            }
            if value.abnormal {
                entry.values.push(EntryValue::Boolean { value: true });
            }
            related("COMP", Entry {
                relationships: vec![related("COMP", entry)],
                ..Entry::new(EntryKind::Organizer, Some(fixed(RESULT_VALUE)))
            })
        })
        .collect();
    relationships.push(result_status(result.status));
    if let Some(conclusion) = result.conclusion.as_deref() {
        relationships.push(related(
            "COMP",
            text_observation(fixed(CONCLUSION), conclusion),
        ));
    }

    Entry {
        effective_time: result.collected.as_ref().map(point_in_time),
        values: result
            .test_name
            .as_ref()
            .map(|name| EntryValue::Coded {
                concept: coded(name),
            })
            .into_iter()
            .collect(),
        relationships,
        ..Entry::new(EntryKind::Observation, Some(fixed(PATHOLOGY_TEST_RESULT)))
    }
}

fn imaging_result(result: &ImagingExaminationResult) -> Entry {
    let mut relationships = vec![result_status(result.status)];
    if let Some(site) = result.anatomical_site.as_ref() {
        relationships.push(related(
            "SUBJ",
            observation(
                coded(site),
                EntryValue::Coded {
                    concept: coded(site),
                },
            ),
        ));
    }
    if let Some(findings) = result.findings.as_deref() {
        relationships.push(related("COMP", text_observation(fixed(FINDINGS), findings)));
    }

    Entry {
        effective_time: result.performed.as_ref().map(point_in_time),
        values: result
            .examination
            .as_ref()
            .map(|examination| EntryValue::Coded {
                concept: coded(examination),
            })
            .into_iter()
            .collect(),
        relationships,
        ..Entry::new(EntryKind::Observation, Some(fixed(IMAGING_EXAMINATION_RESULT)))
    }
}

fn quantity_supply(quantity: Option<&str>) -> Option<EntryRelationship> {
    quantity.map(|quantity| related("COMP", text_observation(fixed(PBS_QUANTITY), quantity)))
}

fn integer_observation(code: crate::constants::FixedCode, value: u32) -> EntryRelationship {
    related(
        "COMP",
        observation(
            fixed(code),
            EntryValue::Integer {
                value: i64::from(value),
            },
        ),
    )
}

fn boolean_observation(code: crate::constants::FixedCode, value: bool) -> EntryRelationship {
    related("COMP", observation(fixed(code), EntryValue::Boolean { value }))
}

// Section components.

pub(crate) fn referral_detail(detail: &ReferralDetail, narrative: Option<Narrative>) -> Section {
    let mut entries: Vec<Entry> = detail
        .reasons
        .iter()
        .map(|reason| Entry {
            values: vec![EntryValue::Coded {
                concept: coded(reason),
            }],
            ..Entry::new(EntryKind::Act, Some(fixed(REFERRAL_REASON)))
        })
        .collect();
    if let Some(synopsis) = detail.clinical_synopsis.as_deref() {
        entries.push(text_act(fixed(CLINICAL_SYNOPSIS), synopsis));
    }
    if let Some(validity) = detail.validity.as_ref() {
        entries.push(Entry {
            effective_time: Some(interval(validity)),
            ..Entry::new(EntryKind::Observation, Some(fixed(REFERRAL_VALIDITY)))
        });
    }
    section(SectionKind::ReferralDetail, narrative, entries)
}

pub(crate) fn service_referral_detail(
    detail: &ServiceReferralDetail,
    narrative: Option<Narrative>,
) -> Section {
    let mut entries: Vec<Entry> = detail
        .requested_services
        .iter()
        .map(|service| Entry {
            text: service.provider_note.clone(),
            effective_time: service.requested_on.as_ref().map(point_in_time),
            values: service
                .service
                .as_ref()
                .map(|s| EntryValue::Coded { concept: coded(s) })
                .into_iter()
                .collect(),
            ..Entry::new(EntryKind::Act, Some(fixed(REQUESTED_SERVICE)))
        })
        .collect();
    if let Some(synopsis) = detail.clinical_synopsis.as_deref() {
        entries.push(text_act(fixed(CLINICAL_SYNOPSIS), synopsis));
    }
    section(SectionKind::ServiceReferralDetail, narrative, entries)
}

pub(crate) fn adverse_reactions(
    reactions: &AdverseReactions,
    strategy: &EntryStrategy,
    narrative: Option<Narrative>,
) -> Section {
    let entries = match reactions.exclusion_statement {
        Some(statement) => vec![(strategy.exclusion)(statement)],
        None => reactions
            .reactions
            .iter()
            .map(strategy.adverse_reaction)
            .collect(),
    };
    section(SectionKind::AdverseReactions, narrative, entries)
}

pub(crate) fn medications(
    medications: &Medications,
    strategy: &EntryStrategy,
    narrative: Option<Narrative>,
) -> Section {
    let entries = match medications.exclusion_statement {
        Some(statement) => vec![(strategy.exclusion)(statement)],
        None => medications.items.iter().map(strategy.medication).collect(),
    };
    section(SectionKind::Medications, narrative, entries)
}

pub(crate) fn medical_history(
    history: &MedicalHistory,
    strategy: &EntryStrategy,
    narrative: Option<Narrative>,
) -> Section {
    let entries = match history.exclusion_statement {
        Some(statement) => vec![(strategy.exclusion)(statement)],
        None => history_entries(&history.problems, &history.procedures, &history.other_items),
    };
    section(SectionKind::MedicalHistory, narrative, entries)
}

pub(crate) fn diagnostic_investigations(
    investigations: &DiagnosticInvestigations,
    narrative: Option<Narrative>,
) -> Section {
    let entries = investigations
        .pathology
        .iter()
        .map(pathology_result)
        .chain(investigations.imaging.iter().map(imaging_result))
        .chain(investigations.other_tests.iter().map(|test| Entry {
            text: Some(test.clone()),
            ..Entry::new(EntryKind::Observation, None)
        }))
        .collect();
    section(SectionKind::DiagnosticInvestigations, narrative, entries)
}

pub(crate) fn immunisations(
    immunisations: &Immunisations,
    strategy: &EntryStrategy,
    narrative: Option<Narrative>,
) -> Section {
    let entries = match immunisations.exclusion_statement {
        Some(statement) => vec![(strategy.exclusion)(statement)],
        None => immunisations
            .items
            .iter()
            .map(|item| Entry {
                effective_time: item.administered.as_ref().map(date_point),
                values: item
                    .vaccine
                    .as_ref()
                    .map(|vaccine| EntryValue::Coded {
                        concept: coded(vaccine),
                    })
                    .into_iter()
                    .collect(),
                relationships: item
                    .sequence_number
                    .map(|n| integer_observation(SEQUENCE_NUMBER, n))
                    .into_iter()
                    .collect(),
                ..Entry::new(EntryKind::SubstanceAdministration, Some(fixed(IMMUNISATION)))
            })
            .collect(),
    };
    section(SectionKind::Immunisations, narrative, entries)
}

pub(crate) fn response_details(details: &ResponseDetails, narrative: Option<Narrative>) -> Section {
    let mut entries = Vec::new();
    if let Some(text) = details.response_narrative.as_deref() {
        entries.push(text_act(fixed(RESPONSE_NARRATIVE), text));
    }
    entries.extend(details.diagnoses.iter().map(|diagnosis| {
        observation(
            fixed(PROBLEM_DIAGNOSIS),
            EntryValue::Coded {
                concept: coded(diagnosis),
            },
        )
    }));
    entries.extend(
        details
            .procedures
            .iter()
            .map(|p| Entry::new(EntryKind::Procedure, Some(coded(p)))),
    );
    section(SectionKind::ResponseDetails, narrative, entries)
}

pub(crate) fn recommendations(
    recommendations: &Recommendations,
    strategy: &EntryStrategy,
    narrative: Option<Narrative>,
) -> Section {
    let entries = match recommendations.exclusion_statement {
        Some(statement) => vec![(strategy.exclusion)(statement)],
        None => recommendations
            .items
            .iter()
            .map(|item| Entry {
                text: item.note.clone(),
                effective_time: item.time_frame.as_ref().map(interval),
                participants: item
                    .addressee
                    .iter()
                    .map(|addressee| participation(PARTICIPATION_PRIMARY_RECIPIENT, addressee))
                    .collect(),
                ..Entry::new(EntryKind::Act, Some(fixed(RECOMMENDATION)))
            })
            .collect(),
    };
    section(SectionKind::Recommendations, narrative, entries)
}

pub(crate) fn event(event: &Event, narrative: Option<Narrative>) -> Section {
    let mut entries = Vec::new();
    if let Some(synopsis) = event.clinical_synopsis.as_deref() {
        entries.push(text_act(fixed(CLINICAL_SYNOPSIS), synopsis));
    }
    entries.extend(history_entries(&event.problems, &event.interventions, &[]));
    section(SectionKind::Event, narrative, entries)
}

/// Grouping section; its content lives in `subsections`.
pub(crate) fn health_profile(subsections: Vec<Section>, narrative: Option<Narrative>) -> Section {
    Section {
        sections: subsections,
        ..section(SectionKind::HealthProfile, narrative, Vec::new())
    }
}

pub(crate) fn alerts(alerts: &[Alert], narrative: Option<Narrative>) -> Section {
    let entries = alerts
        .iter()
        .map(|alert| Entry {
            text: alert.description.clone(),
            values: alert
                .alert_type
                .as_ref()
                .map(|alert_type| EntryValue::Coded {
                    concept: coded(alert_type),
                })
                .into_iter()
                .collect(),
            ..Entry::new(EntryKind::Observation, Some(fixed(ALERT)))
        })
        .collect();
    section(SectionKind::Alerts, narrative, entries)
}

/// Grouping section; its content lives in `subsections`.
pub(crate) fn plan(subsections: Vec<Section>, narrative: Option<Narrative>) -> Section {
    Section {
        sections: subsections,
        ..section(SectionKind::Plan, narrative, Vec::new())
    }
}

pub(crate) fn arranged_services(
    services: &[ArrangedService],
    narrative: Option<Narrative>,
) -> Section {
    let entries = services
        .iter()
        .map(|service| Entry {
            effective_time: service.booked_for.as_ref().map(point_in_time),
            participants: service
                .provider
                .iter()
                .map(|provider| participation(PARTICIPATION_PERFORMER, provider))
                .collect(),
            ..Entry::new(EntryKind::Encounter, service.service.as_ref().map(coded))
        })
        .collect();
    section(SectionKind::ArrangedServices, narrative, entries)
}

pub(crate) fn diagnoses_interventions(
    items: &DiagnosesInterventions,
    narrative: Option<Narrative>,
) -> Section {
    let entries = history_entries(&items.problems, &items.procedures, &items.other_items);
    section(SectionKind::DiagnosesInterventions, narrative, entries)
}

pub(crate) fn pathology(report: &PathologyReport, narrative: Option<Narrative>) -> Section {
    let entries = report.results.iter().map(pathology_result).collect();
    section(SectionKind::Pathology, narrative, entries)
}

pub(crate) fn imaging_examination_results(
    report: &ImagingReport,
    narrative: Option<Narrative>,
) -> Section {
    let entries = report.results.iter().map(imaging_result).collect();
    section(SectionKind::ImagingExaminationResults, narrative, entries)
}

pub(crate) fn related_document(
    attachment: &ReportAttachment,
    narrative: Option<Narrative>,
) -> Section {
    let mut values = Vec::new();
    if let Some(reference) = attachment.reference.as_deref() {
        values.push(EntryValue::Text {
            value: reference.to_string(),
        });
    }
    if let Some(media_type) = attachment.media_type.as_deref() {
        values.push(EntryValue::Text {
            value: media_type.to_string(),
        });
    }
    let entry = Entry {
        text: attachment.title.clone(),
        values,
        relationships: vec![result_status(attachment.status)],
        ..Entry::new(EntryKind::ObservationMedia, Some(fixed(ATTACHED_REPORT)))
    };
    section(SectionKind::RelatedDocument, narrative, vec![entry])
}

pub(crate) fn prescription_item(item: &PrescriptionItem, narrative: Option<Narrative>) -> Section {
    let mut relationships = Vec::new();
    relationships.extend(quantity_supply(item.quantity.as_deref()));
    relationships.push(integer_observation(REPEATS, item.repeats.unwrap_or(0)));
    relationships.push(boolean_observation(
        BRAND_SUBSTITUTE,
        item.brand_substitute_allowed,
    ));
    if let Some(indication) = item.clinical_indication.as_deref() {
        relationships.push(related(
            "RSON",
            text_observation(fixed(CLINICAL_INDICATION), indication),
        ));
    }
    relationships.extend(comment(item.comment.as_deref()));

    let entry = Entry {
        id: item.prescription_id.as_ref().map(identifier),
        text: item.directions.clone(),
        effective_time: item.written.as_ref().map(point_in_time),
        values: item
            .medicine
            .as_ref()
            .map(|medicine| EntryValue::Coded {
                concept: coded(medicine),
            })
            .into_iter()
            .collect(),
        relationships,
        ..Entry::new(
            EntryKind::SubstanceAdministration,
            Some(fixed(PRESCRIPTION_ITEM)),
        )
    };
    section(SectionKind::PrescriptionItem, narrative, vec![entry])
}

pub(crate) fn prescriber_instructions(
    instructions: &PrescriberInstructions,
    narrative: Option<Narrative>,
) -> Section {
    let entry = Entry {
        text: instructions.instruction.clone(),
        values: instructions
            .communication_medium
            .as_ref()
            .map(|medium| EntryValue::Coded {
                concept: coded(medium),
            })
            .into_iter()
            .collect(),
        ..Entry::new(EntryKind::Act, Some(fixed(PRESCRIBER_INSTRUCTIONS)))
    };
    section(SectionKind::PrescriberInstructions, narrative, vec![entry])
}

pub(crate) fn dispense_item(item: &DispenseItem, narrative: Option<Narrative>) -> Section {
    let mut relationships = Vec::new();
    if let Some(label) = item.label_instruction.as_deref() {
        relationships.push(related(
            "COMP",
            text_act(fixed(LABEL_INSTRUCTION), label),
        ));
    }
    relationships.extend(quantity_supply(item.quantity.as_deref()));
    relationships.push(integer_observation(
        REPEATS,
        item.repeats_remaining.unwrap_or(0),
    ));
    relationships.push(boolean_observation(BRAND_SUBSTITUTE, item.brand_substituted));
    relationships.extend(comment(item.comment.as_deref()));

    let entry = Entry {
        id: item.dispense_id.as_ref().map(identifier),
        effective_time: item.dispensed.as_ref().map(point_in_time),
        values: item
            .medicine
            .as_ref()
            .map(|medicine| EntryValue::Coded {
                concept: coded(medicine),
            })
            .into_iter()
            .collect(),
        relationships,
        ..Entry::new(EntryKind::Supply, Some(fixed(DISPENSE_ITEM)))
    };
    section(SectionKind::DispenseItem, narrative, vec![entry])
}

pub(crate) fn prescription_request_item(
    item: &PrescriptionRequestItem,
    narrative: Option<Narrative>,
) -> Section {
    let mut relationships = Vec::new();
    relationships.extend(quantity_supply(item.quantity.as_deref()));
    if let Some(request_comment) = item.request_comment.as_deref() {
        relationships.push(related(
            "COMP",
            text_act(fixed(REQUEST_COMMENT), request_comment),
        ));
    }

    let entry = Entry {
        id: item.request_id.as_ref().map(identifier),
        text: item.directions.clone(),
        effective_time: item.requested.as_ref().map(point_in_time),
        values: item
            .medicine
            .as_ref()
            .map(|medicine| EntryValue::Coded {
                concept: coded(medicine),
            })
            .into_iter()
            .collect(),
        relationships,
        ..Entry::new(
            EntryKind::SubstanceAdministration,
            Some(fixed(PRESCRIPTION_REQUEST_ITEM)),
        )
    };
    section(SectionKind::PrescriptionRequestItem, narrative, vec![entry])
}

pub(crate) fn advance_care_directive(
    directive: &AdvanceCareDirective,
    narrative: Option<Narrative>,
) -> Section {
    let entry = Entry {
        text: directive.description.clone(),
        effective_time: directive.recorded.as_ref().map(date_point),
        values: directive
            .directive_type
            .as_ref()
            .map(|directive_type| EntryValue::Coded {
                concept: coded(directive_type),
            })
            .into_iter()
            .collect(),
        ..Entry::new(EntryKind::Act, Some(fixed(ADVANCE_CARE_DIRECTIVE_ENTRY)))
    };
    section(SectionKind::AdvanceCareDirective, narrative, vec![entry])
}

/// Placeholder for a required section the caller left empty.
pub(crate) fn exclusion_placeholder(
    kind: SectionKind,
    statement: ExclusionStatement,
    strategy: &EntryStrategy,
    narrative: Option<Narrative>,
) -> Section {
    section(kind, narrative, vec![(strategy.exclusion)(statement)])
}

pub(crate) fn administrative_observations(
    subject: &SubjectOfCare,
    as_at: Option<&DateTime<FixedOffset>>,
    narrative: Option<Narrative>,
) -> Section {
    let mut entries: Vec<Entry> = subject
        .identifiers
        .iter()
        .map(|id| {
            observation(
                fixed(SUBJECT_IDENTIFIER),
                EntryValue::Identifier { id: identifier(id) },
            )
        })
        .collect();

    entries.extend(subject.entitlements.iter().map(|entitlement| {
        let mut values = vec![EntryValue::Coded {
            concept: coded_value(
                entitlement.entitlement_type.code(),
                ENTITLEMENT_TYPE_SYSTEM,
                "NCTIS Entitlement Type Values",
            ),
        }];
        values.extend(
            entitlement
                .id
                .as_ref()
                .map(|id| EntryValue::Identifier { id: identifier(id) }),
        );
        Entry {
            values,
            effective_time: entitlement.validity.as_ref().map(interval),
            ..Entry::new(EntryKind::Observation, Some(fixed(ENTITLEMENT)))
        }
    }));

    if let Some(as_at) = as_at {
        if let Some(age) = subject.age_at(as_at.date_naive()) {
            entries.push(Entry {
                effective_time: Some(point_in_time(as_at)),
                ..observation(
                    fixed(AGE),
                    EntryValue::Quantity {
                        value: age.to_string(),
                        unit: "a".to_string(),
                    },
                )
            });
        }
    }

    section(SectionKind::AdministrativeObservations, narrative, entries)
}
