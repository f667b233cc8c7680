//! Section encodings.
//!
//! Some sections have two structural shapes: the legacy one used by older document templates and
//! the current one. The domain object is the same for both; the shape is picked per document type
//! from an [`EncodingTable`] and dispatched through an [`EntryStrategy`].

use std::collections::BTreeMap;

use cda::{Entry, EntryKind, EntryValue};

use super::mapping::{coded, coded_value, fixed};
use super::sections::{observation, related, text_act, text_observation};
use super::SectionKind;
use crate::constants::{
    ADVERSE_REACTION, CHANGE_REASON, CHANGE_STATUS, CLINICAL_INDICATION, COMMENT,
    EXCLUSION_STATEMENT, GLOBAL_STATEMENT, MANIFESTATION, MEDICATION_INSTRUCTION,
    NCTIS_GLOBAL_STATEMENT_SYSTEM, NCTIS_GLOBAL_STATEMENT_SYSTEM_NAME,
    NCTIS_MEDICATION_STATUS_SYSTEM, REACTION_EVENT,
};
use crate::model::{AdverseReaction, ExclusionStatement, MedicationItem};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionEncoding {
    Legacy,
    #[default]
    Current,
}

impl SectionEncoding {
    pub(crate) fn strategy(self) -> &'static EntryStrategy {
        match self {
            SectionEncoding::Legacy => &LEGACY,
            SectionEncoding::Current => &CURRENT,
        }
    }
}

/// Per document type choice of encoding; sections not listed use [`SectionEncoding::Current`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodingTable {
    overrides: BTreeMap<SectionKind, SectionEncoding>,
}

impl EncodingTable {
    pub fn current() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: SectionKind, encoding: SectionEncoding) -> Self {
        self.overrides.insert(kind, encoding);
        self
    }

    pub fn encoding_for(&self, kind: SectionKind) -> SectionEncoding {
        self.overrides.get(&kind).copied().unwrap_or_default()
    }
}

/// Entry builders for the sections that have more than one encoding.
pub(crate) struct EntryStrategy {
    pub(crate) adverse_reaction: fn(&AdverseReaction) -> Entry,
    pub(crate) medication: fn(&MedicationItem) -> Entry,
    pub(crate) exclusion: fn(ExclusionStatement) -> Entry,
}

static CURRENT: EntryStrategy = EntryStrategy {
    adverse_reaction: current_adverse_reaction,
    medication: current_medication,
    exclusion: global_statement,
};

static LEGACY: EntryStrategy = EntryStrategy {
    adverse_reaction: legacy_adverse_reaction,
    medication: legacy_medication,
    exclusion: exclusion_act,
};

fn manifestations(reaction: &AdverseReaction) -> Vec<cda::EntryRelationship> {
    reaction
        .manifestations
        .iter()
        .map(|manifestation| {
            related(
                "MFST",
                observation(
                    fixed(MANIFESTATION),
                    EntryValue::Coded {
                        concept: coded(manifestation),
                    },
                ),
            )
        })
        .collect()
}

fn substance_value(reaction: &AdverseReaction) -> Vec<EntryValue> {
    reaction
        .substance
        .as_ref()
        .map(|substance| EntryValue::Coded {
            concept: coded(substance),
        })
        .into_iter()
        .collect()
}

/// One observation per reaction; the substance is its value.
fn current_adverse_reaction(reaction: &AdverseReaction) -> Entry {
    let code = reaction
        .reaction_type
        .as_ref()
        .map(coded)
        .unwrap_or_else(|| fixed(ADVERSE_REACTION));
    Entry {
        values: substance_value(reaction),
        relationships: manifestations(reaction),
        ..Entry::new(EntryKind::Observation, Some(code))
    }
}

/// An act wrapping the substance observation, with manifestations on the act.
fn legacy_adverse_reaction(reaction: &AdverseReaction) -> Entry {
    let code = reaction
        .reaction_type
        .as_ref()
        .map(coded)
        .unwrap_or_else(|| fixed(REACTION_EVENT));
    let substance = Entry {
        values: substance_value(reaction),
        ..Entry::new(EntryKind::Observation, Some(code))
    };

    let mut relationships = vec![related("SUBJ", substance)];
    relationships.extend(manifestations(reaction));
    Entry {
        relationships,
        ..Entry::new(EntryKind::Act, Some(fixed(ADVERSE_REACTION)))
    }
}

fn medication_details(item: &MedicationItem) -> Vec<cda::EntryRelationship> {
    let mut relationships = Vec::new();
    if let Some(indication) = item.clinical_indication.as_deref() {
        relationships.push(related(
            "RSON",
            text_observation(fixed(CLINICAL_INDICATION), indication),
        ));
    }
    if let Some(comment) = item.comment.as_deref() {
        relationships.push(related("COMP", text_act(fixed(COMMENT), comment)));
    }
    if let Some(change) = item.change.as_ref() {
        let mut status = observation(
            fixed(CHANGE_STATUS),
            EntryValue::Coded {
                concept: coded_value(
                    change.status.code(),
                    NCTIS_MEDICATION_STATUS_SYSTEM,
                    "NCTIS Change Status Values",
                ),
            },
        );
        if let Some(reason) = change.reason.as_deref() {
            status
                .relationships
                .push(related("RSON", text_observation(fixed(CHANGE_REASON), reason)));
        }
        relationships.push(related("COMP", status));
    }
    relationships
}

fn medicine_value(item: &MedicationItem) -> Vec<EntryValue> {
    item.medicine
        .as_ref()
        .map(|medicine| EntryValue::Coded {
            concept: coded(medicine),
        })
        .into_iter()
        .collect()
}

/// Substance administration carrying the directions as its text.
fn current_medication(item: &MedicationItem) -> Entry {
    Entry {
        text: item.directions.clone(),
        values: medicine_value(item),
        relationships: medication_details(item),
        ..Entry::new(
            EntryKind::SubstanceAdministration,
            Some(fixed(MEDICATION_INSTRUCTION)),
        )
    }
}

/// Substance administration with the directions as a nested observation.
fn legacy_medication(item: &MedicationItem) -> Entry {
    let mut relationships = Vec::new();
    if let Some(directions) = item.directions.as_deref() {
        relationships.push(related(
            "COMP",
            text_observation(fixed(MEDICATION_INSTRUCTION), directions),
        ));
    }
    relationships.extend(medication_details(item));
    Entry {
        values: medicine_value(item),
        relationships,
        ..Entry::new(EntryKind::SubstanceAdministration, None)
    }
}

fn statement_value(statement: ExclusionStatement) -> EntryValue {
    EntryValue::Coded {
        concept: coded_value(
            statement.code(),
            NCTIS_GLOBAL_STATEMENT_SYSTEM,
            NCTIS_GLOBAL_STATEMENT_SYSTEM_NAME,
        ),
    }
}

fn global_statement(statement: ExclusionStatement) -> Entry {
    observation(fixed(GLOBAL_STATEMENT), statement_value(statement))
}

fn exclusion_act(statement: ExclusionStatement) -> Entry {
    Entry {
        text: Some(statement.display().to_string()),
        values: vec![statement_value(statement)],
        ..Entry::new(EntryKind::Act, Some(fixed(EXCLUSION_STATEMENT)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CodedConcept;

    fn reaction() -> AdverseReaction {
        AdverseReaction::new(CodedConcept::from_original_text("Penicillin"))
            .with_manifestation(CodedConcept::from_original_text("Hives"))
    }

    #[test]
    fn table_defaults_to_current() {
        let table = EncodingTable::current()
            .with(SectionKind::AdverseReactions, SectionEncoding::Legacy);
        assert_eq!(
            table.encoding_for(SectionKind::AdverseReactions),
            SectionEncoding::Legacy
        );
        assert_eq!(
            table.encoding_for(SectionKind::Medications),
            SectionEncoding::Current
        );
    }

    #[test]
    fn current_reaction_is_an_observation_with_manifestations() {
        let entry = (SectionEncoding::Current.strategy().adverse_reaction)(&reaction());
        assert_eq!(entry.kind, EntryKind::Observation);
        assert_eq!(entry.values.len(), 1);
        assert_eq!(entry.relationships.len(), 1);
        assert_eq!(entry.relationships[0].type_code, "MFST");
    }

    #[test]
    fn legacy_reaction_wraps_substance_in_an_act() {
        let entry = (SectionEncoding::Legacy.strategy().adverse_reaction)(&reaction());
        assert_eq!(entry.kind, EntryKind::Act);
        assert!(entry.values.is_empty());
        let kinds: Vec<&str> = entry
            .relationships
            .iter()
            .map(|r| r.type_code.as_str())
            .collect();
        assert_eq!(kinds, vec!["SUBJ", "MFST"]);
    }

    #[test]
    fn exclusion_encodings_carry_the_same_statement() {
        let current = (SectionEncoding::Current.strategy().exclusion)(ExclusionStatement::NotAsked);
        let legacy = (SectionEncoding::Legacy.strategy().exclusion)(ExclusionStatement::NotAsked);
        assert_eq!(current.kind, EntryKind::Observation);
        assert_eq!(legacy.kind, EntryKind::Act);
        assert_eq!(current.values, legacy.values);
    }
}
