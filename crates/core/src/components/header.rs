//! Header components.

use cda::{BrandingLogo, EncompassingEncounter, Header};

use super::mapping::{
    address, coded, entitlement, identifier, interval, participation, person_name, sex, telecom,
};
use crate::constants::{
    PARTICIPATION_AUTHOR, PARTICIPATION_CUSTODIAN, PARTICIPATION_DISTRIBUTOR,
    PARTICIPATION_LEGAL_AUTHENTICATOR, PARTICIPATION_LOCATION, PARTICIPATION_PARTICIPANT,
    PARTICIPATION_PERFORMER, PARTICIPATION_PRIMARY_RECIPIENT, PARTICIPATION_RECORD_TARGET,
    PARTICIPATION_REFERRED_TO, PARTICIPATION_REFERRER, PARTICIPATION_RESPONSIBLE,
    PARTICIPATION_TRACKER,
};
use crate::model::{
    Encounter, HeaderContext, Identifier, InformationRecipient, ParentDocument, Participation,
    SubjectOfCare,
};

/// Document-type specific roles placed among the header participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticipantRole {
    Referee,
    Referrer,
    UsualGp,
    ServiceProvider,
    DispensingOrganisation,
    PrescriberOrganisation,
    ResponsibleHealthProfessional,
}

impl ParticipantRole {
    pub fn type_code(self) -> &'static str {
        match self {
            ParticipantRole::Referee => PARTICIPATION_REFERRED_TO,
            ParticipantRole::Referrer => PARTICIPATION_REFERRER,
            ParticipantRole::UsualGp => PARTICIPATION_PARTICIPANT,
            ParticipantRole::ServiceProvider => PARTICIPATION_PERFORMER,
            ParticipantRole::DispensingOrganisation => PARTICIPATION_DISTRIBUTOR,
            ParticipantRole::PrescriberOrganisation => PARTICIPATION_PARTICIPANT,
            ParticipantRole::ResponsibleHealthProfessional => PARTICIPATION_RESPONSIBLE,
        }
    }
}

/// The header facts a document type supplies to the assembler.
#[derive(Clone, Debug)]
pub struct HeaderFacts<'a> {
    pub subject_of_care: Option<&'a SubjectOfCare>,
    pub authors: Vec<&'a Participation>,
    pub header: &'a HeaderContext,
    pub participants: Vec<(ParticipantRole, &'a Participation)>,
    pub encounter: Option<&'a Encounter>,
    pub orders: Vec<&'a Identifier>,
}

impl<'a> HeaderFacts<'a> {
    pub fn new(header: &'a HeaderContext) -> Self {
        Self {
            subject_of_care: None,
            authors: Vec::new(),
            header,
            participants: Vec::new(),
            encounter: None,
            orders: Vec::new(),
        }
    }

    pub fn subject(mut self, subject: Option<&'a SubjectOfCare>) -> Self {
        self.subject_of_care = subject;
        self
    }

    pub fn author(mut self, author: Option<&'a Participation>) -> Self {
        self.authors.extend(author);
        self
    }

    pub fn participant(mut self, role: ParticipantRole, value: Option<&'a Participation>) -> Self {
        self.participants.extend(value.map(|p| (role, p)));
        self
    }

    pub fn encounter(mut self, encounter: Option<&'a Encounter>) -> Self {
        self.encounter = encounter;
        self
    }

    pub fn order(mut self, order: Option<&'a Identifier>) -> Self {
        self.orders.extend(order);
        self
    }

    /// The subject's first identifier, handed to narrative generators.
    pub fn subject_of_care_id(&self) -> Option<&'a Identifier> {
        self.subject_of_care.and_then(|subject| subject.identifiers.first())
    }
}

pub(crate) fn record_target(subject: &SubjectOfCare) -> cda::Participation {
    cda::Participation {
        type_code: PARTICIPATION_RECORD_TARGET.to_string(),
        function: None,
        time: None,
        entity: cda::ParticipantEntity {
            ids: subject.identifiers.iter().map(identifier).collect(),
            addresses: subject.addresses.iter().map(address).collect(),
            telecoms: subject.electronic_communication.iter().map(telecom).collect(),
            entitlements: subject.entitlements.iter().filter_map(entitlement).collect(),
            actor: cda::Actor::Person {
                names: subject.names.iter().map(person_name).collect(),
                administrative_gender: subject.sex.map(sex),
                birth_time: subject.date_of_birth.as_ref().map(cda::data_types::ts_date),
                employer: None,
            },
        },
    }
}

fn recipient(recipient: &InformationRecipient) -> Option<cda::Participation> {
    let type_code = if recipient.primary {
        PARTICIPATION_PRIMARY_RECIPIENT
    } else {
        PARTICIPATION_TRACKER
    };
    recipient
        .recipient
        .as_ref()
        .map(|value| participation(type_code, value))
}

pub(crate) fn related_document(parent: &ParentDocument) -> Option<cda::RelatedDocument> {
    let parent_id = parent.document_id.as_ref()?;
    Some(cda::RelatedDocument {
        type_code: parent.relationship.code().to_string(),
        parent_id: identifier(parent_id),
        parent_set_id: parent.set_id.as_ref().map(identifier),
        parent_code: parent.code.as_ref().map(coded),
    })
}

pub(crate) fn encompassing_encounter(
    encounter: &Encounter,
    responsible: Option<&Participation>,
) -> EncompassingEncounter {
    EncompassingEncounter {
        id: encounter.id.as_ref().map(identifier),
        code: encounter.code.as_ref().map(coded),
        effective_time: encounter.period.as_ref().map(interval).unwrap_or_default(),
        discharge_disposition: encounter.discharge_disposition.as_ref().map(coded),
        location: encounter.facility.as_ref().map(|facility| {
            participation(
                PARTICIPATION_LOCATION,
                &Participation {
                    role: None,
                    participant: Some(crate::model::Participant::organisation(facility.clone())),
                    period: None,
                },
            )
        }),
        responsible_party: responsible.map(|p| participation(PARTICIPATION_RESPONSIBLE, p)),
    }
}

/// Builds the document header from the facts a document type supplies.
pub(crate) fn build_header(facts: &HeaderFacts<'_>, branding: Option<BrandingLogo>) -> Header {
    let subject = facts.subject_of_care.cloned().unwrap_or_default();
    let context = facts.header;

    // The responsible professional belongs to the encounter when there is one.
    let responsible = facts
        .participants
        .iter()
        .find(|(role, _)| *role == ParticipantRole::ResponsibleHealthProfessional)
        .map(|(_, p)| *p);
    let participants = facts
        .participants
        .iter()
        .filter(|(role, _)| {
            facts.encounter.is_none() || *role != ParticipantRole::ResponsibleHealthProfessional
        })
        .map(|(role, p)| participation(role.type_code(), p))
        .collect();

    Header {
        record_target: record_target(&subject),
        authors: facts
            .authors
            .iter()
            .map(|author| participation(PARTICIPATION_AUTHOR, author))
            .collect(),
        custodian: context
            .custodian
            .as_ref()
            .map(|custodian| participation(PARTICIPATION_CUSTODIAN, custodian)),
        legal_authenticator: context
            .legal_authenticator
            .as_ref()
            .map(|la| participation(PARTICIPATION_LEGAL_AUTHENTICATOR, la)),
        information_recipients: context
            .information_recipients
            .iter()
            .filter_map(recipient)
            .collect(),
        participants,
        component_of: facts
            .encounter
            .map(|encounter| encompassing_encounter(encounter, responsible)),
        related_documents: context
            .parent_documents
            .iter()
            .filter_map(related_document)
            .collect(),
        in_fulfillment_of: facts.orders.iter().map(|order| identifier(order)).collect(),
        branding,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CodedConcept, Organisation, Participant, Period, Person, PersonName};
    use chrono::DateTime;

    fn person(role: &str, given: &str, family: &str) -> Participation {
        Participation::new(
            CodedConcept::from_original_text(role),
            Participant::person(Person::named(PersonName::new(given, family))),
        )
    }

    fn context() -> HeaderContext {
        HeaderContext {
            custodian: Some(Participation::new(
                CodedConcept::from_original_text("Custodian"),
                Participant::organisation(Organisation::named("Good Health Clinic")),
            )),
            ..HeaderContext::default()
        }
    }

    #[test]
    fn participants_keep_role_type_codes() {
        let context = context();
        let referee = person("Referee", "Sam", "Jones");
        let facts = HeaderFacts::new(&context).participant(ParticipantRole::Referee, Some(&referee));
        let header = build_header(&facts, None);
        assert_eq!(header.participants.len(), 1);
        assert_eq!(header.participants[0].type_code, "REFT");
        assert_eq!(header.custodian.as_ref().map(|c| c.type_code.as_str()), Some("CST"));
    }

    #[test]
    fn responsible_professional_moves_into_encounter() {
        let context = context();
        let responsible = person("Consultant", "Ana", "Lee");
        let start = DateTime::parse_from_rfc3339("2026-03-01T08:00:00+10:00").expect("time");
        let end = DateTime::parse_from_rfc3339("2026-03-05T10:00:00+10:00").expect("time");
        let encounter = Encounter {
            facility: Some(Organisation::named("General Hospital")),
            period: Some(Period::between(start, end)),
            ..Encounter::default()
        };
        let facts = HeaderFacts::new(&context)
            .participant(
                ParticipantRole::ResponsibleHealthProfessional,
                Some(&responsible),
            )
            .encounter(Some(&encounter));
        let header = build_header(&facts, None);

        assert!(header.participants.is_empty());
        let component_of = header.component_of.expect("encounter");
        assert_eq!(
            component_of.responsible_party.map(|p| p.actor_name()),
            Some("Ana Lee".to_string())
        );
        assert_eq!(component_of.effective_time.low.as_deref(), Some("20260301080000+1000"));
    }

    #[test]
    fn absent_optional_facts_are_skipped() {
        let context = context();
        let header = build_header(&HeaderFacts::new(&context).author(None), None);
        assert!(header.authors.is_empty());
        assert!(header.component_of.is_none());
        assert!(header.in_fulfillment_of.is_empty());
    }
}
