//! Model to wire mappings for the building blocks every component uses.

use cda::data_types::{ts, ts_date};
use cda::{Cd, Ii, Interval};

use crate::constants::{
    ENTITLEMENT_TYPE_SYSTEM, NCTIS_CODE_SYSTEM, NCTIS_CODE_SYSTEM_NAME, SEX_CODE_SYSTEM,
    SEX_CODE_SYSTEM_NAME, FixedCode,
};
use crate::model::{
    Actor, Address, CodedConcept, ElectronicCommunication, Entitlement, Identifier, NameUsage,
    Participation, Period, PersonName, Sex,
};

pub(crate) fn coded(concept: &CodedConcept) -> Cd {
    Cd {
        code: concept.code.clone(),
        code_system: concept.code_system.clone(),
        code_system_name: concept.code_system_name.clone(),
        code_system_version: concept.code_system_version.clone(),
        display_name: concept.display_name.clone(),
        original_text: concept.original_text.clone(),
        translations: concept.translations.iter().map(coded).collect(),
    }
}

/// A fixed NCTIS data component code.
pub(crate) fn fixed(code: FixedCode) -> Cd {
    Cd::coded(code.code, NCTIS_CODE_SYSTEM, NCTIS_CODE_SYSTEM_NAME, code.display)
}

/// Code from a named system for a `(code, display)` pair.
pub(crate) fn coded_value(code: (&str, &str), system: &str, system_name: &str) -> Cd {
    Cd::coded(code.0, system, system_name, code.1)
}

pub(crate) fn identifier(id: &Identifier) -> Ii {
    Ii {
        root: id.root.clone(),
        extension: id.extension.clone(),
        assigning_authority_name: id.assigning_authority_name.clone(),
    }
}

pub(crate) fn interval(period: &Period) -> Interval {
    Interval {
        low: period.start.as_ref().map(ts),
        high: period.end.as_ref().map(ts),
    }
}

pub(crate) fn point_in_time(time: &chrono::DateTime<chrono::FixedOffset>) -> Interval {
    Interval {
        low: Some(ts(time)),
        high: None,
    }
}

pub(crate) fn date_point(date: &chrono::NaiveDate) -> Interval {
    Interval {
        low: Some(ts_date(date)),
        high: None,
    }
}

pub(crate) fn address(address: &Address) -> cda::Address {
    cda::Address {
        use_code: Some(address.usage.code().to_string()),
        street_lines: address.street_lines.clone(),
        city: address.suburb.clone(),
        state: address.state.clone(),
        postal_code: address.postcode.clone(),
        country: address.country.clone(),
    }
}

pub(crate) fn telecom(communication: &ElectronicCommunication) -> cda::Telecom {
    cda::Telecom {
        value: communication.uri(),
        use_code: communication.usage.map(|usage| usage.code().to_string()),
    }
}

pub(crate) fn person_name(name: &PersonName) -> cda::PersonName {
    cda::PersonName {
        use_code: name.usage.map(|usage| {
            match usage {
                NameUsage::Registered => "L",
                NameUsage::Preferred => "P",
                NameUsage::Newborn => "NB",
            }
            .to_string()
        }),
        prefixes: name.titles.clone(),
        given: name.given_names.clone(),
        family: name.family_name.clone().unwrap_or_default(),
        suffixes: name.suffixes.clone(),
    }
}

pub(crate) fn sex(sex: Sex) -> Cd {
    coded_value(sex.code(), SEX_CODE_SYSTEM, SEX_CODE_SYSTEM_NAME)
}

pub(crate) fn entitlement(entitlement: &Entitlement) -> Option<cda::Entitlement> {
    let id = entitlement.id.as_ref()?;
    Some(cda::Entitlement {
        id: identifier(id),
        code: coded_value(
            entitlement.entitlement_type.code(),
            ENTITLEMENT_TYPE_SYSTEM,
            "NCTIS Entitlement Type Values",
        ),
        validity: entitlement.validity.as_ref().map(interval),
    })
}

fn actor(actor: Option<&Actor>) -> (Vec<Ii>, cda::Actor) {
    match actor {
        Some(Actor::Person(person)) => (
            person.identifiers.iter().map(identifier).collect(),
            cda::Actor::Person {
                names: person.names.iter().map(person_name).collect(),
                administrative_gender: person.sex.map(sex),
                birth_time: person.date_of_birth.as_ref().map(ts_date),
                employer: person.employment.as_ref().map(|employment| cda::OrganizationRef {
                    name: employment.organisation_name.clone().unwrap_or_default(),
                    ids: employment.identifiers.iter().map(identifier).collect(),
                }),
            },
        ),
        Some(Actor::Organisation(organisation)) => (
            organisation.identifiers.iter().map(identifier).collect(),
            cda::Actor::Organization {
                name: organisation.name.clone().unwrap_or_default(),
                department: organisation.department.clone(),
            },
        ),
        Some(Actor::Device(device)) => (
            device.identifiers.iter().map(identifier).collect(),
            cda::Actor::Device {
                manufacturer_model_name: device.manufacturer_model_name.clone().unwrap_or_default(),
                software_name: device.software_name.clone().unwrap_or_default(),
            },
        ),
        // Unreachable for a validated model.
        None => (
            Vec::new(),
            cda::Actor::Organization {
                name: String::new(),
                department: None,
            },
        ),
    }
}

/// Maps a participation under the given HL7 type code.
pub(crate) fn participation(type_code: &str, participation: &Participation) -> cda::Participation {
    let participant = participation.participant.as_ref();
    let (ids, actor) = actor(participation.actor());

    cda::Participation {
        type_code: type_code.to_string(),
        function: participation.role.as_ref().map(coded),
        time: participation.period.as_ref().map(interval),
        entity: cda::ParticipantEntity {
            ids,
            addresses: participant
                .map(|p| p.addresses.iter().map(address).collect())
                .unwrap_or_default(),
            telecoms: participant
                .map(|p| p.electronic_communication.iter().map(telecom).collect())
                .unwrap_or_default(),
            entitlements: participant
                .map(|p| p.entitlements.iter().filter_map(entitlement).collect())
                .unwrap_or_default(),
            actor,
        },
    }
}
