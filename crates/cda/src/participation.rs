//! Header and entry participations (wire model).

use serde::{Deserialize, Serialize};

use crate::data_types::{Address, Cd, Ii, Interval, PersonName, Telecom};

/// A role bound to an acting entity.
///
/// `type_code` is the HL7 participation type (`AUT`, `CST`, `LA`, `PRCP`, `REFT`, `RCT`, ...).
/// `function` carries the coded role the actor plays, e.g. a referee's occupation.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Participation {
    pub type_code: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<Cd>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<Interval>,

    pub entity: ParticipantEntity,
}

/// The entity playing a role, with its contact details.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ParticipantEntity {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<Ii>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Address>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub telecoms: Vec<Telecom>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entitlements: Vec<Entitlement>,

    pub actor: Actor,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Actor {
    Person {
        names: Vec<PersonName>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        administrative_gender: Option<Cd>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        birth_time: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        employer: Option<OrganizationRef>,
    },
    Organization {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        department: Option<String>,
    },
    Device {
        manufacturer_model_name: String,
        software_name: String,
    },
}

/// Organisation the acting person works for.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OrganizationRef {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<Ii>,
}

/// A participant's entitlement to a health service (Medicare card, pension card, ...).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Entitlement {
    pub id: Ii,
    pub code: Cd,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validity: Option<Interval>,
}

impl Participation {
    /// Display name of the acting entity: first person name or organisation name.
    pub fn actor_name(&self) -> String {
        match &self.entity.actor {
            Actor::Person { names, .. } => names
                .first()
                .map(|name| {
                    let mut parts: Vec<&str> = name.prefixes.iter().map(String::as_str).collect();
                    parts.extend(name.given.iter().map(String::as_str));
                    parts.push(&name.family);
                    parts.join(" ")
                })
                .unwrap_or_default(),
            Actor::Organization { name, .. } => name.clone(),
            Actor::Device { software_name, .. } => software_name.clone(),
        }
    }
}
