//! Entities shared by every document type: coded concepts, identifiers, people, organisations
//! and participations.

use cda_types::NonEmptyText;
use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::validation::{child_path, Validate, ValidationBuilder};

/// A controlled clinical term.
///
/// Either the `code`/`code_system`/`display_name` triple or `original_text` must be present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodedConcept {
    pub code: Option<String>,
    pub code_system: Option<String>,
    pub code_system_name: Option<String>,
    pub code_system_version: Option<String>,
    pub display_name: Option<String>,
    pub original_text: Option<String>,
    pub translations: Vec<CodedConcept>,
}

impl CodedConcept {
    pub fn new(code: &str, code_system: &str, display_name: &str) -> Self {
        Self {
            code: Some(code.to_string()),
            code_system: Some(code_system.to_string()),
            display_name: Some(display_name.to_string()),
            ..Self::default()
        }
    }

    /// Text-only concept for terms with no code.
    pub fn from_original_text(text: &str) -> Self {
        Self {
            original_text: Some(text.to_string()),
            ..Self::default()
        }
    }

    pub fn with_code_system_name(mut self, name: &str) -> Self {
        self.code_system_name = Some(name.to_string());
        self
    }

    pub fn with_translation(mut self, translation: CodedConcept) -> Self {
        self.translations.push(translation);
        self
    }

    /// Display name, falling back to original text.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.original_text.as_deref())
            .or(self.code.as_deref())
            .unwrap_or_default()
    }
}

fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| NonEmptyText::new(v).is_ok())
}

impl Validate for CodedConcept {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        let coded = [
            self.code.as_deref(),
            self.code_system.as_deref(),
            self.display_name.as_deref(),
        ]
        .into_iter()
        .filter(|v| is_filled(*v))
        .count();
        let has_text = is_filled(self.original_text.as_deref());

        match (coded, has_text) {
            (3, _) | (0, true) => {}
            (0, false) => vb.add(
                path,
                "code|original_text",
                "requires code, code_system and display_name, or original_text",
            ),
            (_, _) => vb.add(
                path,
                "code|code_system|display_name",
                "partially coded concept: code, code_system and display_name must be supplied together",
            ),
        }

        if let Some(system) = self.code_system.as_deref().filter(|s| is_filled(Some(s))) {
            vb.identifier_root(path, "code_system", system);
        }

        vb.each(path, "translations", &self.translations);
    }
}

/// Instance identifier: namespace root plus optional local extension.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Identifier {
    pub root: String,
    pub extension: Option<String>,
    pub assigning_authority_name: Option<String>,
}

impl Identifier {
    pub fn new(root: &str, extension: Option<&str>) -> Self {
        Self {
            root: root.to_string(),
            extension: extension.map(str::to_string),
            assigning_authority_name: None,
        }
    }

    /// A fresh UUID-rooted identifier.
    pub fn random() -> Self {
        Self::new(&uuid::Uuid::new_v4().hyphenated().to_string(), None)
    }

    pub fn with_authority(mut self, name: &str) -> Self {
        self.assigning_authority_name = Some(name.to_string());
        self
    }
}

impl Validate for Identifier {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.identifier_root(path, "root", &self.root);
        vb.optional_text(path, "extension", self.extension.as_deref());
    }
}

/// Time interval. At least one bound; `start` must not follow `end`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Period {
    pub start: Option<DateTime<FixedOffset>>,
    pub end: Option<DateTime<FixedOffset>>,
}

impl Period {
    pub fn between(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn starting(start: DateTime<FixedOffset>) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }
}

impl Validate for Period {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        match (self.start, self.end) {
            (None, None) => vb.add(path, "start|end", "a period requires a start or an end"),
            (Some(start), Some(end)) if start > end => {
                vb.add(path, "end", "must not be before start")
            }
            _ => {}
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AddressUse {
    #[default]
    Home,
    Work,
    Postal,
    Temporary,
}

impl AddressUse {
    pub fn code(self) -> &'static str {
        match self {
            AddressUse::Home => "H",
            AddressUse::Work => "WP",
            AddressUse::Postal => "PST",
            AddressUse::Temporary => "TMP",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Address {
    pub usage: AddressUse,
    pub street_lines: Vec<String>,
    pub suburb: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
}

impl Validate for Address {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        let has_lines = self.street_lines.iter().any(|line| is_filled(Some(line)));
        if !has_lines && !is_filled(self.suburb.as_deref()) {
            vb.add(path, "street_lines|suburb", "an address requires street lines or a suburb");
        }
        if let Some(postcode) = self.postcode.as_deref() {
            if postcode.len() != 4 || !postcode.bytes().all(|b| b.is_ascii_digit()) {
                vb.add(path, "postcode", "must be four digits");
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TelecomMedium {
    Telephone,
    Mobile,
    Fax,
    Email,
    Url,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TelecomUse {
    Business,
    Personal,
    Emergency,
}

impl TelecomUse {
    pub fn code(self) -> &'static str {
        match self {
            TelecomUse::Business => "WP",
            TelecomUse::Personal => "H",
            TelecomUse::Emergency => "EC",
        }
    }
}

/// Electronic communication detail (phone, email, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElectronicCommunication {
    pub medium: TelecomMedium,
    pub usage: Option<TelecomUse>,
    pub address: String,
}

impl ElectronicCommunication {
    pub fn new(medium: TelecomMedium, address: &str) -> Self {
        Self {
            medium,
            usage: None,
            address: address.to_string(),
        }
    }

    /// URI form, e.g. `tel:0299999999`.
    pub fn uri(&self) -> String {
        let scheme = match self.medium {
            TelecomMedium::Telephone | TelecomMedium::Mobile => "tel:",
            TelecomMedium::Fax => "fax:",
            TelecomMedium::Email => "mailto:",
            TelecomMedium::Url => "",
        };
        format!("{scheme}{}", self.address.trim())
    }
}

impl Validate for ElectronicCommunication {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if vb.required_text(path, "address", Some(&self.address))
            && self.medium == TelecomMedium::Email
            && !self.address.contains('@')
        {
            vb.add(path, "address", "email address must contain '@'");
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameUsage {
    Registered,
    Preferred,
    Newborn,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersonName {
    pub usage: Option<NameUsage>,
    pub titles: Vec<String>,
    pub given_names: Vec<String>,
    pub family_name: Option<String>,
    pub suffixes: Vec<String>,
}

impl PersonName {
    pub fn new(given: &str, family: &str) -> Self {
        Self {
            given_names: vec![given.to_string()],
            family_name: Some(family.to_string()),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.titles.push(title.to_string());
        self
    }

    /// "Dr Jane Smith"
    pub fn full_name(&self) -> String {
        let mut parts: Vec<&str> = self.titles.iter().map(String::as_str).collect();
        parts.extend(self.given_names.iter().map(String::as_str));
        parts.extend(self.family_name.as_deref());
        parts.extend(self.suffixes.iter().map(String::as_str));
        parts.join(" ")
    }
}

impl Validate for PersonName {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.required_text(path, "family_name", self.family_name.as_deref());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
    Intersex,
    NotStated,
}

impl Sex {
    pub fn code(self) -> (&'static str, &'static str) {
        match self {
            Sex::Male => ("M", "Male"),
            Sex::Female => ("F", "Female"),
            Sex::Intersex => ("I", "Intersex or Indeterminate"),
            Sex::NotStated => ("N", "Not Stated/Inadequately Described"),
        }
    }
}

/// Organisation a person is acting on behalf of.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Employment {
    pub organisation_name: Option<String>,
    pub identifiers: Vec<Identifier>,
    pub occupation: Option<CodedConcept>,
}

impl Validate for Employment {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.required_text(path, "organisation_name", self.organisation_name.as_deref());
        vb.each(path, "identifiers", &self.identifiers);
        vb.optional(path, "occupation", self.occupation.as_ref());
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Person {
    pub names: Vec<PersonName>,
    pub identifiers: Vec<Identifier>,
    pub sex: Option<Sex>,
    pub date_of_birth: Option<NaiveDate>,
    pub employment: Option<Employment>,
}

impl Person {
    pub fn named(name: PersonName) -> Self {
        Self {
            names: vec![name],
            ..Self::default()
        }
    }

    pub fn display_name(&self) -> String {
        self.names.first().map(PersonName::full_name).unwrap_or_default()
    }
}

impl Validate for Person {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if vb.required_items(path, "names", &self.names) {
            vb.each(path, "names", &self.names);
        }
        vb.each(path, "identifiers", &self.identifiers);
        vb.optional(path, "employment", self.employment.as_ref());
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Organisation {
    pub name: Option<String>,
    pub department: Option<String>,
    pub identifiers: Vec<Identifier>,
}

impl Organisation {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }
}

impl Validate for Organisation {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.required_text(path, "name", self.name.as_deref());
        vb.each(path, "identifiers", &self.identifiers);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Device {
    pub manufacturer_model_name: Option<String>,
    pub software_name: Option<String>,
    pub identifiers: Vec<Identifier>,
}

impl Validate for Device {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.required_text(path, "software_name", self.software_name.as_deref());
        vb.each(path, "identifiers", &self.identifiers);
    }
}

/// Who or what acts in a participation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Actor {
    Person(Person),
    Organisation(Organisation),
    Device(Device),
}

impl Actor {
    pub fn display_name(&self) -> String {
        match self {
            Actor::Person(person) => person.display_name(),
            Actor::Organisation(org) => org.name.clone().unwrap_or_default(),
            Actor::Device(device) => device.software_name.clone().unwrap_or_default(),
        }
    }

    pub fn is_person(&self) -> bool {
        matches!(self, Actor::Person(_))
    }

    pub fn is_organisation(&self) -> bool {
        matches!(self, Actor::Organisation(_))
    }
}

impl Validate for Actor {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        match self {
            Actor::Person(person) => person.validate(&child_path(path, "person"), vb),
            Actor::Organisation(org) => org.validate(&child_path(path, "organisation"), vb),
            Actor::Device(device) => device.validate(&child_path(path, "device"), vb),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntitlementType {
    MedicareBenefits,
    PensionerConcession,
    HealthCareCard,
    DvaGoldCard,
    DvaWhiteCard,
    MedicareProviderNumber,
    MedicarePrescriberNumber,
}

impl EntitlementType {
    pub fn code(self) -> (&'static str, &'static str) {
        match self {
            EntitlementType::MedicareBenefits => ("1", "Medicare Benefits"),
            EntitlementType::PensionerConcession => ("2", "Pensioner Concession"),
            EntitlementType::HealthCareCard => ("3", "Commonwealth Seniors Health Concession"),
            EntitlementType::DvaGoldCard => ("5", "Repatriation Health Gold Benefits"),
            EntitlementType::DvaWhiteCard => ("6", "Repatriation Health White Benefits"),
            EntitlementType::MedicareProviderNumber => ("8", "Medicare Provider Number"),
            EntitlementType::MedicarePrescriberNumber => ("9", "Medicare Prescriber Number"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entitlement {
    pub entitlement_type: EntitlementType,
    pub id: Option<Identifier>,
    pub validity: Option<Period>,
}

impl Validate for Entitlement {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "id", self.id.as_ref());
        vb.optional(path, "validity", self.validity.as_ref());
    }
}

/// The acting entity of a participation with its contact details.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Participant {
    pub actor: Option<Actor>,
    pub addresses: Vec<Address>,
    pub electronic_communication: Vec<ElectronicCommunication>,
    pub entitlements: Vec<Entitlement>,
}

impl Participant {
    pub fn person(person: Person) -> Self {
        Self {
            actor: Some(Actor::Person(person)),
            ..Self::default()
        }
    }

    pub fn organisation(organisation: Organisation) -> Self {
        Self {
            actor: Some(Actor::Organisation(organisation)),
            ..Self::default()
        }
    }
}

impl Validate for Participant {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "actor", self.actor.as_ref());
        vb.each(path, "addresses", &self.addresses);
        vb.each(path, "electronic_communication", &self.electronic_communication);
        vb.each(path, "entitlements", &self.entitlements);
    }
}

/// A role bound to a participant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Participation {
    pub role: Option<CodedConcept>,
    pub participant: Option<Participant>,
    pub period: Option<Period>,
}

impl Participation {
    pub fn new(role: CodedConcept, participant: Participant) -> Self {
        Self {
            role: Some(role),
            participant: Some(participant),
            period: None,
        }
    }

    pub fn actor(&self) -> Option<&Actor> {
        self.participant.as_ref().and_then(|p| p.actor.as_ref())
    }

    pub fn display_name(&self) -> String {
        self.actor().map(Actor::display_name).unwrap_or_default()
    }
}

impl Validate for Participation {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "role", self.role.as_ref());
        vb.nested(path, "participant", self.participant.as_ref());
        vb.optional(path, "period", self.period.as_ref());
    }
}

#[derive(Clone, Copy)]
enum ActorKind {
    Person,
    Organisation,
}

fn constrained_participation(
    vb: &mut ValidationBuilder,
    path: &str,
    field: &str,
    value: Option<&Participation>,
    required: bool,
    kind: ActorKind,
) {
    let Some(participation) = value else {
        if required {
            vb.add(path, field, "is required");
        }
        return;
    };

    let field_path = child_path(path, field);
    participation.validate(&field_path, vb);
    let (matches, label) = match (kind, participation.actor()) {
        (_, None) => return,
        (ActorKind::Person, Some(actor)) => (actor.is_person(), "a person"),
        (ActorKind::Organisation, Some(actor)) => (actor.is_organisation(), "an organisation"),
    };
    if !matches {
        vb.add(
            &child_path(&field_path, "participant"),
            "actor",
            format!("must be {label} for this participation"),
        );
    }
}

/// Participation whose actor must be a person (authors, referees, prescribers, ...).
pub(crate) fn person_participation(
    vb: &mut ValidationBuilder,
    path: &str,
    field: &str,
    value: Option<&Participation>,
    required: bool,
) {
    constrained_participation(vb, path, field, value, required, ActorKind::Person);
}

/// Participation whose actor must be an organisation (custodian, dispensing organisation, ...).
pub(crate) fn organisation_participation(
    vb: &mut ValidationBuilder,
    path: &str,
    field: &str,
    value: Option<&Participation>,
    required: bool,
) {
    constrained_participation(vb, path, field, value, required, ActorKind::Organisation);
}

/// A measured or coded value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Measurement {
    Quantity { value: String, unit: String },
    Coded(CodedConcept),
    Text(String),
}

impl Measurement {
    pub fn quantity(value: &str, unit: &str) -> Self {
        Measurement::Quantity {
            value: value.to_string(),
            unit: unit.to_string(),
        }
    }

    pub fn display(&self) -> String {
        match self {
            Measurement::Quantity { value, unit } => format!("{value} {unit}"),
            Measurement::Coded(concept) => concept.label().to_string(),
            Measurement::Text(text) => text.clone(),
        }
    }
}

impl Validate for Measurement {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        match self {
            Measurement::Quantity { value, unit } => {
                if value.trim().parse::<f64>().map_or(true, |v| !v.is_finite()) {
                    vb.add(path, "value", format!("'{value}' is not a decimal number"));
                }
                vb.required_text(path, "unit", Some(unit));
            }
            Measurement::Coded(concept) => concept.validate(&child_path(path, "coded"), vb),
            Measurement::Text(text) => {
                vb.required_text(path, "text", Some(text));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_model;

    #[test]
    fn coded_concept_accepts_triple_or_original_text() {
        let coded = CodedConcept::new("91936005", "2.16.840.1.113883.6.96", "Allergy to penicillin");
        assert!(validate_model(&coded, "c").is_empty());

        let text_only = CodedConcept::from_original_text("Bee sting");
        assert!(validate_model(&text_only, "c").is_empty());
    }

    #[test]
    fn coded_concept_rejects_neither_form() {
        let messages = validate_model(&CodedConcept::default(), "c");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].location(), "c.code|original_text");
    }

    #[test]
    fn coded_concept_code_system_must_be_canonical() {
        let padded =
            CodedConcept::new("91936005", "2.16.840.1.113883.6.96 ", "Allergy to penicillin");
        let messages = validate_model(&padded, "c");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].location(), "c.code_system");
        assert!(messages[0].message.starts_with("malformed identifier"));
    }

    #[test]
    fn coded_concept_rejects_partial_triple() {
        let mut partial = CodedConcept::new("91936005", "2.16.840.1.113883.6.96", "x");
        partial.display_name = None;
        partial.original_text = Some("fallback".into());
        let messages = validate_model(&partial, "c");
        assert_eq!(messages.len(), 1);
        assert!(messages[0].message.starts_with("partially coded"));
    }

    #[test]
    fn coded_concept_validates_translations() {
        let concept = CodedConcept::new("1", "1.2.3", "One").with_translation(CodedConcept::default());
        let messages = validate_model(&concept, "c");
        assert_eq!(messages[0].location(), "c.translations[0].code|original_text");
    }

    #[test]
    fn identifier_root_must_be_a_namespace() {
        let messages = validate_model(&Identifier::new("local-id", Some("123")), "id");
        assert_eq!(messages.len(), 1);
        assert!(messages[0].message.starts_with("malformed identifier"));
        assert!(validate_model(&Identifier::random(), "id").is_empty());
    }

    #[test]
    fn participation_short_circuits_missing_participant() {
        let participation = Participation {
            role: Some(CodedConcept::from_original_text("Referee")),
            participant: None,
            period: None,
        };
        let messages = validate_model(&participation, "referee");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].location(), "referee.participant");
    }

    #[test]
    fn participation_requires_an_actor() {
        let participation = Participation::new(
            CodedConcept::from_original_text("Referee"),
            Participant::default(),
        );
        let messages = validate_model(&participation, "referee");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].location(), "referee.participant.actor");
    }

    #[test]
    fn person_participation_rejects_organisation_actor() {
        let participation = Participation::new(
            CodedConcept::from_original_text("Author"),
            Participant::organisation(Organisation::named("Clinic")),
        );
        let mut vb = ValidationBuilder::new();
        person_participation(&mut vb, "ctx", "author", Some(&participation), true);
        let messages = vb.into_messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].location(), "ctx.author.participant.actor");
    }

    #[test]
    fn required_participation_reports_absence_once() {
        let mut vb = ValidationBuilder::new();
        person_participation(&mut vb, "ctx", "referee", None, true);
        organisation_participation(&mut vb, "ctx", "custodian", None, false);
        let messages = vb.into_messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].location(), "ctx.referee");
    }

    #[test]
    fn period_rejects_reversed_bounds() {
        let offset = FixedOffset::east_opt(36_000).expect("offset");
        let later = DateTime::parse_from_rfc3339("2026-03-05T10:00:00+10:00").expect("time");
        let earlier = later - chrono::Duration::days(1);
        let messages = validate_model(&Period::between(later, earlier.with_timezone(&offset)), "p");
        assert_eq!(messages[0].location(), "p.end");
    }

    #[test]
    fn measurement_quantity_must_be_decimal() {
        let messages = validate_model(&Measurement::quantity("abc", "mmol/L"), "m");
        assert_eq!(messages[0].location(), "m.value");
        assert!(validate_model(&Measurement::quantity("5.4", "mmol/L"), "m").is_empty());
    }

    #[test]
    fn telecom_uri_uses_scheme_per_medium() {
        assert_eq!(
            ElectronicCommunication::new(TelecomMedium::Email, "gp@example.org").uri(),
            "mailto:gp@example.org"
        );
        assert_eq!(
            ElectronicCommunication::new(TelecomMedium::Telephone, "0299999999").uri(),
            "tel:0299999999"
        );
    }
}
