//! Header facts shared by every document type.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};

use super::common::{
    organisation_participation, person_participation, Address, CodedConcept,
    ElectronicCommunication, Entitlement, Identifier, Organisation, Participation, PersonName,
    Period, Sex,
};
use crate::validation::{Validate, ValidationBuilder};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DocumentStatus {
    #[default]
    Final,
    Interim,
    Withdrawn,
}

impl DocumentStatus {
    pub fn code(self) -> &'static str {
        match self {
            DocumentStatus::Final => "final",
            DocumentStatus::Interim => "interim",
            DocumentStatus::Withdrawn => "withdrawn",
        }
    }
}

/// Document instance identity and lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub document_id: Option<Identifier>,
    pub set_id: Option<Identifier>,
    pub version_number: Option<u32>,
    pub creation_time: Option<DateTime<FixedOffset>>,
    pub status: DocumentStatus,
}

impl DocumentMetadata {
    /// Metadata with a freshly generated document id.
    ///
    /// The creation time is left for the caller; generation never reads the clock.
    pub fn create() -> Self {
        Self {
            document_id: Some(Identifier::random()),
            ..Self::default()
        }
    }

    pub fn created_at(mut self, time: DateTime<FixedOffset>) -> Self {
        self.creation_time = Some(time);
        self
    }
}

impl Validate for DocumentMetadata {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "document_id", self.document_id.as_ref());
        vb.optional(path, "set_id", self.set_id.as_ref());
        vb.required(path, "creation_time", self.creation_time.as_ref());
        if self.version_number == Some(0) {
            vb.add(path, "version_number", "must be at least 1");
        }
        if self.version_number.is_some() && self.set_id.is_none() {
            vb.add(path, "set_id", "is required when version_number is supplied");
        }
    }
}

/// The patient the document is about.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubjectOfCare {
    pub names: Vec<PersonName>,
    pub sex: Option<Sex>,
    pub date_of_birth: Option<NaiveDate>,
    pub identifiers: Vec<Identifier>,
    pub addresses: Vec<Address>,
    pub electronic_communication: Vec<ElectronicCommunication>,
    pub entitlements: Vec<Entitlement>,
}

impl SubjectOfCare {
    pub fn display_name(&self) -> String {
        self.names.first().map(PersonName::full_name).unwrap_or_default()
    }

    /// Completed years of age on `as_at`.
    pub fn age_at(&self, as_at: NaiveDate) -> Option<u32> {
        let dob = self.date_of_birth?;
        let mut years = as_at.year() - dob.year();
        if (as_at.month(), as_at.day()) < (dob.month(), dob.day()) {
            years -= 1;
        }
        u32::try_from(years).ok()
    }
}

impl Validate for SubjectOfCare {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        if vb.required_items(path, "names", &self.names) {
            vb.each(path, "names", &self.names);
        }
        vb.required(path, "sex", self.sex.as_ref());
        vb.required(path, "date_of_birth", self.date_of_birth.as_ref());
        if vb.required_items(path, "identifiers", &self.identifiers) {
            vb.each(path, "identifiers", &self.identifiers);
        }
        vb.each(path, "addresses", &self.addresses);
        vb.each(path, "electronic_communication", &self.electronic_communication);
        vb.each(path, "entitlements", &self.entitlements);
    }
}

/// The healthcare event the document belongs to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Encounter {
    pub id: Option<Identifier>,
    pub code: Option<CodedConcept>,
    pub facility: Option<Organisation>,
    pub period: Option<Period>,
    pub discharge_disposition: Option<CodedConcept>,
}

impl Validate for Encounter {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.optional(path, "id", self.id.as_ref());
        vb.optional(path, "code", self.code.as_ref());
        vb.nested(path, "facility", self.facility.as_ref());
        vb.nested(path, "period", self.period.as_ref());
        vb.optional(path, "discharge_disposition", self.discharge_disposition.as_ref());
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InformationRecipient {
    pub recipient: Option<Participation>,
    /// Primary recipients receive the document; others are copied in.
    pub primary: bool,
}

impl Validate for InformationRecipient {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "recipient", self.recipient.as_ref());
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DocumentRelationship {
    #[default]
    Replaces,
    Appends,
    Transforms,
}

impl DocumentRelationship {
    pub fn code(self) -> &'static str {
        match self {
            DocumentRelationship::Replaces => "RPLC",
            DocumentRelationship::Appends => "APND",
            DocumentRelationship::Transforms => "XFRM",
        }
    }
}

/// Earlier document this one relates to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParentDocument {
    pub relationship: DocumentRelationship,
    pub document_id: Option<Identifier>,
    pub set_id: Option<Identifier>,
    pub code: Option<CodedConcept>,
}

impl Validate for ParentDocument {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        vb.nested(path, "document_id", self.document_id.as_ref());
        vb.optional(path, "set_id", self.set_id.as_ref());
        vb.optional(path, "code", self.code.as_ref());
    }
}

/// Header facts every document type carries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderContext {
    pub custodian: Option<Participation>,
    pub legal_authenticator: Option<Participation>,
    pub information_recipients: Vec<InformationRecipient>,
    pub parent_documents: Vec<ParentDocument>,
}

impl Validate for HeaderContext {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        organisation_participation(vb, path, "custodian", self.custodian.as_ref(), true);
        person_participation(
            vb,
            path,
            "legal_authenticator",
            self.legal_authenticator.as_ref(),
            false,
        );
        vb.each(path, "information_recipients", &self.information_recipients);
        vb.each(path, "parent_documents", &self.parent_documents);
    }
}
