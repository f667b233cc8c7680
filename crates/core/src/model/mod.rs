//! Typed document model.
//!
//! Pure data populated by the caller before generation. Every type implements
//! [`Validate`](crate::validation::Validate); the per-document-type roots live in
//! [`crate::documents`].

pub mod clinical;
pub mod common;
pub mod context;

pub use clinical::*;
pub use common::{
    Actor, Address, AddressUse, CodedConcept, Device, ElectronicCommunication, Employment,
    Entitlement, EntitlementType, Identifier, Measurement, NameUsage, Organisation, Participant,
    Participation, Period, Person, PersonName, Sex, TelecomMedium, TelecomUse,
};
pub use context::{
    DocumentMetadata, DocumentRelationship, DocumentStatus, Encounter, HeaderContext,
    InformationRecipient, ParentDocument, SubjectOfCare,
};
