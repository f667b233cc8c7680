//! Document Assembler.
//!
//! One generic pipeline serves every document type:
//!
//! 1. validate the model and abort on any violation;
//! 2. resolve the optional branding asset, folding problems into the same failure;
//! 3. build the header from the facts the document type supplies;
//! 4. build the body by walking the type's declarative section list;
//! 5. append the administrative observations trailer unless disabled;
//! 6. hand the tree to a serializer (see [`DocumentAssembler::generate`]).
//!
//! Per-type behaviour lives entirely in the [`DocumentDescriptor`] returned by
//! [`DocumentModel::descriptor`].

use std::sync::Arc;

use cda::data_types::ts;
use cda::{Body, Cd, Ii, Section, StructuredDocument};

use crate::branding::resolve_branding;
use crate::components::header::build_header;
use crate::components::mapping::identifier;
use crate::components::{EncodingTable, HeaderFacts, SectionBuilder, SectionKind};
use crate::config::{GenerationOptions, GeneratorConfig};
use crate::constants::{CONFIDENTIALITY_CODE_SYSTEM, CONFIDENTIALITY_CODE_SYSTEM_NAME};
use crate::documents::DocumentType;
use crate::error::{GenerationError, GenerationResult, ValidationFailure};
use crate::model::{DocumentMetadata, ExclusionStatement};
use crate::narrative::{
    DefaultNarrativeGenerator, NarrativeContext, NarrativeGenerator, SectionData,
};
use crate::serializer::DocumentSerializer;
use crate::validation::{Validate, ValidationBuilder};

/// Extracts the header facts from a document.
pub type HeaderSource<D> = for<'a> fn(&'a D) -> HeaderFacts<'a>;

/// Extracts one section's data from a document; `None` when the caller left it out.
pub type SectionSource<D> = for<'a> fn(&'a D) -> Option<SectionData<'a>>;

/// What to emit when a section's data is absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WhenAbsent {
    Omit,
    Placeholder(ExclusionStatement),
}

/// One entry of a document type's ordered section list.
pub struct SectionSpec<D> {
    pub kind: SectionKind,
    pub source: SectionSource<D>,
    pub when_absent: WhenAbsent,
}

impl<D> SectionSpec<D> {
    /// Section emitted when present and omitted otherwise.
    pub fn new(kind: SectionKind, source: SectionSource<D>) -> Self {
        Self {
            kind,
            source,
            when_absent: WhenAbsent::Omit,
        }
    }

    /// Section replaced by an exclusion statement when absent.
    pub fn or_placeholder(mut self, statement: ExclusionStatement) -> Self {
        self.when_absent = WhenAbsent::Placeholder(statement);
        self
    }
}

/// Everything the assembler needs to know about a document type.
pub struct DocumentDescriptor<D> {
    pub document_type: DocumentType,
    pub header: HeaderSource<D>,
    pub sections: Vec<SectionSpec<D>>,
    pub encodings: EncodingTable,
}

impl<D> DocumentDescriptor<D> {
    pub fn new(document_type: DocumentType, header: HeaderSource<D>) -> Self {
        Self {
            document_type,
            header,
            sections: Vec::new(),
            encodings: EncodingTable::current(),
        }
    }

    pub fn section(mut self, spec: SectionSpec<D>) -> Self {
        self.sections.push(spec);
        self
    }

    pub fn encodings(mut self, encodings: EncodingTable) -> Self {
        self.encodings = encodings;
        self
    }

    /// Section kinds in body order, excluding the trailer.
    pub fn section_kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|spec| spec.kind).collect()
    }
}

/// A root document model the assembler can generate.
pub trait DocumentModel: Validate + Sized {
    fn descriptor() -> DocumentDescriptor<Self>;

    fn metadata(&self) -> &DocumentMetadata;
}

/// Assembles validated document models into structured documents.
#[derive(Clone)]
pub struct DocumentAssembler {
    cfg: Arc<GeneratorConfig>,
    narrative: Arc<dyn NarrativeGenerator + Send + Sync>,
}

impl DocumentAssembler {
    /// Assembler using the [`DefaultNarrativeGenerator`].
    pub fn new(cfg: Arc<GeneratorConfig>) -> Self {
        Self {
            cfg,
            narrative: Arc::new(DefaultNarrativeGenerator),
        }
    }

    /// Replaces the narrative generator for every call made through this assembler.
    pub fn with_narrative_generator(
        mut self,
        narrative: Arc<dyn NarrativeGenerator + Send + Sync>,
    ) -> Self {
        self.narrative = narrative;
        self
    }
}

impl DocumentAssembler {
    /// Validates `document` without assembling it.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Validation`] carrying every violation found.
    pub fn validate<D: DocumentModel>(&self, document: &D) -> GenerationResult<()> {
        let document_type = D::descriptor().document_type;
        let mut vb = ValidationBuilder::new();
        document.validate(document_type.root_path(), &mut vb);
        if vb.is_empty() {
            Ok(())
        } else {
            Err(rejected(document_type, vb))
        }
    }

    /// Validates and assembles `document` with the configured narrative generator.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Validation`] if the model is malformed or the requested
    /// branding asset cannot be resolved. No partial document is produced.
    pub fn assemble<D: DocumentModel>(
        &self,
        document: &D,
        options: &GenerationOptions,
    ) -> GenerationResult<StructuredDocument> {
        self.assemble_with(document, options, self.narrative.as_ref())
    }

    /// Like [`assemble`](Self::assemble) with a narrative generator for this call only.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Validation`] if the model is malformed or the requested
    /// branding asset cannot be resolved.
    pub fn assemble_with<D: DocumentModel>(
        &self,
        document: &D,
        options: &GenerationOptions,
        narrative: &dyn NarrativeGenerator,
    ) -> GenerationResult<StructuredDocument> {
        let descriptor = D::descriptor();
        let document_type = descriptor.document_type;
        tracing::debug!(document_type = %document_type, "validating document");

        let mut vb = ValidationBuilder::new();
        document.validate(document_type.root_path(), &mut vb);
        if !vb.is_empty() {
            return Err(rejected(document_type, vb));
        }

        let branding = resolve_branding(&self.cfg, &options.branding, &mut vb);
        if !vb.is_empty() {
            return Err(rejected(document_type, vb));
        }

        let facts = (descriptor.header)(document);
        let header = build_header(&facts, branding);

        let context = NarrativeContext {
            document_type,
            subject_of_care_id: facts.subject_of_care_id(),
        };
        let builder = SectionBuilder::new(
            narrative,
            context,
            &options.suppressed_narratives,
            &descriptor.encodings,
        );

        let mut sections: Vec<Section> = Vec::with_capacity(descriptor.sections.len() + 1);
        for spec in &descriptor.sections {
            match ((spec.source)(document), spec.when_absent) {
                (Some(data), _) => sections.push(builder.build(data)),
                (None, WhenAbsent::Placeholder(statement)) => {
                    sections.push(builder.build(SectionData::ExclusionStatement {
                        kind: spec.kind,
                        statement,
                    }));
                }
                (None, WhenAbsent::Omit) => {}
            }
        }

        let metadata = document.metadata();
        if options.include_administrative_observations {
            if let Some(subject) = facts.subject_of_care {
                sections.push(builder.build(SectionData::AdministrativeObservations {
                    subject,
                    as_at: metadata.creation_time,
                }));
            }
        }

        tracing::info!(
            document_type = %document_type,
            sections = sections.len(),
            "assembled document"
        );

        Ok(StructuredDocument {
            template: document_type.template_identity(),
            id: metadata
                .document_id
                .as_ref()
                .map(identifier)
                .unwrap_or_else(|| Ii::new(String::new(), None)),
            set_id: metadata.set_id.as_ref().map(identifier),
            version_number: metadata.version_number,
            code: document_type.document_code(),
            title: document_type.title().to_string(),
            effective_time: metadata.creation_time.as_ref().map(ts).unwrap_or_default(),
            status_code: metadata.status.code().to_string(),
            confidentiality: Cd::coded(
                "N",
                CONFIDENTIALITY_CODE_SYSTEM,
                CONFIDENTIALITY_CODE_SYSTEM_NAME,
                "normal",
            ),
            language: self.cfg.language().to_string(),
            header,
            body: Body { sections },
        })
    }

    /// Assembles `document` and serializes it with `serializer`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Validation`] for malformed input and
    /// [`GenerationError::Serialization`] if the serializer fails.
    pub fn generate<D: DocumentModel, S: DocumentSerializer>(
        &self,
        document: &D,
        options: &GenerationOptions,
        serializer: &S,
    ) -> GenerationResult<S::Output> {
        let assembled = self.assemble(document, options)?;
        Ok(serializer.serialize(&assembled)?)
    }
}

fn rejected(document_type: DocumentType, vb: ValidationBuilder) -> GenerationError {
    let messages = vb.into_messages();
    tracing::warn!(
        document_type = %document_type,
        violations = messages.len(),
        "document failed validation"
    );
    GenerationError::Validation(ValidationFailure::new(messages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CodedConcept, Identifier};
    use crate::serializer::YamlSerializer;
    use crate::testing;
    use cda::Narrative;
    use std::collections::BTreeSet;
    use tempfile::TempDir;

    fn assembler() -> DocumentAssembler {
        DocumentAssembler::new(Arc::new(GeneratorConfig::default()))
    }

    fn codes(document: &StructuredDocument) -> Vec<String> {
        document
            .section_codes()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn section_code(kind: SectionKind) -> String {
        kind.code().code.to_string()
    }

    #[test]
    fn minimal_referral_has_fixed_section_order() {
        let document = assembler()
            .assemble(&testing::e_referral(), &GenerationOptions::default())
            .expect("minimal e-referral generates");

        let expected: Vec<String> = [
            SectionKind::ReferralDetail,
            SectionKind::AdverseReactions,
            SectionKind::Medications,
            SectionKind::MedicalHistory,
            SectionKind::AdministrativeObservations,
        ]
        .into_iter()
        .map(section_code)
        .collect();
        assert_eq!(codes(&document), expected);
        assert_eq!(document.template.title, "e-Referral");
        assert_eq!(document.header.participants[0].type_code, "REFT");
        assert_eq!(document.language, "en-AU");
    }

    #[test]
    fn missing_referee_is_reported_and_nothing_is_produced() {
        let mut referral = testing::e_referral();
        referral.context.referee = None;

        let err = assembler()
            .assemble(&referral, &GenerationOptions::default())
            .expect_err("referee is mandatory");
        let failure = err.validation().expect("validation failure");
        assert!(failure.mentions("e_referral.context.referee"));
        assert_eq!(failure.len(), 1);
    }

    #[test]
    fn every_violation_is_reported_in_one_failure() {
        let mut referral = testing::e_referral();
        referral.context.referee = None;
        referral.context.author = None;
        referral.metadata.creation_time = None;

        let err = assembler()
            .assemble(&referral, &GenerationOptions::default())
            .expect_err("three violations");
        let failure = err.validation().expect("validation failure");
        assert_eq!(failure.len(), 3);
        assert!(failure.mentions("metadata.creation_time"));
        assert!(failure.mentions("context.author"));
        assert!(failure.mentions("context.referee"));
    }

    #[test]
    fn validation_failure_skips_branding_resolution() {
        let mut referral = testing::e_referral();
        referral.context.referee = None;
        let options = GenerationOptions::new().with_logo_path("/nonexistent/logo.png");

        let err = assembler()
            .assemble(&referral, &options)
            .expect_err("invalid model");
        let failure = err.validation().expect("validation failure");
        assert!(!failure.mentions("branding"));
    }

    #[test]
    fn branding_problems_are_validation_failures() {
        let options = GenerationOptions::new().with_default_logo();
        let err = assembler()
            .assemble(&testing::e_referral(), &options)
            .expect_err("no default logo configured");
        assert!(matches!(err, GenerationError::Validation(_)));
        assert!(err
            .validation()
            .is_some_and(|failure| failure.mentions("options.branding")));
    }

    #[test]
    fn resolved_logo_is_recorded_in_the_header() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("clinic.gif");
        std::fs::write(&path, b"GIF89a").expect("write logo");

        let options = GenerationOptions::new().with_logo_path(&path);
        let document = assembler()
            .assemble(&testing::e_referral(), &options)
            .expect("generates with logo");
        let logo = document.header.branding.expect("branding recorded");
        assert_eq!(logo.reference, "clinic.gif");
        assert_eq!(logo.size_bytes, 6);
    }

    #[test]
    fn trailer_can_be_disabled() {
        let options = GenerationOptions::new().without_administrative_observations();
        let document = assembler()
            .assemble(&testing::e_referral(), &options)
            .expect("generates");
        assert!(!codes(&document).contains(&section_code(SectionKind::AdministrativeObservations)));
    }

    #[test]
    fn optional_section_appears_once_when_present() {
        let mut referral = testing::e_referral();
        let investigations = section_code(SectionKind::DiagnosticInvestigations);

        let without = assembler()
            .assemble(&referral, &GenerationOptions::default())
            .expect("generates");
        assert!(!codes(&without).contains(&investigations));

        referral.content.diagnostic_investigations = Some(testing::diagnostic_investigations());
        let with = assembler()
            .assemble(&referral, &GenerationOptions::default())
            .expect("generates");
        let count = codes(&with).iter().filter(|c| **c == investigations).count();
        assert_eq!(count, 1);
    }

    #[test]
    fn generation_is_deterministic() {
        let referral = testing::e_referral();
        let first = assembler()
            .assemble(&referral, &GenerationOptions::default())
            .expect("generates");
        let second = assembler()
            .assemble(&referral, &GenerationOptions::default())
            .expect("generates");
        assert_eq!(first, second);
    }

    #[test]
    fn suppressed_narrative_keeps_entries() {
        let referral = testing::e_referral();
        let options = GenerationOptions::new().suppress_narrative(SectionKind::AdverseReactions);
        let code = section_code(SectionKind::AdverseReactions);

        let plain = assembler()
            .assemble(&referral, &GenerationOptions::default())
            .expect("generates");
        let suppressed = assembler().assemble(&referral, &options).expect("generates");

        let before = plain.section(&code).expect("adverse reactions");
        let after = suppressed.section(&code).expect("adverse reactions");
        assert!(before.text.is_some());
        assert!(after.text.is_none());
        assert_eq!(before.entries, after.entries);
    }

    struct Silent;

    impl NarrativeGenerator for Silent {
        fn narrative(&self, _data: SectionData<'_>, _ctx: &NarrativeContext<'_>) -> Narrative {
            Narrative::new()
        }
    }

    #[test]
    fn per_call_generator_overrides_the_default() {
        let document = assembler()
            .assemble_with(&testing::e_referral(), &GenerationOptions::default(), &Silent)
            .expect("generates");
        assert!(document.body.sections.iter().all(|s| s.text.is_none()));
    }

    #[test]
    fn configured_generator_is_used_by_assemble() {
        let assembler = assembler().with_narrative_generator(Arc::new(Silent));
        let document = assembler
            .assemble(&testing::e_referral(), &GenerationOptions::default())
            .expect("generates");
        assert!(document.body.sections.iter().all(|s| s.text.is_none()));
    }

    #[test]
    fn yaml_round_trip_preserves_template_and_codes() {
        let mut referral = testing::e_referral();
        referral.content.referral_detail = Some(crate::model::ReferralDetail {
            reasons: vec![CodedConcept::new("230690007", "2.16.840.1.113883.6.96", "Stroke")
                .with_code_system_name("SNOMED CT-AU")
                .with_translation(CodedConcept::from_original_text("stroke"))],
            ..crate::model::ReferralDetail::default()
        });

        let assembler = assembler();
        let yaml = assembler
            .generate(&referral, &GenerationOptions::default(), &YamlSerializer)
            .expect("serialises");
        let reparsed = cda::document_parse(&yaml).expect("parses");
        let original = assembler
            .assemble(&referral, &GenerationOptions::default())
            .expect("generates");

        assert_eq!(reparsed.template, original.template);
        assert_eq!(reparsed.code, original.code);
        assert_eq!(reparsed, original);
    }

    #[test]
    fn document_identity_comes_from_metadata() {
        let mut referral = testing::e_referral();
        referral.metadata.document_id = Some(Identifier::new("1.2.36.1.2001.1005.1", Some("42")));
        let document = assembler()
            .assemble(&referral, &GenerationOptions::default())
            .expect("generates");
        assert_eq!(document.id.extension.as_deref(), Some("42"));
        assert_eq!(document.effective_time, "20260305103000+1000");
        assert_eq!(document.status_code, "final");
    }

    #[test]
    fn padded_document_id_root_is_rejected() {
        let mut referral = testing::e_referral();
        referral.metadata.document_id =
            Some(Identifier::new(" 1.2.36.1.2001.1005.1 ", Some("42")));
        let err = assembler()
            .assemble(&referral, &GenerationOptions::default())
            .expect_err("root is emitted verbatim and must be canonical");
        let failure = err.validation().expect("validation failure");
        assert_eq!(failure.len(), 1);
        assert!(failure.mentions("metadata.document_id.root"));
    }

    #[test]
    fn every_document_type_generates_from_its_minimal_model() {
        let assembler = assembler();
        let options = GenerationOptions::default();
        let mut generated = BTreeSet::new();
        for document in testing::all_minimal(&assembler, &options) {
            let document = document.expect("minimal model generates");
            generated.insert(document.template.template_id.root.clone());
            assert!(!document.body.sections.is_empty());
        }
        assert_eq!(generated.len(), DocumentType::ALL.len());
    }
}
