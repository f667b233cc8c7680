//! Generator configuration.
//!
//! [`GeneratorConfig`] is resolved once at process startup and then passed into the assembler.
//! Generation itself never reads environment variables or searches the filesystem for defaults;
//! the only filesystem access during generation is reading a branding asset the caller asked for.
//!
//! [`GenerationOptions`] carries the per-call switches.

use crate::components::SectionKind;
use crate::constants::{DEFAULT_LANGUAGE, DEFAULT_LOGO_FILE_NAME};
use crate::{GenerationError, GenerationResult};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Generator configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    default_logo_path: Option<PathBuf>,
    language: String,
}

impl GeneratorConfig {
    /// Create a new `GeneratorConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Config`] if `language` is blank.
    pub fn new(default_logo_path: Option<PathBuf>, language: &str) -> GenerationResult<Self> {
        if language.trim().is_empty() {
            return Err(GenerationError::Config("language cannot be empty".into()));
        }

        Ok(Self {
            default_logo_path,
            language: language.trim().to_string(),
        })
    }

    pub fn default_logo_path(&self) -> Option<&Path> {
        self.default_logo_path.as_deref()
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_logo_path: None,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Resolve the default branding asset location without reading environment variables.
///
/// If `override_path` is provided, it must be an existing file. Otherwise this looks for
/// `logo.png` relative to the current working directory and then walks up from
/// `CARGO_MANIFEST_DIR`. Having no default logo is not an error.
///
/// # Errors
///
/// Returns [`GenerationError::Config`] if `override_path` is not an existing file.
pub fn resolve_default_logo_path(
    override_path: Option<PathBuf>,
) -> GenerationResult<Option<PathBuf>> {
    if let Some(path) = override_path {
        if path.is_file() {
            return Ok(Some(path));
        }
        return Err(GenerationError::Config(format!(
            "default logo override {} is not a file",
            path.display()
        )));
    }

    let cwd_relative = PathBuf::from(DEFAULT_LOGO_FILE_NAME);
    if cwd_relative.is_file() {
        return Ok(Some(cwd_relative));
    }

    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    for ancestor in manifest_dir.ancestors() {
        let candidate = ancestor.join(DEFAULT_LOGO_FILE_NAME);
        if candidate.is_file() {
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}

/// Where the header logo should come from for a single generation call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrandingOptions {
    /// Use the configured default logo.
    pub include_default_logo: bool,
    /// Use a logo supplied by the caller.
    pub logo_path: Option<PathBuf>,
}

impl BrandingOptions {
    pub fn is_requested(&self) -> bool {
        self.include_default_logo || self.logo_path.is_some()
    }
}

/// Per-call generation switches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationOptions {
    pub branding: BrandingOptions,
    pub include_administrative_observations: bool,
    /// Sections that keep their entries but carry no narrative.
    pub suppressed_narratives: BTreeSet<SectionKind>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            branding: BrandingOptions::default(),
            include_administrative_observations: true,
            suppressed_narratives: BTreeSet::new(),
        }
    }
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_logo(mut self) -> Self {
        self.branding.include_default_logo = true;
        self
    }

    pub fn with_logo_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.branding.logo_path = Some(path.into());
        self
    }

    pub fn without_administrative_observations(mut self) -> Self {
        self.include_administrative_observations = false;
        self
    }

    pub fn suppress_narrative(mut self, kind: SectionKind) -> Self {
        self.suppressed_narratives.insert(kind);
        self
    }
}
