//! Branding asset resolution.
//!
//! The only filesystem access during generation. Problems are reported into the caller's
//! [`ValidationBuilder`] so they surface in the same failure as model violations.

use std::fs;
use std::path::Path;

use cda::BrandingLogo;

use crate::config::{BrandingOptions, GeneratorConfig};
use crate::validation::ValidationBuilder;

const BRANDING_PATH: &str = "options.branding";

fn media_type(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

/// Resolves the requested logo, if any.
///
/// Returns `None` when no logo was requested or when resolution failed; failures are recorded
/// in `vb`.
pub(crate) fn resolve_branding(
    cfg: &GeneratorConfig,
    options: &BrandingOptions,
    vb: &mut ValidationBuilder,
) -> Option<BrandingLogo> {
    let (field, path) = match (options.include_default_logo, options.logo_path.as_deref()) {
        (false, None) => return None,
        (true, Some(_)) => {
            vb.add(
                BRANDING_PATH,
                "include_default_logo|logo_path",
                "conflicting branding sources: request either the default logo or a logo path",
            );
            return None;
        }
        (true, None) => match cfg.default_logo_path() {
            Some(path) => ("include_default_logo", path),
            None => {
                vb.add(
                    BRANDING_PATH,
                    "include_default_logo",
                    "no default logo is configured",
                );
                return None;
            }
        },
        (false, Some(path)) => ("logo_path", path),
    };

    let Some(media_type) = media_type(path) else {
        vb.add(
            BRANDING_PATH,
            field,
            format!(
                "unsupported logo format '{}' (expected png, jpg, jpeg or gif)",
                path.display()
            ),
        );
        return None;
    };

    let metadata = match fs::File::open(path).and_then(|file| file.metadata()) {
        Ok(metadata) if metadata.is_file() => metadata,
        Ok(_) => {
            vb.add(BRANDING_PATH, field, format!("'{}' is not a file", path.display()));
            return None;
        }
        Err(err) => {
            tracing::warn!("failed to open logo {}: {}", path.display(), err);
            vb.add(
                BRANDING_PATH,
                field,
                format!("logo '{}' cannot be read: {err}", path.display()),
            );
            return None;
        }
    };

    let reference = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Some(BrandingLogo {
        reference,
        media_type: media_type.to_string(),
        size_bytes: metadata.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_logo(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, [0x89, b'P', b'N', b'G']).expect("write logo");
        path
    }

    fn resolve(cfg: &GeneratorConfig, options: &BrandingOptions) -> (Option<BrandingLogo>, Vec<String>) {
        let mut vb = ValidationBuilder::new();
        let logo = resolve_branding(cfg, options, &mut vb);
        let messages = vb.into_messages().iter().map(|m| m.to_string()).collect();
        (logo, messages)
    }

    #[test]
    fn nothing_requested_touches_nothing() {
        let (logo, messages) = resolve(&GeneratorConfig::default(), &BrandingOptions::default());
        assert!(logo.is_none());
        assert!(messages.is_empty());
    }

    #[test]
    fn caller_logo_is_resolved() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_logo(&dir, "clinic.png");
        let options = BrandingOptions {
            include_default_logo: false,
            logo_path: Some(path),
        };
        let (logo, messages) = resolve(&GeneratorConfig::default(), &options);
        assert!(messages.is_empty());
        let logo = logo.expect("logo resolved");
        assert_eq!(logo.reference, "clinic.png");
        assert_eq!(logo.media_type, "image/png");
        assert_eq!(logo.size_bytes, 4);
    }

    #[test]
    fn default_logo_comes_from_config() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_logo(&dir, "default.JPG");
        let cfg = GeneratorConfig::new(Some(path), "en-AU").expect("config");
        let options = BrandingOptions {
            include_default_logo: true,
            logo_path: None,
        };
        let (logo, _) = resolve(&cfg, &options);
        assert_eq!(logo.map(|l| l.media_type), Some("image/jpeg".to_string()));
    }

    #[test]
    fn conflicting_sources_are_reported() {
        let options = BrandingOptions {
            include_default_logo: true,
            logo_path: Some(PathBuf::from("logo.png")),
        };
        let (logo, messages) = resolve(&GeneratorConfig::default(), &options);
        assert!(logo.is_none());
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("conflicting branding sources"));
    }

    #[test]
    fn missing_default_is_reported() {
        let options = BrandingOptions {
            include_default_logo: true,
            logo_path: None,
        };
        let (_, messages) = resolve(&GeneratorConfig::default(), &options);
        assert_eq!(
            messages,
            vec!["options.branding.include_default_logo: no default logo is configured"]
        );
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = TempDir::new().expect("temp dir");
        let options = BrandingOptions {
            include_default_logo: false,
            logo_path: Some(dir.path().join("absent.png")),
        };
        let (logo, messages) = resolve(&GeneratorConfig::default(), &options);
        assert!(logo.is_none());
        assert!(messages[0].starts_with("options.branding.logo_path: logo"));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_reported() {
        let dir = TempDir::new().expect("temp dir");
        let link = dir.path().join("logo.png");
        std::os::unix::fs::symlink(dir.path().join("gone.png"), &link).expect("symlink");
        let options = BrandingOptions {
            include_default_logo: false,
            logo_path: Some(link),
        };
        let (logo, messages) = resolve(&GeneratorConfig::default(), &options);
        assert!(logo.is_none());
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("options.branding.logo_path: logo"));
        assert!(messages[0].contains("cannot be read"));
    }

    #[cfg(unix)]
    #[test]
    fn directory_is_not_a_logo() {
        let dir = TempDir::new().expect("temp dir");
        let folder = dir.path().join("logo.png");
        fs::create_dir(&folder).expect("create dir");
        let options = BrandingOptions {
            include_default_logo: false,
            logo_path: Some(folder),
        };
        let (logo, messages) = resolve(&GeneratorConfig::default(), &options);
        assert!(logo.is_none());
        assert!(messages[0].ends_with("is not a file"));
    }

    #[test]
    fn unsupported_extension_is_reported() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_logo(&dir, "logo.bmp");
        let options = BrandingOptions {
            include_default_logo: false,
            logo_path: Some(path),
        };
        let (_, messages) = resolve(&GeneratorConfig::default(), &options);
        assert!(messages[0].contains("unsupported logo format"));
    }
}
