use crate::error::{Result, VercError};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const VERCFLOW_DIR: &str = ".vercflow";
pub const RECORDS_DIR: &str = ".vercflow/records";
pub const ACTIVITIES_DIR: &str = ".vercflow/activities";
pub const PROJECTS_DIR: &str = ".vercflow/projects";
pub const PROFESSIONALS_DIR: &str = ".vercflow/professionals";

pub const CONFIG_FILE: &str = ".vercflow/config.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn vercflow_dir(root: &Path) -> PathBuf {
    root.join(VERCFLOW_DIR)
}

pub fn record_path(root: &Path, id: &str) -> PathBuf {
    root.join(RECORDS_DIR).join(format!("{id}.yaml"))
}

pub fn activity_path(root: &Path, id: &str) -> PathBuf {
    root.join(ACTIVITIES_DIR).join(format!("{id}.yaml"))
}

pub fn project_path(root: &Path, slug: &str) -> PathBuf {
    root.join(PROJECTS_DIR).join(format!("{slug}.yaml"))
}

pub fn professional_path(root: &Path, slug: &str) -> PathBuf {
    root.join(PROFESSIONALS_DIR).join(format!("{slug}.yaml"))
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

// ---------------------------------------------------------------------------
// Identifier validation
// ---------------------------------------------------------------------------

static SLUG_RE: OnceLock<Regex> = OnceLock::new();

fn slug_re() -> &'static Regex {
    SLUG_RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9\-]*[a-z0-9]$|^[a-z0-9]$").unwrap())
}

/// Validate a project/professional slug. Record and activity IDs (hyphenated
/// lowercase UUIDs) satisfy the same grammar, so loads reuse this before
/// joining user input into a filesystem path.
pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() || slug.len() > 64 || !slug_re().is_match(slug) {
        return Err(VercError::InvalidSlug(slug.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_slugs() {
        for slug in ["obra-centro", "a", "torre-norte-2", "x1"] {
            validate_slug(slug).unwrap_or_else(|_| panic!("expected valid: {slug}"));
        }
    }

    #[test]
    fn uuid_ids_are_valid_slugs() {
        validate_slug("7c9a1f7e-3d2b-4a9e-8f61-0b6a5f3d2c1e").unwrap();
    }

    #[test]
    fn invalid_slugs() {
        for slug in [
            "",
            "-starts-with-dash",
            "ends-with-dash-",
            "has spaces",
            "UPPER",
            "a_b",
            "../escape",
        ] {
            assert!(validate_slug(slug).is_err(), "expected invalid: {slug}");
        }
    }

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/site");
        assert_eq!(
            config_path(root),
            PathBuf::from("/tmp/site/.vercflow/config.yaml")
        );
        assert_eq!(
            record_path(root, "r1"),
            PathBuf::from("/tmp/site/.vercflow/records/r1.yaml")
        );
        assert_eq!(
            project_path(root, "obra-centro"),
            PathBuf::from("/tmp/site/.vercflow/projects/obra-centro.yaml")
        );
    }
}
