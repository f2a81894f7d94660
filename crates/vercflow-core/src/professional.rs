use crate::error::{Result, VercError};
use crate::io;
use crate::paths;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A person or subcontractor assignable to an activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professional {
    pub slug: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Professional {
    pub fn create(
        root: &Path,
        slug: impl Into<String>,
        name: impl Into<String>,
        trade: Option<String>,
    ) -> Result<Self> {
        let slug = slug.into();
        paths::validate_slug(&slug)?;

        if paths::professional_path(root, &slug).exists() {
            return Err(VercError::ProfessionalExists(slug));
        }

        let professional = Self {
            slug,
            name: name.into(),
            trade,
            created_at: Utc::now(),
        };
        professional.save(root)?;
        Ok(professional)
    }

    pub fn load(root: &Path, slug: &str) -> Result<Self> {
        paths::validate_slug(slug)
            .map_err(|_| VercError::ProfessionalNotFound(slug.to_string()))?;
        let path = paths::professional_path(root, slug);
        if !path.exists() {
            return Err(VercError::ProfessionalNotFound(slug.to_string()));
        }
        let data = std::fs::read_to_string(&path)?;
        let professional: Professional = serde_yaml::from_str(&data)?;
        Ok(professional)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::professional_path(root, &self.slug);
        let data = serde_yaml::to_string(self)?;
        io::atomic_write(&path, data.as_bytes())
    }

    pub fn list(root: &Path) -> Result<Vec<Self>> {
        let dir = root.join(paths::PROFESSIONALS_DIR);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut professionals = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("yaml") {
                let data = std::fs::read_to_string(&path)?;
                let professional: Professional = serde_yaml::from_str(&data)?;
                professionals.push(professional);
            }
        }
        professionals.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(professionals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_and_load() {
        let dir = TempDir::new().unwrap();
        Professional::create(
            dir.path(),
            "impermax",
            "Impermax Ltda",
            Some("waterproofing".to_string()),
        )
        .unwrap();

        let loaded = Professional::load(dir.path(), "impermax").unwrap();
        assert_eq!(loaded.name, "Impermax Ltda");
        assert_eq!(loaded.trade.as_deref(), Some("waterproofing"));
    }

    #[test]
    fn duplicate_slug_fails() {
        let dir = TempDir::new().unwrap();
        Professional::create(dir.path(), "impermax", "Impermax", None).unwrap();
        assert!(matches!(
            Professional::create(dir.path(), "impermax", "Impermax 2", None),
            Err(VercError::ProfessionalExists(_))
        ));
    }

    #[test]
    fn load_missing_professional() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Professional::load(dir.path(), "ghost"),
            Err(VercError::ProfessionalNotFound(_))
        ));
    }
}
