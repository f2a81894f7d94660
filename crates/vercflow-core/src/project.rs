use crate::error::{Result, VercError};
use crate::io;
use crate::paths;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A construction project records and activities are bound to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn create(
        root: &Path,
        slug: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self> {
        let slug = slug.into();
        paths::validate_slug(&slug)?;

        if paths::project_path(root, &slug).exists() {
            return Err(VercError::ProjectExists(slug));
        }

        let project = Self {
            slug,
            name: name.into(),
            description,
            created_at: Utc::now(),
        };
        project.save(root)?;
        Ok(project)
    }

    pub fn load(root: &Path, slug: &str) -> Result<Self> {
        paths::validate_slug(slug).map_err(|_| VercError::ProjectNotFound(slug.to_string()))?;
        let path = paths::project_path(root, slug);
        if !path.exists() {
            return Err(VercError::ProjectNotFound(slug.to_string()));
        }
        let data = std::fs::read_to_string(&path)?;
        let project: Project = serde_yaml::from_str(&data)?;
        Ok(project)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::project_path(root, &self.slug);
        let data = serde_yaml::to_string(self)?;
        io::atomic_write(&path, data.as_bytes())
    }

    pub fn list(root: &Path) -> Result<Vec<Self>> {
        let projects_dir = root.join(paths::PROJECTS_DIR);
        if !projects_dir.exists() {
            return Ok(Vec::new());
        }

        let mut projects = Vec::new();
        for entry in std::fs::read_dir(&projects_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("yaml") {
                let data = std::fs::read_to_string(&path)?;
                let project: Project = serde_yaml::from_str(&data)?;
                projects.push(project);
            }
        }
        projects.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(projects)
    }
}
