use crate::error::{Result, VercError};
use crate::io;
use crate::paths;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A formalized unit of work produced from a converted record.
///
/// Created exactly once per successful conversion; owned thereafter by
/// project-management workflows outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub project: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professional: Option<String>,
    pub planned_value: f64,
    pub source_record: String,
    pub created_at: DateTime<Utc>,
}

impl Activity {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        project: impl Into<String>,
        professional: Option<String>,
        planned_value: f64,
        source_record: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            project: project.into(),
            professional,
            planned_value,
            source_record: source_record.into(),
            created_at: Utc::now(),
        }
    }

    pub fn load(root: &Path, id: &str) -> Result<Self> {
        paths::validate_slug(id).map_err(|_| VercError::ActivityNotFound(id.to_string()))?;
        let path = paths::activity_path(root, id);
        if !path.exists() {
            return Err(VercError::ActivityNotFound(id.to_string()));
        }
        let data = std::fs::read_to_string(&path)?;
        let activity: Activity = serde_yaml::from_str(&data)?;
        Ok(activity)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::activity_path(root, &self.id);
        let data = serde_yaml::to_string(self)?;
        io::atomic_write(&path, data.as_bytes())
    }

    pub fn list(root: &Path) -> Result<Vec<Self>> {
        let activities_dir = root.join(paths::ACTIVITIES_DIR);
        if !activities_dir.exists() {
            return Ok(Vec::new());
        }

        let mut activities = Vec::new();
        for entry in std::fs::read_dir(&activities_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("yaml") {
                let data = std::fs::read_to_string(&path)?;
                let activity: Activity = serde_yaml::from_str(&data)?;
                activities.push(activity);
            }
        }
        activities.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(activities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_and_load() {
        let dir = TempDir::new().unwrap();
        let activity = Activity::new(
            "Waterproofing",
            "Seal terrace slab",
            "obra-centro",
            Some("impermax".to_string()),
            12500.0,
            "r1",
        );
        activity.save(dir.path()).unwrap();

        let loaded = Activity::load(dir.path(), &activity.id).unwrap();
        assert_eq!(loaded.title, "Waterproofing");
        assert_eq!(loaded.project, "obra-centro");
        assert_eq!(loaded.professional.as_deref(), Some("impermax"));
        assert_eq!(loaded.source_record, "r1");
    }

    #[test]
    fn load_missing_activity() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Activity::load(dir.path(), "nope"),
            Err(VercError::ActivityNotFound(_))
        ));
    }

    #[test]
    fn list_empty_when_uninitialized() {
        let dir = TempDir::new().unwrap();
        assert!(Activity::list(dir.path()).unwrap().is_empty());
    }
}
