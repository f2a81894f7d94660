use crate::activity::Activity;
use crate::error::{Result, VercError};
use crate::professional::Professional;
use crate::project::Project;
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConversionRequest
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub project: String,
    #[serde(default)]
    pub professional: Option<String>,
    #[serde(default)]
    pub planned_value: f64,
}

// ---------------------------------------------------------------------------
// formalize
// ---------------------------------------------------------------------------

/// Convert a record into a formal activity.
///
/// The one-way `{any status} → converted` transition. Validation runs
/// before any store access; a request without a target project is
/// rejected with zero side effects. On success exactly one activity is
/// created and the source record is marked converted.
///
/// Not idempotent: the activity write lands before the record update, so
/// a crash between the two leaves an activity whose source record is
/// still unconverted. Retrying such a call creates a second activity; no
/// deduplication key is used.
pub fn formalize(root: &Path, record_id: &str, req: &ConversionRequest) -> Result<Activity> {
    if req.project.trim().is_empty() {
        return Err(VercError::MissingProject);
    }

    let mut record = Record::load(root, record_id)?;
    if record.is_converted() {
        return Err(VercError::AlreadyConverted(record_id.to_string()));
    }

    Project::load(root, &req.project)?;
    if let Some(slug) = &req.professional {
        Professional::load(root, slug)?;
    }

    let activity = Activity::new(
        &req.title,
        &req.description,
        &req.project,
        req.professional.clone(),
        req.planned_value,
        record_id,
    );
    activity.save(root)?;

    record.mark_converted();
    record.save(root)?;

    Ok(activity)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoardStatus, RecordKind};
    use tempfile::TempDir;

    fn request(project: &str) -> ConversionRequest {
        ConversionRequest {
            title: "Waterproofing".to_string(),
            description: "Seal terrace slab".to_string(),
            project: project.to_string(),
            professional: None,
            planned_value: 0.0,
        }
    }

    fn capture(dir: &TempDir) -> Record {
        Record::create(dir.path(), "carlos", "leak at terrace", RecordKind::Text, None, None)
            .unwrap()
    }

    #[test]
    fn empty_project_rejected_without_store_access() {
        // Root deliberately does not exist: if formalize touched the store
        // at all it would fail differently than MissingProject.
        let root = Path::new("/nonexistent/vercflow-test-root");
        let err = formalize(root, "r1", &request("")).unwrap_err();
        assert!(matches!(err, VercError::MissingProject));
    }

    #[test]
    fn whitespace_project_rejected() {
        let root = Path::new("/nonexistent/vercflow-test-root");
        assert!(matches!(
            formalize(root, "r1", &request("   ")),
            Err(VercError::MissingProject)
        ));
    }

    #[test]
    fn successful_conversion_creates_one_activity() {
        let dir = TempDir::new().unwrap();
        Project::create(dir.path(), "obra-centro", "Obra Centro", None).unwrap();
        let record = capture(&dir);

        let activity = formalize(dir.path(), &record.id, &request("obra-centro")).unwrap();
        assert_eq!(activity.project, "obra-centro");
        assert_eq!(activity.source_record, record.id);

        let activities = Activity::list(dir.path()).unwrap();
        assert_eq!(activities.len(), 1);

        let reloaded = Record::load(dir.path(), &record.id).unwrap();
        assert_eq!(reloaded.status, BoardStatus::Converted);
        // Exactly one transition: in_triage then converted.
        assert_eq!(reloaded.status_history.len(), 2);
        assert_eq!(
            reloaded.status_history.last().unwrap().status,
            BoardStatus::Converted
        );
    }

    #[test]
    fn reconversion_rejected() {
        let dir = TempDir::new().unwrap();
        Project::create(dir.path(), "obra-centro", "Obra Centro", None).unwrap();
        let record = capture(&dir);

        formalize(dir.path(), &record.id, &request("obra-centro")).unwrap();
        let err = formalize(dir.path(), &record.id, &request("obra-centro")).unwrap_err();
        assert!(matches!(err, VercError::AlreadyConverted(_)));
        assert_eq!(Activity::list(dir.path()).unwrap().len(), 1);
    }

    #[test]
    fn unknown_project_leaves_record_untouched() {
        let dir = TempDir::new().unwrap();
        let record = capture(&dir);

        let err = formalize(dir.path(), &record.id, &request("ghost-project")).unwrap_err();
        assert!(matches!(err, VercError::ProjectNotFound(_)));

        let reloaded = Record::load(dir.path(), &record.id).unwrap();
        assert_eq!(reloaded.status, BoardStatus::InTriage);
        assert!(Activity::list(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn unknown_professional_leaves_record_untouched() {
        let dir = TempDir::new().unwrap();
        Project::create(dir.path(), "obra-centro", "Obra Centro", None).unwrap();
        let record = capture(&dir);

        let mut req = request("obra-centro");
        req.professional = Some("ghost".to_string());
        let err = formalize(dir.path(), &record.id, &req).unwrap_err();
        assert!(matches!(err, VercError::ProfessionalNotFound(_)));
        assert!(Activity::list(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn unknown_record_rejected() {
        let dir = TempDir::new().unwrap();
        Project::create(dir.path(), "obra-centro", "Obra Centro", None).unwrap();
        assert!(matches!(
            formalize(dir.path(), "no-such-record", &request("obra-centro")),
            Err(VercError::RecordNotFound(_))
        ));
    }

    #[test]
    fn conversion_with_professional_binding() {
        let dir = TempDir::new().unwrap();
        Project::create(dir.path(), "obra-centro", "Obra Centro", None).unwrap();
        Professional::create(dir.path(), "impermax", "Impermax Ltda", None).unwrap();
        let record = capture(&dir);

        let mut req = request("obra-centro");
        req.professional = Some("impermax".to_string());
        req.planned_value = 12500.0;

        let activity = formalize(dir.path(), &record.id, &req).unwrap();
        assert_eq!(activity.professional.as_deref(), Some("impermax"));
        assert_eq!(activity.planned_value, 12500.0);
    }
}
