use crate::config::Config;
use crate::error::{Result, VercError};
use crate::io;
use crate::paths;
use crate::types::{BoardStatus, PipelinePhase, Priority, RecordKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// StatusChange
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChange {
    pub status: BoardStatus,
    pub entered: DateTime<Utc>,
    pub exited: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A unit of field-captured information awaiting triage.
///
/// A record participates in two independent workflows: `status` is its
/// column on the triage board (any-to-any manual moves), `phase` is its
/// position in the capture pipeline (forward-only). Neither workflow
/// touches the other's field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    pub content: String,
    pub kind: RecordKind,
    pub status: BoardStatus,
    pub phase: PipelinePhase,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status_history: Vec<StatusChange>,
}

impl Record {
    pub fn new(author: impl Into<String>, content: impl Into<String>, kind: RecordKind) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            author: author.into(),
            project: None,
            content: content.into(),
            kind,
            status: BoardStatus::InTriage,
            phase: PipelinePhase::Registered,
            priority: Priority::Normal,
            tag: None,
            created_at: now,
            updated_at: now,
            status_history: vec![StatusChange {
                status: BoardStatus::InTriage,
                entered: now,
                exited: None,
            }],
        }
    }

    // ---------------------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------------------

    /// Capture a new record and persist it.
    pub fn create(
        root: &Path,
        author: impl Into<String>,
        content: impl Into<String>,
        kind: RecordKind,
        project: Option<String>,
        priority: Option<Priority>,
    ) -> Result<Self> {
        let mut record = Self::new(author, content, kind);
        record.project = project;
        if let Some(p) = priority {
            record.priority = p;
        }
        record.save(root)?;
        Ok(record)
    }

    pub fn load(root: &Path, id: &str) -> Result<Self> {
        paths::validate_slug(id).map_err(|_| VercError::RecordNotFound(id.to_string()))?;
        let path = paths::record_path(root, id);
        if !path.exists() {
            return Err(VercError::RecordNotFound(id.to_string()));
        }
        let data = std::fs::read_to_string(&path)?;
        let record: Record = serde_yaml::from_str(&data)?;
        Ok(record)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::record_path(root, &self.id);
        let data = serde_yaml::to_string(self)?;
        io::atomic_write(&path, data.as_bytes())
    }

    pub fn list(root: &Path) -> Result<Vec<Self>> {
        let records_dir = root.join(paths::RECORDS_DIR);
        if !records_dir.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for entry in std::fs::read_dir(&records_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("yaml") {
                let data = std::fs::read_to_string(&path)?;
                let record: Record = serde_yaml::from_str(&data)?;
                records.push(record);
            }
        }
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(records)
    }

    // ---------------------------------------------------------------------------
    // Board moves
    // ---------------------------------------------------------------------------

    /// Check whether a manual board move to `target` is permitted.
    ///
    /// The graph is complete over the enabled columns except for the
    /// conversion column: `converted` is entered only through
    /// `mark_converted` and is terminal.
    pub fn can_move_to(&self, target: BoardStatus, cfg: &Config) -> Result<()> {
        if !cfg.board.is_enabled(target) {
            return Err(VercError::InvalidTransition {
                from: self.status.to_string(),
                to: target.to_string(),
                reason: format!("column '{target}' is not enabled"),
            });
        }

        if self.status == BoardStatus::Converted {
            return Err(VercError::InvalidTransition {
                from: self.status.to_string(),
                to: target.to_string(),
                reason: "converted records cannot be moved".to_string(),
            });
        }

        if target == BoardStatus::Converted {
            return Err(VercError::InvalidTransition {
                from: self.status.to_string(),
                to: target.to_string(),
                reason: "records reach 'converted' only through conversion".to_string(),
            });
        }

        Ok(())
    }

    pub fn move_to(&mut self, target: BoardStatus, cfg: &Config) -> Result<()> {
        self.can_move_to(target, cfg)?;
        self.enter_status(target);
        Ok(())
    }

    /// Terminal transition used by the conversion flow. Bypasses the
    /// board's drag rules; callers must have created the activity first.
    pub fn mark_converted(&mut self) {
        self.enter_status(BoardStatus::Converted);
    }

    fn enter_status(&mut self, target: BoardStatus) {
        let now = Utc::now();
        if let Some(last) = self.status_history.last_mut() {
            last.exited = Some(now);
        }
        self.status = target;
        self.updated_at = now;
        self.status_history.push(StatusChange {
            status: target,
            entered: now,
            exited: None,
        });
    }

    // ---------------------------------------------------------------------------
    // Pipeline workflow
    // ---------------------------------------------------------------------------

    /// Advance the capture pipeline phase. Forward-only.
    pub fn advance_phase(&mut self, target: PipelinePhase) -> Result<()> {
        if target <= self.phase {
            return Err(VercError::InvalidTransition {
                from: self.phase.to_string(),
                to: target.to_string(),
                reason: "pipeline phases are forward-only".to_string(),
            });
        }
        self.phase = target;
        self.updated_at = Utc::now();
        Ok(())
    }

    // ---------------------------------------------------------------------------
    // Triage metadata
    // ---------------------------------------------------------------------------

    pub fn classify(&mut self, tag: impl Into<String>) {
        self.tag = Some(tag.into());
        self.updated_at = Utc::now();
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
        self.updated_at = Utc::now();
    }

    pub fn is_converted(&self) -> bool {
        self.status == BoardStatus::Converted
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_config() -> Config {
        Config::new("test-site")
    }

    #[test]
    fn capture_defaults() {
        let record = Record::new("carlos", "crack in slab near column P4", RecordKind::Text);
        assert_eq!(record.status, BoardStatus::InTriage);
        assert_eq!(record.phase, PipelinePhase::Registered);
        assert_eq!(record.priority, Priority::Normal);
        assert!(record.tag.is_none());
        assert_eq!(record.status_history.len(), 1);
        assert_eq!(record.status_history[0].status, BoardStatus::InTriage);
    }

    #[test]
    fn create_and_load() {
        let dir = TempDir::new().unwrap();
        let record = Record::create(
            dir.path(),
            "ana",
            "rebar spacing sketch",
            RecordKind::Sketch,
            Some("obra-centro".to_string()),
            Some(Priority::High),
        )
        .unwrap();

        let loaded = Record::load(dir.path(), &record.id).unwrap();
        assert_eq!(loaded.author, "ana");
        assert_eq!(loaded.kind, RecordKind::Sketch);
        assert_eq!(loaded.priority, Priority::High);
        assert_eq!(loaded.project.as_deref(), Some("obra-centro"));
    }

    #[test]
    fn load_missing_record() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Record::load(dir.path(), "does-not-exist"),
            Err(VercError::RecordNotFound(_))
        ));
    }

    #[test]
    fn load_rejects_path_escapes() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Record::load(dir.path(), "../config"),
            Err(VercError::RecordNotFound(_))
        ));
    }

    #[test]
    fn move_updates_status_and_history() {
        let cfg = make_config();
        let mut record = Record::new("carlos", "note", RecordKind::Text);

        record.move_to(BoardStatus::Planned, &cfg).unwrap();
        assert_eq!(record.status, BoardStatus::Planned);
        assert_eq!(record.status_history.len(), 2);
        assert!(record.status_history[0].exited.is_some());
        assert_eq!(record.status_history[1].status, BoardStatus::Planned);
        assert!(record.status_history[1].exited.is_none());
    }

    #[test]
    fn any_to_any_moves_allowed() {
        // The board imposes no ordering: backwards and sideways moves are fine.
        let cfg = make_config();
        let mut record = Record::new("carlos", "note", RecordKind::Text);
        record.move_to(BoardStatus::Executing, &cfg).unwrap();
        record.move_to(BoardStatus::Draft, &cfg).unwrap();
        record.move_to(BoardStatus::Archived, &cfg).unwrap();
        record.move_to(BoardStatus::InTriage, &cfg).unwrap();
    }

    #[test]
    fn round_trip_move_preserves_other_fields() {
        let cfg = make_config();
        let mut record = Record::new("carlos", "waterproofing issue", RecordKind::Text);
        record.classify("structural");
        record.set_priority(Priority::Critical);

        let before = record.clone();
        record.move_to(BoardStatus::Planned, &cfg).unwrap();
        record.move_to(BoardStatus::InTriage, &cfg).unwrap();

        assert_eq!(record.status, before.status);
        assert_eq!(record.content, before.content);
        assert_eq!(record.kind, before.kind);
        assert_eq!(record.priority, before.priority);
        assert_eq!(record.tag, before.tag);
        assert_eq!(record.author, before.author);
        assert_eq!(record.phase, before.phase);
        assert_eq!(record.created_at, before.created_at);
    }

    #[test]
    fn drag_into_converted_rejected() {
        let cfg = make_config();
        let mut record = Record::new("carlos", "note", RecordKind::Text);
        assert!(matches!(
            record.move_to(BoardStatus::Converted, &cfg),
            Err(VercError::InvalidTransition { .. })
        ));
        assert_eq!(record.status, BoardStatus::InTriage);
    }

    #[test]
    fn converted_is_terminal() {
        let cfg = make_config();
        let mut record = Record::new("carlos", "note", RecordKind::Text);
        record.mark_converted();
        assert!(record.is_converted());
        assert!(record.move_to(BoardStatus::InTriage, &cfg).is_err());
    }

    #[test]
    fn disabled_column_rejected() {
        let mut cfg = make_config();
        cfg.board.columns = vec![BoardStatus::InTriage, BoardStatus::Planned];
        let mut record = Record::new("carlos", "note", RecordKind::Text);
        assert!(record.move_to(BoardStatus::Archived, &cfg).is_err());
        record.move_to(BoardStatus::Planned, &cfg).unwrap();
    }

    #[test]
    fn phase_advance_forward_only() {
        let mut record = Record::new("carlos", "note", RecordKind::Text);
        record.advance_phase(PipelinePhase::InTriage).unwrap();
        record.advance_phase(PipelinePhase::Ordered).unwrap();
        assert_eq!(record.phase, PipelinePhase::Ordered);

        assert!(matches!(
            record.advance_phase(PipelinePhase::Registered),
            Err(VercError::InvalidTransition { .. })
        ));
        assert!(record.advance_phase(PipelinePhase::Ordered).is_err());
    }

    #[test]
    fn phase_advance_does_not_touch_board_status() {
        let mut record = Record::new("carlos", "note", RecordKind::Text);
        record.advance_phase(PipelinePhase::Classified).unwrap();
        assert_eq!(record.status, BoardStatus::InTriage);
        assert_eq!(record.status_history.len(), 1);
    }

    #[test]
    fn list_sorts_by_creation() {
        let dir = TempDir::new().unwrap();
        let first = Record::create(dir.path(), "a", "one", RecordKind::Text, None, None).unwrap();
        let second = Record::create(dir.path(), "b", "two", RecordKind::Text, None, None).unwrap();

        let records = Record::list(dir.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, first.id);
        assert_eq!(records[1].id, second.id);
    }

    #[test]
    fn list_empty_when_uninitialized() {
        let dir = TempDir::new().unwrap();
        assert!(Record::list(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn record_yaml_roundtrip() {
        let mut record = Record::new("ana", "sketch of formwork", RecordKind::Sketch);
        record.classify("formwork");
        let yaml = serde_yaml::to_string(&record).unwrap();
        let parsed: Record = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.id, record.id);
        assert_eq!(parsed.tag.as_deref(), Some("formwork"));
        assert_eq!(parsed.status, BoardStatus::InTriage);
    }
}
