use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// BoardStatus
// ---------------------------------------------------------------------------

/// Column a record occupies on the triage board.
///
/// Manual moves form a complete graph over these values, with two
/// exceptions enforced by `Record::move_to`: `converted` is entered only
/// through the conversion flow and is never left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardStatus {
    InTriage,
    Draft,
    Planned,
    Executing,
    Converted,
    Archived,
}

impl BoardStatus {
    pub fn all() -> &'static [BoardStatus] {
        &[
            BoardStatus::InTriage,
            BoardStatus::Draft,
            BoardStatus::Planned,
            BoardStatus::Executing,
            BoardStatus::Converted,
            BoardStatus::Archived,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BoardStatus::InTriage => "in_triage",
            BoardStatus::Draft => "draft",
            BoardStatus::Planned => "planned",
            BoardStatus::Executing => "executing",
            BoardStatus::Converted => "converted",
            BoardStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for BoardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BoardStatus {
    type Err = crate::error::VercError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_triage" => Ok(BoardStatus::InTriage),
            "draft" => Ok(BoardStatus::Draft),
            "planned" => Ok(BoardStatus::Planned),
            "executing" => Ok(BoardStatus::Executing),
            "converted" => Ok(BoardStatus::Converted),
            "archived" => Ok(BoardStatus::Archived),
            _ => Err(crate::error::VercError::InvalidStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// PipelinePhase
// ---------------------------------------------------------------------------

/// Position of a record in the capture pipeline.
///
/// Independent of the board workflow: progression here is strictly
/// forward-only, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelinePhase {
    Registered,
    InTriage,
    Classified,
    Ordered,
    Validated,
    Distributed,
}

impl PipelinePhase {
    pub fn all() -> &'static [PipelinePhase] {
        &[
            PipelinePhase::Registered,
            PipelinePhase::InTriage,
            PipelinePhase::Classified,
            PipelinePhase::Ordered,
            PipelinePhase::Validated,
            PipelinePhase::Distributed,
        ]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<PipelinePhase> {
        let all = PipelinePhase::all();
        let i = self.index();
        all.get(i + 1).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PipelinePhase::Registered => "registered",
            PipelinePhase::InTriage => "in_triage",
            PipelinePhase::Classified => "classified",
            PipelinePhase::Ordered => "ordered",
            PipelinePhase::Validated => "validated",
            PipelinePhase::Distributed => "distributed",
        }
    }
}

impl fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PipelinePhase {
    type Err = crate::error::VercError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "registered" => Ok(PipelinePhase::Registered),
            "in_triage" => Ok(PipelinePhase::InTriage),
            "classified" => Ok(PipelinePhase::Classified),
            "ordered" => Ok(PipelinePhase::Ordered),
            "validated" => Ok(PipelinePhase::Validated),
            "distributed" => Ok(PipelinePhase::Distributed),
            _ => Err(crate::error::VercError::InvalidPhase(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// RecordKind
// ---------------------------------------------------------------------------

/// How a record was captured in the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Sketch,
    Text,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Sketch => "sketch",
            RecordKind::Text => "text",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RecordKind {
    type Err = crate::error::VercError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sketch" => Ok(RecordKind::Sketch),
            "text" => Ok(RecordKind::Text),
            _ => Err(crate::error::VercError::InvalidKind(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Normal,
    High,
    Critical,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Normal
    }
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Normal => "normal",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = crate::error::VercError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Priority::Normal),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            _ => Err(crate::error::VercError::InvalidPriority(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn phase_ordering() {
        assert!(PipelinePhase::Registered < PipelinePhase::InTriage);
        assert!(PipelinePhase::Classified < PipelinePhase::Ordered);
        assert!(PipelinePhase::Distributed > PipelinePhase::Validated);
    }

    #[test]
    fn phase_next() {
        assert_eq!(
            PipelinePhase::Registered.next(),
            Some(PipelinePhase::InTriage)
        );
        assert_eq!(PipelinePhase::Ordered.next(), Some(PipelinePhase::Validated));
        assert_eq!(PipelinePhase::Distributed.next(), None);
    }

    #[test]
    fn phase_roundtrip() {
        for phase in PipelinePhase::all() {
            let parsed = PipelinePhase::from_str(phase.as_str()).unwrap();
            assert_eq!(*phase, parsed);
        }
    }

    #[test]
    fn status_roundtrip() {
        for status in BoardStatus::all() {
            let parsed = BoardStatus::from_str(status.as_str()).unwrap();
            assert_eq!(*status, parsed);
        }
    }

    #[test]
    fn status_rejects_values_outside_the_set() {
        for s in ["done", "registered_", "", "IN_TRIAGE", "triage"] {
            assert!(BoardStatus::from_str(s).is_err(), "expected invalid: {s}");
        }
    }

    #[test]
    fn the_two_vocabularies_are_distinct() {
        // "in_triage" is the only value the two workflows share.
        assert!(BoardStatus::from_str("registered").is_err());
        assert!(PipelinePhase::from_str("planned").is_err());
        assert!(BoardStatus::from_str("in_triage").is_ok());
        assert!(PipelinePhase::from_str("in_triage").is_ok());
    }

    #[test]
    fn kind_and_priority_parse() {
        assert_eq!(RecordKind::from_str("sketch").unwrap(), RecordKind::Sketch);
        assert!(RecordKind::from_str("photo").is_err());
        assert_eq!(Priority::from_str("critical").unwrap(), Priority::Critical);
        assert!(Priority::from_str("urgent").is_err());
        assert_eq!(Priority::default(), Priority::Normal);
    }
}
