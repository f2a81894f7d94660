use crate::record::Record;
use crate::types::BoardStatus;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Board view
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct BoardColumn {
    pub status: BoardStatus,
    pub records: Vec<Record>,
}

#[derive(Debug, Serialize)]
pub struct Board {
    pub columns: Vec<BoardColumn>,
}

/// Group records into columns, one per configured status, preserving the
/// input order within each column. Records whose status column is not in
/// `columns` are dropped from the view (they still exist in the store).
pub fn group(records: Vec<Record>, columns: &[BoardStatus]) -> Board {
    let mut grouped: Vec<BoardColumn> = columns
        .iter()
        .map(|&status| BoardColumn {
            status,
            records: Vec::new(),
        })
        .collect();

    for record in records {
        if let Some(col) = grouped.iter_mut().find(|c| c.status == record.status) {
            col.records.push(record);
        }
    }

    Board { columns: grouped }
}

/// Human-readable summary: "3 in_triage, 1 planned, 2 converted"
pub fn summarize(board: &Board) -> String {
    let parts: Vec<String> = board
        .columns
        .iter()
        .filter(|c| !c.records.is_empty())
        .map(|c| format!("{} {}", c.records.len(), c.status))
        .collect();
    if parts.is_empty() {
        "empty board".to_string()
    } else {
        parts.join(", ")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::types::RecordKind;

    fn record(author: &str) -> Record {
        Record::new(author, "note", RecordKind::Text)
    }

    #[test]
    fn groups_by_status() {
        let cfg = Config::new("site");
        let mut moved = record("ana");
        moved.move_to(BoardStatus::Planned, &cfg).unwrap();

        let board = group(vec![record("carlos"), moved], &cfg.board.columns);
        assert_eq!(board.columns.len(), 6);

        let triage = board
            .columns
            .iter()
            .find(|c| c.status == BoardStatus::InTriage)
            .unwrap();
        assert_eq!(triage.records.len(), 1);
        assert_eq!(triage.records[0].author, "carlos");

        let planned = board
            .columns
            .iter()
            .find(|c| c.status == BoardStatus::Planned)
            .unwrap();
        assert_eq!(planned.records.len(), 1);
    }

    #[test]
    fn converted_record_leaves_its_old_column() {
        let cfg = Config::new("site");
        let mut r = record("carlos");
        let id = r.id.clone();
        r.mark_converted();

        let board = group(vec![r], &cfg.board.columns);
        let triage = board
            .columns
            .iter()
            .find(|c| c.status == BoardStatus::InTriage)
            .unwrap();
        assert!(triage.records.iter().all(|r| r.id != id));

        let converted = board
            .columns
            .iter()
            .find(|c| c.status == BoardStatus::Converted)
            .unwrap();
        assert_eq!(converted.records.len(), 1);
    }

    #[test]
    fn summarize_counts() {
        let cfg = Config::new("site");
        let board = group(vec![record("a"), record("b")], &cfg.board.columns);
        assert_eq!(summarize(&board), "2 in_triage");
    }

    #[test]
    fn summarize_empty() {
        let cfg = Config::new("site");
        let board = group(Vec::new(), &cfg.board.columns);
        assert_eq!(summarize(&board), "empty board");
    }
}
