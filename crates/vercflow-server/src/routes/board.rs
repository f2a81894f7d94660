use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/board — records grouped into columns by status.
pub async fn get_board(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let config = vercflow_core::config::Config::load(&root)?;
        let records = vercflow_core::record::Record::list(&root)?;
        let board = vercflow_core::board::group(records, &config.board.columns);

        let columns: Vec<serde_json::Value> = board
            .columns
            .iter()
            .map(|c| {
                serde_json::json!({
                    "status": c.status,
                    "count": c.records.len(),
                    "records": c.records.iter().map(|r| {
                        serde_json::json!({
                            "id": r.id,
                            "author": r.author,
                            "content": r.content,
                            "kind": r.kind,
                            "priority": r.priority,
                            "tag": r.tag,
                        })
                    }).collect::<Vec<_>>(),
                })
            })
            .collect();

        Ok::<_, vercflow_core::VercError>(serde_json::json!({
            "summary": vercflow_core::board::summarize(&board),
            "columns": columns,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
