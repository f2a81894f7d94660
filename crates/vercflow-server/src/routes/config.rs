use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/config — site and board configuration.
pub async fn get_config(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let config = vercflow_core::config::Config::load(&root)?;
        Ok::<_, vercflow_core::VercError>(serde_json::json!({
            "version": config.version,
            "site": {
                "name": config.site.name,
                "description": config.site.description,
            },
            "board": {
                "columns": config.board.columns,
            },
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
