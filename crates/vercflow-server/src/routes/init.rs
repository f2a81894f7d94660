use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

#[derive(serde::Deserialize)]
pub struct InitBody {
    #[serde(default)]
    pub name: Option<String>,
}

/// POST /api/init — create the `.vercflow/` tree. Idempotent.
pub async fn init_workspace(
    State(app): State<AppState>,
    Json(body): Json<InitBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let name = body.name.unwrap_or_else(|| {
            root.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "site".to_string())
        });
        let config = vercflow_core::config::Config::init(&root, &name)?;
        Ok::<_, vercflow_core::VercError>(serde_json::json!({
            "site": config.site.name,
            "version": config.version,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
