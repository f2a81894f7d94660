use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/professionals — reference list for the conversion form.
pub async fn list_professionals(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let professionals = vercflow_core::professional::Professional::list(&root)?;
        let list: Vec<serde_json::Value> = professionals
            .iter()
            .map(|p| {
                serde_json::json!({
                    "slug": p.slug,
                    "name": p.name,
                    "trade": p.trade,
                })
            })
            .collect();
        Ok::<_, vercflow_core::VercError>(serde_json::json!(list))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct CreateProfessionalBody {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub trade: Option<String>,
}

/// POST /api/professionals — create a professional.
pub async fn create_professional(
    State(app): State<AppState>,
    Json(body): Json<CreateProfessionalBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let p = vercflow_core::professional::Professional::create(
            &root,
            body.slug,
            body.name,
            body.trade,
        )?;
        Ok::<_, vercflow_core::VercError>(serde_json::json!({
            "slug": p.slug,
            "name": p.name,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
