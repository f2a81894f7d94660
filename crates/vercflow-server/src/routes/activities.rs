use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

#[derive(serde::Deserialize)]
pub struct ConvertBody {
    pub record: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub project: String,
    #[serde(default)]
    pub professional: Option<String>,
    #[serde(default)]
    pub planned_value: f64,
}

/// POST /api/activities — convert a record into a formal activity.
///
/// Side effect: the source record's status becomes `converted`.
pub async fn convert_record(
    State(app): State<AppState>,
    Json(body): Json<ConvertBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let req = vercflow_core::convert::ConversionRequest {
            title: body.title,
            description: body.description,
            project: body.project,
            professional: body.professional,
            planned_value: body.planned_value,
        };
        let activity = vercflow_core::convert::formalize(&root, &body.record, &req)?;

        Ok::<_, vercflow_core::VercError>(serde_json::json!({
            "id": activity.id,
            "title": activity.title,
            "project": activity.project,
            "professional": activity.professional,
            "planned_value": activity.planned_value,
            "source_record": activity.source_record,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// GET /api/activities — list all activities.
pub async fn list_activities(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let activities = vercflow_core::activity::Activity::list(&root)?;
        let list: Vec<serde_json::Value> = activities
            .iter()
            .map(|a| {
                serde_json::json!({
                    "id": a.id,
                    "title": a.title,
                    "description": a.description,
                    "project": a.project,
                    "professional": a.professional,
                    "planned_value": a.planned_value,
                    "source_record": a.source_record,
                    "created_at": a.created_at,
                })
            })
            .collect();
        Ok::<_, vercflow_core::VercError>(serde_json::json!(list))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
