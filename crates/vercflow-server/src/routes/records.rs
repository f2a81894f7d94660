use axum::extract::{Path, State};
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/records — list all records.
pub async fn list_records(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let records = vercflow_core::record::Record::list(&root)?;
        let list: Vec<serde_json::Value> = records
            .iter()
            .map(|r| {
                serde_json::json!({
                    "id": r.id,
                    "author": r.author,
                    "project": r.project,
                    "kind": r.kind,
                    "status": r.status,
                    "phase": r.phase,
                    "priority": r.priority,
                    "tag": r.tag,
                    "updated_at": r.updated_at,
                })
            })
            .collect();
        Ok::<_, vercflow_core::VercError>(serde_json::json!(list))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// GET /api/records/:id — full record detail.
pub async fn get_record(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let r = vercflow_core::record::Record::load(&root, &id)?;
        Ok::<_, vercflow_core::VercError>(serde_json::json!({
            "id": r.id,
            "author": r.author,
            "project": r.project,
            "content": r.content,
            "kind": r.kind,
            "status": r.status,
            "phase": r.phase,
            "priority": r.priority,
            "tag": r.tag,
            "created_at": r.created_at,
            "updated_at": r.updated_at,
            "status_history": r.status_history,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct CaptureBody {
    pub author: String,
    pub content: String,
    pub kind: String,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
}

/// POST /api/records — capture a new record.
pub async fn create_record(
    State(app): State<AppState>,
    Json(body): Json<CaptureBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let kind: vercflow_core::types::RecordKind = body.kind.parse()?;
        let priority = body
            .priority
            .map(|p| p.parse::<vercflow_core::types::Priority>())
            .transpose()?;

        let r = vercflow_core::record::Record::create(
            &root,
            body.author,
            body.content,
            kind,
            body.project,
            priority,
        )?;

        Ok::<_, vercflow_core::VercError>(serde_json::json!({
            "id": r.id,
            "status": r.status,
            "phase": r.phase,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct MoveBody {
    pub status: String,
}

/// PATCH /api/records/:id — move a record to another board column.
pub async fn move_record(
    State(app): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<MoveBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let config = vercflow_core::config::Config::load(&root)?;
        let mut record = vercflow_core::record::Record::load(&root, &id)?;
        let target: vercflow_core::types::BoardStatus = body.status.parse()?;

        record.move_to(target, &config)?;
        record.save(&root)?;

        Ok::<_, vercflow_core::VercError>(serde_json::json!({
            "id": record.id,
            "status": record.status,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct ClassifyBody {
    pub tag: String,
}

/// POST /api/records/:id/classify — set the classification tag.
pub async fn classify_record(
    State(app): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ClassifyBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut record = vercflow_core::record::Record::load(&root, &id)?;
        record.classify(body.tag);
        record.save(&root)?;

        Ok::<_, vercflow_core::VercError>(serde_json::json!({
            "id": record.id,
            "tag": record.tag,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct PriorityBody {
    pub priority: String,
}

/// POST /api/records/:id/priority — set the priority.
pub async fn prioritize_record(
    State(app): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<PriorityBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut record = vercflow_core::record::Record::load(&root, &id)?;
        let priority: vercflow_core::types::Priority = body.priority.parse()?;
        record.set_priority(priority);
        record.save(&root)?;

        Ok::<_, vercflow_core::VercError>(serde_json::json!({
            "id": record.id,
            "priority": record.priority,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct AdvanceBody {
    pub phase: String,
}

/// POST /api/records/:id/advance — advance the capture pipeline phase.
pub async fn advance_record(
    State(app): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<AdvanceBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut record = vercflow_core::record::Record::load(&root, &id)?;
        let target: vercflow_core::types::PipelinePhase = body.phase.parse()?;
        record.advance_phase(target)?;
        record.save(&root)?;

        Ok::<_, vercflow_core::VercError>(serde_json::json!({
            "id": record.id,
            "phase": record.phase,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
