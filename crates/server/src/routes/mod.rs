use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};
use shared::{try_cut_polygon, CutOutcome, CutRequest, CutResult};
use uuid::Uuid;

use crate::error::ApiError;
use crate::storage::Cut;
use crate::AppState;

/// Health check
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Run the cut and keep it only if it split the polygon in two
fn run_cut(request: &CutRequest) -> Result<CutResult, ApiError> {
    let outcome = try_cut_polygon(request);
    let info = outcome.info();
    match outcome {
        CutOutcome::Successful { .. } => Ok(CutResult::from(outcome)),
        CutOutcome::NoCut
        | CutOutcome::LineVertexTangent
        | CutOutcome::LineTangentToSegment
        | CutOutcome::CutPlaneNotOrthogonal
        | CutOutcome::PolygonNotPlanar
        | CutOutcome::PolygonNotConvex
        | CutOutcome::PolygonTooFewVertices => {
            tracing::warn!("Cut rejected: {}", info);
            Err(ApiError::Cut(info))
        }
    }
}

/// List all stored cuts
pub async fn list_cuts(State(state): State<AppState>) -> Result<Json<Vec<Cut>>, ApiError> {
    Ok(Json(state.store.list()?))
}

/// Cut a polygon and store the result under a new id
pub async fn create_cut(
    State(state): State<AppState>,
    Json(request): Json<CutRequest>,
) -> Result<Json<Uuid>, ApiError> {
    let result = run_cut(&request)?;
    let id = Uuid::new_v4();
    state.store.insert(Cut {
        id,
        request,
        result,
    })?;
    tracing::info!("Stored cut {}", id);
    Ok(Json(id))
}

/// Re-run a cut with a new request and replace the stored record
pub async fn replace_cut(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CutRequest>,
) -> Result<Json<Uuid>, ApiError> {
    state.store.get(id)?;
    let result = run_cut(&request)?;
    state.store.replace(Cut {
        id,
        request,
        result,
    })?;
    tracing::info!("Replaced cut {}", id);
    Ok(Json(id))
}

/// Fetch a cut by id
pub async fn get_cut(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Cut>, ApiError> {
    Ok(Json(state.store.get(id)?))
}

/// Delete a cut by id
pub async fn delete_cut(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    state.store.remove(id)?;
    tracing::info!("Deleted cut {}", id);
    Ok(Json(()))
}
