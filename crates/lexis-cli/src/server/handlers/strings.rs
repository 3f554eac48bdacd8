//! Handlers for creating, fetching, listing and deleting string records.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use lexis::{filter, AnalyzedString, FilterSet};
use serde::{Deserialize, Serialize};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Request body for creating a record.
#[derive(Deserialize)]
pub struct CreateRequest {
    pub value: String,
}

/// Response envelope for list queries.
#[derive(Serialize)]
pub struct ListResponse {
    pub data: Vec<AnalyzedString>,
    pub count: usize,
    pub filters_applied: FilterSet,
}

/// POST /strings
pub async fn create_string(
    State(state): State<AppState>,
    Json(req): Json<CreateRequest>,
) -> Result<(StatusCode, Json<AnalyzedString>), ApiError> {
    let record = state.store.create(&req.value)?;
    state.save_if_auto()?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /strings/{value}
pub async fn get_string(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<Json<AnalyzedString>, ApiError> {
    match state.store.get_by_value(&value) {
        Some(record) => Ok(Json(record)),
        None => Err(ApiError::NotFound(format!("String not found: '{}'", value))),
    }
}

/// GET /strings
pub async fn list_strings(
    State(state): State<AppState>,
    Query(filters): Query<FilterSet>,
) -> Json<ListResponse> {
    let data = filter(&state.store.enumerate(), &filters);

    Json(ListResponse {
        count: data.len(),
        data,
        filters_applied: filters,
    })
}

/// DELETE /strings/{value}
pub async fn delete_string(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_by_value(&value)?;
    state.save_if_auto()?;

    Ok(StatusCode::NO_CONTENT)
}
