//! Handler for natural-language filter queries.

use axum::{
    extract::{Query, State},
    Json,
};
use lexis::{filter, translate, AnalyzedString, FilterSet};
use serde::{Deserialize, Serialize};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Query parameters for the natural-language endpoint.
#[derive(Deserialize)]
pub struct NaturalLanguageParams {
    pub query: String,
}

/// How the free-text query was interpreted.
#[derive(Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FilterSet,
}

/// Response envelope for natural-language queries.
#[derive(Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<AnalyzedString>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

/// GET /strings/filter-by-natural-language
pub async fn filter_by_natural_language(
    State(state): State<AppState>,
    Query(params): Query<NaturalLanguageParams>,
) -> Result<Json<NaturalLanguageResponse>, ApiError> {
    let filters = translate(&params.query)?;
    let data = filter(&state.store.enumerate(), &filters);

    Ok(Json(NaturalLanguageResponse {
        count: data.len(),
        data,
        interpreted_query: InterpretedQuery {
            original: params.query,
            parsed_filters: filters,
        },
    }))
}
