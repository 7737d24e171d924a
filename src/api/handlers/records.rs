use crate::api::models::{
    parse_body, CreateRecordRequest, CreateRecordResponse, ListRecordsQuery, MessageResponse,
    UpdateRecordRequest,
};
use crate::core::error::{RecordError, Result};
use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use super::AppState;

/// Handler for POST /records - Create a record
///
/// The body is taken as raw bytes so malformed or missing JSON ends up as a
/// 400 with the usual error envelope.
pub async fn create_record(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let request = parse_body::<CreateRecordRequest>(&body)?;
    let id = state.record_service.create_record(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateRecordResponse {
            message: "Record added".to_string(),
            id,
        }),
    ))
}

/// Handler for GET /records - List records, optionally filtered by status
///
/// The query is read as raw pairs so a repeated `status` uses its first value.
pub async fn list_records(
    State(state): State<AppState>,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse> {
    let Query(pairs) = query
        .map_err(|e| RecordError::ValidationError(format!("Invalid query string: {}", e)))?;
    let query = ListRecordsQuery::from_pairs(pairs);

    let listing = state
        .record_service
        .list_records(query.status.as_deref())
        .await?;

    Ok(Json(listing))
}

/// Handler for PUT /records/:id - Partially update a record
pub async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let request = parse_body::<UpdateRecordRequest>(&body)?;
    state.record_service.update_record(&id, request).await?;

    Ok(Json(MessageResponse::new("Record updated")))
}

/// Handler for DELETE /records/:id - Delete a record
pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    state.record_service.delete_record(&id).await?;

    Ok(Json(MessageResponse::new("Record deleted")))
}
