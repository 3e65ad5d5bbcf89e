use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use common::types::{CreatedResponse, MessageResponse};
use serde::Deserialize;
use service::submissions::{Submission, SubmissionPayload};
use tracing::debug;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReadQuery {
    /// Zero-based position in the stored collection.
    pub index: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    pub email: Option<String>,
}

/// A body that does not decode as a JSON object counts as one with no fields.
fn payload_or_empty(body: Result<Json<SubmissionPayload>, JsonRejection>) -> SubmissionPayload {
    match body {
        Ok(Json(p)) => p,
        Err(rejection) => {
            debug!(reason = %rejection, "request body not usable as submission");
            SubmissionPayload::default()
        }
    }
}

#[utoipa::path(
    post, path = "/submit", tag = "submissions",
    request_body = crate::openapi::SubmissionInputDoc,
    responses(
        (status = 201, description = "Saved", body = crate::openapi::CreatedDoc),
        (status = 400, description = "A required field is missing", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn submit(
    State(state): State<ServerState>,
    body: Result<Json<SubmissionPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), JsonApiError> {
    let created = state.submissions.create(&payload_or_empty(body)).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse { message: "Submission saved successfully".into(), id: created.id }),
    ))
}

#[utoipa::path(
    get, path = "/read", tag = "submissions",
    params(ReadQuery),
    responses(
        (status = 200, description = "Submission at that position", body = crate::openapi::SubmissionDoc),
        (status = 400, description = "Missing index", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Position out of range", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn read(
    State(state): State<ServerState>,
    Query(q): Query<ReadQuery>,
) -> Result<Json<Submission>, JsonApiError> {
    Ok(Json(state.submissions.read_at(q.index.as_deref()).await?))
}

#[utoipa::path(
    put, path = "/edit/{id}", tag = "submissions",
    params(("id" = String, Path, description = "Submission id")),
    request_body = crate::openapi::SubmissionInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::MessageDoc),
        (status = 400, description = "Missing field or invalid id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "No submission with that id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn edit(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: Result<Json<SubmissionPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    state.submissions.update(&id, &payload_or_empty(body)).await?;
    Ok(Json(MessageResponse::new("Submission updated successfully")))
}

#[utoipa::path(
    delete, path = "/delete/{id}", tag = "submissions",
    params(("id" = String, Path, description = "Submission id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 400, description = "Invalid id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "No submission with that id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    state.submissions.delete(&id).await?;
    Ok(Json(MessageResponse::new("Submission deleted successfully")))
}

#[utoipa::path(
    get, path = "/search", tag = "submissions",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching submissions in stored order", body = [crate::openapi::SubmissionDoc]),
        (status = 400, description = "Missing email", body = crate::openapi::ErrorDoc),
        (status = 404, description = "No matches", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn search(
    State(state): State<ServerState>,
    Query(q): Query<SearchQuery>,
) -> Result<Json<Vec<Submission>>, JsonApiError> {
    Ok(Json(state.submissions.search_by_email(q.email.as_deref()).await?))
}
