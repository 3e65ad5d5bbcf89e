pub mod submissions;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use common::types::Ping;
use service::submissions::{SubmissionRepository, SubmissionService};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::ApiDoc;

#[derive(Clone)]
pub struct ServerState {
    pub submissions: SubmissionService,
}

impl ServerState {
    pub fn new(repo: Arc<dyn SubmissionRepository>) -> Self {
        Self { submissions: SubmissionService::new(repo) }
    }
}

#[utoipa::path(get, path = "/ping", tag = "health", responses((status = 200, description = "Alive", body = crate::openapi::PingDoc)))]
pub async fn ping() -> Json<Ping> {
    Json(Ping::ok())
}

/// Build the application router: liveness, the five submission routes and API docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/ping", get(ping))
        .route("/submit", post(submissions::submit))
        .route("/read", get(submissions::read))
        .route("/edit/:id", put(submissions::edit))
        .route("/delete/:id", delete(submissions::remove))
        .route("/search", get(submissions::search));

    let docs = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());

    api.merge(docs)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
