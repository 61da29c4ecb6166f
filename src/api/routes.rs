//! Route definitions for the API.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::AppState;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::analyze,
        handlers::analyze_batch,
        handlers::rewrite,
        handlers::howto,
        handlers::health_check,
    ),
    components(schemas(
        crate::api::types::AnalyzeRequest,
        crate::api::types::AnalyzeResponse,
        crate::api::types::BatchItem,
        crate::api::types::BatchAnalyzeRequest,
        crate::api::types::BatchResult,
        crate::api::types::BatchAnalyzeResponse,
        crate::api::types::RewriteRequest,
        crate::api::types::RewriteResponse,
        crate::api::types::HowtoResponse,
        crate::api::types::HealthResponse,
    )),
    tags(
        (name = "analysis", description = "Privacy risk analysis"),
        (name = "rewrite", description = "Guided rewriting"),
        (name = "guide", description = "Secure-sharing guide"),
        (name = "health", description = "Health and status endpoints")
    ),
    info(
        title = "Achtung Core API",
        version = "0.1.0",
        description = "Privacy risk gateway - warns users before sensitive details are shared publicly",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the API router.
///
/// Paths match the existing browser consumer, so they carry no version prefix.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Analysis
        .route("/analyze", post(handlers::analyze))
        .route("/analyze/batch", post(handlers::analyze_batch))
        // Rewriting and guide
        .route("/rewrite", post(handlers::rewrite))
        .route("/howto", get(handlers::howto))
        // Health
        .route("/health", get(handlers::health_check))
        .with_state(state)
        // OpenAPI docs
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
