//! HTTP request handlers.

use axum::{extract::State, Json};
use uuid::Uuid;

use crate::api::types::*;
use crate::engine::guide;
use crate::error::{AchtungError, AchtungResult};
use crate::logging::fingerprint;
use crate::AppState;

/// Analyze a text for privacy risk.
///
/// POST /analyze
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis complete", body = AnalyzeResponse),
        (status = 400, description = "Invalid request")
    ),
    tag = "analysis"
)]
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    let text = request.text.unwrap_or_default();
    let request_id = Uuid::new_v4();

    let report = state.analyzer.analyze(&text);

    tracing::info!(
        request_id = %request_id,
        text_len = text.len(),
        text_fingerprint = %fingerprint(&text),
        risk_tier = %report.tier,
        matches = ?report.matches.terms(),
        howto = report.howto,
        "Text analyzed"
    );

    Json(AnalyzeResponse::from(report))
}

/// Analyze up to 20 texts in one request.
///
/// POST /analyze/batch
#[utoipa::path(
    post,
    path = "/analyze/batch",
    request_body = BatchAnalyzeRequest,
    responses(
        (status = 200, description = "Batch analysis complete", body = BatchAnalyzeResponse),
        (status = 400, description = "Empty or oversized batch")
    ),
    tag = "analysis"
)]
pub async fn analyze_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchAnalyzeRequest>,
) -> AchtungResult<Json<BatchAnalyzeResponse>> {
    if request.texts.is_empty() {
        return Err(AchtungError::BadRequest(
            "At least one text is required".to_string(),
        ));
    }
    if request.texts.len() > MAX_BATCH_TEXTS {
        return Err(AchtungError::BadRequest(format!(
            "At most {} texts are allowed, got {}",
            MAX_BATCH_TEXTS,
            request.texts.len()
        )));
    }

    let request_id = Uuid::new_v4();
    let mut critical_count = 0;

    let results: Vec<BatchResult> = request
        .texts
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let (id, text) = item.into_parts(index);
            let report = state.analyzer.analyze(&text);
            if report.tier.is_critical() {
                critical_count += 1;
            }
            BatchResult {
                id,
                result: AnalyzeResponse::from(report),
            }
        })
        .collect();

    tracing::info!(
        request_id = %request_id,
        total = results.len(),
        critical_count,
        "Batch analyzed"
    );

    Ok(Json(BatchAnalyzeResponse {
        total: results.len(),
        results,
        critical_count,
    }))
}

/// Rewrite a text into a safer equivalent.
///
/// POST /rewrite
#[utoipa::path(
    post,
    path = "/rewrite",
    request_body = RewriteRequest,
    responses(
        (status = 200, description = "Rewritten text", body = RewriteResponse),
        (status = 400, description = "No text given"),
        (status = 502, description = "Rewrite service failed"),
        (status = 503, description = "Rewriting not configured"),
        (status = 504, description = "Rewrite service timed out")
    ),
    tag = "rewrite"
)]
pub async fn rewrite(
    State(state): State<AppState>,
    Json(request): Json<RewriteRequest>,
) -> AchtungResult<Json<RewriteResponse>> {
    let text = request.text.unwrap_or_default();
    if text.trim().is_empty() {
        return Err(AchtungError::BadRequest("No text given".to_string()));
    }

    let request_id = Uuid::new_v4();
    tracing::info!(
        request_id = %request_id,
        text_len = text.len(),
        text_fingerprint = %fingerprint(&text),
        "Rewriting text"
    );

    let rewritten = state.rewriter.rewrite(&text).await?;

    tracing::info!(
        request_id = %request_id,
        rewritten_len = rewritten.len(),
        "Rewrite complete"
    );

    Ok(Json(RewriteResponse { rewritten }))
}

/// Fetch the secure-sharing guide.
///
/// GET /howto
#[utoipa::path(
    get,
    path = "/howto",
    responses(
        (status = 200, description = "Secure-sharing guide", body = HowtoResponse)
    ),
    tag = "guide"
)]
pub async fn howto() -> Json<HowtoResponse> {
    Json(HowtoResponse {
        howto: guide::secure_sharing_guide().to_string(),
    })
}

/// Health check endpoint.
///
/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let rewrite = if state.rewriter.is_enabled() {
        "enabled"
    } else {
        "disabled"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        rewrite: rewrite.to_string(),
        taxonomy_terms: state.analyzer.taxonomy_terms(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
