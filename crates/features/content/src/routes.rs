//! HTTP surface of the content slice.

use crate::{Content, RequestContext};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{Value, json};
use tracing::error;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use wsite_domain::constants::CONTENT_TAG;
use wsite_domain::features::feature_config;
use wsite_kernel::server::ApiState;

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(content_handler)).routes(routes!(features_handler))
}

/// Resolved content document for the current request.
///
/// Query parameters from the recognized set override their mapped content
/// leaves; a malformed query string degrades to "no overrides" rather than
/// erroring.
#[utoipa::path(
    get,
    path = "/api/content",
    responses(
        (status = OK, description = "Resolved content document"),
        (status = INTERNAL_SERVER_ERROR, description = "Content slice unavailable"),
    ),
    tag = CONTENT_TAG,
)]
async fn content_handler(
    State(state): State<ApiState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let content = state.try_get_slice::<Content>().map_err(ApiError::internal)?;

    let context =
        query.map_or(RequestContext::Static, |Query(pairs)| RequestContext::Query(pairs));

    let resolved = content.resolver().resolve(&context);
    Ok(Json(resolved.as_value().clone()))
}

/// The total feature flag set for this site's configured package tier.
#[utoipa::path(
    get,
    path = "/api/features",
    responses((status = OK, description = "Feature flags resolved from the package tier")),
    tag = CONTENT_TAG,
)]
async fn features_handler(State(state): State<ApiState>) -> Json<Value> {
    let tier = state.config.site.tier;
    let config = feature_config(tier);
    Json(json!({ "tier": tier, "features": config }))
}

/// Boundary error: logged once, surfaced as a generic JSON error body.
#[derive(Debug)]
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub(crate) fn internal(err: impl std::fmt::Display) -> Self {
        error!(error = %err, "Content route failure");
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: "internal error".to_owned() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
