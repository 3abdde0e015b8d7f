//! HTTP surface of the theme slice.

use crate::Theme;
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use wsite_domain::constants::THEME_TAG;
use wsite_domain::theme::ThemeDocument;
use wsite_kernel::server::ApiState;

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(theme_handler))
}

#[derive(Debug, Default, Deserialize)]
struct ThemeQuery {
    scheme: Option<String>,
}

/// Resolved theme document.
///
/// An unrecognized `scheme` parameter falls back to the configured scheme,
/// then to the theme asset's own values; it never errors.
#[utoipa::path(
    get,
    path = "/api/theme",
    params(("scheme" = Option<String>, Query, description = "Color scheme name override")),
    responses(
        (status = OK, description = "Resolved theme document"),
        (status = INTERNAL_SERVER_ERROR, description = "Theme slice unavailable"),
    ),
    tag = THEME_TAG,
)]
async fn theme_handler(
    State(state): State<ApiState>,
    query: Result<Query<ThemeQuery>, QueryRejection>,
) -> Result<Json<ThemeDocument>, ThemeRouteError> {
    let theme = state.try_get_slice::<Theme>().map_err(ThemeRouteError::internal)?;

    let requested = query.as_ref().ok().and_then(|q| q.0.scheme.as_deref());
    Ok(Json(theme.resolved(requested)))
}

#[derive(Debug)]
struct ThemeRouteError(StatusCode);

impl ThemeRouteError {
    fn internal(err: impl std::fmt::Display) -> Self {
        error!(error = %err, "Theme route failure");
        Self(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ThemeRouteError {
    fn into_response(self) -> Response {
        (self.0, Json(json!({ "error": "internal error" }))).into_response()
    }
}
