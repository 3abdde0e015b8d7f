//! HTTP surface of the editor slice.

use crate::EditorError;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::{error, info};
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use wsite_assets::AssetError;
use wsite_domain::constants::{EDITOR_TAG, HERO, HERO_TYPE};
use wsite_kernel::server::ApiState;

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(update_hero_handler))
}

/// Hero update request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeroUpdate {
    /// New hero presentation type
    hero_type: String,
    /// Plain file name of the content document to rewrite
    content_file: String,
}

/// Hero update response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
struct HeroUpdated {
    success: bool,
    hero_type: String,
    content_file: String,
}

/// Rewrites `hero.type` of a named content document in place.
///
/// The file must already exist under the content directory; nothing is ever
/// created here.
#[utoipa::path(
    post,
    path = "/api/hero",
    request_body = HeroUpdate,
    responses(
        (status = OK, description = "Hero type rewritten", body = HeroUpdated),
        (status = BAD_REQUEST, description = "Invalid file name or empty hero type"),
        (status = NOT_FOUND, description = "Content file not found"),
        (status = INTERNAL_SERVER_ERROR, description = "File or JSON failure"),
    ),
    tag = EDITOR_TAG,
)]
async fn update_hero_handler(
    State(state): State<ApiState>,
    Json(request): Json<HeroUpdate>,
) -> Result<Json<HeroUpdated>, EditorRouteError> {
    let hero_type = request.hero_type.trim();
    if hero_type.is_empty() {
        return Err(EditorError::EmptyHeroType.into());
    }

    let hero_type = hero_type.to_owned();
    let applied = hero_type.clone();
    state
        .assets
        .rewrite(&request.content_file, move |document| set_hero_type(document, &applied))
        .await
        .map_err(EditorError::from)?;

    info!(file = %request.content_file, hero_type = %hero_type, "Hero type updated");

    Ok(Json(HeroUpdated { success: true, hero_type, content_file: request.content_file }))
}

fn set_hero_type(document: &mut Value, hero_type: &str) {
    let Some(root) = document.as_object_mut() else {
        return;
    };
    let hero = root.entry(HERO.to_owned()).or_insert_with(|| json!({}));
    if let Some(section) = hero.as_object_mut() {
        section.insert(HERO_TYPE.to_owned(), Value::String(hero_type.to_owned()));
    } else {
        let mut section = Map::new();
        section.insert(HERO_TYPE.to_owned(), Value::String(hero_type.to_owned()));
        *hero = Value::Object(section);
    }
}

/// Boundary error mapping onto the endpoint's status taxonomy.
#[derive(Debug)]
struct EditorRouteError(EditorError);

impl From<EditorError> for EditorRouteError {
    fn from(err: EditorError) -> Self {
        Self(err)
    }
}

impl IntoResponse for EditorRouteError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            EditorError::EmptyHeroType => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            },
            EditorError::Asset(AssetError::InvalidName(_)) => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            },
            EditorError::Asset(AssetError::NotFound(name)) => {
                (StatusCode::NOT_FOUND, format!("content file not found: {name}"))
            },
            EditorError::Asset(_) => {
                error!(error = %self.0, "Editor rewrite failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_owned())
            },
        };

        (status, Json(json!({ "success": false, "error": message }))).into_response()
    }
}
