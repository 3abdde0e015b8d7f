use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};
use wsite::kernel::server::ApiState;

#[derive(OpenApi)]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let api = ApiDoc::openapi();
    let static_dir = state.config.assets.static_dir.clone();

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(wsite::server::router::system_router())
        .merge(wsite::features::content::routes::router())
        .merge(wsite::features::theme::routes::router())
        .merge(wsite::features::editor::routes::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    // Create the Scalar UI routes
    let scalar_routes = Scalar::with_url("/api", api_doc);

    // Merge all routes, then serve the static site bundle for everything else
    Router::new()
        .merge(openapi_routes)
        .merge(scalar_routes)
        .fallback_service(ServeDir::new(static_dir))
}
