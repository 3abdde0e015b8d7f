//! System-level routes shared by every application: health and whatever
//! future process-level diagnostics land here.

use super::health;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Router carrying the system endpoints; merge it into the application's
/// [`OpenApiRouter`] so the routes land in the API documentation too.
pub fn system_router<S>() -> OpenApiRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    OpenApiRouter::<S>::new().routes(routes!(health::health_handler))
}
