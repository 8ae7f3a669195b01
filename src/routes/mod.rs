use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::AppResult;
use crate::handlers::{categories, form, location, map, pages};
use crate::middleware::rate_limit::{create_global_governor, log_request};
use crate::AppState;

/// URL prefix under which the assets directory is served.
pub const ASSETS_PREFIX: &str = "/assets";

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Storage and map data
        .route("/points", get(map::list_points).post(form::submit_point))
        .route("/map", get(map::map_view))
        .route("/categories", get(categories::list_categories))
        // Geolocation flow, scoped by the session cookie
        .route("/location", get(location::status))
        .route("/location/request", post(location::request))
        .route("/location/report", post(location::report))
        .route("/location/await", get(location::await_location));

    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/", get(pages::map_page))
        .route("/form", get(pages::form_page))
        .nest("/api", api_routes)
        .nest_service(ASSETS_PREFIX, assets)
        .with_state(state)
}

/// Wrap the router in the serving middleware. Needs `ConnectInfo<SocketAddr>`
/// on every request for the per-IP governor and the request log.
pub fn with_middleware(router: Router) -> AppResult<Router> {
    Ok(router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(create_global_governor()?)
        // Outermost, so responses from the governor are logged as well
        .layer(middleware::from_fn(log_request)))
}
