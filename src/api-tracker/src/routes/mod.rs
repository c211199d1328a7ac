use axum::{Router, http::HeaderValue, middleware, routing::get};
use core_tracker::{cors_layer, health_check};
use tower_http::trace::TraceLayer;

use data_model_tracker::repository::SharedRepository;

pub mod applications;
pub mod logging_middleware;

//
// Router
//

/// All routes. The repository handle is supplied afterwards with `.with_state(..)`.
pub fn router(allowed_origins: Vec<HeaderValue>) -> Router<SharedRepository> {
    let application_routes = Router::new()
        .route(
            "/api/applications",
            get(applications::list_applications).post(applications::create_application),
        )
        .route(
            "/api/applications/{id}",
            get(applications::get_application)
                .put(applications::update_application)
                .delete(applications::delete_application),
        );

    Router::new()
        .route("/health", get(health_check))
        .merge(application_routes)
        .layer(cors_layer(allowed_origins))
        // Custom route access logging
        .layer(middleware::from_fn(logging_middleware::log_route_access))
        // Tracing middleware
        .layer(TraceLayer::new_for_http())
}
