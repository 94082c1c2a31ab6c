pub mod projects;
pub mod resources;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::{Health, ServiceInfo};
use models::{accomplishment::Accomplishment, certificate::Certificate, project::Project};
use service::runtime::Services;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Service banner with the reachable endpoint families.
pub async fn index() -> Json<ServiceInfo> {
    let endpoints = [
        ("projects", "/api/projects"),
        ("certificates", "/api/certificates"),
        ("accomplishments", "/api/accomplishments"),
        ("search", "/api/projects/search"),
        ("categories", "/api/categories"),
        ("stats", "/api/stats"),
    ]
    .into_iter()
    .collect();
    Json(ServiceInfo { message: "Portfolio API is running", status: "ok", endpoints })
}

/// Build the full application router: index + health, and the CORS-guarded
/// `/api` resource families.
pub fn build_router(services: Services, cors: CorsLayer) -> Router {
    let project_routes = resources::router::<Project>()
        // static segment must live on the same router as `/:id` so it wins
        .route("/search", get(projects::search))
        .with_state(services.projects.clone());
    let certificate_routes =
        resources::router::<Certificate>().with_state(services.certificates.clone());
    let accomplishment_routes =
        resources::router::<Accomplishment>().with_state(services.accomplishments.clone());

    // Cross-collection catalog endpoints are backed by the project service.
    let catalog_routes = Router::new()
        .route("/categories", get(projects::categories))
        .route("/stats", get(projects::stats))
        .with_state(services.projects.clone());

    let api = Router::new()
        .nest("/projects", project_routes)
        .nest("/certificates", certificate_routes)
        .nest("/accomplishments", accomplishment_routes)
        .merge(catalog_routes)
        .layer(cors);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .nest("/api", api)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
