use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::json;

use models::record::Resource;
use service::collection::ResourceCollectionService;

use crate::errors::ApiError;

type Service<R> = Arc<ResourceCollectionService<R>>;

/// The CRUD route family every resource kind shares.
pub fn router<R: Resource>() -> Router<Service<R>> {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route("/:id", get(fetch::<R>).put(update::<R>).delete(remove::<R>))
}

async fn list<R: Resource>(State(svc): State<Service<R>>) -> Result<Json<Vec<R>>, ApiError> {
    Ok(Json(svc.list().await?))
}

async fn fetch<R: Resource>(
    State(svc): State<Service<R>>,
    Path(id): Path<i64>,
) -> Result<Json<R>, ApiError> {
    Ok(Json(svc.get(id).await?))
}

async fn create<R: Resource>(
    State(svc): State<Service<R>>,
    Json(patch): Json<R::Patch>,
) -> Result<(StatusCode, Json<R>), ApiError> {
    let created = svc.create(patch).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update<R: Resource>(
    State(svc): State<Service<R>>,
    Path(id): Path<i64>,
    Json(patch): Json<R::Patch>,
) -> Result<Json<R>, ApiError> {
    Ok(Json(svc.update(id, patch).await?))
}

async fn remove<R: Resource>(
    State(svc): State<Service<R>>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    svc.delete(id).await?;
    Ok(Json(json!({ "message": format!("{} deleted successfully", R::LABEL) })))
}
