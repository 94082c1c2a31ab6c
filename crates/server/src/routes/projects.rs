use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use models::project::Project;
use service::catalog::ProjectStats;
use service::collection::ResourceCollectionService;

use crate::errors::ApiError;

type ProjectService = Arc<ResourceCollectionService<Project>>;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub category: String,
}

pub async fn search(
    State(svc): State<ProjectService>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<Project>>, ApiError> {
    Ok(Json(svc.search(&params.q, &params.category).await?))
}

pub async fn categories(State(svc): State<ProjectService>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(svc.categories().await?))
}

pub async fn stats(State(svc): State<ProjectService>) -> Result<Json<ProjectStats>, ApiError> {
    Ok(Json(svc.stats().await?))
}
