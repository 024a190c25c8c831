use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::{ApiError, AppState};

/// 列出Tags
/// GET /api/v1alpha1/tags
pub async fn list_tags(State(state): State<AppState>) -> Result<Response, ApiError> {
    let tags = state.tag_service.list().await?;
    Ok(Json(tags).into_response())
}

/// 带有该标签的所有文章
/// GET /api/v1alpha1/tags/{name}/posts
pub async fn list_tag_posts(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, ApiError> {
    let posts = state.tag_service.posts(&name).await?;
    Ok(Json(posts).into_response())
}
