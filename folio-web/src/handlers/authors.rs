use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio_api::ListOptions;
use folio_domain::Author;

use crate::{ApiError, ApiJson, AppState};

/// 列出作者
/// GET /api/v1alpha1/authors
pub async fn list_authors(
    State(state): State<AppState>,
    Query(options): Query<ListOptions>,
) -> Result<Response, ApiError> {
    let result = state.author_service.list(options).await?;
    Ok(Json(result).into_response())
}

/// 创建作者
/// POST /api/v1alpha1/authors
pub async fn create_author(
    State(state): State<AppState>,
    ApiJson(author): ApiJson<Author>,
) -> Result<Response, ApiError> {
    let author = state.author_service.create(author).await?;
    Ok((StatusCode::CREATED, Json(author)).into_response())
}

/// 获取作者
/// GET /api/v1alpha1/authors/{id}
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let author = state.author_service.get(id).await?;
    Ok(Json(author).into_response())
}

/// 更新作者
/// PUT /api/v1alpha1/authors/{id}
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ApiJson(author): ApiJson<Author>,
) -> Result<Response, ApiError> {
    let author = state.author_service.update(id, author).await?;
    Ok(Json(author).into_response())
}

/// 删除作者
/// DELETE /api/v1alpha1/authors/{id}
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    state.author_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
