use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio_service::content::BlogPageRequest;

use crate::{ApiError, ApiJson, AppState};

/// 创建博客文章（草稿）
/// POST /api/v1alpha1/blogpages
pub async fn create_blog_page(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<BlogPageRequest>,
) -> Result<Response, ApiError> {
    let page = state.blog_page_service.create(request).await?;
    Ok((StatusCode::CREATED, Json(page)).into_response())
}

/// 获取博客文章
/// GET /api/v1alpha1/blogpages/{id}
pub async fn get_blog_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let page = state.blog_page_service.get(id).await?;
    Ok(Json(page).into_response())
}

/// 更新博客文章，标签、作者和图库整体替换
/// PUT /api/v1alpha1/blogpages/{id}
pub async fn update_blog_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ApiJson(request): ApiJson<BlogPageRequest>,
) -> Result<Response, ApiError> {
    let page = state.blog_page_service.update(id, request).await?;
    Ok(Json(page).into_response())
}

/// 删除博客文章
/// DELETE /api/v1alpha1/blogpages/{id}
pub async fn delete_blog_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    state.blog_page_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// 文章的主图，没有图库时返回null
/// GET /api/v1alpha1/blogpages/{id}/main-image
pub async fn get_main_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let image = state.blog_page_service.main_image(id).await?;
    Ok(Json(image).into_response())
}
