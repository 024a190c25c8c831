use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio_api::PageRequest;
use folio_service::content::PageDraft;
use std::collections::HashMap;

use crate::{ApiError, ApiJson, AppState};

/// 按slug路径渲染已发布页面的上下文
/// GET /pages/*path
pub async fn render_page(
    State(state): State<AppState>,
    Path(path): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let page = state.page_service.find_by_path(&path).await?;
    let request = PageRequest {
        path: format!("/{}", path.trim_start_matches('/')),
        query,
    };
    let context = state
        .page_service
        .get_context(page.node().id, &request)
        .await?;
    Ok(Json(context).into_response())
}

/// 获取任意页面（包括草稿）的上下文
/// GET /api/v1alpha1/pages/{id}/context
pub async fn get_page_context(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let request = PageRequest {
        path: format!("/api/v1alpha1/pages/{}/context", id),
        query,
    };
    let context = state.page_service.get_context(id, &request).await?;
    Ok(Json(context).into_response())
}

/// 获取页面
/// GET /api/v1alpha1/pages/{id}
pub async fn get_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let page = state.page_service.get(id).await?;
    Ok(Json(page).into_response())
}

/// 创建博客列表页
/// POST /api/v1alpha1/pages/index
pub async fn create_index_page(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<PageDraft>,
) -> Result<Response, ApiError> {
    let page = state.page_service.create_index_page(draft).await?;
    Ok((StatusCode::CREATED, Json(page)).into_response())
}

/// 创建标签列表页
/// POST /api/v1alpha1/pages/tag-index
pub async fn create_tag_index_page(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<PageDraft>,
) -> Result<Response, ApiError> {
    let page = state.page_service.create_tag_index_page(draft).await?;
    Ok((StatusCode::CREATED, Json(page)).into_response())
}

/// 发布页面
/// PUT /api/v1alpha1/pages/{id}/publish
pub async fn publish_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let node = state.page_service.publish(id).await?;
    Ok(Json(node).into_response())
}

/// 取消发布
/// PUT /api/v1alpha1/pages/{id}/unpublish
pub async fn unpublish_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let node = state.page_service.unpublish(id).await?;
    Ok(Json(node).into_response())
}

/// 删除页面及其子页面
/// DELETE /api/v1alpha1/pages/{id}
pub async fn delete_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    state.page_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
