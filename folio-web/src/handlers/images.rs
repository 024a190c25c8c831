use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio_api::ListOptions;
use folio_domain::Image;

use crate::{ApiError, ApiJson, AppState};

/// 列出图片
/// GET /api/v1alpha1/images
pub async fn list_images(
    State(state): State<AppState>,
    Query(options): Query<ListOptions>,
) -> Result<Response, ApiError> {
    let result = state.image_service.list(options).await?;
    Ok(Json(result).into_response())
}

/// 登记图片
/// POST /api/v1alpha1/images
pub async fn create_image(
    State(state): State<AppState>,
    ApiJson(image): ApiJson<Image>,
) -> Result<Response, ApiError> {
    let image = state.image_service.create(image).await?;
    Ok((StatusCode::CREATED, Json(image)).into_response())
}

/// 获取图片
/// GET /api/v1alpha1/images/{id}
pub async fn get_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let image = state.image_service.get(id).await?;
    Ok(Json(image).into_response())
}

/// 删除图片
/// DELETE /api/v1alpha1/images/{id}
pub async fn delete_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    state.image_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
