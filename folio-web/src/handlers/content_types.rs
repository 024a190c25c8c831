use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use folio_api::{ContentError, ContentTypeKey};

use crate::{ApiError, AppState};

/// 列出已注册的内容类型及其编辑面板
/// GET /api/v1alpha1/content-types
pub async fn list_content_types(State(state): State<AppState>) -> Response {
    let response = Json(state.registry.list()).into_response();
    response
}

/// GET /api/v1alpha1/content-types/{key}
pub async fn get_content_type(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response, ApiError> {
    let key: ContentTypeKey = key.parse()?;
    let response = match state.registry.get(&key) {
        Some(definition) => Json(definition).into_response(),
        None => return Err(ContentError::not_found("content type", key).into()),
    };
    Ok(response)
}
