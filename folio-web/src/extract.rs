use axum::extract::{rejection::JsonRejection, FromRequest};
use folio_api::ContentError;

use crate::ApiError;

/// ApiJson 请求体解析失败时返回与其他错误相同的 `{"error": ...}` 响应
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(ContentError::Validation(rejection.body_text()))
    }
}
