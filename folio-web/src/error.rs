use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio_api::ContentError;
use serde_json::json;

/// ApiError 把服务层错误转换为HTTP响应
#[derive(Debug)]
pub struct ApiError(pub ContentError);

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ContentError::NotFound(_) => StatusCode::NOT_FOUND,
            ContentError::Validation(_) | ContentError::InvalidParent(_) => StatusCode::BAD_REQUEST,
            ContentError::AlreadyRegistered(_) => StatusCode::CONFLICT,
            ContentError::Database(_) | ContentError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ContentError::not_found("page", 1), StatusCode::NOT_FOUND),
            (ContentError::Validation("intro".into()), StatusCode::BAD_REQUEST),
            (ContentError::InvalidParent("root".into()), StatusCode::BAD_REQUEST),
            (ContentError::AlreadyRegistered("blog.BlogPage".into()), StatusCode::CONFLICT),
            (ContentError::Database("locked".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError(err).status(), status);
        }
    }
}
