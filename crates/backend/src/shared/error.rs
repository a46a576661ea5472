use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Ошибки обработчиков API. Ответ всегда в формате `{ success: false, error }`
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Некорректный запрос: {0}")]
    MalformedPayload(String),

    #[error("{0}")]
    Validation(String),

    #[error("Не найдено: {0}")]
    NotFound(String),

    #[error("Внутренняя ошибка: {0}")]
    Internal(#[from] std::io::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedPayload(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
        (status, Json(json!({ "success": false, "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::MalformedPayload("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::Validation("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert_eq!(AppError::from(io).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_status() {
        let resp = AppError::Validation("Список материалов пуст".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
