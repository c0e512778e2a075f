use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::domain::product::validator::Violations;

/// Отказы операций каталога и их трансляция в HTTP-ответ.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 404, тело — текст сообщения
    #[error("{0}")]
    RecordNotFound(String),
    /// 400, тело — JSON "поле -> сообщение" (проверка до сервиса)
    #[error("validation failed")]
    Validation(Violations),
    /// 400, тело — JSON "поле -> сообщение" (повторная проверка на границе хранилища)
    #[error("constraint violation")]
    ConstraintViolation(Violations),
    /// Инфраструктурные сбои: не транслируются, уходят как 500
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<sea_orm::DbErr> for ApiError {
    fn from(err: sea_orm::DbErr) -> Self {
        ApiError::Internal(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::RecordNotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            ApiError::Validation(fields) | ApiError::ConstraintViolation(fields) => {
                (StatusCode::BAD_REQUEST, Json(fields)).into_response()
            }
            ApiError::Internal(err) => {
                tracing::error!("Unhandled error: {:#}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
