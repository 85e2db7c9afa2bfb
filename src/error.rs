use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already used: {0}")]
    AlreadyUsed(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Permission denied")]
    PermissionDenied,

    #[error("External API error: {0}")]
    ExternalApiError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("HTTP request error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

impl ResponseError for AppError {
    // 中间件拒绝以 Err(actix_web::Error) 冒泡时走的是 status_code()，
    // 必须与 error_response() 的映射保持一致，否则一律回落到 500
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) | AppError::AlreadyUsed(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadyExists(_) => StatusCode::CONFLICT,
            AppError::PermissionDenied => StatusCode::FORBIDDEN,
            AppError::ExternalApiError(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            AppError::ValidationError(msg) => {
                log::warn!("Validation error: {msg}");
                (
                    actix_web::http::StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    msg,
                )
            }
            AppError::NotFound(msg) => (actix_web::http::StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            AppError::AlreadyUsed(msg) => {
                log::warn!("Redemption rejected: {msg}");
                (
                    actix_web::http::StatusCode::BAD_REQUEST,
                    "ALREADY_USED",
                    msg,
                )
            }
            AppError::AlreadyExists(msg) => {
                log::warn!("Registration rejected: {msg}");
                (actix_web::http::StatusCode::CONFLICT, "ALREADY_EXISTS", msg)
            }
            AppError::PermissionDenied => {
                log::warn!("Permission denied");
                (
                    actix_web::http::StatusCode::FORBIDDEN,
                    "FORBIDDEN",
                    &"Permission denied".to_string(),
                )
            }
            AppError::ExternalApiError(msg) => {
                log::error!("External API error: {msg}");
                (
                    actix_web::http::StatusCode::BAD_GATEWAY,
                    "EXTERNAL_API_ERROR",
                    msg,
                )
            }
            AppError::DatabaseError(err) => {
                log::error!("Database error: {err}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    &"Database error".to_string(),
                )
            }
            _ => {
                log::error!("Internal error: {self}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    &"Internal server error".to_string(),
                )
            }
        };

        HttpResponse::build(status_code).json(json!({
            "success": false,
            "error": {
                "code": error_code,
                "message": message
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    fn taxonomy() -> Vec<(AppError, StatusCode)> {
        vec![
            (
                AppError::ValidationError("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (AppError::NotFound("missing".into()), StatusCode::NOT_FOUND),
            (AppError::AlreadyUsed("used".into()), StatusCode::BAD_REQUEST),
            (
                AppError::AlreadyExists("dup".into()),
                StatusCode::CONFLICT,
            ),
            (AppError::PermissionDenied, StatusCode::FORBIDDEN),
            (
                AppError::ExternalApiError("upstream".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::DatabaseError(sea_orm::DbErr::Custom("db".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::InternalError("oops".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ]
    }

    #[test]
    fn test_status_code_mapping() {
        for (err, expected) in taxonomy() {
            assert_eq!(err.status_code(), expected, "variant: {err}");
        }
    }

    #[test]
    fn test_status_code_agrees_with_error_response() {
        // 两条路径（构建响应 / 仅查询状态码）必须给出同一个状态
        for (err, _) in taxonomy() {
            assert_eq!(
                err.status_code(),
                err.error_response().status(),
                "variant: {err}"
            );
        }
    }
}
