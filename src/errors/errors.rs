//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 릴레이 백엔드를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 핸들러에서 반환된 에러를
//! 일관된 `{"error": ...}` JSON 응답으로 변환합니다.
//!
//! Spotify 업스트림 실패는 여기서 만들어지지 않습니다. 릴레이 서비스가
//! [`OperationResult`](crate::domain::OperationResult)로 복구한 뒤, 라우터가
//! [`AppError::UpstreamError`]로 옮겨 400 응답을 만듭니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AppResult};
//!
//! fn require_code(code: Option<&str>) -> AppResult<&str> {
//!     code.filter(|c| !c.is_empty())
//!         .ok_or_else(|| AppError::ValidationError("Authorization code not received".to_string()))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 설정값 누락 (프로세스 시작 단계에서 치명적)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 세션에 Spotify 토큰이 없음 (401 Unauthorized)
    #[error("{0}")]
    AuthenticationError(String),

    /// Spotify API가 실패를 돌려줌 (400 Bad Request)
    #[error("{0}")]
    UpstreamError(String),

    /// 세션 저장소 에러 (500 Internal Server Error)
    #[error("Session error: {0}")]
    SessionError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("trackUri is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Not authenticated with Spotify".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        // 브라우저에는 접두어 없이 그대로 전달
        assert_eq!(error.to_string(), "Not authenticated with Spotify");
    }

    #[test]
    fn test_upstream_error_response() {
        let error = AppError::UpstreamError("No active device found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "No active device found");
    }

    #[test]
    fn test_session_and_internal_error_response() {
        let session = AppError::SessionError("lock poisoned".to_string());
        let internal = AppError::InternalError("Something went wrong".to_string());

        assert_eq!(session.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
