//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Browser / Frontend
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Middlewares - 세션 쿠키, Spotify 인증 가드
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - OAuth, Web API 릴레이               ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Transport - Spotify 호출                       ← Upstream
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 브라우저 OAuth 흐름 (`/`, `/login`, `/callback`, `/logout`)
//! - **`spotify`**: JSON 릴레이 (`/api/spotify/*`)
//!
//! 서비스는 `web::Data`로 주입받습니다. 에러는 모두 [`AppError`](crate::errors::AppError)로
//! 반환되어 `{"error": ...}` JSON 응답이 됩니다.

pub mod auth;
pub mod spotify;
