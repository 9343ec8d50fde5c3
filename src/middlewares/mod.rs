//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 세션 미들웨어 (SessionMiddleware)
//! - `SpotifyApp.Session` 쿠키로 세션 ID 결정, 없으면 새로 발급
//! - 세션 핸들을 request extension에 저장
//!
//! ### 2. Spotify 인증 미들웨어 (SpotifyAuthMiddleware)
//! - 세션에 Spotify 액세스 토큰이 있는지 확인
//! - 없으면 업스트림 호출 없이 401 응답
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .wrap(SessionMiddleware::new(store, secure_cookie))
//!     .service(
//!         web::scope("/api/spotify")
//!             .wrap(SpotifyAuthMiddleware::required())
//!             .service(top_tracks)
//!     )
//! ```

pub mod auth_middleware;
pub mod session_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::SpotifyAuthMiddleware;
pub use session_middleware::SessionMiddleware;
