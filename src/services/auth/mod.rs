//! 인증 서비스 모듈
//!
//! Spotify OAuth 2.0 Authorization Code Flow를 담당합니다.
//!
//! # Security
//!
//! - 로그인마다 새 state 발급 (CSRF 방지, 콜백에서 라우터가 검증)
//! - 클라이언트 시크릿은 서버에서만 사용
//! - 액세스 토큰은 브라우저로 내려보내지 않음
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::SpotifyAuthService;
//!
//! let auth = SpotifyAuthService::new(config, upstream);
//! let request = auth.authorization_request();
//! let credentials = auth.exchange_code(&code).await;
//! ```

pub mod spotify_auth_service;

pub use spotify_auth_service::*;
