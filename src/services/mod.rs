//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 두 서비스 모두 `Arc<dyn UpstreamClient>`를 주입받으며, `main`에서 한 번 생성되어
//! `web::Data`로 모든 워커가 공유합니다.
//!
//! # Features
//!
//! - Spotify OAuth 2.0 Authorization Code Flow
//! - Spotify Web API 릴레이 (Top Tracks, Now Playing, Following, Play, Pause)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::SpotifyAuthService, spotify::SpotifyService};
//!
//! let upstream: Arc<dyn UpstreamClient> = Arc::new(ReqwestUpstreamClient::new());
//! let auth = SpotifyAuthService::new(config, upstream.clone());
//! let spotify = SpotifyService::new(upstream);
//! ```

pub mod auth;
pub mod spotify;
