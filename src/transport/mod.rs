//! # Upstream Transport
//!
//! Spotify의 두 고정 호스트(`accounts.spotify.com`, `api.spotify.com`)로
//! 요청을 보내고 원본 응답을 돌려주는 얇은 계층입니다.
//!
//! ```text
//! SpotifyAuthService ─┐
//!                     ├──► UpstreamClient (trait) ──► ReqwestUpstreamClient ──► Spotify
//! SpotifyService ─────┘
//! ```
//!
//! 서비스는 `Arc<dyn UpstreamClient>`만 알기 때문에 테스트에서는
//! 호출 횟수를 세는 가짜 구현으로 바꿔 끼웁니다.

pub mod http_client;

#[cfg(test)]
pub mod testing;

pub use http_client::*;
