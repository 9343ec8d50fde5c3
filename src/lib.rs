//! Spotify 릴레이 백엔드
//!
//! 브라우저 사용자를 Spotify OAuth 2.0 Authorization Code Flow로 로그인시키고,
//! 발급받은 액세스 토큰을 서버 세션에만 보관한 채 Spotify Web API 호출을 대신 수행합니다.
//!
//! # Features
//!
//! - **OAuth 2.0**: Spotify 로그인, CSRF state 검증, 로그아웃
//! - **API 릴레이**: Top Tracks, Now Playing, Following Artists, 재생/일시정지
//! - **세션**: 쿠키 기반 세션 ID, 인메모리 또는 Redis 저장소
//! - **운영**: 헬스체크, 개발용 설정 확인, 보안 헤더
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 브라우저 / JSON 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Middlewares   │ ← 세션 쿠키, Spotify 인증 가드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← OAuth, Web API 릴레이
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Transport    │ ← accounts.spotify.com / api.spotify.com
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use spotify_relay_backend::services::spotify::SpotifyService;
//! use spotify_relay_backend::transport::ReqwestUpstreamClient;
//!
//! let spotify = SpotifyService::new(Arc::new(ReqwestUpstreamClient::new()));
//! match spotify.now_playing(&token).await {
//!     NowPlaying::Playing(track) => println!("{:?}", track.item),
//!     NowPlaying::Idle => println!("재생 중인 곡 없음"),
//!     NowPlaying::Failed(reason) => eprintln!("{}", reason),
//! }
//! ```

pub mod caching;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod routes;
pub mod services;
pub mod session;
pub mod transport;
pub mod utils;
pub mod views;
