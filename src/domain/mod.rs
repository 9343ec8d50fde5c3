//! # Domain Layer
//!
//! 릴레이의 도메인 계층입니다.
//!
//! ```text
//! domain/
//! ├── models/   ← Credentials, OperationResult, NowPlaying, Track/Artist/...
//! └── dto/      ← 브라우저 요청, Spotify 응답 봉투
//! ```
//!
//! Spotify 응답 모델은 식별자나 변경 규칙이 없는 순수 통과용 DTO입니다.

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
