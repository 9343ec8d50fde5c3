//! # Domain Models Module
//!
//! 릴레이가 다루는 도메인 모델을 정의합니다.
//!
//! - [`spotify`] - Track / Artist / Album / Image 등 Spotify 응답 투영
//! - [`credentials`] - 토큰 교환 결과
//! - [`operation_result`] - 릴레이 작업 결과 (`OperationResult`, `NowPlaying`)
//! - [`authorization`] - 로그인 리다이렉트 정보
//! - [`access_token`] - 인증 미들웨어가 넘겨주는 요청별 토큰

pub mod access_token;
pub mod authorization;
pub mod credentials;
pub mod operation_result;
pub mod spotify;

pub use access_token::*;
pub use authorization::*;
pub use credentials::*;
pub use operation_result::*;
pub use spotify::*;
