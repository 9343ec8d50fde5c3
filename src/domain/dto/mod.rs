//! # Data Transfer Objects
//!
//! 외부 경계를 오가는 데이터 구조를 정의합니다.
//!
//! - [`request`] - 브라우저에서 들어오는 쿼리/본문
//! - [`upstream`] - Spotify API 응답 봉투와 요청 본문

pub mod request;
pub mod upstream;

pub use request::*;
pub use upstream::*;
