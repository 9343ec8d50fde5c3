//! Spotify Web API 릴레이
//!
//! 인증된 사용자의 토큰으로 Spotify를 호출하는 다섯 가지 작업을 제공합니다.

pub mod spotify_service;

pub use spotify_service::*;
