//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 설정값 검증, 로그 마스킹, HTML 이스케이프
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{mask_identifier, validate_required_string};
//!
//! let client_id = validate_required_string(&raw, "SPOTIFY_CLIENT_ID")?;
//! log::info!("client_id: {}", mask_identifier(&client_id));
//! ```

pub mod string_utils;
