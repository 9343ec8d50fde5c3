//! # Configuration Module
//!
//! 릴레이 백엔드의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 환경, 세션, CORS 설정
//! - [`auth_config`] - Spotify OAuth 자격 증명과 고정 엔드포인트
//!
//! ## 설계 원칙
//!
//! - 민감한 정보(클라이언트 시크릿)는 환경 변수로만 제공
//! - Spotify 자격 증명 누락 시 서버 시작 자체가 실패
//! - 나머지 값은 개발 환경 기본값 사용
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수
//!
//! ```bash
//! export SPOTIFY_CLIENT_ID="your-client-id"
//! export SPOTIFY_CLIENT_SECRET="your-client-secret"
//! export SPOTIFY_REDIRECT_URI="http://localhost:8080/callback"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="development"   # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export SESSION_BACKEND="memory"    # memory, redis
//! export REDIS_URL="redis://localhost:6379"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
