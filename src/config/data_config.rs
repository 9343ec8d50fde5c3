//! 서버, 환경, 세션 관련 설정
//!
//! 모든 값은 환경 변수에서 읽으며 누락 시 개발용 기본값을 사용합니다.

use std::env;

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        Self::from_str(
            &env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string())
        )
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "Development",
            Environment::Test => "Test",
            Environment::Staging => "Staging",
            Environment::Production => "Production",
        }
    }

    pub fn is_development(&self) -> bool {
        *self == Environment::Development
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|w| *w > 0)
            .unwrap_or(4)
    }
}

/// 세션 저장소 백엔드 종류
#[derive(Debug, Clone, PartialEq)]
pub enum SessionBackend {
    Memory,
    Redis,
}

pub struct SessionConfig;

impl SessionConfig {
    /// 브라우저 세션 쿠키 이름
    pub const COOKIE_NAME: &'static str = "SpotifyApp.Session";

    /// 유휴 세션 만료 시간 (분)
    pub const IDLE_TIMEOUT_MINUTES: i64 = 30;

    pub fn backend() -> SessionBackend {
        match env::var("SESSION_BACKEND")
            .unwrap_or_else(|_| "memory".to_string())
            .to_lowercase()
            .as_str()
        {
            "redis" => SessionBackend::Redis,
            _ => SessionBackend::Memory,
        }
    }

    pub fn redis_url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    /// 운영 환경에서는 HTTPS 전용 쿠키를 사용합니다
    pub fn secure_cookie_for_env(env: &Environment) -> bool {
        !env.is_development()
    }
}

pub struct CorsConfig;

impl CorsConfig {
    pub fn allowed_origins() -> Vec<String> {
        Self::parse_origins(
            &env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000,http://localhost:8080".to_string())
        )
    }

    pub fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}
