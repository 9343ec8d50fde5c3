//! Spotify OAuth 설정
//!
//! 클라이언트 자격 증명과 리다이렉트 URI는 환경 변수에서 한 번만 읽고,
//! 비어 있으면 서버가 포트를 열기 전에 [`AppError::ConfigurationError`]로 중단합니다.
//! 요청 스코프와 Spotify 호스트는 고정 상수입니다.

use std::env;

use crate::errors::errors::AppError;
use crate::utils::string_utils::validate_required_string;

/// 인가/토큰 엔드포인트 호스트
pub const SPOTIFY_ACCOUNTS_URL: &str = "https://accounts.spotify.com";

/// Web API 호스트
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com";

/// 로그인 시 요청하는 OAuth 스코프
pub const SPOTIFY_SCOPES: &str = "user-read-private user-read-email user-top-read user-read-playback-state user-modify-playback-state user-read-currently-playing user-follow-read";

/// Spotify 애플리케이션 자격 증명
///
/// 생성자에서 세 값이 모두 채워져 있는지 검증하므로,
/// 이 타입의 값이 존재한다면 설정은 유효합니다.
#[derive(Clone)]
pub struct SpotifyConfig {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

impl SpotifyConfig {
    pub fn new(
        client_id: impl AsRef<str>,
        client_secret: impl AsRef<str>,
        redirect_uri: impl AsRef<str>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            client_id: validate_required_string(client_id.as_ref(), "SPOTIFY_CLIENT_ID")?,
            client_secret: validate_required_string(client_secret.as_ref(), "SPOTIFY_CLIENT_SECRET")?,
            redirect_uri: validate_required_string(redirect_uri.as_ref(), "SPOTIFY_REDIRECT_URI")?,
        })
    }

    /// `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET`, `SPOTIFY_REDIRECT_URI`를 읽습니다
    pub fn from_env() -> Result<Self, AppError> {
        let client_id = env::var("SPOTIFY_CLIENT_ID").unwrap_or_default();
        let client_secret = env::var("SPOTIFY_CLIENT_SECRET").unwrap_or_default();
        let redirect_uri = env::var("SPOTIFY_REDIRECT_URI").unwrap_or_default();

        log::info!(
            "Spotify 설정 - ClientId: {}, RedirectUri: {}",
            if client_id.trim().is_empty() { "MISSING" } else { "SET" },
            redirect_uri
        );

        Self::new(client_id, client_secret, redirect_uri)
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    pub fn scopes(&self) -> &'static str {
        SPOTIFY_SCOPES
    }

    pub fn authorize_url() -> String {
        format!("{}/authorize", SPOTIFY_ACCOUNTS_URL)
    }

    pub fn token_url() -> String {
        format!("{}/api/token", SPOTIFY_ACCOUNTS_URL)
    }
}

// client_secret이 로그에 찍히지 않도록 직접 구현
impl std::fmt::Debug for SpotifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotifyConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}
