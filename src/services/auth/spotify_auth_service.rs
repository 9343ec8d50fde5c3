//! # Spotify OAuth 2.0 인증 서비스
//!
//! Authorization Code Flow의 서버 측 두 단계를 담당합니다.
//!
//! ```text
//! ┌──────────┐                    ┌──────────────┐                  ┌───────────────────┐
//! │ 브라우저  │                    │   우리 서버   │                  │ accounts.spotify  │
//! └──────────┘                    └──────────────┘                  └───────────────────┘
//!      │ 1. GET /login                   │                                   │
//!      ├────────────────────────────────►│ 2. state 생성 + 인가 URL 구성        │
//!      │ 3. 302 → /authorize?...&state   │                                   │
//!      │◄────────────────────────────────┤                                   │
//!      │ 4. 사용자 동의                                                        │
//!      ├────────────────────────────────────────────────────────────────────►│
//!      │ 5. 302 → /callback?code&state                                       │
//!      │◄────────────────────────────────────────────────────────────────────┤
//!      │ 6. GET /callback                │                                   │
//!      ├────────────────────────────────►│ 7. POST /api/token (code 교환)     │
//!      │                                 ├──────────────────────────────────►│
//!      │                                 │ 8. access_token                   │
//!      │                                 │◄──────────────────────────────────┤
//!      │ 9. 302 → / (토큰은 세션에만 보관)   │                                   │
//!      │◄────────────────────────────────┤                                   │
//! ```
//!
//! 토큰을 세션에 저장하는 일은 호출하는 라우터의 책임입니다.

use std::sync::Arc;

use uuid::Uuid;

use crate::config::SpotifyConfig;
use crate::domain::models::{AuthorizationRequest, Credentials};
use crate::transport::UpstreamClient;
use crate::utils::string_utils::mask_identifier;

pub struct SpotifyAuthService {
    config: SpotifyConfig,
    upstream: Arc<dyn UpstreamClient>,
}

impl SpotifyAuthService {
    pub fn new(config: SpotifyConfig, upstream: Arc<dyn UpstreamClient>) -> Self {
        Self { config, upstream }
    }

    pub fn config(&self) -> &SpotifyConfig {
        &self.config
    }

    /// 인가 페이지 URL을 만듭니다
    ///
    /// 매 호출마다 새로운 UUID v4 state를 생성하며, 그 외 부분은 설정에 의해 결정됩니다.
    pub fn authorization_request(&self) -> AuthorizationRequest {
        let state = Uuid::new_v4().to_string();

        let params = [
            ("client_id", self.config.client_id()),
            ("response_type", "code"),
            ("redirect_uri", self.config.redirect_uri()),
            ("scope", self.config.scopes()),
            ("state", state.as_str()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let url = format!("{}?{}", SpotifyConfig::authorize_url(), query_string);

        log::info!(
            "인가 URL 생성 - client_id: {}",
            mask_identifier(self.config.client_id())
        );

        AuthorizationRequest { url, state }
    }

    /// Authorization code를 액세스 토큰으로 교환합니다
    ///
    /// 실패 이유(상태 코드, 본문, 전송 에러)는 로그로만 남기고 호출자에게는 `None`만 돌려줍니다.
    pub async fn exchange_code(&self, code: &str) -> Option<Credentials> {
        if code.trim().is_empty() {
            log::warn!("빈 authorization code로 토큰 교환 시도 - 요청하지 않음");
            return None;
        }

        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.config.redirect_uri()),
            ("client_id", self.config.client_id()),
            ("client_secret", self.config.client_secret()),
        ];

        log::info!("Spotify 액세스 토큰 요청");

        let response = match self
            .upstream
            .post_form(&SpotifyConfig::token_url(), &params, None)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                log::error!("Spotify 토큰 요청 실패: {}", e);
                return None;
            }
        };

        if !response.is_success() {
            log::error!(
                "Spotify 토큰 교환 실패. Status: {}, Error: {}",
                response.status,
                response.body
            );
            return None;
        }

        match serde_json::from_str::<Credentials>(&response.body) {
            Ok(credentials) if !credentials.access_token.is_empty() => {
                log::info!("Spotify 액세스 토큰 발급 성공");
                Some(credentials)
            }
            Ok(_) => {
                log::error!("Spotify 토큰 응답에 access_token이 없습니다");
                None
            }
            Err(e) => {
                log::error!("Spotify 토큰 응답 파싱 실패: {}", e);
                None
            }
        }
    }
}
