use std::fmt;
use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::errors::AppError;

/// 세션에서 꺼낸 Spotify 액세스 토큰
///
/// `SpotifyAuthMiddleware`가 통과시킨 요청에만 존재합니다.
#[derive(Clone, PartialEq)]
pub struct SpotifyAccessToken(pub String);

impl SpotifyAccessToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SpotifyAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SpotifyAccessToken(***)")
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for SpotifyAccessToken {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<SpotifyAccessToken>() {
            Some(token) => ready(Ok(token.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "Not authenticated with Spotify".to_string(),
            ))),
        }
    }
}
