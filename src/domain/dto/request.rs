//! 브라우저 요청 DTO
//!
//! 콜백 쿼리와 재생 요청 본문을 매핑합니다.
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::utils::string_utils::is_valid_string;

/// OAuth 콜백 쿼리 파라미터 구조체
///
/// Spotify는 성공 시 `code`/`state`를, 사용자가 거부하면 `error`/`state`를 보냅니다.
/// 어떤 값이 올지 알 수 없으므로 모두 선택값으로 받고 핸들러에서 분기합니다.
#[derive(Debug, Default, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    /// 에러가 있을 경우 (사용자가 거부했거나 에러 발생)
    pub error: Option<String>,
}

/// `POST /api/spotify/play` 요청 본문
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlayTrackRequest {
    #[validate(custom(function = "validate_track_uri"))]
    #[serde(default)]
    pub track_uri: String,
}

/// 공백만 있는 URI도 빈 값으로 취급
fn validate_track_uri(track_uri: &str) -> Result<(), ValidationError> {
    if !is_valid_string(track_uri) {
        return Err(ValidationError::new("track_uri_required")
            .with_message("trackUri가 필요합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_track_request_uses_camel_case() {
        let request: PlayTrackRequest =
            serde_json::from_str(r#"{"trackUri": "spotify:track:4uLU6hMCjMI75M1A2tKUQC"}"#).unwrap();

        assert_eq!(request.track_uri, "spotify:track:4uLU6hMCjMI75M1A2tKUQC");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_play_track_request_rejects_empty_uri() {
        let request: PlayTrackRequest = serde_json::from_str(r#"{}"#).unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_play_track_request_rejects_blank_uri() {
        let request: PlayTrackRequest = serde_json::from_str(r#"{"trackUri": "   "}"#).unwrap();

        assert!(request.validate().is_err());
    }
}
