//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use crate::errors::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ConfigurationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 인자
/// * `value` - 검증할 문자열
/// * `field_name` - 필드명 (에러 메시지용)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string("  abc  ", "SPOTIFY_CLIENT_ID").unwrap(), "abc");
/// assert!(validate_required_string("   ", "SPOTIFY_CLIENT_ID").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ConfigurationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 로그 출력용으로 식별자의 앞부분만 남깁니다
///
/// 클라이언트 ID 같은 값을 로그에 남길 때 앞 8글자만 노출합니다.
/// 8글자 이하라면 전체를 가립니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(mask_identifier("0123456789abcdef"), "01234567...");
/// assert_eq!(mask_identifier("short"), "...");
/// ```
pub fn mask_identifier(value: &str) -> String {
    match value.char_indices().nth(8) {
        Some((idx, _)) => format!("{}...", &value[..idx]),
        None => "...".to_string(),
    }
}

/// HTML 본문에 넣을 문자열을 이스케이프합니다
///
/// 콜백 에러 문자열처럼 외부에서 들어온 값을 뷰에 그대로 렌더링할 때 사용합니다.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        // 성공 케이스
        assert_eq!(validate_required_string("client", "SPOTIFY_CLIENT_ID").unwrap(), "client");
        assert_eq!(validate_required_string("  secret  ", "SPOTIFY_CLIENT_SECRET").unwrap(), "secret");

        // 실패 케이스
        assert!(validate_required_string("", "SPOTIFY_CLIENT_ID").is_err());
        assert!(validate_required_string("   ", "SPOTIFY_CLIENT_ID").is_err());

        match validate_required_string("\t\n", "SPOTIFY_REDIRECT_URI") {
            Err(AppError::ConfigurationError(msg)) => assert!(msg.contains("SPOTIFY_REDIRECT_URI")),
            other => panic!("Expected ConfigurationError, got {:?}", other),
        }
    }

    #[test]
    fn test_mask_identifier() {
        assert_eq!(mask_identifier("0123456789abcdef"), "01234567...");
        assert_eq!(mask_identifier("012345678"), "01234567...");
        assert_eq!(mask_identifier("01234567"), "...");
        assert_eq!(mask_identifier(""), "...");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("access_denied"), "access_denied");
        assert_eq!(
            escape_html("<script>alert('x') & \"y\"</script>"),
            "&lt;script&gt;alert(&#x27;x&#x27;) &amp; &quot;y&quot;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_is_valid_string() {
        assert!(is_valid_string("spotify:track:1"));
        assert!(!is_valid_string(""));
        assert!(!is_valid_string("   "));
    }
}
