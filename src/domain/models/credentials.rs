use serde::{Deserialize, Serialize};

/// 토큰 엔드포인트가 돌려주는 Spotify 자격 증명
///
/// Authorization Code 교환 한 번에 하나 만들어집니다.
/// 갱신하지 않으며, `expires_in`으로 만료를 강제하지도 않습니다.
/// 실제 수명은 이 토큰을 담은 브라우저 세션의 수명입니다.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub access_token: String,
    pub token_type: String,
    #[serde(rename = "expires_in")]
    pub expires_in_seconds: i64,
    pub refresh_token: String,
    pub scope: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"***")
            .field("token_type", &self.token_type)
            .field("expires_in_seconds", &self.expires_in_seconds)
            .field("refresh_token", &"***")
            .field("scope", &self.scope)
            .finish()
    }
}
