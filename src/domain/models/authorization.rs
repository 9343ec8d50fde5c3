/// 로그인 한 번에 대한 인가 요청
///
/// `state`는 콜백에서 그대로 돌아와야 하는 CSRF 방지용 값입니다.
/// 라우터가 세션에 보관했다가 콜백에서 비교합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorizationRequest {
    /// Spotify 인가 페이지 전체 URL
    pub url: String,
    pub state: String,
}
