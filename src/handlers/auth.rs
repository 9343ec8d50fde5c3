//! Authentication HTTP Handlers
//!
//! 브라우저가 직접 방문하는 OAuth 엔드포인트를 처리합니다.
//! 성공 경로는 모두 리다이렉트이고, 콜백 실패는 에러 뷰로 렌더링됩니다.
//!
//! # Endpoints
//!
//! - `GET /` - 홈 화면
//! - `GET /login` - Spotify 인가 페이지로 리다이렉트
//! - `GET /callback` - 인가 코드를 토큰으로 교환하고 세션에 저장
//! - `GET /logout` - 세션에서 토큰 제거
use actix_web::{get, http::header, web, HttpResponse};
use crate::domain::OAuthCallbackQuery;
use crate::errors::AppError;
use crate::services::auth::SpotifyAuthService;
use crate::session::{Session, ACCESS_TOKEN_KEY, OAUTH_STATE_KEY};
use crate::utils::string_utils::is_valid_string;
use crate::views;

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn render_error(message: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(views::error_page(message))
}

/// 홈 화면
///
/// # Endpoint
/// `GET /`
#[get("/")]
pub async fn index(session: Session) -> Result<HttpResponse, AppError> {
    let authenticated = session
        .get(ACCESS_TOKEN_KEY)
        .await?
        .is_some_and(|token| is_valid_string(&token));

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(views::index_page(authenticated)))
}

/// Spotify 로그인 시작
///
/// 새 state를 세션에 저장한 뒤 인가 URL로 리다이렉트합니다.
///
/// # Endpoint
/// `GET /login`
#[get("/login")]
pub async fn login(
    auth_service: web::Data<SpotifyAuthService>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let request = auth_service.authorization_request();

    session.insert(OAUTH_STATE_KEY, &request.state).await?;

    log::info!("Spotify 로그인 리다이렉트");
    Ok(redirect(&request.url))
}

/// Spotify OAuth 콜백
///
/// Spotify에서 리다이렉트되어 돌아오는 요청을 처리합니다.
///
/// # Endpoint
/// `GET /callback?code=...&state=...` 또는 `GET /callback?error=...&state=...`
///
/// # Flow
/// 1. `error`가 있으면 그대로 에러 뷰에 표시 (세션과 업스트림은 건드리지 않음)
/// 2. `code`가 없으면 에러 뷰
/// 3. `state`가 세션에 저장된 값과 다르면 에러 뷰 (업스트림 호출 없음)
/// 4. 토큰 교환 후 세션 ID를 새로 발급하고(이전 세션과 state는 폐기) 토큰을 저장한 뒤 홈으로 리다이렉트
#[get("/callback")]
pub async fn callback(
    query: web::Query<OAuthCallbackQuery>,
    auth_service: web::Data<SpotifyAuthService>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();

    if let Some(error) = query.error.as_deref().filter(|e| is_valid_string(e)) {
        log::warn!("Spotify 인가 거부: {}", error);
        return Ok(render_error(error));
    }

    let Some(code) = query.code.as_deref().filter(|c| is_valid_string(c)) else {
        log::warn!("콜백에 authorization code 없음");
        return Ok(render_error("Authorization code not received"));
    };

    let expected_state = session.get(OAUTH_STATE_KEY).await?;
    let state_matches = matches!(
        (expected_state.as_deref(), query.state.as_deref()),
        (Some(expected), Some(received)) if is_valid_string(expected) && expected == received
    );
    if !state_matches {
        log::warn!("OAuth state 불일치 - 토큰 교환 중단");
        return Ok(render_error("Invalid OAuth state"));
    }

    let Some(credentials) = auth_service.exchange_code(code).await else {
        return Ok(render_error("Failed to get access token"));
    };

    session.renew().await?;
    session.insert(ACCESS_TOKEN_KEY, &credentials.access_token).await?;

    log::info!("Spotify 로그인 완료");
    Ok(redirect("/"))
}

/// 로그아웃
///
/// # Endpoint
/// `GET /logout`
#[get("/logout")]
pub async fn logout(session: Session) -> Result<HttpResponse, AppError> {
    session.remove(ACCESS_TOKEN_KEY).await?;

    log::info!("Spotify 로그아웃");
    Ok(redirect("/"))
}
