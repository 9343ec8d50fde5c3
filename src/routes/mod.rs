//! API 라우트 설정 모듈
//!
//! 브라우저 OAuth 엔드포인트, Spotify 릴레이 API, 운영용 엔드포인트를 등록합니다.
//!
//! # Route Groups
//!
//! ## Public 라우트 (인증 불필요)
//! - `GET /`, `/login`, `/callback`, `/logout`
//! - `GET /health`
//! - `GET /config-check` (개발 환경 전용)
//!
//! ## Protected 라우트 (세션에 Spotify 토큰 필요)
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/spotify")
//!         .wrap(SpotifyAuthMiddleware::required())
//!         .service(handlers::spotify::top_tracks)
//! );
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(auth_service)
//!     .app_data(spotify_service)
//!     .app_data(web::Data::new(Environment::current()))
//!     .wrap(SessionMiddleware::new(store, secure_cookie))
//!     .configure(configure_all_routes);
//! ```

use crate::config::Environment;
use crate::errors::AppError;
use crate::handlers;
use crate::middlewares::SpotifyAuthMiddleware;
use crate::services::auth::SpotifyAuthService;
use actix_web::{get, web, HttpResponse};
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Operational endpoints
    cfg.service(health_check);
    cfg.service(config_check);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_spotify_routes(cfg);
}

/// 브라우저 OAuth 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /` - 홈 화면
/// - `GET /login` - Spotify 인가 페이지로 302
/// - `GET /callback` - 토큰 교환 후 홈으로 302, 실패 시 에러 뷰
/// - `GET /logout` - 토큰 제거 후 홈으로 302
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::index)
        .service(handlers::auth::login)
        .service(handlers::auth::callback)
        .service(handlers::auth::logout);
}

/// Spotify 릴레이 라우트를 설정합니다
///
/// 스코프 전체에 [`SpotifyAuthMiddleware`]가 적용되어 토큰이 없으면 401을 돌려줍니다.
///
/// # Examples
///
/// ```bash
/// curl -b "SpotifyApp.Session=<id>" http://localhost:8080/api/spotify/top-tracks
///
/// curl -X POST -b "SpotifyApp.Session=<id>" http://localhost:8080/api/spotify/play \
///   -H "Content-Type: application/json" \
///   -d '{"trackUri":"spotify:track:4uLU6hMCjMI75M1A2tKUQC"}'
/// ```
fn configure_spotify_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/spotify")
            .wrap(SpotifyAuthMiddleware::required())
            .service(handlers::spotify::top_tracks)
            .service(handlers::spotify::now_playing)
            .service(handlers::spotify::following_artists)
            .service(handlers::spotify::play)
            .service(handlers::spotify::stop)
    );
}

/// JSON 본문 추출 설정
///
/// 깨진 본문도 다른 실패와 같은 `{"error": ...}` 400 응답이 되도록 합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-01-01T00:00:00+00:00",
///   "environment": "Production"
/// }
/// ```
#[get("/health")]
async fn health_check(environment: web::Data<Environment>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": environment.as_str()
    }))
}

/// 개발 환경에서만 설정 상태를 보여줍니다. 시크릿 값 자체는 노출하지 않습니다.
#[get("/config-check")]
async fn config_check(
    environment: web::Data<Environment>,
    auth_service: web::Data<SpotifyAuthService>,
) -> HttpResponse {
    if !environment.is_development() {
        return HttpResponse::NotFound().finish();
    }

    let config = auth_service.config();
    HttpResponse::Ok().json(json!({
        "hasClientId": !config.client_id().is_empty(),
        "hasClientSecret": !config.client_secret().is_empty(),
        "redirectUri": config.redirect_uri(),
        "environment": environment.as_str()
    }))
}
