//! Spotify 릴레이 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! Spotify 설정이 하나라도 비어 있으면 포트를 열기 전에 종료합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use chrono::Duration;
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use spotify_relay_backend::caching::redis::RedisClient;
use spotify_relay_backend::config::{
    CorsConfig, Environment, ServerConfig, SessionBackend, SessionConfig, SpotifyConfig,
};
use spotify_relay_backend::middlewares::SessionMiddleware;
use spotify_relay_backend::routes::{configure_all_routes, json_config};
use spotify_relay_backend::services::auth::SpotifyAuthService;
use spotify_relay_backend::services::spotify::SpotifyService;
use spotify_relay_backend::session::{InMemorySessionStore, RedisSessionStore, SessionStore};
use spotify_relay_backend::transport::{ReqwestUpstreamClient, UpstreamClient};

const SESSION_PURGE_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 Spotify 릴레이 서비스 시작중...");

    let environment = Environment::current();
    info!("Environment: {}", environment.as_str());

    let spotify_config = SpotifyConfig::from_env().map_err(|e| {
        error!("❌ {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    // 하나의 커넥션 풀을 두 서비스가 공유
    let upstream: Arc<dyn UpstreamClient> = Arc::new(ReqwestUpstreamClient::new());
    let auth_service = web::Data::new(SpotifyAuthService::new(spotify_config, upstream.clone()));
    let spotify_service = web::Data::new(SpotifyService::new(upstream));

    let session_store = initialize_session_store().await?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(environment, auth_service, spotify_service, session_store).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 세션, 보안 헤더, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    environment: Environment,
    auth_service: web::Data<SpotifyAuthService>,
    spotify_service: web::Data<SpotifyService>,
    session_store: Arc<dyn SessionStore>,
) -> io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
    let secure_cookie = SessionConfig::secure_cookie_for_env(&environment);
    let security_headers_enabled = !environment.is_development();
    let allowed_origins = CorsConfig::allowed_origins();
    let environment = web::Data::new(environment);

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors(&allowed_origins);

        App::new()
            .app_data(auth_service.clone())
            .app_data(spotify_service.clone())
            .app_data(environment.clone())
            .app_data(json_config())

            .wrap(SessionMiddleware::new(session_store.clone(), secure_cookie))
            .wrap(middleware::Condition::new(security_headers_enabled, security_headers()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=spotify_relay_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// `SESSION_BACKEND`에 따라 세션 저장소를 만듭니다
///
/// Redis 연결에 실패하면 서버를 시작하지 않습니다.
async fn initialize_session_store() -> io::Result<Arc<dyn SessionStore>> {
    let idle_timeout = Duration::minutes(SessionConfig::IDLE_TIMEOUT_MINUTES);

    match SessionConfig::backend() {
        SessionBackend::Memory => {
            info!("📦 인메모리 세션 저장소 사용");
            let store = Arc::new(InMemorySessionStore::new(idle_timeout));
            spawn_session_purge(store.clone());
            Ok(store)
        }
        SessionBackend::Redis => {
            info!("📡 Redis 세션 저장소 연결 중...");
            let redis = RedisClient::new(&SessionConfig::redis_url())
                .await
                .map_err(|e| {
                    error!("❌ Redis 연결 실패: {}", e);
                    io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
                })?;
            Ok(Arc::new(RedisSessionStore::new(redis, idle_timeout.num_seconds())))
        }
    }
}

/// 만료된 인메모리 세션을 주기적으로 정리합니다
fn spawn_session_purge(store: Arc<InMemorySessionStore>) {
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(SESSION_PURGE_INTERVAL);
        loop {
            interval.tick().await;
            match store.purge_expired() {
                Ok(0) => {}
                Ok(purged) => info!("만료 세션 {}개 정리", purged),
                Err(e) => error!("세션 정리 실패: {}", e),
            }
        }
    });
}

/// 개발 환경이 아닐 때 모든 응답에 붙는 보안 헤더
fn security_headers() -> middleware::DefaultHeaders {
    middleware::DefaultHeaders::new()
        .add((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .add((header::X_FRAME_OPTIONS, "DENY"))
        .add((header::X_XSS_PROTECTION, "1; mode=block"))
        .add((header::REFERRER_POLICY, "strict-origin-when-cross-origin"))
        .add((header::STRICT_TRANSPORT_SECURITY, "max-age=31536000; includeSubDomains; preload"))
}

/// CORS 설정을 구성합니다
///
/// 브라우저가 세션 쿠키를 보낼 수 있도록 자격 증명을 허용합니다.
///
/// # Allowed Origins
///
/// `CORS_ALLOWED_ORIGINS` (기본값: `http://localhost:3000,http://localhost:8080`)
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        // 자격 증명(쿠키 등) 지원
        .supports_credentials()

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
