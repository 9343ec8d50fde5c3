//! Spotify relay HTTP Handlers
//!
//! `/api/spotify` 스코프의 JSON 엔드포인트입니다. 스코프 전체가
//! [`SpotifyAuthMiddleware`](crate::middlewares::SpotifyAuthMiddleware)로 보호되므로
//! 핸들러에 도달한 요청은 항상 [`SpotifyAccessToken`]을 가지고 있습니다.
//!
//! | 결과 | 응답 |
//! |------|------|
//! | 성공 | `200 {"data": ...}` 또는 `200 {"success": true}` |
//! | 실패 | `400 {"error": "..."}` |
use actix_web::{get, post, web, HttpResponse};
use serde::Serialize;
use serde_json::json;
use validator::Validate;
use crate::domain::{NowPlaying, OperationResult, PlayTrackRequest, SpotifyAccessToken};
use crate::errors::AppError;
use crate::services::spotify::SpotifyService;

fn data_response<T: Serialize>(result: OperationResult<T>) -> Result<HttpResponse, AppError> {
    let data = result.into_result().map_err(AppError::UpstreamError)?;
    Ok(HttpResponse::Ok().json(json!({ "data": data })))
}

fn success_response(result: OperationResult<()>) -> Result<HttpResponse, AppError> {
    result.into_result().map_err(AppError::UpstreamError)?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

/// # Endpoint
/// `GET /api/spotify/top-tracks`
#[get("/top-tracks")]
pub async fn top_tracks(
    token: SpotifyAccessToken,
    spotify: web::Data<SpotifyService>,
) -> Result<HttpResponse, AppError> {
    data_response(spotify.top_tracks(token.as_str()).await)
}

/// 재생 중인 곡이 없으면 `{"data": null}`을 돌려줍니다
///
/// # Endpoint
/// `GET /api/spotify/now-playing`
#[get("/now-playing")]
pub async fn now_playing(
    token: SpotifyAccessToken,
    spotify: web::Data<SpotifyService>,
) -> Result<HttpResponse, AppError> {
    match spotify.now_playing(token.as_str()).await {
        NowPlaying::Playing(playing) => Ok(HttpResponse::Ok().json(json!({ "data": playing }))),
        NowPlaying::Idle => Ok(HttpResponse::Ok().json(json!({ "data": null }))),
        NowPlaying::Failed(message) => Err(AppError::UpstreamError(message)),
    }
}

/// # Endpoint
/// `GET /api/spotify/following-artists`
#[get("/following-artists")]
pub async fn following_artists(
    token: SpotifyAccessToken,
    spotify: web::Data<SpotifyService>,
) -> Result<HttpResponse, AppError> {
    data_response(spotify.following_artists(token.as_str()).await)
}

/// # Endpoint
/// `POST /api/spotify/play`
///
/// ```json
/// { "trackUri": "spotify:track:4uLU6hMCjMI75M1A2tKUQC" }
/// ```
#[post("/play")]
pub async fn play(
    token: SpotifyAccessToken,
    spotify: web::Data<SpotifyService>,
    payload: web::Json<PlayTrackRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    success_response(spotify.start_playback(token.as_str(), &payload.track_uri).await)
}

/// # Endpoint
/// `POST /api/spotify/stop`
#[post("/stop")]
pub async fn stop(
    token: SpotifyAccessToken,
    spotify: web::Data<SpotifyService>,
) -> Result<HttpResponse, AppError> {
    success_response(spotify.stop_playback(token.as_str()).await)
}
