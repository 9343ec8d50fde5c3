//! # Spotify Web API 릴레이 서비스
//!
//! 사용자 토큰으로 Spotify Web API를 호출하고 결과를 [`OperationResult`]로 투영합니다.
//! 업스트림 실패(전송 에러, 2xx가 아닌 응답, 파싱 실패)는 이 계층에서 모두 복구되며
//! 패닉이나 에러로 라우터까지 전파되지 않습니다.
//!
//! | 작업 | 업스트림 | 실패 메시지 |
//! |------|----------|-------------|
//! | `top_tracks` | `GET /v1/me/top/tracks` | `API Error: {status}` |
//! | `now_playing` | `GET /v1/me/player/currently-playing` | `API Error: {status}` |
//! | `following_artists` | `GET /v1/me/following` | `API Error: {status}` |
//! | `start_playback` | `PUT /v1/me/player/play` | 404 → 활성 기기 없음, 그 외 `Playback error: {status}` |
//! | `stop_playback` | `PUT /v1/me/player/pause` | 404 → 활성 기기 없음, 그 외 `Playback error: {status}` |

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::Value;

use crate::config::SPOTIFY_API_URL;
use crate::domain::dto::{FollowingArtistsResponse, StartPlaybackBody, TopTracksResponse};
use crate::domain::models::{Artist, CurrentlyPlaying, NowPlaying, OperationResult, Track};
use crate::transport::{TransportError, UpstreamClient, UpstreamResponse};

const TOP_TRACKS_LIMIT: u32 = 10;
const TOP_TRACKS_TIME_RANGE: &str = "short_term";
const FOLLOWING_ARTISTS_LIMIT: u32 = 50;

/// 작업별 이름과 실패 메시지 규칙
struct RelayOperation {
    name: &'static str,
    transport_failure: &'static str,
    status_failure: fn(StatusCode) -> String,
}

fn api_error(status: StatusCode) -> String {
    format!("API Error: {}", status.as_u16())
}

fn playback_error(status: StatusCode) -> String {
    format!("Playback error: {}", status.as_u16())
}

fn start_playback_error(status: StatusCode) -> String {
    if status == StatusCode::NOT_FOUND {
        "No active device found. Please open Spotify on a device first.".to_string()
    } else {
        playback_error(status)
    }
}

fn stop_playback_error(status: StatusCode) -> String {
    if status == StatusCode::NOT_FOUND {
        "No active device found".to_string()
    } else {
        playback_error(status)
    }
}

const TOP_TRACKS: RelayOperation = RelayOperation {
    name: "top tracks",
    transport_failure: "Failed to load top tracks",
    status_failure: api_error,
};

const NOW_PLAYING: RelayOperation = RelayOperation {
    name: "currently playing",
    transport_failure: "Failed to load currently playing track",
    status_failure: api_error,
};

const FOLLOWING_ARTISTS: RelayOperation = RelayOperation {
    name: "following artists",
    transport_failure: "Failed to load following artists",
    status_failure: api_error,
};

const START_PLAYBACK: RelayOperation = RelayOperation {
    name: "start playback",
    transport_failure: "Failed to start playback",
    status_failure: start_playback_error,
};

const STOP_PLAYBACK: RelayOperation = RelayOperation {
    name: "stop playback",
    transport_failure: "Failed to stop playback",
    status_failure: stop_playback_error,
};

pub struct SpotifyService {
    upstream: Arc<dyn UpstreamClient>,
    api_base: String,
}

impl SpotifyService {
    pub fn new(upstream: Arc<dyn UpstreamClient>) -> Self {
        Self {
            upstream,
            api_base: SPOTIFY_API_URL.to_string(),
        }
    }

    /// 최근 자주 들은 트랙 최대 10개
    pub async fn top_tracks(&self, access_token: &str) -> OperationResult<Vec<Track>> {
        let url = format!(
            "{}/v1/me/top/tracks?limit={}&time_range={}",
            self.api_base, TOP_TRACKS_LIMIT, TOP_TRACKS_TIME_RANGE
        );

        let response = self.upstream.get(&url, access_token).await;
        Self::project(response, &TOP_TRACKS, |body| {
            serde_json::from_str::<TopTracksResponse>(body)
        })
        .map(|page| page.items)
    }

    /// 현재 재생 중인 트랙
    ///
    /// 204 또는 빈 본문은 [`NowPlaying::Idle`]이며 실패가 아닙니다.
    pub async fn now_playing(&self, access_token: &str) -> NowPlaying {
        let url = format!("{}/v1/me/player/currently-playing", self.api_base);

        let response = self.upstream.get(&url, access_token).await;
        Self::project(response, &NOW_PLAYING, |body| {
            if body.trim().is_empty() {
                return Ok(None);
            }
            serde_json::from_str::<CurrentlyPlaying>(body).map(Some)
        })
        .into()
    }

    /// 팔로우 중인 아티스트 (첫 페이지, 최대 50명)
    pub async fn following_artists(&self, access_token: &str) -> OperationResult<Vec<Artist>> {
        let url = format!(
            "{}/v1/me/following?type=artist&limit={}",
            self.api_base, FOLLOWING_ARTISTS_LIMIT
        );

        let response = self.upstream.get(&url, access_token).await;
        Self::project(response, &FOLLOWING_ARTISTS, |body| {
            serde_json::from_str::<FollowingArtistsResponse>(body)
        })
        .map(|page| page.artists.items)
    }

    /// 사용자의 활성 기기에서 트랙 하나를 재생합니다
    pub async fn start_playback(&self, access_token: &str, track_uri: &str) -> OperationResult<()> {
        let url = format!("{}/v1/me/player/play", self.api_base);
        let body = match serde_json::to_value(StartPlaybackBody { uris: [track_uri] }) {
            Ok(body) => body,
            Err(e) => {
                log::error!("재생 요청 본문 직렬화 실패: {}", e);
                return OperationResult::failure(START_PLAYBACK.transport_failure);
            }
        };

        let response = self.upstream.put_json(&url, Some(&body), access_token).await;
        Self::project(response, &START_PLAYBACK, |_| Ok(()))
    }

    /// 사용자의 활성 기기에서 재생을 일시정지합니다
    ///
    /// 이미 멈춰 있는 상태에서 다시 호출해도 Spotify 응답을 그대로 따릅니다.
    pub async fn stop_playback(&self, access_token: &str) -> OperationResult<()> {
        let url = format!("{}/v1/me/player/pause", self.api_base);

        let response = self.upstream.put_json(&url, None::<&Value>, access_token).await;
        Self::project(response, &STOP_PLAYBACK, |_| Ok(()))
    }

    /// 업스트림 결과 하나를 작업 규칙에 따라 [`OperationResult`]로 바꿉니다
    fn project<T, F>(
        response: Result<UpstreamResponse, TransportError>,
        operation: &RelayOperation,
        projector: F,
    ) -> OperationResult<T>
    where
        F: FnOnce(&str) -> Result<T, serde_json::Error>,
    {
        let response = match response {
            Ok(response) => response,
            Err(e) => {
                log::error!("Spotify {} 요청 실패: {}", operation.name, e);
                return OperationResult::failure(operation.transport_failure);
            }
        };

        if !response.is_success() {
            log::warn!(
                "Spotify {} 실패. Status: {}, Error: {}",
                operation.name,
                response.status,
                response.body
            );
            return OperationResult::failure((operation.status_failure)(response.status));
        }

        match projector(&response.body) {
            Ok(data) => OperationResult::Success(data),
            Err(e) => {
                log::error!("Spotify {} 응답 파싱 실패: {}", operation.name, e);
                OperationResult::failure(format!("Failed to parse {} response", operation.name))
            }
        }
    }
}
