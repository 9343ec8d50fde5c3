//! Spotify 응답/요청 봉투
//!
//! 릴레이는 이 봉투를 파싱한 뒤 필요한 목록만 꺼내서 돌려줍니다.

use serde::{Deserialize, Serialize};

use crate::domain::models::{Artist, Track};

/// `GET /v1/me/top/tracks`
#[derive(Debug, Default, Deserialize)]
pub struct TopTracksResponse {
    #[serde(default)]
    pub items: Vec<Track>,
}

/// `GET /v1/me/following?type=artist`
#[derive(Debug, Default, Deserialize)]
pub struct FollowingArtistsResponse {
    #[serde(default)]
    pub artists: ArtistsPage,
}

/// 커서 기반 아티스트 페이지 (첫 페이지만 사용)
#[derive(Debug, Default, Deserialize)]
pub struct ArtistsPage {
    #[serde(default)]
    pub items: Vec<Artist>,
    #[serde(default)]
    pub total: u64,
}

/// `PUT /v1/me/player/play` 본문
#[derive(Debug, Serialize)]
pub struct StartPlaybackBody<'a> {
    pub uris: [&'a str; 1],
}
