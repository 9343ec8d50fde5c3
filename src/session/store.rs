//! 세션 저장소 추상화와 인메모리 구현

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::errors::{AppError, AppResult};

/// Spotify 액세스 토큰이 저장되는 세션 키
pub const ACCESS_TOKEN_KEY: &str = "SpotifyAccessToken";

/// 로그인 시 발급한 OAuth state가 저장되는 세션 키
pub const OAUTH_STATE_KEY: &str = "SpotifyOAuthState";

/// 세션 ID별 문자열 키-값 저장소
///
/// 유휴 시간이 지난 세션은 존재하지 않는 것으로 취급합니다.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, session_id: &str, key: &str) -> AppResult<Option<String>>;

    async fn set(&self, session_id: &str, key: &str, value: &str) -> AppResult<()>;

    async fn remove(&self, session_id: &str, key: &str) -> AppResult<()>;

    /// 세션 하나의 모든 값을 버립니다
    async fn clear(&self, session_id: &str) -> AppResult<()>;
}

struct SessionEntry {
    values: HashMap<String, String>,
    last_access: DateTime<Utc>,
}

/// 프로세스 메모리에 세션을 보관하는 저장소 (단일 인스턴스 배포용)
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, SessionEntry>>,
    idle_timeout: Duration,
}

impl InMemorySessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout,
        }
    }

    fn is_expired(&self, entry: &SessionEntry, now: DateTime<Utc>) -> bool {
        now - entry.last_access > self.idle_timeout
    }

    fn poisoned() -> AppError {
        AppError::SessionError("세션 저장소 잠금 실패".to_string())
    }

    /// 만료된 세션을 모두 제거하고 제거한 개수를 돌려줍니다
    pub fn purge_expired(&self) -> AppResult<usize> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().map_err(|_| Self::poisoned())?;
        let before = sessions.len();
        sessions.retain(|_, entry| now - entry.last_access <= self.idle_timeout);
        Ok(before - sessions.len())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, session_id: &str, key: &str) -> AppResult<Option<String>> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().map_err(|_| Self::poisoned())?;

        let expired = match sessions.get(session_id) {
            Some(entry) => self.is_expired(entry, now),
            None => return Ok(None),
        };

        if expired {
            log::debug!("유휴 세션 만료: {}", session_id);
            sessions.remove(session_id);
            return Ok(None);
        }

        Ok(sessions.get_mut(session_id).and_then(|entry| {
            entry.last_access = now;
            entry.values.get(key).cloned()
        }))
    }

    async fn set(&self, session_id: &str, key: &str, value: &str) -> AppResult<()> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().map_err(|_| Self::poisoned())?;

        let entry = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| SessionEntry {
                values: HashMap::new(),
                last_access: now,
            });

        if now - entry.last_access > self.idle_timeout {
            entry.values.clear();
        }

        entry.last_access = now;
        entry.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, session_id: &str, key: &str) -> AppResult<()> {
        let mut sessions = self.sessions.write().map_err(|_| Self::poisoned())?;

        if let Some(entry) = sessions.get_mut(session_id) {
            entry.values.remove(key);
        }
        Ok(())
    }

    async fn clear(&self, session_id: &str) -> AppResult<()> {
        let mut sessions = self.sessions.write().map_err(|_| Self::poisoned())?;
        sessions.remove(session_id);
        Ok(())
    }
}
