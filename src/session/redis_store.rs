//! Redis 기반 세션 저장소
//!
//! 여러 서버 인스턴스가 같은 세션을 봐야 할 때 사용합니다.
//! 세션 하나가 `session:{id}` 해시 하나이며, 접근할 때마다 만료 시간이 연장됩니다.

use async_trait::async_trait;

use crate::caching::redis::RedisClient;
use crate::errors::{AppResult, ErrorContext};
use crate::session::store::SessionStore;

pub struct RedisSessionStore {
    redis: RedisClient,
    idle_timeout_seconds: i64,
}

impl RedisSessionStore {
    pub fn new(redis: RedisClient, idle_timeout_seconds: i64) -> Self {
        Self {
            redis,
            idle_timeout_seconds,
        }
    }

    fn key(session_id: &str) -> String {
        format!("session:{}", session_id)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn get(&self, session_id: &str, key: &str) -> AppResult<Option<String>> {
        let redis_key = Self::key(session_id);
        let value = self
            .redis
            .hget(&redis_key, key)
            .await
            .context("Redis 세션 조회 실패")?;

        if value.is_some() {
            self.redis
                .expire(&redis_key, self.idle_timeout_seconds)
                .await
                .context("Redis 세션 만료 갱신 실패")?;
        }
        Ok(value)
    }

    async fn set(&self, session_id: &str, key: &str, value: &str) -> AppResult<()> {
        self.redis
            .hset_with_expiry(&Self::key(session_id), key, value, self.idle_timeout_seconds)
            .await
            .with_context(|| format!("Redis 세션 저장 실패 ({})", key))
    }

    async fn remove(&self, session_id: &str, key: &str) -> AppResult<()> {
        self.redis
            .hdel(&Self::key(session_id), key)
            .await
            .with_context(|| format!("Redis 세션 삭제 실패 ({})", key))
    }

    async fn clear(&self, session_id: &str) -> AppResult<()> {
        self.redis
            .del(&Self::key(session_id))
            .await
            .context("Redis 세션 폐기 실패")
    }
}
