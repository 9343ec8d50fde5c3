//! 캐싱 계층 모듈
//!
//! Redis 연결과 해시 기반 명령을 제공합니다. 여러 인스턴스가 세션을 공유해야 할 때
//! [`RedisSessionStore`](crate::session::RedisSessionStore)가 사용합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let redis = RedisClient::new(&SessionConfig::redis_url()).await?;
//! redis.hset_with_expiry("session:abc", "SpotifyOAuthState", "uuid", 1800).await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! SESSION_BACKEND=redis
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
