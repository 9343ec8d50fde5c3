//! 서버 측 세션
//!
//! 브라우저는 불투명한 세션 ID 쿠키만 가지고, 액세스 토큰과 OAuth state는 서버에만 저장됩니다.
//!
//! ```text
//! Cookie: SpotifyApp.Session=<uuid>
//!              │
//!              ▼
//!        SessionStore ── InMemorySessionStore (기본)
//!                     └─ RedisSessionStore    (SESSION_BACKEND=redis)
//! ```

pub mod redis_store;
pub mod session;
pub mod store;

pub use redis_store::RedisSessionStore;
pub use session::Session;
pub use store::*;
