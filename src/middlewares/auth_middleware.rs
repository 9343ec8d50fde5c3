//! Spotify 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 세션에 Spotify 토큰이 있는지 확인하고,
//! 있으면 [`SpotifyAccessToken`](crate::domain::models::SpotifyAccessToken)으로 꺼내 둡니다.
//! 토큰이 없으면 업스트림을 호출하지 않고 바로 401을 돌려줍니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::SpotifyAuthMiddlewareService;

/// Spotify 세션 인증 미들웨어
pub struct SpotifyAuthMiddleware;

impl SpotifyAuthMiddleware {
    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for SpotifyAuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = SpotifyAuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SpotifyAuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, web, App, HttpResponse};
    use chrono::Duration;

    use super::*;
    use crate::domain::models::SpotifyAccessToken;
    use crate::middlewares::SessionMiddleware;
    use crate::session::{InMemorySessionStore, SessionStore, ACCESS_TOKEN_KEY};
    use crate::config::SessionConfig;

    async fn echo_token(token: SpotifyAccessToken) -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({"token": token.as_str()}))
    }

    fn app_store() -> Arc<dyn SessionStore> {
        Arc::new(InMemorySessionStore::new(Duration::minutes(30)))
    }

    #[actix_web::test]
    async fn test_missing_token_returns_401() {
        let app = test::init_service(
            App::new()
                .wrap(SessionMiddleware::new(app_store(), false))
                .service(
                    web::scope("/api")
                        .wrap(SpotifyAuthMiddleware::required())
                        .route("/me", web::get().to(echo_token)),
                ),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/me").to_request()).await;

        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Not authenticated with Spotify");
    }

    #[actix_web::test]
    async fn test_token_is_passed_to_handler() {
        let store = app_store();
        let session_id = uuid::Uuid::new_v4().to_string();
        store.set(&session_id, ACCESS_TOKEN_KEY, "tok1").await.unwrap();

        let app = test::init_service(
            App::new()
                .wrap(SessionMiddleware::new(store, false))
                .service(
                    web::scope("/api")
                        .wrap(SpotifyAuthMiddleware::required())
                        .route("/me", web::get().to(echo_token)),
                ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/me")
            .cookie(actix_web::cookie::Cookie::new(SessionConfig::COOKIE_NAME, session_id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["token"], "tok1");
    }

    #[actix_web::test]
    async fn test_empty_token_is_rejected() {
        let store = app_store();
        let session_id = uuid::Uuid::new_v4().to_string();
        store.set(&session_id, ACCESS_TOKEN_KEY, "").await.unwrap();

        let app = test::init_service(
            App::new()
                .wrap(SessionMiddleware::new(store, false))
                .service(
                    web::scope("/api")
                        .wrap(SpotifyAuthMiddleware::required())
                        .route("/me", web::get().to(echo_token)),
                ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/me")
            .cookie(actix_web::cookie::Cookie::new(SessionConfig::COOKIE_NAME, session_id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }
}
