//! 세션 쿠키 미들웨어
//!
//! 요청마다 세션 ID를 결정하고 [`Session`] 핸들을 request extensions에 넣습니다.
//! 쿠키가 없거나 UUID 형식이 아니면 새 세션 ID를 발급해 응답에 쿠키로 내려보냅니다.
//! 핸들러가 세션 ID를 갱신한 경우(로그인 성공)에도 새 ID로 쿠키를 다시 내려보냅니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::session::{Session, SessionStore};

/// 세션 미들웨어
pub struct SessionMiddleware {
    store: Arc<dyn SessionStore>,
    secure_cookie: bool,
}

impl SessionMiddleware {
    pub fn new(store: Arc<dyn SessionStore>, secure_cookie: bool) -> Self {
        Self {
            store,
            secure_cookie,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SessionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
            store: self.store.clone(),
            secure_cookie: self.secure_cookie,
        }))
    }
}

pub struct SessionMiddlewareService<S> {
    service: Rc<S>,
    store: Arc<dyn SessionStore>,
    secure_cookie: bool,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let secure_cookie = self.secure_cookie;

        let existing = req
            .cookie(SessionConfig::COOKIE_NAME)
            .map(|cookie| cookie.value().to_string())
            .filter(|id| Uuid::parse_str(id).is_ok());

        let (session_id, is_new) = match existing {
            Some(id) => (id, false),
            None => (Uuid::new_v4().to_string(), true),
        };

        let session = Session::new(session_id, self.store.clone());
        req.extensions_mut().insert(session.clone());

        Box::pin(async move {
            let mut res = service.call(req).await?;

            if is_new || session.is_renewed() {
                log::debug!("세션 쿠키 발급");
                let cookie = Cookie::build(SessionConfig::COOKIE_NAME, session.id())
                    .path("/")
                    .http_only(true)
                    .same_site(SameSite::Lax)
                    .secure(secure_cookie)
                    .finish();

                res.response_mut()
                    .add_cookie(&cookie)
                    .map_err(actix_web::error::ErrorInternalServerError)?;
            }

            Ok(res)
        })
    }
}
