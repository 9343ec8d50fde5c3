//! SpotifyAuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::SpotifyAccessToken;
use crate::errors::{AppError, AppResult};
use crate::session::{Session, ACCESS_TOKEN_KEY};
use crate::utils::string_utils::is_valid_string;

/// 실제 인증 로직을 수행하는 서비스
pub struct SpotifyAuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SpotifyAuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            match extract_token_from_session(&req).await? {
                Some(token) => {
                    // 토큰을 Request Extensions에 저장
                    req.extensions_mut().insert(token);
                    log::debug!("Spotify 세션 인증 성공: {}", req.path());
                }
                None => {
                    log::warn!("Spotify 인증 없는 요청 거부: {}", req.path());
                    let response = HttpResponse::Unauthorized()
                        .json(serde_json::json!({
                            "error": "Not authenticated with Spotify"
                        }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 세션에서 Spotify 액세스 토큰을 꺼냅니다
///
/// 빈 문자열이나 공백뿐인 값은 토큰이 없는 것으로 취급합니다.
async fn extract_token_from_session(req: &ServiceRequest) -> AppResult<Option<SpotifyAccessToken>> {
    let session = req
        .extensions()
        .get::<Session>()
        .cloned()
        .ok_or_else(|| AppError::SessionError("세션 미들웨어가 설치되지 않았습니다".to_string()))?;

    let token = session.get(ACCESS_TOKEN_KEY).await?;

    Ok(token
        .filter(|t| is_valid_string(t))
        .map(SpotifyAccessToken))
}
