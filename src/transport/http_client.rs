//! Spotify 호출용 HTTP 클라이언트
//!
//! 하나의 `reqwest::Client`(커넥션 풀)를 모든 요청이 공유합니다.
//! 인증 헤더는 공유 클라이언트가 아니라 매 요청 빌더에 붙이므로,
//! 동시에 처리되는 다른 사용자의 요청에 토큰이 섞이지 않습니다.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, header};
use serde_json::Value;
use thiserror::Error;

/// 업스트림 응답 (상태 코드 + 원본 본문)
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: String,
}

impl UpstreamResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// 응답을 받지 못한 실패 (연결, TLS, 본문 읽기 등)
///
/// 2xx가 아닌 응답은 여기에 속하지 않고 [`UpstreamResponse`]로 전달됩니다.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("upstream request failed: {0}")]
    Request(String),

    #[error("failed to read upstream body: {0}")]
    Body(String),
}

/// 업스트림 요청 발행기
///
/// 인증이 필요한 호출은 정확히 하나의 `Authorization: Bearer` 헤더를 가집니다.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn get(&self, url: &str, bearer_token: &str) -> Result<UpstreamResponse, TransportError>;

    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
        bearer_token: Option<&str>,
    ) -> Result<UpstreamResponse, TransportError>;

    async fn put_json(
        &self,
        url: &str,
        body: Option<&Value>,
        bearer_token: &str,
    ) -> Result<UpstreamResponse, TransportError>;
}

/// `reqwest` 기반 구현
#[derive(Clone, Default)]
pub struct ReqwestUpstreamClient {
    client: Client,
}

impl ReqwestUpstreamClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    fn get_request(&self, url: &str, bearer_token: &str) -> RequestBuilder {
        self.client.get(url).bearer_auth(bearer_token)
    }

    fn post_form_request(&self, url: &str, form: &[(&str, &str)], bearer_token: Option<&str>) -> RequestBuilder {
        let request = self.client.post(url).form(form);
        match bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn put_json_request(&self, url: &str, body: Option<&Value>, bearer_token: &str) -> RequestBuilder {
        let request = self.client.put(url).bearer_auth(bearer_token);
        match body {
            Some(json) => request.json(json),
            // 본문 없는 PUT에도 Content-Length를 보내야 Spotify가 411을 돌려주지 않음
            None => request.header(header::CONTENT_LENGTH, 0),
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<UpstreamResponse, TransportError> {
        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(UpstreamResponse { status, body })
    }
}

#[async_trait]
impl UpstreamClient for ReqwestUpstreamClient {
    async fn get(&self, url: &str, bearer_token: &str) -> Result<UpstreamResponse, TransportError> {
        self.send(self.get_request(url, bearer_token)).await
    }

    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
        bearer_token: Option<&str>,
    ) -> Result<UpstreamResponse, TransportError> {
        self.send(self.post_form_request(url, form, bearer_token)).await
    }

    async fn put_json(
        &self,
        url: &str,
        body: Option<&Value>,
        bearer_token: &str,
    ) -> Result<UpstreamResponse, TransportError> {
        self.send(self.put_json_request(url, body, bearer_token)).await
    }
}
