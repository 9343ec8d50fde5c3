//! 테스트용 가짜 업스트림
//!
//! URL 접두어별로 미리 정한 응답을 돌려주고, 호출 횟수와 요청 내용을 기록합니다.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use super::http_client::{TransportError, UpstreamClient, UpstreamResponse};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub bearer_token: Option<String>,
    pub form: Vec<(String, String)>,
    pub json: Option<Value>,
}

enum Scripted {
    Respond(StatusCode, String),
    Fail(String),
}

#[derive(Default)]
pub struct FakeUpstream {
    routes: Mutex<Vec<(String, Scripted)>>,
    calls: AtomicUsize,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    /// `url_prefix`로 시작하는 요청에 주어진 응답을 돌려줍니다
    pub fn respond(self, url_prefix: &str, status: StatusCode, body: &str) -> Self {
        self.routes
            .lock()
            .unwrap()
            .push((url_prefix.to_string(), Scripted::Respond(status, body.to_string())));
        self
    }

    /// `url_prefix`로 시작하는 요청을 전송 실패로 만듭니다
    pub fn fail(self, url_prefix: &str, reason: &str) -> Self {
        self.routes
            .lock()
            .unwrap()
            .push((url_prefix.to_string(), Scripted::Fail(reason.to_string())));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn dispatch(&self, request: RecordedRequest) -> Result<UpstreamResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let url = request.url.clone();
        self.requests.lock().unwrap().push(request);

        let routes = self.routes.lock().unwrap();
        match routes.iter().find(|(prefix, _)| url.starts_with(prefix.as_str())) {
            Some((_, Scripted::Respond(status, body))) => Ok(UpstreamResponse::new(*status, body.clone())),
            Some((_, Scripted::Fail(reason))) => Err(TransportError::Request(reason.clone())),
            None => Err(TransportError::Request(format!("no scripted response for {}", url))),
        }
    }
}

#[async_trait]
impl UpstreamClient for FakeUpstream {
    async fn get(&self, url: &str, bearer_token: &str) -> Result<UpstreamResponse, TransportError> {
        self.dispatch(RecordedRequest {
            method: "GET",
            url: url.to_string(),
            bearer_token: Some(bearer_token.to_string()),
            form: Vec::new(),
            json: None,
        })
    }

    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
        bearer_token: Option<&str>,
    ) -> Result<UpstreamResponse, TransportError> {
        self.dispatch(RecordedRequest {
            method: "POST",
            url: url.to_string(),
            bearer_token: bearer_token.map(str::to_string),
            form: form.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            json: None,
        })
    }

    async fn put_json(
        &self,
        url: &str,
        body: Option<&Value>,
        bearer_token: &str,
    ) -> Result<UpstreamResponse, TransportError> {
        self.dispatch(RecordedRequest {
            method: "PUT",
            url: url.to_string(),
            bearer_token: Some(bearer_token.to_string()),
            form: Vec::new(),
            json: body.cloned(),
        })
    }
}
