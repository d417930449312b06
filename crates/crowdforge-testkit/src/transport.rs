use async_trait::async_trait;
use crowdforge::infra::{
    InfraError,
    http::{HttpResponse, HttpTransport},
};
use serde_json::Value;
use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

///
/// RecordedRequest
///

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub body: Option<Value>,
}

///
/// Canned
///

#[derive(Clone, Debug)]
enum Canned {
    Reply { status: u16, body: Value },
    Fail(String),
}

///
/// StubTransport
///
/// Answers exactly the routes it was given; anything else is a transport
/// error, so a typo in a test URL fails loudly instead of returning an
/// accidental 404 semantic.
///

#[derive(Debug, Default)]
pub struct StubTransport {
    routes: Mutex<HashMap<(&'static str, String), Canned>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StubTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_get(&self, url: impl Into<String>, status: u16, body: Value) {
        self.route("GET", url.into(), Canned::Reply { status, body });
    }

    pub fn on_post(&self, url: impl Into<String>, status: u16, body: Value) {
        self.route("POST", url.into(), Canned::Reply { status, body });
    }

    /// Make a GET to this URL fail at the transport level.
    pub fn fail_get(&self, url: impl Into<String>, message: impl Into<String>) {
        self.route("GET", url.into(), Canned::Fail(message.into()));
    }

    /// Make a POST to this URL fail at the transport level.
    pub fn fail_post(&self, url: impl Into<String>, message: impl Into<String>) {
        self.route("POST", url.into(), Canned::Fail(message.into()));
    }

    /// Everything that was asked of this transport, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn route(&self, method: &'static str, url: String, canned: Canned) {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((method, url), canned);
    }

    fn record(&self, method: &'static str, url: &str, body: Option<Value>) {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedRequest {
                method,
                url: url.to_string(),
                body,
            });
    }

    fn answer(&self, method: &'static str, url: &str) -> Result<HttpResponse, InfraError> {
        let canned = self
            .routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(method, url.to_string()))
            .cloned();

        match canned {
            Some(Canned::Reply { status, body }) => Ok(HttpResponse::new(
                status,
                serde_json::to_vec(&body).expect("canned body serializes"),
            )),
            Some(Canned::Fail(message)) => Err(InfraError::Transport(message)),
            None => Err(InfraError::Transport(format!("no stub for {method} {url}"))),
        }
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, InfraError> {
        self.record("GET", url, None);
        self.answer("GET", url)
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, InfraError> {
        self.record("POST", url, Some(body.clone()));
        self.answer("POST", url)
    }
}
