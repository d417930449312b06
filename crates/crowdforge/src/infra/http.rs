use crate::infra::InfraError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

///
/// HttpTransport
///
/// Raw HTTP passthrough. No retry, no backoff, no interpretation beyond
/// handing back status and body. The trait exists so repository and
/// registry tests can substitute a scripted transport for a socket.
///

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, InfraError>;

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, InfraError>;
}

///
/// HttpResponse
///

#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, InfraError> {
        serde_json::from_slice(&self.body).map_err(InfraError::from)
    }
}

///
/// ReqwestTransport
///

#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, InfraError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| InfraError::Transport(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| InfraError::Transport(err.to_string()))?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, InfraError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| InfraError::Transport(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| InfraError::Transport(err.to_string()))?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
