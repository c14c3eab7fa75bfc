use std::time::Duration;

use reqwest::Method;

use crate::{ConfigError, HttpMethod, PreparedRequest, RawResponse, TransportFailure};

#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, TransportFailure>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ConfigError::HttpClient(err.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, TransportFailure> {
        let timeout = request.timeout;
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), request.url)
            .timeout(timeout);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| map_reqwest_error(err, timeout))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| map_reqwest_error(err, timeout))?;

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Phrases failures so the classifier can recognise timeouts. Every other
/// failure without a usable response reads as a network error.
fn map_reqwest_error(err: reqwest::Error, timeout: Duration) -> TransportFailure {
    if err.is_timeout() {
        return TransportFailure::message(format!(
            "timeout of {}ms exceeded",
            timeout.as_millis()
        ));
    }
    TransportFailure::message(format!("Network Error: {err}"))
}
