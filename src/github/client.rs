use tracing::{debug, info};

use crate::error::Result;
use crate::github::request::EventsRequest;

/// Status, the rate-limit header and the undecoded body of one API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub rate_limit_remaining: Option<u64>,
    pub body: String,
}

pub trait Transport {
    fn send(&self, request: &EventsRequest) -> Result<RawResponse>;
}

/// Blocking reqwest client. Library default timeouts, no retries.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &EventsRequest) -> Result<RawResponse> {
        info!(url = %request.url, "fetching events");

        let mut builder = self.client.get(request.url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let rate_limit_remaining = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok());
        let body = response.text()?;

        debug!(status, ?rate_limit_remaining, bytes = body.len(), "response received");

        Ok(RawResponse {
            status,
            rate_limit_remaining,
            body,
        })
    }
}
