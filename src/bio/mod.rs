pub mod extract;
pub mod image;

use std::time::Duration;

use anyhow::Context;
use tracing::debug;

use crate::error::{Error, Result};

/// Status plus raw body. The status is reported, not enforced, at this layer.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Single-shot GET. Swapped for an in-memory fake in tests.
pub trait Transport {
    fn get(&self, url: &str) -> Result<HttpResponse>;
}

pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::network(url, e))?;
        let status = resp.status().as_u16();
        let body = resp.bytes().map_err(|e| Error::network(url, e))?;
        debug!(url, status, size = body.len(), "GET complete");
        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// Fetch the biography page. One attempt, status handed back untouched.
pub fn fetch_page(transport: &dyn Transport, profile_url: &str) -> Result<HttpResponse> {
    transport.get(profile_url)
}
