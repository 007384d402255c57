// src/core/net.rs
// HTTPS GET with a browser-like header set. Bodies are returned as opaque text.

use std::future::Future;

use reqwest::header::{self, HeaderMap, HeaderValue};

use crate::config::consts::{ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use crate::error::FetchError;

/// Source of page bodies for the updater. The HTTP client is the only
/// production implementation; tests plug in canned pages.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

fn browser_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
    h.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE));
    h.insert(header::DNT, HeaderValue::from_static("1"));
    h.insert(header::UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    h
}

impl HttpFetcher {
    /// No timeout: a hung request stalls the run.
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(browser_headers())
            .build()?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let res = self.client.get(url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16(), url: s!(url) });
        }
        let body = res.text().await?;
        logd!(url, status = status.as_u16(), bytes = body.len(), "fetched page");
        Ok(body)
    }
}
