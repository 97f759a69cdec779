// src/core/net.rs
// Authenticated page reads against the consolidator site (blocking, one at a time).

use std::error::Error;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{COOKIE, HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue};

use crate::config::consts::{REQUEST_TIMEOUT_SECS, SESSION_COOKIE, USER_AGENT};
use crate::config::options::PluginOptions;

/// Source of raw listing HTML. `path` is one of `config::consts::PAGES`.
pub trait PageFetcher {
    fn fetch_page(&self, path: &str) -> Result<String, Box<dyn Error>>;
}

pub struct HttpFetcher {
    client: Client,
    options: PluginOptions,
}

impl HttpFetcher {
    /// Client that sends the session cookie and the XHR marker on every request.
    pub fn new(options: &PluginOptions, session_id: &str) -> Result<Self, Box<dyn Error>> {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, session_cookie(session_id)?);
        headers.insert(
            HeaderName::from_static("x-requested-with"),
            HeaderValue::from_static("XMLHttpRequest"),
        );

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client, options: options.clone() })
    }
}

/// `Cookie` header value for the session. Fails on control characters (e.g. a second line).
pub fn session_cookie(session_id: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(&format!("{SESSION_COOKIE}={session_id}"))
}

impl PageFetcher for HttpFetcher {
    fn fetch_page(&self, path: &str) -> Result<String, Box<dyn Error>> {
        let url = self.options.page_url(path);
        logd!("GET {url}");

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP error: {status} {url}").into());
        }
        Ok(response.text()?)
    }
}
