use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue};

/// Base URL of the ZenMux Vertex AI gateway.
pub const DEFAULT_BASE_URL: &str = "https://zenmux.ai/api/vertex-ai";
/// Version tag of the generation API.
pub const DEFAULT_API_VERSION: &str = "v1";

const API_KEY_VAR: &str = "ZENMUX_API_KEY";

/// Client of the ZenMux generation API.
///
/// Holds the credential and endpoint configuration for every request made
/// through it. Construction performs no network I/O.
#[derive(Debug, Clone)]
pub struct Client {
    inner: reqwest::Client,
    base_url: String,
    api_version: String,
}

impl Client {
    /// Creates a new client against the default ZenMux endpoint.
    ///
    /// If no API key is provided, it will be obtained from the `ZENMUX_API_KEY`
    /// environment variable.
    #[inline]
    pub fn new(api_key: Option<&str>) -> Result<Self> {
        return Self::with_endpoint(api_key, DEFAULT_BASE_URL, DEFAULT_API_VERSION);
    }

    /// Creates a new client against a custom base URL and API version.
    pub fn with_endpoint(
        api_key: Option<&str>,
        base_url: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Result<Self> {
        let api_key = match api_key {
            Some(key) => key.to_string(),
            None => std::env::var(API_KEY_VAR).map_err(|_| {
                Error::Config(format!("{API_KEY_VAR} environment variable is not set"))
            })?,
        };

        if api_key.trim().is_empty() {
            return Err(Error::Config(format!("{API_KEY_VAR} is empty")));
        }

        let mut key = HeaderValue::from_str(&api_key)
            .map_err(|_| Error::Config("API key is not a valid header value".to_string()))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("x-goog-api-key", key);

        let inner = reqwest::Client::builder().default_headers(headers).build()?;

        let mut base_url: String = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        return Ok(Self {
            inner,
            base_url,
            api_version: api_version.into(),
        });
    }

    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[inline]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    #[inline]
    pub(crate) fn post(&self, path: impl AsRef<str>) -> reqwest::RequestBuilder {
        return self.inner.post(self.url(path));
    }

    #[inline]
    pub(crate) fn url(&self, path: impl AsRef<str>) -> String {
        return format!("{}/{}/{}", self.base_url, self.api_version, path.as_ref());
    }
}

impl AsRef<Client> for Client {
    #[inline]
    fn as_ref(&self) -> &Client {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_key_builds() {
        let client = Client::new(Some("test-key")).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.api_version(), DEFAULT_API_VERSION);
    }

    #[test]
    fn empty_key_is_a_config_error() {
        match Client::new(Some("  ")) {
            Err(Error::Config(_)) => {}
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_header_key_is_a_config_error() {
        match Client::new(Some("bad\nkey")) {
            Err(Error::Config(_)) => {}
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let client =
            Client::with_endpoint(Some("test-key"), "https://example.com/base///", "v1").unwrap();
        assert_eq!(
            client.url("models/some/model:generateContent"),
            "https://example.com/base/v1/models/some/model:generateContent"
        );
    }
}
