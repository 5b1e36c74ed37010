use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder};
use serde_json::{Map, Value};

use crate::clients::errors::{Error, Result};
use crate::clients::lookup::ArtistLookup;

const GENIUS_API_BASE: &str = "https://api.genius.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const ACCESS_TOKEN_VAR: &str = "GENIUS_ACCESS_TOKEN";
const BASE_URL_VAR: &str = "GENIUS_API_BASE_URL";
// JSON pointer to the primary artist of the first search hit
const FIRST_HIT_ARTIST_ID: &str = "/response/hits/0/result/primary_artist/id";

/// Genius API client authenticated with a bearer token
#[derive(Clone)]
pub struct GeniusClient {
    client: Client,
    access_token: String,
    base_url: String,
}

impl fmt::Debug for GeniusClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeniusClient")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl GeniusClient {
    /// Create a client for the public Genius API. No request is made and the
    /// token is not validated.
    pub fn new(access_token: impl Into<String>) -> Self {
        // Building the configured client only fails on TLS backend init; fall back to defaults then
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        GeniusClient {
            client,
            access_token: access_token.into(),
            base_url: GENIUS_API_BASE.to_string(),
        }
    }

    /// Start configuring a client with a custom base URL or timeout
    pub fn builder(access_token: impl Into<String>) -> GeniusClientBuilder {
        GeniusClientBuilder {
            access_token: access_token.into(),
            base_url: GENIUS_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    // Create a GeniusClient from environment variables or raise a configuration error
    pub fn try_default() -> Result<Self> {
        Self::try_from_env(None)
    }

    /// Like [`GeniusClient::try_default`], but an explicit token wins over
    /// the environment. The base URL override is still read from the environment.
    pub fn try_from_env(access_token: Option<String>) -> Result<Self> {
        let access_token = match access_token {
            Some(token) => token,
            None => std::env::var(ACCESS_TOKEN_VAR).map_err(|_| {
                Error::ConfigurationError(format!(
                    "Missing {ACCESS_TOKEN_VAR} in environment variables. Check README.MD for details."
                ))
            })?,
        };

        let mut builder = Self::builder(access_token);
        if let Ok(base_url) = std::env::var(BASE_URL_VAR) {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }

    /// Base URL every request is sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Authorization headers for the stored token
    pub fn build_headers(&self) -> Result<HeaderMap> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.access_token))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    /// Search for `search_term` and fetch the full record of the first hit's
    /// primary artist.
    ///
    /// Returns an empty object when the search has no hits or the hit carries
    /// no usable artist id; the artist endpoint is not called in that case.
    pub async fn lookup_artist(&self, search_term: &str) -> Result<Value> {
        let search_url = format!("{}/search", self.base_url);
        let search = self
            .send(self.client.get(&search_url).query(&[("q", search_term)]))
            .await?;

        let Some(artist_id) = first_hit_artist_id(&search) else {
            debug!("No artist found on Genius for {search_term:?}");
            return Ok(Value::Object(Map::new()));
        };

        let artist_url = format!("{}/artists/{artist_id}", self.base_url);
        self.send(self.client.get(&artist_url)).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value> {
        let response = request.headers(self.build_headers()?).send().await?;

        let status = response.status();
        let url = response.url().to_string();
        debug!("GET {url} -> {status}");

        if !status.is_success() {
            return Err(Error::HttpStatusError {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ArtistLookup for GeniusClient {
    async fn lookup_artist(&self, search_term: &str) -> Result<Value> {
        GeniusClient::lookup_artist(self, search_term).await
    }
}

// Genius ids are integers; accept numeric strings as well
fn first_hit_artist_id(search: &Value) -> Option<u64> {
    match search.pointer(FIRST_HIT_ARTIST_ID)? {
        Value::Number(id) => id.as_u64(),
        Value::String(id) => id.parse().ok(),
        _ => None,
    }
}

/// Builder for [`GeniusClient`]
#[derive(Debug)]
pub struct GeniusClientBuilder {
    access_token: String,
    base_url: String,
    timeout: Duration,
}

impl GeniusClientBuilder {
    /// Override the API base URL (mock servers, proxies)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Per-request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<GeniusClient> {
        let client = Client::builder().timeout(self.timeout).build()?;

        Ok(GeniusClient {
            client,
            access_token: self.access_token,
            base_url: self.base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_hit_artist_id_reads_numeric_and_string_ids() {
        let numeric = json!({"response": {"hits": [{"result": {"primary_artist": {"id": 130}}}]}});
        let string = json!({"response": {"hits": [{"result": {"primary_artist": {"id": "130"}}}]}});
        assert_eq!(first_hit_artist_id(&numeric), Some(130));
        assert_eq!(first_hit_artist_id(&string), Some(130));
    }

    #[test]
    fn first_hit_artist_id_is_none_for_missing_paths() {
        assert_eq!(first_hit_artist_id(&json!({})), None);
        assert_eq!(first_hit_artist_id(&json!({"response": {"hits": []}})), None);
        assert_eq!(
            first_hit_artist_id(&json!({"response": {"hits": [{"result": {}}]}})),
            None
        );
        assert_eq!(
            first_hit_artist_id(
                &json!({"response": {"hits": [{"result": {"primary_artist": {"id": null}}}]}})
            ),
            None
        );
    }

    #[test]
    fn first_hit_artist_id_only_uses_first_hit() {
        let search = json!({"response": {"hits": [
            {"result": {}},
            {"result": {"primary_artist": {"id": 7}}}
        ]}});
        assert_eq!(first_hit_artist_id(&search), None);
    }

    #[test]
    fn build_headers_uses_bearer_token() {
        let client = GeniusClient::new("secret-token");
        let headers = client.build_headers().unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[AUTHORIZATION], "Bearer secret-token");
        assert!(headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn build_headers_rejects_unencodable_token() {
        let client = GeniusClient::new("bad\ntoken");
        assert!(matches!(
            client.build_headers(),
            Err(Error::InvalidTokenError(_))
        ));
    }

    #[test]
    fn debug_hides_token() {
        let client = GeniusClient::new("secret-token");
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains(GENIUS_API_BASE));
    }

    #[test]
    fn try_from_env_prefers_explicit_token() {
        let client = GeniusClient::try_from_env(Some("explicit".to_string())).unwrap();
        assert_eq!(client.build_headers().unwrap()[AUTHORIZATION], "Bearer explicit");
    }

    #[test]
    fn builder_trims_trailing_slash() {
        let client = GeniusClient::builder("t")
            .base_url("http://localhost:1234/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234");
    }
}
