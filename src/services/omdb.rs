//! OMDb API client
//!
//! Turns a [`Query`] into a GET request against the OMDb endpoint and hands back the
//! decoded body as an untyped JSON tree. The provider's own `Response: "False"`
//! convention is logged but never turned into an error.
use crate::{
    error::{OmdbError, OmdbResult},
    models::{Credentials, Envelope, ProviderStatus, Query},
    services::MovieLookup,
};
use reqwest::{Client as HttpClient, Url};
use serde_json::Value;

const API_KEY_PARAM: &str = "apikey";

#[derive(Clone, Debug)]
pub struct OmdbClient {
    http_client: HttpClient,
    credentials: Credentials,
    base_url: Url,
}

impl OmdbClient {
    /// Creates a client for the given endpoint, e.g. `http://www.omdbapi.com/`
    pub fn new(credentials: Credentials, base_url: &str) -> OmdbResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            OmdbError::Config(format!("Invalid OMDb base URL '{}': {}", base_url, e))
        })?;

        Ok(Self {
            http_client: HttpClient::new(),
            credentials,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl MovieLookup for OmdbClient {
    fn build_url(&self, query: &Query) -> OmdbResult<Url> {
        query.validate()?;

        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair(API_KEY_PARAM, self.credentials.api_key());
            for (key, value) in query.params() {
                pairs.append_pair(key, &value);
            }
        }

        Ok(url)
    }

    async fn send(&self, query: &Query, url: Url) -> OmdbResult<Value> {
        tracing::debug!(
            query_kind = query.kind(),
            url = %redact_api_key(&url),
            provider = "omdb",
            "Sending request"
        );

        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                query_kind = query.kind(),
                status = %status,
                provider = "omdb",
                "Non-success status, decoding body anyway"
            );
        }

        let response_text = response.text().await?;
        tracing::debug!(response = %response_text, "Raw OMDb response");

        let body = decode_body(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                query_kind = query.kind(),
                status = %status,
                "Failed to decode OMDb response"
            );
            e
        })?;

        let envelope = Envelope::new(&body);
        match envelope.status() {
            ProviderStatus::Found => tracing::info!(
                query = %query,
                status = %status,
                total_results = envelope.total_results(),
                provider = "omdb",
                "Lookup completed"
            ),
            ProviderStatus::Failed(error) => tracing::warn!(
                query = %query,
                error = error.as_deref().unwrap_or("unspecified"),
                provider = "omdb",
                "Provider reported failure"
            ),
            ProviderStatus::Unknown => tracing::warn!(
                query = %query,
                provider = "omdb",
                "Response carries no provider status"
            ),
        }

        Ok(body)
    }
}

/// Decodes a response body into an opaque JSON value
pub fn decode_body(text: &str) -> OmdbResult<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Renders a URL with the `apikey` value masked, for log output
pub fn redact_api_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == API_KEY_PARAM {
                "REDACTED".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();

    if !pairs.is_empty() {
        redacted.query_pairs_mut().clear().extend_pairs(pairs);
    }

    redacted.to_string()
}
