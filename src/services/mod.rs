use reqwest::Url;
use serde_json::Value;

use crate::{error::OmdbResult, models::Query};

pub mod omdb;
pub mod probe;

/// Movie metadata lookup as seen by the probe runner
///
/// [`omdb::OmdbClient`] is the only real implementation; the trait exists so the
/// runner can be driven without network access.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieLookup: Send + Sync {
    /// Builds the request URL for a query without sending anything
    fn build_url(&self, query: &Query) -> OmdbResult<Url>;

    /// Sends a URL produced by [`MovieLookup::build_url`] and returns the decoded
    /// body, whatever its provider status
    async fn send(&self, query: &Query, url: Url) -> OmdbResult<Value>;

    /// Builds and sends in one step
    async fn fetch(&self, query: &Query) -> OmdbResult<Value> {
        let url = self.build_url(query)?;
        self.send(query, url).await
    }
}
