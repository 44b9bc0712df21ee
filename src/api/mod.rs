//! Client for the webmasters API.
//!
//! One method per remote operation; every HTTP outcome is converted into a
//! [`ApiResponse`] envelope. Transport failures surface as I/O-class errors
//! with the cause preserved.

pub mod auth;
pub mod envelope;
pub mod models;

use std::collections::HashMap;

use reqwest::{Client, Method, Url};
use serde_json::Value;

use crate::core::config::Config;
use crate::core::http;
use crate::error::{Result, WmtError};

pub use envelope::{ApiResponse, ResponseStatus};
pub use models::SearchAnalyticsQuery;

/// HTTP client bound to one API base URL and credential.
pub struct ApiClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
    timeout_secs: u64,
}

impl ApiClient {
    /// Construct a client from resolved configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.api_base)
            .map_err(|e| WmtError::Config(format!("invalid API base '{}': {e}", config.api_base)))?;
        let token = auth::load_token(config)?;
        Ok(Self {
            http: http::build_client(config.timeout)?,
            base_url,
            token,
            timeout_secs: config.timeout.as_secs(),
        })
    }

    /// Build an endpoint URL, percent-encoding each path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| WmtError::Config(format!("API base '{}' cannot take a path", self.base_url)))?
            .extend(segments);
        Ok(url)
    }

    /// Issue one request and wrap the outcome in an envelope.
    async fn request(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&Value>,
    ) -> Result<ApiResponse> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%method, %url, "API request");

        let mut builder = self.http.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                WmtError::Timeout(self.timeout_secs)
            } else {
                WmtError::Network(e.to_string())
            }
        })?;

        let code = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let text = response
            .text()
            .await
            .map_err(|e| WmtError::Network(e.to_string()))?;

        let payload = if text.trim().is_empty() {
            None
        } else {
            match serde_json::from_str(&text) {
                Ok(value) => Some(value),
                // Success bodies must parse; error bodies may be opaque
                Err(e) if (200..300).contains(&code) => return Err(WmtError::Json(e)),
                Err(_) => None,
            }
        };

        Ok(ApiResponse::from_parts(code, headers, payload))
    }

    // ==========================================================================
    // Sites
    // ==========================================================================

    /// List the sites in the user's account.
    pub async fn list_sites(&self) -> Result<ApiResponse> {
        self.request(Method::GET, &["sites"], None).await
    }

    /// Fetch one site's entry.
    pub async fn get_site(&self, site_url: &str) -> Result<ApiResponse> {
        self.request(Method::GET, &["sites", site_url], None).await
    }

    /// Add a site to the account.
    pub async fn add_site(&self, site_url: &str) -> Result<ApiResponse> {
        self.request(Method::PUT, &["sites", site_url], None).await
    }

    /// Remove a site from the account.
    pub async fn delete_site(&self, site_url: &str) -> Result<ApiResponse> {
        self.request(Method::DELETE, &["sites", site_url], None)
            .await
    }

    // ==========================================================================
    // Sitemaps
    // ==========================================================================

    /// List the sitemaps submitted for a site.
    pub async fn list_sitemaps(&self, site_url: &str) -> Result<ApiResponse> {
        self.request(Method::GET, &["sites", site_url, "sitemaps"], None)
            .await
    }

    /// Fetch one sitemap's status.
    pub async fn get_sitemap(&self, site_url: &str, feed_path: &str) -> Result<ApiResponse> {
        self.request(Method::GET, &["sites", site_url, "sitemaps", feed_path], None)
            .await
    }

    /// Submit a sitemap for a site.
    pub async fn submit_sitemap(&self, site_url: &str, feed_path: &str) -> Result<ApiResponse> {
        self.request(Method::PUT, &["sites", site_url, "sitemaps", feed_path], None)
            .await
    }

    /// Delete a submitted sitemap.
    pub async fn delete_sitemap(&self, site_url: &str, feed_path: &str) -> Result<ApiResponse> {
        self.request(
            Method::DELETE,
            &["sites", site_url, "sitemaps", feed_path],
            None,
        )
        .await
    }

    // ==========================================================================
    // Search analytics
    // ==========================================================================

    /// Run a search-analytics query against a site.
    pub async fn query_search_analytics(
        &self,
        site_url: &str,
        query: &SearchAnalyticsQuery,
    ) -> Result<ApiResponse> {
        let body = serde_json::to_value(query)?;
        self.request(
            Method::POST,
            &["sites", site_url, "searchAnalytics", "query"],
            Some(&body),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base: &str) -> ApiClient {
        let config = Config {
            api_base: base.to_string(),
            ..Config::default()
        };
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn endpoint_percent_encodes_site_urls() {
        let client = client_for("http://localhost:8080/webmasters/v3");
        let url = client
            .endpoint(&["sites", "https://example.com/", "sitemaps", "sitemap.xml"])
            .unwrap();
        let path = url.path();
        assert!(path.starts_with("/webmasters/v3/sites/"));
        // The embedded site URL's slashes must not introduce path segments
        assert!(path.contains("%2F%2Fexample.com%2F"));
        assert!(path.ends_with("/sitemaps/sitemap.xml"));
    }

    #[test]
    fn invalid_base_url_is_config_error() {
        let config = Config {
            api_base: "not a url".to_string(),
            ..Config::default()
        };
        assert!(ApiClient::new(&config).is_err());
    }
}
