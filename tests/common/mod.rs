//! Shared fixtures for integration tests.

#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wmt::api::models::{SiteEntry, SitemapEntry, SitemapsListResponse, SitesListResponse};
use wmt::core::config::Config;

/// Body returned by the mocked sites list endpoint.
#[must_use]
pub fn two_sites_body() -> Value {
    let body = SitesListResponse {
        site_entry: vec![
            SiteEntry {
                site_url: "https://www.example.com/".to_string(),
                permission_level: Some("siteOwner".to_string()),
            },
            SiteEntry {
                site_url: "https://blog.example.com/".to_string(),
                permission_level: Some("siteFullUser".to_string()),
            },
        ],
    };
    serde_json::to_value(body).expect("serialize fixture")
}

/// Body returned by the mocked sitemaps list endpoint.
#[must_use]
pub fn sitemaps_body() -> Value {
    let body = SitemapsListResponse {
        sitemap: vec![SitemapEntry {
            path: "https://www.example.com/sitemap.xml".to_string(),
            last_submitted: None,
            is_pending: Some(false),
            warnings: Some(0),
            errors: Some(0),
        }],
    };
    serde_json::to_value(body).expect("serialize fixture")
}

/// Standard API error body.
#[must_use]
pub fn error_body(code: u16, message: &str) -> Value {
    json!({"error": {"code": code, "message": message}})
}

/// Compute the request path the client produces for these segments,
/// using the same URL machinery as the client itself.
#[must_use]
pub fn api_path(segments: &[&str]) -> String {
    let mut url = reqwest::Url::parse("http://placeholder.invalid").expect("base url");
    url.path_segments_mut().expect("path segments").extend(segments);
    url.path().to_string()
}

/// Start a mock server answering the sites list endpoint with two sites.
pub async fn server_with_two_sites() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_sites_body()))
        .mount(&server)
        .await;
    server
}

/// Config pointing the client at a mock server.
#[must_use]
pub fn config_for(server: &MockServer) -> Config {
    Config {
        api_base: server.uri(),
        ..Config::default()
    }
}
