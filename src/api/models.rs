//! Request and response models for the webmasters API.

use serde::{Deserialize, Serialize};

/// One site in the user's account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SiteEntry {
    pub site_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_level: Option<String>,
}

/// Response body for the sites list operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitesListResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub site_entry: Vec<SiteEntry>,
}

/// One submitted sitemap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_submitted: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_pending: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<i64>,
}

/// Response body for the sitemaps list operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapsListResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sitemap: Vec<SitemapEntry>,
}

/// Search-analytics query request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchAnalyticsQuery {
    pub start_date: String,
    pub end_date: String,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub dimensions: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_limit: Option<u32>,
}

/// One row of a search-analytics result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchAnalyticsRow {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<String>,
    pub clicks: f64,
    pub impressions: f64,
    pub ctr: f64,
    pub position: f64,
}

/// Response body for the search-analytics query operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAnalyticsResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<SearchAnalyticsRow>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_aggregation_type: Option<String>,
}
