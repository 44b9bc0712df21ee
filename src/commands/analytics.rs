//! Search-analytics commands.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{ApiClient, SearchAnalyticsQuery};
use crate::commands::resolve_output;
use crate::core::command::Command;
use crate::core::options::{BoundOptions, OptionSpec};
use crate::error::{Result, WmtError};
use crate::render;

const QUERY_SPECS: &[OptionSpec] = &[
    OptionSpec::required("siteUrl", "Site URL"),
    OptionSpec::required("startDate", "First day of the query range (YYYY-MM-DD)"),
    OptionSpec::required("endDate", "Last day of the query range (YYYY-MM-DD)"),
    OptionSpec::optional("dimensions", None, "Comma-separated dimensions (query, page, ...)"),
    OptionSpec::optional("rowLimit", Some("1000"), "Maximum rows to return"),
    OptionSpec::optional("format", Some("console"), "Output format (console, json, csv)"),
    OptionSpec::optional("filePath", None, "Output file path (required for json)"),
];

/// `webmasters.searchanalytics.query`
pub struct SearchAnalyticsQueryCommand {
    client: Arc<ApiClient>,
}

impl SearchAnalyticsQueryCommand {
    pub fn factory(client: Arc<ApiClient>) -> Box<dyn Command> {
        Box::new(Self { client })
    }

    fn build_query(opts: &BoundOptions) -> Result<SearchAnalyticsQuery> {
        let raw_limit = opts.require("rowLimit")?;
        let row_limit = raw_limit.parse::<u32>().map_err(|_| {
            WmtError::InvalidArgument(format!("invalid rowLimit '{raw_limit}', expected a number"))
        })?;

        let dimensions = opts
            .get("dimensions")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|d| !d.is_empty())
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(SearchAnalyticsQuery {
            start_date: opts.require("startDate")?.to_string(),
            end_date: opts.require("endDate")?.to_string(),
            dimensions,
            row_limit: Some(row_limit),
        })
    }
}

#[async_trait]
impl Command for SearchAnalyticsQueryCommand {
    fn usage(&self) -> &'static str {
        "Query search-analytics data (clicks, impressions, CTR, position) for a site"
    }

    fn options(&self) -> &'static [OptionSpec] {
        QUERY_SPECS
    }

    async fn execute(&self, opts: &BoundOptions) -> Result<()> {
        let (format, file_path) = resolve_output(opts)?;
        let site_url = opts.require("siteUrl")?;
        let query = Self::build_query(opts)?;
        let payload = self
            .client
            .query_search_analytics(site_url, &query)
            .await?
            .into_payload()?;
        render::write_json(&payload, format, file_path.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options;
    use crate::error::ErrorKind;

    fn bound(raw: &[&str]) -> BoundOptions {
        let tokens: Vec<String> = raw.iter().map(ToString::to_string).collect();
        options::bind(QUERY_SPECS, &tokens).unwrap()
    }

    #[test]
    fn builds_query_with_defaults() {
        let opts = bound(&[
            "-siteUrl",
            "https://example.com",
            "-startDate",
            "2026-07-01",
            "-endDate",
            "2026-07-31",
        ]);
        let query = SearchAnalyticsQueryCommand::build_query(&opts).unwrap();
        assert_eq!(query.start_date, "2026-07-01");
        assert_eq!(query.row_limit, Some(1000));
        assert!(query.dimensions.is_empty());
    }

    #[test]
    fn splits_dimensions_on_commas() {
        let opts = bound(&[
            "-siteUrl",
            "https://example.com",
            "-startDate",
            "2026-07-01",
            "-endDate",
            "2026-07-31",
            "-dimensions",
            "query, page",
        ]);
        let query = SearchAnalyticsQueryCommand::build_query(&opts).unwrap();
        assert_eq!(query.dimensions, vec!["query", "page"]);
    }

    #[test]
    fn bad_row_limit_is_argument_error() {
        let opts = bound(&[
            "-siteUrl",
            "https://example.com",
            "-startDate",
            "2026-07-01",
            "-endDate",
            "2026-07-31",
            "-rowLimit",
            "plenty",
        ]);
        let err = SearchAnalyticsQueryCommand::build_query(&opts).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentValidation);
        assert!(err.to_string().contains("plenty"));
    }
}
