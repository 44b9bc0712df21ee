//! Legacy crawl-error commands.
//!
//! The crawl-errors endpoints were retired from the API; these handlers
//! keep the tokens resolvable but fail fast without a network round trip.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::ApiClient;
use crate::core::command::Command;
use crate::core::options::{BoundOptions, OptionSpec};
use crate::error::{Result, WmtError};

const COUNTS_SPECS: &[OptionSpec] = &[OptionSpec::required("siteUrl", "Site URL")];

const SAMPLES_SPECS: &[OptionSpec] = &[
    OptionSpec::required("siteUrl", "Site URL"),
    OptionSpec::optional("id", None, "Sample identifier filter"),
];

/// `webmasters.urlcrawlerrorscounts.query`
pub struct CrawlErrorsCountsCommand;

impl CrawlErrorsCountsCommand {
    pub fn factory(_client: Arc<ApiClient>) -> Box<dyn Command> {
        Box::new(Self)
    }
}

#[async_trait]
impl Command for CrawlErrorsCountsCommand {
    fn usage(&self) -> &'static str {
        "Query crawl-error counts (retired endpoint, always fails)"
    }

    fn options(&self) -> &'static [OptionSpec] {
        COUNTS_SPECS
    }

    async fn execute(&self, opts: &BoundOptions) -> Result<()> {
        opts.require("siteUrl")?;
        Err(WmtError::EndpointRetired(
            "webmasters.urlcrawlerrorscounts.query".to_string(),
        ))
    }
}

/// `webmasters.urlcrawlerrorssamples.list`
pub struct CrawlErrorsSamplesCommand;

impl CrawlErrorsSamplesCommand {
    pub fn factory(_client: Arc<ApiClient>) -> Box<dyn Command> {
        Box::new(Self)
    }
}

#[async_trait]
impl Command for CrawlErrorsSamplesCommand {
    fn usage(&self) -> &'static str {
        "List crawl-error samples (retired endpoint, always fails)"
    }

    fn options(&self) -> &'static [OptionSpec] {
        SAMPLES_SPECS
    }

    async fn execute(&self, opts: &BoundOptions) -> Result<()> {
        opts.require("siteUrl")?;
        Err(WmtError::EndpointRetired(
            "webmasters.urlcrawlerrorssamples.list".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options;
    use crate::error::ErrorKind;

    #[tokio::test]
    async fn counts_command_fails_with_io_class_error() {
        let command = CrawlErrorsCountsCommand;
        let opts = options::bind(
            COUNTS_SPECS,
            &["-siteUrl".to_string(), "https://example.com".to_string()],
        )
        .unwrap();
        let err = command.execute(&opts).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("retired"));
    }

    #[tokio::test]
    async fn samples_command_accepts_id_filter() {
        let command = CrawlErrorsSamplesCommand;
        let opts = options::bind(
            SAMPLES_SPECS,
            &[
                "-siteUrl".to_string(),
                "https://example.com".to_string(),
                "-id".to_string(),
                "sample-7".to_string(),
            ],
        )
        .unwrap();
        let err = command.execute(&opts).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
