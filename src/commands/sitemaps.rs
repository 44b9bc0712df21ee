//! Sitemap resource commands.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::ApiClient;
use crate::commands::resolve_output;
use crate::core::command::Command;
use crate::core::options::{BoundOptions, OptionSpec};
use crate::error::Result;
use crate::render;

const SITE_OUTPUT_SPECS: &[OptionSpec] = &[
    OptionSpec::required("siteUrl", "Site URL"),
    OptionSpec::optional("format", Some("console"), "Output format (console, json, csv)"),
    OptionSpec::optional("filePath", None, "Output file path (required for json)"),
];

const FEED_OUTPUT_SPECS: &[OptionSpec] = &[
    OptionSpec::required("siteUrl", "Site URL"),
    OptionSpec::required("feedPath", "Sitemap URL or path"),
    OptionSpec::optional("format", Some("console"), "Output format (console, json, csv)"),
    OptionSpec::optional("filePath", None, "Output file path (required for json)"),
];

const FEED_SPECS: &[OptionSpec] = &[
    OptionSpec::required("siteUrl", "Site URL"),
    OptionSpec::required("feedPath", "Sitemap URL or path"),
];

/// `webmasters.sitemaps.list`
pub struct SitemapsListCommand {
    client: Arc<ApiClient>,
}

impl SitemapsListCommand {
    pub fn factory(client: Arc<ApiClient>) -> Box<dyn Command> {
        Box::new(Self { client })
    }
}

#[async_trait]
impl Command for SitemapsListCommand {
    fn usage(&self) -> &'static str {
        "List the sitemaps submitted for a site"
    }

    fn options(&self) -> &'static [OptionSpec] {
        SITE_OUTPUT_SPECS
    }

    async fn execute(&self, opts: &BoundOptions) -> Result<()> {
        let (format, file_path) = resolve_output(opts)?;
        let site_url = opts.require("siteUrl")?;
        let payload = self.client.list_sitemaps(site_url).await?.into_payload()?;
        render::write_json(&payload, format, file_path.as_deref())
    }
}

/// `webmasters.sitemaps.get`
pub struct SitemapsGetCommand {
    client: Arc<ApiClient>,
}

impl SitemapsGetCommand {
    pub fn factory(client: Arc<ApiClient>) -> Box<dyn Command> {
        Box::new(Self { client })
    }
}

#[async_trait]
impl Command for SitemapsGetCommand {
    fn usage(&self) -> &'static str {
        "Show one sitemap's status, warnings, and errors"
    }

    fn options(&self) -> &'static [OptionSpec] {
        FEED_OUTPUT_SPECS
    }

    async fn execute(&self, opts: &BoundOptions) -> Result<()> {
        let (format, file_path) = resolve_output(opts)?;
        let site_url = opts.require("siteUrl")?;
        let feed_path = opts.require("feedPath")?;
        let payload = self
            .client
            .get_sitemap(site_url, feed_path)
            .await?
            .into_payload()?;
        render::write_json(&payload, format, file_path.as_deref())
    }
}

/// `webmasters.sitemaps.submit`
pub struct SitemapsSubmitCommand {
    client: Arc<ApiClient>,
}

impl SitemapsSubmitCommand {
    pub fn factory(client: Arc<ApiClient>) -> Box<dyn Command> {
        Box::new(Self { client })
    }
}

#[async_trait]
impl Command for SitemapsSubmitCommand {
    fn usage(&self) -> &'static str {
        "Submit a sitemap for a site"
    }

    fn options(&self) -> &'static [OptionSpec] {
        FEED_SPECS
    }

    async fn execute(&self, opts: &BoundOptions) -> Result<()> {
        let site_url = opts.require("siteUrl")?;
        let feed_path = opts.require("feedPath")?;
        self.client
            .submit_sitemap(site_url, feed_path)
            .await?
            .into_payload()?;
        println!("Sitemap submitted: {feed_path}");
        Ok(())
    }
}

/// `webmasters.sitemaps.delete`
pub struct SitemapsDeleteCommand {
    client: Arc<ApiClient>,
}

impl SitemapsDeleteCommand {
    pub fn factory(client: Arc<ApiClient>) -> Box<dyn Command> {
        Box::new(Self { client })
    }
}

#[async_trait]
impl Command for SitemapsDeleteCommand {
    fn usage(&self) -> &'static str {
        "Delete a submitted sitemap"
    }

    fn options(&self) -> &'static [OptionSpec] {
        FEED_SPECS
    }

    async fn execute(&self, opts: &BoundOptions) -> Result<()> {
        let site_url = opts.require("siteUrl")?;
        let feed_path = opts.require("feedPath")?;
        self.client
            .delete_sitemap(site_url, feed_path)
            .await?
            .into_payload()?;
        println!("Sitemap deleted: {feed_path}");
        Ok(())
    }
}
