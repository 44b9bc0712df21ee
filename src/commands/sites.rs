//! Site resource commands.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::ApiClient;
use crate::commands::resolve_output;
use crate::core::command::Command;
use crate::core::options::{BoundOptions, OptionSpec};
use crate::error::Result;
use crate::render;

const OUTPUT_SPECS: &[OptionSpec] = &[
    OptionSpec::optional("format", Some("console"), "Output format (console, json, csv)"),
    OptionSpec::optional("filePath", None, "Output file path (required for json)"),
];

const SITE_OUTPUT_SPECS: &[OptionSpec] = &[
    OptionSpec::required("siteUrl", "Site URL"),
    OptionSpec::optional("format", Some("console"), "Output format (console, json, csv)"),
    OptionSpec::optional("filePath", None, "Output file path (required for json)"),
];

const SITE_SPECS: &[OptionSpec] = &[OptionSpec::required("siteUrl", "Site URL")];

/// `webmasters.sites.list`
pub struct SitesListCommand {
    client: Arc<ApiClient>,
}

impl SitesListCommand {
    pub fn factory(client: Arc<ApiClient>) -> Box<dyn Command> {
        Box::new(Self { client })
    }
}

#[async_trait]
impl Command for SitesListCommand {
    fn usage(&self) -> &'static str {
        "List the sites in the authenticated account"
    }

    fn options(&self) -> &'static [OptionSpec] {
        OUTPUT_SPECS
    }

    async fn execute(&self, opts: &BoundOptions) -> Result<()> {
        let (format, file_path) = resolve_output(opts)?;
        let payload = self.client.list_sites().await?.into_payload()?;
        render::write_json(&payload, format, file_path.as_deref())
    }
}

/// `webmasters.sites.get`
pub struct SitesGetCommand {
    client: Arc<ApiClient>,
}

impl SitesGetCommand {
    pub fn factory(client: Arc<ApiClient>) -> Box<dyn Command> {
        Box::new(Self { client })
    }
}

#[async_trait]
impl Command for SitesGetCommand {
    fn usage(&self) -> &'static str {
        "Show one site's entry, including the permission level"
    }

    fn options(&self) -> &'static [OptionSpec] {
        SITE_OUTPUT_SPECS
    }

    async fn execute(&self, opts: &BoundOptions) -> Result<()> {
        let (format, file_path) = resolve_output(opts)?;
        let site_url = opts.require("siteUrl")?;
        let payload = self.client.get_site(site_url).await?.into_payload()?;
        render::write_json(&payload, format, file_path.as_deref())
    }
}

/// `webmasters.sites.add`
pub struct SitesAddCommand {
    client: Arc<ApiClient>,
}

impl SitesAddCommand {
    pub fn factory(client: Arc<ApiClient>) -> Box<dyn Command> {
        Box::new(Self { client })
    }
}

#[async_trait]
impl Command for SitesAddCommand {
    fn usage(&self) -> &'static str {
        "Add a site to the authenticated account"
    }

    fn options(&self) -> &'static [OptionSpec] {
        SITE_SPECS
    }

    async fn execute(&self, opts: &BoundOptions) -> Result<()> {
        let site_url = opts.require("siteUrl")?;
        self.client.add_site(site_url).await?.into_payload()?;
        println!("Site added: {site_url}");
        Ok(())
    }
}

/// `webmasters.sites.delete`
pub struct SitesDeleteCommand {
    client: Arc<ApiClient>,
}

impl SitesDeleteCommand {
    pub fn factory(client: Arc<ApiClient>) -> Box<dyn Command> {
        Box::new(Self { client })
    }
}

#[async_trait]
impl Command for SitesDeleteCommand {
    fn usage(&self) -> &'static str {
        "Remove a site from the authenticated account"
    }

    fn options(&self) -> &'static [OptionSpec] {
        SITE_SPECS
    }

    async fn execute(&self, opts: &BoundOptions) -> Result<()> {
        let site_url = opts.require("siteUrl")?;
        self.client.delete_site(site_url).await?.into_payload()?;
        println!("Site removed: {site_url}");
        Ok(())
    }
}
