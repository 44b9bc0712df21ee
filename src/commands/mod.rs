//! Command implementations, one handler per resource operation.

pub mod analytics;
pub mod legacy;
pub mod sitemaps;
pub mod sites;

use crate::core::dispatch::CommandRegistry;
use crate::core::format::Format;
use crate::core::options::BoundOptions;
use crate::error::{Result, WmtError};

/// Build the registry of all built-in commands.
#[must_use]
pub fn builtin_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    registry.register("webmasters.sites.list", sites::SitesListCommand::factory);
    registry.register("webmasters.sites.get", sites::SitesGetCommand::factory);
    registry.register("webmasters.sites.add", sites::SitesAddCommand::factory);
    registry.register("webmasters.sites.delete", sites::SitesDeleteCommand::factory);

    registry.register(
        "webmasters.sitemaps.list",
        sitemaps::SitemapsListCommand::factory,
    );
    registry.register(
        "webmasters.sitemaps.get",
        sitemaps::SitemapsGetCommand::factory,
    );
    registry.register(
        "webmasters.sitemaps.submit",
        sitemaps::SitemapsSubmitCommand::factory,
    );
    registry.register(
        "webmasters.sitemaps.delete",
        sitemaps::SitemapsDeleteCommand::factory,
    );

    registry.register(
        "webmasters.searchanalytics.query",
        analytics::SearchAnalyticsQueryCommand::factory,
    );

    registry.register(
        "webmasters.urlcrawlerrorscounts.query",
        legacy::CrawlErrorsCountsCommand::factory,
    );
    registry.register(
        "webmasters.urlcrawlerrorssamples.list",
        legacy::CrawlErrorsSamplesCommand::factory,
    );

    registry
}

/// Resolve the output format and file path for display commands.
///
/// Validates up front, before any remote call: the format must be one the
/// writer implements, and JSON output requires a file path.
pub(crate) fn resolve_output(opts: &BoundOptions) -> Result<(Format, Option<String>)> {
    let format = Format::from_arg(opts.require("format")?)?;

    if !format.is_console() && !format.is_json() {
        return Err(WmtError::InvalidArgument(format!(
            "{} output is not supported for this command",
            format.alias()
        )));
    }

    let file_path = opts
        .get("filePath")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(ToString::to_string);

    if format.is_json() && file_path.is_none() {
        return Err(WmtError::InvalidArgument("filepath is mandatory".to_string()));
    }

    Ok((format, file_path))
}
