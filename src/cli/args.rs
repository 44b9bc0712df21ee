//! CLI argument definitions using clap.
//!
//! Clap handles the global flags and hands the command token plus its raw
//! option tokens to the dispatcher, which owns that grammar.

use std::path::PathBuf;

use clap::Parser;

/// Webmaster Tools CLI - manage sites, sitemaps, and search analytics.
#[derive(Parser, Debug)]
#[command(name = "wmt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Command token, e.g. "webmasters.sites.list"
    pub command: Option<String>,

    /// Command options, e.g. "-siteUrl https://example.com"
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    // === Global flags ===
    /// Path to the service-account credential file
    #[arg(long, value_name = "PATH", env = "WMT_CREDENTIALS")]
    pub credentials: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// API base URL override (used by tests)
    #[arg(long, value_name = "URL", hide = true)]
    pub api_base: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log level
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit JSONL logs to stderr
    #[arg(long)]
    pub json_output: bool,

    /// Verbose output (sets log level to debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Collect the configuration overrides carried by global flags.
    #[must_use]
    pub fn config_overrides(&self) -> crate::core::config::ConfigOverrides {
        crate::core::config::ConfigOverrides {
            api_base: self.api_base.clone(),
            timeout_secs: self.timeout,
            credentials_file: self.credentials.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn command_token_and_options_pass_through() {
        let cli = Cli::parse_from([
            "wmt",
            "webmasters.sitemaps.submit",
            "-siteUrl",
            "https://example.com",
            "-feedpath",
            "sitemap.xml",
        ]);
        assert_eq!(cli.command.as_deref(), Some("webmasters.sitemaps.submit"));
        assert_eq!(
            cli.args,
            vec!["-siteUrl", "https://example.com", "-feedpath", "sitemap.xml"]
        );
    }

    #[test]
    fn global_flags_precede_the_token() {
        let cli = Cli::parse_from(["wmt", "--verbose", "webmasters.sites.list"]);
        assert!(cli.verbose);
        assert_eq!(cli.command.as_deref(), Some("webmasters.sites.list"));
    }
}
