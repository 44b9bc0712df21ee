//! wmt - Webmaster Tools CLI
//!
//! CLI entry point.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use wmt::api::ApiClient;
use wmt::cli::Cli;
use wmt::commands;
use wmt::core::command::describe;
use wmt::core::config::Config;
use wmt::core::dispatch::Dispatcher;
use wmt::core::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = cli
        .log_level
        .as_deref()
        .and_then(logging::LogLevel::from_arg)
        .or_else(logging::parse_log_level_from_env)
        .unwrap_or_default();
    let log_format = if cli.json_output {
        logging::LogFormat::Json
    } else {
        logging::parse_log_format_from_env().unwrap_or_default()
    };
    let log_file = logging::parse_log_file_from_env();
    logging::init(log_level, log_format, log_file, cli.verbose);

    let no_color = cli.no_color || !wmt::util::env::should_use_color(cli.no_color);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", wmt::render::error::render_error(&e, no_color));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run(cli: Cli) -> wmt::Result<()> {
    let config = Config::load(&cli.config_overrides())?;
    let client = Arc::new(ApiClient::new(&config)?);
    let dispatcher = Dispatcher::new(commands::builtin_registry(), client);

    match cli.command {
        None => {
            print_quickstart(&dispatcher);
            Ok(())
        }
        Some(token) => dispatcher.run(&token, &cli.args).await,
    }
}

/// Print quickstart help when no command is given.
fn print_quickstart(dispatcher: &Dispatcher) {
    println!(
        r"wmt - Webmaster Tools CLI

Manage sites, sitemaps, and search analytics from the command line.

USAGE:
    wmt [OPTIONS] <COMMAND> [-option value]...

QUICK START:
    wmt webmasters.sites.list
    wmt webmasters.sitemaps.submit -siteUrl https://example.com -feedPath sitemap.xml
    wmt webmasters.searchanalytics.query -siteUrl https://example.com \
        -startDate 2026-07-01 -endDate 2026-07-31 -dimensions query

COMMANDS:"
    );

    for token in dispatcher.registry().tokens() {
        match dispatcher.instantiate(token) {
            Ok(command) => print!("{}", describe(token, command.as_ref())),
            Err(_) => println!("{token}"),
        }
    }

    println!("\nFor global flags: wmt --help");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
}
