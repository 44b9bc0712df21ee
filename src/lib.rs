//! wmt - Webmaster Tools CLI
//!
//! A command-line client for the webmasters site-management and
//! search-analytics API: resolve a dotted command token to a handler, bind
//! its options, call one remote operation, and write the result to the
//! console or a JSON file.

// Note: deny (not forbid) to allow #[allow(unsafe_code)] in test helpers for env var manipulation
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod render;
pub mod util;

pub use error::{ExitCode, Result, WmtError};
