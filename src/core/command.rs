//! The command contract.
//!
//! A command is a single unit of work: build one request from its bound
//! options, call one remote operation, write or print the result. Commands
//! are constructed fresh per invocation by their registry factory and
//! discarded when `execute()` returns.

use async_trait::async_trait;

use crate::core::options::{BoundOptions, OptionSpec};
use crate::error::Result;

/// A dispatchable command.
#[async_trait]
pub trait Command: Send + Sync {
    /// One-line human-readable description. Must be non-empty for every
    /// registered command.
    fn usage(&self) -> &'static str;

    /// The option table the binder validates against.
    fn options(&self) -> &'static [OptionSpec];

    /// Perform the unit of work.
    ///
    /// # Errors
    ///
    /// Argument-validation errors for bad input discovered after binding,
    /// I/O-class errors for remote-call or file-write failures.
    async fn execute(&self, opts: &BoundOptions) -> Result<()>;
}

/// Render a command's usage line plus its option table.
#[must_use]
pub fn describe(name: &str, command: &dyn Command) -> String {
    let mut out = format!("{name}\n    {}\n", command.usage());
    for spec in command.options() {
        let requirement = match (spec.required, spec.default) {
            (true, _) => "required".to_string(),
            (false, Some(default)) => format!("default: {default}"),
            (false, None) => "optional".to_string(),
        };
        out.push_str(&format!(
            "    -{:<12} {} [{}]\n",
            spec.name, spec.help, requirement
        ));
    }
    out
}
