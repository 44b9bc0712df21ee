//! Command registry and dispatcher.
//!
//! The registry is an explicit table from dotted command tokens
//! (`webmasters.<resource>.<action>`) to factory functions, built once at
//! startup and statically enumerable. The dispatcher validates the namespace
//! prefix, resolves the token, constructs the handler with the shared API
//! client handle, binds options, and invokes `execute()`.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::ApiClient;
use crate::core::command::Command;
use crate::core::options;
use crate::error::{ErrorKind, Result, WmtError};

/// Namespace prefix every command token must carry.
pub const COMMAND_PREFIX: &str = "webmasters.";

/// Constructs a handler for one invocation, injecting its collaborators.
pub type CommandFactory = fn(Arc<ApiClient>) -> Box<dyn Command>;

/// Explicit token-to-factory table.
#[derive(Default)]
pub struct CommandRegistry {
    entries: BTreeMap<&'static str, CommandFactory>,
}

impl CommandRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under its full dotted token.
    pub fn register(&mut self, token: &'static str, factory: CommandFactory) {
        debug_assert!(token.starts_with(COMMAND_PREFIX), "token outside namespace");
        self.entries.insert(token, factory);
    }

    /// Resolve a token to its factory.
    ///
    /// The token must carry the namespace prefix; a conforming token with no
    /// registry entry fails naming the token.
    pub fn resolve(&self, token: &str) -> Result<CommandFactory> {
        if token.is_empty() || !token.starts_with(COMMAND_PREFIX) {
            return Err(WmtError::InvalidArgument(format!(
                "command must start with '{COMMAND_PREFIX}', got '{token}'"
            )));
        }
        self.entries
            .get(token)
            .copied()
            .ok_or_else(|| WmtError::InvalidCommand(token.to_string()))
    }

    /// All registered tokens, in sorted order.
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves tokens, binds options, and runs commands.
pub struct Dispatcher {
    registry: CommandRegistry,
    client: Arc<ApiClient>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(registry: CommandRegistry, client: Arc<ApiClient>) -> Self {
        Self { registry, client }
    }

    #[must_use]
    pub const fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Instantiate the handler for a token without running it.
    pub fn instantiate(&self, token: &str) -> Result<Box<dyn Command>> {
        let factory = self.registry.resolve(token)?;
        Ok(factory(Arc::clone(&self.client)))
    }

    /// Run one command invocation: resolve, construct, bind, execute.
    ///
    /// Argument-validation and I/O-class failures are logged at error
    /// severity with the full cause chain, then re-raised unchanged. Other
    /// failures propagate unlogged.
    pub async fn run(&self, token: &str, args: &[String]) -> Result<()> {
        let result = self.dispatch(token, args).await;

        if let Err(err) = &result {
            match err.kind() {
                ErrorKind::ArgumentValidation | ErrorKind::Io => {
                    tracing::error!(command = token, error = %err.cause_chain(), "command failed");
                }
                ErrorKind::Internal => {}
            }
        }
        result
    }

    async fn dispatch(&self, token: &str, args: &[String]) -> Result<()> {
        let command = self.instantiate(token)?;
        let opts = options::bind(command.options(), args)?;

        tracing::debug!(command = token, "dispatching");
        command.execute(&opts).await
    }
}
