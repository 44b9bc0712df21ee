//! Declarative option binding.
//!
//! Each command declares its options as a static [`OptionSpec`] table; the
//! binder populates a [`BoundOptions`] map from the raw CLI tokens before
//! `execute()` runs. Parsing (token syntax) and validation (required flags,
//! defaults) are two distinct phases, and every failure surfaces as an
//! argument-validation error.
//!
//! Option names follow the API's single-dash camelCase convention
//! (`-siteUrl`) and match case-insensitively, so `-feedpath` binds the
//! `feedPath` option.

use std::collections::HashMap;

use crate::error::{Result, WmtError};

/// Static metadata for one named option.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    /// Canonical option name as shown in usage text (without the dash).
    pub name: &'static str,
    /// Whether binding fails when the option is absent.
    pub required: bool,
    /// Value applied when the option is absent and not required.
    pub default: Option<&'static str>,
    /// One-line description for usage text.
    pub help: &'static str,
}

impl OptionSpec {
    /// A required option.
    #[must_use]
    pub const fn required(name: &'static str, help: &'static str) -> Self {
        Self {
            name,
            required: true,
            default: None,
            help,
        }
    }

    /// An optional option, with or without a default value.
    #[must_use]
    pub const fn optional(
        name: &'static str,
        default: Option<&'static str>,
        help: &'static str,
    ) -> Self {
        Self {
            name,
            required: false,
            default,
            help,
        }
    }
}

/// Option values bound for a single invocation.
///
/// Keys are the canonical spec names; lookups go through the same names.
#[derive(Debug, Default)]
pub struct BoundOptions {
    values: HashMap<&'static str, String>,
}

impl BoundOptions {
    /// Look up an option value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Look up an option value, failing if absent.
    ///
    /// Binding already enforces `required` specs, so this only fails for
    /// optional options without a default.
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| WmtError::MissingOption(name.to_string()))
    }
}

/// Bind raw CLI tokens onto an option table.
///
/// Phase one parses `-name value` pairs, rejecting unknown names, dangling
/// flags, and duplicates. Phase two applies defaults and enforces required
/// options.
pub fn bind(specs: &'static [OptionSpec], tokens: &[String]) -> Result<BoundOptions> {
    let mut values: HashMap<&'static str, String> = HashMap::new();

    // Parse phase
    let mut iter = tokens.iter();
    while let Some(token) = iter.next() {
        let name = token
            .strip_prefix("--")
            .or_else(|| token.strip_prefix('-'))
            .ok_or_else(|| {
                WmtError::InvalidArgument(format!("expected an option, got '{token}'"))
            })?;

        let spec = specs
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| WmtError::InvalidArgument(format!("unknown option: -{name}")))?;

        let value = iter
            .next()
            .ok_or_else(|| WmtError::InvalidArgument(format!("missing value for option -{name}")))?;

        if values.insert(spec.name, value.clone()).is_some() {
            return Err(WmtError::InvalidArgument(format!(
                "duplicate option: -{}",
                spec.name
            )));
        }
    }

    // Validate phase
    for spec in specs {
        if values.contains_key(spec.name) {
            continue;
        }
        if let Some(default) = spec.default {
            values.insert(spec.name, default.to_string());
        } else if spec.required {
            return Err(WmtError::MissingOption(spec.name.to_string()));
        }
    }

    Ok(BoundOptions { values })
}
