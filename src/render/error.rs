//! Error rendering for stderr.
//!
//! Colored when stderr is a TTY and color is enabled, plain otherwise.

use colored::Colorize;

use crate::error::WmtError;
use crate::util::env::stderr_is_tty;

/// Render an error for the terminal.
#[must_use]
pub fn render_error(error: &WmtError, no_color: bool) -> String {
    if no_color || !stderr_is_tty() {
        render_plain(error)
    } else {
        render_colored(error)
    }
}

fn render_plain(error: &WmtError) -> String {
    let mut lines = vec![format!("error [{}]: {}", error.kind(), error)];
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        lines.push(format!("  caused by: {cause}"));
        source = cause.source();
    }
    lines.join("\n")
}

fn render_colored(error: &WmtError) -> String {
    let mut lines = vec![format!(
        "{} {}: {}",
        "error".red().bold(),
        format!("[{}]", error.kind()).dimmed(),
        error
    )];
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        lines.push(format!("  {} {cause}", "caused by:".dimmed()));
        source = cause.source();
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_no_ansi(s: &str) {
        assert!(!s.contains("\x1b["), "contains ANSI codes: {s}");
    }

    #[test]
    fn plain_render_includes_kind_and_message() {
        let err = WmtError::InvalidCommand("invalid.command".to_string());
        let output = render_plain(&err);
        assert!(output.contains("invalid argument"));
        assert!(output.contains("invalid.command"));
        assert_no_ansi(&output);
    }

    #[test]
    fn plain_render_includes_cause_chain() {
        let inner = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = WmtError::Io(inner);
        let output = render_plain(&err);
        assert!(output.contains("caused by:"));
        assert!(output.contains("denied"));
    }

    #[test]
    fn no_color_flag_forces_plain() {
        let err = WmtError::Timeout(30);
        let output = render_error(&err, true);
        assert_no_ansi(&output);
    }
}
