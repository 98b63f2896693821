//! Terminal styling for the few places that decorate output.
//!
//! This module uses the anstyle ecosystem:
//! - anstream for auto-detecting color support
//! - anstyle for composable styling
//!
//! Emitted messages are written exactly as given; only error reports from
//! `die` and the binary carry color.

use anstyle::{AnsiColor, Color, Style};

// ============================================================================
// Re-exports from anstream (auto-detecting output)
// ============================================================================

/// Auto-detecting eprintln that respects NO_COLOR, CLICOLOR_FORCE, and terminal capabilities
pub use anstream::eprintln;

// ============================================================================
// Semantic Style Constants
// ============================================================================

/// Error style (bold red) - use as `{ERROR}text{ERROR:#}`
pub const ERROR: Style = Style::new()
    .bold()
    .fg_color(Some(Color::Ansi(AnsiColor::Red)));

/// Format an error line the way the binary reports failures
pub fn error_line(message: impl std::fmt::Display) -> String {
    format!("{ERROR}error:{ERROR:#} {message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_line_wraps_prefix_only() {
        let line = error_line("boom");
        assert!(line.ends_with(" boom"));
        assert!(line.contains("error:"));
        assert!(line.starts_with(&ERROR.render().to_string()));
    }
}
