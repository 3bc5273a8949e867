//! Output formatting for CLI commands
//!
//! Provides utilities for formatting command output in human-readable
//! or JSON formats. Supports colored output (respects NO_COLOR env var).

use crate::core::types::{RunStatus, SkipKind};

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for document IDs
    pub fn document_id(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for file paths
    pub fn file_path(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for success messages
    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }
}

/// Format duration into human-readable string
pub fn format_duration(secs: f64) -> String {
    if secs >= 60.0 {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs - (mins * 60.0);
        format!("{mins:.0}m {remaining_secs:.1}s")
    } else if secs >= 1.0 {
        format!("{secs:.2}s")
    } else {
        let ms = secs * 1000.0;
        format!("{ms:.0}ms")
    }
}

/// Short label for a run status
pub fn status_label(status: RunStatus) -> &'static str {
    match status {
        RunStatus::Success => "success",
        RunStatus::PartialSuccess => "partial success",
        RunStatus::Failure => "failure",
    }
}

/// Run status with color
pub fn format_status_colored(status: RunStatus) -> String {
    let label = status_label(status);
    match status {
        RunStatus::Success => colors::success(label).to_string(),
        RunStatus::PartialSuccess => colors::warning(label).to_string(),
        RunStatus::Failure => colors::error(label).to_string(),
    }
}

/// Short label for a skip kind
pub fn skip_label(kind: SkipKind) -> &'static str {
    match kind {
        SkipKind::UnreadableFile => "unreadable",
        SkipKind::MissingDocumentId => "no document_id",
        SkipKind::InvalidPage => "invalid page",
        SkipKind::EmptyPage => "empty page",
        SkipKind::InvalidChunk => "invalid chunk",
        SkipKind::ExtractionFailed => "extraction failed",
        SkipKind::WriteFailed => "write failed",
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{}", colors::success(message));
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
