//
//  gitlink
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Formatting for what the CLI prints:
//!
//! - **Text**: links on stdout, styled status lines on stderr/stdout
//! - **JSON**: machine-readable output for scripting
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: the available output formats
//! - [`OutputWriter`]: entry point for writing links and status messages
//! - [`table`]: platform and registry tables using `comfy_table`
//! - [`json`]: JSON serialization using `serde_json`
//!
//! ## Example
//!
//! ```rust,ignore
//! use gitlink::output::{OutputFormat, OutputWriter};
//!
//! let writer = OutputWriter::new(OutputFormat::Text);
//! writer.write_links(&links)?;
//! writer.write_success("Git link copied to clipboard");
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use crate::link::GitLink;

/// Represents the available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text, one link per line, with colored status messages.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Picks JSON when `--json` was given.
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Writes links and status messages in the configured format.
///
/// # Notes
///
/// Color support is detected from the terminal; it is off when stdout is
/// piped or `NO_COLOR` is set.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints built links: one URL per line, or a JSON array.
    pub fn write_links(&self, links: &[GitLink]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(&links),
            OutputFormat::Text => {
                for link in links {
                    println!("{}", link.url);
                }
                Ok(())
            }
        }
    }

    /// Writes an error message to stderr, prefixed with "error:".
    pub fn write_error(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    /// Writes a warning message to stderr, prefixed with "warning:".
    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    /// Writes an informational message, prefixed with an arrow.
    ///
    /// Goes to stderr so stdout stays clean for links.
    pub fn write_info(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("→").cyan(), msg);
        } else {
            eprintln!("→ {}", msg);
        }
    }

    /// Writes a success message to stderr, prefixed with a checkmark.
    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("✓").green().bold(), msg);
        } else {
            eprintln!("✓ {}", msg);
        }
    }
}

/// Prints a bold section header followed by a separator line.
pub fn print_header(text: &str) {
    use console::style;
    println!();
    println!("{}", style(text).bold());
    println!("{}", "-".repeat(50));
}

/// Prints an indented `key: value` line, `-` for missing values.
pub fn print_field(key: &str, value: Option<&str>, color: bool) {
    use console::style;
    let value = value.unwrap_or("-");
    if color {
        println!("  {}: {}", style(key).cyan(), value);
    } else {
        println!("  {}: {}", key, value);
    }
}
