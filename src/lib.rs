//
//  gitlink
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # GitLink Library
//!
//! Builds shareable web links to files (and line ranges) inside git
//! repositories, for any hosting platform that can be described by a URL
//! template.
//!
//! ## Overview
//!
//! A link is derived from three things git already knows (the repository
//! root, the remote URL and the current branch) plus a per-platform URL
//! template from the configuration:
//!
//! ```text
//! git@github.com:owner/repo.git  +  src/lib.rs:10-15  +  main
//!   → https://github.com/owner/repo/blob/main/src/lib.rs#L10-L15
//! ```
//!
//! ## Features
//!
//! - **Any platform**: GitHub, GitLab, Bitbucket and Gitee built in; add
//!   your own with a template
//! - **Line ranges**: single lines and selections, stripped cleanly when a
//!   whole file is linked
//! - **Sharing**: open in the browser, copy, Markdown links, Markdown code
//!   snippets, and snippet images
//!
//! ## Module Structure
//!
//! - [`cli`]: Command-line interface definitions using clap
//! - [`config`]: Platforms, domain registry and preferences
//! - [`context`]: git invocations, remote parsing, platform resolution
//! - [`link`]: Template rendering and link building
//! - [`output`]: Status messages and tables
//! - [`interactive`]: Interactive prompts and selectors
//! - [`util`]: Browser and clipboard integration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use gitlink::{Config, LinkBuilder, LinkRequest, SessionState};
//!
//! let config = Config::load().expect("Failed to load config");
//! let mut session = SessionState::new();
//! let request = LinkRequest::new(vec!["src/lib.rs".into()]);
//!
//! let links = LinkBuilder::new(&config)
//!     .build(&request, &mut session, |_| Ok(None))
//!     .expect("Failed to build link");
//! println!("{}", links[0].url);
//! ```

/// Command-line interface definitions.
pub mod cli;

/// Configuration file management.
///
/// Stored in platform-specific locations:
/// - Linux: `~/.config/gitlink/config.toml`
/// - macOS: `~/Library/Application Support/gitlink/config.toml`
/// - Windows: `%APPDATA%\gitlink\config.toml`
pub mod config;

/// Git repository context.
///
/// Runs `git`, parses remote URLs, resolves platforms from domains and
/// keeps the per-session remote choice.
pub mod context;

/// Error types shared by the library.
pub mod error;

/// Link building, URL templates and snippet formatting.
pub mod link;

/// Output formatting for status messages and tables.
pub mod output;

/// Interactive terminal UI components.
pub mod interactive;

/// Browser and clipboard helpers.
pub mod util;

pub use cli::Cli;
pub use config::Config;
pub use context::SessionState;
pub use error::LinkError;
pub use link::{GitLink, LinkBuilder, LinkRequest};

/// Application name constant.
///
/// Used for display and for the configuration directory name.
pub const APP_NAME: &str = "gitlink";

/// Application version, taken from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `8-15`: Missing repository or platform
/// - `16-31`: Operation-related issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// Not in a repository, or no platform matches the remote.
    pub const NOT_FOUND: i32 = 8;

    /// Operation cancelled by user.
    ///
    /// The user dismissed the remote picker. Nothing is printed.
    pub const CANCELLED: i32 = 16;
}
