//
//  gitlink
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod completion;
mod config;
mod link;
mod snippet;

pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use link::{CopyCommand, OpenCommand, TargetArgs, UrlCommand};
pub use snippet::{ImageCommand, SnippetCommand};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::Config;
use crate::context::SessionState;
use crate::error::LinkError;
use crate::interactive::{is_interactive, prompt::prompt_confirm_with_default, selector};
use crate::link::{GitLink, LinkBuilder, LinkRequest};

/// GitLink - Share links to files in git repositories
#[derive(Parser, Debug)]
#[command(
    name = "gitlink",
    version,
    about = "Build web links to files in git repositories",
    long_about = "gitlink turns a file (and optionally a line range) in a git checkout into \
                  a link on its hosting platform.\n\n\
                  GitHub, GitLab, Bitbucket and Gitee work out of the box; other platforms \
                  are added with a URL template.",
    propagate_version = true,
    after_help = "Use 'gitlink <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Git remote to link against
    #[arg(long, short = 'r', global = true, env = "GITLINK_REMOTE")]
    pub remote: Option<String>,

    /// Branch to link to instead of the checked out one
    #[arg(long, short = 'b', global = true)]
    pub branch: Option<String>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable interactive prompts
    #[arg(long, global = true, env = "GITLINK_NO_PROMPT")]
    pub no_prompt: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print links to files
    Url(UrlCommand),

    /// Open links to files in the browser
    #[command(visible_alias = "browse")]
    Open(OpenCommand),

    /// Copy links to files to the clipboard
    #[command(visible_alias = "cp")]
    Copy(CopyCommand),

    /// Copy a Markdown code snippet headed by its link
    Snippet(SnippetCommand),

    /// Open an image of a code snippet
    Image(ImageCommand),

    /// Manage platforms, domains and preferences
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}

impl GlobalOptions {
    /// Whether prompts may be shown for this invocation.
    pub fn interactive(&self, config: &Config) -> bool {
        !self.no_prompt && config.prompts_enabled() && is_interactive()
    }
}

/// Builds links for `targets` using the saved configuration.
///
/// Returns the links together with the request they were built from, so
/// callers can tell editor requests from explorer ones.
pub(crate) fn build_links(
    targets: &TargetArgs,
    global: &GlobalOptions,
    config: &Config,
) -> Result<(Vec<GitLink>, LinkRequest)> {
    let interactive = global.interactive(config);
    let request = LinkRequest::new(targets.paths.clone())
        .with_lines(targets.lines)
        .with_remote(global.remote.clone())
        .with_branch(global.branch.clone())
        .interactive(interactive);
    debug!("Link request: {:?}", request);

    let mut session = SessionState::new();
    let result = LinkBuilder::new(config).build(&request, &mut session, |remotes| {
        selector::select_remote_prompt(remotes)
    });

    match result {
        Ok(links) => Ok((links, request)),
        Err(err @ LinkError::NoMatchingPlatform(_)) if interactive => {
            if prompt_confirm_with_default(
                "No platform matches this remote. Open the configuration to add one?",
                false,
            )? {
                config::edit_config_file(config)?;
            }
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}
