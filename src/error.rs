//
//  gitlink
//  error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Error types for link construction.
//!
//! Every failure while building a link is local and recoverable: the command
//! stops and reports one message. [`LinkError::Cancelled`] is the exception
//! that reports nothing, since the user asked for the stop.

use thiserror::Error;

use crate::exit_codes;

/// Everything that can stop a link from being built.
///
/// # Example
///
/// ```rust
/// use gitlink::LinkError;
///
/// let err = LinkError::NoMatchingPlatform("git@code.example.com:a/b.git".to_string());
/// assert!(err.to_string().contains("code.example.com"));
/// ```
#[derive(Error, Debug)]
pub enum LinkError {
    /// No file path was supplied.
    #[error("No file given")]
    NoFile,

    /// The file is outside any git working tree.
    #[error("{0} is not under Git version control")]
    NotInRepository(String),

    /// The repository has no remotes.
    #[error("No Git remote URL found")]
    NoRemote,

    /// `--remote` named a remote the repository does not have.
    #[error("Remote '{0}' does not exist")]
    UnknownRemote(String),

    /// Several remotes exist and prompting is disabled.
    #[error("Repository has several remotes ({0}); choose one with --remote")]
    RemoteSelectionRequired(String),

    /// The user dismissed the remote picker.
    #[error("Cancelled")]
    Cancelled,

    /// The terminal prompt itself failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// The remote URL is neither SSH nor HTTP(S).
    #[error("Failed to extract domain from remote URL \"{0}\"")]
    UnrecognizedRemote(String),

    /// No configured platform matches the remote's domain.
    #[error(
        "Could not detect which platform you use for remote URL \"{0}\". \
         You can configure custom platforms with `gitlink config add-platform` \
         and `gitlink config map-domain`."
    )]
    NoMatchingPlatform(String),

    /// `git rev-parse --abbrev-ref HEAD` failed.
    #[error("Failed to get current branch")]
    BranchLookup,

    /// A git subprocess failed.
    #[error("git {args} failed: {stderr}")]
    Git {
        /// Arguments passed to git, space separated
        args: String,
        /// Trimmed standard error of the process
        stderr: String,
    },

    /// The snippet lines could not be read.
    #[error("Failed to read snippet from {path}: {reason}")]
    ReadSnippet {
        /// File the snippet was read from
        path: String,
        /// What went wrong
        reason: String,
    },
}

impl LinkError {
    /// Maps the error onto the CLI's exit codes.
    pub fn exit_code(&self) -> i32 {
        match self {
            LinkError::Cancelled => exit_codes::CANCELLED,
            LinkError::NotInRepository(_) | LinkError::NoMatchingPlatform(_) => {
                exit_codes::NOT_FOUND
            }
            LinkError::NoFile
            | LinkError::UnknownRemote(_)
            | LinkError::RemoteSelectionRequired(_) => exit_codes::USAGE,
            _ => exit_codes::ERROR,
        }
    }

    /// Returns `true` if the error should be reported silently.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, LinkError::Cancelled)
    }
}

/// Result alias for link construction.
pub type LinkResult<T> = std::result::Result<T, LinkError>;
