//
//  gitlink
//  context/git.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Git Repository Operations
//!
//! This module runs the `git` executable to answer the handful of questions
//! a link needs: where the repository root is, which remotes exist, what
//! URL a remote points at, and which branch is checked out.
//!
//! ## Overview
//!
//! The [`GitContext`] struct provides:
//! - Locating the repository root for a file or directory
//! - Listing remote names
//! - Reading a remote's URL
//! - Querying the current branch
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gitlink::context::GitContext;
//! use std::path::Path;
//!
//! let git = GitContext::discover(Path::new("src/main.rs"))?;
//! println!("Root: {}", git.root().display());
//! println!("Branch: {}", git.current_branch()?);
//! for remote in git.remotes()? {
//!     println!("{} -> {}", remote, git.remote_url(&remote)?);
//! }
//! # Ok::<(), gitlink::LinkError>(())
//! ```
//!
//! ## Notes
//!
//! - Every call spawns one `git` process; nothing is cached
//! - Output is trimmed; a non-zero exit becomes [`LinkError::Git`]

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{LinkError, LinkResult};

/// A git working tree, addressed by its root directory.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// use gitlink::context::GitContext;
///
/// let git = GitContext::discover(Path::new("src/lib.rs"))?;
/// let branch = git.current_branch()?;
/// # Ok::<(), gitlink::LinkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GitContext {
    /// Repository root as printed by `git rev-parse --show-toplevel`
    root: PathBuf,
}

impl GitContext {
    /// Finds the repository containing `path`.
    ///
    /// When `path` is a file, git runs in its parent directory; when it is a
    /// directory, git runs inside it.
    ///
    /// # Errors
    ///
    /// [`LinkError::NotInRepository`] if git cannot find a working tree
    /// (including when `path` does not exist).
    pub fn discover(path: &Path) -> LinkResult<Self> {
        let cwd = if path.is_dir() {
            path.to_path_buf()
        } else {
            match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            }
        };

        let root = run_git(&cwd, &["rev-parse", "--show-toplevel"])
            .map_err(|_| LinkError::NotInRepository(path.display().to_string()))?;
        debug!("Repository root for {}: {}", path.display(), root);

        Ok(Self {
            root: PathBuf::from(root),
        })
    }

    /// Returns the repository root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lists the configured remote names in the order git prints them.
    ///
    /// An empty list means the repository has no remotes; a git failure is
    /// reported as [`LinkError::Git`] rather than as an empty list.
    pub fn remotes(&self) -> LinkResult<Vec<String>> {
        let stdout = run_git(&self.root, &["remote"])?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Returns the fetch URL of remote `name`.
    pub fn remote_url(&self, name: &str) -> LinkResult<String> {
        run_git(&self.root, &["remote", "get-url", name])
    }

    /// Returns the short name of the checked out branch.
    ///
    /// # Notes
    ///
    /// - A detached HEAD yields `"HEAD"`, the same as plain git
    /// - Any git failure is reported as [`LinkError::BranchLookup`]
    pub fn current_branch(&self) -> LinkResult<String> {
        run_git(&self.root, &["rev-parse", "--abbrev-ref", "HEAD"]).map_err(|e| {
            debug!("Branch lookup failed: {}", e);
            LinkError::BranchLookup
        })
    }
}

/// Runs `git` with `args` in `cwd` and returns trimmed stdout.
fn run_git(cwd: &Path, args: &[&str]) -> LinkResult<String> {
    debug!("Running git {} in {}", args.join(" "), cwd.display());

    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|e| LinkError::Git {
            args: args.join(" "),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(LinkError::Git {
            args: args.join(" "),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
