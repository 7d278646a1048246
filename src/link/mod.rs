//
//  gitlink
//  link/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Link Module
//!
//! Builds web links for files in a git checkout.
//!
//! ## Pipeline
//!
//! For a [`LinkRequest`], [`LinkBuilder::build`]:
//! 1. finds the repository root of the first file
//! 2. picks a remote (prompting when there are several)
//! 3. parses the remote URL and resolves the platform for its domain
//! 4. reads the current branch
//! 5. renders the platform's template once per file
//!
//! Any step failing stops the whole request with one [`LinkError`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use gitlink::config::Config;
//! use gitlink::context::{LineRange, SessionState};
//! use gitlink::link::{LinkBuilder, LinkRequest};
//!
//! let config = Config::load()?;
//! let builder = LinkBuilder::new(&config);
//! let mut session = SessionState::new();
//!
//! let request = LinkRequest::new(vec!["src/main.rs".into()])
//!     .with_lines(Some(LineRange::new(10, 15).unwrap()));
//! let links = builder.build(&request, &mut session, |_| Ok(None))?;
//! println!("{}", links[0].url);
//! # Ok::<(), anyhow::Error>(())
//! ```

mod snippet;
mod template;

pub use snippet::*;
pub use template::*;

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::context::{
    parse_remote_url, repo_path, resolve_platform, select_remote, GitContext, InvocationSource,
    LineRange, RemoteChoice, SessionState,
};
use crate::error::{LinkError, LinkResult};

/// A built link for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitLink {
    pub url: String,
    pub file_name: String,
}

/// What to link: files, an optional line range, and overrides.
#[derive(Debug, Clone, Default)]
pub struct LinkRequest {
    pub paths: Vec<PathBuf>,
    pub lines: Option<LineRange>,
    /// Remote to use instead of selecting one
    pub remote: Option<String>,
    /// Branch to use instead of the checked out one
    pub branch: Option<String>,
    /// Whether the remote picker may be shown
    pub interactive: bool,
}

impl LinkRequest {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            interactive: true,
            ..Default::default()
        }
    }

    pub fn with_lines(mut self, lines: Option<LineRange>) -> Self {
        self.lines = lines;
        self
    }

    pub fn with_remote(mut self, remote: Option<String>) -> Self {
        self.remote = remote;
        self
    }

    pub fn with_branch(mut self, branch: Option<String>) -> Self {
        self.branch = branch;
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// A single file with lines is an editor request; anything else links
    /// whole files.
    pub fn source(&self) -> InvocationSource {
        if self.paths.len() == 1 && self.lines.is_some() {
            InvocationSource::Editor
        } else {
            InvocationSource::Explorer
        }
    }
}

/// Builds links using the platforms and domain registry of a [`Config`].
pub struct LinkBuilder<'a> {
    config: &'a Config,
}

impl<'a> LinkBuilder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Builds one link per requested file.
    ///
    /// `picker` is shown when the repository has several remotes and neither
    /// `request.remote` nor the session decides; see [`select_remote`].
    pub fn build<F>(
        &self,
        request: &LinkRequest,
        session: &mut SessionState,
        picker: F,
    ) -> LinkResult<Vec<GitLink>>
    where
        F: FnOnce(&[String]) -> LinkResult<Option<String>>,
    {
        let first = request.paths.first().ok_or(LinkError::NoFile)?;
        let source = request.source();
        if request.lines.is_some() && source == InvocationSource::Explorer {
            warn!("Line range ignored when linking {} files", request.paths.len());
        }

        let git = GitContext::discover(first)?;

        let remotes = git.remotes()?;
        let choice = RemoteChoice {
            explicit: request.remote.as_deref(),
            remember: self.config.remember_remote_selection,
            interactive: request.interactive,
        };
        let remote = select_remote(&remotes, session, &choice, picker)?;
        let remote_url = git.remote_url(&remote)?;

        let domain = parse_remote_url(&remote_url);
        if domain.is_unrecognized() {
            return Err(LinkError::UnrecognizedRemote(remote_url));
        }
        debug!("Remote {} parsed as {:?}", remote, domain);

        let platform = resolve_platform(
            &domain.domain,
            &self.config.domain_registry,
            &self.config.platforms,
        )
        .ok_or_else(|| LinkError::NoMatchingPlatform(remote_url.clone()))?;

        let branch = match &request.branch {
            Some(branch) => branch.clone(),
            None => git.current_branch()?,
        };

        let repo_path =
            repo_path(&remote_url).ok_or_else(|| LinkError::UnrecognizedRemote(remote_url.clone()))?;

        let mut links = Vec::with_capacity(request.paths.len());
        for path in &request.paths {
            let file = RepoFile::new(git.root(), path);
            let ctx = UrlContext {
                platform,
                repo_path: &repo_path,
                branch: &branch,
                file_path: &file.relative_path,
                file_name: &file.file_name,
                file_dir: &file.dir,
                lines: request.lines,
                domain: &domain,
                source,
            };
            let url = ctx.render();
            debug!("Built {} for {}", url, path.display());
            links.push(GitLink {
                url,
                file_name: file.file_name,
            });
        }

        Ok(links)
    }
}

/// A file's location relative to its repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoFile {
    /// `/` separated, relative to the root
    pub relative_path: String,
    pub file_name: String,
    /// Directory part of `relative_path`, `.` at the root
    pub dir: String,
}

impl RepoFile {
    /// Locates `path` inside the repository at `root`.
    ///
    /// Relative paths are taken from the current directory. Both sides are
    /// canonicalized when possible so symlinked checkouts still line up.
    pub fn new(root: &Path, path: &Path) -> Self {
        let absolute = absolutize(path);
        let root = absolutize(root);

        let relative = absolute
            .strip_prefix(&root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf());

        let relative_path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let dir = match relative_path.rsplit_once('/') {
            Some((dir, _)) => dir.to_string(),
            None => ".".to_string(),
        };

        Self {
            relative_path,
            file_name,
            dir,
        }
    }
}

fn absolutize(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_from_request_shape() {
        let lines = Some(LineRange::new(1, 2).unwrap());
        let single = LinkRequest::new(vec!["a.rs".into()]).with_lines(lines);
        assert_eq!(single.source(), InvocationSource::Editor);

        let whole_file = LinkRequest::new(vec!["a.rs".into()]);
        assert_eq!(whole_file.source(), InvocationSource::Explorer);

        let many = LinkRequest::new(vec!["a.rs".into(), "b.rs".into()]).with_lines(lines);
        assert_eq!(many.source(), InvocationSource::Explorer);
    }

    #[test]
    fn test_build_without_paths() {
        let config = Config::default();
        let builder = LinkBuilder::new(&config);
        let mut session = SessionState::new();
        let err = builder
            .build(&LinkRequest::new(Vec::new()), &mut session, |_| Ok(None))
            .unwrap_err();
        assert!(matches!(err, LinkError::NoFile));
    }

    #[test]
    fn test_repo_file_nested() {
        let file = RepoFile::new(Path::new("/repo"), Path::new("/repo/src/app/main.rs"));
        assert_eq!(file.relative_path, "src/app/main.rs");
        assert_eq!(file.file_name, "main.rs");
        assert_eq!(file.dir, "src/app");
    }

    #[test]
    fn test_repo_file_at_root() {
        let file = RepoFile::new(Path::new("/repo"), Path::new("/repo/README.md"));
        assert_eq!(file.relative_path, "README.md");
        assert_eq!(file.dir, ".");
    }
}
