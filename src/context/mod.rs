//
//  gitlink
//  context/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Repository Context Module
//!
//! This module gathers everything needed to describe *where* a file lives:
//! the git repository around it, the remote it was cloned from, the hosting
//! platform that remote points at, and the line range being linked.
//!
//! ## Overview
//!
//! The context module is responsible for:
//! - Running `git` to find the repository root, remotes and current branch
//! - Parsing git remote URLs (SSH and HTTPS) into a domain and path segments
//! - Matching a domain against the configured domain registry
//! - Remembering the remote picked during this session
//!
//! ## Architecture
//!
//! - [`GitContext`]: `git` process invocations
//! - [`parse_remote_url`]: remote URL parsing into a [`DomainResult`]
//! - [`resolve_platform`]: domain → platform lookup
//! - [`SessionState`] / [`select_remote`]: multi-remote selection
//!
//! ## Example
//!
//! ```rust
//! use gitlink::context::parse_remote_url;
//!
//! let result = parse_remote_url("git@github.com:alanhe421/alfred-workflows.git");
//! assert_eq!(result.domain, "github.com");
//! assert_eq!(result.path_segments, vec!["alanhe421", "alfred-workflows"]);
//! ```

mod git;
mod remote;
mod resolver;
mod session;

pub use git::*;
pub use remote::*;
pub use resolver::*;
pub use session::*;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Result of taking a remote URL apart.
///
/// An empty `domain` means the URL was in neither the SSH nor the HTTPS form;
/// callers treat that as a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainResult {
    /// Host name, e.g. `github.com`
    pub domain: String,
    /// The remote URL exactly as git reported it
    pub remote_url: String,
    /// Path components after the host, `.git` stripped
    pub path_segments: Vec<String>,
}

impl DomainResult {
    /// Returns `true` when the remote URL could not be parsed.
    pub fn is_unrecognized(&self) -> bool {
        self.domain.is_empty()
    }
}

/// Where a link request came from.
///
/// Editor requests carry line information; explorer requests link whole
/// files and have any line anchors stripped from the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvocationSource {
    /// A single open file with a cursor or selection
    Editor,
    /// One or more files picked without line context
    Explorer,
}

/// An inclusive, 1-based line range.
///
/// A bare cursor position is a range where `start == end`.
///
/// # Example
///
/// ```rust
/// use gitlink::context::LineRange;
///
/// let range: LineRange = "10-15".parse().unwrap();
/// assert_eq!((range.start, range.end), (10, 15));
///
/// let cursor: LineRange = "42".parse().unwrap();
/// assert_eq!((cursor.start, cursor.end), (42, 42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    /// Creates a range, rejecting zero and reversed bounds.
    pub fn new(start: usize, end: usize) -> Result<Self, String> {
        if start == 0 || end == 0 {
            return Err("line numbers start at 1".to_string());
        }
        if start > end {
            return Err(format!("line range {}-{} is reversed", start, end));
        }
        Ok(Self { start, end })
    }

    /// A range covering a single line.
    pub fn single(line: usize) -> Result<Self, String> {
        Self::new(line, line)
    }
}

impl FromStr for LineRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_start_matches(['L', 'l']);
        let parse = |part: &str| {
            part.trim()
                .trim_start_matches(['L', 'l'])
                .parse::<usize>()
                .map_err(|_| format!("invalid line number '{}'", part))
        };

        match s.split_once(['-', ':', '~']) {
            Some((start, end)) => Self::new(parse(start)?, parse(end)?),
            None => Self::single(parse(s)?),
        }
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_range_forms() {
        assert_eq!("7".parse::<LineRange>().unwrap(), LineRange { start: 7, end: 7 });
        assert_eq!("3-9".parse::<LineRange>().unwrap(), LineRange { start: 3, end: 9 });
        assert_eq!("3:9".parse::<LineRange>().unwrap(), LineRange { start: 3, end: 9 });
        assert_eq!("L3-L9".parse::<LineRange>().unwrap(), LineRange { start: 3, end: 9 });
    }

    #[test]
    fn test_line_range_rejects_bad_input() {
        assert!("0".parse::<LineRange>().is_err());
        assert!("9-3".parse::<LineRange>().is_err());
        assert!("abc".parse::<LineRange>().is_err());
        assert!("".parse::<LineRange>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let range: LineRange = "3-9".parse().unwrap();
        assert_eq!(range.to_string(), "3-9");
        assert_eq!(LineRange::single(4).unwrap().to_string(), "4");
    }
}
