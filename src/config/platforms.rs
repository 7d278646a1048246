//
//  gitlink
//  config/platforms.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Built-in Platforms
//!
//! The platforms and domain registry a fresh configuration starts with, and
//! helpers for cleaning up user-supplied domains.
//!
//! ## Overview
//!
//! | Platform | Domain | Line anchor |
//! |----------|--------|-------------|
//! | GitHub | `github.com` | `#L10-L15` |
//! | GitLab | `gitlab` | `#L10-15` |
//! | Bitbucket | `bitbucket.org` | `#lines-10:15` |
//! | Gitee | `gitee.com` | `#L10-15` |
//!
//! The GitLab registry entry is the bare word `gitlab`, so self-hosted
//! instances such as `gitlab.mycompany.com` match it too.

use super::{DomainMapping, Platform};

/// Name of the built-in GitHub platform.
pub const GITHUB: &str = "GitHub";

/// Name of the built-in GitLab platform.
pub const GITLAB: &str = "GitLab";

/// Name of the built-in Bitbucket Cloud platform.
pub const BITBUCKET: &str = "Bitbucket";

/// Name of the built-in Gitee platform.
pub const GITEE: &str = "Gitee";

/// Returns the platforms available before any configuration.
///
/// # Example
///
/// ```rust
/// use gitlink::config::{default_platforms, GITHUB};
///
/// let platforms = default_platforms();
/// assert!(platforms.iter().any(|p| p.name == GITHUB));
/// ```
pub fn default_platforms() -> Vec<Platform> {
    vec![
        Platform::new(
            GITHUB,
            "https://github.com/{repo:path}/blob/{branch}/{file:path}#L{line:start}-L{line:end}",
        ),
        Platform::new(
            GITLAB,
            "https://{remote:url}/{repo:path}/-/blob/{branch}/{file:path}#L{line:start}-{line:end}",
        ),
        Platform::new(
            BITBUCKET,
            "https://bitbucket.org/{repo:path}/src/{branch}/{file:path}#lines-{line:start}:{line:end}",
        ),
        Platform::new(
            GITEE,
            "https://gitee.com/{repo:path}/blob/{branch}/{file:path}#L{line:start}-{line:end}",
        ),
    ]
}

/// Returns the domain registry matching [`default_platforms`].
///
/// Order matters: the first entry that is a substring of a remote's domain
/// wins.
pub fn default_domain_registry() -> Vec<DomainMapping> {
    vec![
        DomainMapping::new("github.com", GITHUB),
        DomainMapping::new("gitlab", GITLAB),
        DomainMapping::new("bitbucket.org", BITBUCKET),
        DomainMapping::new("gitee.com", GITEE),
    ]
}

/// Normalizes a domain typed by the user.
///
/// Strips surrounding whitespace, an `http(s)://` prefix, anything after the
/// first `/`, and lowercases the rest.
///
/// # Examples
///
/// ```rust
/// use gitlink::config::normalize_domain;
///
/// assert_eq!(normalize_domain("https://Git.MyCompany.com/"), "git.mycompany.com");
/// assert_eq!(normalize_domain("  gitlab.example.org/group "), "gitlab.example.org");
/// ```
pub fn normalize_domain(domain: &str) -> String {
    let domain = domain.trim();
    let domain = domain.strip_prefix("https://").unwrap_or(domain);
    let domain = domain.strip_prefix("http://").unwrap_or(domain);
    let domain = domain.split('/').next().unwrap_or(domain);
    domain.to_lowercase()
}
