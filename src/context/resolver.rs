//
//  gitlink
//  context/resolver.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Platform Resolver
//!
//! Maps a remote's domain onto one of the configured hosting platforms.
//!
//! ## Matching Rules
//!
//! The domain registry is scanned in order and the first entry whose
//! `domain` is a *substring* of the remote's domain wins. Substring matching
//! lets `mycompany.com` cover `git.mycompany.com`; because the scan stops at
//! the first hit, a general entry listed before a more specific one shadows
//! it.
//!
//! ## Example
//!
//! ```rust
//! use gitlink::config::{DomainMapping, Platform};
//! use gitlink::context::resolve_platform;
//!
//! let registry = vec![DomainMapping::new("github.com", "GitHub")];
//! let platforms = vec![Platform::new("GitHub", "https://github.com/{repo:path}")];
//!
//! let platform = resolve_platform("github.com", &registry, &platforms).unwrap();
//! assert_eq!(platform.name, "GitHub");
//! ```

use tracing::debug;

use crate::config::{DomainMapping, Platform};

/// Finds the platform configured for `domain`.
///
/// # Returns
///
/// - `Some(&Platform)` for the first registry hit whose platform exists
/// - `None` when `domain` is empty, nothing in the registry matches, or the
///   matching entry names a platform that is not configured
pub fn resolve_platform<'a>(
    domain: &str,
    registry: &[DomainMapping],
    platforms: &'a [Platform],
) -> Option<&'a Platform> {
    if domain.is_empty() {
        return None;
    }

    let mapping = registry.iter().find(|m| domain.contains(m.domain.as_str()))?;
    debug!("Domain {} matched registry entry {:?}", domain, mapping);

    let platform = platforms.iter().find(|p| p.name == mapping.platform);
    if platform.is_none() {
        debug!(
            "Registry entry for {} points at unknown platform {}",
            mapping.domain, mapping.platform
        );
    }
    platform
}
