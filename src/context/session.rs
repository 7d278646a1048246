//
//  gitlink
//  context/session.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Remote selection and the session state that remembers it.

use tracing::debug;

use crate::error::{LinkError, LinkResult};

/// State that lives for one session and is never written to disk.
///
/// Holds the remote the user last picked when a repository had several.
/// Pass it explicitly to whatever builds links; there is no global copy.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    selected_remote: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_remote(&self) -> Option<&str> {
        self.selected_remote.as_deref()
    }

    pub fn set_selected_remote(&mut self, remote: impl Into<String>) {
        self.selected_remote = Some(remote.into());
    }
}

/// How the remote should be chosen when there is more than one.
#[derive(Debug, Clone, Default)]
pub struct RemoteChoice<'a> {
    /// A remote named on the command line
    pub explicit: Option<&'a str>,
    /// Reuse and store the picked remote in the session
    pub remember: bool,
    /// Whether the picker may be shown
    pub interactive: bool,
}

/// Picks the remote to link against.
///
/// `picker` is called only when several remotes exist and nothing else
/// decides; it returns `Ok(None)` when the user dismisses it.
///
/// # Errors
///
/// - [`LinkError::NoRemote`] if `remotes` is empty
/// - [`LinkError::UnknownRemote`] if `choice.explicit` is not in `remotes`
/// - [`LinkError::RemoteSelectionRequired`] if a prompt is needed but
///   `choice.interactive` is off
/// - [`LinkError::Cancelled`] if the picker was dismissed
pub fn select_remote<F>(
    remotes: &[String],
    session: &mut SessionState,
    choice: &RemoteChoice<'_>,
    picker: F,
) -> LinkResult<String>
where
    F: FnOnce(&[String]) -> LinkResult<Option<String>>,
{
    if remotes.is_empty() {
        return Err(LinkError::NoRemote);
    }

    if let Some(name) = choice.explicit {
        return remotes
            .iter()
            .find(|r| r.as_str() == name)
            .cloned()
            .ok_or_else(|| LinkError::UnknownRemote(name.to_string()));
    }

    if remotes.len() == 1 {
        return Ok(remotes[0].clone());
    }

    if choice.remember {
        if let Some(remembered) = session.selected_remote() {
            if remotes.iter().any(|r| r == remembered) {
                debug!("Using remembered remote {}", remembered);
                return Ok(remembered.to_string());
            }
        }
    }

    if !choice.interactive {
        return Err(LinkError::RemoteSelectionRequired(remotes.join(", ")));
    }

    let selected = picker(remotes)?.ok_or(LinkError::Cancelled)?;
    if choice.remember {
        session.set_selected_remote(selected.clone());
    }
    Ok(selected)
}
