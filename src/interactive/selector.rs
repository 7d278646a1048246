//
//  gitlink
//  interactive/selector.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Interactive Selectors Module
//!
//! This module provides selection components for choosing items from lists
//! in the terminal. It wraps the `dialoguer` crate.
//!
//! # Example
//!
//! ```no_run
//! use gitlink::interactive::selector::select_remote_prompt;
//!
//! let remotes = vec!["origin".to_string(), "upstream".to_string()];
//! match select_remote_prompt(&remotes).unwrap() {
//!     Some(remote) => println!("Using {}", remote),
//!     None => println!("Cancelled"),
//! }
//! ```

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

use crate::error::{LinkError, LinkResult};

/// Prompts the user to select a single item, allowing cancellation.
///
/// # Returns
///
/// - `Ok(Some(index))` for the chosen item
/// - `Ok(None)` if the user pressed Escape or `q`
/// - `Err` if the terminal interaction fails
///
/// # Notes
///
/// - Use arrow keys (Up/Down) to navigate
/// - Press Enter to confirm selection
pub fn select_opt<T: ToString>(message: &str, items: &[T]) -> Result<Option<usize>> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .items(items)
        .default(0)
        .interact_opt()?;
    Ok(selection)
}

/// Asks which git remote to link against.
///
/// Shaped to be passed straight to
/// [`LinkBuilder::build`](crate::link::LinkBuilder::build) as the picker.
pub fn select_remote_prompt(remotes: &[String]) -> LinkResult<Option<String>> {
    let picked =
        select_opt("Select a git remote", remotes).map_err(|e| LinkError::Prompt(e.to_string()))?;
    Ok(picked.map(|idx| remotes[idx].clone()))
}
