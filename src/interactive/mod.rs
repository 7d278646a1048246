//
//  gitlink
//  interactive/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Interactive terminal UI components.
//!
//! - [`prompt`]: confirmations and editor lookup
//! - [`selector`]: list selection, including the remote picker

pub mod prompt;
pub mod selector;

use std::io::IsTerminal;

/// Returns `true` when stdin and stderr are both terminals.
///
/// Prompts are skipped otherwise, so piping the CLI never blocks on input.
pub fn is_interactive() -> bool {
    console::user_attended_stderr() && std::io::stdin().is_terminal()
}
