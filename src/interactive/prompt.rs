//
//  gitlink
//  interactive/prompt.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Interactive Prompts Module
//!
//! Yes/no confirmations and editor resolution, wrapping `dialoguer`.
//!
//! # Example
//!
//! ```no_run
//! use gitlink::interactive::prompt::prompt_confirm_with_default;
//!
//! if prompt_confirm_with_default("Open the configuration file?", true).unwrap() {
//!     println!("Opening...");
//! }
//! ```

use anyhow::Result;
use dialoguer::Confirm;

/// Prompts the user for a yes/no confirmation with a default.
///
/// # Notes
///
/// - The default is shown in the prompt (e.g., "[Y/n]" or "[y/N]")
/// - Pressing Enter without input accepts the default
pub fn prompt_confirm_with_default(message: &str, default: bool) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(default)
        .interact()?;
    Ok(confirmed)
}

/// Returns the editor command used to edit the configuration file.
///
/// Checked in order:
/// 1. `configured` (the `core.editor` setting)
/// 2. `GITLINK_EDITOR`
/// 3. `EDITOR`
/// 4. `VISUAL`
/// 5. `notepad` on Windows, `vi` elsewhere
///
/// # Example
///
/// ```no_run
/// use gitlink::interactive::prompt::get_editor;
///
/// assert_eq!(get_editor(Some("code --wait")), "code --wait");
/// ```
pub fn get_editor(configured: Option<&str>) -> String {
    if let Some(editor) = configured.filter(|e| !e.trim().is_empty()) {
        return editor.to_string();
    }
    std::env::var("GITLINK_EDITOR")
        .or_else(|_| std::env::var("EDITOR"))
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "vi".to_string()
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_editor_wins() {
        assert_eq!(get_editor(Some("hx")), "hx");
    }

    #[test]
    fn test_blank_configured_editor_is_ignored() {
        assert_ne!(get_editor(Some("  ")), "  ");
    }
}
