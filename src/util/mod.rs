//
//  gitlink
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Utility Module
//!
//! System integration used by the link commands: opening URLs in a browser,
//! writing to the clipboard and splitting user-supplied command lines.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gitlink::util::{copy_to_clipboard, open_browser};
//!
//! let url = "https://github.com/alanhe421/alfred-workflows/blob/main/README.md";
//! open_browser(url, None)?;
//! copy_to_clipboard(url)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use tracing::debug;

/// Splits a command line such as `"code --wait"` into program and arguments.
///
/// Quoting follows POSIX shell rules, so `"/Applications/My Editor.app" -w`
/// keeps the path in one piece.
///
/// # Errors
///
/// Fails on unbalanced quotes or an empty command.
pub fn split_command(command: &str) -> Result<(String, Vec<String>)> {
    let mut parts = shell_words::split(command)
        .with_context(|| format!("Invalid command line: {}", command))?;
    if parts.is_empty() {
        bail!("Empty command");
    }
    let program = parts.remove(0);
    Ok((program, parts))
}

/// Opens a URL in a web browser.
///
/// With `browser` set (the `core.browser` setting) that command is spawned
/// with the URL as its last argument. Otherwise the system default browser
/// is used through the `webbrowser` crate.
///
/// # Notes
///
/// - Returns as soon as the browser process has been started
/// - The URL is not validated
pub fn open_browser(url: &str, browser: Option<&str>) -> Result<()> {
    match browser.filter(|b| !b.trim().is_empty()) {
        Some(browser) => {
            let (program, args) = split_command(browser)?;
            debug!("Opening {} with {}", url, program);
            Command::new(&program)
                .args(&args)
                .arg(url)
                .spawn()
                .with_context(|| format!("Failed to start browser '{}'", program))?;
        }
        None => {
            debug!("Opening {} with the default browser", url);
            webbrowser::open(url).context("Failed to open the default browser")?;
        }
    }
    Ok(())
}

/// Clipboard commands to try, in order, for the current platform.
#[cfg(target_os = "macos")]
const CLIPBOARD_COMMANDS: &[&[&str]] = &[&["pbcopy"]];

#[cfg(target_os = "windows")]
const CLIPBOARD_COMMANDS: &[&[&str]] = &[&["clip"]];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CLIPBOARD_COMMANDS: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

/// Places `text` on the system clipboard.
///
/// Pipes the text into the platform's copy command:
///
/// - On macOS: `pbcopy`
/// - On Windows: `clip`
/// - Elsewhere: `wl-copy`, then `xclip`, then `xsel`
///
/// A command that is missing, refuses the input or exits non-zero is
/// skipped in favour of the next one.
///
/// # Errors
///
/// Fails once every command has failed, naming the last failure.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    copy_with(CLIPBOARD_COMMANDS, text)
}

fn copy_with(commands: &[&[&str]], text: &str) -> Result<()> {
    let mut last_error = None;

    for command in commands {
        let Some((program, args)) = command.split_first() else {
            continue;
        };

        match pipe_to(program, args, text) {
            Ok(()) => return Ok(()),
            Err(e) => {
                debug!("Clipboard command {} failed: {:#}", program, e);
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) => Err(e.context("Failed to copy to the clipboard")),
        None => bail!("No clipboard command available; install wl-clipboard or xclip"),
    }
}

/// Runs `program` with `text` on its stdin and waits for it to succeed.
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to start {}", program))?;

    let written = match child.stdin.take() {
        Some(mut stdin) => stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("Failed to write to {}", program)),
        None => Ok(()),
    };

    let status = child
        .wait()
        .with_context(|| format!("Failed to wait for {}", program))?;
    if !status.success() {
        bail!("{} exited with {}", program, status);
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command_with_args() {
        let (program, args) = split_command("code --wait").unwrap();
        assert_eq!(program, "code");
        assert_eq!(args, vec!["--wait".to_string()]);
    }

    #[test]
    fn test_split_command_keeps_quoted_path() {
        let (program, args) = split_command("'/opt/My Browser/bin' --new-tab").unwrap();
        assert_eq!(program, "/opt/My Browser/bin");
        assert_eq!(args, vec!["--new-tab".to_string()]);
    }

    #[test]
    fn test_split_command_rejects_empty() {
        assert!(split_command("   ").is_err());
        assert!(split_command("'unterminated").is_err());
    }

    #[cfg(unix)]
    fn script(dir: &std::path::Path, name: &str, body: &str) -> String {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path.display().to_string()
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_copy_command_falls_through() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("clipboard.txt");
        let wl_copy = script(dir.path(), "wl-copy", "exit 1");
        let xclip = script(dir.path(), "xclip", &format!("cat > '{}'", out.display()));

        let commands: &[&[&str]] = &[&[wl_copy.as_str()], &[xclip.as_str(), "-selection", "clipboard"]];
        copy_with(commands, "hello").unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn test_every_copy_command_failing_names_last_error() {
        let dir = tempfile::tempdir().unwrap();
        let first = script(dir.path(), "first", "exit 1");
        let second = script(dir.path(), "second", "exit 3");

        let commands: &[&[&str]] = &[&[first.as_str()], &[second.as_str()]];
        let err = copy_with(commands, "hello").unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Failed to copy to the clipboard"));
        assert!(message.contains("second exited with"));
    }

    #[test]
    fn test_missing_copy_commands() {
        let commands: &[&[&str]] = &[&["gitlink-no-such-clipboard-tool"]];
        let err = copy_with(commands, "hello").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to start gitlink-no-such-clipboard-tool"));
    }

    #[test]
    fn test_clipboard_commands_have_programs() {
        assert!(!CLIPBOARD_COMMANDS.is_empty());
        assert!(CLIPBOARD_COMMANDS.iter().all(|c| !c.is_empty()));
    }
}
