//
//  gitlink
//  cli/link.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Link commands - print, open and copy links to files
//!
//! All three take the same targets: one or more files and an optional line
//! range. A line range only applies when exactly one file is given.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::config::Config;
use crate::context::LineRange;
use crate::link::{markdown_links, GitLink};
use crate::output::{OutputFormat, OutputWriter};
use crate::util::{copy_to_clipboard, open_browser};

use super::{build_links, GlobalOptions};

/// Files (and lines) to link to
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Files to link to
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Line or range to link to, e.g. 42 or 10-15
    #[arg(long = "line", short = 'L', value_name = "RANGE")]
    pub lines: Option<LineRange>,
}

/// Print links to files
#[derive(Args, Debug)]
pub struct UrlCommand {
    #[command(flatten)]
    pub targets: TargetArgs,

    /// Print Markdown links instead of bare URLs
    #[arg(long, short = 'm')]
    pub markdown: bool,
}

impl UrlCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let (links, _) = build_links(&self.targets, global, &config)?;

        let writer = OutputWriter::new(OutputFormat::from_flag(global.json));
        if self.markdown && !writer.is_json() {
            print!("{}", markdown_links(&links));
            return Ok(());
        }
        writer.write_links(&links)
    }
}

/// Open links to files in the browser
#[derive(Args, Debug)]
pub struct OpenCommand {
    #[command(flatten)]
    pub targets: TargetArgs,

    /// Print URLs instead of opening the browser
    #[arg(long, short = 'p')]
    pub print: bool,
}

impl OpenCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let (links, _) = build_links(&self.targets, global, &config)?;

        let writer = OutputWriter::new(OutputFormat::from_flag(global.json));
        if self.print || writer.is_json() {
            return writer.write_links(&links);
        }

        for link in &links {
            writer.write_info(&format!("Opening {} in browser...", link.file_name));
            open_browser(&link.url, config.core.browser.as_deref())?;
        }
        Ok(())
    }
}

/// Copy links to files to the clipboard
#[derive(Args, Debug)]
pub struct CopyCommand {
    #[command(flatten)]
    pub targets: TargetArgs,

    /// Copy Markdown links, `[file](url)`, instead of bare URLs
    #[arg(long, short = 'm')]
    pub markdown: bool,
}

impl CopyCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let (links, _) = build_links(&self.targets, global, &config)?;

        let text = clipboard_text(&links, self.markdown);
        copy_to_clipboard(&text)?;

        let writer = OutputWriter::new(OutputFormat::from_flag(global.json));
        if writer.is_json() {
            return writer.write_links(&links);
        }

        let what = match (self.markdown, links.len()) {
            (true, 1) => "Markdown link".to_string(),
            (true, n) => format!("{} Markdown links", n),
            (false, 1) => "Git link".to_string(),
            (false, n) => format!("{} Git links", n),
        };
        writer.write_success(&format!("{} copied to clipboard", what));
        Ok(())
    }
}

/// Text placed on the clipboard by `gitlink copy`.
///
/// Bare URLs are newline separated; Markdown links are newline terminated.
fn clipboard_text(links: &[GitLink], markdown: bool) -> String {
    if markdown {
        markdown_links(links)
    } else {
        links
            .iter()
            .map(|link| link.url.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(name: &str) -> GitLink {
        GitLink {
            url: format!("https://github.com/o/r/blob/main/{}", name),
            file_name: name.to_string(),
        }
    }

    #[test]
    fn test_clipboard_text_plain() {
        let text = clipboard_text(&[link("a.rs"), link("b.rs")], false);
        assert_eq!(
            text,
            "https://github.com/o/r/blob/main/a.rs\nhttps://github.com/o/r/blob/main/b.rs"
        );
    }

    #[test]
    fn test_clipboard_text_markdown() {
        let text = clipboard_text(&[link("a.rs")], true);
        assert_eq!(text, "[a.rs](https://github.com/o/r/blob/main/a.rs)\n");
    }
}
