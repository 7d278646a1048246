//
//  gitlink
//  cli/snippet.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Snippet commands - share a range of code as Markdown or as an image

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::config::Config;
use crate::context::LineRange;
use crate::link::{image_url, language_id, markdown_snippet, read_lines};
use crate::output::{write_json, OutputFormat, OutputWriter};
use crate::util::{copy_to_clipboard, open_browser};

use super::{build_links, GlobalOptions, TargetArgs};

/// Copy a Markdown code snippet headed by its link
#[derive(Args, Debug)]
pub struct SnippetCommand {
    /// File to take the snippet from
    pub path: PathBuf,

    /// Lines to include, e.g. 10-15
    #[arg(long = "line", short = 'L', value_name = "RANGE")]
    pub lines: LineRange,

    /// Print the snippet instead of copying it
    #[arg(long, short = 'p')]
    pub print: bool,
}

impl SnippetCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let targets = TargetArgs {
            paths: vec![self.path.clone()],
            lines: Some(self.lines),
        };
        let (links, request) = build_links(&targets, global, &config)?;

        let code = read_lines(&self.path, self.lines)?;
        let language = language_id(&self.path);
        let markdown = markdown_snippet(&links, request.source(), Some((code.as_str(), language)));

        let writer = OutputWriter::new(OutputFormat::from_flag(global.json));
        if writer.is_json() {
            return write_json(&serde_json::json!({
                "url": links.first().map(|l| &l.url),
                "language": language,
                "lines": self.lines,
                "markdown": markdown,
            }));
        }

        if self.print {
            println!("{}", markdown);
        } else {
            copy_to_clipboard(&markdown)?;
            writer.write_success("Markdown snippet copied to clipboard");
        }
        Ok(())
    }
}

/// Open an image of a code snippet
#[derive(Args, Debug)]
pub struct ImageCommand {
    /// File to take the snippet from
    pub path: PathBuf,

    /// Lines to include, e.g. 10-15
    #[arg(long = "line", short = 'L', value_name = "RANGE")]
    pub lines: LineRange,

    /// Print the image URL instead of opening it
    #[arg(long, short = 'p')]
    pub print: bool,
}

impl ImageCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let code = read_lines(&self.path, self.lines)?;
        let language = language_id(&self.path);
        let url = image_url(&code, language);

        let writer = OutputWriter::new(OutputFormat::from_flag(global.json));
        if writer.is_json() {
            return write_json(&serde_json::json!({
                "url": url,
                "language": language,
                "lines": self.lines,
            }));
        }

        if self.print {
            println!("{}", url);
        } else {
            writer.write_info("Opening snippet image in browser...");
            open_browser(&url, config.core.browser.as_deref())?;
        }
        Ok(())
    }
}
