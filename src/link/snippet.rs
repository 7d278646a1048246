//
//  gitlink
//  link/snippet.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Markdown and image output for links and code snippets.
//!
//! Besides a plain URL, a link can be shared as a Markdown link, as a
//! Markdown code block headed by its link, or as an image rendered by
//! [ray.so](https://ray.so) from the Base64 encoded snippet.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::GitLink;
use crate::context::{InvocationSource, LineRange};
use crate::error::{LinkError, LinkResult};

/// Image service used for snippet images.
pub const IMAGE_SERVICE_URL: &str = "https://ray.so/";

/// Formats one link as `[file_name](url)`.
///
/// Falls back to `Link` as the text when the file name is empty.
pub fn markdown_link(link: &GitLink) -> String {
    let text = if link.file_name.is_empty() {
        "Link"
    } else {
        link.file_name.as_str()
    };
    format!("[{}]({})", text, link.url)
}

/// Formats every link on its own line, each line newline-terminated.
pub fn markdown_links(links: &[GitLink]) -> String {
    links
        .iter()
        .map(|link| format!("{}\n", markdown_link(link)))
        .collect()
}

/// Builds the clipboard text for a Markdown snippet.
///
/// - Editor request with code: the link followed by a fenced code block
/// - Editor request without code: the bare URL
/// - Explorer request: one Markdown link per file
pub fn markdown_snippet(
    links: &[GitLink],
    source: InvocationSource,
    code: Option<(&str, &str)>,
) -> String {
    match (source, links.first()) {
        (InvocationSource::Editor, Some(link)) => match code {
            Some((code, language)) => format!(
                "{}\n\n```{}\n{}\n```",
                markdown_link(link),
                language,
                code
            ),
            None => link.url.clone(),
        },
        _ => markdown_links(links),
    }
}

/// Reads the lines covered by `range` from `path`.
///
/// # Errors
///
/// [`LinkError::ReadSnippet`] if the file cannot be read, the range is not
/// 1-based and ordered, or it starts past the end of the file. A range ending
/// past the end is clipped.
pub fn read_lines(path: &Path, range: LineRange) -> LinkResult<String> {
    let first = match range.start.checked_sub(1) {
        Some(first) if range.end >= range.start => first,
        _ => {
            return Err(LinkError::ReadSnippet {
                path: path.display().to_string(),
                reason: format!("invalid line range {range}; line numbers start at 1"),
            })
        }
    };

    let content = std::fs::read_to_string(path).map_err(|e| LinkError::ReadSnippet {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let lines: Vec<&str> = content.lines().collect();
    if range.start > lines.len() {
        return Err(LinkError::ReadSnippet {
            path: path.display().to_string(),
            reason: format!(
                "line {} is past the end of the file ({} lines)",
                range.start,
                lines.len()
            ),
        });
    }

    let end = range.end.min(lines.len());
    Ok(lines[first..end].join("\n"))
}

/// Guesses an editor language id from a file's extension or name.
///
/// Ids follow the editor convention (`typescriptreact`, `shellscript`, ...);
/// use [`map_language_id`] before handing one to a highlighter.
pub fn language_id(path: &Path) -> &'static str {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    match file_name {
        "Dockerfile" => return "dockerfile",
        "Makefile" | "makefile" | "GNUmakefile" => return "makefile",
        _ => {}
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match ext.as_str() {
        "rs" => "rust",
        "ts" | "mts" | "cts" => "typescript",
        "tsx" => "typescriptreact",
        "js" | "mjs" | "cjs" => "javascript",
        "jsx" => "javascriptreact",
        "json" => "json",
        "jsonc" => "jsonc",
        "py" => "python",
        "go" => "go",
        "java" => "java",
        "kt" | "kts" => "kotlin",
        "swift" => "swift",
        "c" | "h" => "c",
        "cc" | "cpp" | "cxx" | "hpp" | "hh" => "cpp",
        "cs" => "csharp",
        "rb" => "ruby",
        "php" => "php",
        "sh" | "bash" | "zsh" => "shellscript",
        "ps1" => "powershell",
        "html" | "htm" => "html",
        "css" => "css",
        "scss" => "scss",
        "less" => "less",
        "md" | "markdown" => "markdown",
        "yml" | "yaml" => "yaml",
        "toml" => "toml",
        "xml" => "xml",
        "sql" => "sql",
        "lua" => "lua",
        "dart" => "dart",
        "vue" => "vue",
        _ => "plaintext",
    }
}

/// Maps editor language ids onto the names highlighters understand.
///
/// # Example
///
/// ```rust
/// use gitlink::link::map_language_id;
///
/// assert_eq!(map_language_id("typescriptreact"), "typescript");
/// assert_eq!(map_language_id("rust"), "rust");
/// ```
pub fn map_language_id(language_id: &str) -> &str {
    match language_id {
        "typescriptreact" => "typescript",
        "javascriptreact" => "javascript",
        "shellscript" => "bash",
        "jsonc" => "json",
        "html" => "xml",
        other => other,
    }
}

/// Builds the image service URL for a code snippet.
///
/// # Example
///
/// ```rust
/// use gitlink::link::image_url;
///
/// let url = image_url("fn main() {}", "rust");
/// assert!(url.starts_with("https://ray.so/#theme=candy"));
/// assert!(url.ends_with("&language=rust"));
/// ```
pub fn image_url(code: &str, language_id: &str) -> String {
    format!(
        "{}#theme=candy&background=white&padding=128&code={}&language={}",
        IMAGE_SERVICE_URL,
        STANDARD.encode(code.as_bytes()),
        map_language_id(language_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn link(url: &str, file_name: &str) -> GitLink {
        GitLink {
            url: url.to_string(),
            file_name: file_name.to_string(),
        }
    }

    #[test]
    fn test_markdown_links() {
        let links = vec![link("https://x/a.rs", "a.rs"), link("https://x/b", "")];
        assert_eq!(
            markdown_links(&links),
            "[a.rs](https://x/a.rs)\n[Link](https://x/b)\n"
        );
    }

    #[test]
    fn test_markdown_snippet_with_code() {
        let links = vec![link("https://x/a.rs#L1-L2", "a.rs")];
        let text = markdown_snippet(&links, InvocationSource::Editor, Some(("let a = 1;", "rust")));
        assert_eq!(text, "[a.rs](https://x/a.rs#L1-L2)\n\n```rust\nlet a = 1;\n```");
    }

    #[test]
    fn test_markdown_snippet_without_code_is_bare_url() {
        let links = vec![link("https://x/a.rs", "a.rs")];
        assert_eq!(
            markdown_snippet(&links, InvocationSource::Editor, None),
            "https://x/a.rs"
        );
    }

    #[test]
    fn test_markdown_snippet_explorer_lists_links() {
        let links = vec![link("https://x/a.rs", "a.rs"), link("https://x/b.rs", "b.rs")];
        assert_eq!(
            markdown_snippet(&links, InvocationSource::Explorer, Some(("ignored", "rust"))),
            "[a.rs](https://x/a.rs)\n[b.rs](https://x/b.rs)\n"
        );
    }

    #[test]
    fn test_read_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "one\ntwo\nthree\nfour\n").unwrap();

        let range = LineRange::new(2, 3).unwrap();
        assert_eq!(read_lines(file.path(), range).unwrap(), "two\nthree");

        let clipped = LineRange::new(4, 10).unwrap();
        assert_eq!(read_lines(file.path(), clipped).unwrap(), "four");

        let past_end = LineRange::single(9).unwrap();
        assert!(matches!(
            read_lines(file.path(), past_end),
            Err(LinkError::ReadSnippet { .. })
        ));
    }

    #[test]
    fn test_read_lines_rejects_unchecked_ranges() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "one\ntwo\n").unwrap();

        let zero = LineRange { start: 0, end: 2 };
        let err = read_lines(file.path(), zero).unwrap_err();
        assert!(err.to_string().contains("line numbers start at 1"));

        let reversed = LineRange { start: 2, end: 1 };
        assert!(matches!(
            read_lines(file.path(), reversed),
            Err(LinkError::ReadSnippet { .. })
        ));
    }

    #[test]
    fn test_language_id() {
        assert_eq!(language_id(Path::new("src/main.rs")), "rust");
        assert_eq!(language_id(Path::new("App.TSX")), "typescriptreact");
        assert_eq!(language_id(Path::new("build.sh")), "shellscript");
        assert_eq!(language_id(Path::new("Dockerfile")), "dockerfile");
        assert_eq!(language_id(Path::new("LICENSE")), "plaintext");
    }

    #[test]
    fn test_map_language_id() {
        assert_eq!(map_language_id("javascriptreact"), "javascript");
        assert_eq!(map_language_id("shellscript"), "bash");
        assert_eq!(map_language_id("jsonc"), "json");
        assert_eq!(map_language_id("html"), "xml");
        assert_eq!(map_language_id("go"), "go");
    }

    #[test]
    fn test_image_url() {
        let url = image_url("hi", "typescriptreact");
        assert_eq!(
            url,
            "https://ray.so/#theme=candy&background=white&padding=128&code=aGk=&language=typescript"
        );
    }
}
