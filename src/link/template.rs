//
//  gitlink
//  link/template.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # URL Template Engine
//!
//! Fills a platform's URL template with the values of one link request.
//!
//! ## Placeholders
//!
//! | Token | Value |
//! |-------|-------|
//! | `{repo:path}` | Repository path, e.g. `owner/repo` |
//! | `{branch}` | Branch name, percent-encoded |
//! | `{file:path}` | File path relative to the repository root |
//! | `{file:name}` | File base name |
//! | `{file:dir}` | Directory of the relative file path |
//! | `{remote:url}` | Remote domain |
//! | `{remote:url:path:N}` | Nth remote path segment, 0-based |
//! | `{line:start}` / `{line:end}` | 1-based selected lines |
//!
//! When a request has no line information (or comes from the explorer), a
//! `#L{line:start}-L{line:end}` style anchor is removed as a whole so the
//! link does not end in a dangling `#L`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::Platform;
use crate::context::{DomainResult, InvocationSource, LineRange};

/// Line anchor with an end line: `#L{line:start}` then optional `-`/`~`,
/// optional `L`, then `{line:end}`.
static LINE_ANCHOR_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"#L\{line:start\}[-~]?L?\{line:end\}").expect("valid line anchor pattern")
});

/// Bitbucket's `#lines-{line:start}:{line:end}` anchor.
static LINES_ANCHOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"#lines-\{line:start\}(?::\{line:end\})?").expect("valid lines anchor pattern")
});

/// Any leftover indexed path segment token.
static PATH_SEGMENT_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{remote:url:path:\d+\}").expect("valid path segment pattern")
});

/// Everything a template can refer to for one file.
#[derive(Debug, Clone)]
pub struct UrlContext<'a> {
    pub platform: &'a Platform,
    /// `owner/repo` or `group/subgroup/repo`
    pub repo_path: &'a str,
    pub branch: &'a str,
    /// Relative to the repository root, `/` separated
    pub file_path: &'a str,
    pub file_name: &'a str,
    pub file_dir: &'a str,
    pub lines: Option<LineRange>,
    pub domain: &'a DomainResult,
    pub source: InvocationSource,
}

impl UrlContext<'_> {
    /// Substitutes every placeholder in the platform's template.
    pub fn render(&self) -> String {
        render(&self.platform.url_template, self)
    }
}

/// Substitutes every recognized placeholder in `template`.
///
/// Substitution is total: unknown text is left alone and a rendered string
/// without tokens renders to itself.
///
/// # Example
///
/// ```rust
/// use gitlink::config::Platform;
/// use gitlink::context::{parse_remote_url, InvocationSource, LineRange};
/// use gitlink::link::{render, UrlContext};
///
/// let platform = Platform::new("x", "https://x/{file:path}#L{line:start}-L{line:end}");
/// let domain = parse_remote_url("git@x:o/r.git");
/// let ctx = UrlContext {
///     platform: &platform,
///     repo_path: "o/r",
///     branch: "main",
///     file_path: "src/lib.rs",
///     file_name: "lib.rs",
///     file_dir: "src",
///     lines: Some(LineRange::new(10, 15).unwrap()),
///     domain: &domain,
///     source: InvocationSource::Editor,
/// };
/// assert_eq!(render(&platform.url_template, &ctx), "https://x/src/lib.rs#L10-L15");
/// ```
pub fn render(template: &str, ctx: &UrlContext<'_>) -> String {
    let mut url = template
        .replace("{repo:path}", ctx.repo_path)
        .replace("{branch}", &urlencoding::encode(ctx.branch))
        .replace("{file:path}", &ctx.file_path.replace('\\', "/"))
        .replace("{file:name}", ctx.file_name)
        .replace("{file:dir}", ctx.file_dir)
        .replace("{remote:url}", &ctx.domain.domain);

    url = match (ctx.source, ctx.lines) {
        (InvocationSource::Editor, Some(lines)) => url
            .replace("{line:start}", &lines.start.to_string())
            .replace("{line:end}", &lines.end.to_string()),
        _ => strip_line_tokens(&url),
    };

    substitute_path_segments(url, &ctx.domain.path_segments)
}

fn strip_line_tokens(url: &str) -> String {
    let url = LINE_ANCHOR_RANGE.replace_all(url, "");
    LINES_ANCHOR
        .replace_all(&url, "")
        .replace("#L{line:start}", "")
        .replace("{line:start}", "")
        .replace("{line:end}", "")
}

fn substitute_path_segments(mut url: String, segments: &[String]) -> String {
    for (i, segment) in segments.iter().enumerate() {
        let token = format!("{{remote:url:path:{}}}", i);
        url = url.replace(&token, segment);
    }
    PATH_SEGMENT_TOKEN.replace_all(&url, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::parse_remote_url;

    const ANCHORED: &str = "https://x/{file:path}#L{line:start}-L{line:end}";

    struct Fixture {
        platform: Platform,
        domain: DomainResult,
    }

    impl Fixture {
        fn new(template: &str) -> Self {
            Self {
                platform: Platform::new("Test", template),
                domain: parse_remote_url("git@github.com:alanhe421/alfred-workflows.git"),
            }
        }

        fn ctx(&self, source: InvocationSource, lines: Option<LineRange>) -> UrlContext<'_> {
            UrlContext {
                platform: &self.platform,
                repo_path: "alanhe421/alfred-workflows",
                branch: "main",
                file_path: "src/app/main.rs",
                file_name: "main.rs",
                file_dir: "src/app",
                lines,
                domain: &self.domain,
                source,
            }
        }
    }

    fn range(start: usize, end: usize) -> Option<LineRange> {
        Some(LineRange::new(start, end).unwrap())
    }

    #[test]
    fn test_editor_selection_fills_anchor() {
        let f = Fixture::new(ANCHORED);
        let ctx = f.ctx(InvocationSource::Editor, range(10, 15));
        assert_eq!(ctx.render(), "https://x/src/app/main.rs#L10-L15");
    }

    #[test]
    fn test_cursor_position_is_single_line_range() {
        let f = Fixture::new(ANCHORED);
        let ctx = f.ctx(InvocationSource::Editor, range(7, 7));
        assert_eq!(ctx.render(), "https://x/src/app/main.rs#L7-L7");
    }

    #[test]
    fn test_explorer_strips_anchor() {
        let f = Fixture::new(ANCHORED);
        let ctx = f.ctx(InvocationSource::Explorer, range(10, 15));
        assert_eq!(ctx.render(), "https://x/src/app/main.rs");
    }

    #[test]
    fn test_editor_without_lines_strips_anchor() {
        let f = Fixture::new(ANCHORED);
        let ctx = f.ctx(InvocationSource::Editor, None);
        assert_eq!(ctx.render(), "https://x/src/app/main.rs");
    }

    #[test]
    fn test_bitbucket_lines_anchor() {
        let platform = crate::config::default_platforms()
            .into_iter()
            .find(|p| p.name == crate::config::BITBUCKET)
            .unwrap();
        let mut f = Fixture::new(&platform.url_template);
        f.domain = parse_remote_url("git@bitbucket.org:o/r.git");

        let whole = f.ctx(InvocationSource::Explorer, None);
        assert_eq!(
            render(&platform.url_template, &whole),
            "https://bitbucket.org/alanhe421/alfred-workflows/src/main/src/app/main.rs"
        );

        let selection = f.ctx(InvocationSource::Editor, range(3, 8));
        assert_eq!(
            render(&platform.url_template, &selection),
            "https://bitbucket.org/alanhe421/alfred-workflows/src/main/src/app/main.rs#lines-3:8"
        );
    }

    #[test]
    fn test_strips_anchor_variants() {
        for template in [
            "https://x/{file:path}#L{line:start}~L{line:end}",
            "https://x/{file:path}#L{line:start}-{line:end}",
            "https://x/{file:path}#L{line:start}L{line:end}",
            "https://x/{file:path}#L{line:start}",
        ] {
            let f = Fixture::new(template);
            let ctx = f.ctx(InvocationSource::Explorer, None);
            assert_eq!(ctx.render(), "https://x/src/app/main.rs", "template {template}");
        }
    }

    #[test]
    fn test_strips_bare_line_tokens() {
        let f = Fixture::new("https://x/{file:path}?from={line:start}&to={line:end}");
        let ctx = f.ctx(InvocationSource::Explorer, None);
        assert_eq!(ctx.render(), "https://x/src/app/main.rs?from=&to=");
    }

    #[test]
    fn test_path_segments() {
        let f = Fixture::new(
            "https://{remote:url}/{remote:url:path:0}/{remote:url:path:1}/{remote:url:path:5}",
        );
        let ctx = f.ctx(InvocationSource::Explorer, None);
        assert_eq!(ctx.render(), "https://github.com/alanhe421/alfred-workflows/");
    }

    #[test]
    fn test_repeated_path_segment_token() {
        let f = Fixture::new("{remote:url:path:0}-{remote:url:path:0}-{remote:url:path:0}");
        let ctx = f.ctx(InvocationSource::Explorer, None);
        assert_eq!(ctx.render(), "alanhe421-alanhe421-alanhe421");
    }

    #[test]
    fn test_out_of_range_segments_without_any_segments() {
        let mut f = Fixture::new("https://x/{remote:url:path:0}/{remote:url:path:1}");
        f.domain.path_segments.clear();
        let ctx = f.ctx(InvocationSource::Explorer, None);
        assert_eq!(ctx.render(), "https://x//");
    }

    #[test]
    fn test_branch_is_percent_encoded() {
        let f = Fixture::new("https://x/tree/{branch}/{file:path}?ref={branch}");
        let mut ctx = f.ctx(InvocationSource::Explorer, None);
        ctx.branch = "feature/foo";
        assert_eq!(
            ctx.render(),
            "https://x/tree/feature%2Ffoo/src/app/main.rs?ref=feature%2Ffoo"
        );
    }

    #[test]
    fn test_file_tokens_and_backslashes() {
        let f = Fixture::new("{file:dir}|{file:name}|{file:path}");
        let mut ctx = f.ctx(InvocationSource::Explorer, None);
        ctx.file_path = "src\\app\\main.rs";
        assert_eq!(ctx.render(), "src/app|main.rs|src/app/main.rs");
    }

    #[test]
    fn test_all_tokens_are_consumed() {
        let f = Fixture::new(
            "https://{remote:url}/{repo:path}/{remote:url:path:0}/{remote:url:path:1}/\
             {remote:url:path:2}/blob/{branch}/{file:dir}/{file:name}/{file:path}\
             #L{line:start}-L{line:end}",
        );
        let ctx = f.ctx(InvocationSource::Editor, range(1, 2));
        let rendered = ctx.render();
        let token = Regex::new(
            r"\{(repo:path|branch|file:path|file:name|file:dir|remote:url(:path:\d+)?|line:start|line:end)\}",
        )
        .unwrap();
        assert!(!token.is_match(&rendered), "left a token in {rendered}");
    }

    #[test]
    fn test_render_is_idempotent_on_rendered_output() {
        let f = Fixture::new(ANCHORED);
        let ctx = f.ctx(InvocationSource::Editor, range(3, 4));
        let once = ctx.render();
        assert_eq!(render(&once, &ctx), once);
    }
}
