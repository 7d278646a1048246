//
//  gitlink
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! This module provides configuration management for gitlink. It handles
//! loading, saving, and accessing settings stored in a TOML file in a
//! platform-specific directory.
//!
//! ## Overview
//!
//! The configuration holds:
//!
//! - **Platforms**: named URL templates, one per hosting service
//! - **Domain registry**: ordered domain → platform mappings
//! - **Remote selection**: whether a picked remote is reused for the session
//! - **Core settings**: browser, editor and prompt preferences
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/gitlink/config.toml`
//! - **macOS**: `~/Library/Application Support/gitlink/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\gitlink\config.toml`
//!
//! The `GITLINK_CONFIG` environment variable overrides the location.
//!
//! ## Example Configuration File
//!
//! ```toml
//! remember_remote_selection = true
//!
//! [core]
//! browser = "firefox"
//! prompt = "enabled"
//!
//! [[platforms]]
//! name = "Internal"
//! url_template = "https://{remote:url}/{repo:path}/src/{branch}/{file:path}#L{line:start}"
//!
//! [[domain_registry]]
//! domain = "git.mycompany.com"
//! platform = "Internal"
//! ```
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file I/O operations
//! - [`platforms`]: Built-in platforms and domain helpers

mod file;
mod platforms;

pub use file::*;
pub use platforms::*;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the configuration file path.
pub const CONFIG_ENV: &str = "GITLINK_CONFIG";

/// A hosting platform and the URL template for linking to a file on it.
///
/// # Example
///
/// ```rust
/// use gitlink::config::Platform;
///
/// let platform = Platform::new("GitHub", "https://github.com/{repo:path}/blob/{branch}/{file:path}");
/// assert_eq!(platform.name, "GitHub");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    /// Display name, referenced by [`DomainMapping::platform`]
    pub name: String,

    /// Template containing placeholders such as `{repo:path}` and `{branch}`.
    #[serde(alias = "urlTemplate")]
    pub url_template: String,
}

impl Platform {
    pub fn new(name: impl Into<String>, url_template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url_template: url_template.into(),
        }
    }
}

/// Associates part of a domain with a platform name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainMapping {
    /// Matched as a substring of the remote's domain
    pub domain: String,
    /// Name of a [`Platform`]
    pub platform: String,
}

impl DomainMapping {
    pub fn new(domain: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            platform: platform.into(),
        }
    }
}

/// Global configuration container for gitlink.
///
/// # Examples
///
/// ```rust
/// use gitlink::config::Config;
///
/// let config = Config::default();
/// assert!(config.remember_remote_selection);
/// assert!(!config.platforms.is_empty());
/// ```
///
/// # Notes
///
/// - Every field has a serde default so partial files load cleanly
/// - A file that lists `platforms` replaces the built-in list entirely
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Reuse the remote picked from several for the rest of the session.
    #[serde(default = "default_true")]
    pub remember_remote_selection: bool,

    /// Core CLI configuration options.
    #[serde(default)]
    pub core: CoreConfig,

    /// Platforms links can be built for.
    #[serde(default = "default_platforms")]
    pub platforms: Vec<Platform>,

    /// Ordered domain → platform mappings; first match wins.
    #[serde(default = "default_domain_registry")]
    pub domain_registry: Vec<DomainMapping>,
}

/// Core configuration options.
///
/// # Default Values
///
/// | Field | Default |
/// |-------|---------|
/// | `browser` | `None` (system default browser) |
/// | `editor` | `None` (uses `$EDITOR`, `$VISUAL`, then `vi`) |
/// | `prompt` | `"enabled"` |
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Browser command used to open links.
    #[serde(default)]
    pub browser: Option<String>,

    /// Editor command used by `gitlink config edit`, e.g. `"code --wait"`.
    #[serde(default)]
    pub editor: Option<String>,

    /// `"enabled"` or `"disabled"`; disabled never shows the remote picker.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_prompt() -> String {
    "enabled".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            browser: None,
            editor: None,
            prompt: default_prompt(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remember_remote_selection: true,
            core: CoreConfig::default(),
            platforms: default_platforms(),
            domain_registry: default_domain_registry(),
        }
    }
}

impl Config {
    /// Loads configuration from the default location.
    ///
    /// A missing file is not an error; defaults are used.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or is not valid TOML.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from `path`, falling back to defaults when absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if config_exists(path) {
            let content = read_config_file(path)?;
            toml::from_str(&content).with_context(|| format!("Invalid config in {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path` as pretty TOML.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Returns the path to the configuration file.
    ///
    /// `GITLINK_CONFIG` wins over the platform directory.
    ///
    /// # Platform-Specific Paths
    ///
    /// | Platform | Path |
    /// |----------|------|
    /// | Linux | `~/.config/gitlink/config.toml` |
    /// | macOS | `~/Library/Application Support/gitlink/config.toml` |
    /// | Windows | `C:\Users\<User>\AppData\Roaming\gitlink\config.toml` |
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Returns `true` unless prompting has been disabled.
    pub fn prompts_enabled(&self) -> bool {
        self.core.prompt != "disabled"
    }

    /// Looks up a platform by exact name.
    pub fn platform(&self, name: &str) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.name == name)
    }

    /// Adds a platform, replacing the template of one with the same name.
    ///
    /// Returns `true` if an existing platform was replaced.
    pub fn upsert_platform(&mut self, platform: Platform) -> bool {
        match self.platforms.iter_mut().find(|p| p.name == platform.name) {
            Some(existing) => {
                existing.url_template = platform.url_template;
                true
            }
            None => {
                self.platforms.push(platform);
                false
            }
        }
    }

    /// Maps `domain` to `platform`.
    ///
    /// An existing entry for the same domain is updated in place, keeping its
    /// position. New entries go to the front so they are matched before the
    /// broader built-in ones.
    pub fn map_domain(&mut self, domain: &str, platform: &str) {
        match self.domain_registry.iter_mut().find(|m| m.domain == domain) {
            Some(existing) => existing.platform = platform.to_string(),
            None => self
                .domain_registry
                .insert(0, DomainMapping::new(domain, platform)),
        }
    }

    /// Removes a platform and every registry entry pointing at it.
    ///
    /// Returns `false` if there was no such platform.
    pub fn remove_platform(&mut self, name: &str) -> bool {
        let before = self.platforms.len();
        self.platforms.retain(|p| p.name != name);
        self.domain_registry.retain(|m| m.platform != name);
        self.platforms.len() != before
    }

    /// Gets a scalar configuration value by key.
    ///
    /// # Supported Keys
    ///
    /// | Key | Field |
    /// |-----|-------|
    /// | `"browser"` | `core.browser` |
    /// | `"editor"` | `core.editor` |
    /// | `"prompt"` | `core.prompt` |
    /// | `"remember_remote_selection"` | `remember_remote_selection` |
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gitlink::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.get("prompt"), Some("enabled".to_string()));
    /// assert_eq!(config.get("browser"), None);
    /// assert_eq!(config.get("unknown_key"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "browser" => self.core.browser.clone(),
            "editor" => self.core.editor.clone(),
            "prompt" => Some(self.core.prompt.clone()),
            "remember_remote_selection" => Some(self.remember_remote_selection.to_string()),
            _ => None,
        }
    }

    /// Sets a scalar configuration value by key.
    ///
    /// Returns `false` for unknown keys and for a `remember_remote_selection`
    /// value that is not a boolean (`true`/`yes`/`1`, `false`/`no`/`0`); the
    /// config is left unchanged in both cases.
    pub fn set(&mut self, key: &str, value: String) -> bool {
        match key {
            "browser" => {
                self.core.browser = Some(value);
                true
            }
            "editor" => {
                self.core.editor = Some(value);
                true
            }
            "prompt" => {
                self.core.prompt = value;
                true
            }
            "remember_remote_selection" => match parse_bool(&value) {
                Some(remember) => {
                    self.remember_remote_selection = remember;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("remember_remote_selection = false\n").unwrap();
        assert!(!config.remember_remote_selection);
        assert_eq!(config.core.prompt, "enabled");
        assert_eq!(config.platforms, default_platforms());
        assert_eq!(config.domain_registry, default_domain_registry());
    }

    #[test]
    fn test_user_platforms_replace_builtins() {
        let config: Config = toml::from_str(
            r#"
[[platforms]]
name = "Coding"
urlTemplate = "https://{remote:url:path:0}.coding.net/p/{remote:url:path:1}/d/{remote:url:path:2}/git/tree/{branch}/{file:path}"

[[domain_registry]]
domain = "e.coding.net"
platform = "Coding"
"#,
        )
        .unwrap();
        assert_eq!(config.platforms.len(), 1);
        assert_eq!(config.platforms[0].name, "Coding");
        assert_eq!(config.domain_registry[0].domain, "e.coding.net");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.set("browser", "firefox".to_string());
        config.upsert_platform(Platform::new("Internal", "https://{remote:url}/{repo:path}"));
        config.map_domain("git.corp.example", "Internal");
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.core.browser.as_deref(), Some("firefox"));
        assert_eq!(loaded.platform("Internal").unwrap().url_template, "https://{remote:url}/{repo:path}");
        assert_eq!(loaded.domain_registry[0], DomainMapping::new("git.corp.example", "Internal"));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(config.prompts_enabled());
        assert_eq!(config.platforms.len(), default_platforms().len());
    }

    #[test]
    fn test_upsert_and_remove_platform() {
        let mut config = Config::default();
        assert!(!config.upsert_platform(Platform::new("Gitea", "https://a/{file:path}")));
        assert!(config.upsert_platform(Platform::new("Gitea", "https://b/{file:path}")));
        assert_eq!(config.platform("Gitea").unwrap().url_template, "https://b/{file:path}");

        config.map_domain("gitea.io", "Gitea");
        assert!(config.remove_platform("Gitea"));
        assert!(config.platform("Gitea").is_none());
        assert!(config.domain_registry.iter().all(|m| m.platform != "Gitea"));
        assert!(!config.remove_platform("Gitea"));
    }

    #[test]
    fn test_map_domain_updates_in_place() {
        let mut config = Config::default();
        let position = config
            .domain_registry
            .iter()
            .position(|m| m.domain == "gitee.com")
            .unwrap();
        config.map_domain("gitee.com", GITHUB);
        assert_eq!(config.domain_registry[position].platform, GITHUB);
    }

    #[test]
    fn test_get_and_set() {
        let mut config = Config::default();
        assert!(config.set("remember_remote_selection", "false".to_string()));
        assert_eq!(config.get("remember_remote_selection"), Some("false".to_string()));
        assert!(config.set("prompt", "disabled".to_string()));
        assert!(!config.prompts_enabled());
        assert!(!config.set("unknown", "x".to_string()));
    }

    #[test]
    fn test_set_rejects_non_boolean_remember_value() {
        let mut config = Config::default();
        assert!(config.set("remember_remote_selection", "yes".to_string()));
        assert!(config.remember_remote_selection);

        assert!(!config.set("remember_remote_selection", "maybe".to_string()));
        assert!(config.remember_remote_selection);

        assert!(config.set("remember_remote_selection", "0".to_string()));
        assert!(!config.remember_remote_selection);
    }
}
