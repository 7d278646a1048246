//
//  gitlink
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! This module provides commands for managing the configuration: scalar
//! preferences (`get`, `set`, `unset`, `list`), the platforms and domain
//! registry used to build links, and the file itself (`edit`, `path`,
//! `init`).

use std::process::Command;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::config::{config_exists, normalize_domain, Config, Platform};
use crate::interactive::prompt::get_editor;
use crate::output::{
    platforms_table, print_field, print_header, registry_table, write_json, OutputFormat,
    OutputWriter,
};
use crate::util::split_command;

use super::GlobalOptions;

/// Valid scalar configuration keys
const VALID_KEYS: &[&str] = &["browser", "editor", "prompt", "remember_remote_selection"];

/// Placeholders a URL template may use
const TEMPLATE_PLACEHOLDERS: &[&str] = &[
    "{repo:path}",
    "{branch}",
    "{file:path}",
    "{file:name}",
    "{file:dir}",
    "{remote:url}",
    "{remote:url:path:",
    "{line:start}",
    "{line:end}",
];

const PLACEHOLDER_HELP: &str = "{repo:path}, {branch}, {file:path}, {file:name}, {file:dir}, \
                                {remote:url}, {remote:url:path:N}, {line:start}, {line:end}";

/// Manage platforms, domains and preferences
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// Reset a configuration value to its default
    Unset(UnsetArgs),

    /// List all configuration values
    #[command(visible_alias = "ls")]
    List,

    /// Open configuration in editor
    Edit,

    /// Show configuration file path
    Path,

    /// List platforms and the domain registry
    Platforms,

    /// Add a platform or replace its URL template
    #[command(name = "add-platform")]
    AddPlatform(AddPlatformArgs),

    /// Remove a platform and its domain mappings
    #[command(name = "remove-platform")]
    RemovePlatform(RemovePlatformArgs),

    /// Map a domain to a platform
    #[command(name = "map-domain")]
    MapDomain(MapDomainArgs),

    /// Write the default configuration file
    Init(InitArgs),
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

#[derive(Args, Debug)]
pub struct UnsetArgs {
    /// Configuration key
    pub key: String,
}

#[derive(Args, Debug)]
pub struct AddPlatformArgs {
    /// Platform name, e.g. "Gitea"
    pub name: String,

    /// URL template, e.g. "https://{remote:url}/{repo:path}/src/branch/{branch}/{file:path}"
    pub template: String,

    /// Also map this domain to the platform
    #[arg(long, short = 'd')]
    pub domain: Option<String>,
}

#[derive(Args, Debug)]
pub struct RemovePlatformArgs {
    /// Platform name
    pub name: String,
}

#[derive(Args, Debug)]
pub struct MapDomainArgs {
    /// Domain, or part of one, matched against remote hosts
    pub domain: String,

    /// Name of an existing platform
    pub platform: String,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(long, short = 'f')]
    pub force: bool,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(OutputFormat::from_flag(global.json));
        match &self.command {
            ConfigSubcommand::Get(args) => self.get(args, &writer).await,
            ConfigSubcommand::Set(args) => self.set(args, &writer).await,
            ConfigSubcommand::Unset(args) => self.unset(args, &writer).await,
            ConfigSubcommand::List => self.list(&writer).await,
            ConfigSubcommand::Edit => self.edit(&writer).await,
            ConfigSubcommand::Path => self.path(&writer).await,
            ConfigSubcommand::Platforms => self.platforms(&writer).await,
            ConfigSubcommand::AddPlatform(args) => self.add_platform(args, &writer).await,
            ConfigSubcommand::RemovePlatform(args) => self.remove_platform(args, &writer).await,
            ConfigSubcommand::MapDomain(args) => self.map_domain(args, &writer).await,
            ConfigSubcommand::Init(args) => self.init(args, &writer).await,
        }
    }

    /// Get a configuration value
    async fn get(&self, args: &GetArgs, writer: &OutputWriter) -> Result<()> {
        check_key(&args.key)?;
        let config = Config::load()?;
        let value = config.get(&args.key);

        if writer.is_json() {
            write_json(&serde_json::json!({
                "key": args.key,
                "value": value,
            }))?;
        } else if let Some(v) = value {
            println!("{}", v);
        }

        Ok(())
    }

    /// Set a configuration value
    async fn set(&self, args: &SetArgs, writer: &OutputWriter) -> Result<()> {
        check_key(&args.key)?;

        if args.key == "prompt" && !["enabled", "disabled"].contains(&args.value.as_str()) {
            bail!("Invalid value for prompt. Valid values: enabled, disabled");
        }

        let mut config = Config::load()?;
        if !config.set(&args.key, args.value.clone()) {
            bail!(
                "Invalid value for {}. Valid values: true, false",
                args.key
            );
        }
        config.save()?;

        if writer.is_json() {
            write_json(&serde_json::json!({
                "success": true,
                "key": args.key,
                "value": args.value,
            }))?;
        } else {
            writer.write_success(&format!("Set {} = {}", style(&args.key).cyan(), args.value));
        }

        Ok(())
    }

    /// Reset a configuration value
    async fn unset(&self, args: &UnsetArgs, writer: &OutputWriter) -> Result<()> {
        let mut config = Config::load()?;

        match args.key.as_str() {
            "browser" => config.core.browser = None,
            "editor" => config.core.editor = None,
            "prompt" => config.core.prompt = "enabled".to_string(),
            "remember_remote_selection" => config.remember_remote_selection = true,
            _ => check_key(&args.key)?,
        }

        config.save()?;

        if writer.is_json() {
            write_json(&serde_json::json!({
                "success": true,
                "key": args.key,
            }))?;
        } else {
            writer.write_success(&format!("Unset {}", style(&args.key).cyan()));
        }

        Ok(())
    }

    /// List all configuration values
    async fn list(&self, writer: &OutputWriter) -> Result<()> {
        let config = Config::load()?;

        if writer.is_json() {
            return write_json(&config);
        }

        let color = writer.color_enabled();
        print_header("Core Configuration");
        print_field("browser", config.core.browser.as_deref(), color);
        print_field("editor", config.core.editor.as_deref(), color);
        print_field("prompt", Some(config.core.prompt.as_str()), color);
        print_field(
            "remember_remote_selection",
            Some(config.remember_remote_selection.to_string().as_str()),
            color,
        );

        print_header("Platforms");
        for platform in &config.platforms {
            print_field(&platform.name, Some(platform.url_template.as_str()), color);
        }

        print_header("Domain Registry");
        for mapping in &config.domain_registry {
            print_field(&mapping.domain, Some(mapping.platform.as_str()), color);
        }

        println!();
        Ok(())
    }

    /// Open configuration in editor
    async fn edit(&self, writer: &OutputWriter) -> Result<()> {
        let config = Config::load()?;

        if writer.is_json() {
            let config_path = Config::config_path()?;
            return write_json(&serde_json::json!({
                "action": "edit",
                "path": config_path.display().to_string(),
                "editor": get_editor(config.core.editor.as_deref()),
            }));
        }

        edit_config_file(&config)?;
        writer.write_success("Configuration saved.");
        Ok(())
    }

    /// Show configuration file path
    async fn path(&self, writer: &OutputWriter) -> Result<()> {
        let config_path = Config::config_path()?;

        if writer.is_json() {
            write_json(&serde_json::json!({
                "path": config_path.display().to_string(),
                "exists": config_exists(&config_path),
            }))?;
        } else {
            println!("{}", config_path.display());
        }

        Ok(())
    }

    /// List platforms and the domain registry
    async fn platforms(&self, writer: &OutputWriter) -> Result<()> {
        let config = Config::load()?;

        if writer.is_json() {
            return write_json(&serde_json::json!({
                "platforms": config.platforms,
                "domain_registry": config.domain_registry,
            }));
        }

        let color = writer.color_enabled();
        println!(
            "{}",
            platforms_table(&config.platforms, &config.domain_registry, color)
        );
        println!(
            "{}",
            registry_table(&config.domain_registry, &config.platforms, color)
        );
        Ok(())
    }

    /// Add a platform or replace its template
    async fn add_platform(&self, args: &AddPlatformArgs, writer: &OutputWriter) -> Result<()> {
        let name = args.name.trim();
        if name.is_empty() {
            bail!("Platform name cannot be empty");
        }
        check_template(&args.template)?;

        let mut config = Config::load()?;
        let replaced = config.upsert_platform(Platform::new(name, args.template.trim()));
        let domain = args.domain.as_deref().map(normalize_domain);
        if let Some(domain) = &domain {
            config.map_domain(domain, name);
        }
        config.save()?;

        if writer.is_json() {
            return write_json(&serde_json::json!({
                "success": true,
                "platform": name,
                "replaced": replaced,
                "domain": domain,
            }));
        }

        let verb = if replaced { "Updated" } else { "Added" };
        writer.write_success(&format!("{} platform {}", verb, style(name).cyan()));
        if let Some(domain) = &domain {
            writer.write_success(&format!("Mapped {} to {}", domain, style(name).cyan()));
        } else if !config.domain_registry.iter().any(|m| m.platform == name) {
            writer.write_warning(&format!(
                "No domain maps to {} yet; add one with `gitlink config map-domain <DOMAIN> {}`",
                name, name
            ));
        }
        Ok(())
    }

    /// Remove a platform
    async fn remove_platform(
        &self,
        args: &RemovePlatformArgs,
        writer: &OutputWriter,
    ) -> Result<()> {
        let mut config = Config::load()?;
        if !config.remove_platform(&args.name) {
            bail!("Platform '{}' not found", args.name);
        }
        config.save()?;

        if writer.is_json() {
            return write_json(&serde_json::json!({
                "success": true,
                "platform": args.name,
            }));
        }

        writer.write_success(&format!("Removed platform {}", style(&args.name).cyan()));
        Ok(())
    }

    /// Map a domain to a platform
    async fn map_domain(&self, args: &MapDomainArgs, writer: &OutputWriter) -> Result<()> {
        let domain = normalize_domain(&args.domain);
        if domain.is_empty() {
            bail!("Domain cannot be empty");
        }

        let mut config = Config::load()?;
        if config.platform(&args.platform).is_none() {
            let known: Vec<&str> = config.platforms.iter().map(|p| p.name.as_str()).collect();
            bail!(
                "Unknown platform '{}'. Known platforms: {}",
                args.platform,
                known.join(", ")
            );
        }
        config.map_domain(&domain, &args.platform);
        config.save()?;

        if writer.is_json() {
            return write_json(&serde_json::json!({
                "success": true,
                "domain": domain,
                "platform": args.platform,
            }));
        }

        writer.write_success(&format!(
            "Mapped {} to {}",
            domain,
            style(&args.platform).cyan()
        ));
        Ok(())
    }

    /// Write the default configuration
    async fn init(&self, args: &InitArgs, writer: &OutputWriter) -> Result<()> {
        let config_path = Config::config_path()?;
        if config_exists(&config_path) && !args.force {
            bail!(
                "{} already exists; pass --force to overwrite it",
                config_path.display()
            );
        }

        let config = Config::default();
        config.save_to(&config_path)?;

        if writer.is_json() {
            return write_json(&serde_json::json!({
                "success": true,
                "path": config_path.display().to_string(),
            }));
        }

        writer.write_success(&format!("Wrote {}", config_path.display()));
        Ok(())
    }
}

/// Opens the configuration file in the user's editor and waits for it.
///
/// The file is written with defaults first if it does not exist yet.
pub(crate) fn edit_config_file(config: &Config) -> Result<()> {
    let config_path = Config::config_path()?;
    if !config_exists(&config_path) {
        config.save_to(&config_path)?;
    }

    let editor = get_editor(config.core.editor.as_deref());
    eprintln!(
        "{} Opening {} in {}...",
        style("→").cyan(),
        config_path.display(),
        editor
    );

    let (program, args) = split_command(&editor)?;
    let status = Command::new(&program)
        .args(&args)
        .arg(&config_path)
        .status()?;

    if !status.success() {
        bail!("Editor exited with non-zero status");
    }

    Config::load_from(&config_path)?;
    Ok(())
}

fn check_key(key: &str) -> Result<()> {
    if !VALID_KEYS.contains(&key) {
        bail!(
            "Unknown configuration key '{}'. Valid keys: {}",
            key,
            VALID_KEYS.join(", ")
        );
    }
    Ok(())
}

/// A template must be an http(s) URL and use at least one placeholder.
fn check_template(template: &str) -> Result<()> {
    let template = template.trim();
    if !(template.starts_with("https://") || template.starts_with("http://")) {
        bail!("URL template must start with http:// or https://");
    }
    if !TEMPLATE_PLACEHOLDERS.iter().any(|p| template.contains(p)) {
        bail!(
            "URL template uses no placeholders. Available: {}",
            PLACEHOLDER_HELP
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_key() {
        assert!(check_key("browser").is_ok());
        assert!(check_key("remember_remote_selection").is_ok());
        assert!(check_key("pager").is_err());
    }

    #[test]
    fn test_check_template() {
        assert!(check_template("https://{remote:url}/{repo:path}/src/{branch}/{file:path}").is_ok());
        assert!(check_template("https://{remote:url:path:0}.example.com/{file:path}").is_ok());
        assert!(check_template("ftp://{remote:url}/{file:path}").is_err());
        assert!(check_template("https://example.com/static").is_err());
    }

    #[test]
    fn test_check_template_error_lists_placeholders() {
        let err = check_template("https://example.com/").unwrap_err().to_string();
        assert!(err.contains("{remote:url:path:N}"));
        assert!(err.contains("{line:end}"));
    }
}
