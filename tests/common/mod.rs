//
//  gitlink
//  tests/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command as StdCommand;

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway git repository with one commit and an isolated config file.
pub struct TestRepo {
    dir: TempDir,
    config_dir: TempDir,
}

impl TestRepo {
    /// Creates a repository on `branch` with an empty initial commit.
    pub fn new(branch: &str) -> Self {
        let repo = Self {
            dir: TempDir::new().unwrap(),
            config_dir: TempDir::new().unwrap(),
        };
        repo.git(&["init", "-q"]);
        repo.git(&["config", "user.name", "Test"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo.git(&["commit", "-q", "--allow-empty", "-m", "initial"]);
        repo.git(&["checkout", "-q", "-b", branch]);
        repo
    }

    pub fn root_path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the config file the CLI is pointed at; absent until written.
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.path().join("config.toml")
    }

    pub fn add_remote(&self, name: &str, url: &str) {
        self.git(&["remote", "add", name, url]);
    }

    /// Writes `content` to `relative` inside the repository.
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn git(&self, args: &[&str]) {
        let status = StdCommand::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .status()
            .unwrap();
        assert!(status.success(), "git {} failed", args.join(" "));
    }

    /// A `gitlink` invocation inside the repository that never prompts.
    pub fn gitlink(&self) -> Command {
        let mut cmd = Command::cargo_bin("gitlink").unwrap();
        cmd.current_dir(self.dir.path())
            .env("GITLINK_CONFIG", self.config_path())
            .env("GITLINK_NO_PROMPT", "true")
            .env("NO_COLOR", "1")
            .env_remove("GITLINK_REMOTE")
            .env_remove("GITLINK_DEBUG");
        cmd
    }
}
