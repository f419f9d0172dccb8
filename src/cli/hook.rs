//! Git hook integration.
//!
//! `hook commit-msg` binds the reactive validator to the message file git
//! hands to a `commit-msg` hook: the commit itself is the submit action and a
//! veto aborts it with a non-zero exit.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::terminal::{SubmitGate, TerminalFeedback};
use crate::config::SettingsStore;
use crate::git::GitRepository;
use crate::message::normalize::strip_comment_lines;
use crate::message::Classifier;
use crate::reactive::{ReactiveValidator, RetryPolicy, SubmitDecision, TextSource};

const HOOK_SCRIPT: &str = "#!/bin/sh\n# Installed by gitbuddy: validates the commit message format.\nexec gitbuddy hook commit-msg \"$1\"\n";

/// Hook operations.
#[derive(Parser)]
pub struct HookCommand {
    /// Hook subcommand to execute.
    #[command(subcommand)]
    pub command: HookSubcommands,
}

/// Hook subcommands.
#[derive(Subcommand)]
pub enum HookSubcommands {
    /// Validates a commit message file; exits 1 to abort an invalid commit.
    CommitMsg(CommitMsgCommand),
    /// Installs the commit-msg hook into a repository.
    Install(InstallCommand),
}

/// commit-msg hook options.
#[derive(Parser)]
pub struct CommitMsgCommand {
    /// Commit message file passed by git.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Seconds to keep retrying while the message file does not exist yet.
    #[arg(long, default_value_t = 0)]
    pub wait: u32,
}

/// Hook install options.
#[derive(Parser)]
pub struct InstallCommand {
    /// Repository to install into.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Overwrites an existing commit-msg hook.
    #[arg(long)]
    pub force: bool,
}

impl HookCommand {
    /// Executes the hook command.
    pub fn execute(self, store: &SettingsStore) -> Result<()> {
        match self.command {
            HookSubcommands::CommitMsg(cmd) => cmd.execute(store),
            HookSubcommands::Install(cmd) => cmd.execute(),
        }
    }
}

/// Reads the commit message from the file git prepared.
pub struct MessageFile {
    path: PathBuf,
}

impl MessageFile {
    /// Creates a text source over `path`.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TextSource for MessageFile {
    fn current_text(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Some(strip_comment_lines(&content)),
            Err(err) => {
                tracing::debug!(path = %self.path.display(), "Message file not readable: {err}");
                None
            }
        }
    }
}

impl CommitMsgCommand {
    /// Runs the validator over the message file and vetoes invalid commits.
    pub fn execute(self, store: &SettingsStore) -> Result<()> {
        match self.run(store)? {
            SubmitDecision::Proceed => Ok(()),
            SubmitDecision::Blocked => std::process::exit(1),
        }
    }

    /// Validates the message file, returning whether the commit may proceed.
    pub fn run(&self, store: &SettingsStore) -> Result<SubmitDecision> {
        let config = store.load()?;
        let policy = RetryPolicy {
            interval: Duration::from_secs(1),
            max_attempts: self.wait + 1,
        };

        let mut validator = ReactiveValidator::new(
            Classifier::new(&config),
            MessageFile::new(self.file.clone()),
            SubmitGate::default(),
            TerminalFeedback::new(std::io::stderr()),
        );
        validator
            .attach(&policy)
            .with_context(|| format!("Failed to read commit message: {}", self.file.display()))?;

        Ok(validator.on_submit())
    }
}

impl InstallCommand {
    /// Writes the hook script into `.git/hooks/commit-msg`.
    pub fn execute(self) -> Result<()> {
        let repo = GitRepository::open_at(&self.repo)?;
        let hook_path = install_hook(repo.path(), self.force)?;
        println!("✅ Installed commit-msg hook at {}", hook_path.display());
        Ok(())
    }
}

/// Installs the hook script under `git_dir/hooks`, returning its path.
pub fn install_hook(git_dir: &Path, force: bool) -> Result<PathBuf> {
    let hooks_dir = git_dir.join("hooks");
    std::fs::create_dir_all(&hooks_dir)
        .with_context(|| format!("Failed to create hooks directory: {}", hooks_dir.display()))?;

    let hook_path = hooks_dir.join("commit-msg");
    if hook_path.exists() && !force {
        anyhow::bail!(
            "A commit-msg hook already exists at {}. Use --force to replace it.",
            hook_path.display()
        );
    }

    std::fs::write(&hook_path, HOOK_SCRIPT)
        .with_context(|| format!("Failed to write hook: {}", hook_path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&hook_path, std::fs::Permissions::from_mode(0o755))
            .with_context(|| format!("Failed to make hook executable: {}", hook_path.display()))?;
    }

    tracing::info!(path = %hook_path.display(), "Installed commit-msg hook");
    Ok(hook_path)
}
