//! CLI interface for gitbuddy.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{SettingsStore, SETTINGS_ENV_VAR};

pub mod changelog;
pub mod check;
pub mod compose;
pub mod config;
pub mod hook;
mod terminal;

/// gitbuddy: conventional commit message validation and changelog generation.
#[derive(Parser)]
#[command(name = "gitbuddy")]
#[command(about = "Validates commit messages and generates changelogs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file to read and write (defaults to ~/.gitbuddy/settings.json).
    #[arg(long, global = true, env = SETTINGS_ENV_VAR, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories.
#[derive(Subcommand)]
pub enum Commands {
    /// Checks commit messages against the configured format.
    Check(check::CheckCommand),
    /// Regenerates the changelog from recent commit history.
    Changelog(changelog::ChangelogCommand),
    /// Shows or changes the validation settings.
    Config(config::ConfigCommand),
    /// Git hook integration.
    Hook(hook::HookCommand),
    /// Composes a commit message interactively with live validation.
    Compose(compose::ComposeCommand),
}

impl Cli {
    /// Executes the CLI command.
    pub fn execute(self) -> Result<()> {
        let store = SettingsStore::from_override(self.settings);

        match self.command {
            Commands::Check(check_cmd) => check_cmd.execute(&store),
            Commands::Changelog(changelog_cmd) => changelog_cmd.execute(),
            Commands::Config(config_cmd) => config_cmd.execute(&store),
            Commands::Hook(hook_cmd) => hook_cmd.execute(&store),
            Commands::Compose(compose_cmd) => compose_cmd.execute(&store),
        }
    }
}
