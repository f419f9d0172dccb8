//! Configuration-related CLI commands.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{Configuration, SettingsStore};

/// Configuration operations.
#[derive(Parser)]
pub struct ConfigCommand {
    /// Configuration subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Shows the active settings.
    Show,
    /// Saves new settings, keeping any value that is not given.
    Set(SetCommand),
    /// Removes saved settings so the defaults apply.
    Reset,
    /// Prints the settings file location.
    Path,
}

/// Set command options.
#[derive(Parser)]
pub struct SetCommand {
    /// Comma-separated commit types (e.g., "feat,fix,docs").
    #[arg(long, value_name = "LIST")]
    pub types: Option<String>,

    /// Minimum description length; 0 or an invalid value restores the default.
    #[arg(long, value_name = "N")]
    pub min_length: Option<String>,
}

impl ConfigCommand {
    /// Executes the config command.
    pub fn execute(self, store: &SettingsStore) -> Result<()> {
        match self.command {
            ConfigSubcommands::Show => {
                print!("{}", format_settings(&store.load()?));
                Ok(())
            }
            ConfigSubcommands::Set(set_cmd) => set_cmd.execute(store),
            ConfigSubcommands::Reset => {
                store.reset()?;
                println!("✅ Settings reset to defaults");
                Ok(())
            }
            ConfigSubcommands::Path => {
                println!("{}", store.path().display());
                Ok(())
            }
        }
    }
}

impl SetCommand {
    /// Merges the given values over the stored settings and saves them.
    pub fn execute(self, store: &SettingsStore) -> Result<()> {
        let current = store.load()?;
        let updated = self.apply(&current);
        store.save(&updated)?;

        println!("✅ Settings saved!");
        print!("{}", format_settings(&updated));
        Ok(())
    }

    fn apply(&self, current: &Configuration) -> Configuration {
        let types = self
            .types
            .clone()
            .unwrap_or_else(|| current.commit_types_input());
        let min_length = self
            .min_length
            .clone()
            .unwrap_or_else(|| current.min_description_length.to_string());

        Configuration::from_options_input(&types, &min_length)
    }
}

/// Renders settings as `key: value` lines.
pub fn format_settings(config: &Configuration) -> String {
    format!(
        "commitTypes: {}\nminDescriptionLength: {}\n",
        config.commit_types_input(),
        config.min_description_length
    )
}
