//! Settings and preference CLI commands

use clap::Subcommand;

use crate::config::{FintrackPaths, Settings};
use crate::error::FintrackResult;
use crate::models::{Currency, Theme};
use crate::services::LedgerSession;
use crate::storage::KeyValueStore;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current preferences and settings
    Show,

    /// Set the display currency (USD, EUR, GBP, JPY or INR)
    Currency {
        code: Currency,
    },

    /// Set the color theme (light or dark)
    Theme {
        theme: Theme,
    },

    /// Set the usage percentage at which a budget is flagged as near its limit
    NearLimit {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=100))]
        percent: u8,
    },
}

/// Handle a settings command
pub fn handle_settings_command<S: KeyValueStore>(
    session: &mut LedgerSession<S>,
    paths: &FintrackPaths,
    settings: &mut Settings,
    cmd: SettingsCommands,
) -> FintrackResult<()> {
    match cmd {
        SettingsCommands::Show => {
            let prefs = session.ledger().preferences();
            println!("Preferences");
            println!("===========");
            println!("  Currency:   {}", prefs.currency);
            println!("  Theme:      {}", prefs.theme);
            println!();
            println!("Settings");
            println!("========");
            println!("  Near-limit threshold: {}%", settings.near_limit_percent);
            println!("  Date format:          {}", settings.date_format);
            println!("  Export file name:     {}", settings.export_file_name);
            println!("  Storage key:          {}", settings.storage_key);
        }
        SettingsCommands::Currency { code } => {
            session.set_currency(code);
            println!("Currency set to {}", code);
        }
        SettingsCommands::Theme { theme } => {
            session.set_theme(theme);
            println!("Theme set to {}", theme);
        }
        SettingsCommands::NearLimit { percent } => {
            settings.near_limit_percent = percent;
            settings.save(paths)?;
            println!("Budgets are now flagged at {}% of their limit", percent);
        }
    }

    Ok(())
}
