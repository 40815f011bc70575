//! Config CLI command
//!
//! Shows paths and settings, and writes any settings given as flags.

use clap::Args;
use tracing::info;

use crate::config::{LedgerPaths, Settings};
use crate::error::{LedgerError, LedgerResult};
use crate::storage::Storage;

/// Settings that can be changed from the command line
#[derive(Args, Debug, Default)]
pub struct ConfigUpdates {
    /// Currency symbol shown before amounts
    #[arg(long)]
    pub currency: Option<String>,

    /// Print budget notices (true/false)
    #[arg(long)]
    pub notify: Option<bool>,

    /// Width of progress and stacked bars
    #[arg(long)]
    pub bar_width: Option<usize>,
}

impl ConfigUpdates {
    /// Whether any setting was given
    pub fn is_empty(&self) -> bool {
        self.currency.is_none() && self.notify.is_none() && self.bar_width.is_none()
    }

    /// Apply the given values to `settings`
    pub fn apply(self, settings: &mut Settings) -> LedgerResult<()> {
        if let Some(width) = self.bar_width {
            if width == 0 {
                return Err(LedgerError::Validation(
                    "Bar width must be at least 1".into(),
                ));
            }
            settings.bar_width = width;
        }
        if let Some(symbol) = self.currency {
            settings.currency_symbol = symbol;
        }
        if let Some(notify) = self.notify {
            settings.notify = notify;
        }
        Ok(())
    }
}

/// Handle `config`
pub fn handle_config(
    paths: &LedgerPaths,
    storage: &Storage,
    mut settings: Settings,
    updates: ConfigUpdates,
) -> LedgerResult<()> {
    if !updates.is_empty() {
        updates.apply(&mut settings)?;
        settings.save(paths)?;
        info!(path = %paths.settings_file().display(), "settings saved");
        println!("Settings saved.");
        println!();
    }

    println!("Expense Ledger Configuration");
    println!("============================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Ledger file:    {}", storage.path().display());
    println!(
        "Ledger exists:  {}",
        if storage.exists() { "yes" } else { "no" }
    );
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Budget notices:  {}", if settings.notify { "on" } else { "off" });
    println!("  Bar width:       {}", settings.bar_width);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_updates() {
        assert!(ConfigUpdates::default().is_empty());
    }

    #[test]
    fn test_apply_updates() {
        let mut settings = Settings::default();
        let updates = ConfigUpdates {
            currency: Some("€".into()),
            notify: Some(false),
            bar_width: None,
        };

        updates.apply(&mut settings).unwrap();

        assert_eq!(settings.currency_symbol, "€");
        assert!(!settings.notify);
        assert_eq!(settings.bar_width, 25);
    }

    #[test]
    fn test_zero_bar_width_rejected() {
        let mut settings = Settings::default();
        let updates = ConfigUpdates {
            bar_width: Some(0),
            currency: Some("£".into()),
            ..Default::default()
        };

        assert!(updates.apply(&mut settings).unwrap_err().is_validation());
        assert_eq!(settings, Settings::default());
    }
}
