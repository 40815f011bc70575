//! Budget CLI commands
//!
//! Implements setting budget ceilings and the budget overview.

use clap::Subcommand;
use tracing::info;

use crate::config::Settings;
use crate::display::format_budget_overview;
use crate::error::LedgerResult;
use crate::models::Category;
use crate::services::{alerts, parse_category};
use crate::storage::Storage;

use super::expense::parse_amount;
use super::{load_for_view, load_strict, print_notice, save};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show budget, spent and remaining for every category
    Show,

    /// Set the budget for one category (0 removes the limit)
    Set {
        /// Category name (Food, Transport, Shopping, Other)
        category: String,
        /// Budget amount (e.g., "100" or "100.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Set the budget for every category at once
    SetAll {
        /// Food budget
        food: String,
        /// Transport budget
        transport: String,
        /// Shopping budget
        shopping: String,
        /// Other budget
        other: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> LedgerResult<()> {
    match cmd {
        BudgetCommands::Show => {
            let store = load_for_view(storage);
            let statuses = alerts::evaluate_all(store.state());
            print!("{}", format_budget_overview(&statuses, settings));
        }

        BudgetCommands::Set { category, amount } => {
            let category = parse_category(&category)?;
            let ceiling = parse_amount(&amount)?;

            let mut store = load_strict(storage)?;
            store.set_budget(category, ceiling)?;
            info!(%category, ceiling, "budget updated");

            if ceiling > 0.0 {
                println!(
                    "Budget for {} set to {}.",
                    category,
                    settings.format_amount(ceiling)
                );
            } else {
                println!("Budget limit for {} removed.", category);
            }

            save(storage, &store)?;
            if settings.notify {
                if let Some(notice) = alerts::should_notify(store.state(), category) {
                    print_notice(&notice);
                }
            }
        }

        BudgetCommands::SetAll {
            food,
            transport,
            shopping,
            other,
        } => {
            let ceilings = [
                (Category::Food, parse_amount(&food)?),
                (Category::Transport, parse_amount(&transport)?),
                (Category::Shopping, parse_amount(&shopping)?),
                (Category::Other, parse_amount(&other)?),
            ];

            let mut store = load_strict(storage)?;
            store.set_budgets(&ceilings)?;
            info!("all budgets updated");
            println!("Budgets saved.");

            save(storage, &store)?;
            if settings.notify {
                for (category, _) in ceilings {
                    if let Some(notice) = alerts::should_notify(store.state(), category) {
                        print_notice(&notice);
                    }
                }
            }
        }
    }

    Ok(())
}
