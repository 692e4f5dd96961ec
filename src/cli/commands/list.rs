use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::DashboardLogic;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

use super::open_store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { today, date: day } = cmd {
        let store = open_store(cfg)?;

        let filter = if *today {
            Some(date::today_str())
        } else if let Some(d) = day {
            let parsed = date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
            Some(parsed.format("%Y-%m-%d").to_string())
        } else {
            None
        };

        match filter {
            Some(d) => {
                let entries = DashboardLogic::filter_by_date(store.entries(), &d);
                DashboardLogic::print_entries(&entries, store.settings(), &cfg.separator_char);
            }
            None => {
                DashboardLogic::print_entries(
                    store.entries(),
                    store.settings(),
                    &cfg.separator_char,
                );
            }
        }
    }
    Ok(())
}
