use crate::config::Config;
use crate::core::dashboard::DashboardLogic;
use crate::errors::AppResult;

use super::open_store;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    DashboardLogic::print_stats(store.stats());
    println!();
    DashboardLogic::print_bonus_line(store.settings());
    Ok(())
}
