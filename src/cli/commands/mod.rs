pub mod add;
pub mod clear;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod settings;
pub mod stats;

use crate::config::Config;
use crate::db::SqliteKv;
use crate::errors::AppResult;
use crate::store::WorkHoursStore;
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Open the store on the configured database, reporting any data that had
/// to be reset while loading.
pub(crate) fn open_store(cfg: &Config) -> AppResult<WorkHoursStore<SqliteKv>> {
    let kv = SqliteKv::open(&cfg.database)?;
    let store = WorkHoursStore::open(kv)?;
    for w in store.load_warnings() {
        warning(w);
    }
    Ok(store)
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
