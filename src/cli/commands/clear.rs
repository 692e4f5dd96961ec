use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

use super::{ask_confirmation, open_store};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let mut store = open_store(cfg)?;

        if cfg.confirm_destructive
            && !*yes
            && !ask_confirmation(
                "Are you sure you want to delete all work entries? This action cannot be undone.",
            )
        {
            info("Operation cancelled.");
            return Ok(());
        }

        DeleteLogic::clear_all(&mut store)?;
        success("All data cleared successfully");
    }

    Ok(())
}
