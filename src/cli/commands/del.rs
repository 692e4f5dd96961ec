use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

use super::{ask_confirmation, open_store};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut store = open_store(cfg)?;
        let full_id = store.resolve_id(id)?;

        if cfg.confirm_destructive && !*yes {
            // resolve_id guarantees the entry exists
            let prompt = match store.find(&full_id) {
                Some(e) => format!("Delete work entry for {} on {}?", e.job_client_name, e.date),
                None => format!("Delete work entry {}?", full_id),
            };
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let removed = DeleteLogic::delete_one(&mut store, &full_id)?;
        success(format!(
            "Entry for {} on {} has been deleted.",
            removed.job_client_name, removed.date
        ));
    }

    Ok(())
}
