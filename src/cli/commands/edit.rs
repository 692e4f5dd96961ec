use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::models::EntryPatch;
use crate::utils::time::normalize_cli_time;

use super::open_store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        client,
        date,
        start,
        end,
        driving,
        no_driving,
    } = cmd
    {
        let driving_required = if *driving {
            Some(true)
        } else if *no_driving {
            Some(false)
        } else {
            None
        };

        let patch = EntryPatch {
            date: date.clone(),
            job_client_name: client.clone(),
            start_time: start.as_deref().map(normalize_cli_time),
            end_time: end.as_deref().map(normalize_cli_time),
            driving_required,
        };

        let mut store = open_store(cfg)?;
        EditLogic::apply(&mut store, id, &patch)?;
    }

    Ok(())
}
