use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::calculator::aggregate::build_entry;
use crate::errors::AppResult;
use crate::models::{EntryDraft, TimeOfDay};
use crate::utils::date;
use crate::utils::formatting::{hours_short, hours_signed};
use crate::utils::time::normalize_cli_time;

use super::open_store;

/// Save a new work entry (or preview its hours).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        client,
        start,
        end,
        date: date_arg,
        driving,
        preview,
    } = cmd
    {
        let draft = EntryDraft {
            date: date_arg.clone().unwrap_or_else(date::today_str),
            job_client_name: client.clone(),
            start_time: normalize_cli_time(start),
            end_time: normalize_cli_time(end),
            driving_required: *driving,
        };

        let mut store = open_store(cfg)?;

        if *preview {
            let settings = store.settings();
            let derived = build_entry(&draft, settings.bonus_hours);
            let fmt = settings.time_format;

            println!(
                "{} - {}",
                TimeOfDay::parse_lenient(&draft.start_time).format(fmt),
                TimeOfDay::parse_lenient(&draft.end_time).format(fmt)
            );
            println!("Hours Worked: {}", hours_short(derived.hours_worked));
            if draft.driving_required {
                println!("Bonus Hours:  {}", hours_signed(derived.driving_bonus_hours));
            }
            println!("Total Hours:  {}", hours_short(derived.total_hours));
            return Ok(());
        }

        AddLogic::apply(&mut store, draft)?;
    }

    Ok(())
}
