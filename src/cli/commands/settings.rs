use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::SettingsLogic;
use crate::errors::AppResult;
use crate::models::{SettingsPatch, TimeFormat};

use super::open_store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        print,
        question,
        bonus_hours,
        yes_text,
        no_text,
        time_format,
    } = cmd
    {
        let time_format = time_format
            .as_deref()
            .map(str::parse::<TimeFormat>)
            .transpose()?;

        let patch = SettingsPatch {
            bonus_question_text: question.clone(),
            bonus_hours: *bonus_hours,
            yes_button_text: yes_text.clone(),
            no_button_text: no_text.clone(),
            time_format,
        };

        let mut store = open_store(cfg)?;

        if !patch.is_empty() {
            SettingsLogic::update(&mut store, &patch)?;
        }

        if *print || patch.is_empty() {
            SettingsLogic::print(store.settings());
        }
    }

    Ok(())
}
