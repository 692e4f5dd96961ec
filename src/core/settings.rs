use crate::db::KeyValueStore;
use crate::errors::AppResult;
use crate::models::{Settings, SettingsPatch};
use crate::store::{Clock, WorkHoursStore};
use crate::ui::messages::{info, success};

pub struct SettingsLogic;

impl SettingsLogic {
    pub fn render(settings: &Settings) -> String {
        format!(
            "bonus_question_text: {}\n\
             bonus_hours:         {}\n\
             yes_button_text:     {}\n\
             no_button_text:      {}\n\
             time_format:         {}\n\
             updated_at:          {}\n",
            settings.bonus_question_text,
            settings.bonus_hours,
            settings.yes_button_text,
            settings.no_button_text,
            settings.time_format,
            settings.updated_at,
        )
    }

    pub fn print(settings: &Settings) {
        println!("🎛️  Bonus question settings:\n");
        print!("{}", Self::render(settings));
    }

    /// Apply a settings patch. Already saved entries keep their bonus.
    pub fn update<K: KeyValueStore, C: Clock>(
        store: &mut WorkHoursStore<K, C>,
        patch: &SettingsPatch,
    ) -> AppResult<()> {
        if patch.is_empty() {
            info("No settings changed.");
            return Ok(());
        }

        store.update_settings(patch)?;
        success("Settings saved successfully!");
        if patch.bonus_hours.is_some() {
            info("The new bonus applies to entries saved or edited from now on.");
        }
        Ok(())
    }
}
