use crate::core::add::short_id;
use crate::models::{DashboardStats, Settings, WorkEntry};
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW, color_for_bonus};
use crate::utils::formatting::{hours_short, hours_signed};
use crate::utils::table::{Column, Table};

/// Dashboard rendering: stats block and entry listing.
pub struct DashboardLogic;

impl DashboardLogic {
    pub fn render_stats(stats: &DashboardStats) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{CYAN}• Total entries:{RESET}        {GREEN}{}{RESET}\n",
            stats.total_entries
        ));
        out.push_str(&format!(
            "{CYAN}• Hours worked:{RESET}         {}\n",
            hours_short(stats.total_hours_worked)
        ));
        out.push_str(&format!(
            "{CYAN}• Total with bonus:{RESET}     {}\n",
            hours_short(stats.total_hours_with_bonus)
        ));
        out.push_str(&format!(
            "{CYAN}• Today:{RESET}                {YELLOW}{}{RESET} entries, {} (bonus included)\n",
            stats.entries_today,
            hours_short(stats.hours_today)
        ));
        out
    }

    /// Entry table. Times are displayed in the user's preferred format.
    pub fn render_entries(entries: &[WorkEntry], settings: &Settings, separator: &str) -> String {
        let mut table = Table::new(vec![
            Column::left("ID"),
            Column::left("Date"),
            Column::left("Job/Client"),
            Column::left("Start"),
            Column::left("End"),
            Column::right("Worked"),
            Column::right("Bonus"),
            Column::right("Total"),
        ]);

        for e in entries {
            let bonus = if e.driving_required {
                hours_signed(e.driving_bonus_hours)
            } else {
                "-".to_string()
            };

            table.add_row(vec![
                short_id(&e.id).to_string(),
                e.date.clone(),
                e.job_client_name.clone(),
                e.start().format(settings.time_format),
                e.end().format(settings.time_format),
                hours_short(e.hours_worked),
                bonus,
                hours_short(e.total_hours),
            ]);
        }

        table.render(separator)
    }

    /// Entries for one calendar day, in list order.
    pub fn filter_by_date(entries: &[WorkEntry], date: &str) -> Vec<WorkEntry> {
        entries.iter().filter(|e| e.date == date).cloned().collect()
    }

    pub fn print_stats(stats: &DashboardStats) {
        println!("📊 Dashboard\n");
        print!("{}", Self::render_stats(stats));
    }

    pub fn print_entries(entries: &[WorkEntry], settings: &Settings, separator: &str) {
        if entries.is_empty() {
            println!("No work entries yet. Add one with `workhours add`.");
            return;
        }
        println!("Work Entries ({})\n", entries.len());
        print!("{}", Self::render_entries(entries, settings, separator));
    }

    pub fn print_bonus_line(settings: &Settings) {
        let color = color_for_bonus(settings.bonus_hours);
        println!(
            "{} {}{}{}",
            settings.bonus_question_text,
            color,
            hours_signed(settings.bonus_hours),
            RESET
        );
    }
}
