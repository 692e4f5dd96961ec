//! Formatting utilities used for CLI and export outputs.

/// Dashboard style: one decimal and an `h` suffix (`8.5h`).
pub fn hours_short(hours: f64) -> String {
    format!("{:.1}h", hours)
}

/// Signed variant used for bonus figures (`+2.0h`, `-0.5h`).
pub fn hours_signed(hours: f64) -> String {
    if hours < 0.0 {
        format!("{:.1}h", hours)
    } else {
        format!("+{:.1}h", hours)
    }
}
