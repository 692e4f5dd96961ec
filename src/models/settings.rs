use crate::errors::{AppError, AppResult};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display preference for times. Stored values are always 24-hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "12h")]
    H12,
    #[serde(rename = "24h")]
    H24,
}

impl TimeFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFormat::H12 => "12h",
            TimeFormat::H24 => "24h",
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeFormat {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "12h" | "12" => Ok(TimeFormat::H12),
            "24h" | "24" => Ok(TimeFormat::H24),
            other => Err(AppError::InvalidTimeFormat(other.to_string())),
        }
    }
}

fn default_question() -> String {
    "Driving Required?".to_string()
}
fn default_bonus_hours() -> f64 {
    2.0
}
fn default_yes_text() -> String {
    "Yes (+2h)".to_string()
}
fn default_no_text() -> String {
    "No".to_string()
}

/// Process-wide bonus configuration (exactly one instance per store).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub id: String,
    #[serde(default = "default_question")]
    pub bonus_question_text: String,
    /// May be zero or negative.
    #[serde(default = "default_bonus_hours")]
    pub bonus_hours: f64,
    #[serde(default = "default_yes_text")]
    pub yes_button_text: String,
    #[serde(default = "default_no_text")]
    pub no_button_text: String,
    #[serde(default)]
    pub time_format: TimeFormat,
    pub updated_at: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            id: crate::store::generate_id(),
            bonus_question_text: default_question(),
            bonus_hours: default_bonus_hours(),
            yes_button_text: default_yes_text(),
            no_button_text: default_no_text(),
            time_format: TimeFormat::default(),
            updated_at: Local::now().to_rfc3339(),
        }
    }
}

/// Partial settings update. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch {
    pub bonus_question_text: Option<String>,
    pub bonus_hours: Option<f64>,
    pub yes_button_text: Option<String>,
    pub no_button_text: Option<String>,
    pub time_format: Option<TimeFormat>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        *self == SettingsPatch::default()
    }

    /// Reject values that could not be stored as JSON numbers.
    pub fn validate(&self) -> AppResult<()> {
        match self.bonus_hours {
            Some(h) if !h.is_finite() => Err(AppError::InvalidBonusHours(h.to_string())),
            _ => Ok(()),
        }
    }
}

/// Parse a bonus hours value, refusing `NaN` and infinities.
pub fn parse_bonus_hours(s: &str) -> AppResult<f64> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidBonusHours(s.to_string()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AppError::InvalidBonusHours(s.to_string()))
    }
}

impl Settings {
    /// Merge a patch in place and stamp `updated_at`. Text fields are trimmed.
    pub fn apply(&mut self, patch: &SettingsPatch, updated_at: String) {
        if let Some(q) = &patch.bonus_question_text {
            self.bonus_question_text = q.trim().to_string();
        }
        if let Some(h) = patch.bonus_hours {
            self.bonus_hours = h;
        }
        if let Some(y) = &patch.yes_button_text {
            self.yes_button_text = y.trim().to_string();
        }
        if let Some(n) = &patch.no_button_text {
            self.no_button_text = n.trim().to_string();
        }
        if let Some(f) = patch.time_format {
            self.time_format = f;
        }
        self.updated_at = updated_at;
    }
}
