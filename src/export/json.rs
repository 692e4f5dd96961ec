use crate::errors::AppResult;
use crate::models::WorkEntry;

/// Pretty-printed JSON array of entries, same shape as the stored blob.
pub fn entries_to_json(entries: &[WorkEntry]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}
