// src/export/logic.rs

use crate::db::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportFormat, notify_export_success};
use crate::store::{Clock, WorkHoursStore};
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Render the entries in `format`.
    pub fn render<K: KeyValueStore, C: Clock>(
        store: &WorkHoursStore<K, C>,
        format: ExportFormat,
    ) -> AppResult<String> {
        match format {
            ExportFormat::Csv => Ok(store.export_csv()),
            ExportFormat::Json => store.export_json(),
        }
    }

    /// Export the entries.
    ///
    /// - `file = None` → the document goes to stdout
    /// - `file` is a directory → a timestamped `work_hours_*` file is created in it
    /// - otherwise `file` must be an absolute path (`~/` allowed)
    pub fn export<K: KeyValueStore, C: Clock>(
        store: &WorkHoursStore<K, C>,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let Some(file) = file else {
            print!("{}", Self::render(store, format)?);
            return Ok(None);
        };

        if store.entries().is_empty() {
            warning("No entries to export.");
        }

        let mut path = expand_tilde(file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        if path.is_dir() {
            path = path.join(default_file_name(format));
        }

        ensure_writable(&path, force)?;

        info(format!(
            "Exporting to {}: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));
        write_document(&path, &Self::render(store, format)?)?;
        notify_export_success(&format.as_str().to_uppercase(), &path);

        Ok(Some(path))
    }
}

/// `work_hours_YYYY-MM-DDTHH-MM-SS.<ext>`
pub fn default_file_name(format: ExportFormat) -> String {
    let stamp = Local::now().format("%Y-%m-%dT%H-%M-%S");
    format!("work_hours_{stamp}.{}", format.as_str())
}

fn write_document(path: &Path, content: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
