// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::flatten_records;
use crate::models::workout::WorkoutRecord;
use crate::ui::messages::warning;
use crate::utils::date::parse_period;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export workout records, one row per exercise.
    ///
    /// - `records`: merged timeline, newest first; exported oldest first
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or an expression like:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    pub fn export(
        records: &[WorkoutRecord],
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let mut selected: Vec<WorkoutRecord> = match range {
            None => records.to_vec(),
            Some(r) if r.eq_ignore_ascii_case("all") => records.to_vec(),
            Some(r) => {
                let (start, end) = parse_period(r)?;
                records
                    .iter()
                    .filter(|rec| rec.date >= start && rec.date <= end)
                    .cloned()
                    .collect()
            }
        };

        // oldest first reads better in a spreadsheet
        selected.reverse();

        let rows = flatten_records(&selected);

        if rows.is_empty() {
            warning("No workouts found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}
