use crate::cli::commands::{open_gateway, refresh_cache};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sync::SyncLogic;
use crate::core::timeline;
use crate::errors::{AppError, AppResult};
use crate::store::WorkoutStore;
use crate::store::cache::RecordCache;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use chrono::Datelike;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date: date_str } = cmd {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

        let mut gateway = open_gateway(cfg);
        let mut store = WorkoutStore::new();
        let cache = RecordCache::new(&cfg.cache_file);
        let events = store.subscribe();

        let year = d.year();
        let revision = SyncLogic::load_year(&mut store, &gateway, year)?;

        let count = store.year(year).iter().filter(|r| r.date == d).count();
        if count == 0 {
            info(format!("No workouts found for {}.", d));
            return Ok(());
        }

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete {} workout(s) for {}? This action is irreversible.",
            count, d
        );
        if !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let mut records = store.year(year).to_vec();
        let removed = timeline::remove_date(&mut records, d);

        let message = format!("Delete workout - {}", d.format("%Y-%m-%d"));
        SyncLogic::save_year(
            &mut store,
            &mut gateway,
            year,
            records,
            revision.as_deref(),
            &message,
        )?;

        refresh_cache(&gateway, &events, &cache, &mut store);

        success(format!("Deleted {} workout(s) for {}.", removed, d));
    }

    Ok(())
}
