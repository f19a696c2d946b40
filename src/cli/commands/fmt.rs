use crate::cli::commands::{open_gateway, refresh_cache};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sync::SyncLogic;
use crate::core::{parser, serializer};
use crate::errors::AppResult;
use crate::store::WorkoutStore;
use crate::store::cache::RecordCache;
use crate::store::gateway::{ContentGateway, year_file};
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Fmt { year, check } = cmd {
        let year = year.unwrap_or_else(|| date::today().year());
        let mut gateway = open_gateway(cfg);

        // 1. Read the year file as it is on disk
        let snapshot = gateway.fetch_file(&year_file(year))?;
        let Some(revision) = snapshot.revision else {
            info(format!("No records file for {year}."));
            return Ok(());
        };

        // 2. Round-trip through the parser to get the canonical form
        let records = parser::parse_file(&snapshot.content, year);
        let canonical = serializer::serialize_file(&records);

        if canonical == snapshot.content {
            success(format!("Records for {year} are already canonical."));
            return Ok(());
        }

        if *check {
            warning(format!("Records for {year} are not in canonical form."));
            return Ok(());
        }

        // 3. Write back, guarded by the revision we read in step 1
        let mut store = WorkoutStore::new();
        let events = store.subscribe();
        let cache = RecordCache::new(&cfg.cache_file);

        let count = records.len();
        let message = format!("Normalize records - {}", date::today().format("%Y-%m-%d"));
        SyncLogic::save_year(&mut store, &mut gateway, year, records, Some(&revision), &message)?;

        refresh_cache(&gateway, &events, &cache, &mut store);

        success(format!("Normalized records for {year} ({count} workouts)."));
    }

    Ok(())
}
