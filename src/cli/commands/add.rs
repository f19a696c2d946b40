use crate::cli::commands::{open_gateway, refresh_cache};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::parser::parse_exercise_line;
use crate::core::sync::SyncLogic;
use crate::core::timeline;
use crate::errors::{AppError, AppResult};
use crate::models::workout::WorkoutRecord;
use crate::store::WorkoutStore;
use crate::store::cache::RecordCache;
use crate::store::local::DirGateway;
use crate::ui::messages::success;
use crate::utils::date;
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_str,
        exercises,
        copy_last,
    } = cmd
    {
        let d = if date_str.eq_ignore_ascii_case("today") {
            date::today()
        } else {
            date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?
        };

        let mut gateway = open_gateway(cfg);
        let mut store = WorkoutStore::new();
        let cache = RecordCache::new(&cfg.cache_file);
        let events = store.subscribe();

        //
        // 1. Read the year file and remember its revision
        //
        let year = d.year();
        let revision = SyncLogic::load_year(&mut store, &gateway, year)?;

        //
        // 2. Build the new record
        //
        let workout = if *copy_last {
            latest_workout(&mut store, &gateway)?.redated(d)
        } else {
            let mut entries = Vec::new();
            for line in exercises {
                let entry = parse_exercise_line(line)
                    .ok_or_else(|| AppError::InvalidExercise(line.clone()))?;
                entries.push(entry);
            }
            if entries.is_empty() {
                return Err(AppError::InvalidExercise(
                    "at least one exercise line is required".into(),
                ));
            }
            WorkoutRecord::new(d, entries)
        };
        let exercise_count = workout.exercises.len();

        //
        // 3. Insert and write back, guarded by the revision from step 1
        //
        let mut records = store.year(year).to_vec();
        timeline::insert_sorted(&mut records, workout);

        let message = format!("{} - {}", cfg.commit_prefix, d.format("%Y-%m-%d"));
        SyncLogic::save_year(
            &mut store,
            &mut gateway,
            year,
            records,
            revision.as_deref(),
            &message,
        )?;

        refresh_cache(&gateway, &events, &cache, &mut store);

        success(format!("Added workout for {} ({} exercises).", d, exercise_count));
    }

    Ok(())
}

/// The most recent workout on record, loading older year files until one
/// turns up.
fn latest_workout(store: &mut WorkoutStore, gateway: &DirGateway) -> AppResult<WorkoutRecord> {
    if store.latest().is_none() {
        for year in gateway.list_years()?.into_iter().rev() {
            if !store.has_year(year) {
                SyncLogic::load_year(store, gateway, year)?;
            }
            if store.latest().is_some() {
                break;
            }
        }
    }

    store
        .latest()
        .cloned()
        .ok_or_else(|| AppError::NoWorkouts("to copy".into()))
}
