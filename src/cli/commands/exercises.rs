use crate::cli::commands::{open_gateway, refresh_cache, select_years};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::profile;
use crate::core::sync::SyncLogic;
use crate::errors::AppResult;
use crate::models::exercise::ExerciseKind;
use crate::models::profile::ExerciseProfile;
use crate::models::workout::WorkoutRecord;
use crate::store::WorkoutStore;
use crate::store::cache::RecordCache;
use crate::ui::messages::{info, warning};
use crate::utils::date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Exercises { period, top } = cmd {
        let gateway = open_gateway(cfg);
        let mut store = WorkoutStore::new();
        let cache = RecordCache::new(&cfg.cache_file);
        let events = store.subscribe();

        let years = select_years(&gateway, period)?;
        if years.is_empty() {
            info("No record files found.");
            return Ok(());
        }

        let from_cache = SyncLogic::ensure_years_or_cache(&mut store, &gateway, &cache, &years)?;

        if from_cache {
            let when = cache.last_sync().unwrap_or_else(|| "unknown".to_string());
            warning(format!(
                "Records directory unreachable; showing cached data (last sync {}).",
                when
            ));
        } else {
            refresh_cache(&gateway, &events, &cache, &mut store);
        }

        //
        // Profiles over the selected window only
        //
        let selected: Vec<WorkoutRecord> = match period_window(period)? {
            Some((start, end)) => store
                .merged()
                .iter()
                .filter(|r| r.date >= start && r.date <= end)
                .cloned()
                .collect(),
            None => store.merged().to_vec(),
        };

        let mut profiles = profile::build_profiles(&selected);
        if let Some(n) = top {
            profiles.truncate(*n);
        }

        if profiles.is_empty() {
            println!("No workouts recorded yet.");
            return Ok(());
        }

        print_profiles(&profiles);
    }

    Ok(())
}

fn period_window(
    period: &Option<String>,
) -> AppResult<Option<(chrono::NaiveDate, chrono::NaiveDate)>> {
    match period {
        Some(p) if !p.eq_ignore_ascii_case("all") => date::parse_period(p).map(Some),
        _ => Ok(None),
    }
}

fn print_profiles(profiles: &[ExerciseProfile]) {
    println!("🏋️  Exercise database ({} exercises):\n", profiles.len());

    let mut table = Table::auto(&["Exercise", "Type", "Count", "Last done", "Last session"]);
    for p in profiles {
        table.add_row(vec![
            p.name.clone(),
            p.kind.kind_as_str().to_string(),
            p.count.to_string(),
            date::relative_label(p.last_used),
            last_summary(p),
        ]);
    }

    print!("{}", table.render());
}

/// The `last_*` fields rendered the way the exercise would appear in a
/// record file, minus the name.
fn last_summary(p: &ExerciseProfile) -> String {
    match p.kind {
        ExerciseKind::Weighted => match (p.last_weight_kg, p.last_reps) {
            (Some(w), Some(r)) => match p.last_sets {
                Some(s) => format!("{}kg {} x {}", w, r, s),
                None => format!("{}kg {}", w, r),
            },
            _ => String::new(),
        },
        ExerciseKind::FloorClimb => p
            .last_floors
            .map(|f| format!("{}층", f))
            .unwrap_or_default(),
        ExerciseKind::TimedCardio => p
            .last_minutes
            .map(|m| format!("{}분", m))
            .unwrap_or_default(),
    }
}
