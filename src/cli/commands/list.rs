use crate::cli::commands::{open_gateway, refresh_cache, select_years};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sync::SyncLogic;
use crate::core::{serializer, timeline};
use crate::errors::AppResult;
use crate::models::workout::WorkoutRecord;
use crate::store::WorkoutStore;
use crate::store::cache::RecordCache;
use crate::store::local::DirGateway;
use crate::ui::messages::{info, month_header, warning};
use crate::utils::date;
use crate::utils::formatting::{bold, dim};
use chrono::{Datelike, NaiveDate};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, now } = cmd {
        let gateway = open_gateway(cfg);
        let mut store = WorkoutStore::new();
        let cache = RecordCache::new(&cfg.cache_file);
        let events = store.subscribe();

        let (years, window) = resolve_selection(period, *now, &gateway)?;
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

        let filtered: Vec<&WorkoutRecord> = store
            .merged()
            .iter()
            .filter(|r| window.is_none_or(|(start, end)| r.date >= start && r.date <= end))
            .collect();

        if filtered.is_empty() {
            match window {
                Some((start, end)) if start == end => println!("No workouts for {}.", start),
                Some((start, end)) => println!("No workouts between {} and {}.", start, end),
                None => println!("No workouts recorded yet."),
            }
            return Ok(());
        }

        print_timeline(&filtered, cfg);
    }

    Ok(())
}

/// Years to load plus the optional date window to display.
/// An empty years list means there is nothing to show at all.
fn resolve_selection(
    period: &Option<String>,
    now: bool,
    gateway: &DirGateway,
) -> AppResult<(Vec<i32>, Option<(NaiveDate, NaiveDate)>)> {
    if now {
        let t = date::today();
        return Ok((vec![t.year()], Some((t, t))));
    }

    if let Some(p) = period {
        if p.eq_ignore_ascii_case("all") {
            return Ok((select_years(gateway, period)?, None));
        }
        let (start, end) = date::parse_period(p)?;
        return Ok(((start.year()..=end.year()).collect(), Some((start, end))));
    }

    // default: current month
    let t = date::today();
    let (start, end) = date::parse_period(&format!("{}-{:02}", t.year(), t.month()))?;
    Ok((vec![t.year()], Some((start, end))))
}

fn print_timeline(records: &[&WorkoutRecord], cfg: &Config) {
    for ((year, month), group) in timeline::group_by_month(records.iter().copied()) {
        month_header(format!("{}월 {}", month, year));
        println!();

        for rec in group {
            let when = if cfg.show_weekday {
                date::weekday_label(rec.date)
            } else {
                date::relative_label(rec.date)
            };
            println!("{}  {}", bold(&rec.label), dim(&when));

            for entry in &rec.exercises {
                println!("  {}", serializer::serialize_exercise(entry));
            }
            println!();
        }
    }
}
