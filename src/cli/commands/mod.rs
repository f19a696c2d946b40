pub mod add;
pub mod config;
pub mod del;
pub mod exercises;
pub mod export;
pub mod fmt;
pub mod init;
pub mod list;
pub mod log;

use crate::core::sync::SyncLogic;
use crate::errors::{AppError, AppResult};
use crate::store::cache::RecordCache;
use crate::store::local::DirGateway;
use crate::store::{StoreEvent, WorkoutStore};
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::Datelike;
use std::sync::mpsc::Receiver;

/// Gateway for the configured records directory, journal attached.
pub(crate) fn open_gateway(cfg: &crate::config::Config) -> DirGateway {
    DirGateway::new(cfg.resolved_records_dir()).with_journal(&cfg.journal_file)
}

/// Years to load for an optional --period / --range selection.
///
/// No period (or "all") means every record file in the directory; when
/// the directory is unreachable, the current year is returned as a probe
/// so the cache fallback downstream gets a chance to run.
pub(crate) fn select_years(gateway: &DirGateway, period: &Option<String>) -> AppResult<Vec<i32>> {
    match period {
        Some(p) if !p.eq_ignore_ascii_case("all") => {
            let (start, end) = date::parse_period(p)?;
            Ok((start.year()..=end.year()).collect())
        }
        _ => match gateway.list_years() {
            Ok(years) => Ok(years),
            Err(AppError::GatewayUnavailable(_)) => Ok(vec![date::today().year()]),
            Err(e) => Err(e),
        },
    }
}

/// Rewrite the cache snapshot if the store changed during this command.
/// Years the command did not touch are pulled in first so the snapshot
/// stays complete. Best-effort: failures only warn.
pub(crate) fn refresh_cache(
    gateway: &DirGateway,
    events: &Receiver<StoreEvent>,
    cache: &RecordCache,
    store: &mut WorkoutStore,
) {
    if events.try_iter().next().is_none() {
        return;
    }

    if let Ok(years) = gateway.list_years() {
        for year in years {
            if !store.has_year(year) && SyncLogic::load_year(store, gateway, year).is_err() {
                return;
            }
        }
    }

    if let Err(e) = cache.save(store.merged()) {
        warning(format!("Failed to refresh cache: {}", e));
    }
}
