//! Load and save orchestration between the store and a content gateway.

use crate::core::{parser, serializer, timeline};
use crate::errors::{AppError, AppResult};
use crate::models::workout::WorkoutRecord;
use crate::store::WorkoutStore;
use crate::store::cache::RecordCache;
use crate::store::gateway::{ContentGateway, year_file};

pub struct SyncLogic;

impl SyncLogic {
    /// Fetch and parse one year file into the store. Returns the revision
    /// the file was read at, for a later guarded write.
    pub fn load_year(
        store: &mut WorkoutStore,
        gateway: &dyn ContentGateway,
        year: i32,
    ) -> AppResult<Option<String>> {
        let snapshot = gateway.fetch_file(&year_file(year))?;
        let records = parser::parse_file(&snapshot.content, year);
        store.load_year(year, records);
        Ok(snapshot.revision)
    }

    /// Make sure the given years are loaded. When the gateway is down,
    /// fall back to the cached snapshot instead. Returns true when the
    /// data on display came from the cache.
    pub fn ensure_years_or_cache(
        store: &mut WorkoutStore,
        gateway: &dyn ContentGateway,
        cache: &RecordCache,
        years: &[i32],
    ) -> AppResult<bool> {
        for &year in years {
            if store.has_year(year) {
                continue;
            }

            match Self::load_year(store, gateway, year) {
                Ok(_) => {}
                Err(AppError::GatewayUnavailable(reason)) => {
                    // the cache holds the whole merged timeline, so one
                    // hit covers every requested year
                    let Some(snapshot) = cache.load() else {
                        return Err(AppError::GatewayUnavailable(reason));
                    };
                    for (year, records) in timeline::shard_by_year(snapshot.records) {
                        store.load_year(year, records);
                    }
                    return Ok(true);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(false)
    }

    /// Serialize and write one year's records, guarded by `revision`.
    /// The store is only updated after the write lands, so a conflict
    /// leaves it untouched.
    pub fn save_year(
        store: &mut WorkoutStore,
        gateway: &mut dyn ContentGateway,
        year: i32,
        records: Vec<WorkoutRecord>,
        revision: Option<&str>,
        message: &str,
    ) -> AppResult<String> {
        let content = serializer::serialize_file(&records);
        let new_revision = gateway.update_file(&year_file(year), &content, message, revision)?;
        store.load_year(year, records);
        Ok(new_revision)
    }
}
