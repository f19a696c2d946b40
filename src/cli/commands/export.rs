use crate::cli::commands::{open_gateway, refresh_cache, select_years};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sync::SyncLogic;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::WorkoutStore;
use crate::store::cache::RecordCache;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let gateway = open_gateway(cfg);
        let mut store = WorkoutStore::new();
        let cache = RecordCache::new(&cfg.cache_file);
        let events = store.subscribe();

        let years = select_years(&gateway, range)?;
        let from_cache = SyncLogic::ensure_years_or_cache(&mut store, &gateway, &cache, &years)?;

        if from_cache {
            warning("Records directory unreachable; exporting cached data.");
        } else {
            refresh_cache(&gateway, &events, &cache, &mut store);
        }

        ExportLogic::export(store.merged(), format.clone(), file, range, *force)?;
    }

    Ok(())
}
