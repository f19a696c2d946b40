use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::journal::JournalLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        JournalLogic::print_journal(cfg)?;
    }

    Ok(())
}
