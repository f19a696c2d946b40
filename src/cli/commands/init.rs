use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the records directory
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing gymlog…");

    let records_dir = Config::init_all(cli.records_dir.clone(), cli.test)?;

    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("📁 Records dir : {}", records_dir.display());

    println!("🎉 gymlog initialization completed!");
    Ok(())
}
