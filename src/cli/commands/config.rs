use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, path } = cmd {
        // with no flag at all, default to printing the configuration
        let show_config = *print_config || !*path;

        if show_config {
            println!("📄 Current configuration:\n");
            print!("{}", serde_yaml::to_string(cfg).unwrap());
        }

        if *path {
            println!("{}", Config::config_file().display());
        }
    }

    Ok(())
}
