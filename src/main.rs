use clap::Parser;
use tracing::info;

use luckybet::cli::{self, output, Cli, Commands};
use luckybet::config::Config;

fn main() {
    let _ = dotenvy::dotenv();

    let args = Cli::parse();
    output::configure(output::OutputConfig::new(args.json, args.quiet));

    let path = args.command.config_path();
    let mut config = match Config::load(path) {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("Failed to load card {}: {e}", path.display()));
            std::process::exit(1);
        }
    };

    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    config.init_logging();
    info!(card = %path.display(), slips = config.slips.len(), "card loaded");

    let result = match &args.command {
        Commands::Settle(settle) => cli::settle::execute(&config, settle.bettor.as_deref()),
        Commands::Check(check) => cli::check::execute(&config, &check.config),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
