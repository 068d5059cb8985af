use clap::Parser;
use tracing::debug;

use purchase_ledger::adapter::inbound::cli::command::{Cli, ColorChoice, Commands};
use purchase_ledger::adapter::inbound::cli::output::{self, OutputConfig};
use purchase_ledger::adapter::inbound::cli::{check, delete, list, paths, report};
use purchase_ledger::error::Result;
use purchase_ledger::infrastructure::bootstrap::Services;
use purchase_ledger::infrastructure::config::settings::Config;

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    if let Err(e) = run(&cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(paths::default_config())?,
    };
    match cli.verbose {
        0 => {}
        1 => config.logging.level = "debug".to_string(),
        _ => config.logging.level = "trace".to_string(),
    }
    config.init_logging();
    debug!(command = ?cli.command, "purchase-ledger starting");

    let services = Services::in_memory(&config);
    match &cli.command {
        Commands::List(args) => list::execute(&services.ledger, args),
        Commands::Report(args) => report::execute(&services.ledger, &services.analytics, args),
        Commands::Delete(args) => delete::execute(&services.ledger, args),
        Commands::Check(args) => check::execute(&services.ledger, args),
    }
}
