//! Command-line interface definitions.
//!
//! Defines the CLI structure for the purchase-ledger application using
//! `clap`. Every command loads one or more CSV files into a fresh in-memory
//! ledger before acting on it.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Purchase ledger with client KPIs and sales forecasting
#[derive(Parser, Debug)]
#[command(name = "purchase-ledger")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file [default: ~/.purchase-ledger/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List purchases, newest first
    List(ListArgs),

    /// Show client KPIs and an optional sales forecast
    Report(ReportArgs),

    /// Delete every purchase of a customer
    Delete(DeleteArgs),

    /// Validate purchase files without reporting
    Check(DataArgs),
}

/// Purchase files to load.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// CSV files with customer_name, country, purchase_date and amount columns
    #[arg(long = "data", short = 'd', required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,
}

/// Arguments for the `list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Only purchases from this country (case-insensitive)
    #[arg(long)]
    pub country: Option<String>,

    /// Earliest purchase date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Latest purchase date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

/// Arguments for the `report` subcommand.
#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Number of days to forecast (omit or 0 for none)
    #[arg(long)]
    pub forecast_days: Option<u32>,
}

/// Arguments for the `delete` subcommand.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Exact customer name to delete
    pub customer_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_factory_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_name_and_version() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "purchase-ledger");
        assert!(cmd.get_version().is_some());
    }

    #[test]
    fn parse_list_with_filters() {
        let cli = Cli::try_parse_from([
            "purchase-ledger",
            "list",
            "--data",
            "a.csv",
            "b.csv",
            "--country",
            "uk",
            "--from",
            "2024-01-01",
            "--to",
            "2024-12-31",
        ])
        .unwrap();

        let Commands::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(
            args.data.files,
            vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")]
        );
        assert_eq!(args.country.as_deref(), Some("uk"));
        assert_eq!(args.from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(args.to, NaiveDate::from_ymd_opt(2024, 12, 31));
    }

    #[test]
    fn parse_report_forecast_days() {
        let cli = Cli::try_parse_from([
            "purchase-ledger",
            "report",
            "-d",
            "a.csv",
            "--forecast-days",
            "7",
        ])
        .unwrap();

        let Commands::Report(args) = cli.command else {
            panic!("expected report");
        };
        assert_eq!(args.forecast_days, Some(7));
    }

    #[test]
    fn report_without_forecast_days() {
        let cli = Cli::try_parse_from(["purchase-ledger", "report", "-d", "a.csv"]).unwrap();
        let Commands::Report(args) = cli.command else {
            panic!("expected report");
        };
        assert_eq!(args.forecast_days, None);
    }

    #[test]
    fn parse_delete_name() {
        let cli = Cli::try_parse_from([
            "purchase-ledger",
            "delete",
            "--data",
            "a.csv",
            "--",
            "Alice Person",
        ])
        .unwrap();

        let Commands::Delete(args) = cli.command else {
            panic!("expected delete");
        };
        assert_eq!(args.customer_name, "Alice Person");
    }

    #[test]
    fn data_is_required() {
        assert!(Cli::try_parse_from(["purchase-ledger", "check"]).is_err());
    }

    #[test]
    fn invalid_date_is_rejected() {
        let result = Cli::try_parse_from([
            "purchase-ledger",
            "list",
            "-d",
            "a.csv",
            "--from",
            "05/12/2024",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_color_value() {
        let result = Cli::try_parse_from(["purchase-ledger", "--color", "invalid", "check", "-d", "a"]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_subcommand() {
        assert!(Cli::try_parse_from(["purchase-ledger"]).is_err());
    }

    #[test]
    fn global_flags_after_command() {
        let cli = Cli::try_parse_from([
            "purchase-ledger",
            "check",
            "-d",
            "a.csv",
            "--json",
            "-vv",
            "--color",
            "never",
            "--config",
            "ledger.toml",
        ])
        .unwrap();

        assert!(cli.json);
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, ColorChoice::Never);
        assert_eq!(cli.config, Some(PathBuf::from("ledger.toml")));
    }
}
