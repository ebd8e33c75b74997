mod commands;
mod input;
mod output;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::property_roi::CalArgs;
use output::labels::Locale;

/// Property investment amortization and return-on-investment reports
#[derive(Parser)]
#[command(
    name = "roi",
    version,
    about = "Property investment amortization and ROI",
    long_about = "Computes a flat-principal mortgage amortization schedule over the \
                  holding period of a rental property, then reports total interest \
                  and the annualized rental, appreciation and combined ROI."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    output: OutputFormat,

    /// Language of report labels
    #[arg(long, default_value = "zh-tw", global = true)]
    locale: Locale,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the amortization schedule and annualized ROI
    Cal(CalArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Minimal,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::InvalidSubcommand
            | ErrorKind::UnknownArgument
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => print_help_and_exit(),
            _ => e.exit(),
        },
    };

    let Some(command) = cli.command else {
        print_help_and_exit();
    };

    let result = match command {
        Commands::Cal(args) => commands::property_roi::run_cal(args),
        Commands::Version => {
            println!("roi {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(report) => {
            output::format_output(&cli.output, cli.locale, &report);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}

fn print_help_and_exit() -> ! {
    let _ = Cli::command().print_help();
    println!();
    process::exit(0);
}
