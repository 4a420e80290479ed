mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::design::{DesignArgs, ScoreArgs};
use commands::market::MarketArgs;

/// Synthetic corporate bond term estimation
#[derive(Parser)]
#[command(
    name = "bde",
    version,
    about = "Estimate corporate bond terms from company financials",
    long_about = "Estimates synthetic corporate bond terms — credit rating, coupon, \
                  maturity, issue price, covenants, risk level — from a small set of \
                  company financial inputs, with decimal precision. Inputs come from \
                  flags, a JSON/YAML file, or piped JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate full bond terms for a company
    Design(DesignArgs),
    /// Show the credit score, rating, and the factors behind them
    Score(ScoreArgs),
    /// Show market-context rates and the implied benchmark
    Market(MarketArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Design(args) => commands::design::run_design(args),
        Commands::Score(args) => commands::design::run_score(args),
        Commands::Market(args) => commands::market::run_market(args),
        Commands::Version => {
            println!("bde {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
