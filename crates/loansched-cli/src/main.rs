mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::loan::{CalculateArgs, ExportArgs};

/// Loan repayment calculations and schedule export
#[derive(Parser)]
#[command(
    name = "loansched",
    version,
    about = "Loan repayment calculations and schedule export",
    long_about = "Computes loan repayment figures using the flat-rate or \
                  reducing-balance method, prints the amortization schedule, \
                  and exports it to CSV or XLSX."
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
    /// Compute installment, total interest, and the amortization schedule
    Calculate(CalculateArgs),
    /// Compute and write the schedule to schedule.csv / schedule.xlsx
    Export(ExportArgs),
    /// Print the one-line result summary (share payload)
    Summary(CalculateArgs),
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
        Commands::Calculate(args) => commands::loan::run_calculate(args),
        Commands::Export(args) => commands::loan::run_export(args),
        Commands::Summary(args) => match commands::loan::run_summary(args) {
            Ok(summary) => {
                println!("{}", summary);
                return;
            }
            Err(e) => Err(e),
        },
        Commands::Version => {
            println!("loansched {}", env!("CARGO_PKG_VERSION"));
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
