//! CLI command for loan amortization schedules

use clap::Args;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use super::{read_amount, OutputFormat};
use crate::config::Settings;
use crate::display::{format_schedule_summary, format_schedule_table};
use crate::engines::{build_schedule, schedule_totals};
use crate::error::FincalcResult;
use crate::export::{export_schedule_csv, export_schedule_json};
use crate::models::{LoanTerm, Strictness};

/// Arguments for the `loan` subcommand
#[derive(Args, Debug)]
pub struct LoanArgs {
    /// Principal amount
    pub principal: String,

    /// Nominal annual interest rate in percent (0 for an interest-free loan)
    pub rate: String,

    /// Term in months
    pub months: u32,

    /// Write the schedule to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format on stdout
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Handle the `loan` subcommand
pub fn handle_loan_command(
    settings: &Settings,
    strictness: Strictness,
    args: LoanArgs,
) -> FincalcResult<()> {
    let principal = read_amount("principal", &args.principal, strictness)?;
    let rate = read_amount("annual rate", &args.rate, strictness)?;
    let term = LoanTerm::new(principal, rate, args.months);

    let rows = build_schedule(&term)?;
    let totals = schedule_totals(&rows);
    let digits = settings.fraction_digits;

    match args.format {
        OutputFormat::Table => {
            print!("{}", format_schedule_summary(&rows, &totals, digits));
            print!("{}", format_schedule_table(&rows, digits));
        }
        OutputFormat::Json => {
            export_schedule_json(&rows, &totals, std::io::stdout().lock())?;
            println!();
        }
    }

    if let Some(path) = args.output {
        let file = File::create(&path)?;
        export_schedule_csv(&rows, digits, BufWriter::new(file))?;
        eprintln!("Schedule written to {}", path.display());
    }

    Ok(())
}
