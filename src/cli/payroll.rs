//! CLI command for gross-to-net payroll breakdowns

use clap::Args;

use super::{read_amount, OutputFormat};
use crate::config::Settings;
use crate::display::format_payroll;
use crate::engines::payroll;
use crate::error::FincalcResult;
use crate::models::Strictness;

/// Arguments for the `payroll` subcommand
#[derive(Args, Debug)]
pub struct PayrollArgs {
    /// Gross salary
    pub gross: String,

    /// Employee social security rate in percent
    #[arg(long, default_value = "14")]
    pub ss_rate: String,

    /// Income tax rate in percent, applied after social security
    #[arg(long, default_value = "15")]
    pub income_tax_rate: String,

    /// Stamp tax rate in percent, applied to gross
    #[arg(long, default_value = "0.759")]
    pub stamp_rate: String,

    /// Output format on stdout
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Handle the `payroll` subcommand
pub fn handle_payroll_command(
    settings: &Settings,
    strictness: Strictness,
    args: PayrollArgs,
) -> FincalcResult<()> {
    let gross = read_amount("gross salary", &args.gross, strictness)?;
    let ss_rate = read_amount("social security rate", &args.ss_rate, strictness)?;
    let income_tax_rate = read_amount("income tax rate", &args.income_tax_rate, strictness)?;
    let stamp_rate = read_amount("stamp tax rate", &args.stamp_rate, strictness)?;

    let result = payroll(gross, ss_rate, income_tax_rate, stamp_rate);

    match args.format {
        OutputFormat::Table => print!("{}", format_payroll(&result, settings.fraction_digits)),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(std::io::stdout().lock(), &result)?;
            println!();
        }
    }

    Ok(())
}
