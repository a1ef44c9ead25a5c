//! CLI command for VAT calculations

use clap::Args;

use super::{read_amount, OutputFormat};
use crate::config::Settings;
use crate::display::format_vat_breakdown;
use crate::engines::{add_vat, extract_vat};
use crate::error::FincalcResult;
use crate::models::Strictness;

/// Arguments for the `vat` subcommand
#[derive(Args, Debug)]
pub struct VatArgs {
    /// Amount to apply VAT to (net by default, gross with --inclusive)
    pub amount: String,

    /// VAT rate in percent (defaults to the configured rate)
    #[arg(short, long)]
    pub rate: Option<String>,

    /// Treat the amount as VAT-inclusive and extract the tax from it
    #[arg(long)]
    pub inclusive: bool,

    /// Output format on stdout
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Handle the `vat` subcommand
pub fn handle_vat_command(
    settings: &Settings,
    strictness: Strictness,
    args: VatArgs,
) -> FincalcResult<()> {
    let amount = read_amount("amount", &args.amount, strictness)?;
    let rate = match &args.rate {
        Some(text) => read_amount("VAT rate", text, strictness)?,
        None => settings.default_vat_rate_pct,
    };

    let breakdown = if args.inclusive {
        extract_vat(amount, rate)
    } else {
        add_vat(amount, rate)
    };

    match args.format {
        OutputFormat::Table => print!("{}", format_vat_breakdown(&breakdown, settings.fraction_digits)),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(std::io::stdout().lock(), &breakdown)?;
            println!();
        }
    }

    Ok(())
}
