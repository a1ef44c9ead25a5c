//! CLI command for depreciation schedules

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use super::{read_amount, OutputFormat};
use crate::config::Settings;
use crate::display::format_depreciation_table;
use crate::engines::build_depreciation_schedule;
use crate::error::FincalcResult;
use crate::export::{export_depreciation_csv, export_depreciation_json};
use crate::models::{DepreciationMethod, Strictness};

/// Depreciation method as a command-line value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MethodArg {
    /// Equal charge every year
    #[default]
    StraightLine,
    /// Double-declining balance
    DecliningBalance,
}

impl From<MethodArg> for DepreciationMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::StraightLine => DepreciationMethod::StraightLine,
            MethodArg::DecliningBalance => DepreciationMethod::DecliningBalance,
        }
    }
}

/// Arguments for the `depreciation` subcommand
#[derive(Args, Debug)]
pub struct DepreciationArgs {
    /// Acquisition cost of the asset
    pub cost: String,

    /// Salvage value at end of life
    pub salvage: String,

    /// Useful life in years
    pub life: u32,

    /// Depreciation method
    #[arg(short, long, value_enum, default_value = "straight-line")]
    pub method: MethodArg,

    /// Write the schedule to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format on stdout
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Handle the `depreciation` subcommand
pub fn handle_depreciation_command(
    settings: &Settings,
    strictness: Strictness,
    args: DepreciationArgs,
) -> FincalcResult<()> {
    let cost = read_amount("cost", &args.cost, strictness)?;
    let salvage = read_amount("salvage", &args.salvage, strictness)?;

    let rows = build_depreciation_schedule(cost, salvage, args.life, args.method.into())?;
    let digits = settings.fraction_digits;

    match args.format {
        OutputFormat::Table => print!("{}", format_depreciation_table(&rows, digits)),
        OutputFormat::Json => {
            export_depreciation_json(&rows, std::io::stdout().lock())?;
            println!();
        }
    }

    if let Some(path) = args.output {
        let file = File::create(&path)?;
        export_depreciation_csv(&rows, digits, BufWriter::new(file))?;
        eprintln!("Schedule written to {}", path.display());
    }

    Ok(())
}
