//! CLI command for inventory costing runs
//!
//! Reads `KIND;QUANTITY;PRICE` transaction lines from a file or stdin and
//! runs the costing engine under the selected policy.

use clap::{Args, ValueEnum};
use std::io::Read;
use std::path::PathBuf;

use super::OutputFormat;
use crate::config::Settings;
use crate::display::{format_costing_summary, format_transactions_table};
use crate::engines::{parse_transactions, run_costing};
use crate::error::FincalcResult;
use crate::export::export_costing_json;
use crate::models::{CostingPolicy, Strictness};

/// Costing policy as a command-line value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PolicyArg {
    /// First in, first out
    #[default]
    Fifo,
    /// Last in, first out
    Lifo,
    /// Weighted average cost
    Average,
}

impl From<PolicyArg> for CostingPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Fifo => CostingPolicy::Fifo,
            PolicyArg::Lifo => CostingPolicy::Lifo,
            PolicyArg::Average => CostingPolicy::WeightedAverage,
        }
    }
}

/// Arguments for the `inventory` subcommand
#[derive(Args, Debug)]
pub struct InventoryArgs {
    /// Costing policy for the run
    #[arg(short, long, value_enum, default_value = "fifo")]
    pub policy: PolicyArg,

    /// Read transaction lines from this file (stdin when omitted)
    #[arg(short = 'i', long)]
    pub file: Option<PathBuf>,

    /// Output format on stdout
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Handle the `inventory` subcommand
pub fn handle_inventory_command(
    settings: &Settings,
    strictness: Strictness,
    args: InventoryArgs,
) -> FincalcResult<()> {
    let raw = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let policy: CostingPolicy = args.policy.into();
    let transactions = parse_transactions(&raw, strictness)?;
    let result = run_costing(&transactions, policy, strictness)?;
    let digits = settings.fraction_digits;

    match args.format {
        OutputFormat::Table => {
            println!("Costing policy: {}", policy);
            print!("{}", format_transactions_table(&transactions, digits));
            println!();
            print!("{}", format_costing_summary(&result, digits));
        }
        OutputFormat::Json => {
            export_costing_json(&result, std::io::stdout().lock())?;
            println!();
        }
    }

    Ok(())
}
