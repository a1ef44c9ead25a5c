//! CLI command for break-even analysis

use clap::Args;

use super::{read_amount, OutputFormat};
use crate::config::Settings;
use crate::display::format_break_even;
use crate::engines::break_even;
use crate::error::FincalcResult;
use crate::models::Strictness;

/// Arguments for the `breakeven` subcommand
#[derive(Args, Debug)]
pub struct BreakEvenArgs {
    /// Unit sale price
    pub price: String,

    /// Variable cost per unit
    pub variable_cost: String,

    /// Total fixed costs for the period
    pub fixed_costs: String,

    /// Target profit on top of break-even
    #[arg(short, long, default_value = "0")]
    pub target_profit: String,

    /// Output format on stdout
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Handle the `breakeven` subcommand
pub fn handle_breakeven_command(
    settings: &Settings,
    strictness: Strictness,
    args: BreakEvenArgs,
) -> FincalcResult<()> {
    let price = read_amount("price", &args.price, strictness)?;
    let variable_cost = read_amount("variable cost", &args.variable_cost, strictness)?;
    let fixed_costs = read_amount("fixed costs", &args.fixed_costs, strictness)?;
    let target_profit = read_amount("target profit", &args.target_profit, strictness)?;

    let result = break_even(price, variable_cost, fixed_costs, target_profit);

    match args.format {
        OutputFormat::Table => print!("{}", format_break_even(&result, settings.fraction_digits)),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(std::io::stdout().lock(), &result)?;
            println!();
        }
    }

    Ok(())
}
