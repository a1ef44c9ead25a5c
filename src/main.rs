use anyhow::Result;
use clap::{Parser, Subcommand};

use fincalc::cli::{
    handle_breakeven_command, handle_depreciation_command, handle_inventory_command,
    handle_loan_command, handle_payroll_command, handle_vat_command, BreakEvenArgs,
    DepreciationArgs, InventoryArgs, LoanArgs, PayrollArgs, VatArgs,
};
use fincalc::config::{FincalcPaths, Settings};
use fincalc::models::Strictness;

#[derive(Parser)]
#[command(
    name = "fincalc",
    version,
    about = "Terminal-based accounting and finance calculator",
    long_about = "fincalc bundles the everyday calculators of a small accounting \
                  office: inventory costing (FIFO/LIFO/weighted average), loan \
                  amortization schedules, depreciation, VAT, break-even analysis, \
                  and gross-to-net payroll. All arithmetic is exact decimal."
)]
struct Cli {
    /// Fail on malformed numeric input instead of substituting zero
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add or extract value-added tax
    Vat(VatArgs),

    /// Build an annuity loan amortization schedule
    Loan(LoanArgs),

    /// Build a depreciation schedule
    #[command(alias = "depr")]
    Depreciation(DepreciationArgs),

    /// Run inventory costing over a transaction list
    #[command(alias = "inv")]
    Inventory(InventoryArgs),

    /// Break-even analysis
    Breakeven(BreakEvenArgs),

    /// Gross-to-net payroll breakdown
    Payroll(PayrollArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FincalcPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let strictness = if cli.strict {
        Strictness::Strict
    } else {
        settings.strictness
    };

    match cli.command {
        Some(Commands::Vat(args)) => handle_vat_command(&settings, strictness, args)?,
        Some(Commands::Loan(args)) => handle_loan_command(&settings, strictness, args)?,
        Some(Commands::Depreciation(args)) => {
            handle_depreciation_command(&settings, strictness, args)?
        }
        Some(Commands::Inventory(args)) => handle_inventory_command(&settings, strictness, args)?,
        Some(Commands::Breakeven(args)) => handle_breakeven_command(&settings, strictness, args)?,
        Some(Commands::Payroll(args)) => handle_payroll_command(&settings, strictness, args)?,
        Some(Commands::Config) => {
            println!("fincalc Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Fraction digits:  {}", settings.fraction_digits);
            println!("  Strictness:       {:?}", settings.strictness);
            println!(
                "  Default VAT rate: {}%",
                settings.default_vat_rate_pct.format(settings.fraction_digits)
            );
        }
        None => {
            println!("fincalc - accounting and finance calculators");
            println!();
            println!("Run 'fincalc --help' for usage information.");
        }
    }

    Ok(())
}
