use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use housing_core::{
    AffordabilityCalculator, AffordabilityInput, DEFAULT_CLOSING_COSTS_PERCENT,
    DEFAULT_DOWN_PAYMENT_PERCENT, DEFAULT_INSURANCE_PERCENT, DEFAULT_MAINTENANCE_COST_RATE,
    DEFAULT_MORTGAGE_YEARS, DEFAULT_OPPORTUNITY_COST_RATE, DEFAULT_PROPERTY_TAX_RATE,
    FilingStatus,
};
use tracing::debug;

use housing_cli::app;
use housing_cli::config::load_config;
use housing_cli::logging::{LogOptions, init_logging};
use housing_cli::report::OutputFormat;
use housing_cli::utils::{parse_amount, parse_filing_status};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Estimated annual net cost of owning a home instead of renting.
///
/// Amounts accept the same text a form field would: `500,000`, `$500,000`
/// or `6.5%`. Percentages are whole percent (`6.5` means 6.5%). Negative
/// amounts are accepted and reported as warnings.
#[derive(Debug, Parser)]
#[command(name = "homecost", version, about, long_about = None)]
struct Cli {
    /// TOML file overriding the deduction caps, state tax rate or
    /// affordability limit.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Also append log records to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log at debug level (ignored when RUST_LOG is set).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate a single scenario given on the command line.
    Estimate(EstimateArgs),

    /// Estimate every scenario in a CSV file.
    Batch {
        /// Path to the scenario CSV file.
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[derive(Debug, Args)]
struct EstimateArgs {
    /// House price.
    #[arg(long, value_parser = parse_amount, allow_hyphen_values = true)]
    price: f64,

    /// Gross annual income.
    #[arg(long, value_parser = parse_amount, allow_hyphen_values = true)]
    income: f64,

    /// Annual mortgage rate, percent.
    #[arg(long, value_parser = parse_amount, allow_hyphen_values = true)]
    rate: f64,

    /// Expected annual home appreciation, percent.
    #[arg(long, value_parser = parse_amount, allow_hyphen_values = true)]
    appreciation: f64,

    /// Filing status: S or MFJ.
    #[arg(long, value_parser = parse_filing_status, default_value = "S")]
    filing_status: FilingStatus,

    /// Homeowner's insurance, percent of price per year.
    #[arg(
        long,
        value_parser = parse_amount,
        allow_hyphen_values = true,
        default_value_t = DEFAULT_INSURANCE_PERCENT
    )]
    insurance: f64,

    /// Down payment, percent of price.
    #[arg(
        long,
        value_parser = parse_amount,
        allow_hyphen_values = true,
        default_value_t = DEFAULT_DOWN_PAYMENT_PERCENT
    )]
    down_payment: f64,

    /// Closing costs, percent of price.
    #[arg(
        long,
        value_parser = parse_amount,
        allow_hyphen_values = true,
        default_value_t = DEFAULT_CLOSING_COSTS_PERCENT
    )]
    closing_costs: f64,

    /// Return foregone on cash put into the house, percent per year.
    #[arg(
        long,
        value_parser = parse_amount,
        allow_hyphen_values = true,
        default_value_t = DEFAULT_OPPORTUNITY_COST_RATE
    )]
    opportunity_rate: f64,

    /// Loan term in years.
    #[arg(long, default_value_t = DEFAULT_MORTGAGE_YEARS)]
    years: u32,

    /// Maintenance, percent of price per year.
    #[arg(
        long,
        value_parser = parse_amount,
        allow_hyphen_values = true,
        default_value_t = DEFAULT_MAINTENANCE_COST_RATE
    )]
    maintenance: f64,

    /// Property tax, percent of price per year.
    #[arg(
        long,
        value_parser = parse_amount,
        allow_hyphen_values = true,
        default_value_t = DEFAULT_PROPERTY_TAX_RATE
    )]
    property_tax: f64,
}

impl From<EstimateArgs> for AffordabilityInput {
    fn from(args: EstimateArgs) -> Self {
        Self {
            house_price: args.price,
            user_income: args.income,
            mortgage_rate: args.rate,
            home_appreciation: args.appreciation,
            filing_status: args.filing_status,
            insurance_percent: args.insurance,
            down_payment_percent: args.down_payment,
            closing_costs_percent: args.closing_costs,
            opportunity_cost_rate: args.opportunity_rate,
            mortgage_years: args.years,
            maintenance_cost_rate: args.maintenance,
            property_tax_rate: args.property_tax,
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&LogOptions {
        file: cli.log_file.as_deref(),
        verbose: cli.verbose,
    })?;

    let config = load_config(cli.config.as_deref())?;
    let calculator = AffordabilityCalculator::new(config);
    debug!(config = ?calculator.config(), "calculator ready");

    let reports = match cli.command {
        Command::Estimate(args) => app::run_scenarios(&calculator, vec![args.into()]),
        Command::Batch { file } => app::run_batch(&calculator, &file)?,
    };

    println!("{}", app::render(&reports, cli.format)?);

    Ok(())
}
