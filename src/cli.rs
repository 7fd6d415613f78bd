use crate::decision::sweep::MAX_SWEEP_STEPS;
use crate::error::{Result, UtilityError};
use crate::intake;
use crate::types::input::PurchaseInput;
use crate::types::tags::{Category, IncomeLevel, LifeArea, Necessity, UseProbability};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "utility-agency",
    version,
    about = "Expected-utility analysis for purchase decisions"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Model configuration file (defaults to ./utility.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a purchase and recommend buying or not
    Evaluate(EvaluateCommand),
    /// Show how the recommendation moves with the belief that buying pays off
    Sweep(SweepCommand),
    /// Print the effective model configuration as TOML
    Tables,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct PurchaseArgs {
    /// Read the purchase from a TOML or JSON file instead of flags
    #[arg(long, conflicts_with_all = ["item", "price", "hours_per_week", "life_span", "life_area"])]
    pub input: Option<PathBuf>,

    #[arg(long, required_unless_present = "input")]
    pub item: Option<String>,

    #[arg(long, required_unless_present = "input")]
    pub price: Option<f64>,

    /// low, medium or high
    #[arg(long, default_value = "medium")]
    pub income: String,

    /// career, personal or health; repeat for several areas
    #[arg(long = "life-area")]
    pub life_area: Vec<String>,

    /// essential or nice_to_have
    #[arg(long, default_value = "essential")]
    pub necessity: String,

    #[arg(long, required_unless_present = "input")]
    pub hours_per_week: Option<f64>,

    /// How likely the weekly estimate is to hold: low, medium or high
    #[arg(long, default_value = "medium")]
    pub use_probability: String,

    /// Expected life span in months
    #[arg(long, required_unless_present = "input")]
    pub life_span: Option<u32>,

    /// entertainment, efficiency or qol
    #[arg(long, default_value = "efficiency")]
    pub category: String,
}

impl PurchaseArgs {
    pub fn to_input(&self) -> Result<PurchaseInput> {
        let input = match &self.input {
            Some(path) => intake::load_input(path)?,
            None => PurchaseInput {
                item_name: self.item.clone().ok_or_else(|| missing("--item"))?,
                price: self.price.ok_or_else(|| missing("--price"))?,
                income_level: IncomeLevel::parse(&self.income),
                life_areas: self
                    .life_area
                    .iter()
                    .map(|area| LifeArea::parse(area))
                    .collect(),
                necessity: Necessity::parse(&self.necessity),
                time_use: self
                    .hours_per_week
                    .ok_or_else(|| missing("--hours-per-week"))?,
                use_probability: UseProbability::parse(&self.use_probability),
                life_span: self.life_span.ok_or_else(|| missing("--life-span"))?,
                category: Category::parse(&self.category),
            },
        };
        intake::validate(input)
    }
}

fn missing(flag: &str) -> UtilityError {
    UtilityError::InvalidInput(format!("{flag} is required"))
}

fn parse_probability(raw: &str) -> std::result::Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is outside 0.0-1.0"))
    }
}

#[derive(Args)]
pub struct EvaluateCommand {
    #[command(flatten)]
    pub purchase: PurchaseArgs,

    /// Belief that the item turns out useful if bought
    #[arg(long, default_value = "0.5", value_parser = parse_probability)]
    pub p_buy: f64,

    /// Belief that the item would have been useful if not bought
    #[arg(long, default_value = "0.5", value_parser = parse_probability)]
    pub p_not_buy: f64,

    /// Reject unrecognized tags instead of scoring them with defaults
    #[arg(long)]
    pub strict: bool,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct SweepCommand {
    #[command(flatten)]
    pub purchase: PurchaseArgs,

    #[arg(long, default_value = "0.5", value_parser = parse_probability)]
    pub p_not_buy: f64,

    /// Number of increments between 0 and 1
    #[arg(
        long,
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_SWEEP_STEPS))
    )]
    pub steps: u32,

    #[arg(long)]
    pub strict: bool,
}
