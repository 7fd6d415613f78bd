use clap::Parser;
use tracing::{info, warn};
use utility_agency::cli::{self, Commands, ReportFormat};
use utility_agency::decision::{self, DecisionContext};
use utility_agency::error::UtilityError;
use utility_agency::types::config::{ModelConfig, TagPolicy};
use utility_agency::types::report::Evaluation;
use utility_agency::{config, engine, report, telemetry};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn load_model(cli: &cli::Cli, strict: bool) -> Result<ModelConfig, UtilityError> {
    let mut model = config::load_config(cli.config.as_deref())?;
    if strict {
        model.policy.unknown_tags = TagPolicy::Strict;
    }
    Ok(model)
}

fn run(cli: cli::Cli) -> Result<i32, UtilityError> {
    match &cli.command {
        Commands::Evaluate(cmd) => {
            let model = load_model(&cli, cmd.strict)?;
            let input = cmd.purchase.to_input()?;
            info!(item = %input.item_name, price = input.price, "evaluating purchase");

            let metrics = engine::calculate_utilities_with_policy(&input, &model)?;
            let context = DecisionContext::new(cmd.p_buy, cmd.p_not_buy)?;
            let analysis = decision::analyze(&metrics, &context, &model.constants);
            let evaluation = Evaluation::new(
                input,
                metrics,
                analysis,
                model.constants.zero_price_use_factor,
            );
            for notice in &evaluation.notices {
                warn!(?notice, "fallback applied");
            }

            let output_format = match cmd.format {
                ReportFormat::Json => report::OutputFormat::Json,
                ReportFormat::Md => report::OutputFormat::Md,
            };
            println!("{}", report::render(&evaluation, output_format)?);
            Ok(exit_code::SUCCESS)
        }
        Commands::Sweep(cmd) => {
            let model = load_model(&cli, cmd.strict)?;
            let input = cmd.purchase.to_input()?;
            let metrics = engine::calculate_utilities_with_policy(&input, &model)?;
            let points = decision::sweep::sweep(&metrics, cmd.p_not_buy, cmd.steps)?;
            let breakeven = decision::breakeven_probability(
                &metrics,
                cmd.p_not_buy,
                model.constants.neutral_breakeven,
            );

            println!("sweep: {}", input.item_name);
            println!("{:>8} {:>12} {:>12}  choice", "p(buy)", "E[U(Buy)]", "E[U(Not)]");
            for point in &points {
                println!(
                    "{:>8.3} {:>12.2} {:>12.2}  {}",
                    point.p_useful_if_buy,
                    point.expected_utility_buy,
                    point.expected_utility_not_buy,
                    match point.choice {
                        decision::Choice::Buy => "buy",
                        decision::Choice::DontBuy => "don't buy",
                    }
                );
            }
            println!("breakeven: {:.1}%", breakeven * 100.0);
            Ok(exit_code::SUCCESS)
        }
        Commands::Tables => {
            let model = load_model(&cli, false)?;
            print!("{}", toml::to_string_pretty(&model)?);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    if let Err(e) = telemetry::init(telemetry::level_for(cli.verbose, cli.quiet)) {
        eprintln!("warning: {e}");
    }

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_input_error() {
                exit_code::INVALID_INPUT
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
