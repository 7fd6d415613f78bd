pub mod json;
pub mod md;

use crate::error::UtilityError;
use crate::types::report::Evaluation;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(evaluation: &Evaluation, format: OutputFormat) -> Result<String, UtilityError> {
    match format {
        OutputFormat::Json => json::to_json(evaluation).map_err(UtilityError::Json),
        OutputFormat::Md => Ok(md::to_markdown(evaluation)),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::decision::{analyze, DecisionContext};
    use crate::engine::calculate_utilities;
    use crate::types::config::ModelConfig;
    use crate::types::input::PurchaseInput;
    use crate::types::report::Evaluation;
    use crate::types::tags::{Category, IncomeLevel, LifeArea, Necessity, UseProbability};

    pub fn evaluation(p_useful_if_buy: f64, p_useful_if_not_buy: f64) -> Evaluation {
        let config = ModelConfig::default();
        let input = PurchaseInput {
            item_name: "Work Laptop".to_string(),
            price: 1000.0,
            income_level: IncomeLevel::Medium,
            life_areas: vec![LifeArea::Career, LifeArea::parse("family")],
            necessity: Necessity::Essential,
            time_use: 20.0,
            use_probability: UseProbability::High,
            life_span: 36,
            category: Category::Efficiency,
        };
        let metrics = calculate_utilities(&input, &config);
        let context =
            DecisionContext::new(p_useful_if_buy, p_useful_if_not_buy).expect("valid context");
        let analysis = analyze(&metrics, &context, &config.constants);
        Evaluation::new(
            input,
            metrics,
            analysis,
            config.constants.zero_price_use_factor,
        )
    }
}
