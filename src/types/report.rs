use crate::decision::Analysis;
use crate::types::input::{PurchaseInput, UnrecognizedTag};
use crate::types::metrics::UtilityMetrics;
use serde::Serialize;

/// A soft fallback the engine applied instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    DefaultedTag { field: &'static str, tag: String },
    ZeroPrice { fallback_use_factor: f64 },
}

#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub generated_at: String,
    pub input: PurchaseInput,
    pub metrics: UtilityMetrics,
    pub analysis: Analysis,
    pub notices: Vec<Notice>,
}

impl Evaluation {
    pub fn new(
        input: PurchaseInput,
        metrics: UtilityMetrics,
        analysis: Analysis,
        zero_price_use_factor: f64,
    ) -> Self {
        let mut notices: Vec<Notice> = input
            .unrecognized_tags()
            .into_iter()
            .map(|UnrecognizedTag { field, tag, .. }| Notice::DefaultedTag { field, tag })
            .collect();
        if !(input.price > 0.0) {
            notices.push(Notice::ZeroPrice {
                fallback_use_factor: zero_price_use_factor,
            });
        }
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            input,
            metrics,
            analysis,
            notices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::{analyze, DecisionContext};
    use crate::engine::calculate_utilities;
    use crate::types::config::ModelConfig;
    use crate::types::tags::{Category, IncomeLevel, Necessity, UseProbability};

    fn evaluation_at(price: f64) -> Evaluation {
        let config = ModelConfig::default();
        let input = PurchaseInput {
            item_name: "Gift Card".to_string(),
            price,
            income_level: IncomeLevel::Medium,
            life_areas: vec![],
            necessity: Necessity::NiceToHave,
            time_use: 2.0,
            use_probability: UseProbability::Medium,
            life_span: 12,
            category: Category::Entertainment,
        };
        let metrics = calculate_utilities(&input, &config);
        let context = DecisionContext::new(0.5, 0.5).expect("valid context");
        let analysis = analyze(&metrics, &context, &config.constants);
        Evaluation::new(
            input,
            metrics,
            analysis,
            config.constants.zero_price_use_factor,
        )
    }

    fn has_zero_price_notice(evaluation: &Evaluation) -> bool {
        evaluation
            .notices
            .iter()
            .any(|notice| matches!(notice, Notice::ZeroPrice { .. }))
    }

    #[test]
    fn zero_price_notice_covers_every_fallback_price() {
        for price in [0.0, -5.0, f64::NAN] {
            let evaluation = evaluation_at(price);
            assert!(
                has_zero_price_notice(&evaluation),
                "price {price} should carry a zero-price notice"
            );
            assert!(evaluation.metrics.use_factor.is_finite());
        }
    }

    #[test]
    fn positive_price_has_no_zero_price_notice() {
        assert!(!has_zero_price_notice(&evaluation_at(25.0)));
    }
}
