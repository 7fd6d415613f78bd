//! Expected-utility comparison of buying against not buying.
//!
//! Everything here works on an already computed [`UtilityMetrics`]; new
//! beliefs never require recalculating the metrics.

pub mod sweep;

use crate::error::{Result, UtilityError};
use crate::types::config::ModelConstants;
use crate::types::metrics::UtilityMetrics;
use serde::Serialize;

/// Subjective beliefs that the item turns out useful, per choice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecisionContext {
    p_useful_if_buy: f64,
    p_useful_if_not_buy: f64,
}

impl DecisionContext {
    pub fn new(p_useful_if_buy: f64, p_useful_if_not_buy: f64) -> Result<Self> {
        Ok(Self {
            p_useful_if_buy: check_probability("p_useful_if_buy", p_useful_if_buy)?,
            p_useful_if_not_buy: check_probability("p_useful_if_not_buy", p_useful_if_not_buy)?,
        })
    }

    pub fn p_useful_if_buy(&self) -> f64 {
        self.p_useful_if_buy
    }

    pub fn p_useful_if_not_buy(&self) -> f64 {
        self.p_useful_if_not_buy
    }
}

pub fn check_probability(name: &str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(UtilityError::InvalidProbability {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

pub fn expected_utility_buy(metrics: &UtilityMetrics, p_useful_if_buy: f64) -> f64 {
    p_useful_if_buy * metrics.u_buy_useful + (1.0 - p_useful_if_buy) * metrics.u_buy_not_useful
}

pub fn expected_utility_not_buy(metrics: &UtilityMetrics, p_useful_if_not_buy: f64) -> f64 {
    p_useful_if_not_buy * metrics.u_not_buy_useful
        + (1.0 - p_useful_if_not_buy) * metrics.u_not_buy_not_useful
}

/// Belief in usefulness at which buying ties with not buying.
///
/// Clamped to [0, 1]: a raw value outside that range means one choice
/// dominates regardless of belief. When both buy outcomes are worth the same
/// the belief is uninformative and `neutral` is returned.
pub fn breakeven_probability(
    metrics: &UtilityMetrics,
    p_useful_if_not_buy: f64,
    neutral: f64,
) -> f64 {
    let numerator =
        expected_utility_not_buy(metrics, p_useful_if_not_buy) - metrics.u_buy_not_useful;
    let denominator = metrics.u_buy_useful - metrics.u_buy_not_useful;
    if denominator == 0.0 {
        return neutral;
    }

    let breakeven = numerator / denominator;
    if breakeven.is_nan() {
        return neutral;
    }
    breakeven.clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    Buy,
    DontBuy,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "choice", rename_all = "snake_case")]
pub enum Recommendation {
    Buy {
        gain: f64,
    },
    /// `required` is the breakeven belief, `held` the current buy belief.
    DontBuy {
        deficit: f64,
        required: f64,
        held: f64,
    },
}

impl Recommendation {
    pub fn choice(&self) -> Choice {
        match self {
            Self::Buy { .. } => Choice::Buy,
            Self::DontBuy { .. } => Choice::DontBuy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Analysis {
    pub context: DecisionContext,
    pub expected_utility_buy: f64,
    pub expected_utility_not_buy: f64,
    pub breakeven_probability: f64,
    pub recommendation: Recommendation,
}

/// Buying wins only on a strictly larger expected utility; ties go to not
/// buying.
pub fn analyze(
    metrics: &UtilityMetrics,
    context: &DecisionContext,
    constants: &ModelConstants,
) -> Analysis {
    let eu_buy = expected_utility_buy(metrics, context.p_useful_if_buy);
    let eu_not_buy = expected_utility_not_buy(metrics, context.p_useful_if_not_buy);
    let breakeven = breakeven_probability(
        metrics,
        context.p_useful_if_not_buy,
        constants.neutral_breakeven,
    );

    let recommendation = if eu_buy > eu_not_buy {
        Recommendation::Buy {
            gain: eu_buy - eu_not_buy,
        }
    } else {
        Recommendation::DontBuy {
            deficit: eu_not_buy - eu_buy,
            required: breakeven,
            held: context.p_useful_if_buy,
        }
    };

    Analysis {
        context: *context,
        expected_utility_buy: eu_buy,
        expected_utility_not_buy: eu_not_buy,
        breakeven_probability: breakeven,
        recommendation,
    }
}
