use super::{expected_utility_buy, expected_utility_not_buy, Choice};
use crate::error::{Result, UtilityError};
use crate::types::metrics::UtilityMetrics;
use serde::Serialize;

pub const MAX_SWEEP_STEPS: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub p_useful_if_buy: f64,
    pub expected_utility_buy: f64,
    pub expected_utility_not_buy: f64,
    pub choice: Choice,
}

/// Evaluates `steps + 1` evenly spaced buy beliefs from 0 to 1 against a
/// fixed not-buy belief.
pub fn sweep(
    metrics: &UtilityMetrics,
    p_useful_if_not_buy: f64,
    steps: u32,
) -> Result<Vec<SweepPoint>> {
    if steps == 0 {
        return Err(UtilityError::InvalidInput(
            "sweep needs at least one step".to_string(),
        ));
    }
    if steps > MAX_SWEEP_STEPS {
        return Err(UtilityError::InvalidInput(format!(
            "sweep supports at most {MAX_SWEEP_STEPS} steps (got {steps})"
        )));
    }

    let eu_not_buy = expected_utility_not_buy(metrics, p_useful_if_not_buy);
    let points = (0..=steps)
        .map(|step| {
            let p = f64::from(step) / f64::from(steps);
            let eu_buy = expected_utility_buy(metrics, p);
            SweepPoint {
                p_useful_if_buy: p,
                expected_utility_buy: eu_buy,
                expected_utility_not_buy: eu_not_buy,
                choice: if eu_buy > eu_not_buy {
                    Choice::Buy
                } else {
                    Choice::DontBuy
                },
            }
        })
        .collect();
    Ok(points)
}
