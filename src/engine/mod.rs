//! Turns a purchase into four scenario utilities.
//!
//! The engine is a pure function of its input and the configuration. It never
//! fails on categorical tags: unrecognized ones resolve to table defaults.

pub mod usage;

use crate::error::{Result, UtilityError};
use crate::types::config::{ModelConfig, TagPolicy};
use crate::types::input::PurchaseInput;
use crate::types::metrics::UtilityMetrics;
use tracing::debug;

pub fn calculate_utilities(input: &PurchaseInput, config: &ModelConfig) -> UtilityMetrics {
    let total_time_use = usage::total_time_use(input, config);

    let category_mult = config.category.multiplier(&input.category);
    let necessity_mult = config.necessity.score(&input.necessity);
    let life_area_mult = usage::life_area_multiplier(&input.life_areas, config);
    let benefit = total_time_use * category_mult * necessity_mult * life_area_mult;

    let (use_factor, benefit_factor) = if input.price > 0.0 {
        (total_time_use / input.price, benefit / input.price)
    } else {
        debug!(
            price = input.price,
            "price is not positive, using zero-price fallback"
        );
        let fallback = config.constants.zero_price_use_factor;
        (fallback, fallback)
    };

    let weights = config.income.matrix(&input.income_level);
    debug!(
        total_time_use,
        benefit, use_factor, benefit_factor, "calculated utility inputs"
    );

    UtilityMetrics {
        use_factor,
        u_buy_useful: benefit_factor * weights.buy[0],
        u_buy_not_useful: benefit_factor * weights.buy[1],
        u_not_buy_useful: benefit_factor * weights.not_buy[0],
        u_not_buy_not_useful: benefit_factor * weights.not_buy[1],
    }
}

/// Applies the configured unknown-tag policy, then calculates.
pub fn calculate_utilities_with_policy(
    input: &PurchaseInput,
    config: &ModelConfig,
) -> Result<UtilityMetrics> {
    let unrecognized = input.unrecognized_tags();
    match config.policy.unknown_tags {
        TagPolicy::Strict => {
            if let Some(first) = unrecognized.into_iter().next() {
                return Err(UtilityError::UnknownTag {
                    field: first.field,
                    tag: first.tag,
                    expected: first.expected.join(", "),
                });
            }
        }
        TagPolicy::Lenient => {
            for tag in &unrecognized {
                debug!(field = tag.field, tag = %tag.tag, "unrecognized tag resolved to default");
            }
        }
    }
    Ok(calculate_utilities(input, config))
}
