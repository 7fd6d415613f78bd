use crate::types::config::ModelConfig;
use crate::types::input::PurchaseInput;
use crate::types::tags::LifeArea;

/// Expected hours of use over the item's life, discounted by how likely the
/// weekly estimate is to hold.
pub fn total_time_use(input: &PurchaseInput, config: &ModelConfig) -> f64 {
    let prob = config.use_probability.probability(&input.use_probability);
    let time_use_per_year = input.time_use * config.constants.weeks_per_year;
    let life_span_years = f64::from(input.life_span) / config.constants.months_per_year;
    time_use_per_year * life_span_years * prob
}

/// Mean weight of the tagged life areas; 1.0 when none are tagged.
pub fn life_area_multiplier(areas: &[LifeArea], config: &ModelConfig) -> f64 {
    if areas.is_empty() {
        return 1.0;
    }
    let sum: f64 = areas.iter().map(|area| config.life_area.weight(area)).sum();
    sum / areas.len() as f64
}
