use crate::error::UtilityError;
use crate::types::tags::{Category, IncomeLevel, LifeArea, Necessity, UseProbability};
use serde::{Deserialize, Serialize};

/// Weights and constants parameterizing the utility model.
///
/// Every lookup table carries a `default` entry so that an unrecognized tag
/// degrades to a known value instead of failing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    pub necessity: NecessityScores,
    pub category: CategoryMultipliers,
    pub life_area: LifeAreaWeights,
    pub use_probability: UseProbabilityValues,
    pub income: IncomeWeights,
    pub constants: ModelConstants,
    pub policy: ModelPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NecessityScores {
    pub essential: f64,
    pub nice_to_have: f64,
    /// Penalizing rather than neutral: an unclassified item is not treated
    /// as essential.
    pub default: f64,
}

impl Default for NecessityScores {
    fn default() -> Self {
        Self {
            essential: 1.0,
            nice_to_have: 0.6,
            default: 0.8,
        }
    }
}

impl NecessityScores {
    pub fn score(&self, necessity: &Necessity) -> f64 {
        match necessity {
            Necessity::Essential => self.essential,
            Necessity::NiceToHave => self.nice_to_have,
            Necessity::Unrecognized(_) => self.default,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryMultipliers {
    pub entertainment: f64,
    pub efficiency: f64,
    pub qol: f64,
    pub default: f64,
}

impl Default for CategoryMultipliers {
    fn default() -> Self {
        Self {
            entertainment: 1.0,
            efficiency: 1.2,
            qol: 1.1,
            default: 1.0,
        }
    }
}

impl CategoryMultipliers {
    pub fn multiplier(&self, category: &Category) -> f64 {
        match category {
            Category::Entertainment => self.entertainment,
            Category::Efficiency => self.efficiency,
            Category::Qol => self.qol,
            Category::Unrecognized(_) => self.default,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LifeAreaWeights {
    pub career: f64,
    pub personal: f64,
    pub health: f64,
    pub default: f64,
}

impl Default for LifeAreaWeights {
    fn default() -> Self {
        Self {
            career: 1.3,
            personal: 1.0,
            health: 1.4,
            default: 1.0,
        }
    }
}

impl LifeAreaWeights {
    pub fn weight(&self, area: &LifeArea) -> f64 {
        match area {
            LifeArea::Career => self.career,
            LifeArea::Personal => self.personal,
            LifeArea::Health => self.health,
            LifeArea::Unrecognized(_) => self.default,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UseProbabilityValues {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
    /// Certainty.
    pub default: f64,
}

impl Default for UseProbabilityValues {
    fn default() -> Self {
        Self {
            low: 0.3,
            medium: 0.6,
            high: 0.9,
            default: 1.0,
        }
    }
}

impl UseProbabilityValues {
    pub fn probability(&self, use_probability: &UseProbability) -> f64 {
        match use_probability {
            UseProbability::Low => self.low,
            UseProbability::Medium => self.medium,
            UseProbability::High => self.high,
            UseProbability::Unrecognized(_) => self.default,
        }
    }
}

/// Scenario weights for one income level, each pair as `[useful, not_useful]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightMatrix {
    pub buy: [f64; 2],
    pub not_buy: [f64; 2],
}

impl WeightMatrix {
    pub const fn new(buy: [f64; 2], not_buy: [f64; 2]) -> Self {
        Self { buy, not_buy }
    }

    fn values(&self) -> [f64; 4] {
        [self.buy[0], self.buy[1], self.not_buy[0], self.not_buy[1]]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IncomeWeights {
    pub low: WeightMatrix,
    pub medium: WeightMatrix,
    pub high: WeightMatrix,
    pub default: WeightMatrix,
}

impl Default for IncomeWeights {
    fn default() -> Self {
        Self {
            low: WeightMatrix::new([1.5, -4.0], [-1.0, 1.0]),
            medium: WeightMatrix::new([2.0, -3.0], [-1.5, 0.5]),
            high: WeightMatrix::new([2.5, -1.5], [-2.0, 0.25]),
            default: WeightMatrix::new([1.0, 1.0], [1.0, 1.0]),
        }
    }
}

impl IncomeWeights {
    pub fn matrix(&self, income_level: &IncomeLevel) -> &WeightMatrix {
        match income_level {
            IncomeLevel::Low => &self.low,
            IncomeLevel::Medium => &self.medium,
            IncomeLevel::High => &self.high,
            IncomeLevel::Unrecognized(_) => &self.default,
        }
    }

    fn named(&self) -> [(&'static str, &WeightMatrix); 3] {
        [
            ("low", &self.low),
            ("medium", &self.medium),
            ("high", &self.high),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConstants {
    pub weeks_per_year: f64,
    pub months_per_year: f64,
    /// Used for both the use factor and the benefit factor when the price is
    /// not positive.
    pub zero_price_use_factor: f64,
    /// Breakeven reported when both buy outcomes carry the same utility.
    pub neutral_breakeven: f64,
}

impl Default for ModelConstants {
    fn default() -> Self {
        Self {
            weeks_per_year: 52.0,
            months_per_year: 12.0,
            zero_price_use_factor: 0.01,
            neutral_breakeven: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagPolicy {
    /// Unrecognized tags resolve to the table default.
    #[default]
    Lenient,
    /// Unrecognized tags are rejected before calculation.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelPolicy {
    #[serde(default)]
    pub unknown_tags: TagPolicy,
}

impl ModelConfig {
    pub fn validate(&self) -> Result<(), UtilityError> {
        let multipliers = [
            ("necessity.essential", self.necessity.essential),
            ("necessity.nice_to_have", self.necessity.nice_to_have),
            ("necessity.default", self.necessity.default),
            ("category.entertainment", self.category.entertainment),
            ("category.efficiency", self.category.efficiency),
            ("category.qol", self.category.qol),
            ("category.default", self.category.default),
            ("life_area.career", self.life_area.career),
            ("life_area.personal", self.life_area.personal),
            ("life_area.health", self.life_area.health),
            ("life_area.default", self.life_area.default),
        ];
        for (key, value) in multipliers {
            if !value.is_finite() || value < 0.0 {
                return Err(UtilityError::InvalidConfig(format!(
                    "{key} must be a finite value >= 0.0 (found {value})"
                )));
            }
        }

        let probabilities = [
            ("use_probability.low", self.use_probability.low),
            ("use_probability.medium", self.use_probability.medium),
            ("use_probability.high", self.use_probability.high),
            ("use_probability.default", self.use_probability.default),
        ];
        for (key, value) in probabilities {
            if !(value > 0.0 && value <= 1.0) {
                return Err(UtilityError::InvalidConfig(format!(
                    "{key} must be greater than 0.0 and at most 1.0 (found {value})"
                )));
            }
        }

        for (level, matrix) in self
            .income
            .named()
            .into_iter()
            .chain([("default", &self.income.default)])
        {
            if matrix.values().iter().any(|weight| !weight.is_finite()) {
                return Err(UtilityError::InvalidConfig(format!(
                    "income.{level} weights must be finite"
                )));
            }
        }
        for (level, matrix) in self.income.named() {
            if matrix.buy[0] <= matrix.buy[1] {
                return Err(UtilityError::InvalidConfig(format!(
                    "income.{level}.buy must weight the useful outcome above the not-useful one"
                )));
            }
            if matrix.not_buy[1] <= matrix.not_buy[0] {
                return Err(UtilityError::InvalidConfig(format!(
                    "income.{level}.not_buy must weight the not-useful outcome above the useful one"
                )));
            }
        }

        let constants = &self.constants;
        if !(constants.weeks_per_year.is_finite() && constants.weeks_per_year > 0.0) {
            return Err(UtilityError::InvalidConfig(
                "constants.weeks_per_year must be greater than 0".to_string(),
            ));
        }
        if !(constants.months_per_year.is_finite() && constants.months_per_year > 0.0) {
            return Err(UtilityError::InvalidConfig(
                "constants.months_per_year must be greater than 0".to_string(),
            ));
        }
        if !constants.zero_price_use_factor.is_finite() || constants.zero_price_use_factor < 0.0 {
            return Err(UtilityError::InvalidConfig(
                "constants.zero_price_use_factor must be a finite value >= 0.0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&constants.neutral_breakeven) {
            return Err(UtilityError::InvalidConfig(
                "constants.neutral_breakeven must be between 0.0 and 1.0".to_string(),
            ));
        }

        Ok(())
    }
}
