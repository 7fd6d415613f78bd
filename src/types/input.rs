use super::tags::{Category, IncomeLevel, LifeArea, Necessity, UseProbability};
use serde::{Deserialize, Serialize};

/// One candidate purchase, as collected by the front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseInput {
    pub item_name: String,
    pub price: f64,
    pub income_level: IncomeLevel,
    #[serde(default)]
    pub life_areas: Vec<LifeArea>,
    pub necessity: Necessity,
    /// Hours per week.
    pub time_use: f64,
    pub use_probability: UseProbability,
    /// Months.
    pub life_span: u32,
    pub category: Category,
}

/// A categorical tag that fell back to its table default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnrecognizedTag {
    pub field: &'static str,
    pub tag: String,
    pub expected: &'static [&'static str],
}

impl PurchaseInput {
    pub fn unrecognized_tags(&self) -> Vec<UnrecognizedTag> {
        let mut found = Vec::new();
        if !self.income_level.is_recognized() {
            found.push(UnrecognizedTag {
                field: IncomeLevel::FIELD,
                tag: self.income_level.to_string(),
                expected: IncomeLevel::KNOWN,
            });
        }
        for area in self.life_areas.iter().filter(|area| !area.is_recognized()) {
            found.push(UnrecognizedTag {
                field: LifeArea::FIELD,
                tag: area.to_string(),
                expected: LifeArea::KNOWN,
            });
        }
        if !self.necessity.is_recognized() {
            found.push(UnrecognizedTag {
                field: Necessity::FIELD,
                tag: self.necessity.to_string(),
                expected: Necessity::KNOWN,
            });
        }
        if !self.use_probability.is_recognized() {
            found.push(UnrecognizedTag {
                field: UseProbability::FIELD,
                tag: self.use_probability.to_string(),
                expected: UseProbability::KNOWN,
            });
        }
        if !self.category.is_recognized() {
            found.push(UnrecognizedTag {
                field: Category::FIELD,
                tag: self.category.to_string(),
                expected: Category::KNOWN,
            });
        }
        found
    }
}
