use serde::{Deserialize, Serialize};

/// Scenario utilities for one purchase, computed once per decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtilityMetrics {
    /// Expected usage hours per unit of currency spent.
    pub use_factor: f64,
    pub u_buy_useful: f64,
    pub u_buy_not_useful: f64,
    pub u_not_buy_useful: f64,
    pub u_not_buy_not_useful: f64,
}
