use serde::{Deserialize, Serialize};

/// One step of a marginal rate schedule.
///
/// `upper_bound` is inclusive; `None` marks the top bracket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub upper_bound: Option<f64>,
    pub rate: f64,
}

impl TaxBracket {
    pub const fn new(
        upper_bound: Option<f64>,
        rate: f64,
    ) -> Self {
        Self { upper_bound, rate }
    }

    /// Whether `income` falls at or below this bracket's ceiling.
    pub fn covers(
        &self,
        income: f64,
    ) -> bool {
        self.upper_bound.is_none_or(|bound| bound >= income)
    }
}
