use crate::defaults;
use crate::model::FunderDetail;
use serde::{Deserialize, Serialize};

/// Figures for the deep-dive scenes of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedMetrics {
    /// Completions per month in the order the query returned them (oldest first).
    pub monthly_completions: Vec<MonthlyPoint>,
    #[serde(flatten)]
    pub scalars: ExtendedScalars,
    pub funder_details: Vec<FunderDetail>,
}

impl ExtendedMetrics {
    pub fn new(monthly_completions: Vec<MonthlyPoint>, scalars: ExtendedScalars) -> Self {
        Self {
            monthly_completions,
            scalars,
            funder_details: Vec::new(),
        }
    }
}

impl Default for ExtendedMetrics {
    /// The complete fallback record: default monthly series, default scalars, no funder details.
    fn default() -> Self {
        Self::new(
            defaults::monthly_completions(),
            defaults::DEFAULT_EXTENDED_SCALARS,
        )
    }
}

/// The single-valued extended figures. Monetary amounts are whole pounds; rates and percentages
/// are floats (`5.45` means 5.45%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtendedScalars {
    pub avg_loan_size: i64,
    pub avg_ltv: f64,
    pub purchase_count: i64,
    pub remortgage_count: i64,
    pub offer_to_completion_rate: f64,
    pub avg_days_offer_to_completion: i64,
    pub total_book_size: i64,
    pub arrears_count: i64,
    pub weighted_avg_rate: f64,
    pub income_booster_pct: f64,
}

impl Default for ExtendedScalars {
    fn default() -> Self {
        defaults::DEFAULT_EXTENDED_SCALARS
    }
}

/// One point on the monthly completions chart, e.g. `{"month": "Sep", "value": 139}`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub value: i64,
}

impl MonthlyPoint {
    pub fn new(month: impl Into<String>, value: i64) -> Self {
        Self {
            month: month.into(),
            value,
        }
    }
}
