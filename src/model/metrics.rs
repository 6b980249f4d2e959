use serde::{Deserialize, Serialize};

/// The headline business counts. Every field is required; the report is meaningless without them.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct CoreMetrics {
    pub completions: i64,
    pub total_owners: i64,
    pub nbb_offers: i64,
    pub total_offers: i64,
    pub income_boosters: i64,
    pub active_loans: i64,
}
