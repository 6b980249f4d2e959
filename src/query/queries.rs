/// A named SQL query against the reporting replica.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Query {
    pub label: &'static str,
    pub sql: &'static str,
}

/// The six headline counts, as a single row.
pub const CORE_METRICS: Query = Query {
    label: "core metrics",
    sql: include_str!("../../sql/core_metrics.sql"),
};

/// Completions per month over the last seven months: `month_label, month_sort, cnt`, ordered by
/// `month_sort`.
pub const MONTHLY_COMPLETIONS: Query = Query {
    label: "monthly completions",
    sql: include_str!("../../sql/monthly_completions.sql"),
};

/// Loan averages, arrears, purpose split, offer conversion and income booster share, as a single
/// row.
pub const EXTENDED_METRICS: Query = Query {
    label: "extended metrics",
    sql: include_str!("../../sql/extended_metrics.sql"),
};

/// One row per funding line with active loans.
pub const FUNDER_DETAILS: Query = Query {
    label: "funder details",
    sql: include_str!("../../sql/funder_details.sql"),
};
