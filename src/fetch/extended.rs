use crate::defaults;
use crate::fetch::{optional, Fetched};
use crate::model::{ExtendedMetrics, ExtendedScalars, MonthlyPoint};
use crate::query::{QueryTool, Row, EXTENDED_METRICS, MONTHLY_COMPLETIONS};
use crate::Result;
use tracing::info;

/// Fetches the monthly completions series and the extended scalar figures.
///
/// Each part falls back on its own when its query returns nothing: an empty monthly series is
/// replaced by the default series, and empty scalars by the default scalars (keeping a real
/// monthly series). Any failure, such as a malformed number, discards everything fetched so far
/// and yields `ExtendedMetrics::default()`.
pub async fn fetch_extended_metrics(tool: &dyn QueryTool) -> Fetched<ExtendedMetrics> {
    optional(
        EXTENDED_METRICS.label,
        attempt(tool).await,
        ExtendedMetrics::default,
    )
}

async fn attempt(tool: &dyn QueryTool) -> Result<Fetched<ExtendedMetrics>> {
    let mut defaulted = Vec::new();

    let monthly_rows = tool
        .run(MONTHLY_COMPLETIONS.sql, MONTHLY_COMPLETIONS.label)
        .await?;
    let monthly = if monthly_rows.is_empty() {
        defaulted.push("no monthly completions returned");
        defaults::monthly_completions()
    } else {
        monthly_rows
            .iter()
            .map(monthly_point)
            .collect::<Result<Vec<_>>>()?
    };

    let rows = tool
        .run(EXTENDED_METRICS.sql, EXTENDED_METRICS.label)
        .await?;
    let scalars = match rows.first() {
        Some(row) => scalars(row)?,
        None => {
            info!("  No extended metrics returned, using defaults");
            defaulted.push("no extended metrics returned");
            defaults::DEFAULT_EXTENDED_SCALARS
        }
    };

    let extended = ExtendedMetrics::new(monthly, scalars);
    if defaulted.is_empty() {
        Ok(Fetched::Live(extended))
    } else {
        Ok(Fetched::defaulted(extended, defaulted.join(", ")))
    }
}

fn monthly_point(row: &Row) -> Result<MonthlyPoint> {
    let month = row.required("month_label")?.trim();
    Ok(MonthlyPoint::new(month, row.int("cnt")?))
}

fn scalars(row: &Row) -> Result<ExtendedScalars> {
    Ok(ExtendedScalars {
        avg_loan_size: row.int_or_zero("avg_loan_size")?,
        avg_ltv: row.float_or_zero("avg_ltv")?,
        purchase_count: row.int_or_zero("purchase_count")?,
        remortgage_count: row.int_or_zero("remortgage_count")?,
        offer_to_completion_rate: row.float_or_zero("offer_to_completion_rate")?,
        avg_days_offer_to_completion: row.int_or_zero("avg_days_offer_to_completion")?,
        total_book_size: row.int_or_zero("total_book_size")?,
        arrears_count: row.int_or_zero("arrears_count")?,
        weighted_avg_rate: row.float_or_zero("weighted_avg_rate")?,
        income_booster_pct: row.float_or_zero("income_booster_pct")?,
    })
}
