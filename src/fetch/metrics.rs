use crate::fetch::{required, Fetched};
use crate::model::CoreMetrics;
use crate::query::{QueryTool, Row, CORE_METRICS};
use crate::Result;
use anyhow::bail;

/// Fetches the six headline counts. The report cannot be built without them, so no rows, a
/// missing column or an unparseable value is an error.
pub async fn fetch_core_metrics(tool: &dyn QueryTool) -> Result<Fetched<CoreMetrics>> {
    required(CORE_METRICS.label, attempt(tool).await)
}

async fn attempt(tool: &dyn QueryTool) -> Result<Fetched<CoreMetrics>> {
    let rows = tool.run(CORE_METRICS.sql, CORE_METRICS.label).await?;
    let Some(row) = rows.first() else {
        bail!("No data returned, aborting");
    };
    Ok(Fetched::Live(core_metrics(row)?))
}

fn core_metrics(row: &Row) -> Result<CoreMetrics> {
    Ok(CoreMetrics {
        completions: row.int("completions")?,
        total_owners: row.int("total_owners")?,
        nbb_offers: row.int("nbb_offers")?,
        total_offers: row.int("total_offers")?,
        income_boosters: row.int("income_boosters")?,
        active_loans: row.int("active_loans")?,
    })
}
