//! Shared test utilities for building fake query tools and sample query output.
//!
//! This module is only compiled when running tests (`#[cfg(test)]`).

use crate::query::{
    CannedQueryTool, CORE_METRICS, EXTENDED_METRICS, FUNDER_DETAILS, MONTHLY_COMPLETIONS,
};
#[cfg(unix)]
use std::path::PathBuf;
#[cfg(unix)]
use tempfile::TempDir;

pub(crate) const CORE_CSV: &str = "completions,total_owners,nbb_offers,total_offers,income_boosters,active_loans
4881.0,8127,310,5620,1204,4702
";

pub(crate) const MONTHLY_CSV: &str = "month_label,month_sort,cnt
Apr      ,2026-04,141
May      ,2026-05,162.0
Jun      ,2026-06,158
";

pub(crate) const EXTENDED_CSV: &str = "avg_loan_size,avg_ltv,weighted_avg_rate,total_book_size,arrears_count,purchase_count,remortgage_count,offer_to_completion_rate,avg_days_offer_to_completion,income_booster_pct
261433,71.4,5.38,1229300000,19,4610,342,83.2,87,38.1
";

pub(crate) const FUNDER_DETAILS_CSV: &str = "funder_name,active_loans,current_principal,avg_rate
Aston,3120,801233000,5.31
Birchwood,17,4100000.0,
";

/// A canned tool that answers all four dashboard queries with the sample output above.
pub(crate) fn full_tool() -> CannedQueryTool {
    CannedQueryTool::new()
        .csv(CORE_METRICS.label, CORE_CSV)
        .csv(MONTHLY_COMPLETIONS.label, MONTHLY_CSV)
        .csv(EXTENDED_METRICS.label, EXTENDED_CSV)
        .csv(FUNDER_DETAILS.label, FUNDER_DETAILS_CSV)
}

/// Writes an executable `/bin/sh` script with the given body into `dir` and returns its path. The
/// script is invoked like the real CLI: `$1` is `sql`, `$2` the query, `$3` is `-o` and `$4` the
/// CSV output path.
#[cfg(unix)]
pub(crate) fn fake_tool(dir: &TempDir, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.path().join("fake-lightdash");
    std::fs::write(&path, format!("#!/bin/sh\n{body}")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
