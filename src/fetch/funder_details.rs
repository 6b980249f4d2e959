use crate::defaults;
use crate::fetch::{optional, Fetched};
use crate::model::FunderDetail;
use crate::query::{QueryTool, Row, FUNDER_DETAILS};
use crate::Result;

/// Fetches active-book figures per funding line. No rows is a valid answer and yields an empty
/// list; any failure also yields an empty list, with a warning.
pub async fn fetch_funder_details(tool: &dyn QueryTool) -> Fetched<Vec<FunderDetail>> {
    optional(FUNDER_DETAILS.label, attempt(tool).await, Vec::new)
}

async fn attempt(tool: &dyn QueryTool) -> Result<Fetched<Vec<FunderDetail>>> {
    let rows = tool.run(FUNDER_DETAILS.sql, FUNDER_DETAILS.label).await?;
    let details = rows.iter().map(funder_detail).collect::<Result<Vec<_>>>()?;
    Ok(Fetched::Live(details))
}

fn funder_detail(row: &Row) -> Result<FunderDetail> {
    let name = row.required("funder_name")?;
    Ok(FunderDetail {
        name: name.to_string(),
        color: defaults::funder_color(name).to_string(),
        active_loans: row.int("active_loans")?,
        current_principal: row.int_or_zero("current_principal")?,
        arrears_count: 0,
        avg_rate: row.float_or_zero("avg_rate")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{CannedQueryTool, Response};
    use crate::test::FUNDER_DETAILS_CSV;

    #[tokio::test]
    async fn test_funder_details() {
        let tool = CannedQueryTool::new().csv(FUNDER_DETAILS.label, FUNDER_DETAILS_CSV);
        let fetched = fetch_funder_details(&tool).await;
        assert!(fetched.is_live());
        let details = fetched.into_value();
        assert_eq!(
            details,
            vec![
                FunderDetail {
                    name: "Aston".to_string(),
                    color: "#00FF88".to_string(),
                    active_loans: 3120,
                    current_principal: 801_233_000,
                    arrears_count: 0,
                    avg_rate: 5.31,
                },
                FunderDetail {
                    name: "Birchwood".to_string(),
                    color: "#FFFFFF".to_string(),
                    active_loans: 17,
                    current_principal: 4_100_000,
                    arrears_count: 0,
                    avg_rate: 0.0,
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_no_rows_is_an_empty_list() {
        let tool = CannedQueryTool::new().csv(FUNDER_DETAILS.label, "funder_name,active_loans\n");
        let fetched = fetch_funder_details(&tool).await;
        assert!(fetched.is_live());
        assert!(fetched.value().is_empty());
    }

    #[tokio::test]
    async fn test_failed_query_is_an_empty_list() {
        let tool = CannedQueryTool::new().respond(FUNDER_DETAILS.label, Response::Fail);
        assert!(fetch_funder_details(&tool).await.into_value().is_empty());
    }

    #[tokio::test]
    async fn test_bad_row_discards_all_rows() {
        let csv = "funder_name,active_loans\nAston,12\nPluto,\n";
        let tool = CannedQueryTool::new().csv(FUNDER_DETAILS.label, csv);
        let fetched = fetch_funder_details(&tool).await;
        assert!(fetched.reason().unwrap().contains("active_loans"));
        assert!(fetched.value().is_empty());
    }

    #[tokio::test]
    async fn test_timeout_is_an_empty_list() {
        let tool = CannedQueryTool::new().respond(FUNDER_DETAILS.label, Response::Timeout);
        let fetched = fetch_funder_details(&tool).await;
        assert!(!fetched.is_live());
        assert!(fetched.value().is_empty());
    }
}
