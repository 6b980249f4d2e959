//! Running SQL against the reporting replica and reading back the rows.
//!
//! The `QueryTool` trait is the seam between the fetchers and whatever executes the SQL. In
//! production that is the `lightdash` CLI (`LightdashCli`); tests use `CannedQueryTool`, which
//! serves fixed CSV from memory.

#[cfg(test)]
mod canned;
mod lightdash;
mod queries;

use crate::{coerce, Result};
use anyhow::Context;
use std::collections::HashMap;
use std::io::Read;

#[cfg(test)]
pub(crate) use canned::{CannedQueryTool, Response};
pub use lightdash::{LightdashCli, DEFAULT_PROGRAM, DEFAULT_TIMEOUT};
pub use queries::{Query, CORE_METRICS, EXTENDED_METRICS, FUNDER_DETAILS, MONTHLY_COMPLETIONS};

/// Something that can execute a SQL query and return the result rows.
#[async_trait::async_trait]
pub trait QueryTool: Send + Sync {
    /// Runs `sql` and returns its rows in the order they were produced. `label` names the query
    /// in log messages.
    ///
    /// Implementations degrade every failure to an empty result, logging a warning, with one
    /// exception: a query that exceeds its time limit returns a `QueryTimeout` error.
    async fn run(&self, sql: &str, label: &str) -> Result<Vec<Row>>;
}

/// One result row, keyed by column name. All values are the raw text from the CSV output.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Row(HashMap<String, String>);

impl Row {
    /// The raw value of `column`, if the row has it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    /// The value of `column`, failing if the column is absent.
    pub(crate) fn required(&self, column: &str) -> Result<&str> {
        self.get(column)
            .with_context(|| format!("Column '{column}' is missing from the query result"))
    }

    /// A required column coerced to an integer, e.g. `"3.0"` -> `3`.
    pub(crate) fn int(&self, column: &str) -> Result<i64> {
        coerce::int(self.required(column)?)
            .with_context(|| format!("Bad value in column '{column}'"))
    }

    /// An optional column coerced to an integer. Absent or empty (SQL `NULL`) means zero.
    pub(crate) fn int_or_zero(&self, column: &str) -> Result<i64> {
        match self.non_empty(column) {
            None => Ok(0),
            Some(s) => {
                coerce::int(s).with_context(|| format!("Bad value in column '{column}'"))
            }
        }
    }

    /// An optional column coerced to a float. Absent or empty (SQL `NULL`) means zero.
    pub(crate) fn float_or_zero(&self, column: &str) -> Result<f64> {
        match self.non_empty(column) {
            None => Ok(0.0),
            Some(s) => {
                coerce::float(s).with_context(|| format!("Bad value in column '{column}'"))
            }
        }
    }

    fn non_empty(&self, column: &str) -> Option<&str> {
        self.get(column).filter(|s| !s.is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Row(iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect())
    }
}

/// Parses CSV with a header row into rows keyed by header name. Rows shorter than the header
/// simply lack the trailing columns.
pub(crate) fn parse_csv(reader: impl Read) -> Result<Vec<Row>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = rdr.headers().context("Unable to read CSV header")?.clone();
    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.context("Unable to parse CSV row")?;
        let row: Row = headers.iter().zip(record.iter()).collect();
        rows.push(row);
    }
    Ok(rows)
}
