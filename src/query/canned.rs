//! Implements the `QueryTool` trait with fixed, in-memory responses for tests.

use crate::query::{parse_csv, QueryTool, Row};
use crate::{QueryTimeout, Result};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tracing::warn;

/// What a `CannedQueryTool` does when it receives a query with a given label.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Response {
    /// The query succeeded and produced this CSV text (header row first).
    Csv(String),
    /// The query tool failed; the caller sees no rows.
    Fail,
    /// The query ran past its time limit.
    Timeout,
}

/// A `QueryTool` that answers by query label. Labels without a response behave like a failed
/// query. Every label asked for is recorded, in order.
#[derive(Debug, Default)]
pub struct CannedQueryTool {
    responses: HashMap<String, Response>,
    calls: Mutex<Vec<String>>,
}

impl CannedQueryTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer queries labelled `label` with the given CSV text.
    pub fn csv(self, label: impl Into<String>, csv: impl Into<String>) -> Self {
        self.respond(label, Response::Csv(csv.into()))
    }

    pub fn respond(mut self, label: impl Into<String>, response: Response) -> Self {
        self.responses.insert(label.into(), response);
        self
    }

    /// The labels of the queries run so far, in the order they were run.
    pub fn calls(&self) -> Vec<String> {
        match self.calls.lock() {
            Ok(calls) => calls.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn record(&self, label: &str) {
        match self.calls.lock() {
            Ok(mut calls) => calls.push(label.to_string()),
            Err(poisoned) => poisoned.into_inner().push(label.to_string()),
        }
    }
}

#[async_trait::async_trait]
impl QueryTool for CannedQueryTool {
    async fn run(&self, _sql: &str, label: &str) -> Result<Vec<Row>> {
        self.record(label);
        match self.responses.get(label) {
            Some(Response::Csv(csv)) => match parse_csv(csv.as_bytes()) {
                Ok(rows) => Ok(rows),
                Err(e) => {
                    warn!("  Unreadable output for {label}: {e:#}");
                    Ok(Vec::new())
                }
            },
            Some(Response::Timeout) => {
                Err(QueryTimeout::new(label, Duration::from_secs(120)).into())
            }
            Some(Response::Fail) | None => {
                warn!("  No output for {label}");
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_answers_by_label_and_records_calls() {
        let tool = CannedQueryTool::new()
            .csv("a", "x,y\n1,2\n")
            .respond("b", Response::Fail);
        assert_eq!(tool.run("SELECT", "a").await.unwrap().len(), 1);
        assert!(tool.run("SELECT", "b").await.unwrap().is_empty());
        assert!(tool.run("SELECT", "c").await.unwrap().is_empty());
        assert_eq!(tool.calls(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_timeout_response() {
        let tool = CannedQueryTool::new().respond("slow", Response::Timeout);
        let err = tool.run("SELECT", "slow").await.unwrap_err();
        assert!(err.downcast_ref::<QueryTimeout>().is_some());
    }
}
