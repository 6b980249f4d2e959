use std::fmt::{Display, Formatter};
use std::time::Duration;

pub type Error = anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// The query tool did not finish within its time limit. The child process has been killed.
///
/// This travels inside an `anyhow::Error`; use `downcast_ref::<QueryTimeout>()` to detect it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct QueryTimeout {
    label: String,
    limit: Duration,
}

impl QueryTimeout {
    pub fn new(label: impl Into<String>, limit: Duration) -> Self {
        Self {
            label: label.into(),
            limit,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl Display for QueryTimeout {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Query '{}' timed out after {} seconds",
            self.label,
            self.limit.as_secs()
        )
    }
}

impl std::error::Error for QueryTimeout {}
