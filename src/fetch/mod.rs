//! The fetch operations that populate the dashboard, and the policy that decides what happens when
//! one of them fails.
//!
//! Every fetch produces a [`Fetched`] value. How a failure is handled depends on the stage:
//!
//! - [`required`] stages (core metrics, an explicitly given funders file) turn any failure into an
//!   error, which ends the run with a non-zero exit status.
//! - [`optional`] stages (extended metrics, funder details) turn any failure, including a query
//!   timeout, into a documented default and a warning. Their signatures return `Fetched<T>`
//!   rather than `Result`, so they cannot end the run.

mod extended;
mod funder_details;
mod funder_limits;
mod metrics;

use crate::Result;
use anyhow::Context;
use tracing::warn;

pub use extended::fetch_extended_metrics;
pub use funder_details::fetch_funder_details;
pub use funder_limits::load_funder_limits;
pub use metrics::fetch_core_metrics;

/// The result of a fetch that did not fail fatally.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    /// The value came from the data source.
    Live(T),
    /// The data source failed or was empty, so some or all of the value is a static default.
    Defaulted { value: T, reason: String },
}

impl<T> Fetched<T> {
    pub fn defaulted(value: T, reason: impl Into<String>) -> Self {
        Fetched::Defaulted {
            value,
            reason: reason.into(),
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Fetched::Live(value) => value,
            Fetched::Defaulted { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Fetched::Live(value) => value,
            Fetched::Defaulted { value, .. } => value,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Fetched::Live(_))
    }

    /// Why a default was used, if one was.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Fetched::Live(_) => None,
            Fetched::Defaulted { reason, .. } => Some(reason.as_str()),
        }
    }
}

/// Settles a stage the report cannot do without: any failure is fatal.
pub(crate) fn required<T>(label: &str, attempt: Result<Fetched<T>>) -> Result<Fetched<T>> {
    attempt.with_context(|| format!("Unable to fetch {label}"))
}

/// Settles a stage the report can do without: any failure is replaced by `fallback()`.
pub(crate) fn optional<T>(
    label: &str,
    attempt: Result<Fetched<T>>,
    fallback: impl FnOnce() -> T,
) -> Fetched<T> {
    match attempt {
        Ok(fetched) => fetched,
        Err(e) => {
            let reason = format!("{e:#}");
            warn!("  {label} failed ({reason}), using defaults");
            Fetched::defaulted(fallback(), reason)
        }
    }
}
