//! Fetches lending dashboard metrics by running SQL through the Lightdash CLI and writes them to a
//! JSON document that the dashboard renderer consumes.

pub mod args;
mod coerce;
pub mod commands;
mod config;
pub mod defaults;
mod error;
pub mod fetch;
pub mod model;
pub mod query;
#[cfg(test)]
mod test;
mod utils;

pub use config::Config;
pub use error::{Error, QueryTimeout, Result};
