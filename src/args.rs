//! These structs provide the CLI interface for fetch-dashboard-metrics.

use crate::config::DEFAULT_OUTPUT;
use crate::query::DEFAULT_PROGRAM;
use clap::Parser;
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

/// fetch-dashboard-metrics: fetch lending metrics for the dashboard video.
///
/// Runs the dashboard's SQL queries against the reporting replica through the Lightdash CLI
/// (`lightdash sql`), merges the results with static fallback data and writes them as JSON for
/// the dashboard renderer.
///
/// The Lightdash CLI must be on your PATH, logged in (`lightdash login`) and pointed at the
/// reporting project (`lightdash config set-project`) before you run this.
#[derive(Debug, Parser, Clone)]
#[command(version)]
pub struct Args {
    /// A JSON file with funder limits: an array of objects with `name`, `current`, `limit` and,
    /// optionally, `color`. The built-in limits are used when this is not given or is empty.
    #[arg(long, value_parser = any_path)]
    funders_json: Option<PathBuf>,

    /// The file to write the dashboard data to. Its directory is created if needed.
    #[arg(long, default_value_t = DisplayPath::from(PathBuf::from(DEFAULT_OUTPUT)))]
    output: DisplayPath,

    /// The Lightdash CLI executable.
    #[arg(long, default_value = DEFAULT_PROGRAM)]
    tool: PathBuf,

    /// How many seconds a single query may run before it is abandoned.
    #[arg(long, default_value_t = 120)]
    timeout_secs: u64,

    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,
}

impl Args {
    pub fn funders_json(&self) -> Option<&Path> {
        self.funders_json
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    pub fn output(&self) -> &Path {
        self.output.path()
    }

    pub fn tool(&self) -> &Path {
        &self.tool
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}

/// Accepts any value as a path, including an empty one, which clap's own path parser rejects.
fn any_path(s: &str) -> Result<PathBuf, Infallible> {
    Ok(PathBuf::from(s))
}

/// A `PathBuf` that can be shown as a clap default value.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn path(&self) -> &Path {
        &self.0
    }
}
