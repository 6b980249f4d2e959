//! Run configuration, resolved once from the command line.

use crate::args::Args;
use crate::query::{LightdashCli, DEFAULT_PROGRAM, DEFAULT_TIMEOUT};
use crate::Result;
use anyhow::bail;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Where the dashboard renderer expects its data, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "remotion-dashboard/data/metrics.json";

/// The `Config` object holds everything a run needs to know: where to write the dashboard, how to
/// invoke the query tool, and where (if anywhere) to read funder limits from.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    output: PathBuf,
    program: PathBuf,
    timeout: Duration,
    funders_json: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            program: PathBuf::from(DEFAULT_PROGRAM),
            timeout: DEFAULT_TIMEOUT,
            funders_json: None,
        }
    }
}

impl Config {
    /// Builds the configuration from parsed command line arguments.
    ///
    /// # Errors
    /// - Returns an error if the query timeout is zero.
    pub fn from_args(args: &Args) -> Result<Self> {
        if args.timeout_secs() == 0 {
            bail!("--timeout-secs must be greater than zero");
        }
        Ok(Self {
            output: args.output().to_path_buf(),
            program: args.tool().to_path_buf(),
            timeout: Duration::from_secs(args.timeout_secs()),
            funders_json: args.funders_json().map(Path::to_path_buf),
        })
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_funders_json(mut self, path: impl Into<PathBuf>) -> Self {
        self.funders_json = Some(path.into());
        self
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn funders_json(&self) -> Option<&Path> {
        self.funders_json.as_deref()
    }

    /// The query tool this configuration describes.
    pub fn query_tool(&self) -> LightdashCli {
        LightdashCli::new(&self.program, self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("fetch-dashboard-metrics").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(&parse(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output(), Path::new(DEFAULT_OUTPUT));
        assert_eq!(config.timeout(), Duration::from_secs(120));
        assert_eq!(config.funders_json(), None);
        assert_eq!(config.query_tool().program(), Path::new("lightdash"));
    }

    #[test]
    fn test_overrides() {
        let args = parse(&[
            "--funders-json=limits.json",
            "--output",
            "out/metrics.json",
            "--tool",
            "/opt/bin/lightdash",
            "--timeout-secs",
            "30",
        ]);
        let config = Config::from_args(&args).unwrap();
        assert_eq!(config.funders_json(), Some(Path::new("limits.json")));
        assert_eq!(config.output(), Path::new("out/metrics.json"));
        assert_eq!(config.program(), Path::new("/opt/bin/lightdash"));
        assert_eq!(config.query_tool().timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        assert!(Config::from_args(&parse(&["--timeout-secs", "0"])).is_err());
    }
}
