//! Implements the `QueryTool` trait by shelling out to the `lightdash` CLI.

use crate::query::{parse_csv, QueryTool, Row};
use crate::{utils, QueryTimeout, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tempfile::TempPath;
use tokio::process::Command;
use tracing::{debug, info, trace, warn};

/// The executable looked up on `PATH` when no other is configured.
pub const DEFAULT_PROGRAM: &str = "lightdash";

/// How long a single query may run before it is killed.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Runs queries with `<program> sql <SQL> -o <file.csv>`. The CLI must already be logged in and
/// pointed at the reporting project; this type does nothing about authentication.
#[derive(Debug, Clone)]
pub struct LightdashCli {
    program: PathBuf,
    timeout: Duration,
}

impl LightdashCli {
    pub fn new(program: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait::async_trait]
impl QueryTool for LightdashCli {
    async fn run(&self, sql: &str, label: &str) -> Result<Vec<Row>> {
        let csv_path = match tempfile::Builder::new()
            .prefix("dashboard-metrics-")
            .suffix(".csv")
            .tempfile()
        {
            Ok(file) => file.into_temp_path(),
            Err(e) => {
                warn!("Unable to create a temporary file for {label}: {e}");
                return Ok(Vec::new());
            }
        };

        info!("  Running: {label}...");
        let result = self.execute(sql, label, &csv_path).await;
        remove(csv_path);
        result
    }
}

impl LightdashCli {
    async fn execute(&self, sql: &str, label: &str, csv_path: &Path) -> Result<Vec<Row>> {
        let mut command = Command::new(&self.program);
        command
            .arg("sql")
            .arg(utils::one_line(sql))
            .arg("-o")
            .arg(csv_path)
            .stdin(Stdio::null())
            .kill_on_drop(true);
        debug!(
            "Running {} sql <{label}> -o {}",
            self.program.display(),
            csv_path.display()
        );

        let output = match tokio::time::timeout(self.timeout, command.output()).await {
            Err(_) => return Err(QueryTimeout::new(label, self.timeout).into()),
            Ok(Err(e)) => {
                warn!(
                    "  Unable to run {} for {label}: {e}",
                    self.program.display()
                );
                return Ok(Vec::new());
            }
            Ok(Ok(output)) => output,
        };

        if !output.status.success() {
            debug!("{} exited with {}", self.program.display(), output.status);
            let stderr = String::from_utf8_lossy(&output.stderr);
            let errors = error_lines(&stderr);
            if !errors.is_empty() {
                warn!(
                    "  {} sql failed for {label}:\n{}",
                    self.program.display(),
                    errors.join("\n")
                );
            }
            return Ok(Vec::new());
        }

        let bytes = match tokio::fs::read(csv_path).await {
            Ok(bytes) if !bytes.is_empty() => bytes,
            Ok(_) => {
                warn!("  No output for {label}");
                return Ok(Vec::new());
            }
            Err(e) => {
                warn!("  No output for {label} ({e})");
                return Ok(Vec::new());
            }
        };

        match parse_csv(bytes.as_slice()) {
            Ok(rows) => {
                trace!("{label} returned {} rows: {rows:?}", rows.len());
                Ok(rows)
            }
            Err(e) => {
                warn!("  Unreadable output for {label}: {e:#}");
                Ok(Vec::new())
            }
        }
    }
}

/// Keeps the stderr lines that describe a failure, dropping Node.js runtime warnings, spinner
/// progress lines and blank lines.
fn error_lines(stderr: &str) -> Vec<&str> {
    stderr
        .trim()
        .lines()
        .filter(|line| !line.starts_with("(node:") && !line.starts_with("- "))
        .filter(|line| !line.trim().is_empty())
        .collect()
}

fn remove(path: TempPath) {
    let shown = path.to_path_buf();
    if let Err(e) = path.close() {
        if e.kind() != ErrorKind::NotFound {
            debug!("Unable to remove {}: {e}", shown.display());
        }
    }
}
