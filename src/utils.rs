use crate::Result;
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Write a file, replacing whatever was there.
pub(crate) async fn write(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<()> {
    let path = path.as_ref();
    tokio::fs::write(path, contents)
        .await
        .context(format!("Unable to write to {}", path.to_string_lossy()))
}

/// Read a file to a `String`.
pub(crate) async fn read(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read file at {}", path.display()))
}

/// Deserialize a JSON file into type `T`.
pub(crate) async fn deserialize<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    let content = read(path).await?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file at {}", path.display()))
}

/// Create a directory and any missing parents. Succeeds if it already exists.
pub(crate) async fn make_dir(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path)
        .await
        .with_context(|| format!("Unable to create directory at {}", path.to_string_lossy()))
}

/// Formats a number with thousands separators and no decimal places, e.g. `1,148,000,000`.
pub(crate) fn thousands(n: f64) -> String {
    format_num::format_num!(",.0f", n)
}

/// Collapses every run of whitespace, including newlines, into a single space.
pub(crate) fn one_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_line() {
        let sql = "SELECT\n  a,\n\tb\nFROM   t\n";
        assert_eq!(one_line(sql), "SELECT a, b FROM t");
    }

    #[test]
    fn test_one_line_empty() {
        assert_eq!(one_line("  \n "), "");
    }

    #[tokio::test]
    async fn test_make_dir_nested_and_existing() {
        let dir = tempfile::TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        make_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
        make_dir(&nested).await.unwrap();
    }

    #[tokio::test]
    async fn test_deserialize_bad_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        write(&path, "{ not json").await.unwrap();
        let result: Result<serde_json::Value> = deserialize(&path).await;
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Failed to parse JSON file"));
    }
}
