//! Numeric coercion of the string cells produced by the query tool.
//!
//! The tool reports every value as text and numeric aggregates often come back with a fractional
//! part even when they are whole (`"139.0"`), so integers are parsed as floats first and then
//! truncated toward zero.

use crate::Result;
use anyhow::{bail, Context};

/// Parses `s` as a float and truncates it to an integer, e.g. `"3.0"` -> `3`, `"-2.9"` -> `-2`.
pub(crate) fn int(s: &str) -> Result<i64> {
    let f = float(s)?;
    if f < i64::MIN as f64 || f > i64::MAX as f64 {
        bail!("Value '{s}' is out of range for an integer");
    }
    Ok(f.trunc() as i64)
}

/// Parses `s` as a finite float. Surrounding whitespace is ignored.
pub(crate) fn float(s: &str) -> Result<f64> {
    let trimmed = s.trim();
    let f: f64 = trimmed
        .parse()
        .with_context(|| format!("Unable to parse '{s}' as a number"))?;
    if !f.is_finite() {
        bail!("Value '{s}' is not a finite number");
    }
    Ok(f)
}
