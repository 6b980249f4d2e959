use crate::defaults;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Active-book figures for one funding line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunderDetail {
    pub name: String,
    pub color: String,
    pub active_loans: i64,
    pub current_principal: i64,
    /// Always zero: missed payments are not broken down by funding line in the source tables.
    pub arrears_count: i64,
    pub avg_rate: f64,
}

/// A funding line's drawn amount against its credit limit.
///
/// `current` and `limit` are kept as JSON numbers so that values read from a funders file are
/// written back exactly as given. Keys other than the four known ones are carried through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunderLimit {
    name: String,
    current: Number,
    limit: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl FunderLimit {
    pub fn new(
        name: impl Into<String>,
        current: impl Into<Number>,
        limit: impl Into<Number>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            current: current.into(),
            limit: limit.into(),
            color: Some(color.into()),
            extra: Map::new(),
        }
    }

    /// Fills in the color from the known funder table when the entry does not specify one.
    pub(crate) fn with_default_color(mut self) -> Self {
        if self.color.is_none() {
            self.color = Some(defaults::funder_color(&self.name).to_string());
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current(&self) -> &Number {
        &self.current
    }

    pub fn limit(&self) -> &Number {
        &self.limit
    }

    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or(defaults::UNKNOWN_FUNDER_COLOR)
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}
