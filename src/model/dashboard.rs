use crate::model::{CoreMetrics, ExtendedMetrics, FunderLimit};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The document written for the dashboard renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub metrics: CoreMetrics,
    pub extended: ExtendedMetrics,
    pub funders: Vec<FunderLimit>,
    pub as_of_date: String,
}

impl Dashboard {
    pub fn new(
        metrics: CoreMetrics,
        extended: ExtendedMetrics,
        funders: Vec<FunderLimit>,
        date: NaiveDate,
    ) -> Self {
        Self {
            metrics,
            extended,
            funders,
            as_of_date: as_of_date(date),
        }
    }

    /// Pretty-printed JSON with two-space indentation and no trailing newline.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Formats `date` the way the dashboard shows it, e.g. `7 Feb 2026`.
pub fn as_of_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_as_of_date_has_no_leading_zero() {
        assert_eq!(as_of_date(date(2026, 2, 7)), "7 Feb 2026");
        assert_eq!(as_of_date(date(2025, 12, 25)), "25 Dec 2025");
    }

    #[test]
    fn test_top_level_keys() {
        let dashboard = Dashboard::new(
            CoreMetrics::default(),
            ExtendedMetrics::default(),
            defaults::funder_limits(),
            date(2026, 10, 17),
        );
        let json = dashboard.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["metrics", "extended", "funders", "as_of_date"]);
        assert_eq!(value["as_of_date"], "17 Oct 2026");
        assert!(json.starts_with("{\n  \"metrics\": {\n    \"completions\": 0,"));
        assert!(!json.ends_with('\n'));
    }
}
