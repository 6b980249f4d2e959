//! Static configuration compiled into the binary: funder display colors and the fallback datasets
//! used when a query yields nothing usable.

use crate::model::{ExtendedScalars, FunderLimit, MonthlyPoint};

/// The color given to any funder that is not in [`FUNDER_COLORS`].
pub const UNKNOWN_FUNDER_COLOR: &str = "#FFFFFF";

/// Display color for each known funding line.
pub const FUNDER_COLORS: [(&str, &str); 8] = [
    ("Aston", "#00FF88"),
    ("Pluto", "#C8A864"),
    ("Peony", "#00E5CC"),
    ("Topaz", "#FFFF00"),
    ("Quartz", "#FFFFFF"),
    ("Maguire", "#FF6B6B"),
    ("Furnace", "#FF9F43"),
    ("Stalagmite", "#A78BFA"),
];

/// A funding line's drawn amount and limit, used when no funders file is given.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DefaultFunder {
    pub name: &'static str,
    pub current: u64,
    pub limit: u64,
}

pub const DEFAULT_FUNDERS: [DefaultFunder; 5] = [
    DefaultFunder {
        name: "Aston",
        current: 1_040_000_000,
        limit: 1_920_000_000,
    },
    DefaultFunder {
        name: "Pluto",
        current: 27_000_000,
        limit: 30_000_000,
    },
    DefaultFunder {
        name: "Peony",
        current: 16_700_000,
        limit: 100_000_000,
    },
    DefaultFunder {
        name: "Topaz",
        current: 71_300_000,
        limit: 240_000_000,
    },
    DefaultFunder {
        name: "Quartz",
        current: 49_000_000,
        limit: 150_000_000,
    },
];

/// Completions per month, oldest first.
pub const DEFAULT_MONTHLY_COMPLETIONS: [(&str, i64); 6] = [
    ("Sep", 139),
    ("Oct", 187),
    ("Nov", 154),
    ("Dec", 186),
    ("Jan", 130),
    ("Feb", 73),
];

pub const DEFAULT_EXTENDED_SCALARS: ExtendedScalars = ExtendedScalars {
    avg_loan_size: 255_070,
    avg_ltv: 72.0,
    purchase_count: 4552,
    remortgage_count: 329,
    offer_to_completion_rate: 84.0,
    avg_days_offer_to_completion: 89,
    total_book_size: 1_148_000_000,
    arrears_count: 23,
    weighted_avg_rate: 5.45,
    income_booster_pct: 37.0,
};

/// Looks up the display color for `name`, falling back to [`UNKNOWN_FUNDER_COLOR`].
pub fn funder_color(name: &str) -> &'static str {
    FUNDER_COLORS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, color)| *color)
        .unwrap_or(UNKNOWN_FUNDER_COLOR)
}

pub fn monthly_completions() -> Vec<MonthlyPoint> {
    DEFAULT_MONTHLY_COMPLETIONS
        .iter()
        .map(|(month, value)| MonthlyPoint::new(*month, *value))
        .collect()
}

pub fn funder_limits() -> Vec<FunderLimit> {
    DEFAULT_FUNDERS
        .iter()
        .map(|f| FunderLimit::new(f.name, f.current, f.limit, funder_color(f.name)))
        .collect()
}
