//! Date and number formatting for the workspace.

use chrono::{DateTime, Utc};

/// `Dec 20, 2024`
pub fn short_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// `December 20, 2024 at 10:30 AM`
pub fn long_date(at: &DateTime<Utc>) -> String {
    at.format("%B %-d, %Y at %I:%M %p").to_string()
}

/// Elevation in meters with an explicit sign for non-negative values.
pub fn elevation(mark: f64) -> String {
    // Folds -0.0 into +0.0.
    let mark = mark + 0.0;
    if mark >= 0.0 {
        format!("+{mark:.3}")
    } else {
        format!("{mark:.3}")
    }
}

/// Weight in kilograms with one decimal.
pub fn weight(kg: f64) -> String {
    format!("{kg:.1}")
}
