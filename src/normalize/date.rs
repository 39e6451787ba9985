use std::borrow::Cow;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static DAY_MONTH_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}\.\d{1,2}\.\d{4}$").expect("valid date regex"));

/// Turn a `MM.YYYY` value into `01.MM.YYYY`; anything else is returned unchanged.
///
/// Two dot-separated components are always read as month and year, without
/// checking that they look plausible.
pub fn expand_month_year(raw: &str) -> Cow<'_, str> {
    if raw.split('.').count() == 2 {
        Cow::Owned(format!("01.{raw}"))
    } else {
        Cow::Borrowed(raw)
    }
}

/// Parse a spreadsheet date (`DD.MM.YYYY`, `D.M.YYYY` or `MM.YYYY`).
///
/// Returns `None` when the value does not have that shape or names a day
/// that does not exist.
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let expanded = expand_month_year(raw.trim());
    if !DAY_MONTH_YEAR.is_match(&expanded) {
        return None;
    }
    NaiveDate::parse_from_str(&expanded, "%d.%m.%Y").ok()
}
