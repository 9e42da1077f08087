//! Flexible timestamp recognition under two locale conventions
//!
//! No single format string is required of the caller. The token is tried
//! against day-first layouts (German style), then month-first layouts (US
//! style), then ISO-8601. Date-only layouts yield midnight.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Layout used to render timestamps; accepted back by [`parse_datetime`]
pub const DATETIME_RENDER_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Day-first layouts with a time component
const DAY_FIRST_DATETIME: &[&str] = &[
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Day-first date-only layouts
const DAY_FIRST_DATE: &[&str] = &["%d.%m.%Y", "%d/%m/%Y", "%d-%m-%Y"];

/// Month-first layouts with a time component
const MONTH_FIRST_DATETIME: &[&str] = &[
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Month-first date-only layouts
const MONTH_FIRST_DATE: &[&str] = &["%m/%d/%Y", "%B %d, %Y", "%b %d, %Y", "%B %d %Y"];

/// ISO-8601 layouts
const ISO_DATETIME: &[&str] = &[
    DATETIME_RENDER_FORMAT,
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const ISO_DATE: &[&str] = &["%Y-%m-%d"];

/// Attempts to read a token as a timestamp.
///
/// Returns `None` when no known layout matches. Offsets in RFC 3339 input
/// are dropped and the wall-clock time is kept.
pub fn parse_datetime(token: &str) -> Option<NaiveDateTime> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    let layouts = [
        (DAY_FIRST_DATETIME, DAY_FIRST_DATE),
        (MONTH_FIRST_DATETIME, MONTH_FIRST_DATE),
        (ISO_DATETIME, ISO_DATE),
    ];
    for (datetime_layouts, date_layouts) in layouts {
        if let Some(parsed) = parse_with(token, datetime_layouts, date_layouts) {
            return Some(parsed);
        }
    }

    DateTime::parse_from_rfc3339(token)
        .ok()
        .map(|dt| dt.naive_local())
}

fn parse_with(token: &str, datetime_layouts: &[&str], date_layouts: &[&str]) -> Option<NaiveDateTime> {
    datetime_layouts
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(token, layout).ok())
        .or_else(|| {
            date_layouts
                .iter()
                .find_map(|layout| NaiveDate::parse_from_str(token, layout).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
