//! Value coercion subsystem for crawlstore
//!
//! Converts a single free-text token into the most specific primitive it
//! represents. Attempts run in a fixed order and the first success wins:
//!
//! 1. Number (European and US separator conventions)
//! 2. DateTime (day-first, month-first and ISO-8601 layouts)
//! 3. Boolean (`true`/`ja`/`yes` and `false`/`nein`/`no`)
//! 4. Text (fallback, never fails)
//!
//! Coercion is total: every token yields exactly one [`TypedValue`].

mod boolean;
mod coercer;
mod datetime;
mod number;
mod value;

pub use boolean::parse_boolean;
pub use coercer::coerce;
pub use datetime::{parse_datetime, DATETIME_RENDER_FORMAT};
pub use number::{normalize_separators, parse_number};
pub use value::TypedValue;
