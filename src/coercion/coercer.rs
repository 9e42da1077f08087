//! Ordered coercion of a raw token

use super::boolean::parse_boolean;
use super::datetime::parse_datetime;
use super::number::parse_number;
use super::value::TypedValue;

/// Coerces a raw token into its most specific [`TypedValue`].
///
/// Surrounding whitespace is ignored. Never fails; unrecognized tokens come
/// back as `Text`.
pub fn coerce(raw: &str) -> TypedValue {
    let token = raw.trim();

    if let Some(number) = parse_number(token) {
        return TypedValue::Number(number);
    }
    if let Some(datetime) = parse_datetime(token) {
        return TypedValue::DateTime(datetime);
    }
    if let Some(flag) = parse_boolean(token) {
        return TypedValue::Boolean(flag);
    }

    TypedValue::Text(token.to_string())
}
