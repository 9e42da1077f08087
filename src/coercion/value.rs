//! Typed value produced by coercion

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::datetime::DATETIME_RENDER_FORMAT;

/// A coerced value. Exactly one variant is active per token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum TypedValue {
    /// 64-bit floating point number
    Number(f64),
    /// Calendar timestamp without timezone
    DateTime(NaiveDateTime),
    /// Boolean
    Boolean(bool),
    /// Free text (fallback)
    Text(String),
}

impl TypedValue {
    /// Returns the tag name used in hashing and JSON output
    pub fn type_name(&self) -> &'static str {
        match self {
            TypedValue::Number(_) => "number",
            TypedValue::DateTime(_) => "datetime",
            TypedValue::Boolean(_) => "boolean",
            TypedValue::Text(_) => "text",
        }
    }

    /// Returns the on-disk rendering of this value
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Number(n) => write!(f, "{}", n),
            TypedValue::DateTime(dt) => write!(f, "{}", dt.format(DATETIME_RENDER_FORMAT)),
            TypedValue::Boolean(b) => write!(f, "{}", b),
            TypedValue::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_number_rendering() {
        assert_eq!(TypedValue::Number(1234.56).render(), "1234.56");
        assert_eq!(TypedValue::Number(1234.0).render(), "1234");
        assert_eq!(TypedValue::Number(-0.5).render(), "-0.5");
    }

    #[test]
    fn test_boolean_rendering_is_lowercase() {
        assert_eq!(TypedValue::Boolean(true).render(), "true");
        assert_eq!(TypedValue::Boolean(false).render(), "false");
    }

    #[test]
    fn test_datetime_rendering() {
        let dt = NaiveDate::from_ymd_opt(2021, 3, 4)
            .unwrap()
            .and_hms_opt(5, 6, 7)
            .unwrap();
        assert_eq!(TypedValue::DateTime(dt).render(), "2021-03-04T05:06:07");
    }

    #[test]
    fn test_text_rendered_as_is() {
        assert_eq!(TypedValue::Text("  a|b ".into()).render(), "  a|b ");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(TypedValue::Boolean(true)).unwrap();
        assert_eq!(json["type"], "boolean");
        assert_eq!(json["value"], true);
    }
}
