//! Record encoding

use crate::coercion::TypedValue;
use crate::record::NormalizedRecord;

use super::{KEY_SEPARATOR, LINE_TERMINATOR, VALUE_SEPARATOR};

/// Encodes one field as `key = v1|v2|...` without terminator.
pub fn encode_line(key: &str, values: &[TypedValue]) -> String {
    let rendered: Vec<String> = values.iter().map(TypedValue::render).collect();
    format!(
        "{}{}{}",
        key,
        KEY_SEPARATOR,
        rendered.join(VALUE_SEPARATOR)
    )
}

/// Encodes a record, one terminated line per key in record order.
pub fn encode(record: &NormalizedRecord) -> String {
    let mut content = String::new();
    for (key, values) in record {
        content.push_str(&encode_line(key, values));
        content.push_str(LINE_TERMINATOR);
    }
    content
}
