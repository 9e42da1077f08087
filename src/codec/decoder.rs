//! Record decoding

use crate::record::TextRecord;

use super::VALUE_SEPARATOR;

/// Decoded record plus the lines that could not be parsed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeReport {
    /// Decoded fields
    pub record: TextRecord,
    /// 1-based numbers of lines skipped for lacking `=`
    pub skipped_lines: Vec<usize>,
}

impl DecodeReport {
    /// Returns true if every non-blank line decoded
    pub fn is_clean(&self) -> bool {
        self.skipped_lines.is_empty()
    }
}

/// Decodes stored text, reporting malformed lines.
pub fn decode_with_report(text: &str) -> DecodeReport {
    let mut report = DecodeReport::default();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let Some((key, values)) = line.split_once('=') else {
            report.skipped_lines.push(index + 1);
            continue;
        };

        let values = values
            .trim()
            .split(VALUE_SEPARATOR)
            .map(str::to_string)
            .collect();
        report.record.insert(key.trim().to_string(), values);
    }

    report
}

/// Decodes stored text into a string-valued record.
pub fn decode(text: &str) -> TextRecord {
    decode_with_report(text).record
}
