//! Locale-ambiguous number recognition
//!
//! Both `.` and `,` are candidate separators. When a token carries more than
//! one separator, every separator but the last is a thousands group and the
//! last is the decimal mark. A single separator is a decimal mark unless it
//! follows a short leading group and precedes exactly three digits, in which
//! case it is read as a thousands group (`1,234` is 1234, `12,34` is 12.34).
//!
//! After normalization the token uses `,` as its decimal mark and is parsed
//! with that convention.

/// Separator characters treated as either thousands or decimal marks
const SEPARATORS: [char; 2] = ['.', ','];

/// Normalized decimal mark
const DECIMAL_MARK: char = ',';

/// Rewrites a token so that `,` is its only separator and marks the decimals.
pub fn normalize_separators(token: &str) -> String {
    let separator_count = token.chars().filter(|c| SEPARATORS.contains(c)).count();
    let segments: Vec<&str> = token.split(|c: char| SEPARATORS.contains(&c)).collect();

    let mut number = if separator_count > 1 {
        let (last, groups) = match segments.split_last() {
            Some(split) => split,
            None => return String::new(),
        };
        format!("{}{}{}", groups.concat(), DECIMAL_MARK, last)
    } else {
        token.to_string()
    };
    number = number.replace('.', ",");

    let first_len = number.split(DECIMAL_MARK).next().map_or(0, |s| s.chars().count());
    let last_len = number
        .rsplit(DECIMAL_MARK)
        .next()
        .map_or(0, |s| s.chars().count());
    if first_len < 4 && last_len == 3 {
        number = number.replace(DECIMAL_MARK, "");
    }

    number
}

/// Parses a token as a number, resolving European and US separators.
///
/// Returns `None` for tokens that contain no digits or anything besides
/// digits, separators and a sign.
pub fn parse_number(token: &str) -> Option<f64> {
    if token.is_empty() {
        return None;
    }
    parse_comma_decimal(&normalize_separators(token))
}

/// Parses `[sign]digits[,digits]` (sign may also trail) with `,` as decimal mark.
fn parse_comma_decimal(number: &str) -> Option<f64> {
    let mut body = number.trim();
    let mut negative = false;

    if let Some(rest) = body.strip_prefix('-') {
        negative = true;
        body = rest;
    } else if let Some(rest) = body.strip_prefix('+') {
        body = rest;
    } else if let Some(rest) = body.strip_suffix('-') {
        negative = true;
        body = rest;
    } else if let Some(rest) = body.strip_suffix('+') {
        body = rest;
    }

    let (integral, fraction) = match body.split_once(DECIMAL_MARK) {
        Some((integral, fraction)) => (integral, fraction),
        None => (body, ""),
    };

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(integral) || !all_digits(fraction) {
        return None;
    }
    if integral.is_empty() && fraction.is_empty() {
        return None;
    }

    let literal = format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        if integral.is_empty() { "0" } else { integral },
        if fraction.is_empty() { "0" } else { fraction },
    );
    literal.parse::<f64>().ok().filter(|n| n.is_finite())
}
