//! Natural-language boolean recognition (English and German)

/// Literals read as `true`
const AFFIRMATIVE: [&str; 3] = ["true", "ja", "yes"];

/// Literals read as `false`
const NEGATIVE: [&str; 3] = ["false", "nein", "no"];

/// Case-insensitively matches a token against the boolean literal sets.
///
/// Polarity follows set membership: `ja` is `true`, `nein` is `false`.
pub fn parse_boolean(token: &str) -> Option<bool> {
    let lowered = token.to_lowercase();
    if AFFIRMATIVE.contains(&lowered.as_str()) {
        Some(true)
    } else if NEGATIVE.contains(&lowered.as_str()) {
        Some(false)
    } else {
        None
    }
}
