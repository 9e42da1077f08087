//! Compiled query predicate

use regex::{Regex, RegexBuilder};

use crate::record::TextRecord;

use super::errors::{QueryError, QueryResult};

/// One query key with its compiled value patterns
#[derive(Debug, Clone)]
struct Clause {
    key: String,
    namespaced_suffix: String,
    patterns: Vec<Regex>,
}

impl Clause {
    /// Values under the exact key, else under the first key ending in `.{key}`
    fn resolve<'a>(&self, target: &'a TextRecord) -> Option<&'a Vec<String>> {
        target.get(&self.key).or_else(|| {
            target
                .iter()
                .find(|(key, _)| key.ends_with(&self.namespaced_suffix))
                .map(|(_, values)| values)
        })
    }
}

/// A query compiled once and tested against many stored records.
#[derive(Debug, Clone, Default)]
pub struct QueryMatcher {
    clauses: Vec<Clause>,
}

impl QueryMatcher {
    /// Compiles every query value as a case-insensitive pattern.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::InvalidPattern` for the first value that is not
    /// a valid regular expression.
    pub fn compile(query: &TextRecord) -> QueryResult<Self> {
        let mut clauses = Vec::with_capacity(query.len());

        for (key, values) in query {
            let patterns = values
                .iter()
                .map(|value| {
                    let pattern = value.to_lowercase();
                    RegexBuilder::new(&pattern)
                        .case_insensitive(true)
                        .build()
                        .map_err(|e| QueryError::InvalidPattern {
                            key: key.clone(),
                            pattern,
                            reason: e.to_string(),
                        })
                })
                .collect::<QueryResult<Vec<_>>>()?;

            clauses.push(Clause {
                key: key.clone(),
                namespaced_suffix: format!(".{}", key),
                patterns,
            });
        }

        Ok(Self { clauses })
    }

    /// Returns true if the query has no keys (and so matches nothing)
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Tests a stored record against the query.
    pub fn matches(&self, target: &TextRecord) -> bool {
        self.clauses.iter().any(|clause| {
            let Some(target_values) = clause.resolve(target) else {
                return false;
            };
            let cleaned: Vec<String> = target_values.iter().map(|v| clean_target_value(v)).collect();

            clause
                .patterns
                .iter()
                .any(|pattern| cleaned.iter().any(|value| pattern.is_match(value)))
        })
    }
}

/// Lower-cases a stored value and removes parentheses.
pub fn clean_target_value(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| *c != '(' && *c != ')')
        .collect()
}

/// Compiles `query` and tests it against `target` in one step.
///
/// # Errors
///
/// Returns `QueryError::InvalidPattern` if a query value is not a valid
/// regular expression.
pub fn matches(query: &TextRecord, target: &TextRecord) -> QueryResult<bool> {
    Ok(QueryMatcher::compile(query)?.matches(target))
}
