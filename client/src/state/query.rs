//! Query validation.
//!
//! Nothing reaches the network unless it survives [`validate`].

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Notice shown when the user submits an empty query.
pub const EMPTY_QUERY_NOTICE: &str = "Inserisci una query valida";

/// A query that is non-empty after trimming.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrimmedQuery(String);

impl TrimmedQuery {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", EMPTY_QUERY_NOTICE)]
    EmptyQuery,
}

/// Trim `query` and reject it when nothing is left.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyQuery`] for empty or whitespace-only input.
pub fn validate(query: &str) -> Result<TrimmedQuery, ValidationError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyQuery);
    }
    Ok(TrimmedQuery(trimmed.to_owned()))
}
