//! Exact predicate matcher.
//!
//! The statement's predicate is serialized to interchange bytes and decoded
//! back into a type-erased [`serde_json::Value`]; the expected value is
//! erased the same way. The round-trip is deliberate: it removes incidental
//! type differences (a concrete record vs. a generic map with the same
//! fields) so structural equality, not type identity, governs the
//! comparison. A predicate that cannot be encoded at all is a hard error,
//! not a mismatch.

use serde::Serialize;
use serde_json::Value;

use crate::errors::MatchError;
use crate::format;
use crate::matcher::Matcher;
use crate::statement::StatementInput;

/// Expect a statement's predicate to structurally equal `expected`.
pub fn have_predicate<E: Serialize>(expected: E) -> ExactPredicateMatcher<E> {
    ExactPredicateMatcher {
        expected,
        actual_predicate: None,
    }
}

/// Matcher produced by [`have_predicate`].
pub struct ExactPredicateMatcher<E> {
    expected: E,
    actual_predicate: Option<String>,
}

impl<E: Serialize> ExactPredicateMatcher<E> {
    /// Diagnostic for a failed positive match, showing both predicates.
    pub fn failure_message(&self) -> String {
        format::message_with_value(
            self.actual_predicate.as_deref().unwrap_or(format::ABSENT),
            "to be",
            &format::render(&self.expected),
        )
    }

    /// Diagnostic for a failed negated match.
    pub fn negated_failure_message(&self) -> String {
        format::message_with_value(
            self.actual_predicate.as_deref().unwrap_or(format::ABSENT),
            "to NOT be",
            &format::render(&self.expected),
        )
    }
}

impl<P: Serialize, E: Serialize> Matcher<P> for ExactPredicateMatcher<E> {
    fn matches(&mut self, actual: StatementInput<'_, P>) -> Result<bool, MatchError> {
        let statement = match actual.normalize()? {
            Some(statement) => statement,
            None => {
                self.actual_predicate = Some(format::ABSENT.to_string());
                return Ok(false);
            }
        };
        // Round-trip the predicate through interchange bytes to erase its
        // in-memory type before comparing.
        let raw = serde_json::to_vec(&statement.predicate)?;
        let actual_value: Value = serde_json::from_slice(&raw)?;
        self.actual_predicate = Some(format::render(&actual_value));

        let expected_value = serde_json::to_value(&self.expected)?;
        Ok(actual_value == expected_value)
    }

    fn failure_message(&self) -> String {
        ExactPredicateMatcher::failure_message(self)
    }

    fn negated_failure_message(&self) -> String {
        ExactPredicateMatcher::negated_failure_message(self)
    }
}
