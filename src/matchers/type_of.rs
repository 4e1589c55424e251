//! Declared-type matcher.
//!
//! Compares a statement's declared type and declared predicate type against
//! expected strings with exact equality. The declared type is checked first
//! and a mismatch short-circuits, so diagnostics are deterministic and
//! minimal.

use serde::Serialize;

use crate::errors::MatchError;
use crate::format;
use crate::matcher::Matcher;
use crate::statement::StatementInput;

/// Expect a statement's declared type and predicate type to equal the given
/// strings exactly.
pub fn be_statement_of_type(
    expected_type: impl Into<String>,
    expected_predicate_type: impl Into<String>,
) -> StatementTypeMatcher {
    StatementTypeMatcher {
        expected_type: expected_type.into(),
        expected_predicate_type: expected_predicate_type.into(),
        actual: None,
    }
}

/// Matcher produced by [`be_statement_of_type`].
pub struct StatementTypeMatcher {
    expected_type: String,
    expected_predicate_type: String,
    actual: Option<String>,
}

impl StatementTypeMatcher {
    /// Diagnostic for a failed positive match. States both expected values
    /// so one line communicates the complete expectation.
    pub fn failure_message(&self) -> String {
        format::message(
            self.actual.as_deref().unwrap_or(format::ABSENT),
            &self.expectation(false),
        )
    }

    /// Diagnostic for a failed negated match.
    pub fn negated_failure_message(&self) -> String {
        format::message(
            self.actual.as_deref().unwrap_or(format::ABSENT),
            &self.expectation(true),
        )
    }

    fn expectation(&self, negated: bool) -> String {
        format!(
            "to {}be a statement of type {:?} with predicate type {:?}",
            if negated { "NOT " } else { "" },
            self.expected_type,
            self.expected_predicate_type,
        )
    }
}

impl<P: Serialize> Matcher<P> for StatementTypeMatcher {
    fn matches(&mut self, actual: StatementInput<'_, P>) -> Result<bool, MatchError> {
        let statement = match actual.normalize()? {
            Some(statement) => statement,
            None => {
                self.actual = Some(format::ABSENT.to_string());
                return Ok(false);
            }
        };
        self.actual = Some(format::render(statement));
        if statement.type_ != self.expected_type {
            return Ok(false);
        }
        Ok(statement.predicate_type == self.expected_predicate_type)
    }

    fn failure_message(&self) -> String {
        StatementTypeMatcher::failure_message(self)
    }

    fn negated_failure_message(&self) -> String {
        StatementTypeMatcher::negated_failure_message(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::Statement;
    use serde_json::json;

    const STATEMENT_TYPE: &str = "https://in-toto.io/Statement/v1";
    const PREDICATE_TYPE: &str = "https://example/predicate/v1";

    fn sample() -> Statement {
        Statement {
            type_: STATEMENT_TYPE.into(),
            predicate_type: PREDICATE_TYPE.into(),
            predicate: json!({"name": "a"}),
        }
    }

    #[test]
    fn matches_when_both_types_equal() {
        let statement = sample();
        let mut matcher = be_statement_of_type(STATEMENT_TYPE, PREDICATE_TYPE);
        assert!(matcher.matches((&statement).into()).unwrap());
    }

    #[test]
    fn matches_by_value_and_by_reference_identically() {
        let statement = sample();
        let mut matcher = be_statement_of_type(STATEMENT_TYPE, PREDICATE_TYPE);
        assert!(matcher.matches((&statement).into()).unwrap());
        let mut matcher = be_statement_of_type(STATEMENT_TYPE, PREDICATE_TYPE);
        assert!(matcher.matches(statement.into()).unwrap());
    }

    #[test]
    fn rejects_wrong_statement_type() {
        let statement = sample();
        let mut matcher = be_statement_of_type("https://other/v1", PREDICATE_TYPE);
        assert!(!matcher.matches((&statement).into()).unwrap());
    }

    #[test]
    fn rejects_wrong_predicate_type() {
        let statement = sample();
        let mut matcher = be_statement_of_type(STATEMENT_TYPE, "https://other/predicate/v1");
        assert!(!matcher.matches((&statement).into()).unwrap());
    }

    #[test]
    fn rejects_when_both_types_differ() {
        let statement = sample();
        let mut matcher = be_statement_of_type("a", "b");
        assert!(!matcher.matches((&statement).into()).unwrap());
    }

    #[test]
    fn absent_input_is_mismatch_not_error() {
        let mut matcher = be_statement_of_type(STATEMENT_TYPE, PREDICATE_TYPE);
        let absent: StatementInput = None::<&Statement>.into();
        assert!(!matcher.matches(absent).unwrap());
        let message = matcher.failure_message();
        assert!(message.contains("<none>"), "{message}");
    }

    #[test]
    fn unsupported_input_is_hard_error() {
        let mut matcher = be_statement_of_type(STATEMENT_TYPE, PREDICATE_TYPE);
        let result = matcher.matches(StatementInput::<serde_json::Value>::unsupported::<u32>());
        assert!(matches!(
            result,
            Err(MatchError::UnsupportedInputType { .. })
        ));
    }

    #[test]
    fn failure_message_states_both_expected_values() {
        let statement = sample();
        let mut matcher = be_statement_of_type(STATEMENT_TYPE, "https://other/predicate/v1");
        assert!(!matcher.matches((&statement).into()).unwrap());
        let message = matcher.failure_message();
        assert!(message.contains(STATEMENT_TYPE), "{message}");
        assert!(message.contains("https://other/predicate/v1"), "{message}");
        // The actual statement is shown in wire form.
        assert!(message.contains("predicateType"), "{message}");
    }

    #[test]
    fn negated_failure_message_is_symmetric() {
        let statement = sample();
        let mut matcher = be_statement_of_type(STATEMENT_TYPE, PREDICATE_TYPE);
        assert!(matcher.matches((&statement).into()).unwrap());
        let message = matcher.negated_failure_message();
        assert!(message.contains("to NOT be a statement of type"), "{message}");
        assert!(message.contains(PREDICATE_TYPE), "{message}");
    }
}
