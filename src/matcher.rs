//! The matcher capability set.
//!
//! Every statement matcher exposes the same three operations: a fallible
//! boolean match plus a failure message for each polarity. The host test
//! framework decides polarity and displays the corresponding message.

use crate::errors::MatchError;
use crate::statement::StatementInput;

/// A single-shot statement assertion.
///
/// `Ok(false)` is an assertion mismatch — the statement is well-formed but
/// its content does not satisfy the expectation — and the failure messages
/// describe it. `Err(_)` is a hard error (malformed input, unencodable
/// predicate) that aborts the assertion.
///
/// Matchers cache a rendered snapshot of the last input so the failure
/// messages can show it; they carry no other state between calls. Construct
/// a fresh matcher per assertion.
pub trait Matcher<P = serde_json::Value> {
    /// Run the match against an actual input.
    ///
    /// # Errors
    /// Returns a [`MatchError`] for usage and encoding failures, never for
    /// ordinary mismatches.
    fn matches(&mut self, actual: StatementInput<'_, P>) -> Result<bool, MatchError>;

    /// Diagnostic shown when the match was expected to succeed but did not.
    fn failure_message(&self) -> String;

    /// Diagnostic shown when the match was expected to fail but succeeded.
    fn negated_failure_message(&self) -> String;
}
