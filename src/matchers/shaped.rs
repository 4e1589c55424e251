//! Shaped predicate matcher.
//!
//! Decodes the statement's predicate into a caller-chosen concrete type and
//! hands it to a callback for nested assertions. The target shape is a
//! generic type parameter at the call site; decoding goes through the same
//! interchange bytes as the exact matcher. A predicate whose schema does not
//! fit the target shape is a hard error — a stronger, earlier failure than a
//! value mismatch — carrying the raw interchange text for diagnosis.
//!
//! Once the predicate decodes, this matcher reports success; the callback's
//! own assertions carry the actual pass/fail semantics and propagate through
//! the host framework's panic mechanism.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::MatchError;
use crate::format;
use crate::matcher::Matcher;
use crate::statement::StatementInput;

/// Expect a statement's predicate to decode into `T` and satisfy the
/// callback's nested assertions.
///
/// ```
/// use attest_matchers::{have_predicate_satisfying, Matcher, Statement};
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Deserialize)]
/// struct BuildInfo {
///     name: String,
///     count: u32,
/// }
///
/// let statement = Statement {
///     type_: "https://example/v1".into(),
///     predicate_type: "https://example/predicate/v1".into(),
///     predicate: json!({"name": "a", "count": 3}),
/// };
///
/// let mut matcher = have_predicate_satisfying(|info: BuildInfo| {
///     assert_eq!(info.name, "a");
///     assert_eq!(info.count, 3);
/// });
/// assert!(matcher.matches((&statement).into()).unwrap());
/// ```
pub fn have_predicate_satisfying<T, F>(callback: F) -> ShapedPredicateMatcher<T, F>
where
    T: DeserializeOwned,
    F: FnMut(T),
{
    ShapedPredicateMatcher {
        callback,
        actual_predicate: None,
        shape: PhantomData,
    }
}

/// Matcher produced by [`have_predicate_satisfying`].
pub struct ShapedPredicateMatcher<T, F> {
    callback: F,
    actual_predicate: Option<String>,
    shape: PhantomData<fn(T)>,
}

impl<T, F> ShapedPredicateMatcher<T, F> {
    /// Diagnostic for a failed positive match.
    pub fn failure_message(&self) -> String {
        format::message(
            self.actual_predicate.as_deref().unwrap_or(format::ABSENT),
            "to satisfy custom test via callback",
        )
    }

    /// Diagnostic for a failed negated match.
    pub fn negated_failure_message(&self) -> String {
        format::message(
            self.actual_predicate.as_deref().unwrap_or(format::ABSENT),
            "to NOT satisfy custom test via callback",
        )
    }
}

impl<P, T, F> Matcher<P> for ShapedPredicateMatcher<T, F>
where
    P: Serialize,
    T: DeserializeOwned,
    F: FnMut(T),
{
    fn matches(&mut self, actual: StatementInput<'_, P>) -> Result<bool, MatchError> {
        let statement = match actual.normalize()? {
            Some(statement) => statement,
            None => {
                self.actual_predicate = Some(format::ABSENT.to_string());
                return Ok(false);
            }
        };
        let raw = serde_json::to_vec(&statement.predicate)?;
        self.actual_predicate = Some(format::render(&statement.predicate));

        let decoded: T =
            serde_json::from_slice(&raw).map_err(|source| MatchError::ShapeMismatch {
                raw: String::from_utf8_lossy(&raw).into_owned(),
                source,
            })?;

        (self.callback)(decoded);
        Ok(true)
    }

    fn failure_message(&self) -> String {
        ShapedPredicateMatcher::failure_message(self)
    }

    fn negated_failure_message(&self) -> String {
        ShapedPredicateMatcher::negated_failure_message(self)
    }
}
