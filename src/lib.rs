//! Attest Matchers — structural assertions for attestation statements.
//!
//! Custom test matchers for in-toto style statements: a declared statement
//! type, a declared predicate type, and an arbitrary predicate payload.
//! Matchers compare structure, not concrete types — predicates are erased
//! through a JSON round-trip before comparison, so a typed record and a
//! generic map with the same fields are equal.
//!
//! Three constructors are exposed:
//!
//! - [`be_statement_of_type`] — declared type and predicate type match
//!   expected strings exactly.
//! - [`have_predicate`] — the predicate structurally equals an expected
//!   value.
//! - [`have_predicate_satisfying`] — the predicate decodes into a
//!   caller-chosen type and is handed to a callback for nested assertions.
//!
//! Each matcher is single-shot: construct one per assertion. A matcher only
//! retains a rendered snapshot of the last input for its failure messages.
//!
//! ```
//! use attest_matchers::{be_statement_of_type, have_predicate, Matcher, Statement};
//! use serde_json::json;
//!
//! let statement = Statement {
//!     type_: "https://example/v1".into(),
//!     predicate_type: "https://example/predicate/v1".into(),
//!     predicate: json!({"name": "a", "count": 3}),
//! };
//!
//! let mut matcher = be_statement_of_type("https://example/v1", "https://example/predicate/v1");
//! assert!(matcher.matches((&statement).into()).unwrap());
//!
//! let mut matcher = have_predicate(json!({"count": 3, "name": "a"}));
//! assert!(matcher.matches((&statement).into()).unwrap());
//! ```

/// Error types for matcher operations.
pub mod errors;

/// The matcher capability set: match, failure message, negated message.
pub mod matcher;

/// The three statement matchers.
pub mod matchers;

/// Statement data model, input normalization.
pub mod statement;

/// Failure message rendering.
mod format;

pub use errors::MatchError;
pub use matcher::Matcher;
pub use matchers::{
    be_statement_of_type, have_predicate, have_predicate_satisfying, ExactPredicateMatcher,
    ShapedPredicateMatcher, StatementTypeMatcher,
};
pub use statement::{Statement, StatementInput};
