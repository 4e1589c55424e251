//! The three statement matchers.
//!
//! All of them normalize their input through
//! [`StatementInput::normalize`](crate::statement::StatementInput::normalize)
//! before comparing, so null and non-statement inputs are rejected the same
//! way everywhere.

pub mod exact;
pub mod shaped;
pub mod type_of;

pub use exact::{have_predicate, ExactPredicateMatcher};
pub use shaped::{have_predicate_satisfying, ShapedPredicateMatcher};
pub use type_of::{be_statement_of_type, StatementTypeMatcher};
