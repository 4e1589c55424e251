//! Statement data model and input normalization.
//!
//! A [`Statement`] is the record under test: a declared statement type, a
//! declared predicate type, and an arbitrary predicate payload. Serde field
//! names follow the in-toto statement wire format (`_type`, `predicateType`,
//! `predicate`).
//!
//! Matchers accept statements by value or by reference. The accepted input
//! shapes form a closed set, [`StatementInput`], and every matcher runs
//! [`StatementInput::normalize`] first so all of them share one rejection
//! path for malformed input.

use serde::{Deserialize, Serialize};

use crate::errors::MatchError;

/// An attestation statement: declared type, declared predicate type, and a
/// predicate payload of arbitrary shape.
///
/// The payload type defaults to [`serde_json::Value`] but may be any
/// serializable type; matchers erase it through a JSON round-trip before
/// comparing, so only its structure matters. Matchers never mutate the
/// statement they are given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement<P = serde_json::Value> {
    /// Declared statement type identifier.
    #[serde(rename = "_type")]
    pub type_: String,
    /// Declared predicate type identifier, naming the payload's sub-schema.
    #[serde(rename = "predicateType")]
    pub predicate_type: String,
    /// The predicate payload, opaque to normalization.
    pub predicate: P,
}

/// The closed set of input shapes a matcher accepts.
///
/// `Owned` and `Borrowed` normalize identically. `Absent` is the null input
/// case and fails the match without a hard error. `Unsupported` preserves
/// the rejection path for inputs that are not statements at all; construct
/// it via [`StatementInput::unsupported`].
#[derive(Debug)]
pub enum StatementInput<'a, P = serde_json::Value> {
    /// A statement passed by value.
    Owned(Statement<P>),
    /// A statement passed by reference.
    Borrowed(&'a Statement<P>),
    /// No statement at all (a null/absent actual value).
    Absent,
    /// A value of some other runtime type.
    Unsupported {
        /// Name of the type actually supplied.
        type_name: &'static str,
    },
}

impl<'a, P> StatementInput<'a, P> {
    /// Build the rejection case for a value of type `T` that is not a
    /// statement.
    pub fn unsupported<T>() -> Self {
        StatementInput::Unsupported {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Normalize the input to a canonical statement reference.
    ///
    /// Returns `Ok(Some(_))` for by-value and by-reference statements —
    /// both yield the same reference discipline. Returns `Ok(None)` for
    /// absent input: the match fails, but as an assertion mismatch, not a
    /// hard error. Any other input shape is a usage error.
    ///
    /// # Errors
    /// Returns [`MatchError::UnsupportedInputType`] for `Unsupported`
    /// input, carrying the offending type name.
    pub fn normalize(&self) -> Result<Option<&Statement<P>>, MatchError> {
        match self {
            StatementInput::Owned(statement) => Ok(Some(statement)),
            StatementInput::Borrowed(statement) => Ok(Some(statement)),
            StatementInput::Absent => Ok(None),
            StatementInput::Unsupported { type_name } => Err(MatchError::UnsupportedInputType {
                type_name: (*type_name).to_string(),
            }),
        }
    }
}

impl<'a, P> From<Statement<P>> for StatementInput<'a, P> {
    fn from(statement: Statement<P>) -> Self {
        StatementInput::Owned(statement)
    }
}

impl<'a, P> From<&'a Statement<P>> for StatementInput<'a, P> {
    fn from(statement: &'a Statement<P>) -> Self {
        StatementInput::Borrowed(statement)
    }
}

impl<'a, P> From<Option<Statement<P>>> for StatementInput<'a, P> {
    fn from(statement: Option<Statement<P>>) -> Self {
        match statement {
            Some(statement) => StatementInput::Owned(statement),
            None => StatementInput::Absent,
        }
    }
}

impl<'a, P> From<Option<&'a Statement<P>>> for StatementInput<'a, P> {
    fn from(statement: Option<&'a Statement<P>>) -> Self {
        match statement {
            Some(statement) => StatementInput::Borrowed(statement),
            None => StatementInput::Absent,
        }
    }
}
