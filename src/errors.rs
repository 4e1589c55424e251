//! Error types for attest-matchers.
//!
//! Hard errors are distinct from assertion mismatches. A mismatch is an
//! ordinary `Ok(false)` with a diagnostic message; a [`MatchError`] means the
//! assertion itself is unusable — the input is not a statement, or the
//! predicate cannot travel through the interchange encoding — and must abort
//! the assertion with a cause instead of reading as "values differ".

/// Unified error type for all matcher operations.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// The input is neither a by-value nor a by-reference statement.
    /// Carries the offending type name so the test author can fix the call.
    #[error("unexpected input type {type_name}, should be a Statement passed by value or by reference")]
    UnsupportedInputType {
        /// Name of the runtime type actually supplied.
        type_name: String,
    },

    /// The predicate is not representable in the interchange format.
    #[error("cannot encode predicate to interchange form: {0}")]
    EncodingFailure(#[from] serde_json::Error),

    /// The predicate's interchange form does not conform to the requested
    /// target shape. Carries the raw interchange text for diagnosis.
    #[error("cannot decode predicate {raw} into the requested shape: {source}")]
    ShapeMismatch {
        /// The raw interchange text that failed to decode.
        raw: String,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}
