//! The runtime tripwire for branches the type system says cannot execute.

use std::any::type_name;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Fatal-signal error for an exhaustively-matched value that arrived anyway.
///
/// A `match` over a closed set is proven total by the compiler, so a missing
/// arm is a compile error, not a runtime condition:
///
/// ```compile_fail,E0004
/// enum Status {
///     Active,
///     Inactive,
/// }
///
/// fn label(status: Status) -> &'static str {
///     match status {
///         Status::Active => "on",
///     }
/// }
/// ```
///
/// A wildcard arm becomes necessary again when the data crossed a trust
/// boundary, such as a `#[non_exhaustive]` enum from another crate or a
/// stale persisted value naming a variant removed in a later revision. That
/// arm is where this error is constructed:
///
/// ```
/// use casewise::UnhandledCaseError;
///
/// #[derive(Debug, Clone, Copy, serde::Serialize)]
/// #[serde(rename_all = "lowercase")]
/// enum StoredState {
///     Active,
///     Inactive,
///     Archived,
/// }
///
/// fn apply(state: StoredState) -> Result<&'static str, UnhandledCaseError> {
///     match state {
///         StoredState::Active => Ok("on"),
///         StoredState::Inactive => Ok("off"),
///         other => Err(UnhandledCaseError::new(&other)),
///     }
/// }
///
/// let err = apply(StoredState::Archived).unwrap_err();
/// assert!(err.to_string().contains("archived"));
/// ```
///
/// Construction never fails and never panics. The error does not terminate
/// the process by itself; propagate it as a hard failure of the enclosing
/// operation. Catching and discarding it defeats the tripwire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unhandled case: {rendered}")]
pub struct UnhandledCaseError {
    rendered: String,
}

impl UnhandledCaseError {
    /// Build the fault from the value that reached the unreachable arm.
    ///
    /// The value is rendered as JSON for the diagnostic; a value that fails
    /// to serialize falls back to its type name rather than failing the
    /// diagnostic itself.
    #[must_use]
    pub fn new<T>(value: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        let rendered = serde_json::to_string(value)
            .unwrap_or_else(|_| format!("<unserializable {}>", type_name::<T>()));
        Self { rendered }
    }

    /// Like [`UnhandledCaseError::new`], for values that are only `Debug`.
    #[must_use]
    pub fn from_debug<T>(value: &T) -> Self
    where
        T: fmt::Debug + ?Sized,
    {
        Self {
            rendered: format!("{value:?}"),
        }
    }

    /// The diagnostic rendering of the offending value.
    #[must_use]
    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}
