use std::fmt;

use crate::violation::Violations;

/// Top-level error type returned by validation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// One or more validation rules were violated.
    #[error(transparent)]
    Validation(#[from] Violations),

    /// A field rule could not be compiled.
    #[error(transparent)]
    Compilation(#[from] CompilationError),

    /// A failure reported under a dotted field path.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// A free-form failure raised by a hand-written validator.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Build a free-form failure from its description.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

/// Returned when a field rule cannot be compiled from its `FieldValidator`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("compilation error: {cause}")]
pub struct CompilationError {
    /// Description of why the rule failed to compile.
    pub cause: String,
}

/// A failure wrapped with the path of fields that led to it.
///
/// Created by [`field_error`]. Wrapping a `FieldError` again grows its path
/// instead of adding a layer, so the terminal cause is always one level down.
#[derive(Debug)]
pub struct FieldError {
    path: Vec<String>,
    cause: Box<Error>,
}

impl FieldError {
    /// Field names from the outermost to the innermost.
    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Returns the dot-separated field path.
    #[must_use]
    pub fn field_path(&self) -> String {
        self.path.join(".")
    }

    /// The terminal failure.
    #[must_use]
    pub fn cause(&self) -> &Error {
        &self.cause
    }

    /// Consume the wrapper and return the terminal failure.
    #[must_use]
    pub fn into_cause(self) -> Error {
        *self.cause
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid field {}: {}", self.field_path(), self.cause)
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.cause.as_ref())
    }
}

/// Report `err` under `field`.
///
/// Used by a field validator that delegates to another one: the inner
/// validator does not know its caller's name, the caller prepends it.
/// An `err` that is already a [`FieldError`] gets `field` prepended to its
/// path and is returned as is.
pub fn field_error(field: impl Into<String>, err: Error) -> Error {
    match err {
        Error::Field(mut wrapped) => {
            wrapped.path.insert(0, field.into());
            Error::Field(wrapped)
        }
        other => Error::Field(FieldError {
            path: vec![field.into()],
            cause: Box::new(other),
        }),
    }
}
