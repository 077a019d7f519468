//! # Errors
//!
//! Roster uses one structured error type for every crate in the workspace.
//! Goals:
//! - a stable `kind` callers can match on
//! - can be carried through `anyhow::Error` (services, adapters, pipeline)
//! - presentation-agnostic (the caller decides how to show it)
//!
//! If you enable feature `serde`, you also get:
//! - `errors` as serde_json::Value (per-field messages)
//! - `to_json()` helper

use std::fmt;

use anyhow::Error as AnyError;

/// A convenience result type for Roster APIs.
pub type RosterResult<T> = std::result::Result<T, AnyError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A numeric argument is out of its domain (page 0, page size 0).
    InvalidArgument,
    /// A sort or filter names a field the record does not define.
    UnknownField,
    NotFound,
    /// The service does not expose this method (read-only directory).
    MethodNotAllowed,
    /// A record with the same id already exists.
    Conflict,
    /// Payload failed required-field validation.
    Unprocessable,
    NotImplemented,
    GeneralError,
}

impl ErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::UnknownField => "UnknownField",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::MethodNotAllowed => "MethodNotAllowed",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::Unprocessable => "Unprocessable",
            ErrorKind::NotImplemented => "NotImplemented",
            ErrorKind::GeneralError => "GeneralError",
        }
    }

    /// Kebab-cased class name, handy for CSS hooks in the rendering layer.
    pub fn class_name(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid-argument",
            ErrorKind::UnknownField => "unknown-field",
            ErrorKind::NotFound => "not-found",
            ErrorKind::MethodNotAllowed => "method-not-allowed",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Unprocessable => "unprocessable",
            ErrorKind::NotImplemented => "not-implemented",
            ErrorKind::GeneralError => "general-error",
        }
    }
}

#[cfg(feature = "serde")]
pub type ErrorValue = serde_json::Value;

#[cfg(not(feature = "serde"))]
pub type ErrorValue = std::collections::BTreeMap<String, Vec<String>>;

/// A structured Roster error that can live inside `anyhow::Error`.
#[derive(Debug)]
pub struct RosterError {
    pub kind: ErrorKind,
    pub message: String,
    pub errors: Option<ErrorValue>,
    pub source: Option<AnyError>,
}

impl RosterError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            errors: None,
            source: None,
        }
    }

    pub fn with_errors(mut self, errors: ErrorValue) -> Self {
        self.errors = Some(errors);
        self
    }

    pub fn with_source(mut self, source: AnyError) -> Self {
        self.source = Some(source);
        self
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn class_name(&self) -> &'static str {
        self.kind.class_name()
    }

    /// Convert into `anyhow::Error` so it flows through service calls.
    pub fn into_anyhow(self) -> AnyError {
        AnyError::new(self)
    }

    /// Downcast an `anyhow::Error` to a `RosterError` if possible.
    pub fn from_anyhow(err: &AnyError) -> Option<&RosterError> {
        err.downcast_ref::<RosterError>()
    }

    /// Kind of an arbitrary error; anything foreign counts as `GeneralError`.
    pub fn kind_of(err: &AnyError) -> ErrorKind {
        Self::from_anyhow(err)
            .map(|e| e.kind)
            .unwrap_or(ErrorKind::GeneralError)
    }

    /// Turn any error into a RosterError:
    /// - if it's already a RosterError, keep it (lossless)
    /// - otherwise wrap as GeneralError
    pub fn normalize(err: AnyError) -> RosterError {
        match err.downcast::<RosterError>() {
            Ok(roster) => roster,
            Err(other) => {
                RosterError::new(ErrorKind::GeneralError, other.to_string()).with_source(other)
            }
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, msg)
    }
    pub fn unknown_field(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownField, msg)
    }
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, msg)
    }
    pub fn method_not_allowed(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::MethodNotAllowed, msg)
    }
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, msg)
    }
    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unprocessable, msg)
    }
    pub fn not_implemented(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotImplemented, msg)
    }
    pub fn general_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::GeneralError, msg)
    }
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.message)
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

#[cfg(feature = "serde")]
impl RosterError {
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::json;

        let mut base = json!({
            "name": self.name(),
            "message": self.message,
            "className": self.class_name(),
        });

        if let Some(e) = &self.errors {
            base["errors"] = e.clone();
        }
        base
    }
}

/// Convenience helper for "bail with RosterError".
#[macro_export]
macro_rules! bail_roster {
    ($ctor:ident, $msg:expr) => {
        return Err($crate::errors::RosterError::$ctor($msg).into_anyhow())
    };
    ($ctor:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::errors::RosterError::$ctor(format!($fmt, $($arg)*)).into_anyhow())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(page: usize) -> RosterResult<usize> {
        if page == 0 {
            bail_roster!(invalid_argument, "page must be >= 1, got {}", page);
        }
        Ok(page)
    }

    #[test]
    fn bail_macro_produces_typed_error() {
        let err = lookup(0).unwrap_err();
        let roster = RosterError::from_anyhow(&err).expect("must be RosterError");
        assert_eq!(roster.kind, ErrorKind::InvalidArgument);
        assert_eq!(roster.to_string(), "InvalidArgument: page must be >= 1, got 0");
        assert_eq!(lookup(2).unwrap(), 2);
    }

    #[test]
    fn normalize_wraps_foreign_errors() {
        let err = anyhow::anyhow!("disk on fire");
        assert_eq!(RosterError::kind_of(&err), ErrorKind::GeneralError);

        let roster = RosterError::normalize(err);
        assert_eq!(roster.kind, ErrorKind::GeneralError);
        assert!(roster.source.is_some());
    }

    #[test]
    fn normalize_keeps_roster_errors() {
        let err = RosterError::unknown_field("no field 'salary'").into_anyhow();
        let roster = RosterError::normalize(err);
        assert_eq!(roster.kind, ErrorKind::UnknownField);
        assert_eq!(roster.class_name(), "unknown-field");
        assert!(roster.source.is_none());
    }
}
