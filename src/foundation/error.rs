//! Failure types for field validation.
//!
//! Every validation failure is a value, never a panic: filtering is
//! total, validation returns `Result<(), FieldError>`, and parse
//! accessors downgrade failures to `None`. Each failure carries a
//! distinct [`FieldErrorKind`] so host frameworks can branch on the
//! kind and map it to a localized message (see [`crate::messages`]).
//!
//! String fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static messages.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

// ============================================================================
// ERROR KIND
// ============================================================================

/// The closed set of validation failure kinds.
///
/// `Empty` and `NotInOptions` are framework-level failures shared by
/// every field; the `Invalid*` kinds belong to the individual field
/// implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// The field is required but the stored value is empty.
    #[error("value is required")]
    Empty,
    /// The value is not a well-formed Japanese postal code.
    #[error("invalid postal code format")]
    InvalidPostalCode,
    /// The value is not a well-formed domestic telephone number.
    #[error("invalid telephone number format")]
    InvalidTel,
    /// The value is not one of the configured select options.
    #[error("value is not one of the configured options")]
    NotInOptions,
}

impl FieldErrorKind {
    /// Stable string code for programmatic handling and i18n lookup.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::InvalidPostalCode => "invalid_postal_code",
            Self::InvalidTel => "invalid_tel",
            Self::NotInOptions => "not_in_options",
        }
    }
}

// ============================================================================
// FIELD ERROR
// ============================================================================

/// A structured validation failure with a kind, a default English
/// message, and optional parameters for message templating.
///
/// # Examples
///
/// ```
/// use jpform::foundation::{FieldError, FieldErrorKind};
///
/// let error = FieldError::invalid_tel().with_param("hyphens", "3");
/// assert_eq!(error.kind(), FieldErrorKind::InvalidTel);
/// assert_eq!(error.code(), "invalid_tel");
/// assert_eq!(error.param("hyphens"), Some("3"));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    kind: FieldErrorKind,
    message: Cow<'static, str>,
    /// Ordered key-value pairs, typically 0-2 entries.
    params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,
}

impl FieldError {
    /// Creates a new error with the kind's default message.
    #[must_use]
    pub fn new(kind: FieldErrorKind) -> Self {
        Self {
            kind,
            message: Cow::Owned(kind.to_string()),
            params: SmallVec::new(),
        }
    }

    /// Creates an error with a custom message.
    #[must_use]
    pub fn with_message(kind: FieldErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Adds a parameter for message templating.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// The failure kind.
    #[must_use]
    pub fn kind(&self) -> FieldErrorKind {
        self.kind
    }

    /// Stable string code, derived from the kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// The default English message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Converts the error to a JSON value for host-side serialization.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code(),
            "message": self.message,
            "params": params,
        })
    }
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl FieldError {
    /// Creates an [`FieldErrorKind::Empty`] error.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(FieldErrorKind::Empty)
    }

    /// Creates an [`FieldErrorKind::InvalidPostalCode`] error.
    #[must_use]
    pub fn invalid_postal_code() -> Self {
        Self::new(FieldErrorKind::InvalidPostalCode)
    }

    /// Creates an [`FieldErrorKind::InvalidTel`] error.
    #[must_use]
    pub fn invalid_tel() -> Self {
        Self::new(FieldErrorKind::InvalidTel)
    }

    /// Creates a [`FieldErrorKind::NotInOptions`] error recording the
    /// rejected value.
    #[must_use]
    pub fn not_in_options(value: impl Into<Cow<'static, str>>) -> Self {
        Self::new(FieldErrorKind::NotInOptions).with_param("value", value)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message)?;

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl std::error::Error for FieldError {}

impl From<FieldErrorKind> for FieldError {
    fn from(kind: FieldErrorKind) -> Self {
        Self::new(kind)
    }
}

// ============================================================================
// TESTS
// ============================================================================
