//! Generic input item and the field-strategy seam.
//!
//! A [`FormItem`] owns the current value and the required flag; the
//! field-specific behavior (how to normalize raw input, how to check a
//! non-empty value) is supplied by a [`FieldKind`] strategy object.
//! This keeps every Japan-specific field a plain struct composed into
//! the same item type rather than a subclass of it.

use crate::filter;
use crate::foundation::FieldError;

// ============================================================================
// FIELD KIND
// ============================================================================

/// The strategy a [`FormItem`] delegates to.
///
/// Both hooks are pure functions of `(configuration, input)`:
///
/// * [`filter`](FieldKind::filter) canonicalizes raw input and is total
///   — it never fails, and malformed input passes through unchanged
///   rather than being repaired.
/// * [`check`](FieldKind::check) validates an already-filtered,
///   non-empty value. Empty/required handling belongs to the item, not
///   the kind.
///
/// # Examples
///
/// ```
/// use jpform::foundation::{FieldError, FieldErrorKind, FieldKind, FormItem};
///
/// /// Accepts only uppercase ASCII.
/// struct Uppercase;
///
/// impl FieldKind for Uppercase {
///     fn filter(&self, raw: &str) -> String {
///         raw.trim().to_string()
///     }
///
///     fn check(&self, value: &str) -> Result<(), FieldError> {
///         if value.chars().all(|c| c.is_ascii_uppercase()) {
///             Ok(())
///         } else {
///             Err(FieldError::new(FieldErrorKind::NotInOptions))
///         }
///     }
/// }
///
/// let mut item = FormItem::new(Uppercase);
/// item.set_value("  ABC ");
/// assert_eq!(item.value(), "ABC");
/// assert!(item.validate().is_ok());
/// ```
pub trait FieldKind {
    /// Canonicalizes raw input into the stored form. Total: any string
    /// in, some string out.
    fn filter(&self, raw: &str) -> String;

    /// Checks a non-empty, filtered value against the field's format.
    fn check(&self, value: &str) -> Result<(), FieldError>;
}

// ============================================================================
// FORM ITEM
// ============================================================================

/// A single form input: current normalized value plus configuration.
///
/// The stored value is always the filtered form, even when invalid —
/// filtering runs on every assignment, and validation is re-derived on
/// demand rather than cached, so reassigning the value implicitly
/// discards any previous outcome.
#[derive(Debug, Clone)]
pub struct FormItem<K> {
    kind: K,
    value: String,
    required: bool,
}

impl<K: FieldKind> FormItem<K> {
    /// Creates an empty, optional item with the given field kind.
    #[must_use]
    pub fn new(kind: K) -> Self {
        Self {
            kind,
            value: String::new(),
            required: false,
        }
    }

    /// Sets whether an empty value fails validation.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Whether the item is required.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The field kind this item delegates to.
    #[must_use]
    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// Assigns a raw value. The value is filtered before being stored.
    pub fn set_value(&mut self, raw: &str) {
        self.value = self.kind.filter(raw);
    }

    /// Assigns a raw byte value, scrubbing malformed UTF-8 first.
    pub fn set_bytes(&mut self, raw: &[u8]) {
        let text = filter::scrub_lossy(raw);
        self.set_value(&text);
    }

    /// The current (filtered) value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the current value is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Validates the current value.
    ///
    /// An empty value is only a failure when the item is required; a
    /// non-empty value is checked by the field kind.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.is_empty() {
            return if self.required {
                Err(FieldError::empty())
            } else {
                Ok(())
            };
        }
        self.kind.check(&self.value)
    }

    /// The validated value, or `None` when empty or invalid. Never
    /// fails.
    #[must_use]
    pub fn parsed(&self) -> Option<&str> {
        if self.is_empty() || self.validate().is_err() {
            return None;
        }
        Some(&self.value)
    }

    /// Replaces the field kind and re-filters the stored value under
    /// the new configuration.
    pub(crate) fn set_kind(&mut self, kind: K) {
        self.kind = kind;
        let current = std::mem::take(&mut self.value);
        self.set_value(&current);
    }
}

// ============================================================================
// TESTS
// ============================================================================
