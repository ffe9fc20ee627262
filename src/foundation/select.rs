//! Closed-enumeration select item.
//!
//! A select field accepts only the keys of its configured option set.
//! The option set is an ordered key→label mapping whose first entry is
//! always the empty/"unselected" sentinel, consumed by rendering code
//! outside this crate.

use std::borrow::Cow;

use serde::Serialize;

use crate::foundation::FieldError;

// ============================================================================
// OPTION SET
// ============================================================================

/// One selectable entry: a machine key and a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Machine key submitted by the form. Empty for the sentinel entry.
    pub key: Cow<'static, str>,
    /// Display label shown to the user.
    pub label: Cow<'static, str>,
}

/// An ordered key→label mapping with the empty entry always first.
///
/// # Examples
///
/// ```
/// use jpform::foundation::OptionSet;
///
/// let options = OptionSet::with_empty_option(
///     "選択してください",
///     [("01", "北海道"), ("02", "青森県")],
/// );
/// assert_eq!(options.len(), 3);
/// assert_eq!(options.iter().next().unwrap().key, "");
/// assert!(options.contains_key("01"));
/// assert!(!options.contains_key(""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSet {
    options: Vec<SelectOption>,
}

impl OptionSet {
    /// Builds an option set from real entries, prepending the sentinel
    /// entry with an empty key and the given label.
    ///
    /// Entry order is preserved.
    #[must_use]
    pub fn with_empty_option<K, L>(
        empty_label: impl Into<Cow<'static, str>>,
        entries: impl IntoIterator<Item = (K, L)>,
    ) -> Self
    where
        K: Into<Cow<'static, str>>,
        L: Into<Cow<'static, str>>,
    {
        let mut options = vec![SelectOption {
            key: Cow::Borrowed(""),
            label: empty_label.into(),
        }];
        options.extend(entries.into_iter().map(|(key, label)| SelectOption {
            key: key.into(),
            label: label.into(),
        }));
        Self { options }
    }

    /// Number of options, sentinel included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// An option set always holds at least the sentinel entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterates options in render order (sentinel first).
    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        self.options.iter()
    }

    /// Whether `key` is a selectable (non-sentinel) key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        !key.is_empty() && self.options.iter().any(|o| o.key == key)
    }

    /// The display label for a selectable key.
    #[must_use]
    pub fn label_of(&self, key: &str) -> Option<&str> {
        if key.is_empty() {
            return None;
        }
        self.options
            .iter()
            .find(|o| o.key == key)
            .map(|o| o.label.as_ref())
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a SelectOption;
    type IntoIter = std::slice::Iter<'a, SelectOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}

// ============================================================================
// SELECT ITEM
// ============================================================================

/// A select input: current value plus the closed option enumeration.
///
/// Arbitrary values are rejected; only configured keys (or the empty
/// value, subject to the required flag) validate.
#[derive(Debug, Clone)]
pub struct SelectItem {
    options: OptionSet,
    value: String,
    required: bool,
}

impl SelectItem {
    /// Creates an empty, optional select over the given options.
    #[must_use]
    pub fn new(options: OptionSet) -> Self {
        Self {
            options,
            value: String::new(),
            required: false,
        }
    }

    /// Sets whether an empty selection fails validation.
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

    /// The configured options.
    #[must_use]
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Replaces the option set, keeping the current value.
    pub fn set_options(&mut self, options: OptionSet) {
        self.options = options;
    }

    /// Assigns the selected key as submitted.
    pub fn set_value(&mut self, raw: &str) {
        self.value = raw.to_string();
    }

    /// The currently selected key.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether no selection has been made.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Validates the current selection against the option keys.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.is_empty() {
            return if self.required {
                Err(FieldError::empty())
            } else {
                Ok(())
            };
        }
        if self.options.contains_key(&self.value) {
            Ok(())
        } else {
            Err(FieldError::not_in_options(self.value.clone()))
        }
    }

    /// The display label of the selection, or `None` when empty or
    /// invalid.
    #[must_use]
    pub fn selected_label(&self) -> Option<&str> {
        if self.validate().is_err() {
            return None;
        }
        self.options.label_of(&self.value)
    }

    /// The validated key, or `None` when empty or invalid. Never fails.
    #[must_use]
    pub fn parsed(&self) -> Option<&str> {
        if self.is_empty() || self.validate().is_err() {
            return None;
        }
        Some(&self.value)
    }
}

// ============================================================================
// TESTS
// ============================================================================
