//! Japanese domestic telephone number field.
//!
//! Validates the basic shape only — leading `0`, 10 or 11 digits —
//! without consulting any area-code or carrier database. With hyphen
//! mode enabled, exactly two hyphens are required but their position is
//! deliberately unconstrained: carriers and locality rules vary too
//! much for a fixed grouping to be correct.

use crate::filter;
use crate::foundation::{FieldError, FieldKind, FormItem};

// ============================================================================
// TEL KIND
// ============================================================================

/// Field kind for domestic telephone numbers.
///
/// # Examples
///
/// ```
/// use jpform::fields::{Tel, tel_input};
///
/// let mut item = tel_input(Tel::new());
/// item.set_value("０９０－１２３４－５６７８");
/// assert_eq!(item.value(), "09012345678");
/// assert!(item.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tel {
    with_hyphen: bool,
}

impl Tel {
    /// Creates a telephone kind storing digits only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the stored form keeps hyphens. When `true`, hyphens
    /// are preserved exactly as typed, never repositioned.
    #[must_use = "builder methods must be chained or built"]
    pub fn hyphenated(mut self, with_hyphen: bool) -> Self {
        self.with_hyphen = with_hyphen;
        self
    }

    /// Whether the stored form keeps hyphens.
    #[must_use]
    pub fn is_hyphenated(&self) -> bool {
        self.with_hyphen
    }

    /// Leading `0`, all ASCII digits, exactly 10 or 11 of them.
    fn check_digits_only(value: &str) -> bool {
        value.starts_with('0')
            && matches!(value.len(), 10 | 11)
            && value.bytes().all(|b| b.is_ascii_digit())
    }

    /// Leading `0`, exactly two hyphens anywhere, and the remaining
    /// characters form a valid digits-only number.
    fn check_with_hyphens(value: &str) -> bool {
        if !value.starts_with('0') {
            return false;
        }
        if value.matches('-').count() != 2 {
            return false;
        }
        let digits: String = value.chars().filter(|&c| c != '-').collect();
        Self::check_digits_only(&digits)
    }
}

impl FieldKind for Tel {
    /// Fullwidth → halfwidth, then whitespace removal; no prolonged
    /// sound mark handling (unlike the postal code field). Without
    /// hyphen mode, every hyphen is stripped from the result.
    fn filter(&self, raw: &str) -> String {
        let value = filter::to_halfwidth_ascii(raw);
        let value = filter::remove_whitespace(&value);

        if self.with_hyphen {
            value
        } else {
            value.replace('-', "")
        }
    }

    fn check(&self, value: &str) -> Result<(), FieldError> {
        let ok = if self.with_hyphen {
            Self::check_with_hyphens(value)
        } else {
            Self::check_digits_only(value)
        };

        if ok {
            Ok(())
        } else {
            Err(FieldError::invalid_tel().with_param(
                "expected",
                if self.with_hyphen {
                    "0 + 10-11 digits with two hyphens"
                } else {
                    "0 + 10-11 digits"
                },
            ))
        }
    }
}

// ============================================================================
// TEL INPUT
// ============================================================================

/// A form item holding a domestic telephone number.
pub type TelInput = FormItem<Tel>;

/// Creates an empty, optional telephone item.
#[must_use]
pub fn tel_input(kind: Tel) -> TelInput {
    FormItem::new(kind)
}

impl TelInput {
    /// The validated telephone number, or `None` when empty or invalid.
    #[must_use]
    pub fn tel(&self) -> Option<&str> {
        self.parsed()
    }

    /// Switches hyphen mode on a live item, re-filtering the stored
    /// value under the new configuration.
    pub fn set_hyphenated(&mut self, with_hyphen: bool) {
        self.set_kind(Tel { with_hyphen });
    }
}

// ============================================================================
// TESTS
// ============================================================================
