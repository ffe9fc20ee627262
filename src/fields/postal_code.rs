//! Japanese postal code field.
//!
//! Accepts both `1234567` and `123-4567` during input and normalizes to
//! the configured canonical form. Fullwidth digits, stray whitespace,
//! and the prolonged sound mark (`ー`, often typed in place of a
//! hyphen) are all cleaned up before the format check.

use std::sync::LazyLock;

use regex::Regex;

use crate::filter;
use crate::foundation::{FieldError, FieldKind, FormItem};

static WITH_HYPHEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}-[0-9]{4}$").unwrap());

static WITHOUT_HYPHEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{7}$").unwrap());

// ============================================================================
// POSTAL CODE KIND
// ============================================================================

/// Field kind for 7-digit Japanese postal codes.
///
/// # Examples
///
/// ```
/// use jpform::fields::{PostalCode, postal_code_input};
///
/// let mut item = postal_code_input(PostalCode::new().hyphenated(true));
/// item.set_value("１２３４５６７");
/// assert_eq!(item.value(), "123-4567");
/// assert!(item.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostalCode {
    with_hyphen: bool,
}

impl PostalCode {
    /// Creates a postal code kind storing the unhyphenated form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the canonical stored form: `123-4567` when `true`,
    /// `1234567` when `false`.
    #[must_use = "builder methods must be chained or built"]
    pub fn hyphenated(mut self, with_hyphen: bool) -> Self {
        self.with_hyphen = with_hyphen;
        self
    }

    /// Whether the canonical form includes the hyphen.
    #[must_use]
    pub fn is_hyphenated(&self) -> bool {
        self.with_hyphen
    }
}

impl FieldKind for PostalCode {
    /// Normalization pipeline, order fixed:
    ///
    /// 1. fullwidth ASCII → halfwidth
    /// 2. strip all whitespace
    /// 3. `ー` (U+30FC) → `-` — a katakana character, so outside the
    ///    fullwidth-ASCII conversion's scope
    /// 4. reformat between hyphen modes when the value exactly matches
    ///    the opposite mode's shape
    ///
    /// Malformed input (wrong length, wrong hyphen position, stray
    /// characters) is stored unchanged — this field never repairs what
    /// it cannot recognize.
    fn filter(&self, raw: &str) -> String {
        let value = filter::to_halfwidth_ascii(raw);
        let value = filter::remove_whitespace(&value);
        let value = value.replace('ー', "-");

        if self.with_hyphen {
            if WITHOUT_HYPHEN.is_match(&value) {
                return format!("{}-{}", &value[..3], &value[3..]);
            }
        } else if WITH_HYPHEN.is_match(&value) {
            return value.replace('-', "");
        }

        value
    }

    fn check(&self, value: &str) -> Result<(), FieldError> {
        let (pattern, expected) = if self.with_hyphen {
            (&*WITH_HYPHEN, "123-4567")
        } else {
            (&*WITHOUT_HYPHEN, "1234567")
        };

        if pattern.is_match(value) {
            Ok(())
        } else {
            Err(FieldError::invalid_postal_code().with_param("expected", expected))
        }
    }
}

// ============================================================================
// POSTAL CODE INPUT
// ============================================================================

/// A form item holding a Japanese postal code.
pub type PostalCodeInput = FormItem<PostalCode>;

/// Creates an empty, optional postal code item.
#[must_use]
pub fn postal_code_input(kind: PostalCode) -> PostalCodeInput {
    FormItem::new(kind)
}

impl PostalCodeInput {
    /// The validated postal code in the configured format, or `None`
    /// when empty or invalid.
    #[must_use]
    pub fn postal_code(&self) -> Option<&str> {
        self.parsed()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::FieldErrorKind;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn input(with_hyphen: bool) -> PostalCodeInput {
        postal_code_input(PostalCode::new().hyphenated(with_hyphen))
    }

    mod filtering {
        use super::*;
        use pretty_assertions::assert_eq;

        #[rstest]
        #[case("1234567", "1234567")]
        #[case("123-4567", "1234567")] // hyphen removed in no-hyphen mode
        #[case("１２３４５６７", "1234567")] // fullwidth digits
        #[case("１２３−４５６７", "1234567")] // U+2212 minus sign
        #[case("123ー4567", "1234567")] // U+30FC prolonged sound mark
        #[case("123\u{3000}4567", "1234567")] // ideographic space
        #[case(" 123 4567 ", "1234567")]
        fn without_hyphen(#[case] raw: &str, #[case] stored: &str) {
            let mut item = input(false);
            item.set_value(raw);
            assert_eq!(item.value(), stored);
        }

        #[rstest]
        #[case("1234567", "123-4567")] // hyphen inserted after 3rd digit
        #[case("123-4567", "123-4567")]
        #[case("１２３４５６７", "123-4567")]
        #[case("123ー4567", "123-4567")]
        fn with_hyphen(#[case] raw: &str, #[case] stored: &str) {
            let mut item = input(true);
            item.set_value(raw);
            assert_eq!(item.value(), stored);
        }

        #[rstest]
        #[case("12345")] // too short
        #[case("12345678")] // too long
        #[case("123-456")] // wrong hyphen position
        #[case("abc-defg")]
        #[case("123a567")]
        fn malformed_input_is_never_repaired(#[case] raw: &str) {
            let mut item = input(false);
            item.set_value(raw);
            assert_eq!(item.value(), raw);

            let mut item = input(true);
            item.set_value(raw);
            assert_eq!(item.value(), raw);
        }

        #[test]
        fn filter_is_idempotent() {
            for with_hyphen in [false, true] {
                let kind = PostalCode::new().hyphenated(with_hyphen);
                for raw in ["１２３４５６７", "123-4567", "12-34567", "abc"] {
                    let once = kind.filter(raw);
                    assert_eq!(kind.filter(&once), once);
                }
            }
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn accepts_seven_digits_without_hyphen() {
            let mut item = input(false);
            item.set_value("1234567");
            assert!(item.validate().is_ok());
        }

        #[test]
        fn accepts_hyphenated_input_converted_to_no_hyphen() {
            let mut item = input(false);
            item.set_value("123-4567");
            assert!(item.validate().is_ok());
            assert_eq!(item.value(), "1234567");
        }

        #[test]
        fn accepts_no_hyphen_input_converted_to_hyphenated() {
            let mut item = input(true);
            item.set_value("1234567");
            assert!(item.validate().is_ok());
            assert_eq!(item.value(), "123-4567");
        }

        #[rstest]
        #[case("12345")]
        #[case("12345678")]
        #[case("abc-defg")]
        #[case("123-456")]
        #[case("12-34567")] // hyphen present but field configured without
        #[case("123a567")]
        fn rejects_with_invalid_postal_code(#[case] raw: &str) {
            let mut item = input(false);
            item.set_value(raw);
            let err = item.validate().unwrap_err();
            assert_eq!(err.kind(), FieldErrorKind::InvalidPostalCode);
        }

        #[test]
        fn empty_handling_follows_required_flag() {
            let mut required = input(false).required(true);
            required.set_value("");
            assert_eq!(
                required.validate().unwrap_err().kind(),
                FieldErrorKind::Empty
            );

            let mut optional = input(false).required(false);
            optional.set_value("");
            assert!(optional.validate().is_ok());
        }
    }

    mod parsing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn postal_code_returns_configured_format() {
            let mut item = input(true);
            item.set_value("1234567");
            assert_eq!(item.postal_code(), Some("123-4567"));
        }

        #[test]
        fn postal_code_is_none_when_empty_or_invalid() {
            let mut item = input(false);
            assert_eq!(item.postal_code(), None);
            item.set_value("12345");
            assert_eq!(item.postal_code(), None);
        }
    }
}
