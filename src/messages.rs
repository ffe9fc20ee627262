//! Japanese error message catalog.
//!
//! Pure data for host frameworks to map a [`FieldErrorKind`] to a
//! user-facing Japanese message. The crate's own error values carry
//! English default messages; this catalog is consulted at the
//! presentation layer.

use crate::foundation::FieldErrorKind;

/// The Japanese message for a failure kind.
///
/// # Examples
///
/// ```
/// use jpform::foundation::FieldErrorKind;
/// use jpform::messages::error_message_ja;
///
/// assert_eq!(
///     error_message_ja(FieldErrorKind::InvalidPostalCode),
///     "正しい郵便番号を入力してください"
/// );
/// ```
#[must_use]
pub const fn error_message_ja(kind: FieldErrorKind) -> &'static str {
    match kind {
        FieldErrorKind::Empty => "入力してください",
        FieldErrorKind::InvalidPostalCode => "正しい郵便番号を入力してください",
        FieldErrorKind::InvalidTel => "正しい電話番号を入力してください",
        FieldErrorKind::NotInOptions => "選択肢の中から選んでください",
    }
}
