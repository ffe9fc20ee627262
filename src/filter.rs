//! Shared text canonicalization for Japanese form input.
//!
//! Japanese IMEs routinely emit fullwidth digits (`１２３`), fullwidth
//! punctuation (`－`), the minus sign (`−`), and ideographic spaces
//! (U+3000) where a form expects plain ASCII. Every input field runs its
//! raw value through these functions before validating, so validation
//! only ever sees halfwidth, whitespace-free text.
//!
//! All functions here are total: they accept any input and never fail.

use std::borrow::Cow;

// ============================================================================
// ENCODING SCRUB
// ============================================================================

/// Coerces raw bytes to text, replacing malformed UTF-8 sequences with
/// U+FFFD REPLACEMENT CHARACTER.
///
/// Host frameworks hand over whatever the transport produced; a broken
/// multibyte sequence must not abort normalization. Borrows when the
/// input is already valid UTF-8.
#[must_use]
pub fn scrub_lossy(raw: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(raw)
}

// ============================================================================
// FULLWIDTH → HALFWIDTH
// ============================================================================

/// Converts fullwidth ASCII characters to their halfwidth equivalents.
///
/// Maps the fullwidth block U+FF01..=U+FF5E (digits, letters, `－`,
/// punctuation) onto U+0021..=U+007E, and U+2212 MINUS SIGN onto `-`.
/// U+2212 sits outside the fullwidth block but is what several IMEs
/// produce for a typed hyphen, so it gets the same treatment.
///
/// Everything else, including kana and kanji, passes through unchanged.
///
/// # Examples
///
/// ```
/// use jpform::filter::to_halfwidth_ascii;
///
/// assert_eq!(to_halfwidth_ascii("１２３－４５６７"), "123-4567");
/// assert_eq!(to_halfwidth_ascii("０３−１２３４"), "03-1234");
/// assert_eq!(to_halfwidth_ascii("東京都"), "東京都");
/// ```
#[must_use]
pub fn to_halfwidth_ascii(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '\u{ff01}'..='\u{ff5e}' => {
                // The fullwidth block is a fixed offset from printable ASCII.
                char::from_u32(c as u32 - 0xFEE0).unwrap_or(c)
            }
            '\u{2212}' => '-',
            _ => c,
        })
        .collect()
}

// ============================================================================
// WHITESPACE REMOVAL
// ============================================================================

/// Removes every whitespace character anywhere in the string.
///
/// Covers both halfwidth whitespace (space, tab, newline) and the
/// fullwidth U+3000 IDEOGRAPHIC SPACE, which `char::is_whitespace`
/// includes.
///
/// # Examples
///
/// ```
/// use jpform::filter::remove_whitespace;
///
/// assert_eq!(remove_whitespace(" 123 4567 "), "1234567");
/// assert_eq!(remove_whitespace("123　4567"), "1234567"); // U+3000
/// ```
#[must_use]
pub fn remove_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

// ============================================================================
// TESTS
// ============================================================================
