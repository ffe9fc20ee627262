//! # jpform
//!
//! Japan-locale form field normalization and validation: postal codes,
//! domestic telephone numbers, and prefecture selection.
//!
//! ## Quick Start
//!
//! ```
//! use jpform::prelude::*;
//!
//! // Postal code, canonical hyphenated form
//! let mut postal = postal_code_input(PostalCode::new().hyphenated(true));
//! postal.set_value("１２３４５６７"); // fullwidth input is fine
//! assert_eq!(postal.postal_code(), Some("123-4567"));
//!
//! // Telephone number, digits only
//! let mut tel = tel_input(Tel::new());
//! tel.set_value("０９０－１２３４－５６７８");
//! assert_eq!(tel.tel(), Some("09012345678"));
//!
//! // Prefecture by code
//! let mut pref = PrefectureCodeSelect::new();
//! pref.set_value("27");
//! assert_eq!(pref.prefecture(), Some("大阪府"));
//! ```
//!
//! ## Design
//!
//! Every field follows the same filter → validate pipeline: raw input
//! is canonicalized on assignment (fullwidth → halfwidth, whitespace
//! stripped, encoding scrubbed), the stored value is always the
//! filtered form, and validation is re-derived on demand. Failures are
//! plain values with a distinct [`FieldErrorKind`](foundation::FieldErrorKind)
//! per kind, mappable to the Japanese messages in [`messages`].
//!
//! Fields are strategy objects composed into generic item types rather
//! than subclasses — see [`foundation`] for the seam.

pub mod fields;
pub mod filter;
pub mod foundation;
pub mod messages;
pub mod prelude;
