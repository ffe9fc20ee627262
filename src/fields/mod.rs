//! Japan-locale field implementations.
//!
//! Each field is a strategy plugged into the generic item types from
//! [`crate::foundation`]:
//!
//! - [`PostalCode`] / [`PostalCodeInput`] — 7-digit postal codes
//! - [`Tel`] / [`TelInput`] — domestic telephone numbers
//! - [`PrefectureCodeSelect`] / [`PrefectureSelect`] — the 47
//!   prefectures as a closed enumeration

pub mod postal_code;
pub mod prefecture;
pub mod tel;

pub use postal_code::{PostalCode, PostalCodeInput, postal_code_input};
pub use prefecture::{PREFECTURES, PrefectureCodeSelect, PrefectureSelect, prefecture_name};
pub use tel::{Tel, TelInput, tel_input};
