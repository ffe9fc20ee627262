//! Prelude module for convenient imports.
//!
//! Provides a single `use jpform::prelude::*;` import that brings in
//! the error types, item types, and every Japan-locale field.
//!
//! # Examples
//!
//! ```
//! use jpform::prelude::*;
//!
//! let mut postal = postal_code_input(PostalCode::new().hyphenated(true));
//! postal.set_value("１２３４５６７");
//! assert_eq!(postal.postal_code(), Some("123-4567"));
//! ```

// ============================================================================
// FOUNDATION: errors, items, selects
// ============================================================================

pub use crate::foundation::{
    FieldError, FieldErrorKind, FieldKind, FieldResult, FormItem, OptionSet, SelectItem,
    SelectOption,
};

// ============================================================================
// FIELDS: Japan-locale implementations
// ============================================================================

pub use crate::fields::{
    PREFECTURES, PostalCode, PostalCodeInput, PrefectureCodeSelect, PrefectureSelect, Tel,
    TelInput, postal_code_input, prefecture_name, tel_input,
};

// ============================================================================
// MESSAGES: Japanese catalog
// ============================================================================

pub use crate::messages::error_message_ja;
