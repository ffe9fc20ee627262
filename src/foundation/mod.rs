//! Core types of the form-item abstraction.
//!
//! The building blocks every field plugs into:
//!
//! - **Errors**: [`FieldError`], [`FieldErrorKind`]
//! - **Input items**: [`FieldKind`] (the strategy seam), [`FormItem`]
//! - **Select items**: [`OptionSet`], [`SelectOption`], [`SelectItem`]
//!
//! # Architecture
//!
//! Fields are composed, not subclassed: a [`FormItem`] owns the value
//! and the required flag while a [`FieldKind`] strategy supplies the
//! `filter`/`check` behavior. Both hooks are pure functions of
//! `(configuration, input)` — no I/O, no shared mutable state — so
//! independent items can be used from any number of threads without
//! synchronization.
//!
//! Filtering is total and validation always terminates with either no
//! failure or exactly one [`FieldError`]; nothing in this module
//! panics on user input.

pub mod error;
pub mod item;
pub mod select;

pub use error::{FieldError, FieldErrorKind};
pub use item::{FieldKind, FormItem};
pub use select::{OptionSet, SelectItem, SelectOption};

/// A validation result using the standard [`FieldError`].
pub type FieldResult = Result<(), FieldError>;
