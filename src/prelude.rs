//! Prelude module for the storefront_widgets crate.
//!
//! Re-exports the derive_more macros used across the calendar and wizard types.

#[allow(unused_imports)]
pub use derive_more::{Deref, Display, From, Into};
