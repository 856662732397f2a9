//! # keytexts-resolver
//!
//! Binds a locale to its keyboard text table plus dynamically localized
//! overrides, and expands `!text/<name>` references against that binding.

pub mod check;
pub mod providers;
pub mod resolve;
mod set;
mod shared;

pub use check::{check_catalog, CheckReport};
pub use providers::{FnProvider, NoOverrides, ResourceStrings};
pub use resolve::{resolve_text_reference, MAX_PASSES, PREFIX_TEXT};
pub use set::TextsSet;
pub use shared::SharedTexts;
