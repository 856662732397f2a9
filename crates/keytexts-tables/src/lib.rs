//! # keytexts-tables
//!
//! Name registry and compiled-in keyboard text tables. Each supported locale
//! has a table of optional texts indexed by name id; empty slots defer to
//! the default table. Texts may reference other texts with `!text/<name>`,
//! which `keytexts-resolver` expands.

mod catalog;
mod data;
pub mod names;
mod table;

pub use catalog::TextCatalog;
pub use names::{NameId, NameRegistry, NAMES, OVERRIDE_NAMES, SWITCH_TO_ALPHA_KEY_LABEL};
pub use table::LocaleTextTable;
