//! # keytexts-core
//!
//! Core types, traits, configuration, and error handling shared by the
//! keytexts crates.

pub mod config;
pub mod error;
pub mod locale;
pub mod traits;
