//! Worked usage of [`fallible_core`]: user lookups over a small in-memory
//! table and JSON config parsing with error recovery.

pub mod config;
pub mod users;

pub use fallible_core::*;
