//! Shared domain types, the error taxonomy, and boundary validation
//! helpers used by the db and api crates.

pub mod error;
pub mod types;
pub mod validate;
