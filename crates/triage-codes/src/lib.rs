//! # triage-codes
//!
//! The per-product error code table for sqltriage.
//!
//! Database drivers identify failures through an idiosyncratic pair of
//! identifiers (vendor error code, SQLSTATE). This crate centralizes those
//! numbers behind the symbolic [`triage_core::category::Category`] taxonomy:
//! a read-only [`table::ErrorCodeTable`] maps a product name to the four
//! code sets used to classify that product's errors.
//!
//! The shipped table is a TOML resource embedded at compile time
//! (`codes/error-codes.toml`) and validated on load; deployments needing
//! extra products can load their own description through
//! [`table::ErrorCodeTable::from_toml_str`].

pub mod error;
pub mod table;

pub use error::TableError;
pub use table::{ErrorCodeSet, ErrorCodeTable};
