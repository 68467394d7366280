//! # triage-core
//!
//! Core types for sqltriage: the stable error category taxonomy and the
//! driver error shape the classification engine consumes.
//!
//! This crate has no opinion on how categories are assigned (that lives in
//! `triage-engine`); it only defines the vocabulary shared across the
//! workspace.

pub mod category;
pub mod driver;
