//! Code table loading and validation errors.

use thiserror::Error;
use triage_core::category::Category;

#[derive(Debug, Error)]
pub enum TableError {
    /// The table description is not well-formed TOML.
    #[error("Malformed code table: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two records share a product name (compared case-insensitively).
    #[error("Duplicate product entry '{0}' in code table")]
    DuplicateProduct(String),

    /// The description has no `default` record to fall back on.
    #[error("Code table has no 'default' entry")]
    MissingDefault,

    /// A code appears in two categories of the same product, breaking the
    /// one-code-one-category invariant.
    #[error("Code '{code}' appears in both {first} and {second} for product '{product}'")]
    OverlappingCode {
        product: String,
        code: String,
        first: Category,
        second: Category,
    },
}
