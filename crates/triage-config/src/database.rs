//! Database product configuration.

use serde::{Deserialize, Serialize};

/// Product name resolved when none is configured. Maps to the portable
/// SQLSTATE-based fallback record in the code table.
fn default_product() -> String {
    "default".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Symbolic database product name (e.g. `"H2"`, `"PostgreSQL"`).
    ///
    /// Matched case-insensitively against the code table; unrecognized
    /// values resolve to the fallback record downstream, never an error.
    #[serde(default = "default_product")]
    pub product: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            product: default_product(),
        }
    }
}

impl DatabaseConfig {
    /// Whether a product was configured explicitly.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.product.is_empty() && !self.product.eq_ignore_ascii_case("default")
    }
}
