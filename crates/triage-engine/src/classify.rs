//! Driver error to category classification.

use triage_codes::{ErrorCodeSet, ErrorCodeTable};
use triage_core::category::Category;
use triage_core::driver::DriverError;

/// Maps driver errors to categories for one database product.
///
/// Resolves the product against the table once at construction; after that
/// classification touches no shared state, so a classifier can be used from
/// any number of threads.
#[derive(Debug, Clone)]
pub struct ErrorClassifier {
    codes: ErrorCodeSet,
}

impl ErrorClassifier {
    /// Build a classifier for `product`, resolved case-insensitively.
    ///
    /// Unknown products resolve to the table's fallback record.
    #[must_use]
    pub fn for_product(table: &ErrorCodeTable, product: &str) -> Self {
        Self {
            codes: table.lookup(product).clone(),
        }
    }

    /// The product record this classifier resolved to.
    #[must_use]
    pub fn product(&self) -> &str {
        self.codes.product()
    }

    /// Classify a driver error.
    ///
    /// The vendor code's decimal rendering and the SQLSTATE are both probed
    /// against each category's code set, in classification order; the first
    /// match wins. Total: a zero code and empty SQLSTATE simply match
    /// nothing and come back [`Category::Unclassified`].
    #[must_use]
    pub fn classify(&self, error: &DriverError) -> Category {
        let vendor_code = error.code_string();
        for category in Category::CLASSIFIED {
            if self.codes.contains(category, &vendor_code)
                || self.codes.contains(category, &error.sqlstate)
            {
                return category;
            }
        }
        Category::Unclassified
    }

    // Predicate wrappers over `classify` for call sites that only care
    // about one category.

    #[must_use]
    pub fn is_bad_grammar(&self, error: &DriverError) -> bool {
        self.classify(error) == Category::BadGrammar
    }

    #[must_use]
    pub fn is_duplicate_key(&self, error: &DriverError) -> bool {
        self.classify(error) == Category::DuplicateKey
    }

    #[must_use]
    pub fn is_deadlock_loser(&self, error: &DriverError) -> bool {
        self.classify(error) == Category::Deadlock
    }

    #[must_use]
    pub fn is_data_integrity_violation(&self, error: &DriverError) -> bool {
        self.classify(error) == Category::DataIntegrityViolation
    }
}
