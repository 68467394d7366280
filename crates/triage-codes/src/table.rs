//! The immutable product-to-code-sets table.
//!
//! Built once at startup from the embedded TOML description and shared by
//! reference afterwards. Codes are normalized to ASCII uppercase on load so
//! membership tests are case-insensitive without allocating per category.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use triage_core::category::Category;

use crate::error::TableError;

/// TOML description shipped with the crate.
const BUNDLED_TABLE: &str = include_str!("../codes/error-codes.toml");

/// Name of the fallback record every table must carry.
const DEFAULT_PRODUCT: &str = "default";

#[derive(Debug, Deserialize)]
struct TableDoc {
    #[serde(rename = "product")]
    products: Vec<ProductDoc>,
}

#[derive(Debug, Deserialize)]
struct ProductDoc {
    name: String,
    #[serde(default)]
    bad_grammar: Vec<String>,
    #[serde(default)]
    duplicate_key: Vec<String>,
    #[serde(default)]
    deadlock_loser: Vec<String>,
    #[serde(default)]
    data_integrity_violation: Vec<String>,
}

/// The four classification code sets for a single database product.
///
/// A code is either a decimal vendor error code rendering or a SQLSTATE
/// string; both are looked up in the same sets.
#[derive(Debug, Clone)]
pub struct ErrorCodeSet {
    product: String,
    bad_grammar: HashSet<String>,
    duplicate_key: HashSet<String>,
    deadlock_loser: HashSet<String>,
    data_integrity_violation: HashSet<String>,
}

impl ErrorCodeSet {
    fn from_doc(doc: ProductDoc) -> Result<Self, TableError> {
        let set = Self {
            product: doc.name,
            bad_grammar: normalize(doc.bad_grammar),
            duplicate_key: normalize(doc.duplicate_key),
            deadlock_loser: normalize(doc.deadlock_loser),
            data_integrity_violation: normalize(doc.data_integrity_violation),
        };
        set.check_disjoint()?;
        Ok(set)
    }

    /// Canonical product name, as written in the table description.
    #[must_use]
    pub fn product(&self) -> &str {
        &self.product
    }

    /// Whether `code` belongs to `category` for this product.
    ///
    /// Comparison is case-insensitive; `Category::Unclassified` has no code
    /// set and never matches.
    #[must_use]
    pub fn contains(&self, category: Category, code: &str) -> bool {
        self.codes(category)
            .is_some_and(|codes| codes.contains(&code.to_ascii_uppercase()))
    }

    /// The code set for a classified category (uppercase-normalized).
    #[must_use]
    pub const fn codes(&self, category: Category) -> Option<&HashSet<String>> {
        match category {
            Category::BadGrammar => Some(&self.bad_grammar),
            Category::DuplicateKey => Some(&self.duplicate_key),
            Category::Deadlock => Some(&self.deadlock_loser),
            Category::DataIntegrityViolation => Some(&self.data_integrity_violation),
            Category::Unclassified => None,
        }
    }

    /// A code maps to exactly one category within a product.
    fn check_disjoint(&self) -> Result<(), TableError> {
        for (i, first) in Category::CLASSIFIED.iter().enumerate() {
            for second in &Category::CLASSIFIED[i + 1..] {
                let (Some(a), Some(b)) = (self.codes(*first), self.codes(*second)) else {
                    continue;
                };
                if let Some(code) = a.intersection(b).next() {
                    return Err(TableError::OverlappingCode {
                        product: self.product.clone(),
                        code: code.clone(),
                        first: *first,
                        second: *second,
                    });
                }
            }
        }
        Ok(())
    }
}

fn normalize(codes: Vec<String>) -> HashSet<String> {
    codes.into_iter().map(|c| c.to_ascii_uppercase()).collect()
}

/// Read-only map from product name to [`ErrorCodeSet`].
///
/// Populated once from a TOML description and immutable thereafter; safe to
/// share across threads behind an `Arc`. Lookups are case-insensitive and
/// total: unknown products resolve to the `default` record.
#[derive(Debug, Clone)]
pub struct ErrorCodeTable {
    products: HashMap<String, ErrorCodeSet>,
    fallback: ErrorCodeSet,
}

impl ErrorCodeTable {
    /// The table shipped with the crate.
    ///
    /// # Panics
    ///
    /// Panics if the embedded `codes/error-codes.toml` fails to parse or
    /// validate. This is not expected in practice: the resource is fixed at
    /// compile time and exercised by the crate's test suite.
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_toml_str(BUNDLED_TABLE)
            .expect("embedded error-codes.toml is validated by the crate test suite")
    }

    /// Build a table from a TOML description.
    ///
    /// # Errors
    ///
    /// Returns `TableError` on malformed TOML, duplicate product names, a
    /// missing `default` record, or a code appearing in two categories of
    /// the same product.
    pub fn from_toml_str(description: &str) -> Result<Self, TableError> {
        let doc: TableDoc = toml::from_str(description)?;

        let mut products = HashMap::new();
        for product_doc in doc.products {
            let key = product_doc.name.to_lowercase();
            if products.contains_key(&key) {
                return Err(TableError::DuplicateProduct(product_doc.name));
            }
            let set = ErrorCodeSet::from_doc(product_doc)?;
            products.insert(key, set);
        }

        let fallback = products
            .remove(DEFAULT_PRODUCT)
            .ok_or(TableError::MissingDefault)?;

        Ok(Self { products, fallback })
    }

    /// The code sets for `product`, matched case-insensitively.
    ///
    /// Unknown products resolve to the `default` record; this never fails.
    #[must_use]
    pub fn lookup(&self, product: &str) -> &ErrorCodeSet {
        self.products
            .get(&product.to_lowercase())
            .unwrap_or(&self.fallback)
    }

    /// All records in the table, the fallback included.
    pub fn iter(&self) -> impl Iterator<Item = &ErrorCodeSet> {
        std::iter::once(&self.fallback).chain(self.products.values())
    }
}
