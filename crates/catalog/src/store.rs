//! Immutable catalog store and its queries.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use hcn_core::{CategoryId, DomainError, DomainResult, Entity};

use crate::brand::Brand;
use crate::category::{Category, CategoryDraft};
use crate::filter::ProductFilter;
use crate::integrity::{self, IntegrityReport};
use crate::product::Product;

/// Number of related products shown when the caller has no preference.
pub const DEFAULT_RELATED_LIMIT: usize = 4;

/// Full dataset the store is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSeed {
    pub categories: Vec<CategoryDraft>,
    pub brands: Vec<Brand>,
    pub products: Vec<Product>,
}

impl CatalogSeed {
    /// Parse a seed from JSON (`{"categories": [...], "brands": [...], "products": [...]}`).
    pub fn from_json(input: &str) -> DomainResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| DomainError::validation(format!("invalid catalog seed: {e}")))
    }
}

/// Read-only catalog: categories, brands and products in declaration order.
///
/// Built once; every query is a linear scan returning shared borrows, so a
/// store can be shared across threads (e.g. behind an `Arc`) without locking.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    categories: Vec<Category>,
    brands: Vec<Brand>,
    products: Vec<Product>,
    integrity: IntegrityReport,
}

/// Attach product counts to category declarations in one pass over the products.
fn derive_categories(drafts: Vec<CategoryDraft>, products: &[Product]) -> Vec<Category> {
    let mut counts: HashMap<&CategoryId, usize> = HashMap::new();
    for product in products {
        *counts.entry(product.category_id()).or_default() += 1;
    }

    drafts
        .into_iter()
        .map(|draft| {
            let count = counts.get(&draft.id).copied().unwrap_or(0);
            Category::from_draft(draft, count)
        })
        .collect()
}

impl CatalogStore {
    /// Build the store, logging (not rejecting) integrity violations.
    pub fn build(seed: CatalogSeed) -> Self {
        let CatalogSeed {
            categories,
            brands,
            products,
        } = seed;

        let integrity = integrity::check(&categories, &brands, &products);
        for violation in integrity.violations() {
            warn!(%violation, "catalog integrity violation");
        }

        let categories = derive_categories(categories, &products);

        debug!(
            categories = categories.len(),
            brands = brands.len(),
            products = products.len(),
            violations = integrity.violations().len(),
            "catalog store built"
        );

        Self {
            categories,
            brands,
            products,
            integrity,
        }
    }

    /// Build the store, failing when any product references an unknown
    /// category or brand. Uniqueness defects are still only logged.
    pub fn build_strict(seed: CatalogSeed) -> DomainResult<Self> {
        let store = Self::build(seed);
        if store.integrity.has_referential() {
            let details = store
                .integrity
                .referential()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(DomainError::invariant(details));
        }
        Ok(store)
    }

    pub fn integrity(&self) -> &IntegrityReport {
        &self.integrity
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// First product (declaration order) with this slug.
    pub fn product_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug() == slug)
    }

    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Products of a category in declaration order; empty for unknown ids.
    pub fn products_by_category(&self, category_id: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category_id() == category_id)
            .collect()
    }

    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug() == slug)
    }

    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id() == id)
    }

    pub fn featured_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_featured()).collect()
    }

    pub fn new_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_new()).collect()
    }

    /// Up to `limit` other products of the same category, in declaration order.
    ///
    /// `product` is excluded by id. No fallback to other categories: fewer
    /// siblings means a shorter (possibly empty) result.
    pub fn related_products(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.id() != product.id() && p.category_id() == product.category_id())
            .take(limit)
            .collect()
    }

    pub fn brand_by_id(&self, id: &str) -> Option<&Brand> {
        self.brands.iter().find(|b| b.id() == id)
    }

    pub fn brand_of(&self, product: &Product) -> Option<&Brand> {
        self.brand_by_id(product.brand_id().as_str())
    }

    pub fn category_of(&self, product: &Product) -> Option<&Category> {
        self.category_by_id(product.category_id().as_str())
    }

    /// Distinct materials, ascending by string comparison.
    pub fn unique_materials(&self) -> Vec<&str> {
        self.products
            .iter()
            .map(Product::material)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct sizes, ascending by string comparison.
    ///
    /// Lexical, not by magnitude: `10"` sorts before `2"`.
    pub fn unique_sizes(&self) -> Vec<&str> {
        self.products
            .iter()
            .map(Product::size)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn search(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }
}
