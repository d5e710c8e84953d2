//! One-shot integrity pass over a catalog seed.
//!
//! Nothing here mutates or filters the dataset: violations are collected into
//! an [`IntegrityReport`] and the store decides what to do with them.

use std::collections::HashSet;
use std::hash::Hash;

use serde::Serialize;
use thiserror::Error;

use hcn_core::{BrandId, CategoryId, Entity, ProductId, Slug};

use crate::brand::Brand;
use crate::category::CategoryDraft;
use crate::product::Product;

/// A single integrity defect in the catalog declarations.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum IntegrityViolation {
    #[error("product {product} references unknown category `{category}`")]
    UnknownCategory {
        product: ProductId,
        category: CategoryId,
    },

    #[error("product {product} references unknown brand `{brand}`")]
    UnknownBrand { product: ProductId, brand: BrandId },

    #[error("product id `{0}` is declared more than once")]
    DuplicateProductId(ProductId),

    #[error("product slug `{0}` is declared more than once")]
    DuplicateProductSlug(Slug),

    #[error("SKU `{0}` is declared more than once")]
    DuplicateSku(String),

    #[error("category id `{0}` is declared more than once")]
    DuplicateCategoryId(CategoryId),

    #[error("category slug `{0}` is declared more than once")]
    DuplicateCategorySlug(Slug),

    #[error("brand id `{0}` is declared more than once")]
    DuplicateBrandId(BrandId),
}

impl IntegrityViolation {
    /// Broken references (as opposed to uniqueness defects).
    pub fn is_referential(&self) -> bool {
        matches!(
            self,
            IntegrityViolation::UnknownCategory { .. } | IntegrityViolation::UnknownBrand { .. }
        )
    }
}

/// Outcome of [`check`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    violations: Vec<IntegrityViolation>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[IntegrityViolation] {
        &self.violations
    }

    pub fn referential(&self) -> impl Iterator<Item = &IntegrityViolation> {
        self.violations.iter().filter(|v| v.is_referential())
    }

    pub fn has_referential(&self) -> bool {
        self.referential().next().is_some()
    }
}

/// Keys that occur more than once, each reported once, in order of first repeat.
fn duplicate_keys<'a, T, K>(items: &'a [T], key: impl Fn(&'a T) -> &'a K) -> Vec<&'a K>
where
    K: Eq + Hash + ?Sized,
{
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        let k = key(item);
        if !seen.insert(k) && reported.insert(k) {
            out.push(k);
        }
    }
    out
}

fn duplicate_ids<E: Entity>(items: &[E]) -> Vec<&E::Id> {
    duplicate_keys(items, E::id)
}

/// Validate referential integrity and uniqueness of a full dataset.
pub fn check(
    categories: &[CategoryDraft],
    brands: &[Brand],
    products: &[Product],
) -> IntegrityReport {
    let mut violations = Vec::new();

    let category_ids: HashSet<&CategoryId> = categories.iter().map(|c| &c.id).collect();
    let brand_ids: HashSet<&BrandId> = brands.iter().map(|b| b.id()).collect();

    for product in products {
        if !category_ids.contains(product.category_id()) {
            violations.push(IntegrityViolation::UnknownCategory {
                product: product.id().clone(),
                category: product.category_id().clone(),
            });
        }
        if !brand_ids.contains(product.brand_id()) {
            violations.push(IntegrityViolation::UnknownBrand {
                product: product.id().clone(),
                brand: product.brand_id().clone(),
            });
        }
    }

    violations.extend(
        duplicate_ids(products)
            .into_iter()
            .map(|id| IntegrityViolation::DuplicateProductId(id.clone())),
    );
    violations.extend(
        duplicate_keys(products, Product::slug)
            .into_iter()
            .map(|slug| IntegrityViolation::DuplicateProductSlug(slug.clone())),
    );
    violations.extend(
        duplicate_keys(products, |p| p.sku())
            .into_iter()
            .map(|sku| IntegrityViolation::DuplicateSku(sku.to_string())),
    );
    violations.extend(
        duplicate_ids(categories)
            .into_iter()
            .map(|id| IntegrityViolation::DuplicateCategoryId(id.clone())),
    );
    violations.extend(
        duplicate_keys(categories, |c| &c.slug)
            .into_iter()
            .map(|slug| IntegrityViolation::DuplicateCategorySlug(slug.clone())),
    );
    violations.extend(
        duplicate_ids(brands)
            .into_iter()
            .map(|id| IntegrityViolation::DuplicateBrandId(id.clone())),
    );

    IntegrityReport { violations }
}
