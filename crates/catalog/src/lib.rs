//! Catalog domain module.
//!
//! Categories, brands and products held in an immutable in-memory store, plus
//! the lookup/filter queries the storefront renders from. Pure data: no IO, no
//! HTTP, no storage.

pub mod brand;
pub mod category;
pub mod filter;
pub mod integrity;
pub mod product;
pub mod seed;
pub mod store;

pub use brand::Brand;
pub use category::{Category, CategoryDraft};
pub use filter::ProductFilter;
pub use integrity::{IntegrityReport, IntegrityViolation};
pub use product::{Product, ProductDraft, Specs};
pub use seed::{hcn_catalog, hcn_seed, MATERIALS, SIZES};
pub use store::{CatalogSeed, CatalogStore, DEFAULT_RELATED_LIMIT};
