//! `hcn-core`: catalog foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no configuration).

pub mod entity;
pub mod error;
pub mod id;
pub mod slug;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{BrandId, CategoryId, ProductId, Slug};
pub use slug::slugify;
