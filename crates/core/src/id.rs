//! Strongly-typed identifiers used across the catalog.
//!
//! Catalog identifiers are human-readable strings (`"valvulas"`, `"prod-001"`),
//! so each newtype wraps a `String` and validates on construction. Serde goes
//! through the same validation (`try_from = "String"`).

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of a category (e.g. `"valvulas"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryId(String);

/// Identifier of a brand (e.g. `"nibco"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BrandId(String);

/// Identifier of a product (e.g. `"prod-001"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

/// URL-safe text identifier (`[a-z0-9-]`, no leading/trailing dash).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

fn check_plain_id(name: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_id(format!("{name}: cannot be empty")));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(DomainError::invalid_id(format!(
            "{name}: `{value}` contains whitespace"
        )));
    }
    Ok(())
}

fn check_slug(name: &str, value: &str) -> DomainResult<()> {
    check_plain_id(name, value)?;
    let allowed = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-';
    if !value.chars().all(allowed) {
        return Err(DomainError::invalid_id(format!(
            "{name}: `{value}` must only contain a-z, 0-9 and '-'"
        )));
    }
    if value.starts_with('-') || value.ends_with('-') {
        return Err(DomainError::invalid_id(format!(
            "{name}: `{value}` cannot start or end with '-'"
        )));
    }
    Ok(())
}

macro_rules! impl_string_id {
    ($t:ty, $name:literal, $check:path) => {
        impl $t {
            /// Create a validated identifier.
            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into();
                $check($name, &value)?;
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $t {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $t {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

impl_string_id!(CategoryId, "CategoryId", check_plain_id);
impl_string_id!(BrandId, "BrandId", check_plain_id);
impl_string_id!(ProductId, "ProductId", check_plain_id);
impl_string_id!(Slug, "Slug", check_slug);

impl Slug {
    /// Derive a slug from free text (see [`crate::slug::slugify`]).
    ///
    /// Fails when the text has no ASCII-alphanumeric content left after folding.
    pub fn from_text(text: &str) -> DomainResult<Self> {
        Self::new(crate::slug::slugify(text))
    }
}
