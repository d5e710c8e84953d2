//! Deployment base path handling.
//!
//! The site may be served under a sub-path (e.g. `/Sitio-web/` on GitHub
//! Pages), so every internal link goes through [`BasePath::url`].

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use hcn_core::{DomainError, DomainResult};

/// Path prefix the site is deployed under. Always starts and ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BasePath(String);

impl BasePath {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !value.starts_with('/') || !value.ends_with('/') {
            return Err(DomainError::validation(format!(
                "base path `{value}` must start and end with '/'"
            )));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(DomainError::validation(format!(
                "base path `{value}` cannot contain whitespace"
            )));
        }
        Ok(Self(value))
    }

    /// Site served from the domain root.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefix an internal path with the base path.
    ///
    /// `"/"` and `""` map to the base itself; otherwise the path's leading `/`
    /// is dropped and the rest appended.
    pub fn url(&self, path: &str) -> String {
        if path.is_empty() || path == "/" {
            return self.0.clone();
        }
        format!("{}{}", self.0, path.strip_prefix('/').unwrap_or(path))
    }

    pub fn product(&self, slug: &str) -> String {
        self.url(&format!("productos/{slug}"))
    }

    pub fn category(&self, slug: &str) -> String {
        self.url(&format!("categorias/{slug}"))
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::root()
    }
}

impl core::fmt::Display for BasePath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for BasePath {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BasePath> for String {
    fn from(value: BasePath) -> Self {
        value.0
    }
}

impl FromStr for BasePath {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
