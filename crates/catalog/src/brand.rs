use serde::{Deserialize, Serialize};

use hcn_core::{BrandId, Entity};

/// Manufacturer/label a product is sold under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    id: BrandId,
    name: String,
    logo: String,
}

impl Brand {
    pub fn new(id: BrandId, name: impl Into<String>, logo: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            logo: logo.into(),
        }
    }

    pub fn id_typed(&self) -> &BrandId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Logo image path (site-relative).
    pub fn logo(&self) -> &str {
        &self.logo
    }
}

impl Entity for Brand {
    type Id = BrandId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
