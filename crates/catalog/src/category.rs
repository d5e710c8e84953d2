use serde::{Deserialize, Serialize};

use hcn_core::{CategoryId, Entity, Slug};

/// Category declaration, as written in the dataset.
///
/// Carries no product count: the count is derived by the store and is never
/// accepted as input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub id: CategoryId,
    pub slug: Slug,
    pub name: String,
    pub description: String,
    /// Emoji or inline-SVG placeholder.
    pub icon: String,
}

/// Category record owned by the catalog store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    id: CategoryId,
    slug: Slug,
    name: String,
    description: String,
    icon: String,
    product_count: usize,
}

impl Category {
    /// Only the store builds categories, once the product list is complete.
    pub(crate) fn from_draft(draft: CategoryDraft, product_count: usize) -> Self {
        Self {
            id: draft.id,
            slug: draft.slug,
            name: draft.name,
            description: draft.description,
            icon: draft.icon,
            product_count,
        }
    }

    pub fn id_typed(&self) -> &CategoryId {
        &self.id
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Number of products whose `category_id` is this category's id.
    pub fn product_count(&self) -> usize {
        self.product_count
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Entity for CategoryDraft {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
