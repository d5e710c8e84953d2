use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use hcn_core::{BrandId, CategoryId, DomainError, Entity, ProductId, Slug};

/// Technical attributes of a product: attribute name → display value.
///
/// Order-insensitive; a `BTreeMap` keeps serialization deterministic.
pub type Specs = BTreeMap<String, String>;

/// Product declaration.
///
/// Required fields go through [`ProductDraft::new`]; everything else has a
/// builder method. Converting into a [`Product`] validates the draft, and the
/// same conversion runs when a product is deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub id: ProductId,
    pub slug: Slug,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    pub category_id: CategoryId,
    pub brand_id: BrandId,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub specs: Specs,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, rename = "new")]
    pub is_new: bool,
    pub sku: String,
}

impl ProductDraft {
    pub fn new(
        id: ProductId,
        slug: Slug,
        name: impl Into<String>,
        category_id: CategoryId,
        brand_id: BrandId,
        sku: impl Into<String>,
    ) -> Self {
        Self {
            id,
            slug,
            name: name.into(),
            description: String::new(),
            short_description: String::new(),
            category_id,
            brand_id,
            material: String::new(),
            size: String::new(),
            specs: Specs::new(),
            images: Vec::new(),
            featured: false,
            is_new: false,
            sku: sku.into(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn short_description(mut self, short_description: impl Into<String>) -> Self {
        self.short_description = short_description.into();
        self
    }

    pub fn material(mut self, material: impl Into<String>) -> Self {
        self.material = material.into();
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn specs<K, V>(mut self, specs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.specs = specs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    pub fn images<S: Into<String>>(mut self, images: impl IntoIterator<Item = S>) -> Self {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn new_arrival(mut self, is_new: bool) -> Self {
        self.is_new = is_new;
        self
    }

    /// Validate and freeze the draft.
    pub fn build(self) -> Result<Product, DomainError> {
        Product::try_from(self)
    }
}

/// Product record. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProductDraft")]
pub struct Product {
    id: ProductId,
    slug: Slug,
    name: String,
    description: String,
    short_description: String,
    category_id: CategoryId,
    brand_id: BrandId,
    material: String,
    size: String,
    specs: Specs,
    images: Vec<String>,
    featured: bool,
    #[serde(rename = "new")]
    is_new: bool,
    sku: String,
}

impl TryFrom<ProductDraft> for Product {
    type Error = DomainError;

    fn try_from(draft: ProductDraft) -> Result<Self, Self::Error> {
        if draft.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {}: name cannot be empty",
                draft.id
            )));
        }

        if draft.sku.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {}: SKU cannot be empty",
                draft.id
            )));
        }

        // SKU/slug uniqueness spans the whole catalog; the store's integrity
        // pass reports duplicates.

        Ok(Self {
            id: draft.id,
            slug: draft.slug,
            name: draft.name,
            description: draft.description,
            short_description: draft.short_description,
            category_id: draft.category_id,
            brand_id: draft.brand_id,
            material: draft.material,
            size: draft.size,
            specs: draft.specs,
            images: draft.images,
            featured: draft.featured,
            is_new: draft.is_new,
            sku: draft.sku,
        })
    }
}

impl Product {
    pub fn id_typed(&self) -> &ProductId {
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

    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    pub fn category_id(&self) -> &CategoryId {
        &self.category_id
    }

    pub fn brand_id(&self) -> &BrandId {
        &self.brand_id
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn specs(&self) -> &Specs {
        &self.specs
    }

    /// Image paths in display order.
    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn is_featured(&self) -> bool {
        self.featured
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft::new(
            ProductId::new("prod-001").unwrap(),
            Slug::new("valvula-de-bola-bronce-1-2-001").unwrap(),
            "Válvula de Bola",
            CategoryId::new("valvulas").unwrap(),
            BrandId::new("nibco").unwrap(),
            "HCN-0001",
        )
    }

    #[test]
    fn build_keeps_all_fields() {
        let product = draft()
            .material("Bronce")
            .size("1/2\"")
            .specs([("Material", "Bronce"), ("Medida", "1/2\"")])
            .images(["/a.svg", "/b.svg"])
            .featured(true)
            .build()
            .unwrap();

        assert_eq!(product.id(), &ProductId::new("prod-001").unwrap());
        assert_eq!(product.name(), "Válvula de Bola");
        assert_eq!(product.material(), "Bronce");
        assert_eq!(product.specs().get("Medida").map(String::as_str), Some("1/2\""));
        assert_eq!(product.images(), ["/a.svg", "/b.svg"]);
        assert!(product.is_featured());
        assert!(!product.is_new());
    }

    #[test]
    fn build_rejects_empty_name() {
        let mut d = draft();
        d.name = "   ".to_string();
        match d.build().unwrap_err() {
            DomainError::Validation(_) => {}
            other => panic!("Expected Validation error for empty name, got {other:?}"),
        }
    }

    #[test]
    fn build_rejects_empty_sku() {
        let mut d = draft();
        d.sku = String::new();
        match d.build().unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("SKU")),
            other => panic!("Expected Validation error for empty SKU, got {other:?}"),
        }
    }

    #[test]
    fn flags_are_independent() {
        let both = draft().featured(true).new_arrival(true).build().unwrap();
        assert!(both.is_featured() && both.is_new());

        let neither = draft().build().unwrap();
        assert!(!neither.is_featured() && !neither.is_new());
    }

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let product: Product = serde_json::from_str(
            r#"{
                "id": "prod-120",
                "slug": "cartucho-de-repuesto-polietileno-10-120",
                "name": "Cartucho de Repuesto",
                "categoryId": "filtros",
                "brandId": "rotoplas",
                "material": "Polietileno",
                "size": "10\"",
                "new": true,
                "sku": "HCN-0120"
            }"#,
        )
        .unwrap();

        assert_eq!(product.category_id(), &CategoryId::new("filtros").unwrap());
        assert!(product.is_new());
        assert!(!product.is_featured());
        assert!(product.images().is_empty());
        assert!(product.specs().is_empty());
    }

    #[test]
    fn deserialization_validates_like_build() {
        let err = serde_json::from_str::<Product>(
            r#"{"id":"prod-1","slug":"x-1","name":"","categoryId":"c","brandId":"b","sku":"S"}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn serializes_new_flag_under_original_name() {
        let product = draft().new_arrival(true).build().unwrap();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["new"], true);
        assert_eq!(json["categoryId"], "valvulas");
        assert_eq!(json["shortDescription"], "");
    }
}
